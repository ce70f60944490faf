use serde::{Serialize,Deserialize};
use std::{
    fs::File,
    path::Path
};

use crate::common::*;

#[derive(Clone,Serialize,Deserialize,Debug)]
pub struct Config {
    pub seed:u32,
    pub triple:usize,
    pub step:usize,
    pub samples:usize,
    pub delay:u64,
    pub output:String,
    pub size:usize
}

impl Default for Config {
    fn default()->Self {
	Config{
	    seed:1,
	    triple:0,
	    step:0,
	    samples:2000,
	    delay:0,
	    output:"xorshift.png".to_string(),
	    size:512
	}
    }
}

pub trait Loadable {
    fn load<P:AsRef<Path>>(path:P)->Res<Self>
    where Self:Sized,for<'a> Self:Deserialize<'a> {
	let fd = File::open(path)?;
	let this : Self = ron::de::from_reader(fd)?;
	Ok(this)
    }
}

impl Loadable for Config { }
