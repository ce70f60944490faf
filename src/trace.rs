#![allow(dead_code)]

mod catalog;
mod common;
mod xorshift;

use pico_args::Arguments;

use common::*;
use xorshift::Xorshift;

fn main()->Res<()> {
    let mut args = Arguments::from_env();
    let seed : u32 = args.opt_value_from_str("--seed")?.unwrap_or(1);
    let itriple : usize = args.opt_value_from_str("--triple")?.unwrap_or(0);
    let istep : usize = args.opt_value_from_str("--step")?.unwrap_or(0);
    let count : usize = args.opt_value_from_str("--count")?.unwrap_or(10);

    let triple = catalog::triple(itriple)?;
    let step = catalog::step(istep)?;
    println!("Triple {} = ({},{},{}), step {} = {}, seed {}",
	     itriple,triple.a,triple.b,triple.c,istep,step.label,seed);
    println!("{:>4} {:>10} {:>8} {:>5} {:>5}","i","y","hex","low","high");
    let mut rng = Xorshift::new(seed,triple,step.f);
    for i in 0..count {
	let y = rng.next();
	println!("{:4} {:10} {:08x} {:5} {:5}",i,y,y,y & 0xffff,(y >> 16) & 0xffff);
    }
    Ok(())
}
