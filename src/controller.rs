use log::warn;

use crate::common::*;
use crate::catalog;
use crate::progress::Progress;
use crate::ticker::Ticker;
use crate::xorshift::Xorshift;

// The running demo state: the current generator, the plot history and
// the sampling schedule, with replace-on-change semantics.  The
// controller is the sole owner and sole mutator of all of it, so one
// sample or one selection change happens at a time by construction.

#[derive(Clone,Debug)]
pub struct Selection {
    pub seed:u32,
    pub triple:usize,
    pub step:usize,
    pub delay_ms:u64
}

// 16-bit halves of every draw, kept in plot order
pub struct History {
    pub lower:Vec<u16>,
    pub upper:Vec<u16>
}

impl History {
    pub fn new()->Self {
	History{ lower:Vec::new(),upper:Vec::new() }
    }

    pub fn push(&mut self,y:u32) {
	self.lower.push((y & 0xffff) as u16);
	self.upper.push(((y >> 16) & 0xffff) as u16);
    }

    pub fn clear(&mut self) {
	self.lower.clear();
	self.upper.clear();
    }

    pub fn len(&self)->usize {
	self.lower.len()
    }
}

pub struct Controller {
    selection:Selection,
    rng:Xorshift,
    history:History,
    ticker:Ticker,
    num_samples:usize,
    last_draw:Option<u32>
}

impl Controller {
    pub fn new(selection:Selection)->Res<Self> {
	let rng = Self::make_rng(&selection)?;
	let ticker = Ticker::new(selection.delay_ms);
	Ok(Controller{
	    selection,
	    rng,
	    history:History::new(),
	    ticker,
	    num_samples:0,
	    last_draw:None
	})
    }

    fn make_rng(selection:&Selection)->Res<Xorshift> {
	let triple = catalog::triple(selection.triple)?;
	let step = catalog::step(selection.step)?;
	if selection.seed == 0 {
	    warn!("Seed 0 produces a constant zero stream");
	}
	Ok(Xorshift::new(selection.seed,triple,step.f))
    }

    // Build the replacement generator before touching anything, so a
    // bad index leaves the old stream running
    fn replace(&mut self,selection:Selection)->Res<()> {
	let rng = Self::make_rng(&selection)?;
	self.rng = rng;
	self.selection = selection;
	self.history.clear();
	self.num_samples = 0;
	self.last_draw = None;
	self.ticker.reschedule(self.selection.delay_ms);
	Ok(())
    }

    pub fn set_seed(&mut self,seed:u32)->Res<()> {
	let mut selection = self.selection.clone();
	selection.seed = seed;
	self.replace(selection)
    }

    pub fn set_triple(&mut self,index:usize)->Res<()> {
	let mut selection = self.selection.clone();
	selection.triple = index;
	self.replace(selection)
    }

    pub fn set_step(&mut self,index:usize)->Res<()> {
	let mut selection = self.selection.clone();
	selection.step = index;
	self.replace(selection)
    }

    // Delay changes reschedule the ticker but keep the stream and its
    // history
    pub fn set_delay(&mut self,delay_ms:u64) {
	self.selection.delay_ms = delay_ms;
	self.ticker.reschedule(delay_ms);
    }

    pub fn sample(&mut self)->u32 {
	let y = self.rng.next();
	self.num_samples += 1;
	self.last_draw = Some(y);
	self.history.push(y);
	y
    }

    pub fn run(&mut self,n:usize) {
	let free_running = self.selection.delay_ms == 0;
	let mut progress = if free_running && n >= 100000 {
	    Some(Progress::new("sampling",n))
	} else {
	    None
	};
	for i in 0..n {
	    self.ticker.wait();
	    self.sample();
	    if let Some(p) = progress.as_mut() {
		p.update(i + 1);
	    }
	}
	if let Some(p) = progress.as_ref() {
	    p.finish();
	}
    }

    pub fn selection(&self)->&Selection {
	&self.selection
    }

    pub fn history(&self)->&History {
	&self.history
    }

    pub fn num_samples(&self)->usize {
	self.num_samples
    }

    pub fn last_draw(&self)->Option<u32> {
	self.last_draw
    }
}

#[cfg(test)]
fn test_selection()->Selection {
    Selection{ seed:1,triple:0,step:0,delay_ms:0 }
}

#[cfg(test)]
#[test]
fn test_history_splits_halves() {
    let mut ctl = Controller::new(test_selection()).unwrap();
    let y = ctl.sample();
    assert_eq!(y,3075);
    assert_eq!(ctl.history().lower,[(y & 0xffff) as u16]);
    assert_eq!(ctl.history().upper,[((y >> 16) & 0xffff) as u16]);
    assert_eq!(ctl.num_samples(),1);
    assert_eq!(ctl.last_draw(),Some(y));
}

#[cfg(test)]
#[test]
fn test_replace_on_change() {
    let mut ctl = Controller::new(test_selection()).unwrap();
    ctl.run(5);
    assert_eq!(ctl.num_samples(),5);
    ctl.set_seed(1).unwrap();
    assert_eq!(ctl.num_samples(),0);
    assert_eq!(ctl.history().len(),0);
    assert_eq!(ctl.last_draw(),None);
    // same selection restarts the same sequence
    assert_eq!(ctl.sample(),3075);
}

#[cfg(test)]
#[test]
fn test_bad_selection_leaves_stream_intact() {
    assert!(Controller::new(Selection{ seed:1,triple:99,step:0,delay_ms:0 }).is_err());
    let mut ctl = Controller::new(test_selection()).unwrap();
    ctl.sample();
    assert!(ctl.set_triple(81).is_err());
    assert!(ctl.set_step(8).is_err());
    // history kept, sequence continues where it left off
    assert_eq!(ctl.num_samples(),1);
    assert_eq!(ctl.sample(),5898885);
}

#[cfg(test)]
#[test]
fn test_delay_change_keeps_history() {
    let mut ctl = Controller::new(test_selection()).unwrap();
    ctl.run(3);
    ctl.set_delay(1);
    assert_eq!(ctl.num_samples(),3);
    assert_eq!(ctl.selection().delay_ms,1);
}
