use crate::catalog::{Triple,StepFn};

// One running Xorshift stream.  The shift triple and the update
// ordering are fixed for the lifetime of the instance; changing a
// selection means constructing a new one.  A zero seed is accepted
// and produces a constant zero stream.

pub struct Xorshift {
    a:u32,
    b:u32,
    c:u32,
    step:StepFn,
    y:u32
}

impl Xorshift {
    pub fn new(seed:u32,triple:Triple,step:StepFn)->Self {
	let Triple{ a,b,c } = triple;
	Xorshift{ a,b,c,step,y:seed }
    }

    pub fn next(&mut self)->u32 {
	self.y = (self.step)(self.y,self.a,self.b,self.c);
	self.y
    }
}

#[cfg(test)]
use crate::catalog::{self,TRIPLES,STEPS};

#[cfg(test)]
fn take(seed:u32,itriple:usize,istep:usize,n:usize)->Vec<u32> {
    let triple = catalog::triple(itriple).unwrap();
    let step = catalog::step(istep).unwrap();
    let mut rng = Xorshift::new(seed,triple,step.f);
    (0..n).map(|_| rng.next()).collect()
}

#[cfg(test)]
#[test]
fn test_reference_traces() {
    // Recorded once from known-good runs, checked bit-for-bit
    assert_eq!(take(1,0,0,5),
	       [3075,5898885,3488497534,2316485042,1264294540]);
    assert_eq!(take(1,1,2,5),
	       [33,1553,42553,1986971,37638568]);
    assert_eq!(take(123456789,80,7,5),
	       [3758575289,2135309954,2144928062,3770662605,132828842]);
    assert_eq!(take(42,3,4,5),
	       [3227517054,10506370,3246391806,42025475,2815428582]);
}

#[cfg(test)]
#[test]
fn test_determinism() {
    for (itriple,istep,seed) in [(0,0,1),(17,3,0xdeadbeef),(80,6,2463534242)] {
	assert_eq!(take(seed,itriple,istep,100),
		   take(seed,itriple,istep,100));
    }
}

#[cfg(test)]
#[test]
fn test_zero_seed_is_degenerate() {
    for itriple in [0,40,80] {
	for istep in 0..STEPS.len() {
	    assert!(take(0,itriple,istep,10).iter().all(|&y| y == 0));
	}
    }
}

// Same update computed over u64 with an explicit 32-bit mask after
// every sub-step; agreement shows the u32 shifts carry no stray bits.
#[cfg(test)]
fn masked_step(y:u32,ops:&[(bool,u32)])->u32 {
    let mut y = y as u64;
    for &(left,s) in ops {
	let shifted = if left { (y << s) & 0xffffffff } else { y >> s };
	y = (y ^ shifted) & 0xffffffff;
    }
    y as u32
}

#[cfg(test)]
#[test]
fn test_all_parameterizations_match_masked_reference() {
    const L:bool = true;
    const R:bool = false;
    for (istep,step) in STEPS.iter().enumerate() {
	for triple in TRIPLES.iter() {
	    let Triple{ a,b,c } = *triple;
	    let ops = match istep {
		0 => [(L,a),(R,b),(L,c)],
		1 => [(L,c),(R,b),(L,a)],
		2 => [(R,a),(L,b),(R,c)],
		3 => [(R,c),(L,b),(R,a)],
		4 => [(L,a),(L,c),(R,b)],
		5 => [(L,c),(L,a),(R,b)],
		6 => [(R,a),(R,c),(L,b)],
		7 => [(R,c),(R,a),(L,b)],
		_ => unreachable!()
	    };
	    let mut rng = Xorshift::new(2463534242,*triple,step.f);
	    let mut y = 2463534242_u32;
	    for _ in 0..10 {
		y = masked_step(y,&ops);
		assert_eq!(rng.next(),y);
	    }
	}
    }
}

#[cfg(test)]
#[test]
fn test_period_prefix() {
    // (1,3,10) is full-period for the first ordering; the seed must
    // not reappear early in the cycle
    let triple = catalog::triple(0).unwrap();
    let step = catalog::step(0).unwrap();
    let mut rng = Xorshift::new(1,triple,step.f);
    for _ in 0..200000 {
	assert_ne!(rng.next(),1);
    }
}
