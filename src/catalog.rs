use crate::common::*;

// Full-period shift triples for 32-bit Xorshift, from Marsaglia,
// "Xorshift RNGs", https://www.jstatsoft.org/article/view/v008i14

#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub struct Triple {
    pub a:u32,
    pub b:u32,
    pub c:u32
}

pub static TRIPLES:[Triple;81] = [
    Triple{ a:1,b:3,c:10 }, Triple{ a:1,b:5,c:16 }, Triple{ a:1,b:5,c:19 },
    Triple{ a:1,b:9,c:29 }, Triple{ a:1,b:11,c:6 }, Triple{ a:1,b:11,c:16 },
    Triple{ a:1,b:19,c:3 }, Triple{ a:1,b:21,c:20 }, Triple{ a:1,b:27,c:27 },
    Triple{ a:2,b:5,c:15 }, Triple{ a:2,b:5,c:21 }, Triple{ a:2,b:7,c:7 },
    Triple{ a:2,b:7,c:9 }, Triple{ a:2,b:7,c:25 }, Triple{ a:2,b:9,c:15 },
    Triple{ a:2,b:15,c:17 }, Triple{ a:2,b:15,c:25 }, Triple{ a:2,b:21,c:9 },
    Triple{ a:3,b:1,c:14 }, Triple{ a:3,b:3,c:26 }, Triple{ a:3,b:3,c:28 },
    Triple{ a:3,b:3,c:29 }, Triple{ a:3,b:5,c:20 }, Triple{ a:3,b:5,c:22 },
    Triple{ a:3,b:5,c:25 }, Triple{ a:3,b:7,c:29 }, Triple{ a:3,b:13,c:7 },
    Triple{ a:3,b:23,c:25 }, Triple{ a:3,b:25,c:24 }, Triple{ a:3,b:27,c:11 },
    Triple{ a:4,b:3,c:17 }, Triple{ a:4,b:3,c:27 }, Triple{ a:4,b:5,c:15 },
    Triple{ a:5,b:3,c:21 }, Triple{ a:5,b:7,c:22 }, Triple{ a:5,b:9,c:7 },
    Triple{ a:5,b:9,c:28 }, Triple{ a:5,b:9,c:31 }, Triple{ a:5,b:13,c:6 },
    Triple{ a:5,b:15,c:17 }, Triple{ a:5,b:17,c:13 }, Triple{ a:5,b:21,c:12 },
    Triple{ a:5,b:27,c:8 }, Triple{ a:5,b:27,c:21 }, Triple{ a:5,b:27,c:25 },
    Triple{ a:5,b:27,c:28 }, Triple{ a:6,b:1,c:11 }, Triple{ a:6,b:3,c:17 },
    Triple{ a:6,b:17,c:9 }, Triple{ a:6,b:21,c:7 }, Triple{ a:6,b:21,c:13 },
    Triple{ a:7,b:1,c:9 }, Triple{ a:7,b:1,c:18 }, Triple{ a:7,b:1,c:25 },
    Triple{ a:7,b:13,c:25 }, Triple{ a:7,b:17,c:21 }, Triple{ a:7,b:25,c:12 },
    Triple{ a:7,b:25,c:20 }, Triple{ a:8,b:7,c:23 }, Triple{ a:8,b:9,c:23 },
    Triple{ a:9,b:5,c:1 }, Triple{ a:9,b:5,c:25 }, Triple{ a:9,b:11,c:19 },
    Triple{ a:9,b:21,c:16 }, Triple{ a:10,b:9,c:21 }, Triple{ a:10,b:9,c:25 },
    Triple{ a:11,b:7,c:12 }, Triple{ a:11,b:7,c:16 }, Triple{ a:11,b:17,c:13 },
    Triple{ a:11,b:21,c:13 }, Triple{ a:12,b:9,c:23 }, Triple{ a:13,b:3,c:17 },
    Triple{ a:13,b:3,c:27 }, Triple{ a:13,b:5,c:19 }, Triple{ a:13,b:17,c:15 },
    Triple{ a:14,b:1,c:15 }, Triple{ a:14,b:13,c:15 }, Triple{ a:15,b:1,c:29 },
    Triple{ a:17,b:15,c:20 }, Triple{ a:17,b:15,c:23 }, Triple{ a:17,b:15,c:26 },
];

pub type StepFn = fn(u32,u32,u32,u32)->u32;

pub struct Step {
    pub label:&'static str,
    pub f:StepFn
}

// The eight update orderings.  Each sub-step reads the value left by
// the previous sub-step, not the original y.

fn lrl_abc(mut y:u32,a:u32,b:u32,c:u32)->u32 { y^=y<<a; y^=y>>b; y^=y<<c; y }
fn lrl_cba(mut y:u32,a:u32,b:u32,c:u32)->u32 { y^=y<<c; y^=y>>b; y^=y<<a; y }
fn rlr_abc(mut y:u32,a:u32,b:u32,c:u32)->u32 { y^=y>>a; y^=y<<b; y^=y>>c; y }
fn rlr_cba(mut y:u32,a:u32,b:u32,c:u32)->u32 { y^=y>>c; y^=y<<b; y^=y>>a; y }
fn llr_acb(mut y:u32,a:u32,b:u32,c:u32)->u32 { y^=y<<a; y^=y<<c; y^=y>>b; y }
fn llr_cab(mut y:u32,a:u32,b:u32,c:u32)->u32 { y^=y<<c; y^=y<<a; y^=y>>b; y }
fn rrl_acb(mut y:u32,a:u32,b:u32,c:u32)->u32 { y^=y>>a; y^=y>>c; y^=y<<b; y }
fn rrl_cab(mut y:u32,a:u32,b:u32,c:u32)->u32 { y^=y>>c; y^=y>>a; y^=y<<b; y }

pub static STEPS:[Step;8] = [
    Step{ label:"y^=y<<a; y^=y>>b; y^=y<<c;", f:lrl_abc },
    Step{ label:"y^=y<<c; y^=y>>b; y^=y<<a;", f:lrl_cba },
    Step{ label:"y^=y>>a; y^=y<<b; y^=y>>c;", f:rlr_abc },
    Step{ label:"y^=y>>c; y^=y<<b; y^=y>>a;", f:rlr_cba },
    Step{ label:"y^=y<<a; y^=y<<c; y^=y>>b;", f:llr_acb },
    Step{ label:"y^=y<<c; y^=y<<a; y^=y>>b;", f:llr_cab },
    Step{ label:"y^=y>>a; y^=y>>c; y^=y<<b;", f:rrl_acb },
    Step{ label:"y^=y>>c; y^=y>>a; y^=y<<b;", f:rrl_cab },
];

pub fn triple(index:usize)->Res<Triple> {
    TRIPLES.get(index)
	.copied()
	.ok_or_else(|| error(&format!(
	    "Invalid triple index {} (catalog has {} entries)",
	    index,TRIPLES.len())))
}

pub fn step(index:usize)->Res<&'static Step> {
    STEPS.get(index)
	.ok_or_else(|| error(&format!(
	    "Invalid step index {} (catalog has {} orderings)",
	    index,STEPS.len())))
}

#[cfg(test)]
#[test]
fn test_catalog_entries() {
    assert_eq!(TRIPLES.len(),81);
    assert_eq!(STEPS.len(),8);
    for t in TRIPLES.iter() {
	for s in [t.a,t.b,t.c] {
	    assert!(1 <= s && s <= 31);
	}
    }
}

#[cfg(test)]
#[test]
fn test_catalog_lookup() {
    let t = triple(0).unwrap();
    assert_eq!(t,Triple{ a:1,b:3,c:10 });
    let t = triple(80).unwrap();
    assert_eq!(t,Triple{ a:17,b:15,c:26 });
    assert!(step(0).is_ok());
    assert!(step(7).is_ok());
}

#[cfg(test)]
#[test]
fn test_catalog_bounds() {
    assert!(triple(81).is_err());
    assert!(triple(96).is_err());
    assert!(triple(usize::MAX).is_err());
    assert!(step(8).is_err());
}
