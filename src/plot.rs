use ndarray::{Array2,Array3};

use crate::common::*;
use crate::controller::History;
use crate::ndarray_image;

// Scatter of lower half vs upper half on a square raster.
// Origin at bottom-left corner
// Thus
//
// ix = lower * (size - 1) / 0xffff
// iy = size - 1 - upper * (size - 1) / 0xffff

pub fn scatter(history:&History,size:usize)->Array3<u8> {
    let mut hits:Array2<u32> = Array2::zeros((size,size));
    for (&x,&y) in history.lower.iter().zip(history.upper.iter()) {
	let ix = x as usize * (size - 1) / 0xffff;
	let iy = size - 1 - y as usize * (size - 1) / 0xffff;
	hits[[iy,ix]] += 1;
    }
    Array3::from_shape_fn((size,size,3),|(iy,ix,_)| shade(hits[[iy,ix]]))
}

// Repeated hits darken a cell
fn shade(hits:u32)->u8 {
    let x = 255 - 96*hits as i64;
    x.max(0) as u8
}

pub fn save_scatter(history:&History,size:usize,path:&str)->Res<()> {
    if size < 2 {
	return Err(error(&format!("Plot size {} is too small",size)));
    }
    let img = scatter(history,size);
    ndarray_image::save_image(path,img.view(),ndarray_image::Colors::Rgb)
}

#[cfg(test)]
#[test]
fn test_scatter_marks_corners() {
    let mut history = History::new();
    history.push(0x00000000);          // lower 0, upper 0 -> bottom-left
    history.push(0xffffffff);          // lower max, upper max -> top-right
    let img = scatter(&history,64);
    assert_eq!(img.dim(),(64,64,3));
    assert!(img[[63,0,0]] < 255);
    assert!(img[[0,63,0]] < 255);
    // background stays white
    assert_eq!(img[[32,32,0]],255);
}

#[cfg(test)]
#[test]
fn test_scatter_accumulates() {
    let mut history = History::new();
    for _ in 0..2 {
	history.push(0);
    }
    let img = scatter(&history,16);
    let once = {
	let mut h = History::new();
	h.push(0);
	scatter(&h,16)
    };
    assert!(img[[15,0,0]] < once[[15,0,0]]);
}
