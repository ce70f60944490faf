use image::{Rgb,RgbImage};
use ndarray::ArrayView3;

use crate::common::*;

pub enum Colors {
    Rgb
}

pub fn save_image(path:&str,img:ArrayView3<u8>,colors:Colors)->Res<()> {
    let (ny,nx,nc) = img.dim();
    match colors {
	Colors::Rgb => {
	    if nc != 3 {
		return Err(error(&format!("Expected 3 channels, got {}",nc)));
	    }
	    let mut out = RgbImage::new(nx as u32,ny as u32);
	    for iy in 0..ny {
		for ix in 0..nx {
		    out.put_pixel(ix as u32,iy as u32,
				  Rgb([img[[iy,ix,0]],
				       img[[iy,ix,1]],
				       img[[iy,ix,2]]]));
		}
	    }
	    out.save(path)?;
	}
    }
    Ok(())
}
