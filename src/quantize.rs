use crate::{
	image::Image,
	palette::{squaredDistance, Palette, Rgb},
};

/// One palette index per pixel, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexBuffer {
	pub width: usize,
	pub height: usize,
	pub indices: Vec<u8>,
}

/// Index of the palette entry closest to `rgb` in squared RGB distance.
///
/// Entries are scanned from 0 upwards and only a strictly smaller distance
/// replaces the running best, so among equidistant entries the lowest index
/// wins.
pub fn nearestIndex(palette: &Palette, rgb: Rgb) -> u8 {
	let (mut nearestSquaredDist, mut nearestI) = (u32::MAX, 0);
	for (i, &palColor) in palette.colors().iter().enumerate() {
		let squaredDist = squaredDistance(rgb, palColor);
		if squaredDist < nearestSquaredDist {
			nearestSquaredDist = squaredDist;
			nearestI = i as _;
		}
	}
	nearestI
}

pub fn quantize(palette: &Palette, image: &Image) -> IndexBuffer {
	let (width, height) = (image.width(), image.height());
	let indices = image.pixels().map(|rgb| nearestIndex(palette, rgb)).collect();
	IndexBuffer { width, height, indices }
}
