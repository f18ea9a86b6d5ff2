#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

//! Conversion of true-color images into the 16-color planar EGA layout:
//! nearest-color quantization against a fixed palette, then packing of the
//! resulting indices into four 1-bit-per-pixel planes.

pub mod config;
pub mod error;
pub mod image;
pub mod output;
pub mod palette;
pub mod planar;
pub mod quantize;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};

use {
	image::Image,
	log::{debug, LevelFilter},
	palette::Palette,
	planar::PlaneBuffer,
	quantize::IndexBuffer,
	simplelog::{ColorChoice, TermLogger, TerminalMode},
	std::{fs::File, mem::ManuallyDrop},
};

pub const RGB_SIZE: usize = 3;
pub const RGBA_SIZE: usize = 4;
pub const PLANE_COUNT: usize = 4;
pub const PIXELS_PER_BYTE: usize = u8::BITS as _;

/// Quantizes `image` against `palette` once its width is known to be packable.
///
/// The width is checked before any pixel is touched.
pub fn quantizeForPlanes(palette: &Palette, image: &Image) -> Result<IndexBuffer> {
	planar::checkWidth(image.width())?;
	let indices = quantize::quantize(palette, image);
	debug!("quantized {} pixels", indices.indices.len());
	Ok(indices)
}

/// Quantizes `image` against `palette` and packs the indices into bit planes.
pub fn convert(palette: &Palette, image: &Image) -> Result<PlaneBuffer> {
	planar::pack(&quantizeForPlanes(palette, image)?)
}

/// Routes the `log` facade to stderr; `verbosity` counts `-v` flags.
pub fn initLogger(verbosity: u8) {
	let level = match verbosity {
		0 => LevelFilter::Info,
		1 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	};
	// fails only if a logger is already installed, which then keeps receiving the records
	if let Err(err) = TermLogger::init(level, simplelog::Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
		eprintln!("{err}");
	}
}

#[cfg(unix)]
pub fn stdoutRaw() -> ManuallyDrop<File> {
	use std::os::unix::io::FromRawFd;
	ManuallyDrop::new(unsafe { File::from_raw_fd(1) })
}

#[cfg(windows)]
pub fn stdoutRaw() -> ManuallyDrop<File> {
	use std::{
		io,
		os::windows::io::{AsRawHandle, FromRawHandle},
	};
	ManuallyDrop::new(unsafe { File::from_raw_handle(io::stdout().as_raw_handle()) })
}
