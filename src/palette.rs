use {
	crate::{
		error::{Error, Result},
		RGB_SIZE,
	},
	glam::IVec3,
};

pub const PALETTE_LEN: usize = 16;
pub const PNG_PAL_LEN: usize = PALETTE_LEN * RGB_SIZE;

pub type Rgb = [u8; RGB_SIZE];

/// Sixteen colors addressed by a 4-bit index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette([Rgb; PALETTE_LEN]);

/// The standard IBM EGA palette in 8-bit DAC intensities.
pub const EGA: Palette = Palette([
	[0x00, 0x00, 0x00], // black
	[0x00, 0x00, 0xAA], // blue
	[0x00, 0xAA, 0x00], // green
	[0x00, 0xAA, 0xAA], // cyan
	[0xAA, 0x00, 0x00], // red
	[0xAA, 0x00, 0xAA], // magenta
	[0xAA, 0x55, 0x00], // brown
	[0xAA, 0xAA, 0xAA], // light grey
	[0x55, 0x55, 0x55], // dark grey
	[0x55, 0x55, 0xFF], // bright blue
	[0x55, 0xFF, 0x55], // bright green
	[0x55, 0xFF, 0xFF], // bright cyan
	[0xFF, 0x55, 0x55], // bright red
	[0xFF, 0x55, 0xFF], // bright magenta
	[0xFF, 0xFF, 0x55], // yellow
	[0xFF, 0xFF, 0xFF], // white
]);

impl Palette {
	pub const fn new(colors: [Rgb; PALETTE_LEN]) -> Palette {
		Palette(colors)
	}

	pub fn fromSlice(colors: &[Rgb]) -> Result<Palette> {
		<[Rgb; PALETTE_LEN]>::try_from(colors)
			.map(Palette)
			.map_err(|_| Error::PaletteLength { len: colors.len() })
	}

	#[inline]
	pub fn colors(&self) -> &[Rgb; PALETTE_LEN] {
		&self.0
	}

	/// Only the low nibble of `index` is used.
	#[inline]
	pub fn color(&self, index: u8) -> Rgb {
		self.0[(index & 0xF) as usize]
	}

	/// Flat `r, g, b, r, g, b, ...` bytes as a PNG `PLTE` chunk wants them.
	pub fn pngPAL(&self) -> [u8; PNG_PAL_LEN] {
		let mut pngPAL = [0; PNG_PAL_LEN];
		for (slot, color) in pngPAL.chunks_exact_mut(RGB_SIZE).zip(self.0) {
			slot.copy_from_slice(&color);
		}
		pngPAL
	}
}

impl Default for Palette {
	fn default() -> Palette {
		EGA
	}
}

pub trait DotExt {
	fn lengthSquared(self) -> i32;
}

impl DotExt for IVec3 {
	#[inline(always)]
	fn lengthSquared(self) -> i32 {
		self.dot(self)
	}
}

#[inline(always)]
pub fn ivec3(rgb: Rgb) -> IVec3 {
	IVec3::from_array(rgb.map(i32::from))
}

/// `(r-r')² + (g-g')² + (b-b')²`
#[inline]
pub fn squaredDistance(a: Rgb, b: Rgb) -> u32 {
	(ivec3(a) - ivec3(b)).lengthSquared().unsigned_abs()
}
