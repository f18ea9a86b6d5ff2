use {
	crate::{image::Image, palette::Rgb, RGB_SIZE},
	log::LevelFilter,
	png::ColorType,
	simplelog::{Config, TestLogger},
	std::sync::Once,
};

mod output;
mod palette;

static START: Once = Once::new();

fn init_logger_for_test() {
	START.call_once(|| TestLogger::init(LevelFilter::Trace, Config::default()).unwrap());
}

pub fn init() {
	init_logger_for_test();
}

pub const BLACK: Rgb = [0x00, 0x00, 0x00];
pub const WHITE: Rgb = [0xFF, 0xFF, 0xFF];

pub fn rgbImage(width: usize, height: usize, pixels: &[Rgb]) -> Image {
	assert_eq!(pixels.len(), width * height);
	Image::fromRGB(width, height, pixels.concat()).unwrap()
}

/// Solid `rgb` image, every pixel the same.
pub fn solidImage(width: usize, height: usize, rgb: Rgb) -> Image {
	Image::fromRGB(width, height, rgb.repeat(width * height)).unwrap()
}

pub fn encodePNG(width: u32, height: u32, color: ColorType, data: &[u8]) -> Vec<u8> {
	let mut bytes = Vec::new();
	{
		let mut png = png::Encoder::new(&mut bytes, width, height);
		png.set_color(color);
		png.write_header().unwrap().write_image_data(data).unwrap();
	}
	bytes
}

pub fn checkerboard(width: usize, height: usize) -> Vec<u8> {
	let mut data = Vec::with_capacity(width * height * RGB_SIZE);
	for y in 0..height {
		for x in 0..width {
			data.extend_from_slice(if (x + y) % 2 == 0 { &BLACK[..] } else { &WHITE[..] });
		}
	}
	data
}
