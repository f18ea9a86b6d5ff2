use {
	crate::{
		error::{Error, Result},
		palette::Rgb,
		RGBA_SIZE, RGB_SIZE,
	},
	log::debug,
	png::{ColorType, Transformations},
	std::{
		fs::File,
		io::{self, BufReader, Read},
		path::Path,
	},
};

/// Decoded 8-bit pixels, row-major. `channels` is 3 (RGB) or 4 (RGBA);
/// alpha is carried along but never looked at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
	width: usize,
	height: usize,
	channels: usize,
	data: Vec<u8>,
}

impl Image {
	pub fn fromRGB(width: usize, height: usize, data: Vec<u8>) -> Result<Image> {
		Image::fromChannels(width, height, RGB_SIZE, data)
	}

	pub fn fromRGBA(width: usize, height: usize, data: Vec<u8>) -> Result<Image> {
		Image::fromChannels(width, height, RGBA_SIZE, data)
	}

	fn fromChannels(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Result<Image> {
		let expected = width * height * channels;
		if data.len() != expected {
			return Err(Error::BufferLength { expected, actual: data.len() });
		}
		Ok(Image { width, height, channels, data })
	}

	/// Opens and decodes a PNG file. Failing to open and failing to decode are
	/// reported as different errors.
	pub fn load(path: &Path) -> Result<Image> {
		let file = File::open(path).map_err(|source| Error::InputOpen { path: path.to_owned(), source })?;
		let image = Image::fromPNG(BufReader::new(file))
			.map_err(|source| Error::InputDecode { path: path.to_owned(), source })?;
		debug!("{path:?}: {}x{}, {} channels", image.width, image.height, image.channels);
		Ok(image)
	}

	/// Decodes any PNG color type into 8-bit RGB or RGBA. Palettes are expanded,
	/// 16-bit samples are stripped and grayscale is replicated into RGB.
	pub fn fromPNG<R: Read>(reader: R) -> Result<Image, png::DecodingError> {
		let mut decoder = png::Decoder::new(reader);
		decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
		let png = &mut decoder.read_info()?;
		let mut buffer = vec![0; png.output_buffer_size()];
		let frame = png.next_frame(&mut buffer)?;
		buffer.truncate(frame.buffer_size());
		let (width, height) = (frame.width as usize, frame.height as usize);
		let (channels, data) = match frame.color_type {
			ColorType::Rgb => (RGB_SIZE, buffer),
			ColorType::Rgba => (RGBA_SIZE, buffer),
			ColorType::Grayscale => (RGB_SIZE, buffer.iter().flat_map(|&luma| [luma; RGB_SIZE]).collect()),
			ColorType::GrayscaleAlpha => (
				RGBA_SIZE,
				buffer.chunks_exact(2).flat_map(|la| [la[0], la[0], la[0], la[1]]).collect(),
			),
			ColorType::Indexed => {
				return Err(io::Error::new(io::ErrorKind::InvalidData, "indexed color was not expanded").into())
			}
		};
		Ok(Image { width, height, channels, data })
	}

	#[inline]
	pub fn width(&self) -> usize {
		self.width
	}

	#[inline]
	pub fn height(&self) -> usize {
		self.height
	}

	#[inline]
	pub fn channels(&self) -> usize {
		self.channels
	}

	#[inline]
	pub fn data(&self) -> &[u8] {
		&self.data
	}

	/// RGB of every pixel in row-major order.
	pub fn pixels(&self) -> impl ExactSizeIterator<Item = Rgb> + '_ {
		self.data.chunks_exact(self.channels).map(|pixel| [pixel[0], pixel[1], pixel[2]])
	}
}
