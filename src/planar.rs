use {
	crate::{
		error::{Error, Result},
		quantize::IndexBuffer,
		PIXELS_PER_BYTE, PLANE_COUNT,
	},
	log::trace,
};

/*
	Planar layout :

	plane p holds bit p of every pixel's index, 8 pixels per byte,
	leftmost pixel in the most significant bit. The four planes are
	stored back to back, plane 0 first, with nothing in between.
*/

/// Four concatenated bit planes of `planeSize` bytes each.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaneBuffer {
	width: usize,
	height: usize,
	planeSize: usize,
	data: Vec<u8>,
}

impl PlaneBuffer {
	#[inline]
	pub fn width(&self) -> usize {
		self.width
	}

	#[inline]
	pub fn height(&self) -> usize {
		self.height
	}

	#[inline]
	pub fn planeSize(&self) -> usize {
		self.planeSize
	}

	pub fn plane(&self, plane: usize) -> &[u8] {
		&self.data[plane * self.planeSize..][..self.planeSize]
	}

	#[inline]
	pub fn as_bytes(&self) -> &[u8] {
		&self.data
	}

	#[inline]
	pub fn into_bytes(self) -> Vec<u8> {
		self.data
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.data.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}
}

impl AsRef<[u8]> for PlaneBuffer {
	fn as_ref(&self) -> &[u8] {
		&self.data
	}
}

#[inline]
pub fn planeSize(width: usize, height: usize) -> usize {
	width * height / PIXELS_PER_BYTE
}

pub fn checkWidth(width: usize) -> Result<()> {
	if width % PIXELS_PER_BYTE == 0 {
		Ok(())
	} else {
		Err(Error::WidthNotMultipleOf8 { width })
	}
}

fn checkLength(expected: usize, actual: usize) -> Result<()> {
	if expected == actual {
		Ok(())
	} else {
		Err(Error::BufferLength { expected, actual })
	}
}

fn zeroed(len: usize) -> Result<Vec<u8>> {
	let mut data = Vec::new();
	data.try_reserve_exact(len).map_err(|_| Error::Allocation { bytes: len })?;
	data.resize(len, 0);
	Ok(data)
}

pub fn pack(indexBuffer: &IndexBuffer) -> Result<PlaneBuffer> {
	let &IndexBuffer { width, height, ref indices } = indexBuffer;
	checkWidth(width)?;
	checkLength(width * height, indices.len())?;
	let planeSize = planeSize(width, height);
	let mut data = zeroed(PLANE_COUNT * planeSize)?;
	for y in 0..height {
		for x in 0..width {
			let n = y * width + x;
			let (index, byteOffset, bit) = (indices[n] & 0xF, n / PIXELS_PER_BYTE, 7 - x % PIXELS_PER_BYTE);
			for plane in 0..PLANE_COUNT {
				if index >> plane & 1 != 0 {
					data[plane * planeSize + byteOffset] |= 1 << bit;
				}
			}
		}
	}
	trace!("packed {width}x{height} into {PLANE_COUNT} planes of {planeSize} bytes");
	Ok(PlaneBuffer { width, height, planeSize, data })
}

/// Inverse of [`pack`]: gathers the four plane bits of every pixel back into an index.
pub fn unpack(bytes: &[u8], width: usize, height: usize) -> Result<IndexBuffer> {
	checkWidth(width)?;
	let planeSize = planeSize(width, height);
	checkLength(PLANE_COUNT * planeSize, bytes.len())?;
	let mut indices = Vec::with_capacity(width * height);
	for y in 0..height {
		for x in 0..width {
			let n = y * width + x;
			let (byteOffset, bit) = (n / PIXELS_PER_BYTE, 7 - x % PIXELS_PER_BYTE);
			let mut index = 0;
			for plane in 0..PLANE_COUNT {
				index |= (bytes[plane * planeSize + byteOffset] >> bit & 1) << plane;
			}
			indices.push(index);
		}
	}
	Ok(IndexBuffer { width, height, indices })
}

/// [`unpack`] with the height taken from the length of `bytes`, which must hold
/// at least one whole row of all four planes.
pub fn unpackRows(bytes: &[u8], width: usize) -> Result<IndexBuffer> {
	checkWidth(width)?;
	let rowSize = PLANE_COUNT * width / PIXELS_PER_BYTE;
	if rowSize == 0 || bytes.is_empty() {
		return Err(Error::BufferLength { expected: rowSize.max(1), actual: bytes.len() });
	}
	if bytes.len() % rowSize != 0 {
		let expected = (bytes.len() / rowSize + 1) * rowSize;
		return Err(Error::BufferLength { expected, actual: bytes.len() });
	}
	unpack(bytes, width, bytes.len() / rowSize)
}
