use {
	crate::{
		error::{Error, Result},
		palette::Palette,
		quantize::IndexBuffer,
		stdoutRaw,
	},
	byteorder::{ByteOrder, LE},
	log::debug,
	png::ColorType,
	std::{
		io::{self, Write},
		path::{Path, PathBuf},
	},
	tempfile::NamedTempFile,
};

/// Output path that means "standard output".
pub const STDOUT_PATH: &str = "-";

/// Width and height as two little-endian words.
pub const PICTABLE_ENTRY_LEN: usize = 2 * 2;

/// Output files staged as temporary siblings of their destinations.
///
/// Nothing is visible at any destination until [`Staged::commit`]; dropping an
/// uncommitted `Staged` removes every temporary file. Bytes for
/// [`STDOUT_PATH`] are held back and written after the files are in place.
#[derive(Default)]
pub struct Staged {
	files: Vec<(PathBuf, NamedTempFile)>,
	stdout: Vec<u8>,
}

impl Staged {
	pub fn new() -> Staged {
		Staged::default()
	}

	/// Writes and syncs `bytes` into a temporary file next to `path`.
	pub fn stage(&mut self, path: &Path, bytes: &[u8]) -> Result<usize> {
		if path == Path::new(STDOUT_PATH) {
			self.stdout.extend_from_slice(bytes);
			return Ok(bytes.len());
		}
		let wrap = |source: io::Error| Error::OutputWrite { path: path.to_owned(), source };
		let dir = match path.parent() {
			Some(parent) if !parent.as_os_str().is_empty() => parent,
			_ => Path::new("."),
		};
		let mut file = NamedTempFile::new_in(dir).map_err(wrap)?;
		file.write_all(bytes).and_then(|()| file.as_file().sync_all()).map_err(wrap)?;
		self.files.push((path.to_owned(), file));
		Ok(bytes.len())
	}

	/// Renames every staged file over its destination, then flushes stdout.
	pub fn commit(self) -> Result<()> {
		for (path, file) in self.files {
			file.persist(&path).map_err(|err| Error::OutputWrite { path: path.clone(), source: err.error })?;
			debug!("{path:?}: committed");
		}
		if !self.stdout.is_empty() {
			let stdout = &mut stdoutRaw();
			stdout
				.write_all(&self.stdout)
				.and_then(|()| stdout.flush())
				.map_err(|source| Error::OutputWrite { path: PathBuf::from(STDOUT_PATH), source })?;
		}
		Ok(())
	}
}

/// Writes all of `bytes` to `path` or none of them, and returns how many were
/// written. [`STDOUT_PATH`] streams to stdout.
pub fn writeAtomically(path: &Path, bytes: &[u8]) -> Result<usize> {
	let mut staged = Staged::new();
	let written = staged.stage(path, bytes)?;
	staged.commit()?;
	Ok(written)
}

/// The picture table entry for a `width` x `height` picture.
pub fn picTableEntry(width: usize, height: usize) -> Result<[u8; PICTABLE_ENTRY_LEN]> {
	let tooLarge = |_| Error::DimensionsTooLarge { width, height };
	let (width16, height16) = (u16::try_from(width).map_err(tooLarge)?, u16::try_from(height).map_err(tooLarge)?);
	let mut entry = [0; PICTABLE_ENTRY_LEN];
	LE::write_u16(&mut entry[..2], width16);
	LE::write_u16(&mut entry[2..], height16);
	Ok(entry)
}

pub fn writePicTable(path: &Path, width: usize, height: usize) -> Result<usize> {
	writeAtomically(path, &picTableEntry(width, height)?)
}

/// Encodes `indices` as an 8-bit indexed PNG carrying `palette`.
pub fn encodePreview(path: &Path, palette: &Palette, indices: &IndexBuffer) -> Result<Vec<u8>> {
	let &IndexBuffer { width, height, ref indices } = indices;
	let tooLarge = |_| Error::DimensionsTooLarge { width, height };
	let (width32, height32) = (u32::try_from(width).map_err(tooLarge)?, u32::try_from(height).map_err(tooLarge)?);
	let wrap = |source: png::EncodingError| Error::PreviewEncode { path: path.to_owned(), source };
	let (pngPAL, mut pngBytes) = (palette.pngPAL(), Vec::new());
	{
		let mut png = png::Encoder::new(&mut pngBytes, width32, height32);
		png.set_color(ColorType::Indexed);
		png.set_palette(&pngPAL[..]);
		let mut writer = png.write_header().map_err(wrap)?;
		writer.write_image_data(indices).map_err(wrap)?;
		writer.finish().map_err(wrap)?;
	}
	Ok(pngBytes)
}

pub fn writePreview(path: &Path, palette: &Palette, indices: &IndexBuffer) -> Result<usize> {
	writeAtomically(path, &encodePreview(path, palette, indices)?)
}
