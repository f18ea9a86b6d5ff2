use {
	std::{io, path::PathBuf},
	thiserror::Error,
};

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
	/// The input could not be opened at all (missing file, permissions).
	#[error("{path:?}: error loading file: {source}")]
	InputOpen {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The input was readable but is not a decodable PNG.
	#[error("{path:?}: error decoding PNG: {source}")]
	InputDecode {
		path: PathBuf,
		#[source]
		source: png::DecodingError,
	},

	/// A raw planar input whose contents do not fit the requested layout.
	#[error("{path:?}: {source}")]
	RawInput {
		path: PathBuf,
		#[source]
		source: Box<Error>,
	},

	#[error("width must be a multiple of 8 for planar conversion, got {width}")]
	WidthNotMultipleOf8 { width: usize },

	#[error("{width}x{height} does not fit a 16-bit picture table entry")]
	DimensionsTooLarge { width: usize, height: usize },

	#[error("buffer holds {actual} bytes, expected {expected}")]
	BufferLength { expected: usize, actual: usize },

	#[error("failed to allocate {bytes} bytes for the planar buffer")]
	Allocation { bytes: usize },

	#[error("{path:?}: error writing output: {source}")]
	OutputWrite {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("{path:?}: error reading config: {source}")]
	ConfigRead {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("{path:?}: {source}")]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("palette has {len} entries, exactly 16 are required")]
	PaletteLength { len: usize },

	#[error("{path:?}: error encoding preview PNG: {source}")]
	PreviewEncode {
		path: PathBuf,
		#[source]
		source: png::EncodingError,
	},
}
