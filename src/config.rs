use {
	crate::{
		error::{Error, Result},
		palette::{Palette, Rgb, EGA},
	},
	core::str::FromStr,
	log::debug,
	serde::{Deserialize, Serialize},
	std::{fs, path::Path},
};

/// Optional TOML settings shared by the command line tools.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Replaces the built-in EGA colors; exactly 16 `[r, g, b]` triples.
	pub palette: Option<Vec<Rgb>>,
}

impl FromStr for Config {
	type Err = toml::de::Error;

	fn from_str(text: &str) -> Result<Config, toml::de::Error> {
		toml::from_str(text)
	}
}

impl Config {
	pub fn load(path: &Path) -> Result<Config> {
		let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead { path: path.to_owned(), source })?;
		text.parse::<Config>().map_err(|source| Error::ConfigParse { path: path.to_owned(), source })
	}

	pub fn palette(&self) -> Result<Palette> {
		match &self.palette {
			Some(colors) => Palette::fromSlice(colors),
			None => Ok(EGA),
		}
	}
}

/// The palette to convert against: from `path` if given, otherwise [`EGA`].
pub fn loadPalette(path: Option<&Path>) -> Result<Palette> {
	let Some(path) = path else {
		return Ok(EGA);
	};
	let palette = Config::load(path)?.palette()?;
	debug!("{path:?}: palette {:02X?}", palette.colors());
	Ok(palette)
}
