#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	clap::{value_parser, Parser},
	egaify::{config, initLogger, output, planar, Error, Result},
	log::{error, info},
	std::{fs, path::PathBuf, process::ExitCode},
};

/// Turns raw EGA bit planes back into an indexed PNG.
#[derive(Parser)]
#[clap(version)]
struct Args {
	/// Raw planar file, as written by egaify
	input: PathBuf,

	/// Width in pixels; the height follows from the file size
	#[clap(value_parser = value_parser!(u32).range(1..))]
	width: u32,

	/// Indexed PNG to write
	output: PathBuf,

	/// TOML file overriding the built-in palette
	#[clap(short, long)]
	config: Option<PathBuf>,

	#[clap(short, long, parse(from_occurrences))]
	verbose: u8,
}

fn main() -> ExitCode {
	let args = match Args::try_parse() {
		Ok(args) => args,
		Err(err) => {
			let _ = err.print();
			return if err.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
		}
	};
	initLogger(args.verbose);
	match run(&args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			error!("{err}");
			ExitCode::FAILURE
		}
	}
}

fn run(args: &Args) -> Result<()> {
	let Args { input, output: outputPath, .. } = args;
	let width = args.width as usize;
	planar::checkWidth(width)?;
	let palette = config::loadPalette(args.config.as_deref())?;
	let planes = fs::read(input).map_err(|source| Error::InputOpen { path: input.clone(), source })?;
	let indices = planar::unpackRows(&planes, width)
		.map_err(|err| Error::RawInput { path: input.clone(), source: Box::new(err) })?;
	let written = output::writePreview(outputPath, &palette, &indices)?;
	info!("{outputPath:?}: {width}x{}, {written} bytes", indices.height);
	Ok(())
}
