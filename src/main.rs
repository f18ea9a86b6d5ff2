#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	clap::Parser,
	const_format::formatcp,
	egaify::{
		config, initLogger,
		image::Image,
		output::{self, Staged, STDOUT_PATH},
		palette::PALETTE_LEN,
		planar, quantizeForPlanes, Result, PLANE_COUNT,
	},
	log::{debug, error, info},
	std::{path::PathBuf, process::ExitCode},
};

const ABOUT: &str =
	formatcp!("Converts a PNG into {} concatenated {}-color EGA bit planes", PLANE_COUNT, PALETTE_LEN);

#[derive(Parser)]
#[clap(version, about = ABOUT)]
struct Args {
	/// PNG image to convert
	input: PathBuf,

	/// Raw planar output file, `-` for stdout
	output: PathBuf,

	/// TOML file overriding the built-in palette
	#[clap(short, long)]
	config: Option<PathBuf>,

	/// Also write the width/height picture table entry (two LE16 words)
	#[clap(long)]
	pictable: Option<PathBuf>,

	/// Also write the quantized image as an indexed PNG
	#[clap(long)]
	preview: Option<PathBuf>,

	/// More logging; repeat for trace output
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
	let palette = config::loadPalette(args.config.as_deref())?;
	let image = Image::load(input)?;
	let (width, height) = (image.width(), image.height());

	let indices = quantizeForPlanes(&palette, &image)?;
	drop(image);
	let picTable = match &args.pictable {
		Some(path) => Some((path, output::picTableEntry(width, height)?)),
		None => None,
	};
	let preview = match &args.preview {
		Some(path) => Some((path, output::encodePreview(path, &palette, &indices)?)),
		None => None,
	};
	let planes = planar::pack(&indices)?;
	drop(indices);
	debug!("{} bytes per plane", planes.planeSize());

	let mut staged = Staged::new();
	let written = staged.stage(outputPath, planes.as_bytes())?;
	if let Some((path, entry)) = &picTable {
		staged.stage(path, entry)?;
	}
	if let Some((path, pngBytes)) = &preview {
		staged.stage(path, pngBytes)?;
	}
	staged.commit()?;

	let message = format!(
		"Wrote {written} bytes of planar EGA data to {} (width={width} height={height})",
		outputPath.display()
	);
	if outputPath.as_os_str() == STDOUT_PATH {
		info!("{message}");
	} else {
		println!("{message}");
	}
	Ok(())
}
