//! Icon extraction utility.
//!
//! Provides three subcommands:
//! - `extract`: pull every icon out of an executable (or any blob) into a directory.
//! - `list`: show what an input contains without writing anything.
//! - `scan`: walk a directory and summarize how many icons each file yields.
//!
//! # Usage
//!
//! ```bash
//! # Extract icons next to the input, in `SHELL32_icons/`
//! cargo run --example icon_utils -- extract SHELL32.DLL
//!
//! # Convert synthesized .ico files to PNG while extracting
//! cargo run --example icon_utils -- extract MORICONS.DLL -o out/ --png
//!
//! # List icons with their MD5 digests as JSON
//! cargo run --example icon_utils -- list PROGMAN.EXE --json
//!
//! # Scan a directory tree
//! cargo run --example icon_utils -- scan C:/WINDOWS -r
//! ```

use std::{
	fs,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use iconeko_rs::prelude::{
	ContainerKind, DecodedIcon, Extraction, IconFormat, IconSource, extract_icons_from_path,
};
use md5::{Digest, Md5};
use serde::Serialize;
use walkdir::WalkDir;

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Extract(opts) => run_extract(opts),
		Command::List(opts) => run_list(opts),
		Command::Scan(opts) => run_scan(opts),
	}
}

#[derive(Parser)]
#[command(name = "icon_utils")]
#[command(author = "iconeko-rs project")]
#[command(version)]
#[command(about = "Extract icons from PE/NE executables or rip them from raw data", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Extract every icon to a directory
	Extract(ExtractArgs),
	/// List the icons found in a file
	List(ListArgs),
	/// Summarize icon counts for every file under a directory
	Scan(ScanArgs),
}

#[derive(Args)]
struct ExtractArgs {
	/// Input file
	#[arg(value_name = "INPUT")]
	input: PathBuf,

	/// Output directory (defaults to `<input>_icons/`)
	#[arg(short, long, value_name = "OUTPUT_DIR")]
	output: Option<PathBuf>,

	/// Re-encode synthesized .ico images as PNG
	#[arg(long, default_value_t = false)]
	png: bool,
}

#[derive(Args)]
struct ListArgs {
	/// Input file
	#[arg(value_name = "INPUT")]
	input: PathBuf,

	/// Print a JSON report instead of a table
	#[arg(long, default_value_t = false)]
	json: bool,
}

#[derive(Args)]
struct ScanArgs {
	/// Directory to scan
	#[arg(value_name = "DIR")]
	root: PathBuf,

	/// Recurse into sub-directories
	#[arg(short, long, default_value_t = false)]
	recursive: bool,

	/// Only report files with at least one icon
	#[arg(short = 'i', long, default_value_t = false)]
	icons_only: bool,

	/// Print a JSON report instead of a table
	#[arg(long, default_value_t = false)]
	json: bool,
}

/// Per-icon details for `list`
#[derive(Debug, Serialize)]
struct IconReport {
	index: usize,
	format: IconFormat,
	size: usize,
	width: Option<u32>,
	height: Option<u32>,
	bit_count: Option<u16>,
	md5: String,
}

/// Per-file details for `list` and `scan`
#[derive(Debug, Serialize)]
struct FileReport {
	path: PathBuf,
	container: ContainerKind,
	source: IconSource,
	icons: Vec<IconReport>,
}

impl FileReport {
	fn new(path: &Path, extraction: &Extraction) -> Self {
		Self {
			path: path.to_path_buf(),
			container: extraction.container,
			source: extraction.source,
			icons: extraction
				.icons
				.iter()
				.enumerate()
				.map(|(index, icon)| icon_report(index, icon))
				.collect(),
		}
	}
}

fn icon_report(index: usize, icon: &DecodedIcon) -> IconReport {
	let entry = icon.dir_entry();
	// 0 in a directory byte means 256
	let side = |byte: u8| {
		if byte == 0 {
			256
		} else {
			u32::from(byte)
		}
	};

	IconReport {
		index,
		format: icon.format(),
		size: icon.len(),
		width: entry.map(|e| side(e.width)),
		height: entry.map(|e| side(e.height)),
		bit_count: entry.map(|e| e.bit_count),
		md5: hex::encode(Md5::digest(icon.bytes())),
	}
}

fn run_extract(opts: ExtractArgs) -> Result<()> {
	let extraction = extract_icons_from_path(&opts.input)
		.with_context(|| format!("Failed to read {}", opts.input.display()))?;

	let stem = opts
		.input
		.file_stem()
		.map(|s| s.to_string_lossy().into_owned())
		.unwrap_or_else(|| "icons".to_string());
	let output_dir = opts.output.unwrap_or_else(|| opts.input.with_file_name(format!("{stem}_icons")));

	println!("Input:     {}", opts.input.display());
	println!("Container: {}", extraction.container);
	println!("Source:    {:?}", extraction.source);

	if extraction.is_empty() {
		println!("No icons found");
		return Ok(());
	}

	fs::create_dir_all(&output_dir)
		.with_context(|| format!("Failed to create {}", output_dir.display()))?;

	for (index, icon) in extraction.icons.iter().enumerate() {
		let path = if opts.png && icon.format() == IconFormat::SynthesizedIcon {
			let path = output_dir.join(format!("{stem}_{index:03}.png"));
			convert_to_png(icon, &path)?;
			path
		} else {
			let path = output_dir.join(format!("{stem}_{index:03}.{}", icon.extension()));
			fs::write(&path, icon.bytes())
				.with_context(|| format!("Failed to write {}", path.display()))?;
			path
		};
		println!("  {:3}: {:4} {:8} bytes -> {}", index, icon.format(), icon.len(), path.display());
	}

	println!("Extracted {} icon(s) to {}", extraction.icons.len(), output_dir.display());
	Ok(())
}

fn convert_to_png(icon: &DecodedIcon, path: &Path) -> Result<()> {
	let image = image::load_from_memory_with_format(icon.bytes(), image::ImageFormat::Ico)
		.context("Failed to decode synthesized icon")?;
	image.save_with_format(path, image::ImageFormat::Png)
		.with_context(|| format!("Failed to write {}", path.display()))?;
	Ok(())
}

fn run_list(opts: ListArgs) -> Result<()> {
	let extraction = extract_icons_from_path(&opts.input)
		.with_context(|| format!("Failed to read {}", opts.input.display()))?;
	let report = FileReport::new(&opts.input, &extraction);

	if opts.json {
		println!("{}", serde_json::to_string_pretty(&report)?);
		return Ok(());
	}

	println!("{} ({}, {:?})", report.path.display(), report.container, report.source);
	println!("{:>5}  {:<6} {:>8}  {:>9}  {:>3}  MD5", "Index", "Format", "Bytes", "Size", "BPP");
	for icon in &report.icons {
		let dimensions = match (icon.width, icon.height) {
			(Some(w), Some(h)) => format!("{w}x{h}"),
			_ => "-".to_string(),
		};
		let bpp = icon.bit_count.map_or_else(|| "-".to_string(), |b| b.to_string());
		println!(
			"{:>5}  {:<6} {:>8}  {:>9}  {:>3}  {}",
			icon.index, icon.format, icon.size, dimensions, bpp, icon.md5
		);
	}
	Ok(())
}

fn run_scan(opts: ScanArgs) -> Result<()> {
	if !opts.root.is_dir() {
		bail!("{} is not a directory", opts.root.display());
	}

	let max_depth = if opts.recursive {
		usize::MAX
	} else {
		1
	};

	let mut reports = Vec::new();
	let walker =
		WalkDir::new(&opts.root).max_depth(max_depth).follow_links(false).sort_by_file_name();
	for entry in walker {
		let entry = match entry {
			Ok(entry) => entry,
			Err(err) => {
				log::warn!("{err}");
				continue;
			}
		};
		if !entry.file_type().is_file() {
			continue;
		}

		match extract_icons_from_path(entry.path()) {
			Ok(extraction) => {
				if opts.icons_only && extraction.is_empty() {
					continue;
				}
				reports.push(FileReport::new(entry.path(), &extraction));
			}
			Err(err) => log::warn!("Skipping {}: {err}", entry.path().display()),
		}
	}

	if opts.json {
		println!("{}", serde_json::to_string_pretty(&reports)?);
		return Ok(());
	}

	let mut total = 0;
	for report in &reports {
		total += report.icons.len();
		println!(
			"{:4} {:<13} {:<10} {}",
			report.icons.len(),
			report.container.to_string(),
			format!("{:?}", report.source),
			report.path.display()
		);
	}
	println!("{} file(s), {} icon(s)", reports.len(), total);
	Ok(())
}
