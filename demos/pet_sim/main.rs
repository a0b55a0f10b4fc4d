//! Headless pet simulation.
//!
//! Runs a [`PetSession`] against a simulated display timer and prints one JSON
//! object per rendered frame, which makes behaviors easy to diff or plot.
//!
//! # Configuration
//!
//! Settings are layered, later sources winning:
//!
//! ```text
//! Source                        Example
//! ----------------------------  -------------------------------------------
//! Built-in defaults             fps = 120, speed = 24, behavior = "chase"
//! TOML file (--config)          behavior = "orbit"
//!                               [bounds]
//!                               width = 608
//!                               height = 448
//! Environment (ICONEKO_ prefix) ICONEKO_SPEED=12, ICONEKO_BOUNDS__WIDTH=300
//! Command line flags            --behavior flee --seed 7
//! ```
//!
//! # Usage
//!
//! ```bash
//! # Ten seconds of orbiting, every 12th frame
//! cargo run --example pet_sim -- --behavior orbit --seconds 10 --every 12
//!
//! # Chase a pointer parked at (400, 300) with a fixed seed
//! cargo run --example pet_sim -- --pointer 400 300 --seed 42
//!
//! # Load settings from a file
//! cargo run --example pet_sim -- --config neko.toml
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use iconeko_rs::prelude::{BehaviorMode, PetConfig, PetSession, Point, SpriteTable, pet};

#[derive(Parser)]
#[command(name = "pet_sim")]
#[command(author = "iconeko-rs project")]
#[command(version)]
#[command(about = "Run the desktop pet simulation headless and print frames as JSON", long_about = None)]
struct Cli {
	/// TOML configuration file
	#[arg(short, long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Behavior override (chase, flee, random-walk, pacing, orbit)
	#[arg(short, long)]
	behavior: Option<BehaviorMode>,

	/// RNG seed override
	#[arg(short, long)]
	seed: Option<u64>,

	/// Simulated seconds to run
	#[arg(long, default_value_t = 5.0)]
	seconds: f64,

	/// Print only every Nth frame
	#[arg(short, long, default_value_t = 1)]
	every: usize,

	/// Fixed pointer position (anchor space)
	#[arg(short, long, num_args = 2, value_names = ["X", "Y"])]
	pointer: Option<Vec<f64>>,

	/// Cycle to the next behavior every N seconds
	#[arg(long, value_name = "SECONDS")]
	cycle: Option<f64>,
}

fn load_config(cli: &Cli) -> Result<PetConfig> {
	let mut builder = config::Config::builder();
	if let Some(path) = &cli.config {
		builder = builder.add_source(config::File::from(path.as_path()).required(true));
	}

	let mut config: PetConfig = builder
		.add_source(
			config::Environment::with_prefix("ICONEKO")
				.prefix_separator("_")
				.separator("__")
				.try_parsing(true),
		)
		.build()
		.context("Failed to load configuration")?
		.try_deserialize()
		.context("Invalid configuration")?;

	if let Some(behavior) = cli.behavior {
		config.behavior = behavior;
	}
	if cli.seed.is_some() {
		config.seed = cli.seed;
	}

	config.validate()?;
	Ok(config)
}

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let config = load_config(&cli)?;
	log::info!(
		"Simulating {}s at {} fps, {} ticks/s, bounds {}x{}",
		cli.seconds,
		config.fps,
		config.ticks_per_second,
		config.bounds.width,
		config.bounds.height
	);

	let sprites: SpriteTable<&str> = pet::SPRITE_NAMES.iter().map(|(name, _)| *name).collect();
	let mut session = PetSession::new(&config, sprites)?;
	if let Some(pointer) = cli.pointer.as_deref() {
		session.pointer_moved(Point::new(pointer[0], pointer[1]));
	}

	let frames = (cli.seconds * f64::from(config.fps)).max(0.0) as usize;
	let cycle_every = cli.cycle.map(|seconds| (seconds * f64::from(config.fps)).max(1.0) as usize);
	let every = cli.every.max(1);

	session.start();
	for index in 0..frames {
		if let Some(period) = cycle_every
			&& index > 0
			&& index % period == 0
		{
			session.cycle_behavior();
		}

		let Some(frame) = session.on_timer() else {
			break;
		};
		if index % every == 0 {
			let mut line = serde_json::to_value(frame)?;
			line["index"] = index.into();
			line["sprite"] = session.sprite().copied().unwrap_or_default().into();
			println!("{line}");
		}
	}

	let agent = session.teardown();
	log::info!("Finished at {:?} in state {}", agent.logical(), agent.state());
	Ok(())
}
