//! Simulation configuration and geometry.

use serde::{Deserialize, Serialize};

use super::{BehaviorMode, PetError, constants};

/// Continuous screen-space point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
	/// Horizontal coordinate
	pub x: f64,
	/// Vertical coordinate, positive down
	pub y: f64,
}

impl Point {
	/// Creates a point.
	pub const fn new(x: f64, y: f64) -> Self {
		Self {
			x,
			y,
		}
	}
}

impl From<(f64, f64)> for Point {
	fn from((x, y): (f64, f64)) -> Self {
		Self::new(x, y)
	}
}

/// Integer logical position of the sprite's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
	/// Horizontal coordinate
	pub x: i32,
	/// Vertical coordinate, positive down
	pub y: i32,
}

impl Position {
	/// Creates a position.
	pub const fn new(x: i32, y: i32) -> Self {
		Self {
			x,
			y,
		}
	}

	/// Anchor point (bottom centre of the sprite) used for steering.
	pub fn anchor(self) -> Point {
		Point::new(
			f64::from(self.x) + f64::from(constants::ANCHOR_X),
			f64::from(self.y) + f64::from(constants::ANCHOR_Y),
		)
	}

	/// Position as a continuous point.
	pub fn to_point(self) -> Point {
		Point::new(f64::from(self.x), f64::from(self.y))
	}
}

/// Truncated per-tick displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Motion {
	/// Horizontal step
	pub dx: i32,
	/// Vertical step, positive down
	pub dy: i32,
}

impl Motion {
	/// No movement.
	pub const ZERO: Self = Self::new(0, 0);

	/// Creates a motion vector.
	pub const fn new(dx: i32, dy: i32) -> Self {
		Self {
			dx,
			dy,
		}
	}

	/// Returns `true` for the zero vector.
	pub fn is_zero(self) -> bool {
		self == Self::ZERO
	}
}

/// Largest logical coordinates the sprite may occupy.
///
/// The logical position is clamped to `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
	/// Maximum logical x
	pub width: i32,
	/// Maximum logical y
	pub height: i32,
}

impl Bounds {
	/// Creates bounds from maximum logical coordinates, flooring negatives to 0.
	pub fn new(width: i32, height: i32) -> Self {
		Self {
			width: width.max(0),
			height: height.max(0),
		}
	}

	/// Bounds for a viewport of the given pixel size, leaving room for one sprite.
	///
	/// # Examples
	///
	/// ```
	/// use iconeko_types::pet::Bounds;
	///
	/// let bounds = Bounds::from_viewport(800, 600);
	/// assert_eq!((bounds.width, bounds.height), (768, 568));
	/// assert_eq!(Bounds::from_viewport(16, 16), Bounds::new(0, 0));
	/// ```
	pub fn from_viewport(width: i32, height: i32) -> Self {
		Self::new(
			width.saturating_sub(constants::SPRITE_SIZE),
			height.saturating_sub(constants::SPRITE_SIZE),
		)
	}

	/// Clamps a logical position into the bounds.
	pub fn clamp(&self, position: Position) -> Position {
		Position::new(position.x.clamp(0, self.width), position.y.clamp(0, self.height))
	}

	/// Returns `true` if `position` lies inside the bounds, edges included.
	pub fn contains(&self, position: Position) -> bool {
		(0..=self.width).contains(&position.x) && (0..=self.height).contains(&position.y)
	}

	/// Centre of the bounds.
	pub fn center(&self) -> Point {
		Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
	}
}

impl Default for Bounds {
	fn default() -> Self {
		let (width, height) = constants::DEFAULT_VIEWPORT;
		Self::from_viewport(width, height)
	}
}

/// Configuration accepted at session start.
///
/// Every field has a default, so partial TOML/JSON documents deserialize.
///
/// # Examples
///
/// ```
/// use iconeko_types::pet::{BehaviorMode, PetConfig};
///
/// let config = PetConfig {
///     behavior: BehaviorMode::Orbit,
///     seed: Some(7),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
///
/// let broken = PetConfig {
///     fps: 0,
///     ..Default::default()
/// };
/// assert!(broken.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetConfig {
	/// Timer callbacks per second
	pub fps: u32,
	/// Logical ticks per second
	pub ticks_per_second: f64,
	/// Maximum movement per tick, in pixels
	pub speed: u32,
	/// Initial behavior
	pub behavior: BehaviorMode,
	/// Target changes within this many pixels do not count as a new destination
	pub idle_threshold: u32,
	/// Starting logical position; a random point inside `bounds` when absent
	pub start: Option<Position>,
	/// Movement bounds
	pub bounds: Bounds,
	/// Whether [`cycle_behavior`](super::PetAgent::cycle_behavior) has any effect
	pub allow_behavior_change: bool,
	/// RNG seed for reproducible sessions; OS entropy when absent
	pub seed: Option<u64>,
}

impl Default for PetConfig {
	fn default() -> Self {
		Self {
			fps: constants::DEFAULT_FPS,
			ticks_per_second: constants::DEFAULT_TICKS_PER_SECOND,
			speed: constants::DEFAULT_SPEED,
			behavior: BehaviorMode::default(),
			idle_threshold: constants::DEFAULT_IDLE_THRESHOLD,
			start: None,
			bounds: Bounds::default(),
			allow_behavior_change: true,
			seed: None,
		}
	}
}

impl PetConfig {
	/// Checks the preconditions of a simulation.
	///
	/// # Errors
	///
	/// Returns [`PetError::InvalidConfig`] for a zero frame rate, a tick rate
	/// that is not a positive finite number, a zero speed, or negative bounds.
	pub fn validate(&self) -> Result<(), PetError> {
		if self.fps == 0 {
			return Err(PetError::invalid_config("fps", "must be at least 1"));
		}

		if !self.ticks_per_second.is_finite() || self.ticks_per_second <= 0.0 {
			return Err(PetError::invalid_config(
				"ticks_per_second",
				format!("must be a positive number, got {}", self.ticks_per_second),
			));
		}

		if self.speed == 0 {
			return Err(PetError::invalid_config("speed", "must be at least 1"));
		}

		if i32::try_from(self.speed).is_err() {
			return Err(PetError::invalid_config("speed", format!("{} is too large", self.speed)));
		}

		if i32::try_from(self.idle_threshold).is_err() {
			return Err(PetError::invalid_config(
				"idle_threshold",
				format!("{} is too large", self.idle_threshold),
			));
		}

		if self.bounds.width < 0 || self.bounds.height < 0 {
			return Err(PetError::invalid_config(
				"bounds",
				format!("{}x{} is negative", self.bounds.width, self.bounds.height),
			));
		}

		Ok(())
	}

	/// Logical ticks added to the accumulator per timer callback.
	pub fn tick_increment(&self) -> f64 {
		self.ticks_per_second / f64::from(self.fps)
	}
}
