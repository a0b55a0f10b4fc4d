//! Behavior modes and their per-mode scratch state.
//!
//! Each mode decides the target point the state machine steers toward:
//!
//! ```text
//! Mode         Target
//! -----------  ---------------------------------------------------------
//! Chase        Last pointer position
//! Flee         Point pushed away from a nearby pointer, else unchanged
//! RandomWalk   Random point, re-rolled after a long enough nap
//! Pacing       Next screen corner once the pet has stopped
//! Orbit        Position of an invisible bouncing ball
//! ```

use std::{fmt::Display, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Bounds, PetError, Point, Position, constants};

/// Target-selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BehaviorMode {
	/// Follow the pointer
	#[default]
	Chase = 0,
	/// Keep away from the pointer
	Flee = 1,
	/// Wander between random points
	RandomWalk = 2,
	/// Walk the screen corners
	Pacing = 3,
	/// Chase a bouncing ball
	Orbit = 4,
}

impl BehaviorMode {
	/// Every mode, in cycling order.
	pub const ALL: [BehaviorMode; 5] =
		[Self::Chase, Self::Flee, Self::RandomWalk, Self::Pacing, Self::Orbit];

	/// Mode that follows this one when cycling.
	pub fn next(self) -> Self {
		Self::ALL[(self as usize + 1) % Self::ALL.len()]
	}

	/// Human-readable name.
	pub fn name(self) -> &'static str {
		match self {
			Self::Chase => "chase",
			Self::Flee => "flee",
			Self::RandomWalk => "random_walk",
			Self::Pacing => "pacing",
			Self::Orbit => "orbit",
		}
	}
}

impl Display for BehaviorMode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Chase => write!(f, "Chase mouse"),
			Self::Flee => write!(f, "Run away from mouse"),
			Self::RandomWalk => write!(f, "Run around randomly"),
			Self::Pacing => write!(f, "Pace around screen"),
			Self::Orbit => write!(f, "Run around"),
		}
	}
}

impl FromStr for BehaviorMode {
	type Err = PetError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
		Self::ALL
			.into_iter()
			.find(|mode| mode.name() == normalized)
			.ok_or_else(|| PetError::UnknownBehavior(s.to_string()))
	}
}

/// Invisible ball the pet chases in [`BehaviorMode::Orbit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
	/// Current position, in anchor space
	pub position: Point,
	/// Displacement per tick
	pub velocity: Point,
}

impl Ball {
	/// Drops a ball at a random spot away from the far margins, moving diagonally.
	pub fn launch<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds, speed: i32) -> Self {
		let margin = orbit_margin(speed);
		let span = |extent: i32| (f64::from(extent) - margin).max(0.0);
		let mut component = || {
			let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
			sign * f64::from(speed) / 2.0 + 1.0
		};
		let velocity = Point::new(component(), component());

		Self {
			position: Point::new(
				rng.random::<f64>() * span(bounds.width),
				rng.random::<f64>() * span(bounds.height),
			),
			velocity,
		}
	}

	/// Moves the ball one tick.
	///
	/// Inside the margin band the ball accelerates toward the nearer edge; at
	/// or past the edge its velocity is reflected. The position never leaves
	/// `bounds`.
	pub fn advance(&mut self, bounds: Bounds, speed: i32) {
		let margin = orbit_margin(speed);
		self.position.x += self.velocity.x;
		self.position.y += self.velocity.y;

		bounce(&mut self.position.x, &mut self.velocity.x, f64::from(bounds.width), margin);
		bounce(&mut self.position.y, &mut self.velocity.y, f64::from(bounds.height), margin);
	}
}

fn bounce(position: &mut f64, velocity: &mut f64, extent: f64, margin: f64) {
	if *position < margin {
		if *position > 0.0 {
			*velocity += 1.0;
		} else {
			*velocity = -*velocity;
		}
	} else if *position > extent - margin {
		if *position < extent {
			*velocity -= 1.0;
		} else {
			*velocity = -*velocity;
		}
	}
	*position = position.clamp(0.0, extent);
}

/// Width of the orbit margin band for a given speed.
pub fn orbit_margin(speed: i32) -> f64 {
	f64::from(speed) * constants::ORBIT_MARGIN_FACTOR
}

/// Corner targeted by [`BehaviorMode::Pacing`], in anchor space.
///
/// Corners are visited top-left, bottom-left, bottom-right, top-right.
pub fn pacing_corner(index: usize, bounds: Bounds) -> Point {
	let inset = |edge: i32, anchor: i32| f64::from(edge) + f64::from(anchor);
	let left = inset(constants::SPRITE_SIZE, constants::ANCHOR_X);
	let top = inset(constants::SPRITE_SIZE, constants::ANCHOR_Y);
	let right = inset(bounds.width - constants::SPRITE_SIZE, constants::ANCHOR_X);
	let bottom = inset(bounds.height - constants::SPRITE_SIZE, constants::ANCHOR_Y);

	let (x, y) = match index % 4 {
		0 => (left, top),
		1 => (left, bottom),
		2 => (right, bottom),
		_ => (right, top),
	};
	Point::new(x, y)
}

/// Flee target for a pointer near the pet, or `None` if the pointer is far.
///
/// The pointer counts as near when it is within `distance` of the sprite
/// centre on both axes. The target lies `distance` away from the current
/// position, opposite the pointer. A pointer exactly on the centre sends the
/// pet toward a random spot near the middle of `bounds`.
pub fn flee_target<R: Rng + ?Sized>(
	rng: &mut R,
	position: Position,
	pointer: Point,
	distance: f64,
	bounds: Bounds,
) -> Option<Point> {
	let center = f64::from(constants::SPRITE_SIZE / 2);
	let xdiff = f64::from(position.x) + center - pointer.x;
	let ydiff = f64::from(position.y) + center - pointer.y;

	if xdiff.abs() >= distance || ydiff.abs() >= distance {
		return None;
	}

	let length = xdiff.hypot(ydiff);
	if length != 0.0 {
		let origin = position.to_point();
		return Some(Point::new(
			origin.x + xdiff / length * distance,
			origin.y + ydiff / length * distance,
		));
	}

	let middle = bounds.center();
	let mut scatter = || rng.random_range(-constants::FLEE_SCATTER..constants::FLEE_SCATTER);
	Some(Point::new(middle.x + scatter(), middle.y + scatter()))
}

/// Per-mode state carried between ticks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BehaviorScratch {
	/// Ticks spent asleep since the last random-walk pick
	pub action_count: u32,
	/// Index of the current pacing corner
	pub corner: usize,
	/// Orbit ball, launched on the first orbit tick
	pub ball: Option<Ball>,
}
