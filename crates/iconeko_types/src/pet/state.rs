//! Animation states and direction resolution.
//!
//! The discriminants double as row indices into
//! [`ANIMATION_TABLE`](super::frame::ANIMATION_TABLE).
//!
//! ```text
//! Value  State     Value  State     Value  State
//! -----  --------  -----  --------  -----  --------
//! 0      Stop      6      MoveN     12     MoveSW
//! 1      Wash      7      MoveS     13     MoveSE
//! 2      Scratch   8      MoveW     14     ClawN
//! 3      Yawn      9      MoveE     15     ClawS
//! 4      Sleep     10     MoveNW    16     ClawW
//! 5      Awake     11     MoveNE    17     ClawE
//! ```

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{PetError, constants};

/// Discrete animation state of a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum State {
	/// Standing still
	#[default]
	Stop = 0,
	/// Grooming
	Wash = 1,
	/// Scratching an itch
	Scratch = 2,
	/// Yawning before sleep
	Yawn = 3,
	/// Asleep; only a new destination wakes it
	Sleep = 4,
	/// Alert, about to run
	Awake = 5,
	/// Running north
	MoveN = 6,
	/// Running south
	MoveS = 7,
	/// Running west
	MoveW = 8,
	/// Running east
	MoveE = 9,
	/// Running north-west
	MoveNW = 10,
	/// Running north-east
	MoveNE = 11,
	/// Running south-west
	MoveSW = 12,
	/// Running south-east
	MoveSE = 13,
	/// Clawing the top edge
	ClawN = 14,
	/// Clawing the bottom edge
	ClawS = 15,
	/// Clawing the left edge
	ClawW = 16,
	/// Clawing the right edge
	ClawE = 17,
}

impl State {
	/// Every state, in discriminant order.
	pub const ALL: [State; constants::STATE_COUNT] = [
		Self::Stop,
		Self::Wash,
		Self::Scratch,
		Self::Yawn,
		Self::Sleep,
		Self::Awake,
		Self::MoveN,
		Self::MoveS,
		Self::MoveW,
		Self::MoveE,
		Self::MoveNW,
		Self::MoveNE,
		Self::MoveSW,
		Self::MoveSE,
		Self::ClawN,
		Self::ClawS,
		Self::ClawW,
		Self::ClawE,
	];

	/// Converts a u8 value to `State`
	pub fn from_u8(value: u8) -> Result<Self, PetError> {
		Self::ALL.get(value as usize).copied().ok_or(PetError::InvalidState(value))
	}

	/// Converts `State` to u8
	pub fn to_u8(self) -> u8 {
		self as u8
	}

	/// Returns `true` for the eight running states.
	pub fn is_moving(self) -> bool {
		matches!(
			self,
			Self::MoveN
				| Self::MoveS | Self::MoveW
				| Self::MoveE | Self::MoveNW
				| Self::MoveNE | Self::MoveSW
				| Self::MoveSE
		)
	}

	/// Returns `true` for the four wall-claw states.
	pub fn is_clawing(self) -> bool {
		matches!(self, Self::ClawN | Self::ClawS | Self::ClawW | Self::ClawE)
	}

	/// Fixed duration in state ticks.
	///
	/// `Awake` reports its minimum; the random extension is drawn per entry.
	/// `Sleep` and the running states have no duration.
	pub fn duration(self) -> Option<u32> {
		match self {
			Self::Stop => Some(constants::STOP_TIME),
			Self::Wash => Some(constants::WASH_TIME),
			Self::Scratch => Some(constants::SCRATCH_TIME),
			Self::Yawn => Some(constants::YAWN_TIME),
			Self::Awake => Some(constants::AWAKE_TIME),
			Self::ClawN | Self::ClawS | Self::ClawW | Self::ClawE => Some(constants::CLAW_TIME),
			_ => None,
		}
	}
}

impl Display for State {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Self::Stop => "Stop",
			Self::Wash => "Wash",
			Self::Scratch => "Scratch",
			Self::Yawn => "Yawn",
			Self::Sleep => "Sleep",
			Self::Awake => "Awake",
			Self::MoveN => "Move N",
			Self::MoveS => "Move S",
			Self::MoveW => "Move W",
			Self::MoveE => "Move E",
			Self::MoveNW => "Move NW",
			Self::MoveNE => "Move NE",
			Self::MoveSW => "Move SW",
			Self::MoveSE => "Move SE",
			Self::ClawN => "Claw N",
			Self::ClawS => "Claw S",
			Self::ClawW => "Claw W",
			Self::ClawE => "Claw E",
		};
		write!(f, "{name}")
	}
}

/// Picks the running state whose octant contains the vector `(dx, dy)`.
///
/// `dy` is in screen space (positive is down). A zero vector yields
/// [`State::Stop`].
///
/// # Examples
///
/// ```
/// use iconeko_types::pet::{State, resolve_direction};
///
/// assert_eq!(resolve_direction(5.0, 0.0), State::MoveE);
/// assert_eq!(resolve_direction(0.0, 5.0), State::MoveS);
/// assert_eq!(resolve_direction(-3.0, -3.0), State::MoveNW);
/// assert_eq!(resolve_direction(0.0, 0.0), State::Stop);
/// ```
pub fn resolve_direction(dx: f64, dy: f64) -> State {
	if dx == 0.0 && dy == 0.0 {
		return State::Stop;
	}

	let up = -dy;
	let sin_theta = up / dx.hypot(up);

	let (diagonal_up, side, diagonal_down) = if dx > 0.0 {
		(State::MoveNE, State::MoveE, State::MoveSE)
	} else {
		(State::MoveNW, State::MoveW, State::MoveSW)
	};

	if sin_theta > constants::SIN_3PI_PER_8 {
		State::MoveN
	} else if sin_theta > constants::SIN_PI_PER_8 {
		diagonal_up
	} else if sin_theta > -constants::SIN_PI_PER_8 {
		side
	} else if sin_theta > -constants::SIN_3PI_PER_8 {
		diagonal_down
	} else {
		State::MoveS
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_u8_round_trip_matches_table_order() {
		for (i, state) in State::ALL.iter().enumerate() {
			assert_eq!(state.to_u8() as usize, i);
			assert_eq!(State::from_u8(i as u8).unwrap(), *state);
		}
		assert_eq!(State::from_u8(18), Err(PetError::InvalidState(18)));
	}

	#[test]
	fn test_axis_directions() {
		assert_eq!(resolve_direction(1.0, 0.0), State::MoveE);
		assert_eq!(resolve_direction(-1.0, 0.0), State::MoveW);
		assert_eq!(resolve_direction(0.0, 1.0), State::MoveS);
		assert_eq!(resolve_direction(0.0, -1.0), State::MoveN);
	}

	#[test]
	fn test_diagonals() {
		assert_eq!(resolve_direction(10.0, -10.0), State::MoveNE);
		assert_eq!(resolve_direction(10.0, 10.0), State::MoveSE);
		assert_eq!(resolve_direction(-10.0, 10.0), State::MoveSW);
		assert_eq!(resolve_direction(-10.0, -10.0), State::MoveNW);
	}

	#[test]
	fn test_octant_boundaries() {
		// 20 degrees above the horizon is still east; 30 degrees is north-east.
		let (s20, c20) = 20f64.to_radians().sin_cos();
		let (s30, c30) = 30f64.to_radians().sin_cos();
		assert_eq!(resolve_direction(c20, -s20), State::MoveE);
		assert_eq!(resolve_direction(c30, -s30), State::MoveNE);

		// 80 degrees is north on either side.
		let (s80, c80) = 80f64.to_radians().sin_cos();
		assert_eq!(resolve_direction(c80, -s80), State::MoveN);
		assert_eq!(resolve_direction(-c80, -s80), State::MoveN);
		assert_eq!(resolve_direction(-c80, s80), State::MoveS);
	}

	#[test]
	fn test_move_and_claw_groups() {
		let moving = State::ALL.iter().filter(|s| s.is_moving()).count();
		let clawing = State::ALL.iter().filter(|s| s.is_clawing()).count();
		assert_eq!((moving, clawing), (8, 4));
		assert_eq!(State::Sleep.duration(), None);
		assert_eq!(State::ClawE.duration(), Some(constants::CLAW_TIME));
	}
}
