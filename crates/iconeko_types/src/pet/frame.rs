//! Frame mapping from `(state, tick)` to a sprite slot.
//!
//! # Sprite Table Layout
//!
//! ```text
//! Slot   Name                   Slot   Name
//! -----  ---------------------  -----  ---------------------
//! 0      alert                  17-18  nscratch1, nscratch2
//! 1-2    nrun1, nrun2           19-20  escratch1, escratch2
//! 3-4    nerun1, nerun2         21-22  wscratch1, wscratch2
//! 5-6    erun1, erun2           23-24  sscratch1, sscratch2
//! 7-8    serun1, serun2         25     wash
//! 9-10   srun1, srun2           26-27  itch1, itch2
//! 11-12  swrun1, swrun2         28     still
//! 13-14  wrun1, wrun2           29     yawn
//! 15-16  nwrun1, nwrun2         30-31  sleep1, sleep2
//! ```

use std::collections::HashMap;

use super::{State, constants};

/// Sprite slots per state: column 0 on even frames, column 1 on odd frames.
pub const ANIMATION_TABLE: [[usize; 2]; constants::STATE_COUNT] = [
	[28, 28], // Stop
	[25, 28], // Wash
	[26, 27], // Scratch
	[29, 29], // Yawn
	[30, 31], // Sleep
	[0, 0],   // Awake
	[1, 2],   // MoveN
	[9, 10],  // MoveS
	[13, 14], // MoveW
	[5, 6],   // MoveE
	[15, 16], // MoveNW
	[3, 4],   // MoveNE
	[11, 12], // MoveSW
	[7, 8],   // MoveSE
	[17, 18], // ClawN
	[23, 24], // ClawS
	[21, 22], // ClawW
	[19, 20], // ClawE
];

/// Named sprite for each slot, followed by the name used when it is missing.
pub const SPRITE_NAMES: [(&str, &str); constants::SPRITE_COUNT] = [
	("alert", "still"),
	("nrun1", "nrun2"),
	("nrun2", "nrun1"),
	("nerun1", "nrun1"),
	("nerun2", "nrun2"),
	("erun1", "serun1"),
	("erun2", "serun2"),
	("serun1", "srun1"),
	("serun2", "srun2"),
	("srun1", "srun2"),
	("srun2", "srun1"),
	("swrun1", "srun1"),
	("swrun2", "srun2"),
	("wrun1", "swrun1"),
	("wrun2", "swrun2"),
	("nwrun1", "nrun1"),
	("nwrun2", "nrun2"),
	("nscratch1", "nrun1"),
	("nscratch2", "nrun2"),
	("escratch1", "erun1"),
	("escratch2", "erun2"),
	("wscratch1", "wrun1"),
	("wscratch2", "wrun2"),
	("sscratch1", "srun1"),
	("sscratch2", "srun2"),
	("wash", "still"),
	("itch1", "still"),
	("itch2", "still"),
	("still", "nrun1"),
	("yawn", "still"),
	("sleep1", "still"),
	("sleep2", "sleep1"),
];

/// Sprite slot shown for `state` at `tick`.
///
/// Sleep alternates every four ticks, everything else every tick.
///
/// # Examples
///
/// ```
/// use iconeko_types::pet::{State, frame_index};
///
/// assert_eq!(frame_index(State::MoveE, 0), 5);
/// assert_eq!(frame_index(State::MoveE, 1), 6);
/// assert_eq!(frame_index(State::Sleep, 3), 30);
/// assert_eq!(frame_index(State::Sleep, 4), 31);
/// ```
pub fn frame_index(state: State, tick: u32) -> usize {
	let column = match state {
		State::Sleep => (tick >> 2) & 1,
		_ => tick & 1,
	};
	ANIMATION_TABLE[state as usize][column as usize]
}

/// Ordered sprite table supplied by the display layer.
///
/// The engine only reports slot indices; this table resolves them. Slots may
/// be empty, and a table shorter than 32 entries simply reports `None` for the
/// missing slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteTable<T> {
	slots: Vec<Option<T>>,
}

impl<T> SpriteTable<T> {
	/// Creates a table from sprites in slot order.
	pub fn new(sprites: impl IntoIterator<Item = T>) -> Self {
		Self {
			slots: sprites.into_iter().map(Some).collect(),
		}
	}

	/// Creates an empty table.
	pub fn empty() -> Self {
		Self {
			slots: Vec::new(),
		}
	}

	/// Sprite in `slot`, if present.
	pub fn get(&self, slot: usize) -> Option<&T> {
		self.slots.get(slot).and_then(Option::as_ref)
	}

	/// Sprite shown for `state` at `tick`.
	pub fn frame(&self, state: State, tick: u32) -> Option<&T> {
		self.get(frame_index(state, tick))
	}

	/// Number of slots, filled or not.
	pub fn len(&self) -> usize {
		self.slots.len()
	}

	/// Returns `true` if the table has no slots.
	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	/// Number of filled slots.
	pub fn filled(&self) -> usize {
		self.slots.iter().filter(|s| s.is_some()).count()
	}
}

impl<T: Clone> SpriteTable<T> {
	/// Builds a 32-slot table from a named sprite set.
	///
	/// Each slot takes its own sprite, or the sprite named as its fallback in
	/// [`SPRITE_NAMES`], or stays empty.
	pub fn from_named(sprites: &HashMap<String, T>) -> Self {
		let slots = SPRITE_NAMES
			.iter()
			.map(|(name, fallback)| sprites.get(*name).or_else(|| sprites.get(*fallback)).cloned())
			.collect();
		Self {
			slots,
		}
	}
}

impl<T> Default for SpriteTable<T> {
	fn default() -> Self {
		Self::empty()
	}
}

impl<T> FromIterator<T> for SpriteTable<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::new(iter)
	}
}
