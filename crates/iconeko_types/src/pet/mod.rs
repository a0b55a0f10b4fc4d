//! Deterministic desktop pet simulation.
//!
//! A pet is an 18-state automaton stepped at a fixed logical tick rate. Each
//! tick a [`BehaviorMode`] picks a target point, the state machine derives a
//! truncated motion vector toward it, and the state transitions on timers,
//! new destinations, and wall contact. The display layer only ever sees
//! `(position, state, sprite slot)` tuples.
//!
//! # State Machine
//!
//! ```text
//!            new destination (from any resting state)
//!   ┌──────────────────────────────────────────────┐
//!   ▼                                              │
//! Awake ──timer──► Move* ──wall──► Stop ──timer──► Wash ─► Scratch ─► Yawn ─► Sleep
//!                                   │                        ▲
//!                                   └──timer, pushing──► Claw* ┘
//! ```
//!
//! Timers count state ticks, one per two logical ticks:
//!
//! ```text
//! State    Duration
//! -------  -------------------------------
//! Stop     4
//! Wash     10
//! Scratch  4
//! Yawn     3
//! Claw*    10
//! Awake    3 + random [0, 20) drawn on entry
//! Sleep    until a new destination
//! ```
//!
//! # Coordinates
//!
//! The logical position is the integer top-left corner of a 32x32 sprite.
//! Steering uses the anchor at `(x + 16, y + 31)`; targets and pointer
//! positions are expressed in the same space as the anchor.
//!
//! # Examples
//!
//! ```
//! use iconeko_types::pet::{PetAgent, PetConfig, Position, State};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PetConfig {
//!     start: Some(Position::new(200, 200)),
//!     seed: Some(9),
//!     ..Default::default()
//! };
//! let mut pet = PetAgent::new(&config)?;
//!
//! // Nothing to chase: the pet settles down and grooms.
//! for _ in 0..8 {
//!     pet.step();
//! }
//! assert_eq!(pet.state(), State::Wash);
//! # Ok(())
//! # }
//! ```

mod agent;
mod behavior;
mod config;
mod error;
mod frame;
mod session;
mod state;

pub mod constants;


pub use agent::PetAgent;
pub use behavior::{
	Ball, BehaviorMode, BehaviorScratch, flee_target, orbit_margin, pacing_corner,
};
pub use config::{Bounds, Motion, PetConfig, Point, Position};
pub use error::PetError;
pub use frame::{ANIMATION_TABLE, SPRITE_NAMES, SpriteTable, frame_index};
pub use session::{PetSession, RenderFrame};
pub use state::{State, resolve_direction};
