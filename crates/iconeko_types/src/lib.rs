//! This crate provides the icon extraction and desktop pet engines for the `iconeko-rs` project.
//!
//! # Icon Extraction
//!
//! - **PE32 / PE32+**: resource directory walk (type → id → language)
//! - **NE**: 16-bit resource table walk with alignment shifts
//! - **Anything else**: heuristic PNG / DIB ripping
//!
//! Raw DIB resources are wrapped in a minimal single-image `.ICO` container;
//! PNG resources pass through untouched.
//!
//! # Desktop Pet
//!
//! - **`PetAgent`**: 18-state animation automaton with integer logical motion
//! - **`BehaviorMode`**: chase, flee, random walk, pacing, orbit
//! - **`PetSession`**: fixed-timestep driver with interpolated rendering
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use iconeko_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let extraction = extract_icons_from_path("SHELL.DLL")?;
//! println!("{} icons ({:?})", extraction.icons.len(), extraction.source);
//!
//! let mut pet = PetAgent::new(&PetConfig::default())?;
//! pet.set_pointer(Point::new(320.0, 240.0));
//! pet.step();
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use iconeko_types::file::rip::rip_icons;
//!
//! assert!(rip_icons(&[0u8; 64]).is_empty());
//! ```

pub mod file;
pub mod pet;

/// `use iconeko_types::prelude::*;` to import commonly used items.
pub mod prelude;
