//! This module is separated into its own crate to enable simple dynamic linking for `iconeko`, and should not be used directly.

/// `use iconeko::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export iconeko_types for convenience
pub use iconeko_types;

// Re-export commonly used types at crate root
pub use iconeko_types::{
	file::{DecodedIcon, Extraction, IconFileError, IconFormat, extract_icons, extract_icons_from_path},
	pet::{BehaviorMode, PetAgent, PetConfig, PetError, PetSession},
};
