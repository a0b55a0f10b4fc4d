//! Prelude module for `iconeko_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and functions.
//!
//! # Examples
//!
//! ```
//! use iconeko_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let icons: Vec<DecodedIcon> = extract_icons(b"not an executable");
//! assert!(icons.is_empty());
//!
//! let config = PetConfig {
//!     behavior: BehaviorMode::Pacing,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// Containers
	Container,
	ContainerKind,
	// Icons
	DecodedIcon,
	Extraction,
	FileType,
	IconFileError,
	IconFormat,
	IconSource,

	// Entry points
	extract,
	extract_icons,
	extract_icons_from_path,
	rip_icons,
};

// Pet types
#[doc(inline)]
pub use crate::pet::{
	BehaviorMode, Bounds, PetAgent, PetConfig, PetError, PetSession, Point, Position,
	RenderFrame, SpriteTable, State,
};

// Re-export the modules for advanced usage
#[doc(inline)]
pub use crate::{file, pet};
