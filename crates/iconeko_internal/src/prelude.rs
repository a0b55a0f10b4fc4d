//! Prelude module for `iconeko_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use iconeko_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let extraction = extract(&[0u8; 128]);
//! assert_eq!(extraction.container, ContainerKind::Unstructured);
//!
//! let table: SpriteTable<&str> = SpriteTable::empty();
//! assert_eq!(table.frame(State::Sleep, 0), None);
//! ```

// Re-export everything from iconeko_types::prelude
#[doc(inline)]
pub use iconeko_types::prelude::*;

// Re-export the entire iconeko_types module for advanced usage
#[doc(inline)]
pub use iconeko_types;
