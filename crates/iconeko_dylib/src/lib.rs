//! Forces dynamic linking of `iconeko_internal` when the `dynamic_linking` feature is enabled.

#![allow(unused_imports)]
pub use iconeko_internal::*;
