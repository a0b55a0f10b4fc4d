#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `iconeko-rs` pulls icons out of legacy Windows executables and runs a small
//! deterministic desktop pet simulation.
//!
pub use iconeko_internal::*;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use iconeko_dylib;
