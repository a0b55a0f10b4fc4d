//! Integration tests for `iconeko-rs`

mod extraction;
mod simulation;
