//! Core types for patch-scale soil nitrogen models
//!
//! This crate holds the pieces shared between soil nitrogen components:
//!
//! - `constants`: numerical constants shared by every component (`PI`, `ZERO`)
//! - `errors`: the error type returned by component operations
//! - `state`: per-patch state, daily flux and driver records owned by the caller
//! - `config`: helpers for reading and writing TOML parameter files

pub mod config;
pub mod constants;
pub mod errors;
pub mod state;

/// Floating point type used for all pools, fluxes and parameters.
pub type FloatValue = f64;
