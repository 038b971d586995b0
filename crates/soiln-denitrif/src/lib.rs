//! Soil denitrification for patch-scale ecohydrology models
//!
//! This crate computes daily denitrification for a single soil patch and its
//! partition into N2 and N2O, following the generalised regression model of
//! Parton et al. (1996).
//!
//! # Module Organisation
//!
//! The calculation runs through four stages, each in its own module:
//! - `moisture`: moisture limitation from relative soil water content and texture
//! - `substrate`: nitrate and carbon limits on denitrification
//! - `flux`: resolution of the daily flux and the resulting state change
//! - `partition`: N2:N2O split of the resolved flux
//!
//! [`DenitrificationModel`] chains the stages for one patch and day.
//!
//! # Parameters
//!
//! Each stage has an associated parameters struct in the `parameters` module
//! with defaults matching the published regression coefficients.
//!
//! # Reference
//!
//! Parton et al. 1996. Generalized model of N2 and N2O production from
//! nitrification and denitrification. Global Biogeochemical Cycles, 10(3),
//! 401-412.

pub mod flux;
pub mod model;
pub mod moisture;
pub mod parameters;
pub mod partition;
pub mod substrate;

pub use flux::NitrogenStateDelta;
pub use model::{DenitrificationDiagnostics, DenitrificationModel, DenitrificationOutcome};
pub use moisture::TextureClass;
