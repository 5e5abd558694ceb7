//! Robot construction logic for robofab.
//!
//! Defines the `RobotBuilder` trait and its concrete builders, the
//! `Director` that drives any builder through the fixed construction
//! sequence, and the `BuilderRegistry` that maps a `RobotKind` to a fresh
//! builder. Depends only on `robofab-types` and `tracing`.

pub mod builder;
pub mod director;
pub mod registry;
