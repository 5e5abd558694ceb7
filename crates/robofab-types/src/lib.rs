//! Shared domain types for robofab.
//!
//! This crate contains the part catalog, the `Robot` product that builders
//! populate, the `RobotKind` tag naming each builder variant, and their
//! error type.
//!
//! Zero infrastructure dependencies -- only thiserror.

pub mod error;
pub mod kind;
pub mod part;
pub mod robot;
