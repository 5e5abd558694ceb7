//! BuilderRegistry -- maps a `RobotKind` to a factory for its builder.
//!
//! Lets callers pick builder variants by tag instead of naming concrete
//! types. Registration order is preserved so listings and the default run
//! stay deterministic.

use robofab_types::error::RobotError;
use robofab_types::kind::RobotKind;

use crate::builder::{AndroidBuilder, AutonomousCarBuilder, FlyingBattleBotBuilder, RobotBuilder};

/// Creates a fresh, independently owned builder.
pub type BuilderFactory = fn() -> Box<dyn RobotBuilder>;

/// Ordered set of builder factories keyed by kind.
#[derive(Debug, Default, Clone)]
pub struct BuilderRegistry {
    entries: Vec<(RobotKind, BuilderFactory)>,
}

impl BuilderRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the three built-in builders in `RobotKind::ALL` order.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(RobotKind::Android, || Box::new(AndroidBuilder::new()));
        registry.register(RobotKind::AutonomousCar, || {
            Box::new(AutonomousCarBuilder::new())
        });
        registry.register(RobotKind::FlyingBattleBot, || {
            Box::new(FlyingBattleBotBuilder::new())
        });
        registry
    }

    /// Register a factory. An existing entry for `kind` is replaced in place.
    pub fn register(&mut self, kind: RobotKind, factory: BuilderFactory) {
        match self.entries.iter_mut().find(|(k, _)| *k == kind) {
            Some(entry) => entry.1 = factory,
            None => self.entries.push((kind, factory)),
        }
        tracing::debug!(%kind, "builder registered");
    }

    /// Build a new builder for `kind`.
    pub fn create(&self, kind: RobotKind) -> Result<Box<dyn RobotBuilder>, RobotError> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, factory)| factory())
            .ok_or(RobotError::UnregisteredKind(kind))
    }

    /// Registered kinds, in registration order.
    pub fn kinds(&self) -> Vec<RobotKind> {
        self.entries.iter().map(|(kind, _)| *kind).collect()
    }
}
