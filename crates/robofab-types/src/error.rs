use thiserror::Error;

use crate::kind::RobotKind;

/// Errors related to robot construction and rendering.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RobotError {
    #[error("malformed robot: {0}")]
    MalformedProduct(String),

    #[error("unknown robot kind: '{0}'")]
    UnknownKind(String),

    #[error("no builder registered for '{0}'")]
    UnregisteredKind(RobotKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_product_display() {
        let err = RobotError::MalformedProduct("no category set".to_string());
        assert_eq!(err.to_string(), "malformed robot: no category set");
    }

    #[test]
    fn test_unknown_kind_display() {
        let err = RobotError::UnknownKind("toaster".to_string());
        assert_eq!(err.to_string(), "unknown robot kind: 'toaster'");
    }

    #[test]
    fn test_unregistered_kind_display() {
        let err = RobotError::UnregisteredKind(RobotKind::FlyingBattleBot);
        assert!(err.to_string().contains("flying-battle-bot"));
    }
}
