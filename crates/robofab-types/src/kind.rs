use std::fmt;
use std::str::FromStr;

use crate::error::RobotError;

/// Tag naming one of the registered builder variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RobotKind {
    Android,
    AutonomousCar,
    FlyingBattleBot,
}

impl RobotKind {
    /// Every built-in kind, in the order the default run builds them.
    pub const ALL: [RobotKind; 3] = [
        RobotKind::Android,
        RobotKind::AutonomousCar,
        RobotKind::FlyingBattleBot,
    ];
}

impl fmt::Display for RobotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RobotKind::Android => write!(f, "android"),
            RobotKind::AutonomousCar => write!(f, "autonomous-car"),
            RobotKind::FlyingBattleBot => write!(f, "flying-battle-bot"),
        }
    }
}

impl FromStr for RobotKind {
    type Err = RobotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "android" => Ok(RobotKind::Android),
            "autonomous-car" => Ok(RobotKind::AutonomousCar),
            "flying-battle-bot" => Ok(RobotKind::FlyingBattleBot),
            _ => Err(RobotError::UnknownKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_from_str_roundtrip() {
        for kind in RobotKind::ALL {
            assert_eq!(kind.to_string().parse::<RobotKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_from_str_is_lenient() {
        assert_eq!("Android".parse::<RobotKind>(), Ok(RobotKind::Android));
        assert_eq!("AUTONOMOUS_CAR".parse::<RobotKind>(), Ok(RobotKind::AutonomousCar));
        assert_eq!(
            " flying_battle-bot ".parse::<RobotKind>(),
            Ok(RobotKind::FlyingBattleBot)
        );
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "toaster".parse::<RobotKind>().unwrap_err();
        assert_eq!(err, RobotError::UnknownKind("toaster".to_string()));
    }

    #[test]
    fn test_all_order() {
        assert_eq!(
            RobotKind::ALL,
            [
                RobotKind::Android,
                RobotKind::AutonomousCar,
                RobotKind::FlyingBattleBot
            ]
        );
    }
}
