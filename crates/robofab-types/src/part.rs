//! The fixed catalog of installable robot parts.

use std::fmt;

/// A part a builder can install on a robot.
///
/// The catalog is closed: every part is a unit variant whose only
/// capability is its human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    // Traversal
    BipedalLegs,
    QuadripedalLegs,
    Arms,
    Wings,
    Blades,
    FourWheels,
    TwoWheels,
    // Detection
    CameraDetectionSystem,
    InfraredDetectionSystem,
}

impl Part {
    /// Human-readable label used when rendering a robot.
    pub fn label(&self) -> &'static str {
        match self {
            Part::BipedalLegs => "two legs",
            Part::QuadripedalLegs => "four legs",
            Part::Arms => "two arms",
            Part::Wings => "wings",
            Part::Blades => "blades",
            Part::FourWheels => "four wheels",
            Part::TwoWheels => "two wheels",
            Part::CameraDetectionSystem => "cameras",
            Part::InfraredDetectionSystem => "infrared",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Part::BipedalLegs.label(), "two legs");
        assert_eq!(Part::QuadripedalLegs.label(), "four legs");
        assert_eq!(Part::Arms.label(), "two arms");
        assert_eq!(Part::Wings.label(), "wings");
        assert_eq!(Part::Blades.label(), "blades");
        assert_eq!(Part::FourWheels.label(), "four wheels");
        assert_eq!(Part::TwoWheels.label(), "two wheels");
        assert_eq!(Part::CameraDetectionSystem.label(), "cameras");
        assert_eq!(Part::InfraredDetectionSystem.label(), "infrared");
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(Part::Wings.to_string(), Part::Wings.label());
        assert_eq!(format!("- {}", Part::InfraredDetectionSystem), "- infrared");
    }
}
