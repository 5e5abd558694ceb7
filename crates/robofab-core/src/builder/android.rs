use robofab_types::kind::RobotKind;
use robofab_types::part::Part;
use robofab_types::robot::{Robot, RobotCategory};

use super::RobotBuilder;

const TRAVERSAL: [Part; 2] = [Part::BipedalLegs, Part::Arms];
const DETECTION: [Part; 1] = [Part::CameraDetectionSystem];

/// Builds a bipedal robot with legs, arms and cameras.
#[derive(Debug, Default)]
pub struct AndroidBuilder {
    robot: Robot,
}

impl AndroidBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RobotBuilder for AndroidBuilder {
    fn kind(&self) -> RobotKind {
        RobotKind::Android
    }

    fn robot(&self) -> &Robot {
        &self.robot
    }

    fn robot_mut(&mut self) -> &mut Robot {
        &mut self.robot
    }

    fn set_type(&mut self) {
        self.robot.set_category(RobotCategory::Bipedal);
    }

    fn build_traversal(&mut self) {
        self.robot.clear_traversal_parts();
        for part in TRAVERSAL {
            self.robot.append_traversal_part(part);
        }
    }

    fn build_detection_system(&mut self) {
        for part in DETECTION {
            self.robot.append_detection_part(part);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_holds_empty_robot() {
        let builder = AndroidBuilder::new();
        assert_eq!(builder.get_product(), Robot::new());
        assert_eq!(builder.kind(), RobotKind::Android);
    }

    #[test]
    fn test_steps_populate_robot() {
        let mut builder = AndroidBuilder::new();
        builder.set_type();
        builder.build_traversal();
        builder.build_detection_system();

        let robot = builder.get_product();
        assert_eq!(robot.category(), RobotCategory::Bipedal);
        assert_eq!(robot.traversal_parts(), &[Part::BipedalLegs, Part::Arms]);
        assert_eq!(robot.detection_parts(), &[Part::CameraDetectionSystem]);
    }

    #[test]
    fn test_build_traversal_twice_does_not_accumulate() {
        let mut builder = AndroidBuilder::new();
        builder.build_traversal();
        builder.build_traversal();
        assert_eq!(
            builder.robot().traversal_parts(),
            &[Part::BipedalLegs, Part::Arms]
        );
    }

    #[test]
    fn test_build_traversal_keeps_detection_parts() {
        let mut builder = AndroidBuilder::new();
        builder.build_detection_system();
        builder.build_traversal();
        assert_eq!(
            builder.robot().detection_parts(),
            &[Part::CameraDetectionSystem]
        );
    }

    #[test]
    fn test_reset_discards_robot() {
        let mut builder = AndroidBuilder::new();
        builder.set_type();
        builder.build_traversal();
        builder.reset();
        assert_eq!(builder.get_product(), Robot::new());
    }

    #[test]
    fn test_get_product_leaves_builder_state() {
        let mut builder = AndroidBuilder::new();
        builder.set_type();
        let first = builder.get_product();
        let second = builder.get_product();
        assert_eq!(first, second);
        assert_eq!(builder.robot().category(), RobotCategory::Bipedal);
    }
}
