use robofab_types::kind::RobotKind;
use robofab_types::part::Part;
use robofab_types::robot::{Robot, RobotCategory};

use super::RobotBuilder;

const TRAVERSAL: [Part; 1] = [Part::FourWheels];
const DETECTION: [Part; 1] = [Part::InfraredDetectionSystem];

/// Builds a wheeled robot driven by infrared sensing.
#[derive(Debug, Default)]
pub struct AutonomousCarBuilder {
    robot: Robot,
}

impl AutonomousCarBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RobotBuilder for AutonomousCarBuilder {
    fn kind(&self) -> RobotKind {
        RobotKind::AutonomousCar
    }

    fn robot(&self) -> &Robot {
        &self.robot
    }

    fn robot_mut(&mut self) -> &mut Robot {
        &mut self.robot
    }

    fn set_type(&mut self) {
        self.robot.set_category(RobotCategory::Wheeled);
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
