use robofab_types::kind::RobotKind;
use robofab_types::part::Part;
use robofab_types::robot::{Robot, RobotCategory};

use super::RobotBuilder;

const TRAVERSAL: [Part; 3] = [Part::TwoWheels, Part::Wings, Part::Blades];
const DETECTION: [Part; 2] = [Part::InfraredDetectionSystem, Part::CameraDetectionSystem];

/// Builds a flying robot with wheels, wings, blades and both sensor kinds.
#[derive(Debug, Default)]
pub struct FlyingBattleBotBuilder {
    robot: Robot,
}

impl FlyingBattleBotBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RobotBuilder for FlyingBattleBotBuilder {
    fn kind(&self) -> RobotKind {
        RobotKind::FlyingBattleBot
    }

    fn robot(&self) -> &Robot {
        &self.robot
    }

    fn robot_mut(&mut self) -> &mut Robot {
        &mut self.robot
    }

    fn set_type(&mut self) {
        self.robot.set_category(RobotCategory::Flying);
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
