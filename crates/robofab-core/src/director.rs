//! Director -- drives any `RobotBuilder` through the construction sequence.
//!
//! Follows the stateless utility pattern: no fields, the builder is passed
//! in per call, so one director can serve any number of builders.

use robofab_types::robot::Robot;

use crate::builder::RobotBuilder;

/// Stateless orchestrator for robot construction.
///
/// Construction sequence:
/// 1. `set_type` -- choose the category
/// 2. `reset_parts` -- drop parts left over from a previous run
/// 3. `build_traversal`
/// 4. `build_detection_system`
///
/// then hand back a copy of the finished robot.
#[derive(Debug, Default, Clone, Copy)]
pub struct Director;

impl Director {
    pub fn new() -> Self {
        Self
    }

    pub fn make_robot(&self, builder: &mut dyn RobotBuilder) -> Robot {
        let kind = builder.kind();
        let _span = tracing::debug_span!("make_robot", %kind).entered();

        builder.set_type();
        tracing::debug!(category = %builder.robot().category(), "type set");
        builder.reset_parts();
        tracing::debug!("parts reset");
        builder.build_traversal();
        tracing::debug!(count = builder.robot().traversal_parts().len(), "traversal built");
        builder.build_detection_system();
        tracing::debug!(
            count = builder.robot().detection_parts().len(),
            "detection system built"
        );

        let robot = builder.get_product();
        tracing::debug!(
            category = %robot.category(),
            traversal = robot.traversal_parts().len(),
            detection = robot.detection_parts().len(),
            "robot assembled"
        );
        robot
    }
}
