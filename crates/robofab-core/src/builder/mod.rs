//! Builder trait and the concrete robot builders.
//!
//! Each builder owns exactly one `Robot` and knows a fixed combination of
//! category, traversal parts and detection parts. Builders never share a
//! robot; `reset` swaps in a brand new one.

pub mod android;
pub mod autonomous_car;
pub mod flying_battle_bot;

use robofab_types::kind::RobotKind;
use robofab_types::robot::Robot;

pub use android::AndroidBuilder;
pub use autonomous_car::AutonomousCarBuilder;
pub use flying_battle_bot::FlyingBattleBotBuilder;

/// Step-wise construction of a `Robot`.
///
/// Implementors provide access to their held robot plus the three
/// variant-specific steps. Part-list clearing lives in `reset_parts`, so
/// the build steps carry no hidden ordering dependency on each other.
pub trait RobotBuilder {
    /// Which variant this builder produces.
    fn kind(&self) -> RobotKind;

    /// The robot currently held by this builder.
    fn robot(&self) -> &Robot;

    fn robot_mut(&mut self) -> &mut Robot;

    /// Set the held robot's category for this variant.
    fn set_type(&mut self);

    /// Replace the traversal parts with this variant's fixed list.
    ///
    /// Calling this repeatedly converges on the same list.
    fn build_traversal(&mut self);

    /// Append this variant's fixed detection parts.
    ///
    /// Nothing is cleared here; `reset_parts` empties the list beforehand.
    fn build_detection_system(&mut self);

    /// Empty both part lists on the held robot.
    fn reset_parts(&mut self) {
        self.robot_mut().clear_parts();
    }

    /// A copy of the held robot. The builder keeps its own state.
    fn get_product(&self) -> Robot {
        self.robot().clone()
    }

    /// Discard the held robot and start over with an empty one.
    fn reset(&mut self) {
        *self.robot_mut() = Robot::new();
    }
}
