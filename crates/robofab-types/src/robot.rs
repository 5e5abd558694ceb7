//! The `Robot` product assembled by builders.
//!
//! A robot carries a single category and two ordered lists of parts. The
//! category is one enum field, so "more than one category set" cannot be
//! represented; the remaining malformed case (no category at all) is
//! reported by [`Robot::render`].

use std::fmt;

use crate::error::RobotError;
use crate::part::Part;

/// Locomotion category of a robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RobotCategory {
    #[default]
    None,
    Bipedal,
    Quadripedal,
    Wheeled,
    Flying,
}

impl RobotCategory {
    /// Upper-case tag used in the rendered header ("" for `None`).
    pub fn tag(&self) -> &'static str {
        match self {
            RobotCategory::None => "",
            RobotCategory::Bipedal => "BIPEDAL",
            RobotCategory::Quadripedal => "QUADRIPEDAL",
            RobotCategory::Wheeled => "WHEELED",
            RobotCategory::Flying => "FLYING",
        }
    }
}

impl fmt::Display for RobotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A robot under construction or fully built.
///
/// Each instance owns its own part lists; nothing is shared between robots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Robot {
    category: RobotCategory,
    traversal: Vec<Part>,
    detection_systems: Vec<Part>,
}

impl Robot {
    /// An empty robot: no category, no parts.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> RobotCategory {
        self.category
    }

    /// Set the category, replacing any previous one.
    pub fn set_category(&mut self, category: RobotCategory) {
        self.category = category;
    }

    pub fn traversal_parts(&self) -> &[Part] {
        &self.traversal
    }

    pub fn detection_parts(&self) -> &[Part] {
        &self.detection_systems
    }

    /// Empty both part lists.
    pub fn clear_parts(&mut self) {
        self.clear_traversal_parts();
        self.clear_detection_parts();
    }

    pub fn clear_traversal_parts(&mut self) {
        self.traversal.clear();
    }

    pub fn clear_detection_parts(&mut self) {
        self.detection_systems.clear();
    }

    pub fn append_traversal_part(&mut self, part: Part) {
        self.traversal.push(part);
    }

    pub fn append_detection_part(&mut self, part: Part) {
        self.detection_systems.push(part);
    }

    /// Render the robot as its multi-line text description.
    ///
    /// Format:
    ///
    /// ```text
    /// <TAG> ROBOT.
    /// Traversal modules installed:
    /// - <label>
    /// Detection systems installed:
    /// - <label>
    /// ```
    ///
    /// A section whose list is empty is omitted entirely, header included.
    ///
    /// # Errors
    ///
    /// Returns `RobotError::MalformedProduct` when no category has been set.
    ///
    /// # Examples
    ///
    /// ```
    /// use robofab_types::part::Part;
    /// use robofab_types::robot::{Robot, RobotCategory};
    ///
    /// let mut robot = Robot::new();
    /// robot.set_category(RobotCategory::Wheeled);
    /// robot.append_traversal_part(Part::FourWheels);
    /// assert_eq!(
    ///     robot.render().unwrap(),
    ///     "WHEELED ROBOT. \nTraversal modules installed:\n- four wheels\n"
    /// );
    /// ```
    pub fn render(&self) -> Result<String, RobotError> {
        if self.category == RobotCategory::None {
            return Err(RobotError::MalformedProduct(
                "no category set".to_string(),
            ));
        }

        let mut output = format!("{} ROBOT. \n", self.category.tag());
        push_section(&mut output, "Traversal modules installed:", &self.traversal);
        push_section(
            &mut output,
            "Detection systems installed:",
            &self.detection_systems,
        );
        Ok(output)
    }
}

fn push_section(output: &mut String, header: &str, parts: &[Part]) {
    if parts.is_empty() {
        return;
    }
    output.push_str(header);
    output.push('\n');
    for part in parts {
        output.push_str(&format!("- {part}\n"));
    }
}
