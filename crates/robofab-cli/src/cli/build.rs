//! Build-and-print handlers.

use std::io::Write;

use anyhow::Context;
use robofab_core::director::Director;
use robofab_core::registry::BuilderRegistry;
use robofab_types::kind::RobotKind;

/// Build each kind in order and write its rendering followed by a blank line.
pub fn build_robots(
    registry: &BuilderRegistry,
    director: &Director,
    kinds: &[RobotKind],
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for &kind in kinds {
        let mut builder = registry.create(kind)?;
        let robot = director.make_robot(builder.as_mut());
        let text = robot
            .render()
            .with_context(|| format!("failed to render {kind}"))?;
        tracing::info!(%kind, "robot built");
        writeln!(out, "{text}")?;
    }
    Ok(())
}

/// Write one registered kind per line.
pub fn list_kinds(registry: &BuilderRegistry, out: &mut impl Write) -> anyhow::Result<()> {
    for kind in registry.kinds() {
        writeln!(out, "{}", console::style(kind).cyan())?;
    }
    Ok(())
}
