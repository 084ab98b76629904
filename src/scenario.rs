//! Scenario files: a diagram plus one recorded reshape gesture.
//!
//! Replaying a scenario runs the gesture through a
//! [`LinkReshapeDriver`] with a [`SnapLinkReshaper`] and reports the
//! corrected point for every pointer move.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use snaplink_core::Point;
use snaplink_designer::{
    DiagramFile, Grid, LinkReshapeDriver, PartId, ReshapeConfig, SnapLinkReshaper,
};
use std::path::Path;

fn default_commit() -> bool {
    true
}

/// A recorded drag of one route point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gesture {
    pub link: PartId,
    pub segment_index: usize,
    /// Pointer position when the drag started.
    pub start: Point,
    /// Raw pointer positions, in order.
    pub moves: Vec<Point>,
    /// Cancelled gestures restore the original route.
    #[serde(default = "default_commit")]
    pub commit: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub diagram: DiagramFile,
    pub gesture: Gesture,
}

impl Scenario {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse scenario {}", path.display()))
    }
}

/// One pointer move and the point the reshaper settled on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReplayStep {
    pub raw: Point,
    pub corrected: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<ReplayStep>,
    /// The link's route after the gesture ended.
    pub route: Vec<Point>,
    pub committed: bool,
}

/// Replays `scenario` with `config`. `ambient` replaces the diagram's own
/// grid when given.
pub fn replay(scenario: &Scenario, config: ReshapeConfig, ambient: Option<Grid>) -> Result<ReplayReport> {
    let mut diagram = scenario.diagram.to_diagram()?;
    if let Some(grid) = ambient {
        diagram.set_grid(grid);
    }

    let gesture = &scenario.gesture;
    let mut driver = LinkReshapeDriver::new(SnapLinkReshaper::new(config));
    if !driver.activate(&mut diagram, gesture.link, gesture.segment_index, gesture.start) {
        anyhow::bail!(
            "Cannot reshape link {} at route point {}",
            gesture.link,
            gesture.segment_index
        );
    }
    tracing::info!(
        "Replaying {} moves on link {}",
        gesture.moves.len(),
        gesture.link
    );

    let mut steps = Vec::with_capacity(gesture.moves.len());
    for &raw in &gesture.moves {
        let corrected = driver
            .pointer_moved(&mut diagram, raw)
            .context("Reshape gesture ended unexpectedly")?;
        steps.push(ReplayStep { raw, corrected });
    }

    driver.deactivate(&mut diagram, gesture.commit);
    let route = diagram
        .link(gesture.link)
        .map(|link| link.points.clone())
        .context("Link disappeared during the gesture")?;

    Ok(ReplayReport {
        steps,
        route,
        committed: gesture.commit,
    })
}
