//! Diagram fixture files for gesture replay.
//!
//! A [`DiagramFile`] describes the nodes, links, and grid a recorded reshape
//! gesture runs against. It is an input format for replay and tests, not a
//! persistence layer for edited diagrams: only what a gesture needs is
//! stored, and adornments are never written.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use snaplink_core::Error;
use std::collections::HashSet;
use std::path::Path;

use crate::diagram::Diagram;
use crate::grid::Grid;
use crate::model::{Link, Node};

/// Diagram file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete diagram file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramFile {
    pub version: String,
    pub metadata: DiagramMetadata,
    #[serde(default)]
    pub grid: Grid,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Diagram metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

impl DiagramFile {
    /// Create a new, empty diagram file
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: DiagramMetadata {
                name: name.into(),
                created: now,
                modified: now,
                author: String::new(),
                description: String::new(),
            },
            grid: Grid::default(),
            nodes: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Capture the persistent parts of a diagram, ordered by id
    pub fn from_diagram(name: impl Into<String>, diagram: &Diagram) -> Self {
        let mut file = Self::new(name);
        file.grid = *diagram.grid();
        file.nodes = diagram.nodes().cloned().collect();
        file.nodes.sort_by_key(|n| n.id);
        file.links = diagram.links().cloned().collect();
        file.links.sort_by_key(|l| l.id);
        file
    }

    /// Build a diagram from this file. Part ids must be unique and the grid
    /// must be usable.
    pub fn to_diagram(&self) -> snaplink_core::Result<Diagram> {
        self.grid.validate()?;

        let mut seen = HashSet::new();
        let ids = self
            .nodes
            .iter()
            .map(|n| n.id)
            .chain(self.links.iter().map(|l| l.id));
        for id in ids {
            if !seen.insert(id) {
                return Err(Error::other(format!(
                    "Duplicate part id {} in diagram '{}'",
                    id, self.metadata.name
                )));
            }
        }

        let mut diagram = Diagram::with_grid(self.grid);
        for node in &self.nodes {
            diagram.insert_node(node.clone());
        }
        for link in &self.links {
            diagram.insert_link(link.clone());
        }
        Ok(diagram)
    }

    /// Save diagram to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize diagram")?;

        std::fs::write(path.as_ref(), json).context("Failed to write diagram file")?;

        Ok(())
    }

    /// Load diagram from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read diagram file")?;

        let mut file: DiagramFile =
            serde_json::from_str(&content).context("Failed to parse diagram file")?;

        file.metadata.modified = Utc::now();

        Ok(file)
    }
}
