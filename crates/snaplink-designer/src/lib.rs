//! # SnapLink Designer
//!
//! Diagram model and interactive link reshaping.
//!
//! ## Core Components
//!
//! - **Diagram**: nodes, links, and temporary adornments with a quadtree
//!   spatial index and an ambient grid
//! - **Grid snapping**: rounds pointer positions to the nearest grid
//!   intersection, falling back to the diagram grid for unset settings
//! - **Reshaping**: [`SnapLinkReshaper`] corrects the point a reshape handle
//!   is dragged to, keeping the segments of orthogonal links off avoidable
//!   nodes; [`LinkReshapeDriver`] runs the gesture against a [`Diagram`]
//! - **Serialization**: JSON diagram files
//!
//! ## Architecture
//!
//! ```text
//! LinkReshapeDriver (gesture lifecycle, route updates)
//!   └── PointCorrector
//!         └── SnapLinkReshaper
//!               ├── grid::snap
//!               └── AvoidanceSession ──► PartQuery (Diagram + SpatialIndex)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use snaplink_designer::{Diagram, LinkReshapeDriver, Point, Rect, Routing, SnapLinkReshaper};
//!
//! let mut diagram = Diagram::new();
//! diagram.add_node(Rect::new(90.0, 40.0, 20.0, 20.0));
//! let link = diagram.add_link(
//!     vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(100.0, 100.0)],
//!     Routing::Orthogonal,
//! );
//!
//! let mut driver = LinkReshapeDriver::new(SnapLinkReshaper::default());
//! driver.activate(&mut diagram, link, 1, Point::new(100.0, 0.0));
//!
//! // Would drag the first segment across the node: refused.
//! let p = driver.pointer_moved(&mut diagram, Point::new(100.0, 50.0));
//! assert_eq!(p, Some(Point::new(100.0, 0.0)));
//!
//! driver.deactivate(&mut diagram, true);
//! ```

pub mod diagram;
pub mod grid;
pub mod model;
pub mod reshaping;
pub mod serialization;
pub mod spatial_index;

pub use diagram::{Diagram, PartList};
pub use grid::{snap, Grid};
pub use model::{Adornment, Link, Node, PartId, PartKind, PartRef, Point, Rect, Routing, Size};
pub use reshaping::{
    AvoidanceSession, ConnectorView, LinkReshapeDriver, PartQuery, PartSearch,
    PointCorrector, ReshapeConfig, ReshapeContext, ReshapeHandle, SnapLinkReshaper,
};
pub use serialization::DiagramFile;
pub use spatial_index::{Bounds, SpatialIndex, SpatialIndexStats};
