//! Node geometry for floating pontoon bridges
//!
//! This crate turns a handful of scalar design parameters into the node and
//! element arrays a structural model needs. The parameters are arc length,
//! pontoon spacing, radius, deck elevation and shape. The outputs are:
//! - girder nodes and elements
//! - element lengths
//! - the pontoon connection nodes
//! - column heights
//!
//! # Quick Start
//!
//! ```rust
//! use bridge_geometry::{BridgeConfig, BridgeGeometry, ShapeMode};
//!
//! let config = BridgeConfig {
//!     arc_length: 2000.0,
//!     radius: 4000.0,
//!     pontoon_spacing: 250.0,
//!     fem_max_length: 50.0,
//!     shape: ShapeMode::Curved,
//!     ..Default::default()
//! };
//!
//! let geometry = BridgeGeometry::build(&config)?;
//! assert_eq!(geometry.n_nodes(), geometry.n_elements() + 1);
//! assert_eq!(geometry.n_pontoons(), 7);
//! # Ok::<(), bridge_geometry::GeometryError>(())
//! ```
//!
//! # Step by step
//!
//! Each pipeline stage is also exposed on its own:
//!
//! ```rust
//! use bridge_geometry::girder::{cumulative_spans, element_nodes, girder_node_coordinates, span_lengths};
//! use bridge_geometry::pontoon::pontoon_node_indices;
//! use bridge_geometry::{CurvatureDirection, ShapeMode};
//!
//! let pontoons = [300.0, 600.0];
//! let spans = span_lengths(900.0, &pontoons, 100.0)?;
//! let nodes = girder_node_coordinates(
//!     5000.0, 900.0, &pontoons, 14.5, 100.0,
//!     ShapeMode::Curved, CurvatureDirection::ConcaveDown,
//! )?;
//! let elements = element_nodes(nodes.view());
//! let p_idx = pontoon_node_indices(&cumulative_spans(&spans), &pontoons)?;
//!
//! assert_eq!(elements.nrows(), spans.len());
//! assert_eq!(p_idx, vec![3, 6]);
//! # Ok::<(), bridge_geometry::GeometryError>(())
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod girder;
pub mod numeric;
pub mod pontoon;

pub use config::{BridgeConfig, BridgeConfigBuilder, ColumnOverlap, CurvatureDirection, ShapeMode};
pub use error::{GeometryError, Result};
pub use geometry::BridgeGeometry;
pub use girder::ArcProperties;
