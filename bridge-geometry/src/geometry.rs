use crate::config::BridgeConfig;
use crate::error::Result;
use crate::girder::{
    cumulative_spans, element_and_cumulative_lengths, element_nodes, place_nodes, span_lengths,
    ArcProperties,
};
use crate::pontoon::{column_heights, pontoon_node_coordinates, pontoon_node_indices};
use ndarray::{Array1, Array2, ArrayView1};
use serde::Serialize;
use tracing::debug;

/// Complete node/element model of a pontoon bridge
///
/// Built in one pass from a [`BridgeConfig`]. Every array is derived from the
/// configuration and is not modified afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct BridgeGeometry {
    pub config: BridgeConfig,

    pub arc: ArcProperties,

    /// Span length between consecutive girder nodes (`g_L_2D`)
    pub span_lengths: Vec<f64>,

    /// Nominal arc length at each girder node (`g_s_2D`)
    pub stations_2d: Vec<f64>,

    /// Girder node (x, y, z), N x 3 (`g_node_coor`)
    pub node_coords: Array2<f64>,

    /// Element connectivity, (N-1) x 2 (`g_elem_nodes`)
    pub element_nodes: Array2<usize>,

    /// True element lengths (`g_elem_L_3D`)
    pub element_lengths: Array1<f64>,

    /// Cumulative true length at each girder node (`g_s_3D`)
    pub stations_3d: Array1<f64>,

    pub pontoon_positions: Vec<f64>,

    /// Girder node index of every pontoon (`p_node_idx`)
    pub pontoon_node_indices: Vec<usize>,

    /// Pontoon top-connection nodes, P x 3 (`p_node_coor`)
    pub pontoon_node_coords: Array2<f64>,

    /// Column height per pontoon (`c_height`)
    pub column_heights: Array1<f64>,
}

impl BridgeGeometry {
    /// Run the full geometry pipeline
    ///
    /// # Algorithm
    /// 1. Discretize the arc length into spans, with pontoons as mandatory boundaries
    /// 2. Place girder nodes on the arc (or line)
    /// 3. Connect consecutive nodes into elements
    /// 4. Measure element and cumulative 3D lengths
    /// 5. Find the girder node under every pontoon
    /// 6. Offset those nodes down to the pontoon connection
    /// 7. Compute column heights
    ///
    /// # Errors
    /// Any error from validation or one of the steps above
    pub fn build(config: &BridgeConfig) -> Result<Self> {
        config.validate()?;

        let pontoon_positions = config.pontoon_positions()?;
        let arc = ArcProperties::for_shape(config.shape, config.radius, config.arc_length)?;

        let span_lengths = span_lengths(config.arc_length, &pontoon_positions, config.fem_max_length)?;
        let stations_2d = cumulative_spans(&span_lengths);

        let node_coords = place_nodes(
            &arc,
            ArrayView1::from(stations_2d.as_slice()),
            config.deck_elevation,
            config.curvature,
        );
        let element_nodes = element_nodes(node_coords.view());
        let (element_lengths, stations_3d) = element_and_cumulative_lengths(node_coords.view());

        let pontoon_node_indices = pontoon_node_indices(&stations_2d, &pontoon_positions)?;
        let pontoon_node_coords = pontoon_node_coordinates(
            node_coords.view(),
            &pontoon_node_indices,
            config.pontoon_half_height,
        )?;
        let column_heights = column_heights(
            node_coords.view(),
            &pontoon_node_indices,
            config.pontoon_half_height,
            config.column_overlap,
            config.freeboard,
            config.cross_section_height,
        )?;

        let geometry = Self {
            config: config.clone(),
            arc,
            span_lengths,
            stations_2d,
            node_coords,
            element_nodes,
            element_lengths,
            stations_3d,
            pontoon_positions,
            pontoon_node_indices,
            pontoon_node_coords,
            column_heights,
        };

        debug!(
            "Built {} bridge: {} nodes, {} elements, {} pontoons, discretization error {:.3e} m",
            config.shape,
            geometry.n_nodes(),
            geometry.n_elements(),
            geometry.n_pontoons(),
            geometry.discretization_error()
        );

        Ok(geometry)
    }

    pub fn n_nodes(&self) -> usize {
        self.node_coords.nrows()
    }

    pub fn n_elements(&self) -> usize {
        self.element_nodes.nrows()
    }

    pub fn n_pontoons(&self) -> usize {
        self.pontoon_node_indices.len()
    }

    /// Sum of the true element lengths
    pub fn total_length_3d(&self) -> f64 {
        self.stations_3d.last().copied().unwrap_or(0.0)
    }

    /// Nominal arc length minus the summed chord lengths
    ///
    /// Zero for a straight bridge, small and positive for a curved one.
    pub fn discretization_error(&self) -> f64 {
        self.config.arc_length - self.total_length_3d()
    }

    /// Serialize the full model to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ColumnOverlap, ShapeMode};
    use crate::error::GeometryError;
    use approx::assert_relative_eq;

    #[test]
    fn test_build_default_bridge() {
        let geometry = BridgeGeometry::build(&BridgeConfig::default()).unwrap();

        // 5000 m at 100 m spacing and 100 m max length: one span per pontoon gap
        assert_eq!(geometry.span_lengths.len(), 50);
        assert_eq!(geometry.n_nodes(), 51);
        assert_eq!(geometry.n_elements(), 50);
        assert_eq!(geometry.n_pontoons(), 49);
        assert_eq!(geometry.pontoon_node_indices[0], 1);
        assert_eq!(geometry.pontoon_node_indices[48], 49);
        assert_eq!(geometry.pontoon_node_coords.nrows(), 49);
        assert_relative_eq!(geometry.column_heights[0], 14.5 - 1.75 - 3.5 - 1.75);
        assert!(geometry.discretization_error() > 0.0);
    }

    #[test]
    fn test_build_straight_bridge_has_no_discretization_error() {
        let config = BridgeConfig {
            shape: ShapeMode::Straight,
            column_overlap: ColumnOverlap::Neglect,
            ..Default::default()
        };
        let geometry = BridgeGeometry::build(&config).unwrap();
        assert_relative_eq!(geometry.total_length_3d(), 5000.0, epsilon = 1e-9);
        assert!(geometry.column_heights.iter().all(|&c| c == 14.5 - 1.75));
    }

    #[test]
    fn test_build_rejects_invalid_config() {
        let config = BridgeConfig {
            arc_length: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            BridgeGeometry::build(&config),
            Err(GeometryError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_to_json() {
        let config = BridgeConfig {
            arc_length: 300.0,
            pontoon_spacing: 150.0,
            ..Default::default()
        };
        let json = BridgeGeometry::build(&config).unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["pontoon_node_indices"], serde_json::json!([2]));
        assert_eq!(value["config"]["shape"], "S");
    }
}
