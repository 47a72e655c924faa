//! Error handling tests
//!
//! Each failure mode of the pipeline must surface as its own `GeometryError`
//! variant rather than a panic.

use bridge_geometry::girder::{check_span_lengths, girder_node_coordinates};
use bridge_geometry::pontoon::{column_heights, pontoon_node_indices};
use bridge_geometry::{
    BridgeConfig, BridgeGeometry, ColumnOverlap, CurvatureDirection, GeometryError, ShapeMode,
};
use ndarray::array;

#[test]
fn test_invalid_parameter_errors() {
    for config in [
        BridgeConfig {
            arc_length: -10.0,
            ..Default::default()
        },
        BridgeConfig {
            radius: 0.0,
            ..Default::default()
        },
        BridgeConfig {
            radius: f64::INFINITY,
            ..Default::default()
        },
        BridgeConfig {
            fem_max_length: f64::NAN,
            ..Default::default()
        },
        BridgeConfig {
            pontoon_spacing: 0.0,
            ..Default::default()
        },
        BridgeConfig {
            deck_elevation: f64::NAN,
            ..Default::default()
        },
        BridgeConfig {
            cross_section_height: -3.5,
            ..Default::default()
        },
        BridgeConfig {
            pontoon_positions: Some(vec![300.0, 200.0]),
            ..Default::default()
        },
        BridgeConfig {
            pontoon_positions: Some(vec![6000.0]),
            ..Default::default()
        },
        // Meshes too fine to allocate
        BridgeConfig {
            pontoon_spacing: 1e-300,
            ..Default::default()
        },
        BridgeConfig {
            fem_max_length: 1e-300,
            ..Default::default()
        },
        // More than a full turn
        BridgeConfig {
            radius: 500.0,
            ..Default::default()
        },
    ] {
        let error = BridgeGeometry::build(&config).unwrap_err();
        assert!(
            matches!(error, GeometryError::InvalidParameter { .. }),
            "expected InvalidParameter for {:?}, got {}",
            config,
            error
        );
        assert!(error.to_string().contains("Invalid parameter"));
    }
}

#[test]
fn test_span_constraint_violated() {
    let error = check_span_lengths(&[100.0, 150.0], 100.0).unwrap_err();
    assert!(matches!(
        error,
        GeometryError::SpanConstraintViolated { index: 1, .. }
    ));
    assert!(error.to_string().contains("exceeds the max element length"));
}

#[test]
fn test_pontoon_position_unmatched() {
    let error = pontoon_node_indices(&[0.0, 50.0, 100.0], &[75.0]).unwrap_err();
    assert!(matches!(
        error,
        GeometryError::PontoonPositionUnmatched { matches: 0, .. }
    ));
    assert!(error.to_string().contains("75"));
}

#[test]
fn test_unsupported_shape_mode() {
    let error = ShapeMode::from_code("O").unwrap_err();
    assert!(matches!(error, GeometryError::UnsupportedShapeMode(_)));

    let error = BridgeConfig::from_json_str(r#"{ "shape": "O" }"#).unwrap_err();
    assert!(matches!(error, GeometryError::Serialization(_)));
}

#[test]
fn test_negative_column_height() {
    let config = BridgeConfig {
        deck_elevation: 4.0,
        column_overlap: ColumnOverlap::Remove,
        ..Default::default()
    };
    assert!(matches!(
        BridgeGeometry::build(&config),
        Err(GeometryError::InvalidParameter { .. })
    ));

    let girder = array![[0.0, 0.0, 4.0]];
    assert!(column_heights(girder.view(), &[0], 1.75, ColumnOverlap::Neglect, 3.5, 3.5).is_ok());
    assert!(column_heights(girder.view(), &[0], 4.5, ColumnOverlap::Neglect, 3.5, 3.5).is_err());
}

#[test]
fn test_straight_mode_ignores_radius() {
    let coords = girder_node_coordinates(
        -1.0,
        500.0,
        &[250.0],
        10.0,
        100.0,
        ShapeMode::Straight,
        CurvatureDirection::ConcaveDown,
    )
    .unwrap();
    assert_eq!(coords.nrows(), 7);

    assert!(girder_node_coordinates(
        -1.0,
        500.0,
        &[250.0],
        10.0,
        100.0,
        ShapeMode::Curved,
        CurvatureDirection::ConcaveDown,
    )
    .is_err());
}
