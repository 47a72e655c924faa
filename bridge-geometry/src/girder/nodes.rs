use crate::config::{CurvatureDirection, ShapeMode};
use crate::error::{ensure_positive, GeometryError, Result};
use crate::girder::spans::{cumulative_spans, span_lengths};
use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};
use tracing::debug;

/// Closed-form properties of the girder's plan curve
///
/// For a circular arc of radius R and length L:
/// - angle = L / R
/// - chord = 2 R sin(angle / 2)
/// - sagitta = R (1 - cos(angle / 2))
/// - start/end angles are symmetric about the vertical (pi/2 +- angle/2)
///
/// A straight girder has zero angle, zero sagitta and a chord equal to its length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcProperties {
    /// None for a straight girder
    pub radius: Option<f64>,
    pub arc_length: f64,
    /// Subtended angle in radians
    pub angle: f64,
    pub chord: f64,
    pub sagitta: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl ArcProperties {
    /// Properties of a circular arc
    ///
    /// # Errors
    /// `InvalidParameter` if the radius or length is not finite and positive,
    /// or if the arc would wrap past a full circle.
    pub fn curved(radius: f64, arc_length: f64) -> Result<Self> {
        ensure_positive("radius", radius)?;
        ensure_positive("arc_length", arc_length)?;

        let angle = arc_length / radius;
        if angle > TAU {
            return Err(GeometryError::invalid_parameter(
                "arc_length",
                arc_length,
                format!("subtends {:.3} rad on radius {}, more than a full circle", angle, radius),
            ));
        }
        let half = angle / 2.0;

        Ok(Self {
            radius: Some(radius),
            arc_length,
            angle,
            chord: 2.0 * radius * half.sin(),
            sagitta: radius * (1.0 - half.cos()),
            start_angle: FRAC_PI_2 + half,
            end_angle: FRAC_PI_2 - half,
        })
    }

    pub fn straight(arc_length: f64) -> Result<Self> {
        ensure_positive("arc_length", arc_length)?;
        Ok(Self {
            radius: None,
            arc_length,
            angle: 0.0,
            chord: arc_length,
            sagitta: 0.0,
            start_angle: FRAC_PI_2,
            end_angle: FRAC_PI_2,
        })
    }

    pub fn for_shape(shape: ShapeMode, radius: f64, arc_length: f64) -> Result<Self> {
        match shape {
            ShapeMode::Curved => Self::curved(radius, arc_length),
            ShapeMode::Straight => Self::straight(arc_length),
        }
    }

    /// Plan coordinates (x, y) of the point at nominal arc position `s`
    ///
    /// The first node sits at the origin and the chord lies on the x axis.
    pub fn plan_point(&self, s: f64, curvature: CurvatureDirection) -> (f64, f64) {
        match self.radius {
            Some(radius) => {
                let theta = self.start_angle - s / radius;
                let x = radius * theta.cos() + self.chord / 2.0;
                let y = radius * theta.sin() - radius * (self.angle / 2.0).cos();
                (x, curvature.y_sign() * y)
            }
            None => (s, 0.0),
        }
    }
}

/// Girder node coordinates (`g_node_coor`)
///
/// Discretizes the girder with [`span_lengths`], then places one node at every
/// span boundary. Returns an N x 3 array of (x, y, z) with z = `deck_elevation`.
///
/// # Errors
/// Any error from the discretization or from [`ArcProperties::for_shape`].
pub fn girder_node_coordinates(
    radius: f64,
    arc_length: f64,
    pontoon_positions: &[f64],
    deck_elevation: f64,
    max_length: f64,
    shape: ShapeMode,
    curvature: CurvatureDirection,
) -> Result<Array2<f64>> {
    let arc = ArcProperties::for_shape(shape, radius, arc_length)?;
    let spans = span_lengths(arc_length, pontoon_positions, max_length)?;
    let stations = cumulative_spans(&spans);
    Ok(place_nodes(&arc, ArrayView1::from(stations.as_slice()), deck_elevation, curvature))
}

/// Place one node per cumulative arc position in `stations`
pub fn place_nodes(
    arc: &ArcProperties,
    stations: ArrayView1<f64>,
    deck_elevation: f64,
    curvature: CurvatureDirection,
) -> Array2<f64> {
    let mut coords = Array2::zeros((stations.len(), 3));
    for (mut row, &s) in coords.rows_mut().into_iter().zip(stations.iter()) {
        let (x, y) = arc.plan_point(s, curvature);
        row[0] = x;
        row[1] = y;
        row[2] = deck_elevation;
    }

    debug!(
        "Placed {} girder nodes (angle {:.4} rad, chord {:.3} m, sagitta {:.3} m)",
        coords.nrows(),
        arc.angle,
        arc.chord,
        arc.sagitta
    );

    coords
}
