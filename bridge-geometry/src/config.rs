use crate::error::{ensure_non_negative, ensure_positive, GeometryError, Result};
use crate::numeric::{bounded_count, MAX_NODES};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Plan shape of the girder
///
/// Serialized with the one-letter codes used by the analysis pipeline.
#[derive(
    Default, Display, EnumString, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum ShapeMode {
    /// Circular arc of constant radius
    #[default]
    #[strum(serialize = "S")]
    #[serde(rename = "S")]
    Curved,
    /// Straight line, radius is ignored
    #[strum(serialize = "I")]
    #[serde(rename = "I")]
    Straight,
}

impl ShapeMode {
    /// Parse a shape code (`"S"` or `"I"`)
    ///
    /// # Errors
    /// Returns `GeometryError::UnsupportedShapeMode` for any other code
    pub fn from_code(code: &str) -> Result<Self> {
        code.trim()
            .parse()
            .map_err(|_| GeometryError::UnsupportedShapeMode(code.to_string()))
    }
}

/// Which side of the chord the arc bulges towards, seen in plan view with +y up
#[derive(Default, Display, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurvatureDirection {
    /// Arc midpoint at +sagitta (∩)
    #[default]
    ConcaveDown,
    /// Arc midpoint at -sagitta (∪)
    ConcaveUp,
}

impl CurvatureDirection {
    /// Sign applied to the y coordinate of curved girder nodes
    pub fn y_sign(&self) -> f64 {
        match self {
            Self::ConcaveDown => 1.0,
            Self::ConcaveUp => -1.0,
        }
    }
}

/// How column heights treat the pontoon and girder geometry at the connection
#[derive(Default, Display, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnOverlap {
    /// Remove the pontoon freeboard and half the girder cross-section
    #[default]
    Remove,
    /// Column runs from the pontoon connection node to the girder centerline
    Neglect,
}

/// Design parameters of a floating pontoon bridge
///
/// All lengths are in meters. z points up with the waterline at z = 0.
///
/// # Example
///
/// ```rust
/// use bridge_geometry::{BridgeConfig, ShapeMode};
///
/// let config = BridgeConfig::builder()
///     .arc_length(1000.0)
///     .pontoon_spacing(200.0)
///     .shape(ShapeMode::Straight)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.pontoon_positions().unwrap(), vec![200.0, 400.0, 600.0, 800.0]);
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default)]
pub struct BridgeConfig {
    /// Total girder length measured along the curve
    pub arc_length: f64,

    /// Horizontal radius of curvature (curved mode only)
    pub radius: f64,

    /// Distance between consecutive pontoons along the curve
    pub pontoon_spacing: f64,

    /// Explicit pontoon arc positions, overriding `pontoon_spacing`
    pub pontoon_positions: Option<Vec<f64>>,

    /// Maximum length of a single finite element
    pub fem_max_length: f64,

    /// Elevation of the girder centerline
    pub deck_elevation: f64,

    /// Offset from the girder centerline down to the pontoon connection node
    pub pontoon_half_height: f64,

    /// Pontoon height above the waterline
    pub freeboard: f64,

    /// Height of the girder cross-section
    pub cross_section_height: f64,

    pub shape: ShapeMode,

    pub curvature: CurvatureDirection,

    pub column_overlap: ColumnOverlap,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            arc_length: 5000.0,
            radius: 5000.0,
            pontoon_spacing: 100.0,
            pontoon_positions: None,
            fem_max_length: 100.0,
            deck_elevation: 14.5,
            pontoon_half_height: 1.75,
            freeboard: 3.5,
            cross_section_height: 3.5,
            shape: ShapeMode::Curved,
            curvature: CurvatureDirection::ConcaveDown,
            column_overlap: ColumnOverlap::Remove,
        }
    }
}

impl BridgeConfig {
    /// Create a new builder for BridgeConfig
    pub fn builder() -> BridgeConfigBuilder {
        BridgeConfigBuilder::default()
    }

    /// Deserialize a configuration from JSON and validate it
    ///
    /// Missing fields take their default values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every scalar parameter
    ///
    /// # Errors
    /// Returns `GeometryError::InvalidParameter` naming the first offending field.
    /// Pontoon positions are checked later, by the span discretization.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("arc_length", self.arc_length)?;
        ensure_positive("fem_max_length", self.fem_max_length)?;
        if self.pontoon_positions.is_none() {
            self.spaced_gap_count()?;
        }
        if self.shape == ShapeMode::Curved {
            ensure_positive("radius", self.radius)?;
        }
        if !self.deck_elevation.is_finite() {
            return Err(GeometryError::invalid_parameter(
                "deck_elevation",
                self.deck_elevation,
                "must be finite",
            ));
        }
        ensure_non_negative("pontoon_half_height", self.pontoon_half_height)?;
        ensure_non_negative("freeboard", self.freeboard)?;
        ensure_non_negative("cross_section_height", self.cross_section_height)?;
        Ok(())
    }

    /// Pontoon arc positions, in increasing order
    ///
    /// Uses the explicit list when present. Otherwise places a pontoon at every
    /// multiple of `pontoon_spacing` strictly inside the bridge. Neither abutment
    /// gets a pontoon.
    ///
    /// # Errors
    /// `InvalidParameter` if the spacing is not positive or is so small that the
    /// bridge would carry more than [`MAX_NODES`] pontoons.
    pub fn pontoon_positions(&self) -> Result<Vec<f64>> {
        if let Some(positions) = &self.pontoon_positions {
            return Ok(positions.clone());
        }
        let n_gaps = self.spaced_gap_count()?;
        Ok((1..n_gaps)
            .map(|k| k as f64 * self.pontoon_spacing)
            .collect())
    }

    fn spaced_gap_count(&self) -> Result<usize> {
        ensure_positive("arc_length", self.arc_length)?;
        ensure_positive("pontoon_spacing", self.pontoon_spacing)?;
        bounded_count(self.arc_length / self.pontoon_spacing).ok_or_else(|| {
            GeometryError::invalid_parameter(
                "pontoon_spacing",
                self.pontoon_spacing,
                format!("{} m would need more than {} pontoons", self.arc_length, MAX_NODES),
            )
        })
    }
}
