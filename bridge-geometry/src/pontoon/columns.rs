use crate::config::ColumnOverlap;
use crate::error::{ensure_non_negative, GeometryError, Result};
use crate::pontoon::coordinates::check_node_indices;
use ndarray::{Array1, ArrayView2};

/// Column height at every pontoon (`c_height`)
///
/// Heights are measured down from the pontoon connection node, which sits
/// `pontoon_half_height` below the girder:
/// - `ColumnOverlap::Neglect`: girder z - pontoon_half_height
/// - `ColumnOverlap::Remove`: girder z - pontoon_half_height - (freeboard + cross_section_height / 2)
///
/// So `c + pontoon_half_height + overlap_height(..)` gives back the girder z.
///
/// # Errors
/// `InvalidParameter` for a bad index, a negative dimension, or a column that
/// would end up with negative height.
pub fn column_heights(
    node_coords: ArrayView2<f64>,
    node_indices: &[usize],
    pontoon_half_height: f64,
    overlap: ColumnOverlap,
    freeboard: f64,
    cross_section_height: f64,
) -> Result<Array1<f64>> {
    ensure_non_negative("pontoon_half_height", pontoon_half_height)?;
    ensure_non_negative("freeboard", freeboard)?;
    ensure_non_negative("cross_section_height", cross_section_height)?;
    check_node_indices(node_coords, node_indices)?;

    let removed = pontoon_half_height + overlap_height(overlap, freeboard, cross_section_height);

    node_indices
        .iter()
        .map(|&idx| {
            let height = node_coords[[idx, 2]] - removed;
            // negative means the girder sits below the pontoon top
            if height < 0.0 {
                return Err(GeometryError::invalid_parameter(
                    format!("c_height[{}]", idx),
                    height,
                    "girder is too low for the pontoon and cross-section",
                ));
            }
            Ok(height)
        })
        .collect()
}

/// Height subtracted from the girder elevation for the given overlap mode
pub fn overlap_height(overlap: ColumnOverlap, freeboard: f64, cross_section_height: f64) -> f64 {
    match overlap {
        ColumnOverlap::Neglect => 0.0,
        ColumnOverlap::Remove => freeboard + cross_section_height / 2.0,
    }
}
