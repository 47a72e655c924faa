use crate::error::{ensure_non_negative, GeometryError, Result};
use ndarray::{Array2, ArrayView2, Axis};

/// Check that every index refers to a girder node
pub(crate) fn check_node_indices(node_coords: ArrayView2<f64>, node_indices: &[usize]) -> Result<()> {
    let n_nodes = node_coords.nrows();
    match node_indices.iter().enumerate().find(|&(_, &idx)| idx >= n_nodes) {
        Some((i, &idx)) => Err(GeometryError::invalid_parameter(
            format!("p_node_idx[{}]", i),
            idx as f64,
            format!("girder has only {} nodes", n_nodes),
        )),
        None => Ok(()),
    }
}

/// Pontoon top-connection node coordinates (`p_node_coor`)
///
/// Each pontoon node shares the (x, y) of its girder node and sits
/// `pontoon_half_height` below it.
pub fn pontoon_node_coordinates(
    node_coords: ArrayView2<f64>,
    node_indices: &[usize],
    pontoon_half_height: f64,
) -> Result<Array2<f64>> {
    ensure_non_negative("pontoon_half_height", pontoon_half_height)?;
    check_node_indices(node_coords, node_indices)?;

    let mut coords = node_coords.select(Axis(0), node_indices);
    coords.column_mut(2).mapv_inplace(|z| z - pontoon_half_height);
    Ok(coords)
}
