use itertools::Itertools;
use ndarray::{Array1, Array2, ArrayView2};

/// Element connectivity (`g_elem_nodes`)
///
/// For N nodes returns an (N-1) x 2 array of consecutive index pairs (i, i+1).
pub fn element_nodes(node_coords: ArrayView2<f64>) -> Array2<usize> {
    let n_elements = node_coords.nrows().saturating_sub(1);
    Array2::from_shape_fn((n_elements, 2), |(i, j)| i + j)
}

/// Euclidean length of every element (`g_elem_L_3D`)
pub fn element_lengths(node_coords: ArrayView2<f64>) -> Array1<f64> {
    node_coords
        .rows()
        .into_iter()
        .tuple_windows()
        .map(|(a, b)| (&b - &a).mapv(|d| d * d).sum().sqrt())
        .collect()
}

/// Cumulative 3D length at each node (`g_s_3D`), starting at 0
pub fn cumulative_lengths(element_lengths: &Array1<f64>) -> Array1<f64> {
    std::iter::once(0.0)
        .chain(element_lengths.iter().scan(0.0, |acc, &length| {
            *acc += length;
            Some(*acc)
        }))
        .collect()
}

/// Element lengths and the cumulative lengths built from them
pub fn element_and_cumulative_lengths(node_coords: ArrayView2<f64>) -> (Array1<f64>, Array1<f64>) {
    let lengths = element_lengths(node_coords);
    let cumulative = cumulative_lengths(&lengths);
    (lengths, cumulative)
}
