use crate::error::{GeometryError, Result};
use crate::numeric::approx_eq;
use tracing::warn;

/// Girder node index of every pontoon (`p_node_idx`)
///
/// Matches each pontoon arc position against the cumulative nominal arc length
/// of the girder nodes (`g_s_2D`). The span discretization forces every pontoon
/// position onto a span boundary, so a well-formed input yields exactly one
/// match per pontoon.
///
/// # Errors
/// `PontoonPositionUnmatched` if a position matches no node, or more than one.
pub fn pontoon_node_indices(stations: &[f64], pontoon_positions: &[f64]) -> Result<Vec<usize>> {
    let scale = stations.last().copied().unwrap_or(1.0);

    pontoon_positions
        .iter()
        .map(|&position| {
            let mut matches = stations
                .iter()
                .enumerate()
                .filter(|&(_, &s)| approx_eq(s, position, scale))
                .map(|(idx, _)| idx);

            match (matches.next(), matches.count()) {
                (Some(idx), 0) => Ok(idx),
                (first, rest) => {
                    let n_matches = first.map_or(0, |_| 1 + rest);
                    warn!(
                        "Pontoon at arc position {} matched {} girder nodes",
                        position, n_matches
                    );
                    Err(GeometryError::pontoon_unmatched(position, n_matches))
                }
            }
        })
        .collect()
}
