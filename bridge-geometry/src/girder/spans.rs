use crate::error::{ensure_positive, GeometryError, Result};
use crate::numeric::{approx_eq, bounded_count, is_negligible, MAX_NODES};
use itertools::Itertools;
use tracing::{debug, warn};

/// Check that pontoon positions are finite, inside `[0, arc_length]` and strictly increasing
pub fn validate_pontoon_positions(arc_length: f64, pontoon_positions: &[f64]) -> Result<()> {
    for (i, &position) in pontoon_positions.iter().enumerate() {
        let name = format!("pontoon_positions[{}]", i);
        if !position.is_finite() {
            return Err(GeometryError::invalid_parameter(name, position, "must be finite"));
        }
        let inside = (0.0..=arc_length).contains(&position) || approx_eq(position, arc_length, arc_length);
        if !inside {
            return Err(GeometryError::invalid_parameter(
                name,
                position,
                format!("must lie within [0, {}]", arc_length),
            ));
        }
    }

    for (i, (prev, next)) in pontoon_positions.iter().tuple_windows().enumerate() {
        if *next <= *prev || approx_eq(*prev, *next, arc_length) {
            return Err(GeometryError::invalid_parameter(
                format!("pontoon_positions[{}]", i + 1),
                *next,
                format!("must be strictly greater than the previous position {}", prev),
            ));
        }
    }

    Ok(())
}

/// Discretize the girder into spans (`g_L_2D`)
///
/// The pontoon positions are forced to be span boundaries. Every gap between
/// consecutive boundaries (including the two abutments at 0 and `arc_length`)
/// is split into the fewest equal sub-spans that are no longer than
/// `max_length`.
///
/// # Algorithm
/// - boundaries = [0, p_1, ..., p_n, arc_length]
/// - zero-length gaps (a pontoon on an abutment) are skipped
/// - n_sub = ceil(gap / max_length), unless the ratio is an integer within tolerance
///
/// # Errors
/// - `InvalidParameter` for a non-positive length or a bad pontoon position
/// - `InvalidParameter` on `fem_max_length` if the mesh would need
///   more than [`MAX_NODES`](crate::numeric::MAX_NODES) nodes
/// - `SpanConstraintViolated` if a produced span is still longer than `max_length`
pub fn span_lengths(arc_length: f64, pontoon_positions: &[f64], max_length: f64) -> Result<Vec<f64>> {
    ensure_positive("arc_length", arc_length)?;
    ensure_positive("fem_max_length", max_length)?;
    validate_pontoon_positions(arc_length, pontoon_positions)?;

    let boundaries = std::iter::once(0.0)
        .chain(pontoon_positions.iter().copied())
        .chain(std::iter::once(arc_length));

    let too_many_nodes = || {
        GeometryError::invalid_parameter(
            "fem_max_length",
            max_length,
            format!("meshing {} m would need more than {} nodes", arc_length, MAX_NODES),
        )
    };

    let mut gaps = Vec::new();
    let mut n_spans = 0usize;
    for (start, end) in boundaries.tuple_windows() {
        let gap = end - start;
        if is_negligible(gap, arc_length) {
            continue;
        }
        let n_sub = bounded_count(gap / max_length)
            .ok_or_else(too_many_nodes)?
            .max(1);
        n_spans += n_sub;
        if n_spans >= MAX_NODES {
            return Err(too_many_nodes());
        }
        gaps.push((gap, n_sub));
    }

    let mut spans = Vec::with_capacity(n_spans);
    for (gap, n_sub) in gaps {
        spans.extend(std::iter::repeat_n(gap / n_sub as f64, n_sub));
    }

    check_span_lengths(&spans, max_length)?;

    debug!(
        "Discretized {} m into {} spans ({} pontoon boundaries, max element length {} m)",
        arc_length,
        spans.len(),
        pontoon_positions.len(),
        max_length
    );

    Ok(spans)
}

/// Verify that no span exceeds `max_length`
pub fn check_span_lengths(spans: &[f64], max_length: f64) -> Result<()> {
    let violation = spans
        .iter()
        .enumerate()
        .find(|&(_, &length)| length > max_length && !approx_eq(length, max_length, max_length));

    if let Some((index, &length)) = violation {
        warn!(
            "Span {} is {} m long, which exceeds the max element length of {} m",
            index, length, max_length
        );
        return Err(GeometryError::span_constraint_violated(index, length, max_length));
    }
    Ok(())
}

/// Cumulative nominal arc length at each node (`g_s_2D`)
///
/// Returns `spans.len() + 1` values starting at 0.
pub fn cumulative_spans(spans: &[f64]) -> Vec<f64> {
    std::iter::once(0.0)
        .chain(spans.iter().scan(0.0, |acc, &length| {
            *acc += length;
            Some(*acc)
        }))
        .collect()
}
