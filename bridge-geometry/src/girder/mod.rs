pub mod spans;
pub mod nodes;
pub mod elements;

pub use spans::{span_lengths, cumulative_spans, check_span_lengths, validate_pontoon_positions};
pub use nodes::{girder_node_coordinates, place_nodes, ArcProperties};
pub use elements::{element_nodes, element_lengths, cumulative_lengths, element_and_cumulative_lengths};
