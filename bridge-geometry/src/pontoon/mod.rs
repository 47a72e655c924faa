pub mod lookup;
pub mod coordinates;
pub mod columns;

pub use lookup::pontoon_node_indices;
pub use coordinates::pontoon_node_coordinates;
pub use columns::{column_heights, overlap_height};
