use bridge_geometry::{BridgeConfig, BridgeGeometry, ColumnOverlap, ShapeMode, error::Result};

/// Example demonstrating how to generate a pontoon bridge model
fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    println!("=== Pontoon Bridge Geometry Example ===\n");

    // 1. Curved bridge with the reference parameters
    let config = BridgeConfig::default();
    let curved = BridgeGeometry::build(&config)?;

    println!("Curved bridge ({}):", config.shape);
    println!("  Arc length: {} m on R = {} m", config.arc_length, config.radius);
    println!("  Chord: {:.3} m, sagitta: {:.3} m", curved.arc.chord, curved.arc.sagitta);
    println!("  Nodes: {}, elements: {}", curved.n_nodes(), curved.n_elements());
    println!("  Pontoons: {}", curved.n_pontoons());
    println!("  Chord-vs-arc error: {:.4} m\n", curved.discretization_error());

    // 2. Straight bridge with a finer mesh and full-height columns
    let config = BridgeConfig::builder()
        .shape(ShapeMode::Straight)
        .fem_max_length(25.0)
        .column_overlap(ColumnOverlap::Neglect)
        .build()
        .expect("all builder fields have defaults");
    let straight = BridgeGeometry::build(&config)?;

    println!("Straight bridge ({}):", config.shape);
    println!("  Nodes: {}, elements: {}", straight.n_nodes(), straight.n_elements());
    println!("  First column height: {:.2} m", straight.column_heights[0]);

    // 3. Dump the first pontoon connection of the curved model
    println!("\n=== First pontoon ===");
    let idx = curved.pontoon_node_indices[0];
    println!(
        "  Girder node {} at ({:.3}, {:.3}, {:.3})",
        idx,
        curved.node_coords[[idx, 0]],
        curved.node_coords[[idx, 1]],
        curved.node_coords[[idx, 2]]
    );
    println!(
        "  Pontoon node at z = {:.3}, column height {:.3} m",
        curved.pontoon_node_coords[[0, 2]],
        curved.column_heights[0]
    );

    Ok(())
}
