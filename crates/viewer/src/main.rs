//! Quadview - terminal viewer for the region quadtree index.
//!
//! Scripted stand-in for a mouse-driven window: scatter random items
//! over the index, render frames around a moving probe, add a second
//! burst, then rebuild the tree for a larger viewport.

use glam::IVec2;
use spatial::{Region, SpatialIndex};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod render;
mod scatter;

use config::Config;
use scatter::Scatter;

/// Probe rectangle centered on a pointer position.
fn probe_at(pointer: IVec2, size: i32) -> Region {
    Region::new(pointer.x - size / 2, pointer.y - size / 2, size, size)
}

/// Index region: the viewport inset by the configured margin.
fn working_area(viewport_width: i32, viewport_height: i32, margin: i32) -> Region {
    Region::new(
        margin,
        margin,
        viewport_width - 2 * margin,
        viewport_height - 2 * margin,
    )
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Quadview v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load()?;
    info!("Loaded configuration");
    info!("  Viewport: {}x{}", config.viewport.width, config.viewport.height);
    info!("  Items per burst: {}", config.scatter.count);
    info!("  Probe size: {}", config.probe.size);

    let area = working_area(config.viewport.width, config.viewport.height, config.viewport.margin);
    let mut index = SpatialIndex::new(area);
    let mut scatter = Scatter::new(config.scatter.seed);
    scatter.burst(&mut index, &config.scatter);

    // Sweep the probe across the viewport, one frame per stop.
    let stops = [
        IVec2::new(config.viewport.width / 4, config.viewport.height / 4),
        IVec2::new(config.viewport.width / 2, config.viewport.height / 2),
        IVec2::new(3 * config.viewport.width / 4, 3 * config.viewport.height / 4),
    ];
    for pointer in stops {
        let probe = probe_at(pointer, config.probe.size);
        println!(
            "{}",
            render::render_frame(
                &index,
                probe,
                config.viewport.canvas_cols,
                config.viewport.canvas_rows
            )
        );
    }

    // A click would add another burst of random items.
    scatter.burst(&mut index, &config.scatter);

    // A window resize grows the viewport and rebuilds the tree.
    let grown = working_area(
        config.viewport.width * 5 / 4,
        config.viewport.height * 5 / 4,
        config.viewport.margin,
    );
    info!("Resizing viewport to {:?}", grown);
    index.resize(grown);

    let probe = probe_at(
        IVec2::new(config.viewport.width / 2, config.viewport.height / 2),
        config.probe.size,
    );
    println!(
        "{}",
        render::render_frame(
            &index,
            probe,
            config.viewport.canvas_cols,
            config.viewport.canvas_rows
        )
    );

    info!(
        total = index.total_count(),
        unhandled = index.unhandled_count(),
        "done"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_is_centered_on_pointer() {
        let probe = probe_at(IVec2::new(100, 80), 150);
        assert_eq!(probe, Region::new(25, 5, 150, 150));
    }

    #[test]
    fn test_working_area_is_inset() {
        assert_eq!(working_area(1600, 800, 5), Region::new(5, 5, 1590, 790));
    }
}
