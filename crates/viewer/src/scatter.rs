//! Pseudo-random item population.

use crate::config::ScatterConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spatial::{Item, Region, SpatialIndex};
use tracing::info;

/// Seeded generator scattering fixed-size items over an extent.
#[derive(Debug)]
pub struct Scatter {
    rng: StdRng,
}

impl Scatter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Insert one burst of random items into the index.
    pub fn burst(&mut self, index: &mut SpatialIndex, config: &ScatterConfig) {
        for _ in 0..config.count {
            let x = self.rng.random_range(0..config.extent_x.max(1));
            let y = self.rng.random_range(0..config.extent_y.max(1));
            index.insert(Item::new(Region::new(x, y, config.item_size, config.item_size)));
        }
        info!(
            inserted = config.count,
            total = index.total_count(),
            unhandled = index.unhandled_count(),
            "scattered items"
        );
    }
}
