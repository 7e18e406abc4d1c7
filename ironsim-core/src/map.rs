//! Province map: a static grid of cells generated once from a seed.
//!
//! Ownership never changes after generation; wars have no territorial
//! effect. Hit-testing returns the last matching cell so overlap
//! semantics are well defined even though grid cells never overlap.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub const PROVINCE_COUNT: usize = 30;
pub const GRID_COLUMNS: usize = 10;

/// Horizontal/vertical spacing between cell centers.
const CELL_SPACING_X: f32 = 80.0;
const CELL_SPACING_Y: f32 = 160.0;
/// Clickable half-extents of a cell around its center.
const CELL_HALF_WIDTH: f32 = 30.0;
const CELL_HALF_HEIGHT: f32 = 70.0;

/// Owner names assigned uniformly at random.
pub const OWNERS: [&str; 6] = [
    "Germany",
    "France",
    "Soviet Union",
    "United Kingdom",
    "Italy",
    "Poland",
];

/// Terrain palette assigned uniformly at random.
pub const PALETTE: [&str; 5] = ["#8B4513", "#228B22", "#4682B4", "#DAA520", "#CD853F"];

/// A single map cell. Created at startup, never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Province {
    pub id: u16,
    /// Cell center.
    pub x: f32,
    pub y: f32,
    pub owner: String,
    pub color: String,
    pub victory_points: u8,
}

impl Province {
    /// Point-in-axis-aligned-rectangle test against the clickable bounds.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x - CELL_HALF_WIDTH
            && x <= self.x + CELL_HALF_WIDTH
            && y >= self.y - CELL_HALF_HEIGHT
            && y <= self.y + CELL_HALF_HEIGHT
    }
}

/// Generate the province grid for a seed.
///
/// Deterministic: the same seed always yields the same owners, colors and
/// victory points.
pub fn generate_provinces(seed: u64) -> Vec<Province> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..PROVINCE_COUNT)
        .map(|i| {
            let x = (i % GRID_COLUMNS) as f32 * CELL_SPACING_X + CELL_SPACING_X / 2.0;
            let y = (i / GRID_COLUMNS) as f32 * CELL_SPACING_Y + CELL_SPACING_Y / 2.0;

            Province {
                id: i as u16,
                x,
                y,
                owner: OWNERS[rng.gen_range(0..OWNERS.len())].to_string(),
                color: PALETTE[rng.gen_range(0..PALETTE.len())].to_string(),
                victory_points: rng.gen_range(1..=20),
            }
        })
        .collect()
}

/// Find the province containing a point.
///
/// Iterates every candidate and keeps the LAST match; callers relying on
/// overlap resolution get the highest-index cell.
pub fn province_at(provinces: &[Province], x: f32, y: f32) -> Option<usize> {
    let mut hit = None;
    for (index, province) in provinces.iter().enumerate() {
        if province.contains(x, y) {
            hit = Some(index);
        }
    }
    hit
}
