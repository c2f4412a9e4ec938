// scene.rs - Procedural tree construction
//
// Samples the trunk, three stacked canopy layers and the top star into
// the tree particle population. Every particle starts at a random spot
// in the viewport and springs toward its sampled home (fly-in).

use crate::geom::{self, Point};
use crate::sim::TreeWorld;
use crate::sim::tree::{TreeKind, TreeParticles};

pub const MAX_TREE_HEIGHT: f32 = 560.0;
pub const MAX_TREE_WIDTH: f32 = 420.0;
pub const GROUND_OFFSET: f32 = 40.0;

const CANOPY_LAYERS: usize = 3;
const LAYER_SHRINK: f32 = 0.78;
const EDGE_BAND: f32 = 0.85;
const TRUNK_DENSITY: f32 = 0.04; // particles per px^2
const CANOPY_DENSITY: f32 = 0.05;
const STAR_TRIALS: usize = 400;
const STAR_SPIKES: usize = 5;
const STAR_OUTER_R: f32 = 26.0;
const STAR_INNER_R: f32 = 10.0;

const LEAF_COLORS: [&str; 4] = ["#1b5e20", "#2e7d32", "#388e3c", "#43a047"];
const TRUNK_COLORS: [&str; 3] = ["#4e342e", "#5d4037", "#6d4c41"];
const STAR_COLOR: &str = "#ffd700";

fn pick(colors: &[&'static str], rng: &mut u32) -> &'static str {
    colors[(TreeWorld::rand(rng) * colors.len() as f32) as usize % colors.len()]
}

/// Scatter position for the fly-in effect.
fn scatter(w: f32, h: f32, rng: &mut u32) -> (f32, f32) {
    (TreeWorld::rand(rng) * w, TreeWorld::rand(rng) * h)
}

/// Build the tree shape into `tree`. Returns false (and builds nothing)
/// on degenerate dimensions.
pub fn build_tree(tree: &mut TreeParticles, w: f32, h: f32, rng: &mut u32) -> bool {
    if w <= 0.0 || h <= 0.0 {
        return false;
    }

    let tree_h = (h * 0.55).min(MAX_TREE_HEIGHT);
    let base_w = (w * 0.38).min(MAX_TREE_WIDTH);
    let cx = w / 2.0;
    let base_y = h - GROUND_OFFSET;

    // Trunk: uniform rectangle sampling, density proportional to area.
    let trunk_w = base_w * 0.14;
    let trunk_h = tree_h * 0.18;
    let trunk_x = cx - trunk_w / 2.0;
    let trunk_y = base_y - trunk_h;
    let trunk_count = (trunk_w * trunk_h * TRUNK_DENSITY) as usize;
    for _ in 0..trunk_count {
        let p = geom::point_in_rect(rng, trunk_x, trunk_y, trunk_w, trunk_h);
        let (sx, sy) = scatter(w, h, rng);
        tree.spawn_shape(
            sx,
            sy,
            p.x,
            p.y,
            1.5 + TreeWorld::rand(rng) * 1.5,
            pick(&TRUNK_COLORS, rng),
            TreeKind::Trunk,
            false,
            Some((trunk_x, trunk_x + trunk_w)),
            rng,
        );
    }

    // Canopy: stacked triangles, each narrower and offset upward.
    let canopy_h = tree_h - trunk_h;
    let layer_h = canopy_h * 0.5;
    let layer_lift = canopy_h * 0.25;
    for layer in 0..CANOPY_LAYERS {
        let lw = base_w * LAYER_SHRINK.powi(layer as i32);
        let layer_base = base_y - trunk_h - layer as f32 * layer_lift;
        let apex = Point::new(cx, layer_base - layer_h);
        let left = Point::new(cx - lw / 2.0, layer_base);
        let right = Point::new(cx + lw / 2.0, layer_base);

        let count = (lw * layer_h / 2.0 * CANOPY_DENSITY) as usize;
        for _ in 0..count {
            let p = geom::point_in_triangle(rng, apex, left, right);

            // Half-width of the triangle at this height; particles past
            // 85% of it are edge particles and keep the silhouette.
            let t = ((layer_base - p.y) / layer_h).clamp(0.0, 1.0);
            let half_w_local = geom::lerp(lw / 2.0, 0.0, t);
            let band = half_w_local * EDGE_BAND;
            let is_edge = (p.x - cx).abs() > band;
            let bounds = if is_edge { None } else { Some((cx - band, cx + band)) };

            let (sx, sy) = scatter(w, h, rng);
            tree.spawn_shape(
                sx,
                sy,
                p.x,
                p.y,
                1.0 + TreeWorld::rand(rng) * 2.0,
                pick(&LEAF_COLORS, rng),
                TreeKind::Leaf,
                is_edge,
                bounds,
                rng,
            );
        }
    }

    // Star: rejection-sample the bounding box of the star polygon.
    let star_cy = base_y - trunk_h - (CANOPY_LAYERS - 1) as f32 * layer_lift - layer_h;
    for _ in 0..STAR_TRIALS {
        let p = geom::point_in_rect(
            rng,
            cx - STAR_OUTER_R,
            star_cy - STAR_OUTER_R,
            STAR_OUTER_R * 2.0,
            STAR_OUTER_R * 2.0,
        );
        if !geom::is_in_star(p.x, p.y, cx, star_cy, STAR_SPIKES, STAR_OUTER_R, STAR_INNER_R) {
            continue;
        }
        let (sx, sy) = scatter(w, h, rng);
        tree.spawn_shape(
            sx,
            sy,
            p.x,
            p.y,
            1.0 + TreeWorld::rand(rng) * 1.5,
            STAR_COLOR,
            TreeKind::Star,
            false,
            None,
            rng,
        );
    }

    true
}
