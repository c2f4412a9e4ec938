// geom.rs - Scene geometry sampling and queries
//
// Pure functions used at scene-construction time and at star-shaped
// spawn time. No state, no allocation (beyond the star vertex scratch).

use crate::sim::TreeWorld;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Uniform sample inside a triangle via barycentric coordinates.
/// The sqrt corrects for the triangular Jacobian so density is uniform
/// in area, not biased toward p1.
pub fn point_in_triangle(rng: &mut u32, p1: Point, p2: Point, p3: Point) -> Point {
    let r1 = TreeWorld::rand(rng);
    let r2 = TreeWorld::rand(rng);
    let s = r1.sqrt();

    Point {
        x: (1.0 - s) * p1.x + s * (1.0 - r2) * p2.x + s * r2 * p3.x,
        y: (1.0 - s) * p1.y + s * (1.0 - r2) * p2.y + s * r2 * p3.y,
    }
}

/// Uniform sample inside an axis-aligned rectangle.
pub fn point_in_rect(rng: &mut u32, x: f32, y: f32, w: f32, h: f32) -> Point {
    Point {
        x: x + TreeWorld::rand(rng) * w,
        y: y + TreeWorld::rand(rng) * h,
    }
}

/// Point-in-star test against a 2*spikes-vertex polygon alternating
/// between outer and inner radius, first vertex pointing up.
/// Even-odd ray cast, edge-exclusive.
pub fn is_in_star(
    px: f32,
    py: f32,
    cx: f32,
    cy: f32,
    spikes: usize,
    outer_r: f32,
    inner_r: f32,
) -> bool {
    let n = spikes * 2;
    if n == 0 {
        return false;
    }

    let mut verts = Vec::with_capacity(n);
    let step = core::f32::consts::PI / spikes as f32;
    for i in 0..n {
        let r = if i % 2 == 0 { outer_r } else { inner_r };
        let a = -core::f32::consts::FRAC_PI_2 + i as f32 * step;
        verts.push(Point::new(cx + a.cos() * r, cy + a.sin() * r));
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (vi, vj) = (verts[i], verts[j]);
        if (vi.y > py) != (vj.y > py) {
            let x_cross = (vj.x - vi.x) * (py - vi.y) / (vj.y - vi.y) + vi.x;
            if px < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    // Solve for barycentric weights of p in (p1, p2, p3).
    fn barycentric(p: Point, p1: Point, p2: Point, p3: Point) -> (f32, f32, f32) {
        let d = (p2.y - p3.y) * (p1.x - p3.x) + (p3.x - p2.x) * (p1.y - p3.y);
        let w1 = ((p2.y - p3.y) * (p.x - p3.x) + (p3.x - p2.x) * (p.y - p3.y)) / d;
        let w2 = ((p3.y - p1.y) * (p.x - p3.x) + (p1.x - p3.x) * (p.y - p3.y)) / d;
        (w1, w2, 1.0 - w1 - w2)
    }

    #[test]
    fn triangle_samples_stay_inside() {
        let mut rng = 0x1234_5678u32;
        let p1 = Point::new(100.0, 20.0);
        let p2 = Point::new(20.0, 200.0);
        let p3 = Point::new(210.0, 180.0);

        for _ in 0..2000 {
            let p = point_in_triangle(&mut rng, p1, p2, p3);
            let (w1, w2, w3) = barycentric(p, p1, p2, p3);
            assert!(w1 >= -1e-4 && w2 >= -1e-4 && w3 >= -1e-4, "outside: {p:?}");
            assert!((w1 + w2 + w3 - 1.0).abs() < 1e-3);
        }
    }

    #[test]
    fn triangle_samples_cover_all_corners() {
        // Uniformity smoke test: every third of the triangle (by nearest
        // vertex) should receive a reasonable share of samples.
        let mut rng = 0xBEEF_CAFEu32;
        let verts = [
            Point::new(0.0, 0.0),
            Point::new(120.0, 0.0),
            Point::new(60.0, 100.0),
        ];
        let mut counts = [0usize; 3];
        for _ in 0..3000 {
            let p = point_in_triangle(&mut rng, verts[0], verts[1], verts[2]);
            let nearest = (0..3)
                .min_by(|&a, &b| {
                    let da = (p.x - verts[a].x).hypot(p.y - verts[a].y);
                    let db = (p.x - verts[b].x).hypot(p.y - verts[b].y);
                    da.partial_cmp(&db).unwrap()
                })
                .unwrap();
            counts[nearest] += 1;
        }
        for c in counts {
            assert!(c > 500, "lopsided sampling: {counts:?}");
        }
    }

    #[test]
    fn rect_samples_stay_inside() {
        let mut rng = 42u32;
        for _ in 0..1000 {
            let p = point_in_rect(&mut rng, 10.0, 20.0, 30.0, 40.0);
            assert!(p.x >= 10.0 && p.x < 40.0);
            assert!(p.y >= 20.0 && p.y < 60.0);
        }
    }

    #[test]
    fn star_contains_its_center() {
        for spikes in [4, 5, 6, 8] {
            assert!(is_in_star(50.0, 50.0, 50.0, 50.0, spikes, 40.0, 16.0));
        }
    }

    #[test]
    fn star_tip_in_notch_out() {
        // Just below the topmost spike tip is inside; the same distance
        // out along a notch direction is not.
        let (cx, cy) = (0.0f32, 0.0f32);
        assert!(is_in_star(cx, cy - 38.0, cx, cy, 5, 40.0, 16.0));
        // Midway between two spikes at outer radius falls in the notch.
        let notch = -core::f32::consts::FRAC_PI_2 + core::f32::consts::PI / 5.0;
        let (nx, ny) = (cx + notch.cos() * 38.0, cy + notch.sin() * 38.0);
        assert!(!is_in_star(nx, ny, cx, cy, 5, 40.0, 16.0));
    }

    #[test]
    fn star_excludes_far_points() {
        assert!(!is_in_star(200.0, 200.0, 0.0, 0.0, 5, 40.0, 16.0));
        assert!(!is_in_star(0.0, -41.0, 0.0, 0.0, 5, 40.0, 16.0));
    }
}
