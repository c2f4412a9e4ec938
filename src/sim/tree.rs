// tree.rs - Tree-shape particles plus explosion/spark debris
//
// Shape particles (leaf/trunk/star/ornament) keep a fixed origin and are
// pulled back to it by a damped spring every frame. Explosion and spark
// particles ignore their origin entirely: free flight under gravity with
// life decay.

use super::TreeWorld;
use super::shockwave::Shockwave;

const GRAVITY: f32 = 0.06;
const REPULSE_RADIUS: f32 = 90.0;
const RING_BAND: f32 = 30.0;
const RING_PUSH: f32 = 12.0;

pub const ACCENT_COLORS: [&str; 6] = [
    "#ff5252", "#ffd740", "#40c4ff", "#ff4081", "#b388ff", "#69f0ae",
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TreeKind {
    Leaf,
    Trunk,
    Star,
    Ornament,
    UserOrnament,
    Explosion,
    Spark,
}

#[derive(Clone, Copy)]
pub struct TreeParticle {
    pub x: f32,
    pub y: f32,
    pub origin_x: f32,
    pub origin_y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub color: &'static str,
    pub density: f32,
    pub friction: f32,
    pub ease: f32,
    pub kind: TreeKind,
    pub life: f32,
    pub decay: f32,
    pub is_edge: bool,
    pub can_sway: bool,
    pub reactive: bool,
    pub color_timer: u16,
    pub bounds: Option<(f32, f32)>,
}

pub struct TreeParticles {
    pub list: Vec<TreeParticle>,
}

impl TreeParticles {
    pub fn new() -> Self {
        Self { list: Vec::new() }
    }

    pub fn clear_shape(&mut self) {
        self.list.retain(|p| matches!(p.kind, TreeKind::Explosion | TreeKind::Spark));
    }

    /// Shape particle with a home position. Initial x/y is wherever the
    /// scene builder scattered it; the spring pulls it home (fly-in).
    pub fn spawn_shape(
        &mut self,
        x: f32,
        y: f32,
        origin_x: f32,
        origin_y: f32,
        size: f32,
        color: &'static str,
        kind: TreeKind,
        is_edge: bool,
        bounds: Option<(f32, f32)>,
        rng: &mut u32,
    ) {
        let can_sway = !is_edge && TreeWorld::rand(rng) < 0.2;
        self.list.push(TreeParticle {
            x,
            y,
            origin_x,
            origin_y,
            vx: 0.0,
            vy: 0.0,
            size,
            color,
            density: 1.0 + TreeWorld::rand(rng) * 9.0,
            friction: 0.82 + TreeWorld::rand(rng) * 0.08,
            ease: 0.04 + TreeWorld::rand(rng) * 0.06,
            kind,
            life: 1.0,
            decay: 0.0,
            is_edge,
            can_sway,
            reactive: TreeWorld::rand(rng) < 0.5,
            color_timer: 40 + (TreeWorld::rand(rng) * 80.0) as u16,
            bounds,
        });
    }

    /// Outward-radiating debris burst (firework sparks, gift pops).
    pub fn spawn_burst(
        &mut self,
        x: f32,
        y: f32,
        count: usize,
        colors: &[&'static str],
        kind: TreeKind,
        rng: &mut u32,
    ) {
        for _ in 0..count {
            let angle = TreeWorld::rand(rng) * core::f32::consts::TAU;
            let speed = 1.0 + TreeWorld::rand(rng) * 6.0;
            let color = colors[(TreeWorld::rand(rng) * colors.len() as f32) as usize % colors.len()];
            self.list.push(TreeParticle {
                x,
                y,
                origin_x: x,
                origin_y: y,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                size: 1.0 + TreeWorld::rand(rng) * 2.0,
                color,
                density: 1.0,
                friction: 0.955 + TreeWorld::rand(rng) * 0.02,
                ease: 0.0,
                kind,
                life: 1.0,
                decay: 0.008 + TreeWorld::rand(rng) * 0.02,
                is_edge: false,
                can_sway: false,
                reactive: false,
                color_timer: 0,
                bounds: None,
            });
        }
    }

    /// Hang an ornament at a random leaf's home position.
    pub fn add_ornament(&mut self, user: bool, rng: &mut u32) {
        let leaves: Vec<usize> = self
            .list
            .iter()
            .enumerate()
            .filter(|(_, p)| p.kind == TreeKind::Leaf)
            .map(|(i, _)| i)
            .collect();
        if leaves.is_empty() {
            return;
        }
        let pick = leaves[(TreeWorld::rand(rng) * leaves.len() as f32) as usize % leaves.len()];
        let (ox, oy) = (self.list[pick].origin_x, self.list[pick].origin_y);
        self.add_ornament_at(ox, oy, user, rng);
    }

    pub fn add_ornament_at(&mut self, x: f32, y: f32, user: bool, rng: &mut u32) {
        let color =
            ACCENT_COLORS[(TreeWorld::rand(rng) * ACCENT_COLORS.len() as f32) as usize % ACCENT_COLORS.len()];
        self.list.push(TreeParticle {
            x: x + (TreeWorld::rand(rng) - 0.5) * 200.0,
            y: y - 120.0 - TreeWorld::rand(rng) * 80.0,
            origin_x: x,
            origin_y: y,
            vx: 0.0,
            vy: 0.0,
            size: 3.0 + TreeWorld::rand(rng) * 2.0,
            color,
            density: 4.0 + TreeWorld::rand(rng) * 6.0,
            friction: 0.85,
            ease: 0.06,
            kind: if user { TreeKind::UserOrnament } else { TreeKind::Ornament },
            life: 1.0,
            decay: 0.0,
            is_edge: false,
            can_sway: false,
            reactive: true,
            color_timer: 40 + (TreeWorld::rand(rng) * 80.0) as u16,
            bounds: None,
        });
    }

    /// One frame of motion for every particle in the collection.
    ///
    /// `sway` is the global pointer-sway offset; only `can_sway` shape
    /// particles and user ornaments feel it. `reactive_gate` narrows
    /// mouse repulsion to particles flagged `reactive` at creation.
    pub fn update(
        &mut self,
        pointer: Option<(f32, f32)>,
        sway: f32,
        shockwaves: &[Shockwave],
        reactive_gate: bool,
        rng: &mut u32,
    ) {
        let mut write = 0;
        for read in 0..self.list.len() {
            let mut p = self.list[read];

            if matches!(p.kind, TreeKind::Explosion | TreeKind::Spark) {
                p.vy += GRAVITY;
                p.vx *= p.friction;
                p.vy *= p.friction;
                p.x += p.vx;
                p.y += p.vy;
                p.life -= p.decay;
                if p.life <= 0.0 {
                    continue;
                }
                self.list[write] = p;
                write += 1;
                continue;
            }

            if matches!(p.kind, TreeKind::Ornament | TreeKind::UserOrnament) {
                if p.color_timer == 0 {
                    p.color = ACCENT_COLORS
                        [(TreeWorld::rand(rng) * ACCENT_COLORS.len() as f32) as usize % ACCENT_COLORS.len()];
                    p.color_timer = 40 + (TreeWorld::rand(rng) * 80.0) as u16;
                } else {
                    p.color_timer -= 1;
                }
            }

            if let Some((mx, my)) = pointer {
                if !reactive_gate || p.reactive {
                    let dx = p.x - mx;
                    let dy = p.y - my;
                    let dist = (dx * dx + dy * dy).sqrt();
                    if dist > 0.0 && dist < REPULSE_RADIUS {
                        let force = (REPULSE_RADIUS - dist) / REPULSE_RADIUS;
                        p.vx += dx / dist * force * p.density * 0.6;
                        p.vy += dy / dist * force * p.density * 0.6;
                    }
                }
            }

            for s in shockwaves {
                let dx = p.x - s.x;
                let dy = p.y - s.y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist > 0.0 && (dist - s.radius).abs() < RING_BAND {
                    p.vx += dx / dist * RING_PUSH * p.density * 0.1;
                    p.vy += dy / dist * RING_PUSH * p.density * 0.1;
                }
            }

            let sway_here = if p.kind == TreeKind::UserOrnament || p.can_sway {
                sway
            } else {
                0.0
            };
            p.vx += (p.origin_x + sway_here - p.x) * p.ease;
            p.vy += (p.origin_y - p.y) * p.ease;
            p.vx *= p.friction;
            p.vy *= p.friction;
            p.x += p.vx;
            p.y += p.vy;

            if let Some((min_x, max_x)) = p.bounds {
                p.x = p.x.clamp(min_x, max_x);
            }

            self.list[write] = p;
            write += 1;
        }
        self.list.truncate(write);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_at(list: &mut TreeParticles, x: f32, y: f32, rng: &mut u32) {
        list.spawn_shape(x, y, x, y, 2.0, "#2e7d32", TreeKind::Leaf, false, None, rng);
    }

    #[test]
    fn shape_particle_springs_home() {
        let mut tree = TreeParticles::new();
        let mut rng = 7u32;
        tree.spawn_shape(300.0, 10.0, 100.0, 200.0, 2.0, "#2e7d32", TreeKind::Leaf, false, None, &mut rng);

        for _ in 0..600 {
            tree.update(None, 0.0, &[], false, &mut rng);
        }
        let p = &tree.list[0];
        assert!((p.x - p.origin_x).abs() < 1.0);
        assert!((p.y - p.origin_y).abs() < 1.0);
    }

    #[test]
    fn burst_particles_decay_away() {
        let mut tree = TreeParticles::new();
        let mut rng = 99u32;
        tree.spawn_burst(50.0, 50.0, 30, &["#fff"], TreeKind::Explosion, &mut rng);
        assert_eq!(tree.list.len(), 30);

        for _ in 0..200 {
            tree.update(None, 0.0, &[], false, &mut rng);
        }
        assert!(tree.list.is_empty());
    }

    #[test]
    fn repulsion_pushes_away_from_pointer() {
        let mut tree = TreeParticles::new();
        let mut rng = 3u32;
        leaf_at(&mut tree, 100.0, 100.0, &mut rng);

        tree.update(Some((90.0, 100.0)), 0.0, &[], false, &mut rng);
        assert!(tree.list[0].x > 100.0, "particle should move away from pointer");
    }

    #[test]
    fn reactive_gate_skips_unflagged_particles() {
        let mut tree = TreeParticles::new();
        let mut rng = 3u32;
        leaf_at(&mut tree, 100.0, 100.0, &mut rng);
        tree.list[0].reactive = false;
        tree.list[0].ease = 0.0;

        tree.update(Some((90.0, 100.0)), 0.0, &[], true, &mut rng);
        assert_eq!(tree.list[0].x, 100.0);
    }

    #[test]
    fn bounds_clamp_holds_under_push() {
        let mut tree = TreeParticles::new();
        let mut rng = 11u32;
        tree.spawn_shape(
            100.0, 100.0, 100.0, 100.0, 2.0, "#2e7d32", TreeKind::Trunk, false,
            Some((95.0, 105.0)), &mut rng,
        );
        tree.list[0].density = 10.0;

        for _ in 0..50 {
            tree.update(Some((98.0, 100.0)), 0.0, &[], false, &mut rng);
            let x = tree.list[0].x;
            assert!((95.0..=105.0).contains(&x), "escaped bounds: {x}");
        }
    }

    #[test]
    fn ornament_recolors_when_timer_expires() {
        let mut tree = TreeParticles::new();
        let mut rng = 5u32;
        tree.add_ornament_at(100.0, 100.0, false, &mut rng);
        tree.list[0].color_timer = 1;
        tree.list[0].color = "sentinel";

        tree.update(None, 0.0, &[], false, &mut rng); // timer 1 -> 0
        tree.update(None, 0.0, &[], false, &mut rng); // recolor
        assert_ne!(tree.list[0].color, "sentinel");
        assert!(tree.list[0].color_timer >= 40);
    }

    #[test]
    fn edge_particles_never_sway() {
        let mut rng = 17u32;
        let mut tree = TreeParticles::new();
        for _ in 0..100 {
            tree.spawn_shape(0.0, 0.0, 0.0, 0.0, 2.0, "#2e7d32", TreeKind::Leaf, true, None, &mut rng);
        }
        assert!(tree.list.iter().all(|p| !p.can_sway));
    }
}
