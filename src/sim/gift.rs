// gift.rs - Falling gift boxes
//
// Spawned on a frame budget with a random gate, capped in number.
// Higher scores unlock richer tiers and speed the whole table up.
// Position is the box center; the hit box is axis-aligned regardless
// of the drawn rotation.

use super::TreeWorld;

pub const MAX_GIFTS: usize = 10;
pub const SPAWN_INTERVAL: u32 = 60;
pub const SPAWN_CHANCE: f32 = 0.45;
pub const HIT_TOLERANCE: f32 = 6.0;

const BASE_FALL: f32 = 2.2;
const CULL_MARGIN: f32 = 80.0;
const UNLOCK_STEP: u32 = 100;
const BASE_TIERS: u32 = 2;

// Difficulty scaling, applied after the tier's base speed is drawn.
const MIN_SPEED_SCORE: u32 = 500;
const MIN_SPEED: f32 = 1.15;
const FAST_SCORE: u32 = 1000;
const FAST_MULT: f32 = 1.4;

pub struct GiftSpec {
    pub size: f32,
    pub body: &'static str,
    pub ribbon: &'static str,
    pub speed: f32,
    pub base_score: u32,
    pub replacements: usize,
}

pub const GIFT_TYPES: [GiftSpec; 6] = [
    GiftSpec { size: 28.0, body: "#c62828", ribbon: "#ffd54f", speed: 1.0, base_score: 5, replacements: 0 },
    GiftSpec { size: 36.0, body: "#1565c0", ribbon: "#eceff1", speed: 0.8, base_score: 8, replacements: 0 },
    GiftSpec { size: 24.0, body: "#f9a825", ribbon: "#b71c1c", speed: 1.4, base_score: 12, replacements: 1 },
    GiftSpec { size: 44.0, body: "#2e7d32", ribbon: "#ffab91", speed: 0.6, base_score: 15, replacements: 0 },
    GiftSpec { size: 30.0, body: "#6a1b9a", ribbon: "#80deea", speed: 1.6, base_score: 20, replacements: 1 },
    GiftSpec { size: 22.0, body: "#eceff1", ribbon: "#ff4081", speed: 2.0, base_score: 30, replacements: 2 },
];

#[derive(Clone, Copy)]
pub struct Gift {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub body: &'static str,
    pub ribbon: &'static str,
    pub type_idx: usize,
    pub speed: f32,
    pub base_score: u32,
    pub angle: f32,
    pub spin: f32,
}

impl Gift {
    /// Score credited on collection.
    pub fn value(&self) -> u32 {
        (self.base_score as f32 * self.speed).round() as u32
    }
}

pub struct Gifts {
    pub list: Vec<Gift>,
    frame_counter: u32,
    next_id: u32,
}

impl Gifts {
    pub fn new() -> Self {
        Self {
            list: Vec::with_capacity(MAX_GIFTS),
            frame_counter: 0,
            next_id: 0,
        }
    }

    pub fn clear(&mut self) {
        self.list.clear();
        self.frame_counter = 0;
    }

    /// Number of tiers available at this score.
    pub fn unlocked_tiers(score: u32) -> usize {
        ((BASE_TIERS + score / UNLOCK_STEP) as usize).min(GIFT_TYPES.len())
    }

    /// Called once per frame; past the frame budget, rolls the spawn
    /// gate and always resets the counter.
    pub fn maybe_spawn(&mut self, w: f32, score: u32, rng: &mut u32) {
        self.frame_counter += 1;
        if self.frame_counter <= SPAWN_INTERVAL {
            return;
        }
        self.frame_counter = 0;
        if TreeWorld::rand(rng) < SPAWN_CHANCE {
            self.spawn(w, score, rng);
        }
    }

    /// Unconditional spawn attempt; silently dropped over the cap.
    pub fn spawn(&mut self, w: f32, score: u32, rng: &mut u32) {
        if self.list.len() >= MAX_GIFTS {
            return;
        }
        let tiers = Self::unlocked_tiers(score);
        let type_idx = (TreeWorld::rand(rng) * tiers as f32) as usize % tiers;
        let spec = &GIFT_TYPES[type_idx];

        let mut speed = spec.speed * (0.9 + TreeWorld::rand(rng) * 0.2);
        if score > MIN_SPEED_SCORE {
            speed = speed.max(MIN_SPEED);
        }
        if score > FAST_SCORE {
            speed *= FAST_MULT;
        }

        let half = spec.size / 2.0;
        // Inset so the full box stays on-screen.
        let x = if w > spec.size {
            half + TreeWorld::rand(rng) * (w - spec.size)
        } else {
            w / 2.0
        };

        self.list.push(Gift {
            id: self.next_id,
            x,
            y: -spec.size - TreeWorld::rand(rng) * 60.0,
            size: spec.size,
            body: spec.body,
            ribbon: spec.ribbon,
            type_idx,
            speed,
            base_score: spec.base_score,
            angle: TreeWorld::rand(rng) * core::f32::consts::TAU,
            spin: (TreeWorld::rand(rng) - 0.5) * 0.08,
        });
        self.next_id = self.next_id.wrapping_add(1);
    }

    /// Fall, spin, and cull well past the bottom edge.
    pub fn update(&mut self, h: f32) {
        let mut write = 0;
        for read in 0..self.list.len() {
            let mut g = self.list[read];
            g.y += BASE_FALL * g.speed;
            g.angle += g.spin;
            if g.y - g.size / 2.0 > h + CULL_MARGIN {
                continue;
            }
            self.list[write] = g;
            write += 1;
        }
        self.list.truncate(write);
    }

    /// AABB hit test with tolerance, most recently spawned first.
    pub fn hit_test(&self, px: f32, py: f32) -> Option<usize> {
        for i in (0..self.list.len()).rev() {
            let g = &self.list[i];
            let reach = g.size / 2.0 + HIT_TOLERANCE;
            if (px - g.x).abs() <= reach && (py - g.y).abs() <= reach {
                return Some(i);
            }
        }
        None
    }

    pub fn collect(&mut self, idx: usize) -> Gift {
        self.list.remove(idx)
    }
}
