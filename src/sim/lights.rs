// lights.rs - Ground fairy lights
//
// Score-unlocked lights resting along the ground line. Each one
// spring-eases toward an origin that breathes on a sine wave and leans
// toward the pointer.

use super::TreeWorld;

pub const MAX_LIGHTS: usize = 60;

const EASE: f32 = 0.08;
const FRICTION: f32 = 0.8;
const BREATH_AMP: f32 = 4.0;
const POINTER_PULL: f32 = 0.05;

pub const LIGHT_COLORS: [&str; 5] = ["#ffd54f", "#ff8a65", "#4fc3f7", "#aed581", "#f48fb1"];

#[derive(Clone, Copy)]
pub struct GroundLight {
    pub x: f32,
    pub y: f32,
    pub origin_x: f32,
    pub origin_y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub color: &'static str,
    pub phase: f32,
    pub phase_speed: f32,
}

pub struct GroundLights {
    pub list: Vec<GroundLight>,
}

impl GroundLights {
    pub fn new() -> Self {
        Self { list: Vec::with_capacity(MAX_LIGHTS) }
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Drop a new light somewhere along the ground band.
    pub fn spawn(&mut self, w: f32, h: f32, rng: &mut u32) {
        if self.list.len() >= MAX_LIGHTS {
            return;
        }
        let x = TreeWorld::rand(rng) * w;
        let y = h - 10.0 - TreeWorld::rand(rng) * 40.0;
        self.list.push(GroundLight {
            x,
            y: y - 60.0, // drops in from above its resting spot
            origin_x: x,
            origin_y: y,
            vx: 0.0,
            vy: 0.0,
            size: 2.0 + TreeWorld::rand(rng) * 2.5,
            color: LIGHT_COLORS
                [(TreeWorld::rand(rng) * LIGHT_COLORS.len() as f32) as usize % LIGHT_COLORS.len()],
            phase: TreeWorld::rand(rng) * core::f32::consts::TAU,
            phase_speed: 0.02 + TreeWorld::rand(rng) * 0.04,
        });
    }

    pub fn update(&mut self, pointer: Option<(f32, f32)>) {
        for l in &mut self.list {
            l.phase += l.phase_speed;

            let mut target_x = l.origin_x;
            let target_y = l.origin_y + l.phase.sin() * BREATH_AMP;
            if let Some((mx, _)) = pointer {
                target_x += (mx - l.origin_x) * POINTER_PULL;
            }

            l.vx += (target_x - l.x) * EASE;
            l.vy += (target_y - l.y) * EASE;
            l.vx *= FRICTION;
            l.vy *= FRICTION;
            l.x += l.vx;
            l.y += l.vy;
        }
    }
}
