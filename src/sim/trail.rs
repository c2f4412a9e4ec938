// trail.rs - Short-lived trail particles
//
// Shared by the pointer (small burst while moving) and firework rockets
// (exhaust). Friction-damped drift, linear life decay.

use super::TreeWorld;

pub const MAX_TRAIL: usize = 400;

const FRICTION: f32 = 0.92;

#[derive(Clone, Copy)]
pub struct TrailParticle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub color: &'static str,
    pub life: f32,
    pub decay: f32,
}

pub struct Trail {
    pub list: Vec<TrailParticle>,
}

impl Trail {
    pub fn new() -> Self {
        Self { list: Vec::with_capacity(MAX_TRAIL) }
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Outward burst at a point, used for pointer sparkle.
    pub fn emit_burst(&mut self, x: f32, y: f32, count: usize, color: &'static str, rng: &mut u32) {
        for _ in 0..count {
            if self.list.len() >= MAX_TRAIL {
                return;
            }
            let angle = TreeWorld::rand(rng) * core::f32::consts::TAU;
            let speed = 0.5 + TreeWorld::rand(rng) * 2.0;
            self.list.push(TrailParticle {
                x,
                y,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                size: 0.8 + TreeWorld::rand(rng) * 1.6,
                color,
                life: 1.0,
                decay: 0.03 + TreeWorld::rand(rng) * 0.04,
            });
        }
    }

    /// Single drifting puff, used for rocket exhaust.
    pub fn emit_puff(&mut self, x: f32, y: f32, color: &'static str, rng: &mut u32) {
        if self.list.len() >= MAX_TRAIL {
            return;
        }
        self.list.push(TrailParticle {
            x: x + (TreeWorld::rand(rng) - 0.5) * 2.0,
            y,
            vx: (TreeWorld::rand(rng) - 0.5) * 0.6,
            vy: 0.4 + TreeWorld::rand(rng) * 0.8,
            size: 0.8 + TreeWorld::rand(rng) * 1.2,
            color,
            life: 1.0,
            decay: 0.04 + TreeWorld::rand(rng) * 0.05,
        });
    }

    pub fn update(&mut self) {
        let mut write = 0;
        for read in 0..self.list.len() {
            let mut t = self.list[read];
            t.vx *= FRICTION;
            t.vy *= FRICTION;
            t.x += t.vx;
            t.y += t.vy;
            t.life -= t.decay;
            if t.life <= 0.0 {
                continue;
            }
            self.list[write] = t;
            write += 1;
        }
        self.list.truncate(write);
    }
}
