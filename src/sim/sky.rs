// sky.rs - Background stars
//
// Static decorations in the upper sky, unlocked by score. Motionless;
// the renderer twinkles them with a sine-modulated alpha.

use super::TreeWorld;

pub const MAX_SKY_STARS: usize = 24;

#[derive(Clone, Copy)]
pub struct SkyStar {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub phase: f32,
    pub phase_speed: f32,
}

pub struct SkyStars {
    pub list: Vec<SkyStar>,
}

impl SkyStars {
    pub fn new() -> Self {
        Self { list: Vec::with_capacity(MAX_SKY_STARS) }
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn spawn(&mut self, w: f32, h: f32, rng: &mut u32) {
        if self.list.len() >= MAX_SKY_STARS {
            return;
        }
        self.list.push(SkyStar {
            x: TreeWorld::rand(rng) * w,
            y: TreeWorld::rand(rng) * h * 0.55,
            size: 0.8 + TreeWorld::rand(rng) * 1.8,
            phase: TreeWorld::rand(rng) * core::f32::consts::TAU,
            phase_speed: 0.01 + TreeWorld::rand(rng) * 0.05,
        });
    }

    pub fn update(&mut self) {
        for s in &mut self.list {
            s.phase += s.phase_speed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_stay_in_upper_sky() {
        let mut stars = SkyStars::new();
        let mut rng = 21u32;
        for _ in 0..MAX_SKY_STARS {
            stars.spawn(800.0, 600.0, &mut rng);
        }
        assert!(stars.list.iter().all(|s| s.y <= 600.0 * 0.55));
    }

    #[test]
    fn spawn_respects_cap() {
        let mut stars = SkyStars::new();
        let mut rng = 22u32;
        for _ in 0..MAX_SKY_STARS * 2 {
            stars.spawn(800.0, 600.0, &mut rng);
        }
        assert_eq!(stars.list.len(), MAX_SKY_STARS);
    }
}
