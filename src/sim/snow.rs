// snow.rs - Falling snow
//
// Fixed-size pool built at scene construction. Flakes are never
// destroyed; past the bottom edge they wrap back to the top with a
// fresh random x.

use super::TreeWorld;

pub const MIN_FLAKES: usize = 120;
pub const MAX_FLAKES: usize = 320;

#[derive(Clone, Copy)]
pub struct SnowFlake {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub speed: f32,
    pub wind: f32,
}

pub struct Snow {
    pub list: Vec<SnowFlake>,
}

impl Snow {
    pub fn new() -> Self {
        Self { list: Vec::new() }
    }

    /// Rebuild the pool for the given viewport. Pool size scales with
    /// width, clamped so narrow and huge screens stay reasonable.
    pub fn init(&mut self, w: f32, h: f32, rng: &mut u32) {
        let count = ((w / 4.0) as usize).clamp(MIN_FLAKES, MAX_FLAKES);
        self.list.clear();
        self.list.reserve(count);
        for _ in 0..count {
            self.list.push(SnowFlake {
                x: TreeWorld::rand(rng) * w,
                y: TreeWorld::rand(rng) * h,
                radius: 1.0 + TreeWorld::rand(rng) * 3.0,
                speed: 0.5 + TreeWorld::rand(rng) * 1.5,
                wind: (TreeWorld::rand(rng) - 0.5),
            });
        }
    }

    pub fn update(&mut self, w: f32, h: f32, rng: &mut u32) {
        for f in &mut self.list {
            f.y += f.speed;
            f.x += f.wind;
            if f.y > h + f.radius {
                f.y = -f.radius;
                f.x = TreeWorld::rand(rng) * w;
            }
            if f.x < -f.radius {
                f.x = w + f.radius;
            } else if f.x > w + f.radius {
                f.x = -f.radius;
            }
        }
    }
}
