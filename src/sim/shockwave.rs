// shockwave.rs - Expanding click rings
//
// A shockwave grows a fixed amount per frame while its life drains.
// Nearby tree particles get a radial push (see tree.rs); gift
// collection along the ring is optional (see mod.rs).

pub const MAX_SHOCKWAVES: usize = 8;

const GROWTH: f32 = 4.5;
const LIFE_DECAY: f32 = 0.035;

#[derive(Clone, Copy)]
pub struct Shockwave {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub life: f32,
}

pub struct Shockwaves {
    pub list: Vec<Shockwave>,
}

impl Shockwaves {
    pub fn new() -> Self {
        Self { list: Vec::with_capacity(MAX_SHOCKWAVES) }
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn spawn(&mut self, x: f32, y: f32) {
        if self.list.len() >= MAX_SHOCKWAVES {
            return;
        }
        self.list.push(Shockwave { x, y, radius: 6.0, life: 1.0 });
    }

    /// Grow radii, drain life, drop dead rings.
    pub fn update(&mut self) {
        let mut write = 0;
        for read in 0..self.list.len() {
            let mut s = self.list[read];
            s.radius += GROWTH;
            s.life -= LIFE_DECAY;
            if s.life <= 0.0 {
                continue;
            }
            self.list[write] = s;
            write += 1;
        }
        self.list.truncate(write);
    }
}
