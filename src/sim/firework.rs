// firework.rs - Rockets and celebratory text
//
// Rockets rise under gravity, leave exhaust puffs, and detonate at the
// apex (or at their target altitude) into a spark burst plus one
// floating text particle.

use super::TreeWorld;
use super::trail::Trail;
use super::tree::{TreeKind, TreeParticles};

pub const MAX_ROCKETS: usize = 12;
pub const MAX_TEXTS: usize = 16;

const GRAVITY: f32 = 0.08;
const TEXT_FADE: f32 = 0.012;
const TEXT_SCALE_CAP: f32 = 1.8;

pub const FIREWORK_COLORS: [&str; 7] = [
    "#ff1744", "#ffea00", "#00e5ff", "#76ff03", "#f50057", "#ff9100", "#d500f9",
];

const CHEERS: [&str; 8] = [
    "Merry Christmas!",
    "Ho Ho Ho!",
    "Joy!",
    "Wonderful!",
    "Sparkle!",
    "Happy Holidays!",
    "Jingle!",
    "Hooray!",
];

#[derive(Clone, Copy)]
pub struct Rocket {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub target_y: f32,
    pub color: &'static str,
}

#[derive(Clone, Copy)]
pub struct TextParticle {
    pub x: f32,
    pub y: f32,
    pub text: &'static str,
    pub opacity: f32,
    pub vy: f32,
    pub color: &'static str,
    pub scale: f32,
}

pub struct Fireworks {
    pub rockets: Vec<Rocket>,
    pub texts: Vec<TextParticle>,
}

impl Fireworks {
    pub fn new() -> Self {
        Self {
            rockets: Vec::with_capacity(MAX_ROCKETS),
            texts: Vec::with_capacity(MAX_TEXTS),
        }
    }

    pub fn clear(&mut self) {
        self.rockets.clear();
        self.texts.clear();
    }

    /// Launch one rocket from the bottom of the viewport.
    pub fn launch(&mut self, w: f32, h: f32, rng: &mut u32) {
        if self.rockets.len() >= MAX_ROCKETS {
            return;
        }
        let color = FIREWORK_COLORS
            [(TreeWorld::rand(rng) * FIREWORK_COLORS.len() as f32) as usize % FIREWORK_COLORS.len()];
        self.rockets.push(Rocket {
            x: w * 0.15 + TreeWorld::rand(rng) * w * 0.7,
            y: h + 4.0,
            vx: (TreeWorld::rand(rng) - 0.5) * 1.2,
            vy: -8.0 - TreeWorld::rand(rng) * 3.0,
            target_y: h * 0.12 + TreeWorld::rand(rng) * h * 0.3,
            color,
        });
    }

    /// Integrate rockets, hand off exhaust to the trail and detonations
    /// to the spark population.
    pub fn update(&mut self, tree: &mut TreeParticles, trail: &mut Trail, rng: &mut u32) {
        let mut write = 0;
        for read in 0..self.rockets.len() {
            let mut r = self.rockets[read];
            r.vy += GRAVITY;
            r.x += r.vx;
            r.y += r.vy;
            trail.emit_puff(r.x, r.y, r.color, rng);

            // Apex reached or target altitude passed: detonate.
            if r.vy >= 0.0 || r.y <= r.target_y {
                let count = 40 + (TreeWorld::rand(rng) * 30.0) as usize;
                tree.spawn_burst(r.x, r.y, count, &FIREWORK_COLORS, TreeKind::Spark, rng);
                self.spawn_text(r.x, r.y, r.color, rng);
                continue;
            }

            self.rockets[write] = r;
            write += 1;
        }
        self.rockets.truncate(write);

        let mut write = 0;
        for read in 0..self.texts.len() {
            let mut t = self.texts[read];
            t.y += t.vy;
            t.vy *= 0.97;
            t.opacity -= TEXT_FADE;
            t.scale = (t.scale * 1.03).min(TEXT_SCALE_CAP);
            if t.opacity <= 0.0 {
                continue;
            }
            self.texts[write] = t;
            write += 1;
        }
        self.texts.truncate(write);
    }

    fn spawn_text(&mut self, x: f32, y: f32, color: &'static str, rng: &mut u32) {
        if self.texts.len() >= MAX_TEXTS {
            return;
        }
        self.texts.push(TextParticle {
            x,
            y,
            text: CHEERS[(TreeWorld::rand(rng) * CHEERS.len() as f32) as usize % CHEERS.len()],
            opacity: 1.0,
            vy: -1.6,
            color,
            scale: 1.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rocket_detonates_into_sparks_and_text() {
        let mut fw = Fireworks::new();
        let mut tree = TreeParticles::new();
        let mut trail = Trail::new();
        let mut rng = 13u32;

        fw.launch(800.0, 600.0, &mut rng);
        assert_eq!(fw.rockets.len(), 1);

        fw.update(&mut tree, &mut trail, &mut rng);
        assert!(!trail.list.is_empty(), "rising rocket should leave exhaust");

        for _ in 0..400 {
            fw.update(&mut tree, &mut trail, &mut rng);
            if fw.rockets.is_empty() {
                break;
            }
        }
        assert!(fw.rockets.is_empty(), "rocket never detonated");
        assert!(tree.list.iter().any(|p| p.kind == TreeKind::Spark));
        assert_eq!(fw.texts.len(), 1);
    }

    #[test]
    fn text_fades_scales_and_dies() {
        let mut fw = Fireworks::new();
        let mut rng = 13u32;
        fw.spawn_text(100.0, 100.0, "#fff", &mut rng);
        let mut tree = TreeParticles::new();
        let mut trail = Trail::new();

        let mut last_y = fw.texts[0].y;
        for _ in 0..40 {
            fw.update(&mut tree, &mut trail, &mut rng);
            assert!(fw.texts[0].y < last_y, "text should keep rising");
            last_y = fw.texts[0].y;
        }
        assert!(fw.texts[0].scale > 1.0);

        for _ in 0..200 {
            fw.update(&mut tree, &mut trail, &mut rng);
        }
        assert!(fw.texts.is_empty());
    }

    #[test]
    fn launch_respects_cap() {
        let mut fw = Fireworks::new();
        let mut rng = 13u32;
        for _ in 0..MAX_ROCKETS * 2 {
            fw.launch(800.0, 600.0, &mut rng);
        }
        assert_eq!(fw.rockets.len(), MAX_ROCKETS);
    }
}
