// sim/ - Festive scene simulation
//
// One module per particle population. TreeWorld owns every population
// and advances them all once per frame; the host page drives tick()
// from its own animation loop.

pub mod events;
pub mod firework;
pub mod gift;
pub mod lights;
pub mod shockwave;
pub mod sky;
pub mod snow;
pub mod trail;
pub mod tree;

use events::ScoreEvents;
use firework::Fireworks;
use gift::Gifts;
use lights::GroundLights;
use shockwave::Shockwaves;
use sky::SkyStars;
use snow::Snow;
use trail::Trail;
use tree::{TreeKind, TreeParticles};

const POINTER_TRAIL_BURST: usize = 4;
const POINTER_TRAIL_COLOR: &str = "#fffde7";
const SWAY_SCALE: f32 = 0.02;
const SWAY_EASE: f32 = 0.05;
const CLICK_MODULO_A: u32 = 2;
const CLICK_MODULO_B: u32 = 3;
const MASSIVE_SHOW_MIN: u32 = 5;
const MASSIVE_SHOW_SPREAD: u32 = 5;

/// The whole scene: every particle population, the RNG, pointer state
/// and the score-event machinery. Single-threaded by construction; the
/// host calls into it between frames, never during one.
pub struct TreeWorld {
    w: f32,
    h: f32,

    pub tree: TreeParticles,
    pub snow: Snow,
    pub lights: GroundLights,
    pub sky: SkyStars,
    pub fireworks: Fireworks,
    pub trail: Trail,
    pub shockwaves: Shockwaves,
    pub gifts: Gifts,

    events: ScoreEvents,
    score: u32,
    pending_score: u32,

    pointer: Option<(f32, f32)>,
    prev_pointer: Option<(f32, f32)>,
    sway: f32,
    frame: u64,

    shockwave_collects_gifts: bool,
    reactive_repulsion: bool,

    pub(crate) rng: u32,
}

impl TreeWorld {
    pub fn new(w: f32, h: f32, seed: u32) -> Self {
        let mut world = Self {
            w,
            h,
            tree: TreeParticles::new(),
            snow: Snow::new(),
            lights: GroundLights::new(),
            sky: SkyStars::new(),
            fireworks: Fireworks::new(),
            trail: Trail::new(),
            shockwaves: Shockwaves::new(),
            gifts: Gifts::new(),
            events: ScoreEvents::new(),
            score: 0,
            pending_score: 0,
            pointer: None,
            prev_pointer: None,
            sway: 0.0,
            frame: 0,
            shockwave_collects_gifts: true,
            reactive_repulsion: false,
            rng: if seed == 0 { 0xDEAD_BEEF } else { seed },
        };
        world.rebuild();
        world
    }

    // Random number generator (xorshift32)
    #[inline(always)]
    pub fn rand(rng: &mut u32) -> f32 {
        *rng ^= *rng << 13;
        *rng ^= *rng >> 17;
        *rng ^= *rng << 5;
        (*rng >> 8) as f32 * (1.0 / 16777216.0)
    }

    pub fn width(&self) -> f32 {
        self.w
    }

    pub fn height(&self) -> f32 {
        self.h
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn set_shockwave_collects_gifts(&mut self, on: bool) {
        self.shockwave_collects_gifts = on;
    }

    pub fn set_reactive_repulsion(&mut self, on: bool) {
        self.reactive_repulsion = on;
    }

    /// Tear down and rebuild the viewport-dependent populations,
    /// replaying score-earned decorations so progress is not lost.
    pub fn resize(&mut self, w: f32, h: f32) {
        self.w = w;
        self.h = h;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.tree.clear_shape();
        self.lights.clear();
        self.sky.clear();
        self.fireworks.clear();
        self.trail.clear();
        self.shockwaves.clear();
        self.gifts.clear();

        if !crate::scene::build_tree(&mut self.tree, self.w, self.h, &mut self.rng) {
            return;
        }
        self.snow.init(self.w, self.h, &mut self.rng);

        let (light_count, star_count) = events::replay_counts(self.score);
        for _ in 0..light_count {
            self.lights.spawn(self.w, self.h, &mut self.rng);
        }
        for _ in 0..star_count {
            self.sky.spawn(self.w, self.h, &mut self.rng);
        }
    }

    /// Ingest the externally owned score. Threshold crossings since the
    /// previous value fire their effects exactly once each.
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
        let spawns = self.events.observe(score);

        for _ in 0..spawns.ground_lights {
            self.lights.spawn(self.w, self.h, &mut self.rng);
        }
        for _ in 0..spawns.sky_stars {
            self.sky.spawn(self.w, self.h, &mut self.rng);
        }
        for _ in 0..spawns.rockets {
            self.fireworks.launch(self.w, self.h, &mut self.rng);
        }
        for _ in 0..spawns.ornaments {
            self.tree.add_ornament(false, &mut self.rng);
        }
        if spawns.massive_show {
            let count = MASSIVE_SHOW_MIN
                + (Self::rand(&mut self.rng) * (MASSIVE_SHOW_SPREAD + 1) as f32) as u32;
            for _ in 0..count {
                self.fireworks.launch(self.w, self.h, &mut self.rng);
            }
        }
    }

    /// Pointer position in client (CSS) space, converted to the
    /// simulation's buffer space. Zero-sized CSS boxes are ignored.
    pub fn pointer_move(&mut self, client_x: f32, client_y: f32, css_w: f32, css_h: f32) {
        if css_w <= 0.0 || css_h <= 0.0 {
            return;
        }
        self.pointer = Some((client_x * self.w / css_w, client_y * self.h / css_h));
    }

    pub fn pointer_leave(&mut self) {
        self.pointer = None;
    }

    pub fn pointer(&self) -> Option<(f32, f32)> {
        self.pointer
    }

    /// Click/tap at simulation coordinates. A gift hit collects exactly
    /// one gift; otherwise the parity gate decides whether a shockwave
    /// fires at the click point. Returns the score delta credited.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> u32 {
        if let Some(idx) = self.gifts.hit_test(x, y) {
            return self.pop_gift(idx);
        }

        if self.score % CLICK_MODULO_A == 0 || self.score % CLICK_MODULO_B == 0 {
            self.shockwaves.spawn(x, y);
            self.tree.spawn_burst(
                x,
                y,
                10,
                &firework::FIREWORK_COLORS,
                TreeKind::Explosion,
                &mut self.rng,
            );
        }
        0
    }

    /// Hang a decoration where the user asked for one.
    pub fn add_user_ornament(&mut self, x: f32, y: f32) {
        self.tree.add_ornament_at(x, y, true, &mut self.rng);
    }

    /// Score gained since the last drain, to be reported to the host.
    pub fn drain_pending_score(&mut self) -> u32 {
        core::mem::take(&mut self.pending_score)
    }

    fn pop_gift(&mut self, idx: usize) -> u32 {
        let g = self.gifts.collect(idx);
        let delta = g.value();
        self.pending_score += delta;

        self.tree.spawn_burst(
            g.x,
            g.y,
            18,
            &[g.body, g.ribbon, "#ffffff"],
            TreeKind::Explosion,
            &mut self.rng,
        );

        let replacements = gift::GIFT_TYPES[g.type_idx].replacements;
        for _ in 0..replacements {
            self.gifts.spawn(self.w, self.score, &mut self.rng);
        }
        delta
    }

    /// One simulation frame. Update order is the draw order's mirror
    /// contract: see render.rs.
    pub fn tick(&mut self) {
        self.frame += 1;

        self.snow.update(self.w, self.h, &mut self.rng);

        self.gifts.maybe_spawn(self.w, self.score, &mut self.rng);
        self.gifts.update(self.h);

        // Pointer trail only while the pointer is present and actually
        // moved since the previous frame.
        if let Some((px, py)) = self.pointer {
            if self.prev_pointer != Some((px, py)) {
                self.trail
                    .emit_burst(px, py, POINTER_TRAIL_BURST, POINTER_TRAIL_COLOR, &mut self.rng);
            }
        }
        self.prev_pointer = self.pointer;
        self.trail.update();

        self.fireworks
            .update(&mut self.tree, &mut self.trail, &mut self.rng);

        self.shockwaves.update();
        if self.shockwave_collects_gifts {
            self.collect_under_shockwaves();
        }

        self.lights.update(self.pointer);

        let sway_target = match self.pointer {
            Some((px, _)) => (px - self.w / 2.0) * SWAY_SCALE,
            None => 0.0,
        };
        self.sway += (sway_target - self.sway) * SWAY_EASE;
        let breeze = self.sway + (self.frame as f32 * 0.01).sin() * 1.5;

        self.tree.update(
            self.pointer,
            breeze,
            &self.shockwaves.list,
            self.reactive_repulsion,
            &mut self.rng,
        );

        self.sky.update();
    }

    fn collect_under_shockwaves(&mut self) {
        let waves = self.shockwaves.list.clone();
        for s in &waves {
            // Reverse order keeps indices valid while removing.
            for i in (0..self.gifts.list.len()).rev() {
                let g = self.gifts.list[i];
                let d = (g.x - s.x).hypot(g.y - s.y);
                if d < s.radius {
                    self.pop_gift(i);
                }
            }
        }
    }
}
