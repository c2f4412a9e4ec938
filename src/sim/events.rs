// events.rs - Score threshold dispatch
//
// Pure crossing math. For a family with interval T, crossing a multiple
// of T spawns exactly floor(score/T) - floor(prev/T) effects, so jumps
// over several multiples catch up and no crossing ever double-fires.
// Fires only while the score strictly increases.

pub const GROUND_LIGHT_STEP: u32 = 16;
pub const GROUND_LIGHT_CAP: u32 = 960;
pub const ROCKET_STEP: u32 = 20;
pub const ORNAMENT_STEP: u32 = 66;
pub const ORNAMENT_CAP: u32 = 1320;
pub const SKY_STAR_STEP: u32 = 100;
pub const MASSIVE_SHOW_STEP: u32 = 260;

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Spawns {
    pub ground_lights: u32,
    pub rockets: u32,
    pub ornaments: u32,
    pub sky_stars: u32,
    pub massive_show: bool,
}

#[inline]
fn crossings(prev: u32, score: u32, step: u32) -> u32 {
    score / step - prev / step
}

#[inline]
fn capped_crossings(prev: u32, score: u32, step: u32, cap: u32) -> u32 {
    crossings(prev.min(cap), score.min(cap), step)
}

pub struct ScoreEvents {
    prev: u32,
}

impl ScoreEvents {
    pub fn new() -> Self {
        Self { prev: 0 }
    }

    pub fn prev_score(&self) -> u32 {
        self.prev
    }

    /// Ingest the externally owned score. Non-increasing updates only
    /// record the new value; nothing fires.
    pub fn observe(&mut self, score: u32) -> Spawns {
        if score <= self.prev {
            self.prev = score;
            return Spawns::default();
        }
        let prev = self.prev;
        self.prev = score;

        Spawns {
            ground_lights: capped_crossings(prev, score, GROUND_LIGHT_STEP, GROUND_LIGHT_CAP),
            rockets: crossings(prev, score, ROCKET_STEP),
            ornaments: capped_crossings(prev, score, ORNAMENT_STEP, ORNAMENT_CAP),
            sky_stars: crossings(prev, score, SKY_STAR_STEP),
            massive_show: crossings(prev, score, MASSIVE_SHOW_STEP) > 0,
        }
    }
}

/// Decorations a scene rebuild must re-issue so a resize does not
/// visually reset earned progress.
pub fn replay_counts(score: u32) -> (u32, u32) {
    (
        score.min(GROUND_LIGHT_CAP) / GROUND_LIGHT_STEP,
        score / SKY_STAR_STEP,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_threshold_fires_once() {
        let mut ev = ScoreEvents::new();
        let s = ev.observe(100);
        assert_eq!(s.sky_stars, 1);
        assert_eq!(s.ground_lights, 100 / GROUND_LIGHT_STEP);
        assert_eq!(s.rockets, 5);
    }

    #[test]
    fn multi_threshold_jump_catches_up() {
        let mut ev = ScoreEvents::new();
        ev.observe(90);
        let s = ev.observe(310);
        assert_eq!(s.sky_stars, 2, "90 -> 310 crosses 100 and 300");
        assert_eq!(s.ground_lights, 310 / 16 - 90 / 16);
    }

    #[test]
    fn no_double_fire_on_repeat_scores() {
        let mut ev = ScoreEvents::new();
        let first = ev.observe(100);
        assert_eq!(first.sky_stars, 1);
        let again = ev.observe(100);
        assert_eq!(again, Spawns::default());
    }

    #[test]
    fn decrease_fires_nothing_but_records() {
        let mut ev = ScoreEvents::new();
        ev.observe(200);
        assert_eq!(ev.observe(50), Spawns::default());
        assert_eq!(ev.prev_score(), 50);
        // Climbing back over already-passed thresholds fires again,
        // relative to the recorded value.
        let s = ev.observe(120);
        assert_eq!(s.sky_stars, 1);
    }

    #[test]
    fn capped_family_goes_quiet_above_cap() {
        let mut ev = ScoreEvents::new();
        ev.observe(GROUND_LIGHT_CAP);
        let s = ev.observe(GROUND_LIGHT_CAP + 500);
        assert_eq!(s.ground_lights, 0);
        assert!(s.rockets > 0, "uncapped families keep firing");
    }

    #[test]
    fn massive_show_is_a_crossing_flag() {
        let mut ev = ScoreEvents::new();
        assert!(!ev.observe(259).massive_show);
        assert!(ev.observe(261).massive_show);
        // A jump over two multiples is still a single show trigger.
        let mut ev = ScoreEvents::new();
        assert!(ev.observe(MASSIVE_SHOW_STEP * 2 + 10).massive_show);
    }

    #[test]
    fn replay_matches_crossing_totals() {
        assert_eq!(replay_counts(200), (12, 2));
        assert_eq!(replay_counts(0), (0, 0));
        let (lights, _) = replay_counts(GROUND_LIGHT_CAP + 10_000);
        assert_eq!(lights, GROUND_LIGHT_CAP / GROUND_LIGHT_STEP);
    }

    #[test]
    fn exactness_over_random_walks() {
        // Property: cumulative spawns equal floor(final/T) when the
        // score only ever increases from zero.
        let mut ev = ScoreEvents::new();
        let seq = [3u32, 17, 17, 40, 41, 99, 100, 101, 256, 400, 1000];
        let mut total_stars = 0;
        for s in seq {
            total_stars += ev.observe(s).sky_stars;
        }
        assert_eq!(total_stars, 1000 / SKY_STAR_STEP);
    }
}
