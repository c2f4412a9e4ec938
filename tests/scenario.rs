// scenario.rs - End-to-end simulation runs against the public API

use tinsel_engine::sim::TreeWorld;
use tinsel_engine::sim::gift::MAX_GIFTS;
use tinsel_engine::sim::tree::TreeKind;

fn world(seed: u32) -> TreeWorld {
    TreeWorld::new(800.0, 600.0, seed)
}

#[test]
fn first_gift_clicked_at_center_reports_its_value() {
    let mut w = world(0xC0FF_EE01);

    // Run until the spawner produces a gift (frame budget + chance gate
    // means this can take a few hundred frames).
    let mut spawned = false;
    for _ in 0..5_000 {
        w.tick();
        if !w.gifts.list.is_empty() {
            spawned = true;
            break;
        }
    }
    assert!(spawned, "spawner never produced a gift");

    let g = w.gifts.list[w.gifts.list.len() - 1];
    let delta = w.pointer_down(g.x, g.y);
    assert_eq!(delta, g.value());
    assert_eq!(w.drain_pending_score(), delta);

    w.tick();
    assert!(
        w.gifts.list.iter().all(|x| x.id != g.id),
        "collected gift survived into the next frame"
    );
}

#[test]
fn score_jump_to_100_fires_exact_counts() {
    let mut w = world(0xC0FF_EE02);
    w.set_score(100);
    assert_eq!(w.sky.list.len(), 1, "100/100 - 0/100 = 1 sky star");
    assert_eq!(w.lights.list.len(), 6, "floor(100/16) = 6 ground lights");
}

#[test]
fn resize_after_score_200_replays_decorations() {
    let mut w = world(0xC0FF_EE03);
    w.set_score(200);
    assert_eq!(w.lights.list.len(), 12);
    assert_eq!(w.sky.list.len(), 2);

    w.resize(400.0, 900.0);
    assert_eq!(w.lights.list.len(), 12, "resize must not reset earned lights");
    assert_eq!(w.sky.list.len(), 2, "resize must not reset earned stars");
}

#[test]
fn long_run_stays_within_population_caps() {
    let mut w = world(0xC0FF_EE04);
    let mut score = 0u32;

    for frame in 0..6_000u32 {
        if frame % 40 == 0 {
            score += 7;
            w.set_score(score);
        }
        if frame % 97 == 0 {
            w.pointer_move(
                (frame % 800) as f32,
                (frame % 600) as f32,
                800.0,
                600.0,
            );
        }
        if frame % 313 == 0 {
            w.pointer_down((frame % 700) as f32 + 50.0, 200.0);
        }
        w.tick();

        assert!(w.gifts.list.len() <= MAX_GIFTS);
        let snow = w.snow.list.len();
        assert!(snow == 200, "snow pool must stay fixed, got {snow}");
    }

    // The run crossed plenty of thresholds; decorations should exist.
    assert!(!w.lights.list.is_empty());
    assert!(!w.sky.list.is_empty());
    assert!(w.tree.list.iter().any(|p| p.kind == TreeKind::Ornament));
    w.drain_pending_score();
}

#[test]
fn score_never_decreasing_guard_holds_through_world() {
    let mut w = world(0xC0FF_EE05);
    w.set_score(150);
    let lights = w.lights.list.len();
    let stars = w.sky.list.len();

    w.set_score(150);
    w.set_score(40);
    assert_eq!(w.lights.list.len(), lights);
    assert_eq!(w.sky.list.len(), stars);
}
