// render.rs - Canvas 2D draw pass
//
// Draw order is a hard contract, back to front: sky stars, ground,
// ground lights, tree particles, shockwaves, gifts, trails, rockets,
// firework text, snow. Later layers occlude earlier ones.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::sim::TreeWorld;
use crate::sim::tree::TreeKind;

const SKY_TOP: &str = "#050816";
const GROUND_TOP: &str = "#16213e";
const GROUND_BOTTOM: &str = "#0b1030";
const GROUND_RISE: f64 = 70.0;

pub struct Renderer {
    canvas: HtmlCanvasElement,
    ctx: Option<CanvasRenderingContext2d>,
}

impl Renderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
        Ok(Self { canvas: canvas.clone(), ctx })
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.canvas.set_width(w);
        self.canvas.set_height(h);
    }

    /// Draw one frame. A missing context skips the frame silently.
    pub fn draw(&self, world: &TreeWorld) {
        let Some(ctx) = &self.ctx else { return };
        let w = world.width() as f64;
        let h = world.height() as f64;
        if w <= 0.0 || h <= 0.0 {
            return;
        }

        ctx.set_fill_style(&JsValue::from_str(SKY_TOP));
        ctx.fill_rect(0.0, 0.0, w, h);

        self.draw_sky_stars(ctx, world);
        self.draw_ground(ctx, w, h);
        self.draw_ground_lights(ctx, world);
        self.draw_tree(ctx, world);
        self.draw_shockwaves(ctx, world);
        self.draw_gifts(ctx, world);
        self.draw_trail(ctx, world);
        self.draw_rockets(ctx, world);
        self.draw_texts(ctx, world);
        self.draw_snow(ctx, world);

        ctx.set_global_alpha(1.0);
        ctx.set_shadow_blur(0.0);
    }

    fn draw_sky_stars(&self, ctx: &CanvasRenderingContext2d, world: &TreeWorld) {
        for s in &world.sky.list {
            let alpha = 0.4 + 0.6 * (0.5 + 0.5 * s.phase.sin()) as f64;
            ctx.set_global_alpha(alpha);
            ctx.set_fill_style(&JsValue::from_str("#ffffff"));
            ctx.begin_path();
            let _ = ctx.arc(s.x as f64, s.y as f64, s.size as f64, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);
    }

    // Curved snow mound along the bottom edge.
    fn draw_ground(&self, ctx: &CanvasRenderingContext2d, w: f64, h: f64) {
        let grad = ctx.create_linear_gradient(0.0, h - GROUND_RISE, 0.0, h);
        let _ = grad.add_color_stop(0.0, GROUND_TOP);
        let _ = grad.add_color_stop(1.0, GROUND_BOTTOM);

        ctx.begin_path();
        ctx.move_to(0.0, h);
        ctx.line_to(0.0, h - GROUND_RISE * 0.5);
        ctx.quadratic_curve_to(w / 2.0, h - GROUND_RISE, w, h - GROUND_RISE * 0.5);
        ctx.line_to(w, h);
        ctx.close_path();
        ctx.set_fill_style(&grad);
        ctx.fill();
    }

    fn draw_ground_lights(&self, ctx: &CanvasRenderingContext2d, world: &TreeWorld) {
        for l in &world.lights.list {
            let flicker = 0.5 + 0.5 * (0.5 + 0.5 * (l.phase * 1.7).sin()) as f64;
            ctx.set_global_alpha(flicker);
            ctx.set_shadow_blur(10.0);
            ctx.set_shadow_color(l.color);
            ctx.set_fill_style(&JsValue::from_str(l.color));
            ctx.begin_path();
            let _ = ctx.arc(l.x as f64, l.y as f64, l.size as f64, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);
        ctx.set_shadow_blur(0.0);
    }

    fn draw_tree(&self, ctx: &CanvasRenderingContext2d, world: &TreeWorld) {
        let frame = world.frame() as f32;
        for p in &world.tree.list {
            let (alpha, glow) = match p.kind {
                TreeKind::Leaf => {
                    let breathe = 0.7 + 0.3 * (frame * 0.04 + p.origin_x * 0.05).sin();
                    (breathe as f64, 0.0)
                }
                TreeKind::Trunk => (0.9, 0.0),
                TreeKind::Star => {
                    let flicker = 0.6 + 0.4 * (frame * 0.1 + p.origin_y * 0.2).sin();
                    (flicker as f64, 8.0)
                }
                TreeKind::Ornament | TreeKind::UserOrnament => (1.0, 10.0),
                TreeKind::Explosion | TreeKind::Spark => (p.life.max(0.0) as f64, 6.0),
            };
            ctx.set_global_alpha(alpha);
            ctx.set_shadow_blur(glow);
            if glow > 0.0 {
                ctx.set_shadow_color(p.color);
            }
            ctx.set_fill_style(&JsValue::from_str(p.color));
            ctx.begin_path();
            let _ = ctx.arc(p.x as f64, p.y as f64, p.size as f64, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);
        ctx.set_shadow_blur(0.0);
    }

    fn draw_shockwaves(&self, ctx: &CanvasRenderingContext2d, world: &TreeWorld) {
        for s in &world.shockwaves.list {
            ctx.set_global_alpha(s.life.max(0.0) as f64);
            ctx.set_stroke_style(&JsValue::from_str("#ffffff"));
            ctx.set_line_width(2.5);
            ctx.begin_path();
            let _ = ctx.arc(s.x as f64, s.y as f64, s.radius as f64, 0.0, std::f64::consts::TAU);
            ctx.stroke();
        }
        ctx.set_global_alpha(1.0);
    }

    fn draw_gifts(&self, ctx: &CanvasRenderingContext2d, world: &TreeWorld) {
        for g in &world.gifts.list {
            let size = g.size as f64;
            let half = size / 2.0;
            ctx.save();
            let _ = ctx.translate(g.x as f64, g.y as f64);
            let _ = ctx.rotate(g.angle as f64);
            ctx.set_shadow_blur(12.0);
            ctx.set_shadow_color(g.body);
            ctx.set_fill_style(&JsValue::from_str(g.body));
            ctx.fill_rect(-half, -half, size, size);
            // Ribbon cross.
            let band = size * 0.16;
            ctx.set_shadow_blur(0.0);
            ctx.set_fill_style(&JsValue::from_str(g.ribbon));
            ctx.fill_rect(-band / 2.0, -half, band, size);
            ctx.fill_rect(-half, -band / 2.0, size, band);
            ctx.restore();
        }
    }

    fn draw_trail(&self, ctx: &CanvasRenderingContext2d, world: &TreeWorld) {
        for t in &world.trail.list {
            ctx.set_global_alpha(t.life.max(0.0) as f64);
            ctx.set_shadow_blur(6.0);
            ctx.set_shadow_color(t.color);
            ctx.set_fill_style(&JsValue::from_str(t.color));
            ctx.begin_path();
            let _ = ctx.arc(t.x as f64, t.y as f64, t.size as f64, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);
        ctx.set_shadow_blur(0.0);
    }

    fn draw_rockets(&self, ctx: &CanvasRenderingContext2d, world: &TreeWorld) {
        for r in &world.fireworks.rockets {
            ctx.set_shadow_blur(8.0);
            ctx.set_shadow_color(r.color);
            ctx.set_fill_style(&JsValue::from_str(r.color));
            ctx.begin_path();
            let _ = ctx.arc(r.x as f64, r.y as f64, 2.5, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }
        ctx.set_shadow_blur(0.0);
    }

    fn draw_texts(&self, ctx: &CanvasRenderingContext2d, world: &TreeWorld) {
        ctx.set_text_align("center");
        for t in &world.fireworks.texts {
            let px = (18.0 * t.scale).round() as i32;
            ctx.set_global_alpha(t.opacity.max(0.0) as f64);
            ctx.set_shadow_blur(10.0);
            ctx.set_shadow_color(t.color);
            ctx.set_fill_style(&JsValue::from_str(t.color));
            ctx.set_font(&format!("bold {px}px Georgia, serif"));
            let _ = ctx.fill_text(t.text, t.x as f64, t.y as f64);
        }
        ctx.set_global_alpha(1.0);
        ctx.set_shadow_blur(0.0);
    }

    fn draw_snow(&self, ctx: &CanvasRenderingContext2d, world: &TreeWorld) {
        ctx.set_global_alpha(0.85);
        ctx.set_shadow_blur(4.0);
        ctx.set_shadow_color("#ffffff");
        ctx.set_fill_style(&JsValue::from_str("#ffffff"));
        for f in &world.snow.list {
            ctx.begin_path();
            let _ = ctx.arc(f.x as f64, f.y as f64, f.radius as f64, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);
        ctx.set_shadow_blur(0.0);
    }
}
