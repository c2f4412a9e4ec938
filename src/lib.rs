// tinsel-engine - Interactive festive particle scene
//
// The simulation core is target-independent; the canvas renderer and
// the Stage boundary below only exist on wasm. The host page owns the
// requestAnimationFrame loop (and cancels it on unmount), the score
// value, and the canvas element; everything else lives in here.

pub mod geom;
pub mod scene;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod render;

#[cfg(target_arch = "wasm32")]
mod stage {
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use crate::render::Renderer;
    use crate::sim::TreeWorld;

    #[wasm_bindgen]
    pub struct Stage {
        world: TreeWorld,
        renderer: Renderer,
        on_score: Option<js_sys::Function>,
    }

    #[wasm_bindgen]
    impl Stage {
        #[wasm_bindgen(constructor)]
        pub fn new(canvas: HtmlCanvasElement) -> Result<Stage, JsValue> {
            let _ = console_log::init_with_level(log::Level::Info);

            let w = canvas.width() as f32;
            let h = canvas.height() as f32;
            let renderer = Renderer::new(&canvas)?;
            let seed = js_sys::Date::now() as u32 | 1;

            log::info!("stage created: {w}x{h}");
            Ok(Stage {
                world: TreeWorld::new(w, h, seed),
                renderer,
                on_score: None,
            })
        }

        /// Score-delta callback; a stable handle the host can swap at
        /// any time without touching the frame loop.
        pub fn set_on_score(&mut self, callback: js_sys::Function) {
            self.on_score = Some(callback);
        }

        /// The externally owned score, fed in whenever it changes.
        pub fn set_score(&mut self, score: u32) {
            self.world.set_score(score);
        }

        /// Advance and draw one frame.
        pub fn tick(&mut self) {
            self.world.tick();
            self.renderer.draw(&self.world);
            self.report_score();
        }

        pub fn resize(&mut self, w: u32, h: u32) {
            self.renderer.resize(w, h);
            self.world.resize(w as f32, h as f32);
            log::info!("stage resized: {w}x{h}");
        }

        pub fn pointer_move(&mut self, client_x: f32, client_y: f32, css_w: f32, css_h: f32) {
            self.world.pointer_move(client_x, client_y, css_w, css_h);
        }

        pub fn pointer_leave(&mut self) {
            self.world.pointer_leave();
        }

        pub fn pointer_down(&mut self, client_x: f32, client_y: f32, css_w: f32, css_h: f32) {
            self.world.pointer_move(client_x, client_y, css_w, css_h);
            if let Some((x, y)) = self.world.pointer() {
                self.world.pointer_down(x, y);
            }
            self.report_score();
        }

        /// Let the user hang an ornament at a tap point.
        pub fn add_ornament(&mut self, client_x: f32, client_y: f32, css_w: f32, css_h: f32) {
            self.world.pointer_move(client_x, client_y, css_w, css_h);
            if let Some((x, y)) = self.world.pointer() {
                self.world.add_user_ornament(x, y);
            }
        }

        pub fn set_shockwave_collects_gifts(&mut self, on: bool) {
            self.world.set_shockwave_collects_gifts(on);
        }

        pub fn set_reactive_repulsion(&mut self, on: bool) {
            self.world.set_reactive_repulsion(on);
        }

        pub fn width(&self) -> u32 {
            self.world.width() as u32
        }

        pub fn height(&self) -> u32 {
            self.world.height() as u32
        }

        fn report_score(&mut self) {
            let delta = self.world.drain_pending_score();
            if delta == 0 {
                return;
            }
            if let Some(cb) = &self.on_score {
                let _ = cb.call1(&JsValue::NULL, &JsValue::from_f64(delta as f64));
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use stage::Stage;
