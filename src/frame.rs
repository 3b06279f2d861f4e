use crate::constants::{RESIZE_DEBOUNCE_MS, STATS_INTERVAL_SEC};
use crate::dom::Sizing;
use crate::render::CanvasSurface;
use instant::Instant;
use smokefield_core::{Renderer, Simulation};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one canvas needs per frame.
pub struct FrameContext {
    pub sim: Simulation,
    pub surface: CanvasSurface,
    pub renderer: Renderer,
    pub canvas: web::HtmlCanvasElement,
    pub sizing: Sizing,
    pub stats: FrameStats,
}

impl FrameContext {
    /// One full cycle: every pool updates, then the surface is redrawn.
    pub fn frame(&mut self) {
        self.sim.step();
        self.renderer.render(&self.sim, &mut self.surface);
        self.stats.record(self.sim.particle_count());
    }

    /// Re-measure the canvas and redistribute the pools across it.
    pub fn reinit(&mut self) {
        let (w, h) = self.sizing.apply(&self.canvas);
        self.sim.reseed(w as f32, h as f32);
        log::info!("[resize] {} reseeded at {}x{}", self.sim.config().name, w, h);
    }
}

/// Frames-per-second and population, logged at debug level.
pub struct FrameStats {
    window_start: Instant,
    frames: u32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
        }
    }
}

impl FrameStats {
    fn record(&mut self, particles: usize) {
        self.frames += 1;
        let elapsed = self.window_start.elapsed().as_secs_f32();
        if elapsed >= STATS_INTERVAL_SEC {
            log::debug!(
                "[frame] fps={:.1} particles={}",
                self.frames as f32 / elapsed,
                particles
            );
            self.frames = 0;
            self.window_start = Instant::now();
        }
    }
}

/// requestAnimationFrame loop with an explicit handle. At most one frame is
/// pending at a time; `cancel` drops it.
pub struct FrameLoop {
    pub scene: Rc<RefCell<FrameContext>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
    handle: Cell<Option<i32>>,
}

impl FrameLoop {
    pub fn new(scene: Rc<RefCell<FrameContext>>) -> Rc<Self> {
        let this = Rc::new(Self {
            scene,
            tick: RefCell::new(None),
            handle: Cell::new(None),
        });
        let weak = Rc::downgrade(&this);
        *this.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(lp) = weak.upgrade() {
                lp.handle.set(None);
                lp.scene.borrow_mut().frame();
                lp.schedule();
            }
        }) as Box<dyn FnMut()>));
        this
    }

    /// Request the next frame unless one is already pending.
    pub fn schedule(&self) {
        if self.handle.get().is_some() {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        if let Some(tick) = self.tick.borrow().as_ref() {
            match window.request_animation_frame(tick.as_ref().unchecked_ref()) {
                Ok(id) => self.handle.set(Some(id)),
                Err(e) => log::warn!("[frame] requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(window) = web::window() {
                _ = window.cancel_animation_frame(id);
            }
        }
    }
}

pub fn start_loop(frame_loop: &Rc<FrameLoop>) {
    frame_loop.schedule();
}

/// Debounced resize: once resize events have been quiet for
/// `RESIZE_DEBOUNCE_MS`, cancel the pending frame, reseed and resume.
pub fn wire_resize(frame_loop: Rc<FrameLoop>) {
    let Some(window) = web::window() else {
        return;
    };
    let timer: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let timer_settle = timer.clone();
    let settle = Closure::wrap(Box::new(move || {
        timer_settle.set(None);
        frame_loop.cancel();
        frame_loop.scene.borrow_mut().reinit();
        frame_loop.schedule();
    }) as Box<dyn FnMut()>);

    let on_resize = Closure::wrap(Box::new(move || {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(id) = timer.take() {
            w.clear_timeout_with_handle(id);
        }
        match w.set_timeout_with_callback_and_timeout_and_arguments_0(
            settle.as_ref().unchecked_ref(),
            RESIZE_DEBOUNCE_MS,
        ) {
            Ok(id) => timer.set(Some(id)),
            Err(e) => log::warn!("[resize] setTimeout failed: {:?}", e),
        }
    }) as Box<dyn FnMut()>);

    _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();
}
