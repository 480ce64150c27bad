use crate::core::{CursorScene, FrameDelta};
use crate::cursor::CursorSurface;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<CursorScene>>,
    pub surface: CursorSurface,
    pub delta: FrameDelta,
    pub epoch: Instant,
}

impl FrameContext {
    pub fn new(scene: Rc<RefCell<CursorScene>>, surface: CursorSurface) -> Self {
        Self {
            scene,
            surface,
            delta: FrameDelta::default(),
            epoch: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now_sec = self.epoch.elapsed().as_secs_f64();
        let mut scene = self.scene.borrow_mut();
        let smooth = scene.tick(now_sec, &mut self.delta);
        self.surface.sync(&scene, &self.delta, smooth);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref::<js_sys::Function>());
    }
}
