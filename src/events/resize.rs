use crate::background::BackgroundTiler;
use crate::core::CursorScene;
use crate::cursor;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct ResizeWiring {
    pub background: Rc<RefCell<BackgroundTiler>>,
    pub scene: Rc<RefCell<CursorScene>>,
    pub scene_el: web::Element,
}

/// Sync the cursor scene to the current window size.
pub fn apply_window_size(w: &ResizeWiring) {
    if let Some(size) = dom::window_size() {
        w.scene.borrow_mut().resize(size);
        cursor::size_scene(&w.scene_el, size.width, size.height);
    }
}

pub fn wire_resize(w: ResizeWiring) {
    apply_window_size(&w);
    dom::add_window_listener("resize", move |_ev: web::Event| {
        apply_window_size(&w);
        if let Err(e) = w.background.borrow_mut().regenerate() {
            log::error!("[background] regenerate error: {:?}", e);
        }
    });
}
