use crate::core::CursorScene;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Feed raw mouse and touch positions into the shared cursor scene.
pub fn wire_pointer_handlers(scene: &Rc<RefCell<CursorScene>>) {
    wire_mousemove(scene.clone());
    wire_touch("touchstart", scene.clone());
    wire_touch("touchmove", scene.clone());
}

fn wire_mousemove(scene: Rc<RefCell<CursorScene>>) {
    dom::add_window_listener("mousemove", move |ev: web::MouseEvent| {
        scene
            .borrow_mut()
            .pointer
            .set_position(ev.page_x() as f32, ev.page_y() as f32);
    });
}

fn wire_touch(event: &'static str, scene: Rc<RefCell<CursorScene>>) {
    dom::add_window_listener(event, move |ev: web::TouchEvent| {
        // Only the first active touch drives the trail.
        match ev.touches().get(0) {
            Some(touch) => scene
                .borrow_mut()
                .pointer
                .set_position(touch.page_x() as f32, touch.page_y() as f32),
            None => log::debug!("[pointer] {} without active touches ignored", event),
        }
    });
}
