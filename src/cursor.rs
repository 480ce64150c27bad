use crate::constants::*;
use crate::core::{CursorScene, FrameDelta, Handle, Particle};
use crate::dom;
use fnv::FnvHashMap;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// SVG surface holding one `<circle>` per live particle.
pub struct CursorSurface {
    document: web::Document,
    wrapper: web::Element,
    root: Option<web::HtmlElement>,
    circles: FnvHashMap<Handle, web::Element>,
}

impl CursorSurface {
    pub fn new(document: &web::Document, capacity: usize) -> anyhow::Result<Self> {
        let wrapper = dom::query(document, CURSOR_WRAPPER_SELECTOR)?;
        let root = document
            .document_element()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        let mut circles = FnvHashMap::default();
        circles.reserve(capacity);
        Ok(Self {
            document: document.clone(),
            wrapper,
            root,
            circles,
        })
    }

    /// Apply one tick: drop circles of finished particles, create circles for
    /// new ones, then push geometry for everything still alive.
    pub fn sync(&mut self, scene: &CursorScene, delta: &FrameDelta, smooth: Vec2) {
        for handle in &delta.finished {
            if let Some(el) = self.circles.remove(handle) {
                el.remove();
            }
        }

        for &handle in &delta.spawned {
            let Some(particle) = scene.emitter.get(handle) else {
                continue;
            };
            match self.create_circle(particle) {
                Ok(el) => {
                    _ = self.wrapper.prepend_with_node_1(&el);
                    self.circles.insert(handle, el);
                }
                Err(e) => log::warn!("[cursor] circle creation failed: {:?}", e),
            }
        }

        for (handle, particle) in scene.emitter.iter() {
            if let Some(el) = self.circles.get(&handle) {
                write_geometry(el, particle);
            }
        }

        if let Some(root) = &self.root {
            dom::set_css_var(root, VAR_MOUSE_X, &smooth.x.to_string());
            dom::set_css_var(root, VAR_MOUSE_Y, &smooth.y.to_string());
        }
    }

    fn create_circle(&self, particle: &Particle) -> anyhow::Result<web::Element> {
        let el = self
            .document
            .create_element_ns(Some(SVG_NS), "circle")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        write_geometry(&el, particle);
        _ = el.set_attribute("fill", &particle.color.to_css());
        Ok(el)
    }
}

#[inline]
fn write_geometry(el: &web::Element, particle: &Particle) {
    _ = el.set_attribute("cx", &particle.x.to_string());
    _ = el.set_attribute("cy", &particle.y.to_string());
    _ = el.set_attribute("r", &particle.radius.to_string());
}

/// Match the SVG scene to the window size.
pub fn size_scene(scene_el: &web::Element, width: f64, height: f64) {
    _ = scene_el.set_attribute("width", &format!("{}px", width));
    _ = scene_el.set_attribute("height", &format!("{}px", height));
}
