#![cfg(target_arch = "wasm32")]
use crate::core::{CursorScene, EffectConfig, TileConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod background;
mod constants;
mod core;
mod cursor;
mod dom;
mod events;
mod frame;
mod timer;

use constants::CURSOR_SCENE_SELECTOR;
use timer::IntervalTimer;

// Objects that must outlive `start` (listeners and the rAF loop are leaked instead)
struct Runtime {
    sampler: IntervalTimer,
    scene: Rc<RefCell<CursorScene>>,
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("drift-trail starting");

    if let Err(e) = init(EffectConfig::default(), TileConfig::default()) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stop pointer-speed sampling and zero the speed estimate. Listeners and the
/// frame loop keep running, so new particles spawn with zero radius.
#[wasm_bindgen]
pub fn stop_sampling() {
    RUNTIME.with(|rt| {
        if let Some(rt) = rt.borrow_mut().as_mut() {
            rt.sampler.stop();
            rt.scene.borrow_mut().pointer.reset_speed();
        }
    });
}

fn init(config: EffectConfig, tile_config: TileConfig) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let background = Rc::new(RefCell::new(background::BackgroundTiler::new(
        &document,
        tile_config,
    )?));

    let scene = Rc::new(RefCell::new(CursorScene::new(
        &config,
        StdRng::from_entropy(),
    )));
    let scene_el = dom::query(&document, CURSOR_SCENE_SELECTOR)?;
    let surface = cursor::CursorSurface::new(&document, config.max_particles)?;

    events::wire_resize(events::ResizeWiring {
        background,
        scene: scene.clone(),
        scene_el,
    });
    events::wire_pointer_handlers(&scene);

    let sampler_scene = scene.clone();
    let mut sampler = IntervalTimer::new(config.sample_interval_ms, move || {
        sampler_scene.borrow_mut().pointer.sample();
    });
    sampler.start()?;
    let runtime = Runtime {
        sampler,
        scene: scene.clone(),
    };
    RUNTIME.with(|rt| *rt.borrow_mut() = Some(runtime));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(scene, surface)));
    frame::start_loop(frame_ctx);

    log::info!(
        "[cursor] pool capacity={} sampling every {}ms",
        config.max_particles,
        config.sample_interval_ms
    );
    Ok(())
}
