use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Periodic callback on `setInterval` with an explicit start/stop lifecycle.
/// Dropping the timer stops it.
pub struct IntervalTimer {
    callback: Closure<dyn FnMut()>,
    period_ms: i32,
    handle: Option<i32>,
}

impl IntervalTimer {
    pub fn new(period_ms: i32, tick: impl FnMut() + 'static) -> Self {
        Self {
            callback: Closure::wrap(Box::new(tick) as Box<dyn FnMut()>),
            period_ms: period_ms.max(1),
            handle: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn start(&mut self) -> anyhow::Result<()> {
        if self.is_running() {
            return Ok(());
        }
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref::<js_sys::Function>(),
                self.period_ms,
            )
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        self.handle = Some(id);
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.handle.take() {
            if let Some(window) = web::window() {
                window.clear_interval_with_handle(id);
            }
        }
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
