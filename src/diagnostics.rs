/// Wall-clock stopwatch that works on both wasm and native targets.
#[derive(Debug, Clone, Copy)]
pub struct RequestTimer {
    #[cfg(not(target_arch = "wasm32"))]
    started_at: std::time::Instant,
    #[cfg(target_arch = "wasm32")]
    started_at_ms: f64,
}

impl RequestTimer {
    pub fn start() -> Self {
        Self {
            #[cfg(not(target_arch = "wasm32"))]
            started_at: std::time::Instant::now(),
            #[cfg(target_arch = "wasm32")]
            started_at_ms: js_sys::Date::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u128 {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.started_at.elapsed().as_millis()
        }
        #[cfg(target_arch = "wasm32")]
        {
            (js_sys::Date::now() - self.started_at_ms).max(0.0) as u128
        }
    }
}

#[inline]
pub fn log_request(scope: &str, timer: RequestTimer, details: &str) {
    let elapsed_ms = timer.elapsed_ms();
    if details.trim().is_empty() {
        tracing::debug!("[http] {scope} took {elapsed_ms}ms");
    } else {
        tracing::debug!("[http] {scope} took {elapsed_ms}ms | {details}");
    }
}
