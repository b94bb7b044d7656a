use web_sys::Window;

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Monotonic timestamp in milliseconds, 0.0 outside a browser context.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.performance())
            .map_or(0.0, |perf| perf.now())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}
