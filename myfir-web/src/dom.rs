use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

#[cfg(target_arch = "wasm32")]
use js_sys::{Function, Promise};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;

/// The global `window`, or `None` outside a browser context (server
/// rendering, native tests). Nothing in this app may panic on a missing
/// window; callers degrade to defaults instead. Off wasm the browser
/// bindings are never touched: calling a wasm-bindgen import on a native
/// target aborts instead of returning.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// The browser `localStorage` handle, or `None` when the window is missing
/// or storage access is denied (private browsing on some engines).
#[must_use]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// Convert a JavaScript value into a readable string for error reporting.
///
/// Only meaningful for values produced by live browser calls; native code
/// paths never construct a `JsValue` to report.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error to the browser console, or through `log` off wasm.
pub fn console_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from(message));
    #[cfg(not(target_arch = "wasm32"))]
    log::error!("{message}");
}

/// Raised when a timer cannot be scheduled or awaited.
#[derive(Debug, Error)]
#[error("timer unavailable: {0}")]
pub struct TimerError(String);

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if no window is available, the timer cannot be
/// scheduled, or the underlying JavaScript promise rejects.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), TimerError> {
    let win = window().ok_or_else(|| TimerError(String::from("no window")))?;

    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| TimerError(String::from("resolve function unset")))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = win
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            duration_ms,
        )
        .map_err(|e| TimerError(js_error_message(&e)))?;
    closure.forget();

    JsFuture::from(promise)
        .await
        .map_err(|e| TimerError(js_error_message(&e)))?;
    Ok(())
}

/// Off wasm there is no event loop to schedule against; report the missing
/// timer so callers can skip their delayed work.
///
/// # Errors
/// Always fails outside a browser.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(_duration_ms: i32) -> Result<(), TimerError> {
    Err(TimerError(String::from("no window")))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn native_context_has_no_window_or_storage() {
        assert!(window().is_none());
        assert!(local_storage().is_none());
    }

    #[test]
    fn sleep_reports_the_missing_timer_instead_of_panicking() {
        let err = block_on(sleep_ms(1)).unwrap_err();
        assert!(err.to_string().contains("timer unavailable"));
    }
}
