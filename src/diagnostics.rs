use wasm_bindgen::JsValue;

/// Line written each time the gate renders before the first commit.
pub const NOT_MOUNTED_MESSAGE: &str = "Is not mounted";

/// Side channel for render-path diagnostics. Never affects control flow.
pub trait Diagnostics {
    fn not_mounted(&self);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn not_mounted(&self) {}
}

/// Writes to the browser console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn not_mounted(&self) {
        web_sys::console::log_1(&JsValue::from_str(NOT_MOUNTED_MESSAGE));
    }
}

#[cfg(debug_assertions)]
pub type BuildDiagnostics = ConsoleDiagnostics;

#[cfg(not(debug_assertions))]
pub type BuildDiagnostics = NoopDiagnostics;
