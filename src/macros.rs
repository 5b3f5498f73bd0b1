//! Small crate-wide convenience macros.

/// Log to the browser console in debug builds only.
///
/// The console call is compiled out on non-wasm targets so reducers and
/// validators stay unit-testable natively; the arguments are still
/// type-checked there.
///
/// ```rust,ignore
/// debug_log!("Fetched {} students", students.len());
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(all(debug_assertions, target_arch = "wasm32"))]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(all(debug_assertions, target_arch = "wasm32")))]
        {
            let _ = || format!($($arg)*);
        }
    }};
}

/// Log an error to the browser console. Compiled out off wasm.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::error_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = || format!($($arg)*);
        }
    }};
}
