//! Emission macros that capture call-site metadata.
//!
//! Each macro logs through [`crate::global`] by default; prefix the arguments with
//! `=> dispatcher;` to target a specific instance instead:
//!
//! ```
//! use catlog::{LogDispatcher, Sink, log_info};
//!
//! let dispatcher = LogDispatcher::builder().sink(Sink::None).build();
//! log_info!(=> dispatcher; "ready", 3);
//! ```

/// Path of the enclosing function, e.g. `my_crate::net::connect`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(__here);
        let name = name.strip_suffix("::__here").unwrap_or(name);
        name.trim_end_matches("::{{closure}}")
    }};
}

/// Space-joined values, no tag.
#[macro_export]
macro_rules! log_info {
    (=> $dispatcher:expr; $($value:expr),* $(,)?) => {
        $dispatcher.info(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
    ($($value:expr),* $(,)?) => {
        $crate::log_info!(=> $crate::global(); $($value),*)
    };
}

/// Tagged with the enclosing function's name.
#[macro_export]
macro_rules! log_debug {
    (=> $dispatcher:expr; $($value:expr),* $(,)?) => {
        $dispatcher.debug(
            $crate::function_name!(),
            &[$(&$value as &dyn ::std::fmt::Display),*],
        )
    };
    ($($value:expr),* $(,)?) => {
        $crate::log_debug!(=> $crate::global(); $($value),*)
    };
}

/// Tagged with source file, line, and the enclosing function's name.
#[macro_export]
macro_rules! log_error {
    (=> $dispatcher:expr; $($value:expr),* $(,)?) => {
        $dispatcher.error(
            ::std::file!(),
            $crate::function_name!(),
            ::std::line!(),
            &[$(&$value as &dyn ::std::fmt::Display),*],
        )
    };
    ($($value:expr),* $(,)?) => {
        $crate::log_error!(=> $crate::global(); $($value),*)
    };
}

/// Marks the enclosing function as having completed.
#[macro_export]
macro_rules! log_success {
    (=> $dispatcher:expr $(;)?) => {
        $dispatcher.success($crate::function_name!())
    };
    () => {
        $crate::log_success!(=> $crate::global())
    };
}
