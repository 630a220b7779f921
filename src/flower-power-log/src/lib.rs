//! Provides logging facilities.
//!
//! The macros forward to [`defmt`](https://docs.rs/defmt) when the `defmt` feature is enabled,
//! and to the [`log`](https://docs.rs/log) facade when the `log` feature is enabled.
//! Without either, they only type-check their arguments.
//!
//! Format strings must stay compatible with both backends: use plain `{}` placeholders.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(clippy::pedantic)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!(r#"feature "defmt" and feature "log" cannot be enabled at the same time"#);

#[cfg(feature = "defmt")]
pub mod defmt {
    //! Selected [`defmt`] items.

    // This module is hidden in the docs, but would still be imported by a wildcard import of this
    // crate's items.
    #[doc(hidden)]
    pub mod hidden {
        // Required so the macros can access it.
        #[doc(hidden)]
        pub use defmt;
    }

    pub use defmt::{Debug2Format, Display2Format, Format};
}

#[cfg(feature = "log")]
#[doc(hidden)]
pub mod log {
    #[doc(hidden)]
    pub mod hidden {
        #[doc(hidden)]
        pub use log;
    }
}

// The declarative macros are required because the defmt macros expect defmt to be in scope.
#[cfg(feature = "defmt")]
#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($level:ident, $($arg:tt)*) => {{
        use $crate::defmt::hidden::defmt;
        defmt::$level!($($arg)*);
    }};
}

#[cfg(feature = "log")]
#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($level:ident, $($arg:tt)*) => {{
        use $crate::log::hidden::log;
        log::$level!($($arg)*);
    }};
}

// Arguments are only borrowed by `format_args!`, so disabling logging never changes ownership.
#[cfg(not(any(feature = "defmt", feature = "log")))]
#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($level:ident, $($arg:tt)*) => {{
        let _ = core::format_args!($($arg)*);
    }};
}

/// Logs a message at the trace level.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::__log!(trace, $($arg)*)
    };
}

/// Logs a message at the debug level.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::__log!(debug, $($arg)*)
    };
}

/// Logs a message at the info level.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__log!(info, $($arg)*)
    };
}

/// Logs a message at the warn level.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__log!(warn, $($arg)*)
    };
}

/// Logs a message at the error level.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::__log!(error, $($arg)*)
    };
}
