//! Reads configuration values from environment variables at compile time.
//!
//! Values are parsed in `const` context, so an invalid value fails the build instead of being
//! silently replaced by the default.

#[doc(hidden)]
pub use {const_panic, konst};

macro_rules! define_env_with_default_macro {
    ($macro_name:ident, $parse_fn_name:ident, $output_type_name:literal) => {
        /// Returns the value of the given environment variable at compile time, parsed as
        #[doc = concat!($output_type_name, ",")]
        /// or the provided default if the variable is not set.
        ///
        /// Fails compilation if the variable is set but cannot be parsed.
        #[macro_export]
        macro_rules! $macro_name {
            ($env_var:literal, $default:expr) => {
                if let Some(str_value) = option_env!($env_var) {
                    if let Ok(value) = $crate::env::konst::primitive::$parse_fn_name(str_value) {
                        value
                    } else {
                        $crate::env::const_panic::concat_panic!(
                            "Could not parse environment variable `",
                            $env_var,
                            "=",
                            str_value,
                            "` as ",
                            $output_type_name,
                        );
                    }
                } else {
                    $default
                }
            };
        }
    };
}

define_env_with_default_macro!(usize_from_env_or, parse_usize, "a usize");
