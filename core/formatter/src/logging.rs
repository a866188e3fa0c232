//! FILENAME: core/formatter/src/logging.rs
// PURPOSE: ENTER/EXIT tracing macros over the `log` facade.
// FORMAT: target=<category>, message "ENTER <func> <params>" / "EXIT <func> <result>"
//
// The crate never installs a logger; the host application decides where
// these lines go.

// ============================================================================
// MACRO DEFINITIONS & EXPORTS
// ============================================================================

macro_rules! log_enter {
    ($cat:expr, $func:expr) => {
        ::log::debug!(target: $cat, "ENTER {}", $func)
    };
    ($cat:expr, $func:expr, $($arg:tt)*) => {
        ::log::debug!(target: $cat, "ENTER {} {}", $func, format_args!($($arg)*))
    };
}

macro_rules! log_exit {
    ($cat:expr, $func:expr) => {
        ::log::debug!(target: $cat, "EXIT {}", $func)
    };
    ($cat:expr, $func:expr, $($arg:tt)*) => {
        ::log::debug!(target: $cat, "EXIT {} {}", $func, format_args!($($arg)*))
    };
}

// Fine-grained decisions inside a single operation

macro_rules! log_trace {
    ($cat:expr, $($arg:tt)*) => {
        ::log::trace!(target: $cat, $($arg)*)
    };
}

pub(crate) use log_enter;
pub(crate) use log_exit;
pub(crate) use log_trace;
