//! Output macros for application messages.
//!
//! Every macro takes a [`Message`](super::Message) (or anything that
//! implements `Display`) and routes it either to the console or to
//! `tracing`, depending on whether debug mode is on.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is on when either environment variable is set:
//! - **`SHIFTLY_DEBUG`**: Explicit debug mode enablement
//! - **`RUST_LOG`**: Standard Rust logging configuration
//!
//! The check runs once per process and is cached.
//!
//! ## Macro Categories
//!
//! - **`msg_print!`**: General message display
//! - **`msg_success!`**, **`msg_info!`**, **`msg_warning!`**, **`msg_error!`**:
//!   prefixed notifications
//! - **`msg_debug!`**: Shown only in debug mode
//! - **`msg_error_anyhow!`** / **`msg_bail_anyhow!`**: Turn a message into an
//!   `anyhow::Error`
//!
//! ```rust,no_run
//! use shiftly::libs::messages::Message;
//! use shiftly::{msg_info, msg_success};
//!
//! msg_success!(Message::ConfigSaved);
//! msg_info!(Message::HoursUnknown, true);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled, with caching.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("SHIFTLY_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message.
///
/// Pass `true` as a second argument to surround the message with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Prints a warning with ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Logs a debug message. Silent outside debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message.
///
/// The ❌ prefix is added when the error is finally printed with `msg_error!`.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}

/// Returns early with an `anyhow::Error` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("{}", $msg)
    };
}
