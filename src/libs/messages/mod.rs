//! User-facing messages and the macros that print them.
//!
//! ```rust
//! use shiftly::libs::messages::{success, Message};
//!
//! assert_eq!(success(Message::ConfigSaved), "✅ Configuration saved successfully");
//! ```

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

pub fn success(msg: Message) -> String {
    format!("✅ {}", msg)
}
