//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared session (config + store) and the sample loader
//! - `expenses` - Expense commands (list, add, remove)
//! - `goals` - Goal commands (list, add, update, remove)
//! - `income` - Income commands (set, show, clear)
//! - `reports` - Analysis, projection, report export and assistant context
//! - `status` - Dashboard and reset commands

pub mod core;
pub mod expenses;
pub mod goals;
pub mod income;
pub mod reports;
pub mod status;

// Re-export command functions for main.rs
pub use self::core::*;
pub use expenses::*;
pub use goals::*;
pub use income::*;
pub use reports::*;
pub use status::*;

/// Truncate a string to `max` characters, adding "..." when cut
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
