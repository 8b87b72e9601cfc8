// Employee Registry - Core Library
// Exposes the entity model and menu loop for use in the CLI binary and tests

pub mod entities;
pub mod menu;

// Re-export commonly used types
pub use entities::{Employee, EmployeeRepository, TAX_RATE};
pub use menu::run;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
