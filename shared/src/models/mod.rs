//! Data models
//!
//! Shared between the admin console and the public booking site (via API).
//! All records are camelCase on the wire; ids are strings end to end because
//! the remote API mixes numeric and string identifiers.

pub mod flight_package;
pub mod group;
pub mod group_program;
pub mod hotel;
pub mod package;
pub mod reservation;
pub mod settings;
pub mod transfer;
pub mod user;
pub mod voucher;

// Re-exports
pub use flight_package::*;
pub use group::*;
pub use group_program::*;
pub use hotel::*;
pub use package::*;
pub use reservation::*;
pub use settings::*;
pub use transfer::*;
pub use user::*;
pub use voucher::*;
