//! Typed endpoint wrappers
//!
//! Each module extends `HttpClient` with the methods of one API surface.
//! CRUD views share no state with each other or with the checkout flow;
//! everything goes through the remote API.

pub mod catalog;
pub mod i18n;
pub mod payments;
pub mod reservations;
pub mod settings;
pub mod stats;
pub mod voucher;

pub use i18n::LanguagePack;
pub use stats::DashboardStats;
