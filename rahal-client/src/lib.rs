//! Rahal Client - HTTP client for the travel-agency REST API
//!
//! Typed endpoint wrappers for the catalog, reservation, payment, settings
//! and auth surfaces of the remote API, plus the reservation-and-payment
//! checkout orchestration and the small local state store the admin console
//! and booking site share.

pub mod api;
pub mod checkout;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod monitor;
pub mod session;
pub mod storage;

pub use checkout::{CheckoutOutcome, ReservationDraft, ReservationKind, complete_reservation_flow};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use monitor::{PublicSettings, SettingsMonitor};
pub use session::Session;
pub use storage::ClientStorage;

// Re-export shared types for convenience
pub use shared::models::LastReservation;
pub use shared::types::{PaymentStatus, ProcessingStatus, ReservationType, TicketType};
