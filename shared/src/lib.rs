//! Shared types for the Rahal travel platform
//!
//! Data models, enums and response structures used by every consumer of the
//! agency's remote REST API (admin console, public booking site, tooling).

pub mod models;
pub mod payment;
pub mod response;
pub mod types;

// Re-exports
pub use payment::{
    CreateReservationResponse, LimitCheckRequest, LimitCheckResponse, PaymentEvent,
    PaymentFormResponse, PaymentRequest, ReservationPayload,
};
pub use response::{Ack, Page, Pagination, paginate};
pub use types::{PaymentStatus, ProcessingStatus, ReservationType, TicketType};
