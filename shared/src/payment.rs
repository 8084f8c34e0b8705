//! Wire types of the reservation-and-payment checkout sequence
//!
//! These mirror the payment endpoints of the remote API verbatim; the
//! payload builder in `rahal-client` is the only producer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ReservationType, TicketType};

/// Body of `POST /payment/check-reservation-limit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitCheckRequest {
    pub amount: i64,
}

/// Answer of the daily-limit check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitCheckResponse {
    pub allowed: bool,
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
}

/// Normalized body of `POST /payment/create-hotel-reservation`.
///
/// Exactly one type-specific key is populated, matching `reservation_type`.
/// `None` keys are omitted from the wire entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationPayload {
    pub reservation_type: ReservationType,
    pub amount: i64,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    // -- Type-specific keys (one populated, per reservation_type) --
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_package_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<TicketType>,

    // -- Optional travel dates, passed through as-is --
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_date: Option<String>,
}

impl ReservationPayload {
    /// Payload skeleton with no type-specific keys set.
    pub fn new(
        reservation_type: ReservationType,
        amount: i64,
        customer_name: String,
        customer_phone: String,
        customer_email: String,
    ) -> Self {
        Self {
            reservation_type,
            amount,
            customer_name,
            customer_phone,
            customer_email,
            notes: None,
            hotel_id: None,
            room_type: None,
            hotel_name: None,
            city: None,
            country: None,
            group_id: None,
            transfer_id: None,
            flight_package_id: None,
            ticket_id: None,
            ticket_type: None,
            check_in_date: None,
            check_out_date: None,
            departure_date: None,
            return_date: None,
            travel_date: None,
        }
    }
}

/// Answer of the reservation-creation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationResponse {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
    #[serde(default)]
    pub invoice_id: Option<String>,
    #[serde(default)]
    pub payment_id: Option<String>,
}

/// Body of `POST /payment/create-payment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub amount: i64,
    pub currency: String,
    pub locale: String,
    pub invoice_id: String,
    pub finish_payment_url: String,
    pub notification_url: String,
}

/// Answer of the payment-creation endpoint; `form_url` is the externally
/// hosted payment page the browser is handed off to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentFormResponse {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
    #[serde(default)]
    pub form_url: Option<String>,
}

/// One gateway event row (`GET /payment/events/{paymentId}` and
/// `GET /payment/invoice/{invoiceId}/events`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentEvent {
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub payment_id: Option<String>,
    #[serde(default)]
    pub invoice_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Raw gateway payload, displayed as-is by the admin console.
    #[serde(default)]
    pub payload: Option<serde_json::Value>,
}

fn default_true() -> bool {
    true
}
