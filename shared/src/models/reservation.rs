//! Reservation Model
//!
//! The server emits reservations with inconsistent field casing (older rows
//! are PascalCase). Normalization happens once, here, through serde aliases;
//! no read site ever consults two spellings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{PaymentStatus, ProcessingStatus, ReservationType};

/// A customer booking, read-only on the client.
///
/// Exactly one type-specific key is populated, matching `reservation_type`.
/// State transitions happen server-side as gateway webhooks arrive; the
/// client only creates (via the checkout flow) and displays.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(alias = "Id")]
    pub id: String,
    #[serde(alias = "ReservationType")]
    pub reservation_type: ReservationType,
    #[serde(alias = "Amount")]
    pub amount: i64,
    #[serde(alias = "CustomerName")]
    pub customer_name: String,
    #[serde(default, alias = "CustomerPhone")]
    pub customer_phone: String,
    #[serde(default, alias = "CustomerEmail")]
    pub customer_email: String,

    // -- Type-specific foreign keys --
    #[serde(default, alias = "HotelId")]
    pub hotel_id: Option<String>,
    #[serde(default, alias = "GroupId")]
    pub group_id: Option<String>,
    #[serde(default, alias = "TransferId")]
    pub transfer_id: Option<String>,
    #[serde(default, alias = "FlightPackageId")]
    pub flight_package_id: Option<String>,
    #[serde(default, alias = "GroupProgramId")]
    pub group_program_id: Option<String>,

    #[serde(default, alias = "Status")]
    pub status: Option<ProcessingStatus>,
    #[serde(default, alias = "PaymentStatus")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default, alias = "InvoiceId")]
    pub invoice_id: Option<String>,
    #[serde(default, alias = "PaymentId")]
    pub payment_id: Option<String>,
    #[serde(default, alias = "CreatedAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "UpdatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Reservation {
    /// Identifier of whatever catalog item this reservation points at.
    pub fn item_id(&self) -> Option<&str> {
        match self.reservation_type {
            ReservationType::Hotel => self.hotel_id.as_deref(),
            ReservationType::Group => self.group_id.as_deref(),
            ReservationType::Transfer => self.transfer_id.as_deref(),
            ReservationType::FlightPackage | ReservationType::PlaneTicket => {
                self.flight_package_id.as_deref()
            }
            ReservationType::GroupProgram => self
                .group_program_id
                .as_deref()
                .or(self.flight_package_id.as_deref()),
        }
    }

    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.customer_name.to_lowercase().contains(&q)
            || self.customer_phone.contains(query)
            || self
                .invoice_id
                .as_deref()
                .is_some_and(|inv| inv.to_lowercase().contains(&q))
    }
}

/// Snapshot of the pending reservation written by the checkout flow just
/// before the browser is handed off to the external payment form.
///
/// Holds at most one entry; every flow overwrites the previous one. It
/// exists so the post-redirect return page can display booking context, and
/// it keeps the caller's original reservation type (not the wire-remapped
/// one).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastReservation {
    pub reservation_type: ReservationType,
    pub amount: i64,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub invoice_id: String,
    pub payment_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_rows_normalize() {
        let raw = r#"{
            "Id": "41",
            "ReservationType": "Hotel",
            "Amount": 150000,
            "CustomerName": "Zahra",
            "HotelId": "12",
            "PaymentStatus": "Paid",
            "Status": "Saved",
            "InvoiceId": "INV-9"
        }"#;
        let r: Reservation = serde_json::from_str(raw).unwrap();
        assert_eq!(r.id, "41");
        assert_eq!(r.payment_status, Some(PaymentStatus::Paid));
        assert_eq!(r.status, Some(ProcessingStatus::Waiting));
        assert_eq!(r.item_id(), Some("12"));
    }

    #[test]
    fn group_program_item_id_falls_back_to_flight_package_key() {
        let raw = r#"{
            "id": "7",
            "reservationType": "GroupProgram",
            "amount": 80000,
            "customerName": "Omar",
            "flightPackageId": "gp-3"
        }"#;
        let r: Reservation = serde_json::from_str(raw).unwrap();
        assert_eq!(r.item_id(), Some("gp-3"));
    }
}
