//! Common enums for the shared crate
//!
//! Wire names match the remote API exactly. Legacy spellings are accepted
//! through serde aliases so the rest of the code only ever sees the
//! canonical variants.

use serde::{Deserialize, Serialize};

/// Reservation category, one per bookable catalog item type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationType {
    Hotel,
    Group,
    Transfer,
    FlightPackage,
    GroupProgram,
    PlaneTicket,
}

impl ReservationType {
    pub const ALL: [ReservationType; 6] = [
        ReservationType::Hotel,
        ReservationType::Group,
        ReservationType::Transfer,
        ReservationType::FlightPackage,
        ReservationType::GroupProgram,
        ReservationType::PlaneTicket,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationType::Hotel => "Hotel",
            ReservationType::Group => "Group",
            ReservationType::Transfer => "Transfer",
            ReservationType::FlightPackage => "FlightPackage",
            ReservationType::GroupProgram => "GroupProgram",
            ReservationType::PlaneTicket => "PlaneTicket",
        }
    }
}

impl std::fmt::Display for ReservationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Plane ticket direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketType {
    OneWay,
    TwoWay,
}

impl TicketType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::OneWay => "OneWay",
            TicketType::TwoWay => "TwoWay",
        }
    }
}

/// Gateway-reported payment state of a reservation.
///
/// Unrecognized wire values collapse to `Unknown` rather than failing the
/// whole list deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
    Canceled,
    Refunded,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Server-side processing state of a reservation.
///
/// Lifecycle: Waiting -> Completed | EmailFail. The server still emits the
/// legacy spellings `Saved`/`Pending` (pre-payment) and `Failed`
/// (confirmation email bounce); they map onto the canonical variants here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessingStatus {
    #[serde(alias = "Saved", alias = "Pending")]
    Waiting,
    Completed,
    #[serde(rename = "email-fail", alias = "Failed")]
    EmailFail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_processing_statuses_normalize() {
        for raw in ["\"Waiting\"", "\"Saved\"", "\"Pending\""] {
            let s: ProcessingStatus = serde_json::from_str(raw).unwrap();
            assert_eq!(s, ProcessingStatus::Waiting);
        }
        let s: ProcessingStatus = serde_json::from_str("\"Failed\"").unwrap();
        assert_eq!(s, ProcessingStatus::EmailFail);
        let s: ProcessingStatus = serde_json::from_str("\"email-fail\"").unwrap();
        assert_eq!(s, ProcessingStatus::EmailFail);
    }

    #[test]
    fn unknown_payment_status_does_not_fail() {
        let s: PaymentStatus = serde_json::from_str("\"SomethingNew\"").unwrap();
        assert_eq!(s, PaymentStatus::Unknown);
    }

    #[test]
    fn reservation_type_round_trips_wire_names() {
        for ty in ReservationType::ALL {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.as_str()));
        }
    }
}
