//! Reservation draft: validation and wire-payload mapping
//!
//! The draft is what a booking form produces. `ReservationKind` carries the
//! per-type identifiers, so a draft can never hold a foreign key that does
//! not match its type; validation covers what the type system cannot
//! (placeholder names, junk ids serialized by a lossy form layer).

use shared::payment::ReservationPayload;
use shared::types::{ReservationType, TicketType};

use crate::error::{ClientError, ClientResult};

/// Type-specific identifiers of a booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationKind {
    Hotel {
        hotel_id: String,
        room_type: String,
        hotel_name: Option<String>,
        city: Option<String>,
        country: Option<String>,
    },
    Group {
        group_id: String,
        hotel_id: String,
        room_type: String,
    },
    Transfer {
        transfer_id: String,
    },
    FlightPackage {
        flight_package_id: String,
    },
    GroupProgram {
        group_program_id: String,
    },
    PlaneTicket {
        ticket_id: String,
        ticket_type: TicketType,
    },
}

impl ReservationKind {
    /// The caller-facing reservation type (GroupProgram stays GroupProgram
    /// here; the wire remap happens only in `wire_payload`).
    pub fn reservation_type(&self) -> ReservationType {
        match self {
            ReservationKind::Hotel { .. } => ReservationType::Hotel,
            ReservationKind::Group { .. } => ReservationType::Group,
            ReservationKind::Transfer { .. } => ReservationType::Transfer,
            ReservationKind::FlightPackage { .. } => ReservationType::FlightPackage,
            ReservationKind::GroupProgram { .. } => ReservationType::GroupProgram,
            ReservationKind::PlaneTicket { .. } => ReservationType::PlaneTicket,
        }
    }
}

/// A fully-populated booking request, ready for the checkout flow
#[derive(Debug, Clone)]
pub struct ReservationDraft {
    pub kind: ReservationKind,
    pub amount: i64,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub notes: Option<String>,
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    pub departure_date: Option<String>,
    pub return_date: Option<String>,
    pub travel_date: Option<String>,
}

impl ReservationDraft {
    pub fn new(
        kind: ReservationKind,
        amount: i64,
        customer_name: impl Into<String>,
        customer_phone: impl Into<String>,
        customer_email: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            amount,
            customer_name: customer_name.into(),
            customer_phone: customer_phone.into(),
            customer_email: customer_email.into(),
            notes: None,
            check_in_date: None,
            check_out_date: None,
            departure_date: None,
            return_date: None,
            travel_date: None,
        }
    }

    /// Check every precondition of the checkout flow.
    ///
    /// A failure here means zero network calls were made and the user can
    /// correct the form and resubmit.
    pub fn validate(&self) -> ClientResult<()> {
        if self.amount <= 0 {
            return Err(invalid("amount must be greater than zero"));
        }

        let name = self.customer_name.trim();
        if name.is_empty() {
            return Err(invalid("customer name is required"));
        }
        if PLACEHOLDER_NAMES
            .iter()
            .any(|p| name.eq_ignore_ascii_case(p))
        {
            return Err(invalid("customer name looks like a placeholder"));
        }

        let phone = self.customer_phone.trim();
        if phone.len() < 5 {
            return Err(invalid("phone number must be at least 5 characters"));
        }
        if !phone.chars().any(|c| c.is_ascii_digit()) {
            return Err(invalid("phone number must contain at least one digit"));
        }

        if !is_plausible_email(self.customer_email.trim()) {
            return Err(invalid("email address is not valid"));
        }

        match &self.kind {
            ReservationKind::Hotel {
                hotel_id,
                room_type,
                ..
            } => {
                require_id(hotel_id, "hotel id")?;
                require_id(room_type, "room type")?;
            }
            ReservationKind::Group {
                group_id,
                hotel_id,
                room_type,
            } => {
                require_id(group_id, "group id")?;
                require_id(hotel_id, "hotel id")?;
                require_id(room_type, "room type")?;
            }
            ReservationKind::Transfer { transfer_id } => {
                require_id(transfer_id, "transfer id")?;
            }
            ReservationKind::FlightPackage { flight_package_id } => {
                require_id(flight_package_id, "flight package id")?;
            }
            ReservationKind::GroupProgram { group_program_id } => {
                require_id(group_program_id, "group program id")?;
            }
            ReservationKind::PlaneTicket { ticket_id, .. } => {
                require_id(ticket_id, "ticket id")?;
            }
        }

        Ok(())
    }

    /// Build the normalized wire payload for `POST /payment/create-hotel-reservation`.
    ///
    /// GroupProgram is re-mapped to the FlightPackage wire type with the
    /// program id in `flightPackageId` - a compatibility shim for a backend
    /// without a native GroupProgram type. The snapshot and all client-side
    /// display keep the original type.
    pub fn wire_payload(&self) -> ReservationPayload {
        let wire_type = match self.kind {
            ReservationKind::GroupProgram { .. } => ReservationType::FlightPackage,
            _ => self.kind.reservation_type(),
        };

        let mut payload = ReservationPayload::new(
            wire_type,
            self.amount,
            self.customer_name.trim().to_string(),
            self.customer_phone.trim().to_string(),
            self.customer_email.trim().to_string(),
        );

        match &self.kind {
            ReservationKind::Hotel {
                hotel_id,
                room_type,
                hotel_name,
                city,
                country,
            } => {
                payload.hotel_id = Some(hotel_id.clone());
                payload.room_type = Some(room_type.clone());
                payload.hotel_name = hotel_name.clone();
                payload.city = city.clone();
                payload.country = country.clone();
            }
            ReservationKind::Group {
                group_id,
                hotel_id,
                room_type,
            } => {
                payload.group_id = Some(group_id.clone());
                payload.hotel_id = Some(hotel_id.clone());
                payload.room_type = Some(room_type.clone());
            }
            ReservationKind::Transfer { transfer_id } => {
                payload.transfer_id = Some(transfer_id.clone());
            }
            ReservationKind::FlightPackage { flight_package_id } => {
                payload.flight_package_id = Some(flight_package_id.clone());
            }
            ReservationKind::GroupProgram { group_program_id } => {
                payload.flight_package_id = Some(group_program_id.clone());
            }
            ReservationKind::PlaneTicket {
                ticket_id,
                ticket_type,
            } => {
                payload.ticket_id = Some(ticket_id.clone());
                payload.ticket_type = Some(*ticket_type);
            }
        }

        payload.notes = self.notes.clone();
        payload.check_in_date = self.check_in_date.clone();
        payload.check_out_date = self.check_out_date.clone();
        payload.departure_date = self.departure_date.clone();
        payload.return_date = self.return_date.clone();
        payload.travel_date = self.travel_date.clone();
        payload
    }
}

/// Names some upstream form layers fill in when the field was left blank.
const PLACEHOLDER_NAMES: [&str; 2] = ["guest", "n/a"];

fn invalid(message: &str) -> ClientError {
    ClientError::Validation(message.to_string())
}

/// Reject empty ids and the literal "null"/"undefined" a lossy form layer
/// can serialize into a string field.
fn require_id(value: &str, label: &str) -> ClientResult<()> {
    let v = value.trim();
    if v.is_empty() || v.eq_ignore_ascii_case("null") || v.eq_ignore_ascii_case("undefined") {
        return Err(invalid(&format!("{label} is missing")));
    }
    Ok(())
}

/// Minimal local@domain.tld shape check; the server re-validates.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel_draft() -> ReservationDraft {
        ReservationDraft::new(
            ReservationKind::Hotel {
                hotel_id: "12".into(),
                room_type: "Double".into(),
                hotel_name: Some("Babylon Rotana".into()),
                city: Some("Baghdad".into()),
                country: Some("Iraq".into()),
            },
            150_000,
            "Zahra Kareem",
            "+9647701234567",
            "zahra@example.com",
        )
    }

    #[test]
    fn valid_hotel_draft_passes() {
        hotel_draft().validate().unwrap();
    }

    #[test]
    fn placeholder_names_rejected() {
        for bad in ["Guest", "guest", "N/A", "n/a", ""] {
            let mut d = hotel_draft();
            d.customer_name = bad.to_string();
            let err = d.validate().unwrap_err();
            assert!(
                err.to_string().contains("name"),
                "expected a name-related message, got: {err}"
            );
        }
    }

    #[test]
    fn phone_needs_length_and_digit() {
        let mut d = hotel_draft();
        d.customer_phone = "abc".into();
        assert!(d.validate().is_err());

        d.customer_phone = "abcdef".into();
        let err = d.validate().unwrap_err();
        assert!(err.to_string().contains("digit"));

        d.customer_phone = "a1234".into();
        d.validate().unwrap();
    }

    #[test]
    fn email_shape_checked() {
        for bad in ["not-an-email", "a@b", "@x.com", "a b@c.de", "a@.tld", "a@host."] {
            let mut d = hotel_draft();
            d.customer_email = bad.to_string();
            assert!(d.validate().is_err(), "{bad} should be rejected");
        }
        let mut d = hotel_draft();
        d.customer_email = "x@sub.example.co".into();
        d.validate().unwrap();
    }

    #[test]
    fn junk_ids_rejected() {
        for bad in ["", "  ", "null", "NULL", "undefined"] {
            let d = ReservationDraft::new(
                ReservationKind::Transfer {
                    transfer_id: bad.into(),
                },
                50_000,
                "Ali",
                "07701",
                "ali@example.com",
            );
            assert!(d.validate().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn zero_amount_rejected() {
        let mut d = hotel_draft();
        d.amount = 0;
        assert!(d.validate().is_err());
    }

    #[test]
    fn hotel_payload_carries_exactly_its_fields() {
        let json = serde_json::to_value(hotel_draft().wire_payload()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj["reservationType"], "Hotel");
        assert_eq!(obj["hotelId"], "12");
        assert_eq!(obj["roomType"], "Double");
        assert_eq!(obj["hotelName"], "Babylon Rotana");
        for foreign in ["groupId", "transferId", "flightPackageId", "ticketId", "ticketType"] {
            assert!(!obj.contains_key(foreign), "{foreign} leaked into Hotel payload");
        }
    }

    #[test]
    fn group_payload_adds_group_id() {
        let d = ReservationDraft::new(
            ReservationKind::Group {
                group_id: "g-5".into(),
                hotel_id: "12".into(),
                room_type: "Triple".into(),
            },
            275_000,
            "Omar",
            "07712345",
            "omar@example.com",
        );
        let json = serde_json::to_value(d.wire_payload()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj["reservationType"], "Group");
        assert_eq!(obj["groupId"], "g-5");
        assert_eq!(obj["hotelId"], "12");
        assert!(!obj.contains_key("transferId"));
    }

    #[test]
    fn group_program_remaps_to_flight_package_on_the_wire() {
        let d = ReservationDraft::new(
            ReservationKind::GroupProgram {
                group_program_id: "gp-9".into(),
            },
            80_000,
            "Sara",
            "07790000",
            "sara@example.com",
        );
        assert_eq!(d.kind.reservation_type(), ReservationType::GroupProgram);

        let json = serde_json::to_value(d.wire_payload()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj["reservationType"], "FlightPackage");
        assert_eq!(obj["flightPackageId"], "gp-9");
        assert!(!obj.contains_key("groupProgramId"));
    }

    #[test]
    fn plane_ticket_payload() {
        let d = ReservationDraft::new(
            ReservationKind::PlaneTicket {
                ticket_id: "t-1".into(),
                ticket_type: TicketType::TwoWay,
            },
            420_000,
            "Hassan",
            "07811111",
            "hassan@example.com",
        );
        let json = serde_json::to_value(d.wire_payload()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj["ticketType"], "TwoWay");
        assert_eq!(obj["ticketId"], "t-1");
        assert!(!obj.contains_key("hotelId"));
    }

    #[test]
    fn customer_fields_are_trimmed() {
        let mut d = hotel_draft();
        d.customer_name = "  Zahra Kareem ".into();
        d.customer_email = " zahra@example.com ".into();
        let payload = d.wire_payload();
        assert_eq!(payload.customer_name, "Zahra Kareem");
        assert_eq!(payload.customer_email, "zahra@example.com");
    }
}
