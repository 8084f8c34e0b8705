//! Settings Models
//!
//! Small key-value set toggled through confirm-gated admin actions and
//! polled periodically by the public site.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::ReservationType;

/// Daily reservation limit state (`GET/POST /settings/daily-reservation-limit`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReservationLimit {
    pub limit: i64,
    #[serde(default)]
    pub used: i64,
}

impl DailyReservationLimit {
    pub fn remaining(&self) -> i64 {
        (self.limit - self.used).max(0)
    }
}

/// Per-type reservation-enabled flags (`GET /settings/reservations-enabled-all`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationToggles(pub HashMap<ReservationType, bool>);

impl ReservationToggles {
    /// Missing entries count as enabled; disabling is an explicit admin act.
    pub fn is_enabled(&self, ty: ReservationType) -> bool {
        self.0.get(&ty).copied().unwrap_or(true)
    }
}

/// Per-section public-site visibility flags
/// (`GET /settings/section-visibility-all`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionVisibility(pub HashMap<String, bool>);

impl SectionVisibility {
    pub fn is_visible(&self, section: &str) -> bool {
        self.0.get(section).copied().unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_toggle_defaults_to_enabled() {
        let toggles: ReservationToggles =
            serde_json::from_str(r#"{"Hotel": false}"#).unwrap();
        assert!(!toggles.is_enabled(ReservationType::Hotel));
        assert!(toggles.is_enabled(ReservationType::Transfer));
    }

    #[test]
    fn remaining_never_negative() {
        let limit = DailyReservationLimit { limit: 5, used: 9 };
        assert_eq!(limit.remaining(), 0);
    }
}
