//! Settings endpoints
//!
//! Admin-toggled flags and the daily reservation limit. Toggles are
//! confirm-gated in the console; this layer just issues the calls.

use serde::Serialize;
use shared::models::{DailyReservationLimit, ReservationToggles, SectionVisibility};
use shared::response::Ack;
use shared::types::ReservationType;

use crate::endpoints;
use crate::error::ClientResult;
use crate::http::HttpClient;

#[derive(Serialize)]
struct LimitUpdate {
    limit: i64,
}

#[derive(Serialize)]
struct FlagUpdate {
    enabled: bool,
}

#[derive(Serialize)]
struct VisibilityUpdate {
    visible: bool,
}

impl HttpClient {
    pub async fn daily_reservation_limit(&self) -> ClientResult<DailyReservationLimit> {
        self.get(endpoints::SETTINGS_DAILY_LIMIT).await
    }

    pub async fn set_daily_reservation_limit(&self, limit: i64) -> ClientResult<Ack> {
        self.post(endpoints::SETTINGS_DAILY_LIMIT, &LimitUpdate { limit })
            .await
    }

    pub async fn reservations_enabled_all(&self) -> ClientResult<ReservationToggles> {
        self.get(endpoints::SETTINGS_RESERVATIONS_ENABLED_ALL).await
    }

    pub async fn set_reservation_enabled(
        &self,
        ty: ReservationType,
        enabled: bool,
    ) -> ClientResult<Ack> {
        self.post(
            &endpoints::reservations_enabled(ty.as_str()),
            &FlagUpdate { enabled },
        )
        .await
    }

    pub async fn section_visibility_all(&self) -> ClientResult<SectionVisibility> {
        self.get(endpoints::SETTINGS_SECTION_VISIBILITY_ALL).await
    }

    pub async fn set_section_visibility(&self, section: &str, visible: bool) -> ClientResult<Ack> {
        self.post(
            &endpoints::section_visibility(section),
            &VisibilityUpdate { visible },
        )
        .await
    }
}
