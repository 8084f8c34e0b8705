//! Dashboard stats
//!
//! The admin landing page shows a handful of independent numbers. The
//! fetches run concurrently with no ordering guarantee; a failed card is
//! shown as absent rather than failing the whole dashboard.

use shared::models::DailyReservationLimit;
use shared::types::PaymentStatus;

use crate::http::HttpClient;

/// Numbers for the admin landing page
#[derive(Debug, Clone, Default)]
pub struct DashboardStats {
    pub total_reservations: Option<usize>,
    pub paid_reservations: Option<usize>,
    pub daily_limit: Option<DailyReservationLimit>,
    pub hotel_count: Option<usize>,
}

impl HttpClient {
    pub async fn dashboard_stats(&self) -> DashboardStats {
        let (reservations, limit, hotels) = tokio::join!(
            self.list_reservations(),
            self.daily_reservation_limit(),
            self.list_hotels(),
        );

        let (total, paid) = match reservations {
            Ok(list) => {
                let paid = list
                    .iter()
                    .filter(|r| r.payment_status == Some(PaymentStatus::Paid))
                    .count();
                (Some(list.len()), Some(paid))
            }
            Err(e) => {
                tracing::debug!("dashboard reservations fetch failed: {e}");
                (None, None)
            }
        };

        DashboardStats {
            total_reservations: total,
            paid_reservations: paid,
            daily_limit: limit.ok(),
            hotel_count: hotels.ok().map(|h| h.len()),
        }
    }
}
