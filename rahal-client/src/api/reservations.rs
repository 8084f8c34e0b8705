//! Reservation read endpoints
//!
//! Reservations are read-only here; creation goes through the checkout flow.

use shared::models::Reservation;

use crate::endpoints;
use crate::error::ClientResult;
use crate::http::HttpClient;

impl HttpClient {
    pub async fn list_reservations(&self) -> ClientResult<Vec<Reservation>> {
        self.get(endpoints::RESERVATIONS).await
    }

    /// Look up the reservation behind a voucher/invoice id (return page,
    /// voucher-inquiry form).
    pub async fn reservation_by_voucher(&self, invoice_id: &str) -> ClientResult<Reservation> {
        self.get(&endpoints::reservation_by_voucher(invoice_id))
            .await
    }
}
