//! Payment endpoints
//!
//! The three calls of the checkout sequence plus the gateway-event and
//! invoice-PDF reads the admin console shows.

use shared::payment::{
    CreateReservationResponse, LimitCheckRequest, LimitCheckResponse, PaymentEvent,
    PaymentFormResponse, PaymentRequest, ReservationPayload,
};

use crate::endpoints;
use crate::error::ClientResult;
use crate::http::HttpClient;

impl HttpClient {
    /// Ask whether the candidate amount still fits today's reservation limit
    pub async fn check_reservation_limit(&self, amount: i64) -> ClientResult<LimitCheckResponse> {
        self.post(
            endpoints::PAYMENT_CHECK_LIMIT,
            &LimitCheckRequest { amount },
        )
        .await
    }

    /// Create a reservation from the normalized wire payload
    pub async fn create_reservation(
        &self,
        payload: &ReservationPayload,
    ) -> ClientResult<CreateReservationResponse> {
        self.post(endpoints::PAYMENT_CREATE_RESERVATION, payload)
            .await
    }

    /// Open a payment session; the response carries the hosted form URL
    pub async fn create_payment(&self, req: &PaymentRequest) -> ClientResult<PaymentFormResponse> {
        self.post(endpoints::PAYMENT_CREATE, req).await
    }

    pub async fn payment_events(&self, payment_id: &str) -> ClientResult<Vec<PaymentEvent>> {
        self.get(&endpoints::payment_events(payment_id)).await
    }

    pub async fn invoice_events(&self, invoice_id: &str) -> ClientResult<Vec<PaymentEvent>> {
        self.get(&endpoints::invoice_events(invoice_id)).await
    }

    /// Download the invoice PDF bytes
    pub async fn invoice_pdf(&self, invoice_id: &str) -> ClientResult<Vec<u8>> {
        self.get_bytes(&endpoints::invoice_pdf(invoice_id)).await
    }
}
