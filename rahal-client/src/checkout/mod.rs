//! Reservation-and-payment checkout orchestration
//!
//! The one multi-step sequence in the system: limit check, reservation
//! creation, payment-session creation, then hand the caller the hosted
//! payment form URL. Step N's payload depends on step N-1's response, so the
//! calls are strictly sequential. No step is ever retried; a failed flow is
//! restarted in full by the user, limit check included.

mod draft;

pub use draft::{ReservationDraft, ReservationKind};

use async_trait::async_trait;
use chrono::Utc;

use shared::models::LastReservation;
use shared::payment::{
    CreateReservationResponse, LimitCheckResponse, PaymentFormResponse, PaymentRequest,
    ReservationPayload,
};

use crate::config::ClientConfig;
use crate::endpoints;
use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;
use crate::storage::ClientStorage;

/// Default abort message when the limit endpoint denies without a message.
const LIMIT_REACHED_MESSAGE: &str = "daily reservation limit reached";

/// Phrases that mark an error-path limit response as an explicit denial.
///
/// The limit check fails open on transport errors - availability over
/// strictness. Only a response that explicitly signals disablement or an
/// exceeded limit aborts from the error path, recognized by substring
/// against these phrases (the server contract has no error codes).
pub const DENIAL_PHRASES: [&str; 4] = [
    "reservations are disabled",
    "daily limit",
    "limit exceeded",
    "limit reached",
];

/// The three payment calls the orchestrator sequences.
///
/// `HttpClient` is the production implementation; tests substitute their own.
#[async_trait]
pub trait ReservationGateway: Send + Sync {
    async fn check_limit(&self, amount: i64) -> ClientResult<LimitCheckResponse>;
    async fn create_reservation(
        &self,
        payload: &ReservationPayload,
    ) -> ClientResult<CreateReservationResponse>;
    async fn create_payment(&self, req: &PaymentRequest) -> ClientResult<PaymentFormResponse>;
}

#[async_trait]
impl ReservationGateway for HttpClient {
    async fn check_limit(&self, amount: i64) -> ClientResult<LimitCheckResponse> {
        self.check_reservation_limit(amount).await
    }

    async fn create_reservation(
        &self,
        payload: &ReservationPayload,
    ) -> ClientResult<CreateReservationResponse> {
        HttpClient::create_reservation(self, payload).await
    }

    async fn create_payment(&self, req: &PaymentRequest) -> ClientResult<PaymentFormResponse> {
        HttpClient::create_payment(self, req).await
    }
}

/// Everything the caller needs after a successful flow
#[derive(Debug, Clone)]
pub struct CheckoutOutcome {
    /// Externally hosted payment form to navigate to
    pub form_url: String,
    pub invoice_id: String,
    pub payment_id: Option<String>,
}

/// Run the full checkout sequence for a booking draft.
///
/// Preconditions are validated before any network call. On success the
/// caller navigates to `form_url`; on failure a single human-readable
/// `ClientError` comes back and nothing was retried.
pub async fn complete_reservation_flow<G: ReservationGateway>(
    gateway: &G,
    storage: &ClientStorage,
    config: &ClientConfig,
    draft: &ReservationDraft,
) -> ClientResult<CheckoutOutcome> {
    draft.validate()?;

    // Step 1: daily limit check (fail-open)
    match gateway.check_limit(draft.amount).await {
        Ok(resp) if !resp.allowed => {
            return Err(ClientError::Rejected(
                resp.message
                    .unwrap_or_else(|| LIMIT_REACHED_MESSAGE.to_string()),
            ));
        }
        Ok(_) => {}
        Err(e) => {
            let message = match &e {
                ClientError::Rejected(m) | ClientError::NotFound(m) => m.clone(),
                other => other.to_string(),
            };
            if is_explicit_denial(&message) {
                return Err(ClientError::Rejected(message));
            }
            tracing::warn!("limit check unavailable, proceeding: {message}");
        }
    }

    // Step 2: create the reservation
    let payload = draft.wire_payload();
    let created = gateway.create_reservation(&payload).await?;
    if !created.success {
        return Err(ClientError::Rejected(
            created
                .message
                .unwrap_or_else(|| "reservation could not be created".to_string()),
        ));
    }
    let invoice_id = created.invoice_id.ok_or_else(|| {
        ClientError::InvalidResponse("reservation created without an invoice id".to_string())
    })?;

    // Persist the pending snapshot before anything depends on step 3; the
    // post-redirect return page reads it back for display. Keeps the
    // caller's original type, not the wire-remapped one.
    let snapshot = LastReservation {
        reservation_type: draft.kind.reservation_type(),
        amount: draft.amount,
        customer_name: payload.customer_name.clone(),
        customer_phone: payload.customer_phone.clone(),
        customer_email: payload.customer_email.clone(),
        invoice_id: invoice_id.clone(),
        payment_id: created.payment_id.clone(),
        created_at: Utc::now(),
    };
    storage.set_last_reservation(&snapshot)?;

    // Step 3: open the payment session
    let payment_req = PaymentRequest {
        amount: draft.amount,
        currency: config.currency.clone(),
        locale: config.locale.clone(),
        invoice_id: invoice_id.clone(),
        finish_payment_url: finish_payment_url(config, &invoice_id),
        notification_url: notification_url(config),
    };
    let payment = gateway.create_payment(&payment_req).await?;
    if !payment.success {
        return Err(ClientError::Rejected(
            payment
                .message
                .unwrap_or_else(|| "payment session could not be created".to_string()),
        ));
    }
    let form_url = payment.form_url.ok_or_else(|| {
        ClientError::InvalidResponse("payment session returned no form URL".to_string())
    })?;

    Ok(CheckoutOutcome {
        form_url,
        invoice_id,
        payment_id: created.payment_id,
    })
}

fn is_explicit_denial(message: &str) -> bool {
    let m = message.to_lowercase();
    DENIAL_PHRASES.iter().any(|phrase| m.contains(phrase))
}

/// Same-origin return page carrying the invoice id
fn finish_payment_url(config: &ClientConfig, invoice_id: &str) -> String {
    format!(
        "{}/payment-result?invoiceId={invoice_id}",
        config.return_url_base
    )
}

/// Server webhook the gateway notifies
fn notification_url(config: &ClientConfig) -> String {
    format!("{}{}", config.base_url, endpoints::PAYMENT_NOTIFICATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denial_phrases_match_case_insensitively() {
        assert!(is_explicit_denial("Daily Limit exceeded for today"));
        assert!(is_explicit_denial("Reservations are disabled by admin"));
        assert!(!is_explicit_denial("network error, check your connection"));
        assert!(!is_explicit_denial("internal server error"));
    }

    #[test]
    fn urls_built_from_config() {
        let config = ClientConfig::new("https://api.example.com")
            .with_return_url_base("https://www.example.com");
        assert_eq!(
            finish_payment_url(&config, "INV-7"),
            "https://www.example.com/payment-result?invoiceId=INV-7"
        );
        assert_eq!(
            notification_url(&config),
            "https://api.example.com/payment/webhook"
        );
    }
}
