//! Voucher inquiry endpoints

use shared::models::{VoucherInquiry, VoucherInquiryCreate};
use shared::response::Ack;

use crate::endpoints;
use crate::error::ClientResult;
use crate::http::HttpClient;

impl HttpClient {
    /// Send a customer support message tied to an invoice id
    pub async fn send_voucher_inquiry(&self, inquiry: &VoucherInquiryCreate) -> ClientResult<Ack> {
        self.post(endpoints::VOUCHER_INQUIRY_SEND, inquiry).await
    }

    /// List inquiries (admin console)
    pub async fn list_voucher_inquiries(&self) -> ClientResult<Vec<VoucherInquiry>> {
        self.get(endpoints::VOUCHER_INQUIRY).await
    }
}
