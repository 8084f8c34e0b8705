//! Voucher Inquiry Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer support message tied to a reservation's invoice id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherInquiry {
    pub id: String,
    pub invoice_id: String,
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    pub message: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /voucher-inquiry/send`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VoucherInquiryCreate {
    pub invoice_id: String,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub message: String,
}
