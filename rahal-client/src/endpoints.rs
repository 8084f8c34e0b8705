//! Endpoint paths of the remote travel API
//!
//! Every request URL is one of these paths resolved against the configured
//! base URL; nothing else builds URLs.

pub const HOTELS: &str = "/hotels";
pub const GROUPS: &str = "/groups";
pub const GROUPS_UPDATE: &str = "/groups/update";
pub const GROUP_PROGRAMS: &str = "/GroupPrograms";
pub const TRANSFERS: &str = "/transfers";
pub const FLIGHT_PACKAGES: &str = "/flightpackages";
pub const PACKAGES: &str = "/packages";

pub const RESERVATIONS: &str = "/reservations";

pub const PAYMENT_CHECK_LIMIT: &str = "/payment/check-reservation-limit";
pub const PAYMENT_CREATE_RESERVATION: &str = "/payment/create-hotel-reservation";
pub const PAYMENT_CREATE: &str = "/payment/create-payment";
/// Webhook path the gateway notifies; sent as `notificationUrl`.
pub const PAYMENT_NOTIFICATION: &str = "/payment/webhook";

pub const SETTINGS_DAILY_LIMIT: &str = "/settings/daily-reservation-limit";
pub const SETTINGS_RESERVATIONS_ENABLED_ALL: &str = "/settings/reservations-enabled-all";
pub const SETTINGS_SECTION_VISIBILITY_ALL: &str = "/settings/section-visibility-all";
pub const SETTINGS_SECTION_VISIBILITY: &str = "/settings/section-visibility";

pub const VOUCHER_INQUIRY: &str = "/voucher-inquiry";
pub const VOUCHER_INQUIRY_SEND: &str = "/voucher-inquiry/send";

pub const AUTH_LOGIN: &str = "/auth/login";
pub const AUTH_LOGOUT: &str = "/auth/logout";
pub const AUTH_VERIFY: &str = "/auth/verify";

pub fn entity(collection: &str, id: &str) -> String {
    format!("{collection}/{id}")
}

pub fn reservation_by_voucher(invoice_id: &str) -> String {
    format!("{RESERVATIONS}/by-voucher/{invoice_id}")
}

pub fn payment_events(payment_id: &str) -> String {
    format!("/payment/events/{payment_id}")
}

pub fn invoice_events(invoice_id: &str) -> String {
    format!("/payment/invoice/{invoice_id}/events")
}

pub fn invoice_pdf(invoice_id: &str) -> String {
    format!("/payment/invoice/{invoice_id}/pdf")
}

pub fn reservations_enabled(ty: &str) -> String {
    format!("/settings/reservations-enabled/{ty}")
}

pub fn section_visibility(section: &str) -> String {
    format!("{SETTINGS_SECTION_VISIBILITY}/{section}")
}

pub fn language_pack(lang: &str) -> String {
    format!("/i18n/{lang}.json")
}
