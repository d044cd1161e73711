//! UPI deep links and payment-QR image references.
//!
//! The engine only *encodes* a `upi://pay` string and the URL of a
//! third-party QR-image endpoint — it performs no payment processing and
//! never fetches or validates the QR service's response.

use crate::core::{Bill, ShopSettings};

use super::html::money;

/// Third-party QR-image generation endpoint, parameterized by pixel size
/// and the percent-encoded payment string.
pub const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Percent-encode everything outside the RFC 3986 unreserved set.
pub fn percent_encode(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for b in input.bytes() {
        let is_unreserved =
            b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b'.' || b == b'~';
        if is_unreserved {
            encoded.push(b as char);
        } else {
            encoded.push_str(&format!("%{b:02X}"));
        }
    }
    encoded
}

/// Build the `upi://pay` deep link for the bill's grand total, or `None`
/// when no UPI id is configured. The payee id goes in verbatim; payee name
/// and transaction note are percent-encoded; the currency is fixed to INR.
pub fn payment_uri(bill: &Bill, settings: &ShopSettings) -> Option<String> {
    if settings.upi_id.is_empty() {
        return None;
    }
    Some(format!(
        "upi://pay?pa={}&pn={}&am={}&cu=INR&tn={}",
        settings.upi_id,
        percent_encode(&settings.shop_name),
        money(bill.totals.grand_total),
        percent_encode(&format!("Bill Payment - {}", bill.id)),
    ))
}

/// QR image URL for a payment string at the requested pixel size.
pub fn qr_image_url(payment_uri: &str, size_px: u32) -> String {
    format!(
        "{QR_ENDPOINT}?size={size_px}x{size_px}&data={}",
        percent_encode(payment_uri)
    )
}
