//! Printable bill documents.
//!
//! Four layout variants share the same inputs — a materialized
//! [`Bill`] and a [`ShopSettings`] snapshot — and each produces a
//! complete, self-contained HTML document (inline styling, no external
//! stylesheet) ready for a display or print surface. Rendering is a pure
//! single-pass function: identical inputs yield byte-identical output.

mod compact;
mod detailed;
mod html;
mod minimal;
mod standard;
pub mod upi;

use serde::{Deserialize, Serialize};

use crate::core::{Bill, ShopSettings};

/// Layout selector persisted in [`ShopSettings::bill_format`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BillFormat {
    Standard,
    Compact,
    Detailed,
    Minimal,
}

impl BillFormat {
    /// Map a persisted selector value. Anything unrecognized renders the
    /// standard layout — never an error.
    pub fn from_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Self::Compact,
            "detailed" => Self::Detailed,
            "minimal" => Self::Minimal,
            _ => Self::Standard,
        }
    }
}

/// Render the bill into the layout selected by the shop profile.
///
/// `preview` marks the document as a non-persisted preview; layouts that
/// support it show a visible banner. Absent optional sections (no logo,
/// no UPI id) are omitted, never an error.
pub fn render_bill(bill: &Bill, settings: &ShopSettings, preview: bool) -> String {
    match BillFormat::from_value(&settings.bill_format) {
        BillFormat::Standard => standard::render(bill, settings, preview),
        BillFormat::Compact => compact::render(bill, settings, preview),
        BillFormat::Detailed => detailed::render(bill, settings, preview),
        BillFormat::Minimal => minimal::render(bill, settings, preview),
    }
}
