use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog entry. Owned by the external product catalog — the engine only
/// reads it; serde names match the camelCase JSON the store persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    /// Display name printed on the bill.
    pub name: String,
    /// HSN/SAC classification code, printed per line for compliance.
    pub hsn_code: String,
    /// GST percentage. Applied as two equal CGST/SGST halves.
    pub gst_rate: Decimal,
    /// Unit price in rupees. Non-negative.
    pub price: Decimal,
    /// Category label (shown as subtext in the detailed layout).
    pub category: String,
}

/// One fully tax-resolved cart line. Immutable once computed — removal
/// from a cart discards the item, it never mutates one.
///
/// Invariants: `total == taxable_value + cgst + sgst` and `cgst == sgst`
/// (intra-state supply, symmetric split).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillItem {
    /// Snapshot of the catalog entry at the time the line was added.
    pub product: Product,
    pub quantity: u32,
    /// Price × quantity, the base amount tax is computed on.
    pub taxable_value: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    /// Taxable value plus both tax halves.
    pub total: Decimal,
}

/// Aggregate figures over a bill's items. Each field is the plain sum of
/// the corresponding per-item field, so `grand_total == subtotal +
/// total_cgst + total_sgst` exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillTotals {
    pub subtotal: Decimal,
    pub total_cgst: Decimal,
    pub total_sgst: Decimal,
    pub grand_total: Decimal,
}

/// A materialized bill. Built once at save-or-preview time (see
/// [`BillBuilder`](crate::core::BillBuilder)) and never mutated; "add
/// another item" produces a new bill on the next save.
///
/// Item order is entry order and carries into the rendered table's serial
/// numbers. The id and timestamp are supplied by the caller — the engine
/// consults no clock of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    pub date: NaiveDateTime,
    pub items: Vec<BillItem>,
    pub customer_name: String,
    pub customer_phone: String,
    /// Aggregates are flattened into the bill's JSON representation so
    /// persisted blobs keep their historical top-level shape.
    #[serde(flatten)]
    pub totals: BillTotals,
}

/// Shop profile consumed read-only by the renderer. Persisted by the
/// surrounding application as a camelCase JSON blob; the engine only ever
/// needs a snapshot value, never a subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopSettings {
    pub shop_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub gstin: String,
    /// Logo image reference (typically a data URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// UPI payee id. Empty disables the payment-QR block everywhere.
    pub upi_id: String,
    pub show_upi_on_bill: bool,
    pub show_logo_on_bill: bool,
    /// Layout selector. Free-form here; unrecognized values render the
    /// standard layout (see `BillFormat::from_value`).
    pub bill_format: String,
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            shop_name: "TechWorld Electronics".into(),
            address: "123 Electronics Plaza, Tech City, State - 123456".into(),
            phone: "9876543210".into(),
            email: "info@techworld.com".into(),
            gstin: "19ABCDE1234F1Z5".into(),
            logo: None,
            upi_id: "techworld@upi".into(),
            show_upi_on_bill: true,
            show_logo_on_bill: true,
            bill_format: "standard".into(),
        }
    }
}
