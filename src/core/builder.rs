use chrono::NaiveDateTime;

use super::billing;
use super::error::BillingError;
use super::types::{Bill, BillItem, Product};
use super::validation;

/// Builder for materializing immutable bills.
///
/// Line items are computed in entry order as they are added; totals are
/// aggregated once at [`build`](Self::build). The id and timestamp come
/// from the caller (see [`bill_id`](crate::core::bill_id) and
/// [`preview_bill_id`](crate::core::preview_bill_id)).
///
/// ```
/// use bijak::core::*;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let speaker = Product {
///     id: "9".into(),
///     name: "JBL Bluetooth Speaker".into(),
///     hsn_code: "8518".into(),
///     gst_rate: dec!(18),
///     price: dec!(5000),
///     category: "Audio".into(),
/// };
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 15)
///     .unwrap()
///     .and_hms_opt(11, 5, 0)
///     .unwrap();
///
/// let bill = BillBuilder::new("BILL-1718431500000", date)
///     .customer("Ravi Kumar", "9812345678")
///     .add_item(&speaker, 2)
///     .build()
///     .unwrap();
///
/// assert_eq!(bill.totals.grand_total, dec!(11800));
/// ```
pub struct BillBuilder {
    id: String,
    date: NaiveDateTime,
    customer_name: String,
    customer_phone: String,
    items: Vec<BillItem>,
}

impl BillBuilder {
    pub fn new(id: impl Into<String>, date: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            date,
            customer_name: String::new(),
            customer_phone: String::new(),
            items: Vec::new(),
        }
    }

    pub fn customer(mut self, name: impl Into<String>, phone: impl Into<String>) -> Self {
        self.customer_name = name.into();
        self.customer_phone = phone.into();
        self
    }

    /// Compute and append a line item for one cart selection.
    ///
    /// Precondition: `quantity >= 1` (enforced by the cart layer; see
    /// [`validate_quantity`](crate::core::validate_quantity)).
    pub fn add_item(mut self, product: &Product, quantity: u32) -> Self {
        self.items.push(billing::compute_line_item(product, quantity));
        self
    }

    /// Append an already-computed line item.
    pub fn add_line(mut self, item: BillItem) -> Self {
        self.items.push(item);
        self
    }

    /// Build the bill, aggregating totals and validating customer details.
    /// Returns all validation errors joined (not just the first).
    pub fn build(self) -> Result<Bill, BillingError> {
        let errors = validation::validate_customer(&self.customer_name, &self.customer_phone);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(BillingError::Validation(msg));
        }

        self.build_unchecked()
    }

    /// Build without customer validation — useful for tests or importing
    /// external data. Structural requirements still apply.
    pub fn build_unchecked(self) -> Result<Bill, BillingError> {
        if self.items.is_empty() {
            return Err(BillingError::Builder(
                "at least one bill item is required".into(),
            ));
        }

        // Input limits to prevent abuse
        if self.items.len() > 10_000 {
            return Err(BillingError::Builder(
                "bill cannot have more than 10,000 items".into(),
            ));
        }
        if self.id.len() > 200 {
            return Err(BillingError::Builder(
                "bill id cannot exceed 200 characters".into(),
            ));
        }

        let totals = billing::aggregate(&self.items);

        Ok(Bill {
            id: self.id,
            date: self.date,
            items: self.items,
            customer_name: self.customer_name,
            customer_phone: self.customer_phone,
            totals,
        })
    }
}
