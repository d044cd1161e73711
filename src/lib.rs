//! # bijak
//!
//! GST retail billing engine: tax-split line items, aggregate totals,
//! amount-in-words (Indian numbering), and printable invoice layouts with
//! an embedded UPI payment QR.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! The engine is pure: it performs no I/O and produces documents as plain
//! strings for the surrounding point-of-sale application to display or
//! print. Catalog storage, settings persistence, and print-window
//! orchestration are the application's concern; this crate only consumes a
//! [`Product`] catalog and a [`ShopSettings`] snapshot and hands back
//! computed [`Bill`]s and rendered documents.
//!
//! ## Quick Start
//!
//! ```rust
//! use bijak::core::*;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let laptop = Product {
//!     id: "3".into(),
//!     name: "Dell Inspiron Laptop".into(),
//!     hsn_code: "8471".into(),
//!     gst_rate: dec!(18),
//!     price: dec!(55000),
//!     category: "Laptop".into(),
//! };
//!
//! let date = NaiveDate::from_ymd_opt(2024, 6, 15)
//!     .unwrap()
//!     .and_hms_opt(14, 30, 0)
//!     .unwrap();
//!
//! let bill = BillBuilder::new(bill_id(1718445600000), date)
//!     .customer("Asha Verma", "9876543210")
//!     .add_item(&laptop, 2)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(bill.totals.grand_total, dec!(129800));
//! assert_eq!(
//!     amount_in_words(bill.totals.grand_total),
//!     "One Lakh Twenty Nine Thousand Eight Hundred"
//! );
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `render` (default) | Printable HTML bill layouts and UPI QR helpers |

pub mod core;

#[cfg(feature = "render")]
pub mod render;

// Re-export core types at crate root for convenience
pub use crate::core::*;

#[cfg(feature = "render")]
pub use crate::render::{BillFormat, render_bill};
