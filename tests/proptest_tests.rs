//! Property-based tests for the billing arithmetic, words conversion, and
//! renderer determinism.

use bijak::core::*;
use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn bill_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(14, 30, 5)
        .unwrap()
}

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Generate a reasonable unit price (0.01 to 999999.99).
fn arb_price() -> impl Strategy<Value = Decimal> {
    (1u64..100_000_000u64).prop_map(|paise| Decimal::new(paise as i64, 2))
}

/// Generate a quantity (1 to 100).
fn arb_quantity() -> impl Strategy<Value = u32> {
    1u32..=100u32
}

/// Generate a GST slab actually used in Indian retail.
fn arb_gst_rate() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(dec!(0)),
        Just(dec!(5)),
        Just(dec!(12)),
        Just(dec!(18)),
        Just(dec!(28)),
    ]
}

fn arb_product() -> impl Strategy<Value = Product> {
    (arb_price(), arb_gst_rate()).prop_map(|(price, gst_rate)| Product {
        id: "1".into(),
        name: "Item".into(),
        hsn_code: "8471".into(),
        gst_rate,
        price,
        category: "Misc".into(),
    })
}

fn arb_items() -> impl Strategy<Value = Vec<BillItem>> {
    prop::collection::vec(
        (arb_product(), arb_quantity()).prop_map(|(p, q)| compute_line_item(&p, q)),
        1..=8,
    )
}

// ── Property Tests ──────────────────────────────────────────────────────────

proptest! {
    /// Every line item satisfies the symmetric-split invariant exactly.
    #[test]
    fn line_item_invariants(product in arb_product(), quantity in arb_quantity()) {
        let item = compute_line_item(&product, quantity);
        prop_assert_eq!(item.cgst, item.sgst);
        prop_assert_eq!(item.total, item.taxable_value + item.cgst + item.sgst);
        prop_assert_eq!(item.taxable_value, product.price * Decimal::from(quantity));
    }

    /// Aggregates are the exact field-wise sums of the items.
    #[test]
    fn aggregate_is_fieldwise_sum(items in arb_items()) {
        let totals = aggregate(&items);
        let expected_grand: Decimal = items.iter().map(|i| i.total).sum();
        prop_assert_eq!(totals.grand_total, expected_grand);
        prop_assert_eq!(
            totals.grand_total,
            totals.subtotal + totals.total_cgst + totals.total_sgst
        );
    }

    /// A built bill carries its items in entry order with matching totals.
    #[test]
    fn built_bill_matches_aggregate(items in arb_items()) {
        let mut builder = BillBuilder::new("BILL-PROP", bill_date())
            .customer("Asha Verma", "9876543210");
        for item in &items {
            builder = builder.add_line(item.clone());
        }
        let bill = builder.build().unwrap();

        prop_assert_eq!(bill.items.len(), items.len());
        prop_assert_eq!(&bill.totals, &aggregate(&items));
    }

    /// Wording discards the fraction: any amount ≥ 1 words like its floor.
    #[test]
    fn words_ignore_fraction(rupees in 1u64..10_000_000u64, paise in 0u32..100u32) {
        let amount = Decimal::from(rupees) + Decimal::new(paise as i64, 2);
        prop_assert_eq!(amount_in_words(amount), amount_in_words(Decimal::from(rupees)));
    }

    /// Worded amounts never contain doubled spaces or stray padding.
    #[test]
    fn words_are_trimmed(rupees in 0u64..100_000_000_000u64) {
        let words = amount_in_words(Decimal::from(rupees));
        prop_assert_eq!(words.trim(), words.as_str());
        prop_assert!(!words.contains("  "), "doubled space in: {words:?}");
    }
}

#[cfg(feature = "render")]
mod render_props {
    use super::*;
    use bijak::render::render_bill;

    proptest! {
        /// Rendering is a pure function: identical inputs, identical output.
        #[test]
        fn render_is_deterministic(items in arb_items(), preview in any::<bool>()) {
            let mut builder = BillBuilder::new("BILL-PROP", bill_date())
                .customer("Asha Verma", "9876543210");
            for item in &items {
                builder = builder.add_line(item.clone());
            }
            let bill = builder.build().unwrap();

            for format in ["standard", "compact", "detailed", "minimal", "junk"] {
                let settings = ShopSettings {
                    bill_format: format.into(),
                    ..ShopSettings::default()
                };
                prop_assert_eq!(
                    render_bill(&bill, &settings, preview),
                    render_bill(&bill, &settings, preview)
                );
            }
        }
    }
}
