use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::{BillItem, BillTotals, Product};

/// Compute a fully tax-resolved line item for one cart selection.
///
/// Precondition (caller-enforced, not checked here): `quantity >= 1`. The
/// cart/UI layer rejects zero quantities before a line is ever computed.
///
/// The GST amount is split into equal CGST and SGST halves — the engine
/// models intra-state supply only; there is no IGST branch. No currency
/// rounding happens here: rounding is a display concern of the renderer.
pub fn compute_line_item(product: &Product, quantity: u32) -> BillItem {
    let taxable_value = product.price * Decimal::from(quantity);
    let gst_amount = taxable_value * product.gst_rate / dec!(100);
    let cgst = gst_amount / dec!(2);
    let sgst = cgst;
    let total = taxable_value + cgst + sgst;

    BillItem {
        product: product.clone(),
        quantity,
        taxable_value,
        cgst,
        sgst,
        total,
    }
}

/// Sum per-item figures into bill totals.
///
/// An empty slice yields all-zero totals — a legal state (an empty cart);
/// preventing finalization of an empty bill is the builder's concern, not
/// the aggregator's. Summation is order-independent, but the items
/// themselves stay in entry order for the rendered table's serial numbers.
pub fn aggregate(items: &[BillItem]) -> BillTotals {
    BillTotals {
        subtotal: items.iter().map(|i| i.taxable_value).sum(),
        total_cgst: items.iter().map(|i| i.cgst).sum(),
        total_sgst: items.iter().map(|i| i.sgst).sum(),
        grand_total: items.iter().map(|i| i.total).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        Product {
            id: "3".into(),
            name: "Dell Inspiron Laptop".into(),
            hsn_code: "8471".into(),
            gst_rate: dec!(18),
            price: dec!(55000),
            category: "Laptop".into(),
        }
    }

    #[test]
    fn line_item_splits_tax_symmetrically() {
        let item = compute_line_item(&laptop(), 2);
        assert_eq!(item.taxable_value, dec!(110000));
        assert_eq!(item.cgst, dec!(9900));
        assert_eq!(item.sgst, dec!(9900));
        assert_eq!(item.total, dec!(129800));
        assert_eq!(item.total, item.taxable_value + item.cgst + item.sgst);
    }

    #[test]
    fn zero_rate_product_has_no_tax() {
        let mut product = laptop();
        product.gst_rate = dec!(0);
        let item = compute_line_item(&product, 3);
        assert_eq!(item.cgst, dec!(0));
        assert_eq!(item.sgst, dec!(0));
        assert_eq!(item.total, item.taxable_value);
    }

    #[test]
    fn fractional_price_keeps_full_precision() {
        let mut product = laptop();
        product.price = dec!(19.99);
        product.gst_rate = dec!(5);
        let item = compute_line_item(&product, 1);
        // 19.99 * 5% = 0.9995, halves of 0.49975 each — no rounding yet
        assert_eq!(item.cgst, dec!(0.49975));
        assert_eq!(item.cgst, item.sgst);
        assert_eq!(item.total, dec!(20.9895));
    }

    #[test]
    fn aggregate_sums_each_field() {
        let items = vec![compute_line_item(&laptop(), 2), compute_line_item(&laptop(), 1)];
        let totals = aggregate(&items);
        assert_eq!(totals.subtotal, dec!(165000));
        assert_eq!(totals.total_cgst, dec!(14850));
        assert_eq!(totals.total_sgst, dec!(14850));
        assert_eq!(totals.grand_total, dec!(194700));
        assert_eq!(
            totals.grand_total,
            totals.subtotal + totals.total_cgst + totals.total_sgst
        );
    }

    #[test]
    fn aggregate_of_empty_cart_is_zero() {
        let totals = aggregate(&[]);
        assert_eq!(totals, BillTotals::default());
    }
}
