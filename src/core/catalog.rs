use rust_decimal_macros::dec;

use super::types::Product;

/// Seed catalog from the demo deployment — ten consumer-electronics
/// products, all at the 18% GST slab. Real installations load their
/// catalog from the external store; this exists for demos and tests.
pub fn demo_catalog() -> Vec<Product> {
    let entries = [
        ("1", "Samsung Galaxy S24", "8517", dec!(75000), "Mobile Phone"),
        ("2", "iPhone 15 Pro", "8517", dec!(125000), "Mobile Phone"),
        ("3", "Dell Inspiron Laptop", "8471", dec!(55000), "Laptop"),
        ("4", "HP Pavilion Laptop", "8471", dec!(45000), "Laptop"),
        ("5", "Sony 55\" LED TV", "8528", dec!(65000), "Television"),
        ("6", "LG Refrigerator 190L", "8418", dec!(25000), "Appliance"),
        ("7", "Samsung Washing Machine", "8450", dec!(35000), "Appliance"),
        ("8", "Apple iPad Pro", "8471", dec!(85000), "Tablet"),
        ("9", "JBL Bluetooth Speaker", "8518", dec!(5000), "Audio"),
        ("10", "Canon DSLR Camera", "9006", dec!(45000), "Camera"),
    ];

    entries
        .into_iter()
        .map(|(id, name, hsn_code, price, category)| Product {
            id: id.into(),
            name: name.into(),
            hsn_code: hsn_code.into(),
            gst_rate: dec!(18),
            price,
            category: category.into(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_shape() {
        let products = demo_catalog();
        assert_eq!(products.len(), 10);
        assert!(products.iter().all(|p| p.gst_rate == dec!(18)));
        assert!(products.iter().all(|p| !p.hsn_code.is_empty()));
    }
}
