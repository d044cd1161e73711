use chrono::NaiveDate;

use bijak::core::*;

fn main() {
    let catalog = demo_catalog();
    let laptop = &catalog[2];
    let speaker = &catalog[8];

    let date = NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap();

    let bill = BillBuilder::new(bill_id(1718445600000), date)
        .customer("Asha Verma", "9876543210")
        .add_item(laptop, 2)
        .add_item(speaker, 1)
        .build()
        .expect("bill should be valid");

    println!("Bill:     {}", bill.id);
    println!("Date:     {}", bill.date);
    println!("Customer: {} ({})", bill.customer_name, bill.customer_phone);
    println!("---");
    for (i, item) in bill.items.iter().enumerate() {
        println!(
            "  {}. {} x {} @ {} = {}",
            i + 1,
            item.quantity,
            item.product.name,
            item.product.price,
            item.total
        );
    }
    println!("---");
    println!("Subtotal: {}", bill.totals.subtotal);
    println!("CGST:     {}", bill.totals.total_cgst);
    println!("SGST:     {}", bill.totals.total_sgst);
    println!("Total:    {}", bill.totals.grand_total);
    println!(
        "In words: {} Rupees Only",
        amount_in_words(bill.totals.grand_total)
    );
}
