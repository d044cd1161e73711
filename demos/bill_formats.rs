use chrono::NaiveDate;

use bijak::core::*;
use bijak::render::render_bill;

fn main() {
    let catalog = demo_catalog();

    let date = NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap();

    let bill = BillBuilder::new(preview_bill_id(1718445600000), date)
        .customer("Ravi Kumar", "9812345678")
        .add_item(&catalog[0], 1)
        .add_item(&catalog[8], 2)
        .build()
        .expect("bill should be valid");

    let mut settings = ShopSettings::default();

    for format in ["standard", "compact", "detailed", "minimal"] {
        settings.bill_format = format.into();
        let html = render_bill(&bill, &settings, true);
        let path = format!("bill_{format}.html");
        std::fs::write(&path, &html).expect("write demo output");
        println!("{path}: {} bytes", html.len());
    }
}
