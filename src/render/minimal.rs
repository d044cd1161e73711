//! Minimal layout: fixed-width receipt with dashed separators. Never shows
//! a logo or payment QR, whatever the shop profile toggles say.

use crate::core::{Bill, ShopSettings};

use super::html::{date_indian, document, esc, money, plain, time_indian};

const STYLE: &str = "\
body { font-family: monospace; margin: 0; padding: 5px; font-size: 10px; }
.receipt { max-width: 300px; margin: 0 auto; }
.center { text-align: center; }
.line { border-bottom: 1px dashed #000; margin: 5px 0; }
.total { font-weight: bold; font-size: 12px; }
";

pub(crate) fn render(bill: &Bill, settings: &ShopSettings, _preview: bool) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "<div class=\"receipt\">\n<div class=\"center\">\n\
         <div style=\"font-weight: bold;\">{}</div>\n<div>{}</div>\n<div>GSTIN: {}</div>\n</div>\n\
         <div class=\"line\"></div>\n",
        esc(&settings.shop_name),
        esc(&settings.phone),
        esc(&settings.gstin)
    ));

    body.push_str(&format!(
        "<div>Bill: {}</div>\n<div>Date: {} {}</div>\n<div>Customer: {}</div>\n\
         <div class=\"line\"></div>\n",
        esc(&bill.id),
        date_indian(bill.date),
        time_indian(bill.date),
        esc(&bill.customer_name)
    ));

    for item in &bill.items {
        body.push_str(&format!(
            "<div>{}</div>\n<div>{} x ₹{} = ₹{}</div>\n",
            esc(&item.product.name),
            item.quantity,
            plain(item.product.price),
            money(item.total)
        ));
    }

    body.push_str(&format!(
        "<div class=\"line\"></div>\n\
         <div>Subtotal: ₹{}</div>\n<div>CGST: ₹{}</div>\n<div>SGST: ₹{}</div>\n\
         <div class=\"line\"></div>\n\
         <div class=\"total center\">TOTAL: ₹{}</div>\n\
         <div class=\"line\"></div>\n\
         <div class=\"center\">Thank You!</div>\n</div>\n",
        money(bill.totals.subtotal),
        money(bill.totals.total_cgst),
        money(bill.totals.total_sgst),
        money(bill.totals.grand_total)
    ));

    document(&format!("Receipt - {}", bill.id), STYLE, &body)
}
