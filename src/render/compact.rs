//! Compact layout: condensed five-column table with a single combined GST
//! percentage column. No logo, no amount-in-words.

use crate::core::{Bill, ShopSettings};

use super::html::{date_indian, document, esc, money, plain};
use super::upi;

const QR_SIZE: u32 = 120;

const STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 0; padding: 10px; font-size: 11px; }
.invoice { max-width: 600px; margin: 0 auto; border: 1px solid #000; }
.header { text-align: center; padding: 8px; border-bottom: 1px solid #000; }
.company-name { font-size: 14px; font-weight: bold; }
table { width: 100%; border-collapse: collapse; }
th, td { border: 1px solid #000; padding: 4px; font-size: 10px; }
th { background-color: #f0f0f0; }
.footer { padding: 8px; text-align: center; }
";

pub(crate) fn render(bill: &Bill, settings: &ShopSettings, _preview: bool) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "<div class=\"invoice\">\n<div class=\"header\">\n\
         <div class=\"company-name\">{}</div>\n\
         <div>Ph: {} | GSTIN: {}</div>\n\
         <div>Bill: {} | Date: {}</div>\n\
         <div>Customer: {} | Ph: {}</div>\n</div>\n",
        esc(&settings.shop_name),
        esc(&settings.phone),
        esc(&settings.gstin),
        esc(&bill.id),
        date_indian(bill.date),
        esc(&bill.customer_name),
        esc(&bill.customer_phone)
    ));

    body.push_str(
        "<table>\n<tr><th>Item</th><th>Qty</th><th>Rate</th><th>GST</th><th>Total</th></tr>\n",
    );
    for item in &bill.items {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>₹{}</td><td>{}%</td><td>₹{}</td></tr>\n",
            esc(&item.product.name),
            item.quantity,
            plain(item.product.price),
            plain(item.product.gst_rate),
            money(item.total)
        ));
    }
    body.push_str(&format!(
        "<tr style=\"font-weight: bold;\"><td colspan=\"4\">Grand Total</td><td>₹{}</td></tr>\n</table>\n",
        money(bill.totals.grand_total)
    ));

    body.push_str("<div class=\"footer\">\n");
    if settings.show_upi_on_bill {
        if let Some(uri) = upi::payment_uri(bill, settings) {
            body.push_str(&format!(
                "<img src=\"{}\" alt=\"UPI QR\">\n",
                upi::qr_image_url(&uri, QR_SIZE)
            ));
        }
    }
    body.push_str("<div>Thank you for your business!</div>\n</div>\n</div>\n");

    document(&format!("Invoice - {}", bill.id), STYLE, &body)
}
