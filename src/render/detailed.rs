//! Detailed layout: superset of the standard document — category subtext
//! per item, an explicit (always-zero) discount column, a
//! terms-and-conditions block, and a larger payment QR.

use crate::core::{Bill, ShopSettings, amount_in_words};

use super::html::{date_indian, document, esc, half_rate, inr, money, time_indian};
use super::upi;

const QR_SIZE: u32 = 180;

const STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 0; padding: 15px; font-size: 12px; }
.invoice { max-width: 900px; margin: 0 auto; border: 3px solid #000; }
.header { text-align: center; padding: 15px; border-bottom: 2px solid #000; background: #f9f9f9; }
.company-name { font-size: 22px; font-weight: bold; color: #2c3e50; }
.section { padding: 10px; border-bottom: 1px solid #ccc; }
table { width: 100%; border-collapse: collapse; margin: 10px 0; }
th, td { border: 1px solid #000; padding: 10px; }
th { background-color: #34495e; color: white; }
.summary { background: #ecf0f1; padding: 15px; }
.terms { font-size: 10px; margin-top: 10px; }
";

pub(crate) fn render(bill: &Bill, settings: &ShopSettings, _preview: bool) -> String {
    let mut body = String::new();

    body.push_str("<div class=\"invoice\">\n<div class=\"header\">\n");
    if settings.show_logo_on_bill {
        if let Some(logo) = settings.logo.as_deref().filter(|v| !v.is_empty()) {
            body.push_str(&format!(
                "<img src=\"{}\" style=\"max-height: 80px; margin-bottom: 10px;\" alt=\"Logo\">\n",
                esc(logo)
            ));
        }
    }
    body.push_str(&format!(
        "<div class=\"company-name\">{}</div>\n\
         <div style=\"margin: 10px 0;\">{}</div>\n\
         <div>Phone: {} | Email: {}</div>\n\
         <div style=\"font-weight: bold; margin-top: 10px;\">GSTIN: {}</div>\n\
         <div style=\"font-size: 18px; font-weight: bold; margin-top: 10px; color: #e74c3c;\">DETAILED TAX INVOICE</div>\n</div>\n",
        esc(&settings.shop_name),
        esc(&settings.address),
        esc(&settings.phone),
        esc(&settings.email),
        esc(&settings.gstin)
    ));

    body.push_str(&format!(
        "<div class=\"section\">\n<div style=\"display: flex; justify-content: space-between;\">\n\
         <div><strong>Bill To:</strong><br>{}<br>Phone: {}</div>\n\
         <div style=\"text-align: right;\"><strong>Invoice Details:</strong><br>\
         Invoice No: {}<br>Date: {}<br>Time: {}</div>\n</div>\n</div>\n",
        esc(&bill.customer_name),
        esc(&bill.customer_phone),
        esc(&bill.id),
        date_indian(bill.date),
        time_indian(bill.date)
    ));

    body.push_str(
        "<table>\n<thead>\n<tr><th>S.No</th><th>Product Description</th><th>HSN/SAC</th>\
         <th>Qty</th><th>Unit Price</th><th>Discount</th><th>Taxable Value</th>\
         <th>CGST Rate</th><th>CGST Amount</th><th>SGST Rate</th><th>SGST Amount</th>\
         <th>Total Amount</th></tr>\n</thead>\n<tbody>\n",
    );
    for (index, item) in bill.items.iter().enumerate() {
        let rate = half_rate(item.product.gst_rate);
        body.push_str(&format!(
            "<tr><td style=\"text-align: center;\">{}</td>\
             <td>{}<br><small>{}</small></td>\
             <td style=\"text-align: center;\">{}</td><td style=\"text-align: center;\">{}</td>\
             <td style=\"text-align: right;\">₹{}</td><td style=\"text-align: right;\">₹0.00</td>\
             <td style=\"text-align: right;\">₹{}</td>\
             <td style=\"text-align: center;\">{rate}%</td><td style=\"text-align: right;\">₹{}</td>\
             <td style=\"text-align: center;\">{rate}%</td><td style=\"text-align: right;\">₹{}</td>\
             <td style=\"text-align: right;\">₹{}</td></tr>\n",
            index + 1,
            esc(&item.product.name),
            esc(&item.product.category),
            esc(&item.product.hsn_code),
            item.quantity,
            inr(item.product.price),
            money(item.taxable_value),
            money(item.cgst),
            money(item.sgst),
            money(item.total)
        ));
    }
    body.push_str(&format!(
        "</tbody>\n<tfoot>\n<tr style=\"background: #34495e; color: white; font-weight: bold;\">\
         <td colspan=\"6\" style=\"text-align: right;\">TOTAL</td>\
         <td style=\"text-align: right;\">₹{}</td><td></td>\
         <td style=\"text-align: right;\">₹{}</td><td></td>\
         <td style=\"text-align: right;\">₹{}</td>\
         <td style=\"text-align: right;\">₹{}</td></tr>\n</tfoot>\n</table>\n",
        money(bill.totals.subtotal),
        money(bill.totals.total_cgst),
        money(bill.totals.total_sgst),
        money(bill.totals.grand_total)
    ));

    body.push_str("<div class=\"summary\">\n");
    body.push_str(
        "<div style=\"display: flex; justify-content: space-between; align-items: center;\">\n",
    );
    body.push_str(&format!(
        "<div><strong>Amount in Words:</strong><br>{} Rupees Only</div>\n",
        amount_in_words(bill.totals.grand_total)
    ));
    if settings.show_upi_on_bill {
        if let Some(uri) = upi::payment_uri(bill, settings) {
            body.push_str(&format!(
                "<div style=\"text-align: center;\">\n<div><strong>Scan &amp; Pay</strong></div>\n\
                 <img src=\"{}\" alt=\"UPI QR Code\" style=\"margin: 10px;\">\n\
                 <div style=\"font-size: 10px;\">{}</div>\n</div>\n",
                upi::qr_image_url(&uri, QR_SIZE),
                esc(&settings.upi_id)
            ));
        }
    }
    body.push_str("</div>\n");

    body.push_str(
        "<div class=\"terms\">\n<strong>Terms &amp; Conditions:</strong><br>\n\
         1. Goods once sold will not be taken back.<br>\n\
         2. All disputes are subject to local jurisdiction.<br>\n\
         3. Payment due within 30 days of invoice date.\n</div>\n",
    );

    body.push_str(&format!(
        "<div style=\"text-align: right; margin-top: 30px;\">\n<div>For {}</div>\n\
         <div style=\"margin-top: 50px; border-top: 1px solid #000; padding-top: 5px; width: 200px; margin-left: auto;\">\
         Authorized Signatory</div>\n</div>\n</div>\n</div>\n",
        esc(&settings.shop_name)
    ));

    document(&format!("Detailed Tax Invoice - {}", bill.id), STYLE, &body)
}
