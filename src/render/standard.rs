//! Standard layout: full tax-invoice document with the statutory 11-column
//! item table, amount-in-words line, and signatory block.

use crate::core::{Bill, ShopSettings, amount_in_words};

use super::html::{date_indian, document, esc, half_rate, inr, money, time_indian};
use super::upi;

const QR_SIZE: u32 = 150;

const STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 0; padding: 20px; font-size: 12px; }
.invoice { max-width: 800px; margin: 0 auto; border: 2px solid #000; }
.header { text-align: center; padding: 10px; border-bottom: 2px solid #000; }
.company-name { font-size: 18px; font-weight: bold; margin-bottom: 5px; }
.company-details { font-size: 11px; line-height: 1.4; }
.invoice-title { font-size: 16px; font-weight: bold; margin: 10px 0; }
.details-section { display: flex; border-bottom: 1px solid #000; }
.left-details, .right-details { flex: 1; padding: 10px; }
.right-details { border-left: 1px solid #000; }
table { width: 100%; border-collapse: collapse; }
th, td { border: 1px solid #000; padding: 8px; text-align: left; font-size: 11px; }
th { background-color: #f0f0f0; font-weight: bold; text-align: center; }
.amount { text-align: right; }
.total-section { background-color: #f9f9f9; }
.footer { padding: 10px; border-top: 1px solid #000; }
.upi-section { text-align: center; margin-top: 10px; }
.logo { max-height: 60px; margin-bottom: 10px; }
@media print { body { margin: 0; } }
";

pub(crate) fn render(bill: &Bill, settings: &ShopSettings, preview: bool) -> String {
    let mut body = String::new();

    body.push_str("<div class=\"invoice\">\n<div class=\"header\">\n");
    if settings.show_logo_on_bill {
        if let Some(logo) = settings.logo.as_deref().filter(|v| !v.is_empty()) {
            body.push_str(&format!(
                "<img src=\"{}\" class=\"logo\" alt=\"Logo\">\n",
                esc(logo)
            ));
        }
    }
    body.push_str(&format!(
        "<div class=\"company-name\">{}</div>\n\
         <div class=\"company-details\">GSTIN: {}<br>{}<br>Phone: {} | Email: {}</div>\n\
         <div class=\"invoice-title\">TAX INVOICE</div>\n</div>\n",
        esc(&settings.shop_name),
        esc(&settings.gstin),
        esc(&settings.address),
        esc(&settings.phone),
        esc(&settings.email)
    ));

    body.push_str(&format!(
        "<div class=\"details-section\">\n\
         <div class=\"left-details\"><strong>Bill To:</strong><br>{}<br>Phone: {}</div>\n\
         <div class=\"right-details\"><strong>Invoice No:</strong> {}<br>\
         <strong>Date:</strong> {}<br><strong>Time:</strong> {}</div>\n</div>\n",
        esc(&bill.customer_name),
        esc(&bill.customer_phone),
        esc(&bill.id),
        date_indian(bill.date),
        time_indian(bill.date)
    ));

    body.push_str(
        "<table>\n<thead>\n<tr><th>S.No</th><th>Description</th><th>HSN Code</th><th>Qty</th>\
         <th>Rate</th><th>Taxable Value</th><th>CGST %</th><th>CGST ₹</th><th>SGST %</th>\
         <th>SGST ₹</th><th>Amount ₹</th></tr>\n</thead>\n<tbody>\n",
    );
    for (index, item) in bill.items.iter().enumerate() {
        let rate = half_rate(item.product.gst_rate);
        body.push_str(&format!(
            "<tr><td style=\"text-align: center;\">{}</td><td>{}</td>\
             <td style=\"text-align: center;\">{}</td><td style=\"text-align: center;\">{}</td>\
             <td class=\"amount\">₹{}</td><td class=\"amount\">₹{}</td>\
             <td style=\"text-align: center;\">{rate}%</td><td class=\"amount\">₹{}</td>\
             <td style=\"text-align: center;\">{rate}%</td><td class=\"amount\">₹{}</td>\
             <td class=\"amount\">₹{}</td></tr>\n",
            index + 1,
            esc(&item.product.name),
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
        "<tr class=\"total-section\">\
         <td colspan=\"5\" style=\"text-align: right; font-weight: bold;\">Total</td>\
         <td class=\"amount\"><strong>₹{}</strong></td><td></td>\
         <td class=\"amount\"><strong>₹{}</strong></td><td></td>\
         <td class=\"amount\"><strong>₹{}</strong></td>\
         <td class=\"amount\"><strong>₹{}</strong></td></tr>\n</tbody>\n</table>\n",
        money(bill.totals.subtotal),
        money(bill.totals.total_cgst),
        money(bill.totals.total_sgst),
        money(bill.totals.grand_total)
    ));

    body.push_str("<div class=\"footer\">\n");
    body.push_str(
        "<div style=\"display: flex; justify-content: space-between; align-items: center;\">\n",
    );
    body.push_str(&format!(
        "<div><strong>Amount in Words:</strong> {} Rupees Only</div>\n",
        amount_in_words(bill.totals.grand_total)
    ));
    if settings.show_upi_on_bill {
        if let Some(uri) = upi::payment_uri(bill, settings) {
            body.push_str(&format!(
                "<div class=\"upi-section\">\n<div><strong>Pay via UPI</strong></div>\n\
                 <img src=\"{}\" alt=\"UPI QR Code\" style=\"margin-top: 5px; border: 1px solid #ddd; padding: 5px;\">\n\
                 <div style=\"font-size: 10px; margin-top: 5px;\">{}</div>\n</div>\n",
                upi::qr_image_url(&uri, QR_SIZE),
                esc(&settings.upi_id)
            ));
        }
    }
    body.push_str("</div>\n");
    if preview {
        body.push_str(
            "<div style=\"text-align: center; margin-top: 20px; padding: 10px; background: #f0f0f0; border-radius: 5px;\">\
             <strong>PREVIEW MODE</strong> - This is a preview of your bill</div>\n",
        );
    }
    body.push_str(&format!(
        "<div style=\"text-align: right; margin-top: 20px;\">\n<div>For {}</div>\n\
         <div style=\"margin-top: 40px; border-top: 1px solid #000; padding-top: 5px; width: 200px; margin-left: auto;\">\
         Authorized Signatory</div>\n</div>\n",
        esc(&settings.shop_name)
    ));
    body.push_str("</div>\n</div>\n");

    document(&format!("Tax Invoice - {}", bill.id), STYLE, &body)
}
