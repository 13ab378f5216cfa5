//! Text rendering for amounts and the inventory table.

use stockkeep_core::Entity;
use stockkeep_inventory::{Listing, Product};

const COLUMN_PADDING: usize = 2;
const SEPARATOR_SLACK: usize = 5;

/// `symbol` + amount rounded to cents with thousands separators, e.g. `$1,234.50`.
pub fn format_currency(symbol: &str, amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{symbol}{grouped}.{cents}")
}

/// The listing as shown by the "Product List" menu entry.
pub fn render_listing(listing: Listing<'_>, currency: &str) -> String {
    match listing {
        Listing::Empty => "❌ Inventory is empty.\n".to_string(),
        Listing::Products(products) => inventory_table(products, currency),
    }
}

struct Row {
    id: String,
    name: String,
    quantity: String,
    price: String,
}

fn column_width(header: &str, cells: impl Iterator<Item = usize>) -> usize {
    cells.fold(header.chars().count(), usize::max) + COLUMN_PADDING
}

/// Column widths fit the longest cell; the price column is right-aligned.
pub fn inventory_table(products: &[Product], currency: &str) -> String {
    let rows: Vec<Row> = products
        .iter()
        .map(|p| Row {
            id: p.id().to_string(),
            name: p.name().to_string(),
            quantity: p.quantity().to_string(),
            price: format_currency(currency, p.price().get()),
        })
        .collect();

    let id_w = column_width("ID", rows.iter().map(|r| r.id.chars().count()));
    let name_w = column_width("Name", rows.iter().map(|r| r.name.chars().count()));
    let qty_w = column_width("Quantity", rows.iter().map(|r| r.quantity.chars().count()));
    let price_w = column_width("Price", rows.iter().map(|r| r.price.chars().count()));
    let rule = "-".repeat(id_w + name_w + qty_w + price_w + SEPARATOR_SLACK);

    let mut out = String::new();
    out.push_str("\n📦 Inventory List:\n");
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "{:<id_w$}{:<name_w$}{:<qty_w$}{:>price_w$}\n",
        "ID", "Name", "Quantity", "Price"
    ));
    out.push_str(&rule);
    out.push('\n');
    for row in &rows {
        out.push_str(&format!(
            "{:<id_w$}{:<name_w$}{:<qty_w$}{:>price_w$}\n",
            row.id, row.name, row.quantity, row.price
        ));
    }
    out.push_str(&rule);
    out.push('\n');
    out
}
