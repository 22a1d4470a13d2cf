//! The seeded playground dataset.
//!
//! A small e-commerce database (customers, orders, shipping) plus the
//! example queries offered in the editor sidebar. This is what a fresh
//! session shows before the user uploads anything.

use crate::data::{Table, TableStore};
use crate::types::{DataCell, DataColumn, DataRow, DataType};
use chrono::NaiveDate;

/// A predefined example query shown in the sidebar.
#[derive(Clone, Copy, Debug)]
pub struct DemoQuery {
    pub name: &'static str,
    pub sql: &'static str,
}

pub const PREDEFINED_QUERIES: &[DemoQuery] = &[
    DemoQuery {
        name: "Top 5 Customers by Total Purchases",
        sql: "SELECT first_name, last_name, total_purchases \
              FROM customers ORDER BY total_purchases DESC LIMIT 5;",
    },
    DemoQuery {
        name: "Monthly Order Analysis",
        sql: "SELECT EXTRACT(MONTH FROM order_date) AS month, COUNT(*) AS total_orders, \
              SUM(total_amount) AS total_revenue \
              FROM orders GROUP BY month ORDER BY month;",
    },
    DemoQuery {
        name: "Shipping Carrier Performance",
        sql: "SELECT carrier, COUNT(*) AS total_shipments \
              FROM shipping GROUP BY carrier ORDER BY total_shipments DESC;",
    },
];

/// Build the demo store: three related tables, five rows each.
pub fn demo_store() -> TableStore {
    let mut store = TableStore::new();
    store.put_table(customers());
    store.put_table(orders());
    store.put_table(shipping());
    store
}

fn customers() -> Table {
    Table {
        name: "customers".to_string(),
        columns: vec![
            DataColumn::new("customer_id", DataType::Integer).primary(),
            DataColumn::new("first_name", DataType::Text),
            DataColumn::new("last_name", DataType::Text),
            DataColumn::new("email", DataType::Text),
            DataColumn::new("registration_date", DataType::Date),
            DataColumn::new("total_purchases", DataType::Decimal),
        ],
        rows: vec![
            customer(1, "John", "Doe", "john.doe@example.com", (2021, 1, 1), 150.50),
            customer(2, "Jane", "Smith", "jane.smith@example.com", (2021, 2, 15), 200.00),
            customer(3, "Alice", "Johnson", "alice.johnson@example.com", (2021, 3, 10), 300.75),
            customer(4, "Bob", "Brown", "bob.brown@example.com", (2021, 4, 20), 120.00),
            customer(5, "Charlie", "Davis", "charlie.davis@example.com", (2021, 5, 5), 180.25),
        ],
    }
}

fn orders() -> Table {
    Table {
        name: "orders".to_string(),
        columns: vec![
            DataColumn::new("order_id", DataType::Integer).primary(),
            DataColumn::new("customer_id", DataType::Integer),
            DataColumn::new("order_date", DataType::Date),
            DataColumn::new("total_amount", DataType::Decimal),
            DataColumn::new("status", DataType::Text),
        ],
        rows: vec![
            order(1, 1, (2021, 6, 1), 100.00, "Shipped"),
            order(2, 2, (2021, 6, 5), 150.00, "Delivered"),
            order(3, 3, (2021, 6, 10), 200.00, "Processing"),
            order(4, 4, (2021, 6, 15), 250.00, "Cancelled"),
            order(5, 5, (2021, 6, 20), 300.00, "Shipped"),
        ],
    }
}

fn shipping() -> Table {
    Table {
        name: "shipping".to_string(),
        columns: vec![
            DataColumn::new("shipping_id", DataType::Integer).primary(),
            DataColumn::new("order_id", DataType::Integer),
            DataColumn::new("shipping_date", DataType::Date),
            DataColumn::new("carrier", DataType::Text),
            DataColumn::new("tracking_number", DataType::Text),
            DataColumn::new("delivery_status", DataType::Text),
        ],
        rows: vec![
            shipment(1, 1, (2021, 6, 2), "UPS", "1Z999AA10123456784", "In Transit"),
            shipment(2, 2, (2021, 6, 6), "FedEx", "123456789012", "Delivered"),
            shipment(3, 3, (2021, 6, 11), "DHL", "JD014600003828000000", "Pending"),
            shipment(4, 4, (2021, 6, 16), "USPS", "9400111899560000000000", "Cancelled"),
            shipment(5, 5, (2021, 6, 21), "UPS", "1Z999AA10123456785", "In Transit"),
        ],
    }
}

fn customer(
    id: i64,
    first: &str,
    last: &str,
    email: &str,
    registered: (i32, u32, u32),
    purchases: f64,
) -> DataRow {
    DataRow::new(vec![
        DataCell::Integer(id),
        DataCell::Text(first.to_string()),
        DataCell::Text(last.to_string()),
        DataCell::Text(email.to_string()),
        date(registered),
        DataCell::Decimal(purchases),
    ])
}

fn order(id: i64, customer_id: i64, placed: (i32, u32, u32), amount: f64, status: &str) -> DataRow {
    DataRow::new(vec![
        DataCell::Integer(id),
        DataCell::Integer(customer_id),
        date(placed),
        DataCell::Decimal(amount),
        DataCell::Text(status.to_string()),
    ])
}

fn shipment(
    id: i64,
    order_id: i64,
    shipped: (i32, u32, u32),
    carrier: &str,
    tracking: &str,
    status: &str,
) -> DataRow {
    DataRow::new(vec![
        DataCell::Integer(id),
        DataCell::Integer(order_id),
        date(shipped),
        DataCell::Text(carrier.to_string()),
        DataCell::Text(tracking.to_string()),
        DataCell::Text(status.to_string()),
    ])
}

fn date((year, month, day): (i32, u32, u32)) -> DataCell {
    // All demo dates are literal and valid; the fallback never fires
    DataCell::Date(NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default())
}
