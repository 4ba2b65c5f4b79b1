//! Account history and admin figures shown on the dashboards.

use chrono::NaiveDate;

use inkzaar_core::{OrderId, OrderStatus, QuoteId, QuoteStatus, Rupees};

/// A past order from the account history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub id: OrderId,
    pub product: &'static str,
    pub status: OrderStatus,
    pub date: NaiveDate,
    pub price: Rupees,
}

/// A custom-work quotation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quotation {
    pub id: QuoteId,
    pub service: &'static str,
    pub status: QuoteStatus,
    pub date: NaiveDate,
    /// Amount quoted, once the request has been priced.
    pub quote: Option<Rupees>,
}

/// Headline figure on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminStat {
    pub title: &'static str,
    pub value: &'static str,
}

/// Entry in the admin activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub message: &'static str,
    pub ago: &'static str,
}

pub(super) const ADMIN_STATS: [AdminStat; 4] = [
    AdminStat {
        title: "Total Users",
        value: "1,234",
    },
    AdminStat {
        title: "Products",
        value: "156",
    },
    AdminStat {
        title: "Orders",
        value: "89",
    },
    AdminStat {
        title: "Revenue",
        value: "₹45,678",
    },
];

pub(super) const ADMIN_ACTIONS: [&str; 3] = ["Manage Products", "User Management", "View Orders"];

pub(super) const RECENT_ACTIVITY: [Activity; 3] = [
    Activity {
        message: "New order received",
        ago: "2m ago",
    },
    Activity {
        message: "User registered",
        ago: "5m ago",
    },
    Activity {
        message: "Product updated",
        ago: "10m ago",
    },
];

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

pub(super) fn seed_orders() -> Vec<OrderRecord> {
    [
        ("1", "Business Cards", OrderStatus::Delivered, date(2024, 1, 15), 299),
        ("2", "Banner Printing", OrderStatus::InProgress, date(2024, 1, 20), 1499),
        ("3", "Brochure Design", OrderStatus::Pending, date(2024, 1, 22), 799),
    ]
    .into_iter()
    .filter_map(|(id, product, status, date, price)| {
        Some(OrderRecord {
            id: OrderId::new(id),
            product,
            status,
            date: date?,
            price: Rupees::new(price),
        })
    })
    .collect()
}

pub(super) fn seed_quotations() -> Vec<Quotation> {
    [
        ("1", "Custom Hoarding", QuoteStatus::Quoted, date(2024, 1, 18), Some(15_000)),
        ("2", "T-shirt Printing", QuoteStatus::Pending, date(2024, 1, 21), None),
    ]
    .into_iter()
    .filter_map(|(id, service, status, date, quote)| {
        Some(Quotation {
            id: QuoteId::new(id),
            service,
            status,
            date: date?,
            quote: quote.map(Rupees::new),
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_fixtures_load() {
        let orders = seed_orders();
        assert_eq!(orders.len(), 3);
        assert_eq!(
            orders.iter().map(|o| o.status).collect::<Vec<_>>(),
            vec![
                OrderStatus::Delivered,
                OrderStatus::InProgress,
                OrderStatus::Pending
            ]
        );

        let quotes = seed_quotations();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes.first().and_then(|q| q.quote), Some(Rupees::new(15_000)));
        assert_eq!(quotes.last().and_then(|q| q.quote), None);
    }
}
