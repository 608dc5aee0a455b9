//! Descriptive statistics over a sales table
//!
//! Every metric is a pure function of the table. Grouped views are built by
//! walking the records into ordered maps, then sorting with a stable sort.

use crate::data::{Product, SalesTable};
use chrono::Datelike;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Calendar month used as the grouping key for monthly sales
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Quantity and revenue totals for one product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductAggregate {
    pub product: Product,
    pub quantity: u64,
    pub total_sale: u64,
}

/// Revenue total for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyAggregate {
    pub month: YearMonth,
    pub total_sale: u64,
}

/// All metrics derived from a sales table
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSummary {
    pub total_revenue: u64,
    /// `None` when the table has no rows
    pub average_sale: Option<f64>,
    pub total_units: u64,
    pub total_transactions: usize,
    /// Sorted by revenue, highest first
    pub product_sales: Vec<ProductAggregate>,
    /// Sorted chronologically
    pub monthly_sales: Vec<MonthlyAggregate>,
    pub unique_customers: usize,
    /// `None` when there are no customers
    pub avg_transactions_per_customer: Option<f64>,
}

/// Compute every metric for the table in one call
pub fn summarize(table: &SalesTable) -> SalesSummary {
    SalesSummary {
        total_revenue: total_revenue(table),
        average_sale: average_sale(table),
        total_units: total_units(table),
        total_transactions: table.len(),
        product_sales: product_sales(table),
        monthly_sales: monthly_sales(table),
        unique_customers: unique_customers(table),
        avg_transactions_per_customer: avg_transactions_per_customer(table),
    }
}

pub fn total_revenue(table: &SalesTable) -> u64 {
    table.iter().map(|r| u64::from(r.total_sale())).sum()
}

/// Mean sale value per transaction
pub fn average_sale(table: &SalesTable) -> Option<f64> {
    if table.is_empty() {
        return None;
    }
    Some(total_revenue(table) as f64 / table.len() as f64)
}

pub fn total_units(table: &SalesTable) -> u64 {
    table.iter().map(|r| u64::from(r.quantity())).sum()
}

/// Per-product totals, highest revenue first
///
/// Products with equal revenue stay in label order.
pub fn product_sales(table: &SalesTable) -> Vec<ProductAggregate> {
    let mut groups: BTreeMap<Product, (u64, u64)> = BTreeMap::new();
    for record in table {
        let entry = groups.entry(record.product()).or_default();
        entry.0 += u64::from(record.quantity());
        entry.1 += u64::from(record.total_sale());
    }

    let mut aggregates: Vec<ProductAggregate> = groups
        .into_iter()
        .map(|(product, (quantity, total_sale))| ProductAggregate {
            product,
            quantity,
            total_sale,
        })
        .collect();

    // sort_by is stable
    aggregates.sort_by(|a, b| b.total_sale.cmp(&a.total_sale));
    aggregates
}

/// Per-month revenue in chronological order
pub fn monthly_sales(table: &SalesTable) -> Vec<MonthlyAggregate> {
    let mut groups: BTreeMap<YearMonth, u64> = BTreeMap::new();
    for record in table {
        *groups.entry(YearMonth::of(&record.date())).or_default() += u64::from(record.total_sale());
    }

    groups
        .into_iter()
        .map(|(month, total_sale)| MonthlyAggregate { month, total_sale })
        .collect()
}

pub fn unique_customers(table: &SalesTable) -> usize {
    table
        .iter()
        .map(|r| r.customer_id())
        .collect::<HashSet<_>>()
        .len()
}

/// Mean number of transactions per distinct customer
pub fn avg_transactions_per_customer(table: &SalesTable) -> Option<f64> {
    let customers = unique_customers(table);
    if customers == 0 {
        return None;
    }
    Some(table.len() as f64 / customers as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SalesRecord;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn sample_table() -> SalesTable {
        SalesTable::from_records(vec![
            SalesRecord::new(at(2023, 1, 5), Product::A, 3, 100).unwrap(),
            SalesRecord::new(at(2023, 1, 20), Product::E, 1, 101).unwrap(),
            SalesRecord::new(at(2023, 2, 1), Product::B, 2, 100).unwrap(),
            SalesRecord::new(at(2023, 3, 15), Product::A, 3, 102).unwrap(),
            SalesRecord::new(at(2023, 3, 16), Product::C, 4, 100).unwrap(),
        ])
    }

    #[test]
    fn test_scalar_metrics() {
        let summary = summarize(&sample_table());

        // 30 + 30 + 30 + 30 + 80
        assert_eq!(summary.total_revenue, 200);
        assert_eq!(summary.total_units, 13);
        assert_eq!(summary.total_transactions, 5);
        assert_eq!(summary.unique_customers, 3);
        assert_eq!(summary.average_sale, Some(40.0));

        let per_customer = summary.avg_transactions_per_customer.unwrap();
        assert!((per_customer - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_product_sales_sorted_with_stable_ties() {
        let products = product_sales(&sample_table());

        assert_eq!(
            products,
            vec![
                ProductAggregate { product: Product::C, quantity: 4, total_sale: 80 },
                ProductAggregate { product: Product::A, quantity: 6, total_sale: 60 },
                ProductAggregate { product: Product::B, quantity: 2, total_sale: 30 },
                ProductAggregate { product: Product::E, quantity: 1, total_sale: 30 },
            ]
        );
    }

    #[test]
    fn test_monthly_sales_chronological() {
        let months = monthly_sales(&sample_table());
        let keys: Vec<String> = months.iter().map(|m| m.month.to_string()).collect();
        let totals: Vec<u64> = months.iter().map(|m| m.total_sale).collect();

        assert_eq!(keys, vec!["2023-01", "2023-02", "2023-03"]);
        assert_eq!(totals, vec![60, 30, 110]);
    }

    #[test]
    fn test_months_order_across_years() {
        let table = SalesTable::from_records(vec![
            SalesRecord::new(at(2024, 1, 1), Product::A, 1, 100).unwrap(),
            SalesRecord::new(at(2023, 12, 31), Product::A, 1, 100).unwrap(),
        ]);
        let keys: Vec<YearMonth> = monthly_sales(&table).iter().map(|m| m.month).collect();
        assert_eq!(
            keys,
            vec![YearMonth { year: 2023, month: 12 }, YearMonth { year: 2024, month: 1 }]
        );
    }

    #[test]
    fn test_single_product_table() {
        let records = (0..1000)
            .map(|i| SalesRecord::new(at(2023, 1, 1), Product::A, 1, 100 + (i % 100)).unwrap())
            .collect();
        let products = product_sales(&SalesTable::from_records(records));

        assert_eq!(
            products,
            vec![ProductAggregate { product: Product::A, quantity: 1000, total_sale: 10_000 }]
        );
    }

    #[test]
    fn test_empty_table() {
        let summary = summarize(&SalesTable::default());

        assert_eq!(summary.total_revenue, 0);
        assert_eq!(summary.average_sale, None);
        assert_eq!(summary.total_units, 0);
        assert_eq!(summary.total_transactions, 0);
        assert_eq!(summary.unique_customers, 0);
        assert_eq!(summary.avg_transactions_per_customer, None);
        assert!(summary.product_sales.is_empty());
        assert!(summary.monthly_sales.is_empty());
    }
}
