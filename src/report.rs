//! Plain-text reporting of the computed metrics

use crate::aggregate::{MonthlyAggregate, ProductAggregate, SalesSummary};

/// Format an optional mean with two decimals, `n/a` when undefined
fn format_mean(value: Option<f64>, prefix: &str) -> String {
    match value {
        Some(v) => format!("{prefix}{v:.2}"),
        None => "n/a".to_string(),
    }
}

/// The six headline metrics, one per line
pub fn format_summary(summary: &SalesSummary) -> String {
    [
        format!("Total Revenue: ${:.2}", summary.total_revenue as f64),
        format!(
            "Average Sales per Transaction: {}",
            format_mean(summary.average_sale, "$")
        ),
        format!("Total Units Sold: {}", summary.total_units),
        format!("Total Transactions: {}", summary.total_transactions),
        format!("Unique Customers: {}", summary.unique_customers),
        format!(
            "Average Transactions per Customer: {}",
            format_mean(summary.avg_transactions_per_customer, "")
        ),
    ]
    .iter()
    .map(|line| format!("{line}\n"))
    .collect()
}

/// Product totals as a text table, in the order given
pub fn format_product_table(products: &[ProductAggregate]) -> String {
    let mut out = String::from("\nBest-Selling Products:\n");
    out.push_str(&format!("{:<10} | {:>13} | {:>10}\n", "Product", "Quantity Sold", "Total Sale"));
    out.push_str(&format!("{:-<10}-|-{:->13}-|-{:->10}\n", "", "", ""));
    for p in products {
        out.push_str(&format!(
            "{:<10} | {:>13} | {:>10}\n",
            p.product.label(),
            p.quantity,
            p.total_sale
        ));
    }
    out
}

/// Monthly totals as a text table, in chronological order
pub fn format_monthly_table(monthly: &[MonthlyAggregate]) -> String {
    let mut out = String::from("\nMonthly Sales:\n");
    out.push_str(&format!("{:<7} | {:>10}\n", "Month", "Total Sale"));
    out.push_str(&format!("{:-<7}-|-{:->10}\n", "", ""));
    for m in monthly {
        out.push_str(&format!("{:<7} | {:>10}\n", m.month.to_string(), m.total_sale));
    }
    out
}

/// Print the report to stdout
pub fn print_report(summary: &SalesSummary, verbose: bool) {
    print!("{}", format_summary(summary));
    print!("{}", format_product_table(&summary.product_sales));
    if verbose {
        print!("{}", format_monthly_table(&summary.monthly_sales));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::YearMonth;
    use crate::data::Product;

    fn summary() -> SalesSummary {
        SalesSummary {
            total_revenue: 1234,
            average_sale: Some(12.346),
            total_units: 99,
            total_transactions: 100,
            product_sales: vec![
                ProductAggregate { product: Product::E, quantity: 30, total_sale: 900 },
                ProductAggregate { product: Product::A, quantity: 33, total_sale: 330 },
            ],
            monthly_sales: vec![MonthlyAggregate {
                month: YearMonth { year: 2023, month: 4 },
                total_sale: 1234,
            }],
            unique_customers: 40,
            avg_transactions_per_customer: Some(2.5),
        }
    }

    #[test]
    fn test_format_summary() {
        let text = format_summary(&summary());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Total Revenue: $1234.00",
                "Average Sales per Transaction: $12.35",
                "Total Units Sold: 99",
                "Total Transactions: 100",
                "Unique Customers: 40",
                "Average Transactions per Customer: 2.50",
            ]
        );
    }

    #[test]
    fn test_format_summary_undefined_means() {
        let mut s = summary();
        s.average_sale = None;
        s.avg_transactions_per_customer = None;

        let text = format_summary(&s);
        assert!(text.contains("Average Sales per Transaction: n/a"));
        assert!(text.contains("Average Transactions per Customer: n/a"));
    }

    #[test]
    fn test_format_product_table_keeps_order() {
        let text = format_product_table(&summary().product_sales);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "Best-Selling Products:");
        assert!(lines[2].starts_with("Product"));
        assert!(lines[4].starts_with("Product E"));
        assert!(lines[4].ends_with("900"));
        assert!(lines[5].starts_with("Product A"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_format_product_table_empty() {
        let text = format_product_table(&[]);
        assert_eq!(text.lines().count(), 4);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_format_monthly_table() {
        let text = format_monthly_table(&summary().monthly_sales);
        assert!(text.contains("Monthly Sales:"));
        assert!(text.contains("2023-04 |       1234"));
    }
}
