//! Chart rendering using Plotters

use crate::aggregate::{MonthlyAggregate, ProductAggregate, SalesSummary};
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File name of the monthly trend chart inside the output directory
pub const MONTHLY_CHART_FILE: &str = "monthly_sales_trend.png";
/// File name of the top products chart inside the output directory
pub const PRODUCTS_CHART_FILE: &str = "top_selling_products.png";

const LINE_COLOR: RGBColor = BLUE;
const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Upper bound of the value axis, leaving headroom above the tallest point
fn value_axis_max(max_value: u64) -> f64 {
    if max_value == 0 {
        1.0
    } else {
        max_value as f64 * 1.1
    }
}

/// Map a numeric x position back to its category label
fn category_label(x: f64, labels: &[String]) -> String {
    let rounded = x.round();
    if rounded < 0.0 || (x - rounded).abs() > 1e-6 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

/// Draw monthly revenue as a line with a marker per month
///
/// # Arguments
/// * `monthly` - Monthly totals in chronological order
/// * `output_path` - Path to save the PNG plot
///
/// # Returns
/// * Result indicating success, or an error for empty input or a drawing failure
pub fn create_monthly_trend_chart(monthly: &[MonthlyAggregate], output_path: &Path) -> crate::Result<()> {
    if monthly.is_empty() {
        anyhow::bail!("No monthly sales to plot");
    }

    let labels: Vec<String> = monthly.iter().map(|m| m.month.to_string()).collect();
    let max_total = monthly.iter().map(|m| m.total_sale).max().unwrap_or(0);
    let x_max = monthly.len() as f64 - 0.5;

    let root = BitMapBackend::new(output_path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Monthly Sales Trend", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(80)
        .y_label_area_size(80)
        .build_cartesian_2d(-0.5f64..x_max, 0f64..value_axis_max(max_total))?;

    chart
        .configure_mesh()
        .x_labels(monthly.len())
        .x_label_formatter(&|x| category_label(*x, &labels))
        .x_label_style(("sans-serif", 12).into_font().transform(FontTransform::Rotate90))
        .x_desc("Month")
        .y_desc("Total Sales ($)")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    let points: Vec<(f64, f64)> = monthly
        .iter()
        .enumerate()
        .map(|(i, m)| (i as f64, m.total_sale as f64))
        .collect();

    chart.draw_series(LineSeries::new(points.iter().copied(), &LINE_COLOR))?;
    chart.draw_series(
        points
            .iter()
            .map(|&point| Circle::new(point, 5, LINE_COLOR.filled())),
    )?;

    root.present()?;
    info!("Monthly trend chart saved to: {}", output_path.display());

    Ok(())
}

/// Draw per-product revenue as bars, in the order given
///
/// # Arguments
/// * `products` - Product totals, highest revenue first
/// * `output_path` - Path to save the PNG plot
pub fn create_top_products_chart(products: &[ProductAggregate], output_path: &Path) -> crate::Result<()> {
    if products.is_empty() {
        anyhow::bail!("No product sales to plot");
    }

    let labels: Vec<String> = products.iter().map(|p| p.product.to_string()).collect();
    let max_total = products.iter().map(|p| p.total_sale).max().unwrap_or(0);
    let x_max = products.len() as f64 - 0.5;

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Top-Selling Products", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(-0.5f64..x_max, 0f64..value_axis_max(max_total))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(products.len())
        .x_label_formatter(&|x| category_label(*x, &labels))
        .x_desc("Product")
        .y_desc("Total Sales ($)")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    chart.draw_series(products.iter().enumerate().map(|(i, p)| {
        let x = i as f64;
        Rectangle::new([(x - 0.4, 0.0), (x + 0.4, p.total_sale as f64)], BAR_COLOR.filled())
    }))?;

    root.present()?;
    info!("Top products chart saved to: {}", output_path.display());

    Ok(())
}

/// Render both charts into `output_dir`, returning the files written
///
/// A chart whose aggregate is empty is skipped.
pub fn generate_charts(summary: &SalesSummary, output_dir: &Path) -> crate::Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;
    let mut written = Vec::with_capacity(2);

    if summary.monthly_sales.is_empty() {
        warn!("No monthly sales, skipping monthly trend chart");
    } else {
        let path = output_dir.join(MONTHLY_CHART_FILE);
        create_monthly_trend_chart(&summary.monthly_sales, &path)?;
        written.push(path);
    }

    if summary.product_sales.is_empty() {
        warn!("No product sales, skipping top products chart");
    } else {
        let path = output_dir.join(PRODUCTS_CHART_FILE);
        create_top_products_chart(&summary.product_sales, &path)?;
        written.push(path);
    }

    Ok(written)
}
