//! Synthetic sales table generation

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Number of transactions produced by the generator
pub const TRANSACTION_COUNT: usize = 1000;

/// Lowest customer identifier handed out by the generator
pub const MIN_CUSTOMER_ID: u32 = 100;
/// Highest customer identifier handed out by the generator
pub const MAX_CUSTOMER_ID: u32 = 199;

/// Quantity bounds for a single transaction (inclusive)
pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 9;

/// Errors raised while configuring the generator or building records
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("start date {start} is after end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("quantity {0} is outside 1..=9")]
    QuantityOutOfRange(u32),

    #[error("customer id {0} is outside 100..=199")]
    CustomerIdOutOfRange(u32),
}

/// The fixed product catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Product {
    A,
    B,
    C,
    D,
    E,
}

impl Product {
    /// All products, in label order
    pub const ALL: [Product; 5] = [Product::A, Product::B, Product::C, Product::D, Product::E];

    pub fn label(self) -> &'static str {
        match self {
            Product::A => "Product A",
            Product::B => "Product B",
            Product::C => "Product C",
            Product::D => "Product D",
            Product::E => "Product E",
        }
    }

    /// Unit price in whole dollars
    pub fn unit_price(self) -> u32 {
        match self {
            Product::A => 10,
            Product::B => 15,
            Product::C => 20,
            Product::D => 25,
            Product::E => 30,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single sales transaction
///
/// Price and total are derived when the record is built, and quantity and
/// customer id are range checked, so every record agrees with the product
/// price table and the catalogue bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesRecord {
    date: NaiveDateTime,
    product: Product,
    quantity: u32,
    customer_id: u32,
    unit_price: u32,
    total_sale: u32,
}

impl SalesRecord {
    /// Build a record, deriving unit price and total from the product
    ///
    /// # Arguments
    /// * `quantity` - Units sold, within `MIN_QUANTITY..=MAX_QUANTITY`
    /// * `customer_id` - Buyer, within `MIN_CUSTOMER_ID..=MAX_CUSTOMER_ID`
    ///
    /// # Returns
    /// * The record, or the `GenerateError` naming the out-of-range field
    pub fn new(
        date: NaiveDateTime,
        product: Product,
        quantity: u32,
        customer_id: u32,
    ) -> Result<Self, GenerateError> {
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
            return Err(GenerateError::QuantityOutOfRange(quantity));
        }
        if !(MIN_CUSTOMER_ID..=MAX_CUSTOMER_ID).contains(&customer_id) {
            return Err(GenerateError::CustomerIdOutOfRange(customer_id));
        }
        Ok(Self::priced(date, product, quantity, customer_id))
    }

    /// Callers guarantee quantity and customer id are in range
    fn priced(date: NaiveDateTime, product: Product, quantity: u32, customer_id: u32) -> Self {
        let unit_price = product.unit_price();
        Self {
            date,
            product,
            quantity,
            customer_id,
            unit_price,
            total_sale: quantity * unit_price,
        }
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    pub fn product(&self) -> Product {
        self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn customer_id(&self) -> u32 {
        self.customer_id
    }

    pub fn unit_price(&self) -> u32 {
        self.unit_price
    }

    pub fn total_sale(&self) -> u32 {
        self.total_sale
    }
}

/// Ordered, read-only collection of sales records
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SalesTable {
    records: Vec<SalesRecord>,
}

impl SalesTable {
    /// Build a table from already constructed records, keeping their order
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SalesRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a SalesTable {
    type Item = &'a SalesRecord;
    type IntoIter = std::slice::Iter<'a, SalesRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Date range the generated transactions are spread over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    start: NaiveDate,
    end: NaiveDate,
}

impl GeneratorConfig {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, GenerateError> {
        if start > end {
            return Err(GenerateError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

impl Default for GeneratorConfig {
    /// Calendar year 2023
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap_or_default(),
        }
    }
}

/// `periods` evenly spaced timestamps from `start` to `end` midnight, both inclusive
pub fn evenly_spaced_dates(start: NaiveDate, end: NaiveDate, periods: usize) -> Vec<NaiveDateTime> {
    let start = start.and_time(chrono::NaiveTime::MIN);
    let end = end.and_time(chrono::NaiveTime::MIN);

    match periods {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            // i128 keeps span * index exact for ranges spanning many millennia
            let span_ms = i128::from((end - start).num_milliseconds());
            let steps = (periods - 1) as i128;
            (0..periods as i128)
                .map(|i| start + Duration::milliseconds((span_ms * i / steps) as i64))
                .collect()
        }
    }
}

/// Generate the synthetic sales table
///
/// Draws happen column by column (quantities, then customers, then
/// products) so a given seed always yields the same table.
///
/// # Arguments
/// * `config` - Date range the transactions are spread over
/// * `rng` - Seeded random source, advanced by the draws
///
/// # Returns
/// * A table of exactly `TRANSACTION_COUNT` records
pub fn generate_sales_table<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> SalesTable {
    let dates = evenly_spaced_dates(config.start, config.end, TRANSACTION_COUNT);

    let quantities: Vec<u32> = (0..TRANSACTION_COUNT)
        .map(|_| rng.gen_range(MIN_QUANTITY..=MAX_QUANTITY))
        .collect();
    let customers: Vec<u32> = (0..TRANSACTION_COUNT)
        .map(|_| rng.gen_range(MIN_CUSTOMER_ID..=MAX_CUSTOMER_ID))
        .collect();
    let products: Vec<Product> = (0..TRANSACTION_COUNT)
        .map(|_| Product::ALL[rng.gen_range(0..Product::ALL.len())])
        .collect();

    let records = dates
        .into_iter()
        .zip(products)
        .zip(quantities.into_iter().zip(customers))
        .map(|((date, product), (quantity, customer_id))| {
            SalesRecord::priced(date, product, quantity, customer_id)
        })
        .collect();

    SalesTable::from_records(records)
}
