// Daily sales aggregation built on merge_adjacent

pub mod aggregate;
pub mod settings;
pub mod types;

pub use aggregate::{
    aggregate_daily_sales, daily_runs, merge_sales, same_day, DailySalesAggregator,
};
pub use settings::{AggregationSettings, LogCallback};
pub use types::{DailyRun, Sale};
