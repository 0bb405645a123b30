pub mod error;
pub mod sales;
pub mod scenarios;
pub mod util;

pub use error::{Result, RunMergeError};

pub use sales::{
    aggregate_daily_sales, daily_runs, merge_sales, same_day, AggregationSettings, DailyRun,
    DailySalesAggregator, Sale,
};
pub use scenarios::{builtin_scenarios, run_scenarios, Scenario, ScenarioOutcome, ScenarioReport};
pub use util::{count_runs, group_adjacent_by, merge_adjacent, MergeAdjacent, MergeAdjacentExt};
