use crate::error::{Result, RunMergeError};
use crate::sales::settings::AggregationSettings;
use crate::sales::types::{DailyRun, Sale};
use crate::util::{group_adjacent, merge_adjacent, MergeAdjacentExt};

/// Two sales belong to the same run when they share a day.
pub fn same_day(a: &Sale, b: &Sale) -> bool {
    a.day() == b.day()
}

/// Adds two sales of the same day.
///
/// Sales of different days cannot be combined and yield
/// [`RunMergeError::InvalidMerge`].
pub fn merge_sales(a: Sale, b: Sale) -> Result<Sale> {
    if a.day() != b.day() {
        log::warn!("refusing to merge sales of day {} and day {}", a.day(), b.day());
        return Err(RunMergeError::InvalidMerge {
            left_day: a.day(),
            right_day: b.day(),
        });
    }

    Ok(Sale::new(a.day(), a.amount() + b.amount()))
}

/// Sums the amounts of each run of consecutive same-day sales.
///
/// Only adjacent sales merge: a day that reappears later in the input starts
/// a new total.
pub fn aggregate_daily_sales(sales: &[Sale]) -> Result<Vec<Sale>> {
    merge_adjacent(sales.iter().copied(), same_day, merge_sales)
}

/// Describes each run of same-day sales without folding it away.
pub fn daily_runs(sales: &[Sale]) -> Vec<DailyRun> {
    group_adjacent(sales.iter().copied(), Sale::day)
        .into_iter()
        .map(|run| DailyRun {
            day: run[0].day(),
            count: run.len(),
            total: run.iter().map(Sale::amount).sum(),
        })
        .collect()
}

/// Aggregates daily sales according to [`AggregationSettings`].
pub struct DailySalesAggregator<'a> {
    settings: &'a AggregationSettings,
}

impl<'a> DailySalesAggregator<'a> {
    pub fn new(settings: &'a AggregationSettings) -> Self {
        Self { settings }
    }

    pub fn aggregate(&self, sales: &[Sale]) -> Result<Vec<Sale>> {
        let mut daily = Vec::new();
        let mut dropped = 0usize;
        #[cfg(feature = "trace")]
        let mut run = 0usize;

        for merged in sales.iter().copied().merge_adjacent(same_day, merge_sales) {
            let sale = merged?;

            #[cfg(feature = "trace")]
            {
                log::debug!("run {}: day {} total {}", run, sale.day(), sale.amount());
                run += 1;
            }

            if self.settings.drop_zero_amounts && sale.amount() == 0.0 {
                dropped += 1;
                continue;
            }
            daily.push(sale);
        }

        let summary = format!(
            "aggregated {} sales into {} daily totals ({} zero totals dropped)",
            sales.len(),
            daily.len(),
            dropped
        );
        log::info!("{}", summary);
        self.settings.log(&summary);

        Ok(daily)
    }
}
