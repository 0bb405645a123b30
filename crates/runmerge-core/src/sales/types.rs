use serde::{Deserialize, Serialize};
use std::fmt;

/// A single sale: the day it happened on and the amount sold.
///
/// Equality is exact on both fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    day: i32,
    amount: f64,
}

impl Sale {
    pub fn new(day: i32, amount: f64) -> Self {
        Self { day, amount }
    }

    pub fn day(&self) -> i32 {
        self.day
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl fmt::Display for Sale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date: {}, Amount : {}", self.day, self.amount)
    }
}

/// Summary of one run of same-day sales before folding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRun {
    pub day: i32,
    /// Number of sales in the run
    pub count: usize,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sale_display_matches_report_format() {
        assert_eq!(Sale::new(1, 23.0).to_string(), "Date: 1, Amount : 23");
        assert_eq!(Sale::new(4, 2.5).to_string(), "Date: 4, Amount : 2.5");
    }

    #[test]
    fn sale_equality_requires_day_and_amount() {
        assert_eq!(Sale::new(3, 5.0), Sale::new(3, 5.0));
        assert_ne!(Sale::new(3, 5.0), Sale::new(3, 6.0));
        assert_ne!(Sale::new(3, 5.0), Sale::new(4, 5.0));
    }

    #[test]
    fn sale_serializes_as_object() {
        let json = serde_json::to_string(&Sale::new(1, 12.0)).unwrap();
        assert_eq!(json, r#"{"day":1,"amount":12.0}"#);
    }
}
