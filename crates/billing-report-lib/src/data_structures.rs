use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingRecord {
    #[serde(rename = "Day")]
    day: i32,
    #[serde(rename = "Value")]
    value: f64,
}

impl BillingRecord {
    pub fn new(day: i32, value: f64) -> Self {
        Self { day, value }
    }

    pub fn day(&self) -> i32 {
        self.day
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    // Zero and negative amounts never count as revenue.
    pub fn has_billing(&self) -> bool {
        self.value > 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BillingSummary {
    min_billing: f64,
    max_billing: f64,
    monthly_average: f64,
    days_above_average: usize,
    billed_days: usize,
    total_billed: f64,
}

impl BillingSummary {
    pub fn new(
        min_billing: f64,
        max_billing: f64,
        monthly_average: f64,
        days_above_average: usize,
        billed_days: usize,
        total_billed: f64,
    ) -> Self {
        Self {
            min_billing,
            max_billing,
            monthly_average,
            days_above_average,
            billed_days,
            total_billed,
        }
    }

    pub fn min_billing(&self) -> f64 {
        self.min_billing
    }

    pub fn max_billing(&self) -> f64 {
        self.max_billing
    }

    pub fn monthly_average(&self) -> f64 {
        self.monthly_average
    }

    pub fn days_above_average(&self) -> usize {
        self.days_above_average
    }

    pub fn billed_days(&self) -> usize {
        self.billed_days
    }

    pub fn total_billed(&self) -> f64 {
        self.total_billed
    }
}
