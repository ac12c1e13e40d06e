use crate::data_structures::{BillingRecord, BillingSummary};
use crate::error::ReportError;

pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn days_with_billing<'a>(&self, records: &'a [BillingRecord]) -> Vec<&'a BillingRecord> {
        records.iter().filter(|r| r.has_billing()).collect()
    }

    pub fn minimum(&self, records: &[&BillingRecord]) -> Option<f64> {
        records.iter().map(|r| r.value()).reduce(f64::min)
    }

    pub fn maximum(&self, records: &[&BillingRecord]) -> Option<f64> {
        records.iter().map(|r| r.value()).reduce(f64::max)
    }

    pub fn average(&self, records: &[&BillingRecord]) -> Option<f64> {
        if records.is_empty() {
            return None;
        }

        let total: f64 = records.iter().map(|r| r.value()).sum();
        Some(total / records.len() as f64)
    }

    // Strictly greater than: days billing exactly the average do not count.
    pub fn days_above_average(&self, records: &[&BillingRecord], average: f64) -> usize {
        records.iter().filter(|r| r.value() > average).count()
    }

    pub fn summarize(&self, records: &[BillingRecord]) -> Result<BillingSummary, ReportError> {
        let billed = self.days_with_billing(records);
        if billed.is_empty() {
            return Err(ReportError::NoPositiveBilling);
        }

        let total: f64 = billed.iter().map(|r| r.value()).sum();
        let monthly_average = total / billed.len() as f64;
        let min_billing = billed.iter().map(|r| r.value()).fold(f64::INFINITY, f64::min);
        let max_billing = billed
            .iter()
            .map(|r| r.value())
            .fold(f64::NEG_INFINITY, f64::max);

        // The count depends on the final average, so it comes last.
        let days_above_average = self.days_above_average(&billed, monthly_average);

        Ok(BillingSummary::new(
            min_billing,
            max_billing,
            monthly_average,
            days_above_average,
            billed.len(),
            total,
        ))
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
