use crate::calculator::Calculator;
use crate::data_structures::{BillingRecord, BillingSummary};
use crate::error::ReportError;
use crate::loader::BillingLoader;
use std::path::Path;

pub struct ReportGenerator {
    records: Vec<BillingRecord>,
    loader: BillingLoader,
    calculator: Calculator,
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            loader: BillingLoader::new(),
            calculator: Calculator::new(),
        }
    }

    /// Load records from a billing file, replacing any previously loaded
    /// data. An empty or absent record list is reported as `EmptyInput`,
    /// distinct from a parse failure.
    pub fn load_data<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ReportError> {
        self.records = self.loader.load_from_file(path)?;
        if self.records.is_empty() {
            return Err(ReportError::EmptyInput);
        }
        Ok(())
    }

    pub fn records(&self) -> &[BillingRecord] {
        &self.records
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summarize(&self) -> Result<BillingSummary, ReportError> {
        if self.records.is_empty() {
            return Err(ReportError::EmptyInput);
        }
        self.calculator.summarize(&self.records)
    }

    /// The whole pipeline in one call: load, filter, reduce.
    pub fn generate<P: AsRef<Path>>(&mut self, path: P) -> Result<BillingSummary, ReportError> {
        self.load_data(path)?;
        self.summarize()
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
