use crate::data_structures::BillingRecord;
use crate::error::ReportError;
use std::fs;
use std::path::Path;

pub struct BillingLoader;

impl BillingLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load_from_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<BillingRecord>, ReportError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ReportError::FileNotFound(path.to_path_buf()));
        }

        let raw = fs::read_to_string(path)?;
        self.parse_records(&raw)
    }

    /// Decode a JSON array of billing records. A JSON `null` stands for an
    /// absent list and decodes to no records, which is not a parse failure.
    pub fn parse_records(&self, raw: &str) -> Result<Vec<BillingRecord>, ReportError> {
        let records: Option<Vec<BillingRecord>> = serde_json::from_str(raw)?;
        Ok(records.unwrap_or_default())
    }
}

impl Default for BillingLoader {
    fn default() -> Self {
        Self::new()
    }
}
