use crate::data_structures::BillingSummary;
use crate::error::ReportError;

/// Format an amount as currency: dollar symbol, comma-grouped thousands,
/// two decimal places.
pub fn format_currency(amount: f64) -> String {
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in whole.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let whole: String = grouped.chars().rev().collect();

    format!("{}${}.{}", sign, whole, cents)
}

/// The three success lines, in print order.
pub fn render_summary(summary: &BillingSummary) -> Vec<String> {
    vec![
        format!("Minimum billing: {}", format_currency(summary.min_billing())),
        format!("Maximum billing: {}", format_currency(summary.max_billing())),
        format!(
            "Days with billing above the monthly average: {}",
            summary.days_above_average()
        ),
    ]
}

/// Map an error to its console message. Each kind has exactly one message
/// and every run prints exactly one outcome.
pub fn failure_message(err: &ReportError) -> String {
    match err {
        ReportError::FileNotFound(path) => format!(
            "Error: The file '{}' was not found. Please ensure the file is in the correct location.",
            path.display()
        ),
        ReportError::Parse(_) => {
            "Error: The JSON data could not be parsed. Please check the file format.".to_string()
        }
        ReportError::EmptyInput => "No data found in the JSON file.".to_string(),
        ReportError::NoPositiveBilling => "No billing data to process.".to_string(),
        ReportError::Io(err) => format!("An unexpected error occurred: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_currency_small_amounts() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(0.5), "$0.50");
        assert_eq!(format_currency(123.456), "$123.46");
    }

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1234567.89), "$1,234,567.89");
        assert_eq!(format_currency(1000.0), "$1,000.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-1234.5), "-$1,234.50");
    }

    #[test]
    fn test_render_summary_lines() {
        let summary = BillingSummary::new(100.0, 300.0, 200.0, 1, 2, 400.0);

        let lines = render_summary(&summary);
        assert_eq!(
            lines,
            vec![
                "Minimum billing: $100.00",
                "Maximum billing: $300.00",
                "Days with billing above the monthly average: 1",
            ]
        );
    }

    #[test]
    fn test_file_not_found_message() {
        let err = ReportError::FileNotFound(PathBuf::from("billing.json"));
        assert_eq!(
            failure_message(&err),
            "Error: The file 'billing.json' was not found. Please ensure the file is in the correct location."
        );
    }

    #[test]
    fn test_parse_failure_message() {
        let parse_err = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let err = ReportError::Parse(parse_err);
        assert_eq!(
            failure_message(&err),
            "Error: The JSON data could not be parsed. Please check the file format."
        );
    }

    #[test]
    fn test_empty_and_no_billing_messages() {
        assert_eq!(
            failure_message(&ReportError::EmptyInput),
            "No data found in the JSON file."
        );
        assert_eq!(
            failure_message(&ReportError::NoPositiveBilling),
            "No billing data to process."
        );
    }

    #[test]
    fn test_unexpected_error_message() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ReportError::Io(io_err);
        assert!(failure_message(&err).starts_with("An unexpected error occurred:"));
    }
}
