use billing_report_core::report;
use billing_report_core::ReportGenerator;
use clap::Parser;

// The month's daily billing records, read from the working directory.
const BILLING_FILE: &str = "billing.json";

#[derive(Parser, Debug)]
#[clap(author = "Red", version, about)]
struct Args {
    #[arg(short = 'v')]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let mut generator = ReportGenerator::new();
    match generator.generate(BILLING_FILE) {
        Ok(summary) => {
            if args.verbose {
                eprintln!(
                    "Summarized {} billed days out of {} records in '{}'",
                    summary.billed_days(),
                    generator.record_count(),
                    BILLING_FILE
                );
            }
            for line in report::render_summary(&summary) {
                println!("{}", line);
            }
        }
        // Callers of this tool read stdout, not the exit status: every
        // failure prints its message and the process still exits 0.
        Err(err) => println!("{}", report::failure_message(&err)),
    }
}
