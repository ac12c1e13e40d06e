use billing_report_core::prelude::*;
use billing_report_core::report::format_currency;
use billing_report_core::Calculator;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let path = args.get(1).map(String::as_str).unwrap_or("billing.json");

    println!("Loading billing data from: {}", path);

    let mut generator = ReportGenerator::new();
    if let Err(e) = generator.load_data(path) {
        eprintln!("Could not load billing data: {}", e);
        eprintln!();
        eprintln!("Usage: {} [path_to_billing_file.json]", args[0]);
        std::process::exit(1);
    }

    println!("Loaded {} records", generator.record_count());

    let calculator = Calculator::new();
    let billed = calculator.days_with_billing(generator.records());
    println!("Days with billing: {}", billed.len());

    if let Some(min) = calculator.minimum(&billed) {
        println!("Lowest billed day: {}", format_currency(min));
    }
    if let Some(max) = calculator.maximum(&billed) {
        println!("Highest billed day: {}", format_currency(max));
    }
    if let Some(average) = calculator.average(&billed) {
        println!("Monthly average: {}", format_currency(average));
    }

    match generator.summarize() {
        Ok(summary) => {
            println!("\n--- Monthly Report ---");
            println!("Total billed: {}", format_currency(summary.total_billed()));
            println!("Days above average: {}", summary.days_above_average());
        }
        Err(e) => {
            eprintln!("Could not summarize billing data: {}", e);
            std::process::exit(1);
        }
    }
}
