use std::panic;

use anyhow::{Context, Result};
use clap::Parser;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use exovision::{AnalysisReport, Cli, run};

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Classification")]
    classification: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
    #[tabled(rename = "Depth")]
    depth: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Activity")]
    activity: u32,
}

impl From<&AnalysisReport> for SummaryRow {
    fn from(report: &AnalysisReport) -> Self {
        let result = &report.result;
        Self {
            source: report.source.clone(),
            classification: result.classification.to_string(),
            confidence: result.confidence.to_string(),
            depth: result.transit_depth_pct.to_string(),
            period: if result.period_days.is_found() {
                result.period_days.to_string()
            } else {
                "-".to_string()
            },
            activity: report.stellar_activity_index,
        }
    }
}

fn main() -> Result<()> {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Warn)
    };

    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("exovision"), my_code_level)
        .parse_default_env()
        .init();

    let args = Cli::parse();
    let reports = run(&args)?;

    if args.json {
        let json = serde_json::to_string_pretty(&reports).context("Failed to serialize reports")?;
        println!("{json}");
        return Ok(());
    }

    let rows: Vec<SummaryRow> = reports.iter().map(SummaryRow::from).collect();
    println!("{}", Table::new(rows).with(Style::rounded()));
    for report in &reports {
        println!(
            "{}: {}. {}",
            report.source,
            report.result.banner(),
            report.result.message
        );
    }
    Ok(())
}
