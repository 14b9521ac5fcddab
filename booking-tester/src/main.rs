mod common;
mod logic;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use common::scenario::{all_scenarios, get_scenario, list_scenarios};
use common::split_csv;
use logic::{LogicTester, ScenarioResult, resolve_seed_inputs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    /// Colored summary for a terminal
    Console,
    /// Pretty-printed array of scenario results
    Json,
    /// Markdown document for CI artifacts
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "booking-tester", version = "0.1.0")]
#[command(about = "Automated QA sweeps for the booking pricing core and checkout screens")]
struct Args {
    /// Scenarios to run (comma-separated, `all` for every scenario)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of iterations per scenario and seed
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_scenarios {
        let mut out = open_output(args.output.as_deref())?;
        write_scenario_list(&mut out)?;
        out.flush()?;
        return Ok(());
    }

    println!("{}", "🎟️  Booking Pricing Tester".bright_cyan().bold());
    println!("{}", "================================".cyan());

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);
    let seeds = resolve_seed_inputs(&split_csv(&args.seeds))?;
    let results = run_scenarios(&scenarios, &seeds, args.iterations, args.verbose);

    let mut out = open_output(args.output.as_deref())?;
    render_report(&mut out, args.report, &results, start_time.elapsed())?;
    out.flush()?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn open_output(path: Option<&Path>) -> Result<BufWriter<Box<dyn Write>>> {
    let sink: Box<dyn Write> = match path {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(stdout()),
    };
    Ok(BufWriter::new(sink))
}

fn write_scenario_list(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(out, "  {key:25} - {description}")?;
    }
    Ok(())
}

/// Scenario keys to run, with `all` replaced by every registered key.
fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s.eq_ignore_ascii_case("all")) {
        scenarios.retain(|s| !s.eq_ignore_ascii_case("all"));
        for scenario in all_scenarios() {
            if !scenarios.iter().any(|s| s == scenario.key) {
                scenarios.push(scenario.key.to_string());
            }
        }
    }
    scenarios
}

fn run_scenarios(
    scenarios: &[String],
    seeds: &[u64],
    iterations: usize,
    verbose: bool,
) -> Vec<ScenarioResult> {
    println!("{}", "🧮 Running Pricing Scenarios".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let tester = LogicTester::new(verbose);
    let mut results = Vec::new();

    for scenario_name in scenarios {
        let Some(scenario) = get_scenario(scenario_name) else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
            continue;
        };
        log::info!("running {} over {} seed(s)", scenario.key, seeds.len());
        results.extend(tester.run_scenario(&scenario, seeds, iterations));
    }

    results
}

fn render_report(
    out: &mut dyn Write,
    format: ReportFormat,
    results: &[ScenarioResult],
    elapsed: Duration,
) -> Result<()> {
    match (format, results.is_empty()) {
        (ReportFormat::Json, true) => writeln!(out, "[]")?,
        (ReportFormat::Json, false) => logic::reports::generate_json_report(out, results)?,
        (ReportFormat::Markdown, true) => writeln!(
            out,
            "# Booking Pricing Test Results\n\n_No scenarios executed._"
        )?,
        (ReportFormat::Markdown, false) => logic::reports::generate_markdown_report(out, results)?,
        (ReportFormat::Console, true) => {
            writeln!(out, "No scenarios executed.")?;
            writeln!(out, "🏁 Total time: {elapsed:?}")?;
        }
        (ReportFormat::Console, false) => {
            logic::reports::generate_console_report(out, results, elapsed)?;
            writeln!(out)?;
            writeln!(out, "🏁 Total time: {elapsed:?}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(format: ReportFormat, results: &[ScenarioResult]) -> String {
        let mut buf = Vec::new();
        render_report(&mut buf, format, results, Duration::from_millis(3)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn run(keys: &str, seeds: &[u64]) -> Vec<ScenarioResult> {
        run_scenarios(&expand_scenarios(keys), seeds, 2, false)
    }

    #[test]
    fn all_expands_to_every_registered_scenario_once() {
        let expanded = expand_scenarios("smoke,ALL");
        assert_eq!(expanded[0], "smoke");
        assert_eq!(expanded.len(), all_scenarios().len());
        assert!(expanded.contains(&"checkout-flow".to_string()));
        assert!(expanded.contains(&"monotonic-sweep".to_string()));
    }

    #[test]
    fn explicit_scenarios_keep_their_order() {
        assert_eq!(
            expand_scenarios("subtotal-sweep, per-order-cap"),
            vec!["subtotal-sweep".to_string(), "per-order-cap".to_string()]
        );
    }

    #[test]
    fn unknown_scenarios_are_skipped() {
        let results = run("sold-out,backstage-pass", &[7]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].scenario_name, "Sold-Out Items Stay Empty");
        assert!(results[0].passed);
    }

    #[test]
    fn sweeps_produce_one_result_per_seed() {
        let results = run("clamp-sweep", &[1, 2, 3]);
        let seeds: Vec<u64> = results.iter().map(|r| r.seed).collect();
        assert_eq!(seeds, vec![1, 2, 3]);
        assert!(results.iter().all(|r| r.successful_iterations == 2));
    }

    #[test]
    fn scenario_list_names_pricing_checks() {
        let mut buf = Vec::new();
        write_scenario_list(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Available scenarios:"));
        assert!(text.contains("registration-fees"));
        assert!(text.contains("Registration Fixed Fees"));
    }

    #[test]
    fn json_report_carries_modal_totals_run() {
        let text = render(ReportFormat::Json, &run("modal-totals", &[1337]));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["scenario_name"], "Ticket Modal Totals");
        assert_eq!(parsed[0]["passed"], true);
        assert_eq!(parsed[0]["iterations_run"], 2);
    }

    #[test]
    fn empty_reports_say_nothing_ran() {
        assert_eq!(render(ReportFormat::Json, &[]).trim(), "[]");
        assert!(render(ReportFormat::Markdown, &[]).contains("_No scenarios executed._"));
        assert!(render(ReportFormat::Console, &[]).contains("No scenarios executed."));
    }

    #[test]
    fn markdown_report_lists_each_seed() {
        let text = render(ReportFormat::Markdown, &run("unknown-item", &[5, 9]));
        assert!(text.contains("Unknown Item Is Ignored (seed 5)"));
        assert!(text.contains("Unknown Item Is Ignored (seed 9)"));
    }

    #[test]
    fn console_report_ends_with_total_time() {
        let text = render(ReportFormat::Console, &run("availability-cap", &[1]));
        assert!(text.contains("Availability Cap"));
        assert!(text.trim_end().ends_with("3ms"));
    }

    #[test]
    fn file_output_receives_the_report() {
        let path = std::env::temp_dir().join(format!(
            "booking-tester-report-{}.json",
            std::process::id()
        ));
        let mut out = open_output(Some(path.as_path())).unwrap();
        render_report(&mut out, ReportFormat::Json, &[], Duration::ZERO).unwrap();
        out.flush().unwrap();
        drop(out);
        assert_eq!(std::fs::read_to_string(path).unwrap().trim(), "[]");
    }
}
