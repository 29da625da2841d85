#![deny(missing_docs)]
//! Teilzeit command-line interface.
//!
//! Thin adapter over the calculation engine: parses raw inputs, composes
//! the reduction aggregator and duration calculator, and prints the
//! outcome in text, JSON, or Markdown.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fmt::Write as _;
use std::path::PathBuf;
use teilzeit_core::{
    plan, render_json, render_plan_markdown, summarize_reduction, DegreeCatalog, PlanOutcome,
    PlanRequest, QualificationReason, ReductionInput, ReductionSummary, Rounding,
    StandardDegreeCatalog, DEFAULT_MAX_REDUCTION_MONTHS,
};

pub(crate) type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser)]
#[command(name = "teilzeit", version, about = "Teilzeit CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct OutputArgs {
    /// Output format for report data.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write the report to a file instead of stdout.
    #[arg(long = "report-output")]
    report_output: Option<PathBuf>,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

#[derive(Args, Clone)]
struct CalculateArgs {
    /// Full-time weekly hours.
    #[arg(long)]
    weekly_full: Option<f64>,
    /// Part-time weekly hours.
    #[arg(long)]
    weekly_part: Option<f64>,
    /// Nominal full-time duration in months.
    #[arg(long)]
    duration: Option<f64>,
    /// School degree identifier (see `degrees`).
    #[arg(long)]
    degree: Option<String>,
    /// Manually entered reduction in months.
    #[arg(long)]
    manual: Option<f64>,
    /// Qualification reason as `id=months` or plain months (repeatable).
    #[arg(long = "qualification", value_delimiter = ',')]
    qualification: Vec<String>,
    /// Rounding mode: round, ceil, or floor.
    #[arg(long)]
    rounding: Option<String>,
    /// Override for the reduction cap in months.
    #[arg(long)]
    max_reduction: Option<u32>,
    /// Override for the statutory duration floor in months.
    #[arg(long)]
    min_duration: Option<f64>,
    /// Read the plan request from a JSON file instead of flags.
    #[arg(long)]
    input: Option<PathBuf>,
}

#[derive(Args, Clone)]
struct ReductionArgs {
    /// Degree reduction in months.
    #[arg(long, default_value_t = 0.0)]
    degree_months: f64,
    /// Manually entered reduction in months.
    #[arg(long, default_value_t = 0.0)]
    manual: f64,
    /// Raw qualification reduction in months.
    #[arg(long, default_value_t = 0.0)]
    qualification_months: f64,
    /// Cap on the total reduction in months.
    #[arg(long, default_value_t = DEFAULT_MAX_REDUCTION_MONTHS)]
    max_reduction: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the part-time duration for a full plan.
    Calculate {
        #[command(flatten)]
        args: CalculateArgs,
        #[command(flatten)]
        report: OutputArgs,
    },
    /// Aggregate reduction sources without a duration calculation.
    Reduction {
        #[command(flatten)]
        args: ReductionArgs,
        #[command(flatten)]
        report: OutputArgs,
    },
    /// List the standard school degree catalog.
    Degrees {
        #[command(flatten)]
        report: OutputArgs,
    },
}

#[cfg(not(test))]
fn main() {
    let cli = Cli::parse();
    std::process::exit(match run(cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            2
        }
    });
}

#[cfg(test)]
fn main() {}

fn run(cli: Cli) -> CliResult<i32> {
    match cli.command {
        Commands::Calculate { args, report } => {
            let request = build_plan_request(&args)?;
            let outcome = plan(&StandardDegreeCatalog::new(), &request)?;
            let rendered = render_outcome(&outcome, report.format)?;
            emit(&rendered, report.report_output.as_deref())?;
            Ok(if outcome.duration.allowed { 0 } else { 1 })
        }
        Commands::Reduction { args, report } => {
            let summary = summarize_reduction(&ReductionInput {
                degree_reduction_months: args.degree_months,
                manual_reduction_months: args.manual,
                qualification_reduction_months: args.qualification_months,
                max_total_months: args.max_reduction,
                ..ReductionInput::default()
            });
            let rendered = render_summary(&summary, report.format)?;
            emit(&rendered, report.report_output.as_deref())?;
            Ok(0)
        }
        Commands::Degrees { report } => {
            let entries = StandardDegreeCatalog::new().entries();
            let rendered = match report.format {
                OutputFormat::Json => render_json(&entries)?,
                OutputFormat::Text | OutputFormat::Markdown => {
                    let mut output = String::new();
                    for entry in &entries {
                        let _ = writeln!(
                            output,
                            "- {} ({}): {} months",
                            entry.id, entry.label, entry.months
                        );
                    }
                    output
                }
            };
            emit(&rendered, report.report_output.as_deref())?;
            Ok(0)
        }
    }
}

fn build_plan_request(args: &CalculateArgs) -> CliResult<PlanRequest> {
    if let Some(path) = &args.input {
        let contents = std::fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&contents)?);
    }

    let qualification_reasons = args
        .qualification
        .iter()
        .enumerate()
        .map(|(index, raw)| parse_qualification(index, raw))
        .collect::<CliResult<Vec<_>>>()?;

    Ok(PlanRequest {
        weekly_full: args.weekly_full,
        weekly_part: args.weekly_part,
        full_duration_months: args.duration,
        school_degree_id: args.degree.clone(),
        manual_reduction_months: args.manual,
        qualification_reasons,
        rounding: args.rounding.as_deref().map(Rounding::parse_or_default),
        max_reduction_months: args.max_reduction,
        min_duration_months: args.min_duration,
    })
}

fn parse_qualification(index: usize, raw: &str) -> CliResult<QualificationReason> {
    let raw = raw.trim();
    let (id, months) = match raw.split_once('=') {
        Some((id, months)) => (id.trim().to_string(), months.trim()),
        None => (format!("qualification-{}", index + 1), raw),
    };
    let months: f64 = months
        .parse()
        .map_err(|_| format!("invalid qualification months: {raw}"))?;
    Ok(QualificationReason { id, months })
}

fn render_outcome(outcome: &PlanOutcome, format: OutputFormat) -> CliResult<String> {
    Ok(match format {
        OutputFormat::Json => render_json(outcome)?,
        OutputFormat::Markdown => render_plan_markdown(outcome),
        OutputFormat::Text => format_outcome_text(outcome),
    })
}

fn render_summary(summary: &ReductionSummary, format: OutputFormat) -> CliResult<String> {
    Ok(match format {
        OutputFormat::Json => render_json(summary)?,
        OutputFormat::Text | OutputFormat::Markdown => format_summary_text(summary),
    })
}

fn format_outcome_text(outcome: &PlanOutcome) -> String {
    let mut output = format_summary_text(&outcome.reduction);
    let duration = &outcome.duration;
    match duration.error_code {
        None => {
            let _ = writeln!(output, "allowed: yes");
        }
        Some(code) => {
            let code = serde_json::to_string(&code).unwrap_or_default();
            let _ = writeln!(output, "allowed: no ({})", code.trim_matches('"'));
        }
    }
    if let Some(factor) = duration.factor {
        let _ = writeln!(output, "factor: {factor:.4}");
    }
    let _ = writeln!(
        output,
        "effective full-time basis: {} months",
        duration.effective_fulltime_months
    );
    if let Some(final_months) = duration.parttime_final_months {
        let _ = writeln!(output, "part-time duration: {final_months} months");
    }
    if let Some(delta) = duration.delta_months {
        let _ = writeln!(output, "delta vs. basis: {delta} months");
    }
    if let Some(delta) = duration.delta_vs_original {
        let _ = writeln!(output, "delta vs. nominal: {delta} months");
    }
    output
}

fn format_summary_text(summary: &ReductionSummary) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "reduction: degree {} + manual {} + qualification {} = {} months",
        summary.degree, summary.manual, summary.qualification, summary.total
    );
    if summary.cap_exceeded {
        let _ = writeln!(
            output,
            "cap exceeded: raw total {} months clamped to {}",
            summary.total_raw, summary.total
        );
    }
    output
}

fn emit(rendered: &str, report_output: Option<&std::path::Path>) -> CliResult<()> {
    match report_output {
        Some(path) => std::fs::write(path, rendered)?,
        None => print!("{rendered}"),
    }
    Ok(())
}
