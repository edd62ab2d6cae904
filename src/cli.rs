use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tabled::{Table, Tabled};
use tracing::info;

use airaudit::analysis::Analyzer;
use airaudit::config::Config;
use airaudit::finding::{Finding, Severity};
use airaudit::report;
use airaudit::survey::Survey;

#[derive(Parser)]
#[command(name = "airaudit")]
#[command(author, version, about = "Security analyzer for airodump-ng capture summaries")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a capture summary and write the security report
    Analyze {
        /// Path to the airodump-ng CSV export
        capture: PathBuf,

        /// Report path (default: security_report_<timestamp>.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Stdout format (text, table, json); the report file is always plain text
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Generate default configuration file
    GenConfig {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Table row for the findings overview
#[derive(Tabled)]
struct FindingRow {
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Finding")]
    kind: String,
    #[tabled(rename = "Network")]
    network: String,
    #[tabled(rename = "BSSID")]
    bssid: String,
}

pub fn run_command(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default()?,
    };

    match cli.command {
        Commands::Analyze {
            capture,
            output,
            format,
        } => cmd_analyze(config, capture, output, format),
        Commands::GenConfig { output } => cmd_gen_config(output),
    }
}

fn cmd_analyze(
    config: Config,
    capture: PathBuf,
    output: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let survey = Survey::load(&capture)
        .with_context(|| format!("Failed to load capture summary: {}", capture.display()))?;

    info!(
        "Found {} network(s) and {} station(s)",
        survey.network_count(),
        survey.station_count()
    );

    let analyzer = Analyzer::new(config.thresholds.clone());
    let findings = analyzer.analyze(&survey);

    let rendered = report::render(&survey, &findings, &config.report);

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&findings)?);
        }
        "table" => {
            if findings.is_empty() {
                println!("No findings");
            } else {
                let rows: Vec<FindingRow> = findings
                    .iter()
                    .map(|f| FindingRow {
                        severity: f.severity.to_string(),
                        kind: f.kind.to_string(),
                        network: f.network.clone().unwrap_or_default(),
                        bssid: f.bssid.clone().unwrap_or_default(),
                    })
                    .collect();

                println!("{}", Table::new(rows));
            }
            print_severity_summary(&findings);
        }
        _ => {
            println!("{}", rendered);
        }
    }

    let report_path = output.unwrap_or_else(default_report_path);
    std::fs::write(&report_path, &rendered)
        .with_context(|| format!("Failed to write report: {}", report_path.display()))?;
    println!(
        "{} {}",
        "Report saved to:".green().bold(),
        report_path.display()
    );

    Ok(())
}

/// Timestamped report filename in the working directory
fn default_report_path() -> PathBuf {
    PathBuf::from(format!(
        "security_report_{}.txt",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

fn print_severity_summary(findings: &[Finding]) {
    let count = |severity: Severity| findings.iter().filter(|f| f.severity == severity).count();

    println!();
    println!(
        "{} {}  {} {}  {} {}  {} {}  {} {}",
        "Critical:".red().bold(),
        count(Severity::Critical),
        "High:".red(),
        count(Severity::High),
        "Medium:".yellow(),
        count(Severity::Medium),
        "Low:".cyan(),
        count(Severity::Low),
        "Info:".dimmed(),
        count(Severity::Info),
    );
}

fn cmd_gen_config(output: Option<PathBuf>) -> Result<()> {
    let config = Config::default();

    match output {
        Some(path) => {
            config.save(&path)?;
            println!("Configuration written to {}", path.display());
        }
        None => {
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
