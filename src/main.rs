//! Architecture advisor CLI.
//!
//! Usage:
//!   agent-architect analyze --input requirements.json
//!   agent-architect spec --input requirements.json --json
//!   agent-architect patterns
//!
//! `analyze` and `spec` read a requirements JSON document from a file or
//! stdin; `patterns` lists the interaction patterns in the knowledge base.

use agent_architect::catalog;
use agent_architect::config::{OutputFormat, RuntimeConfig};
use agent_architect::recommend::{ArchitectureSpec, Recommendation};
use agent_architect::requirements::Requirements;
use agent_architect::{analyze, generate_architecture_spec, load_env};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use prettytable::{Table, row};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agent-architect")]
#[command(about = "Rule-based architecture advisor for AI agent projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend a pattern, framework, and memory strategy for a requirements file
    Analyze {
        /// Path to the requirements JSON (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Print the recommendation as JSON
        #[arg(long)]
        json: bool,
    },
    /// Produce a full architecture spec with steps, risks, and timeline
    Spec {
        /// Path to the requirements JSON (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Print the spec as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the interaction patterns in the knowledge base
    Patterns,
}

fn main() -> Result<()> {
    load_env();
    let config = RuntimeConfig::load_from_env();
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.as_str())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { input, json } => {
            let req = read_requirements(input.as_deref())?;
            let rec = analyze(&req);
            match effective_format(json, &config) {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rec)?),
                OutputFormat::Text => print_recommendation(&rec),
            }
            Ok(())
        }
        Commands::Spec { input, json } => {
            let req = read_requirements(input.as_deref())?;
            let spec = generate_architecture_spec(&req);
            match effective_format(json, &config) {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&spec)?),
                OutputFormat::Text => print_spec(&spec),
            }
            Ok(())
        }
        Commands::Patterns => {
            print_patterns();
            Ok(())
        }
    }
}

fn effective_format(json_flag: bool, config: &RuntimeConfig) -> OutputFormat {
    if json_flag {
        OutputFormat::Json
    } else {
        config.output_format
    }
}

fn read_requirements(path: Option<&std::path::Path>) -> Result<Requirements> {
    let raw = match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read requirements from {}", p.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read requirements from stdin")?;
            buf
        }
    };
    Ok(Requirements::from_json(&raw)?)
}

fn print_recommendation(rec: &Recommendation) {
    println!("Pattern: {} [{}]", rec.pattern.name, rec.pattern.key.as_str());
    println!("  {}", rec.pattern.rationale);
    println!("  Pros: {}", rec.pattern.pros.join(", "));
    println!("  Cons: {}", rec.pattern.cons.join(", "));
    println!();
    println!(
        "Framework: {} [{}]",
        rec.framework.name,
        rec.framework.key.as_str()
    );
    println!("  {}", rec.framework.rationale);
    if !rec.framework.alternatives.is_empty() {
        let alts: Vec<&str> = rec
            .framework
            .alternatives
            .iter()
            .map(|k| k.as_str())
            .collect();
        println!("  Alternatives worth a look: {}", alts.join(", "));
    }
    println!();
    println!("Memory: [{}]", rec.memory.key.as_str());
    println!("  Short-term: {}", rec.memory.short_term);
    println!("  Long-term:  {}", rec.memory.long_term);
    println!();
    println!("Recommendations:");
    for r in &rec.recommendations {
        println!("  - {}", r);
    }
}

fn print_spec(spec: &ArchitectureSpec) {
    if spec.project.is_empty() {
        println!("Architecture spec");
    } else {
        println!("Architecture spec for '{}'", spec.project);
    }
    println!();
    println!(
        "Pattern:   {} [{}]",
        spec.architecture.pattern.name,
        spec.architecture.pattern.key.as_str()
    );
    println!(
        "Framework: {} [{}]",
        spec.architecture.framework.name,
        spec.architecture.framework.key.as_str()
    );
    println!(
        "Memory:    {} / {}",
        spec.architecture.memory.short_term, spec.architecture.memory.long_term
    );
    println!();
    println!("Steps:");
    for step in &spec.implementation.steps {
        println!("  {}", step);
    }
    if !spec.implementation.risks.is_empty() {
        println!();
        println!("Risks:");
        for risk in &spec.implementation.risks {
            println!("  - {} -> {}", risk.risk, risk.mitigation);
        }
    }
    println!();
    println!("Timeline: {}", spec.implementation.timeline.label());
    println!();
    println!("Recommendations:");
    for r in &spec.recommendations {
        println!("  - {}", r);
    }
}

fn print_patterns() {
    println!("agent-architect - architecture advisor for AI agent projects");
    println!("Usage: agent-architect analyze --input requirements.json");
    println!();

    let mut table = Table::new();
    table.add_row(row!["Key", "Name", "Description"]);
    for entry in catalog::patterns() {
        table.add_row(row![entry.key.as_str(), entry.name, entry.description]);
    }
    table.printstd();
}
