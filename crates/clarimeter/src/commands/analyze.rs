//! Analyze command: readability metrics plus feedback.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use clarimeter_core::config::Config;
use clarimeter_core::feedback::Confidence;
use clarimeter_core::service::{self, AnalysisResponse, AnalyzeRequest};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use super::{read_input_file, read_stdin};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// File to analyze. Reads stdin when omitted or `-`.
    pub file: Option<Utf8PathBuf>,

    /// Method label to report (e.g. clarity_index, gunning_fog).
    #[arg(long)]
    pub method: Option<String>,
}

/// Analyze a file (or stdin) and print metrics with feedback.
#[instrument(name = "cmd_analyze", skip_all, fields(file = ?args.file))]
pub fn cmd_analyze(args: AnalyzeArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = ?args.file, method = ?args.method, "executing analyze command");

    let limit = config.input_limit();
    let (label, content) = match args.file {
        Some(ref path) if path.as_str() != "-" => {
            (path.to_string(), read_input_file(path, limit)?)
        }
        _ => ("<stdin>".to_string(), read_stdin(limit)?),
    };

    let request = AnalyzeRequest {
        text: Some(content),
        method: args.method,
    };
    let response = service::evaluate(&request, config.default_method.as_deref(), limit)
        .with_context(|| format!("failed to analyze {label}"))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_report(&label, &response);
    }

    Ok(())
}

fn print_report(label: &str, response: &AnalysisResponse) {
    let m = &response.metrics;
    let fb = &response.ai_feedback;

    println!("{}", label.bold());

    println!(
        "\n  {} {} words, {} sentences, {} paragraphs",
        "Counts:".cyan(),
        m.words,
        m.sentences,
        m.paragraphs,
    );
    println!(
        "  {} {} syllables, {} complex, {} long",
        "Words:".cyan(),
        m.syllables,
        m.complex_words,
        m.long_words,
    );
    println!(
        "  {} ASL {:.2}, PCW {:.2}%, ASPP {:.2}",
        "Averages:".cyan(),
        m.asl,
        m.pcw,
        m.aspp,
    );

    println!("\n  {}", "Indices".bold().underline());
    let indices = [
        ("clarity_index", "Clarity Index", m.clarity_index),
        ("gunning_fog", "Gunning Fog", m.gunning_fog),
        ("infogineering_index", "Infogineering", m.infogineering_index),
        ("flesch_reading_ease", "Flesch Reading Ease", m.flesch_reading_ease),
        ("flesch_kincaid_grade", "Flesch-Kincaid Grade", m.flesch_kincaid_grade),
    ];
    for (key, name, value) in indices {
        let line = format!("{name:<22}{value:>8.2}");
        if key == response.selected_method {
            println!("  {} {}", "›".green(), line.green().bold());
        } else {
            println!("    {line}");
        }
    }

    let confidence = match fb.confidence {
        Confidence::Low => fb.confidence.as_str().red().to_string(),
        Confidence::Medium => fb.confidence.as_str().yellow().to_string(),
        Confidence::High => fb.confidence.as_str().green().to_string(),
    };
    println!(
        "\n  {} {} (confidence: {})",
        "Feedback:".cyan(),
        fb.conclusion,
        confidence,
    );
    for suggestion in &fb.suggestions {
        println!("    - {suggestion}");
    }
    if !fb.example_rewrite.is_empty() {
        println!("  {} {}", "Rewrite:".cyan(), fb.example_rewrite);
    }
}
