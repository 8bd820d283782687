use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use survey_analyze::config::AnalysisConfig;
use survey_analyze::report::{write_json_report, write_topic_info_file};
use survey_analyze::responses::{read_responses_from_path, Delimiter};
use survey_analyze::run_analysis;
use survey_analyze::topic_modeling::SeededLda;
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about = "Explore topics in museum visitor survey responses", long_about = None)]
struct Args {
    /// Survey CSV with a header row (comma or semicolon separated)
    path: PathBuf,
    #[clap(short, long, help = "JSON file with analysis settings")]
    config: Option<PathBuf>,
    #[clap(short, long, default_value = "overall_topic_summary.csv", help = "Where to write the overall topic table")]
    output: PathBuf,
    #[clap(long, help = "Also write the full report as JSON")]
    json: Option<PathBuf>,
    #[clap(short, long, value_enum, help = "Field separator (default: detect from the header)")]
    delimiter: Option<DelimiterArg>,
    #[clap(long, help = "Clusters smaller than this become outliers")]
    min_cluster_size: Option<usize>,
    #[clap(long, help = "Merge topics down to at most this many")]
    nr_topics: Option<usize>,
    #[clap(long, help = "Number of top words to list")]
    top_words: Option<usize>,
    #[clap(long, help = "Only model the combined responses, not each question")]
    overall_only: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum DelimiterArg {
    Auto,
    Comma,
    Semicolon,
}

impl From<DelimiterArg> for Delimiter {
    fn from(arg: DelimiterArg) -> Self {
        match arg {
            DelimiterArg::Auto => Delimiter::Auto,
            DelimiterArg::Comma => Delimiter::Comma,
            DelimiterArg::Semicolon => Delimiter::Semicolon,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(args: &Args) -> anyhow::Result<AnalysisConfig> {
    let mut config = match &args.config {
        Some(path) => AnalysisConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };

    if let Some(delimiter) = args.delimiter {
        config.delimiter = delimiter.into();
    }
    if let Some(size) = args.min_cluster_size {
        config.min_cluster_size = size;
    }
    if let Some(count) = args.nr_topics {
        config.target_topic_count = Some(count);
    }
    if let Some(n) = args.top_words {
        config.top_words = n;
    }
    if args.overall_only {
        config.per_question = false;
    }
    Ok(config)
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    println!("Path: {}", args.path.display());

    let table = read_responses_from_path(&args.path, config.delimiter, &config.required_columns())
        .with_context(|| format!("failed to load {}", args.path.display()))?;

    let backend = SeededLda::new(config.model.clone());
    let report = run_analysis(&backend, &table, &config)?;

    report.print_summary();
    if config.per_question {
        report.print_per_question();
    }
    report.print_frequencies();

    write_topic_info_file(&args.output, &report.overall.topic_info)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!("Topic summary saved - path={}", args.output.display());

    if let Some(path) = &args.json {
        write_json_report(path, &report)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Report saved - path={}", path.display());
    }

    Ok(())
}
