use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use mananera::stages::top_speakers_by_words;
use mananera::{
    parse_conferences_file, parse_topics_file, run_analysis, top_speakers, turn_taking_stats,
    AnalysisConfig, HttpSentimentClient, HumanReport, SentimentAnalyzer, SentimentConfig,
    SpeakerNormalizer, TurnMode, DEFAULT_HEAD_OF_STATE,
};

#[derive(Parser)]
#[command(name = "mananera")]
#[command(author, version, about = "Speaker and turn-taking analysis of press-conference transcripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every analysis and write the report tables
    Analyze {
        /// Input conference collection (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the report tables (JSON)
        #[arg(short, long)]
        output: PathBuf,

        /// Output file for a human-readable summary (text)
        #[arg(long)]
        human_readable: Option<PathBuf>,

        /// Topic dictionary file: {"topic": ["keyword", ...]}
        #[arg(long)]
        topics: Option<PathBuf>,

        /// Number of speakers kept in the rankings
        #[arg(long, default_value = "20")]
        top_n: usize,

        /// Trailing window in weeks for smoothed topic shares
        #[arg(long, default_value = "3")]
        smoothing_periods: usize,

        /// Canonical name for labels starting with "PRESIDENTA"
        #[arg(long, default_value = DEFAULT_HEAD_OF_STATE)]
        head_of_state: String,

        /// Classify sentiment per intervention (needs SENTIMENT_API_URL)
        #[arg(long)]
        sentiment: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print speaker rankings after normalization
    Speakers {
        /// Input conference collection (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Number of speakers to show
        #[arg(long, default_value = "20")]
        top_n: usize,

        /// Canonical name for labels starting with "PRESIDENTA"
        #[arg(long, default_value = DEFAULT_HEAD_OF_STATE)]
        head_of_state: String,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print turn-taking statistics per conference
    Turns {
        /// Input conference collection (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Only count turns from the first journalist question onwards
        #[arg(long)]
        after_first_journalist: bool,

        /// Canonical name for labels starting with "PRESIDENTA"
        #[arg(long, default_value = DEFAULT_HEAD_OF_STATE)]
        head_of_state: String,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            output,
            human_readable,
            topics,
            top_n,
            smoothing_periods,
            head_of_state,
            sentiment,
            verbose,
        } => {
            setup_logging(verbose);
            let mut config = AnalysisConfig {
                head_of_state,
                top_n,
                smoothing_periods,
                include_sentiment: sentiment,
                ..Default::default()
            };
            if let Some(path) = topics {
                config.topics = parse_topics_file(&path)?;
                info!("Loaded {} topics from {:?}", config.topics.len(), path);
            }
            analyze(input, output, human_readable, &config)
        }
        Commands::Speakers {
            input,
            top_n,
            head_of_state,
            verbose,
        } => {
            setup_logging(verbose);
            print_speakers(input, top_n, head_of_state)
        }
        Commands::Turns {
            input,
            after_first_journalist,
            head_of_state,
            verbose,
        } => {
            setup_logging(verbose);
            let mode = if after_first_journalist {
                TurnMode::AfterFirstJournalist
            } else {
                TurnMode::All
            };
            print_turns(input, mode, head_of_state)
        }
    }
}

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn analyze(
    input: PathBuf,
    output: PathBuf,
    human_readable: Option<PathBuf>,
    config: &AnalysisConfig,
) -> Result<()> {
    info!("Loading conferences from {:?}", input);
    let normalizer = SpeakerNormalizer::new(config.head_of_state.clone());
    let interventions =
        parse_conferences_file(&input, &normalizer).context("Failed to parse input conferences")?;

    let client = if config.include_sentiment {
        let sentiment_config = SentimentConfig::from_env()?;
        info!("Sentiment analyzer at {}", sentiment_config.endpoint);
        Some(HttpSentimentClient::new(sentiment_config)?)
    } else {
        None
    };
    let analyzer = client.as_ref().map(|c| c as &dyn SentimentAnalyzer);

    let report = run_analysis(&interventions, config, analyzer)?;

    report.write_json(&output)?;
    info!("Report written to {:?}", output);

    if let Some(path) = human_readable {
        HumanReport::new(&report).write_file(&path)?;
        info!("Human-readable summary written to {:?}", path);
    }

    info!(
        "Complete: {} conferences, {} with turn stats, {} after first journalist",
        report.metadata.total_conferences,
        report.turn_stats.len(),
        report.turn_stats_after_first_journalist.len()
    );

    Ok(())
}

fn print_speakers(input: PathBuf, top_n: usize, head_of_state: String) -> Result<()> {
    let normalizer = SpeakerNormalizer::new(head_of_state);
    let interventions =
        parse_conferences_file(&input, &normalizer).context("Failed to parse input conferences")?;

    println!("Speakers by Interventions");
    println!("=========================");
    for speaker in top_speakers(&interventions, top_n) {
        println!(
            "{:<45} {:>7} {:>6.1}%",
            speaker.speaker,
            speaker.n_speeches,
            speaker.pct_of_total * 100.0
        );
    }
    println!();

    println!("Speakers by Words");
    println!("=================");
    for speaker in top_speakers_by_words(&interventions, top_n) {
        println!(
            "{:<45} {:>9} {:>6.1}%",
            speaker.speaker,
            speaker.total_words,
            speaker.pct_of_total * 100.0
        );
    }

    Ok(())
}

fn print_turns(input: PathBuf, mode: TurnMode, head_of_state: String) -> Result<()> {
    let normalizer = SpeakerNormalizer::new(head_of_state);
    let interventions =
        parse_conferences_file(&input, &normalizer).context("Failed to parse input conferences")?;

    let stats = turn_taking_stats(&interventions, normalizer.head_of_state(), mode);

    println!("Turn Taking ({:?})", mode);
    println!("===========");
    println!("{:<12} {:>6} {:>10} {:>8} {:>7}", "date", "turns", "president", "press", "ratio");
    for row in &stats {
        println!(
            "{:<12} {:>6} {:>10} {:>8} {:>7.2}",
            row.date.to_string(),
            row.total_turns,
            row.president_turns,
            row.journalist_turns,
            row.ratio_president_journalist
        );
    }
    println!();
    println!("{} conferences with journalist turns", stats.len());

    Ok(())
}
