//! CLI entry point for the `dsalab` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use dsa_labs::cli::commands;
use dsa_labs::config::LabConfig;
use dsa_labs::LabError;

#[derive(Parser)]
#[command(
    name = "dsalab",
    about = "Data-structure and algorithm exercises: graphs, sorting, parsing, coding"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Seed for the random generator (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Complex-vector operations and bubble vs merge sort timing
    Complex,
    /// Evaluate infix expressions
    Expr {
        /// Expressions to evaluate; the demo list is used when none are given
        expressions: Vec<String>,
        /// Keep reading expressions from stdin until "q"
        #[arg(long)]
        interactive: bool,
    },
    /// Largest rectangle in random histograms
    Histogram,
    /// Huffman-code the speech text and encode the demo words
    Huffman {
        /// Speech text file
        #[arg(long)]
        text: Option<PathBuf>,
    },
    /// Traversals, shortest paths, spanning tree and biconnected components
    Graph {
        /// Start vertex label
        #[arg(long)]
        start: Option<char>,
    },
    /// Non-max suppression benchmark across sort algorithms
    Nms {
        /// Comma-separated box counts
        #[arg(long)]
        sizes: Option<String>,
        /// Timed runs per measurement
        #[arg(long)]
        repetitions: Option<usize>,
        /// IoU suppression threshold
        #[arg(long)]
        iou: Option<f32>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let mut config = match LabConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(exit_code(&e));
        }
    };

    let mut rng = match cli.seed.or(config.seed) {
        Some(seed) => {
            log::debug!("seeding generator with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let result = match cli.command {
        Commands::Complex => commands::cmd_complex(&config.complex, &mut rng, json),
        Commands::Expr {
            expressions,
            interactive,
        } => {
            let stdin = std::io::stdin();
            let input = interactive.then(|| stdin.lock());
            commands::cmd_expr(&expressions, input, json)
        }
        Commands::Histogram => commands::cmd_histogram(&config.histogram, &mut rng, json),
        Commands::Huffman { text } => {
            if text.is_some() {
                config.huffman.text_path = text;
            }
            commands::cmd_huffman(&config.huffman, json)
        }
        Commands::Graph { start } => {
            commands::cmd_graph(start.unwrap_or(config.graph.start), json)
        }
        Commands::Nms {
            sizes,
            repetitions,
            iou,
        } => {
            if let Some(sizes) = sizes {
                match commands::parse_sizes(&sizes) {
                    Ok(parsed) => config.nms.sizes = parsed,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        process::exit(exit_code(&e));
                    }
                }
            }
            if let Some(repetitions) = repetitions {
                config.nms.repetitions = repetitions;
            }
            if let Some(iou) = iou {
                config.nms.iou_threshold = iou;
            }
            commands::cmd_nms(&config.nms, &mut rng, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(exit_code(&e));
    }
}

fn exit_code(e: &LabError) -> i32 {
    match e {
        LabError::Io(_) => 1,
        LabError::Config(_) => 2,
        LabError::InvalidArgument(_) => 3,
        LabError::UnknownVertex(_) => 4,
        _ => 5,
    }
}
