//! Quadtree Encoder CLI
//!
//! Reads a binary image from a plain PBM file or from the keyboard and
//! prints its quadtree encoding on stdout.

use clap::{error::ErrorKind, ArgGroup, CommandFactory, Parser};
use quadtree_encoder::{
    config::FileConfig,
    metrics::MetricsRegistry,
    source::{GridSource, ManualSource, PbmSource},
    Encoder,
};
use std::path::PathBuf;
use tracing::{debug, info};

/// Encodes binary images given as PBM files or typed in manually.
#[derive(Debug, Parser)]
#[command(
    name = "quadtree-encoder",
    disable_help_flag = true,
    arg_required_else_help = true,
    group(ArgGroup::new("mode").args(["manual", "file"]))
)]
struct Cli {
    /// Show this help. Must be the only argument.
    #[arg(short = '?', long = "help", exclusive = true)]
    help: bool,

    /// Manual entry: type the dimensions and every pixel on the keyboard.
    #[arg(short, long)]
    manual: bool,

    /// Encode the image stored in a plain PBM (portable bitmap) file.
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    // Logs go to stderr; stdout carries only prompts and the encoding
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                let _ = Cli::command().print_help();
                std::process::exit(0);
            }
            _ => {
                let _ = e.print();
                eprintln!("Use -? for help.");
                std::process::exit(1);
            }
        },
    };

    if cli.help {
        let _ = Cli::command().print_help();
        std::process::exit(0);
    }
    if !cli.manual && cli.file.is_none() {
        let _ = Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "one of --manual or --file is required",
            )
            .print();
        eprintln!("Use -? for help.");
        std::process::exit(1);
    }

    info!("Quadtree Encoder v{}", quadtree_encoder::VERSION);

    let config = match &cli.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };
    debug!(?config, "Configuration loaded");

    let mut source: Box<dyn GridSource> = match cli.file {
        Some(path) => Box::new(PbmSource::new(path)),
        None if config.input.prompts => {
            Box::new(ManualSource::new(std::io::stdin().lock(), std::io::stdout()))
        }
        None => Box::new(ManualSource::<_, std::io::Stdout>::quiet(
            std::io::stdin().lock(),
        )),
    };

    let grid = match source.load() {
        Ok(grid) => grid,
        Err(e) if e.is_unavailable() => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: invalid image from {}: {}", source.describe(), e);
            std::process::exit(1);
        }
    };
    info!(
        width = grid.width(),
        height = grid.height(),
        source = %source.describe(),
        "Image loaded"
    );

    let mut encoder = Encoder::new();
    let stream = encoder.encode(&grid);

    let rendered = stream.render(&config.output.alphabet);
    if config.output.trailing_newline {
        println!("{}", rendered);
    } else {
        print!("{}", rendered);
    }

    if config.metrics.enabled {
        match MetricsRegistry::new().and_then(|registry| {
            registry.update(encoder.stats());
            registry.encode()
        }) {
            Ok(text) => eprint!("{}", text),
            Err(e) => tracing::warn!("Metrics unavailable: {}", e),
        }
    }

    let counts = stream.counts();
    info!(
        symbols = stream.len(),
        splits = counts.split,
        white = counts.white,
        black = counts.black,
        depth = encoder.stats().max_depth,
        "Done"
    );
}
