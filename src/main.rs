mod repl;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser, ValueEnum};
use tracing::{error, info, warn};

use cata::config::DEFAULT_MAX_DEPTH;
use cata::{logging, reader, Config, Interpreter, Status};

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Sexpr,
    Json,
}

#[derive(Parser)]
#[command(author, version, about = "Interpreter for a small s-expression language")]
struct Cli {
    /// Source files, run one after another
    files: Vec<PathBuf>,

    /// Start an interactive session after running the files
    #[arg(short = 'i', long)]
    repl: bool,

    /// Print the parsed forms of each file instead of running it
    #[arg(long)]
    dump_ast: bool,

    #[arg(long, value_enum, default_value_t = Format::Sexpr)]
    format: Format,

    /// Deepest list nesting accepted by the reader and the evaluator
    #[arg(long, env = "CATA_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Write logs to this file instead of stderr (filter with RUST_LOG)
    #[arg(long, env = "CATA_LOG_FILE")]
    log_file: Option<PathBuf>,
}

fn dump(path: &Path, source: &str, config: &Config, format: Format) -> bool {
    let nodes = match reader::parse(source, config) {
        Ok(nodes) => nodes,
        Err(err) => {
            eprintln!("error: {}: {}", path.display(), err);
            return false;
        }
    };
    for node in &nodes {
        match format {
            Format::Sexpr => println!("{}", node),
            Format::Json => match serde_json::to_string(node) {
                Ok(json) => println!("{}", json),
                Err(err) => {
                    eprintln!("error: {}: {}", path.display(), err);
                    return false;
                }
            },
        }
    }
    true
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match logging::init(cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("error: cannot set up logging: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if cli.files.is_empty() && !cli.repl {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    }

    let config = Config {
        max_depth: cli.max_depth,
    };
    let mut interpreter = Interpreter::new(config.clone());

    for path in &cli.files {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                warn!("could not read {}: {}", path.display(), err);
                eprintln!("error: could not read file {}", path.display());
                continue;
            }
        };

        if cli.dump_ast {
            if !dump(path, &source, &config, cli.format) {
                return ExitCode::FAILURE;
            }
            continue;
        }

        info!("running {}", path.display());
        match interpreter.run(&source) {
            Ok(Status::Completed) => {}
            Ok(Status::Exited) => {
                info!("{} called EXIT", path.display());
                return ExitCode::SUCCESS;
            }
            Err(err) => {
                error!("{} failed: {}", path.display(), err);
                eprintln!("error: {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        }
    }

    if cli.repl {
        if let Err(err) = repl::start(&mut interpreter) {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
