use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    time::Instant,
};

use clap::Parser;
use tokscan::{
    analyze,
    display::{render, OutputFormat},
    display_warning,
    errors::errors::{Error, ErrorImpl},
    read_source,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Strips comments from a source file and lists its tokens by category", long_about = None)]
struct Cli {
    /// Source file to analyze; prompted for when omitted
    path: Option<PathBuf>,

    /// Output format for the token report
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Print the cleaned source before the report
    #[arg(short = 'c', long)]
    show_cleaned: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn prompt_for_path() -> Result<PathBuf, Error> {
    let prompt_error = |e: io::Error| {
        Error::new(ErrorImpl::PromptError {
            message: e.to_string(),
        })
    };

    print!("Enter file name: ");
    io::stdout().flush().map_err(prompt_error)?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line).map_err(prompt_error)?;

    if read == 0 {
        return Err(Error::new(ErrorImpl::PromptError {
            message: String::from("unexpected end of input"),
        }));
    }

    Ok(PathBuf::from(line.trim_end_matches(['\r', '\n'])))
}

fn run(cli: &Cli) -> Result<(), Error> {
    let path = match &cli.path {
        Some(path) => path.clone(),
        None => prompt_for_path()?,
    };

    let start = Instant::now();
    let source = read_source(&path)?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string());
    let analysis = analyze(&source, file_name);

    info!(
        "analyzed {} in {:?}",
        path.to_string_lossy(),
        start.elapsed()
    );
    debug!("cleaned source:\n{}", analysis.cleaned);

    if let Some(warning) = analysis.cleaned.warning() {
        eprint!("{}", display_warning(warning, &source));
    }

    if cli.show_cleaned {
        println!("Cleaned code:");
        println!("{}", analysis.cleaned);
        println!();
    }

    print!("{}", render(&analysis.tokens, cli.format)?);
    if cli.format == OutputFormat::Json {
        println!();
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
