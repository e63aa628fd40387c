use clap::Parser;
use rustlex::{
    config::{self, LexerConfig, OutputFormat},
    output::write_tokens,
    RustlexError, Tokenizer,
};
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::PathBuf,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Tokenize Rust-like source code", long_about = None)]
struct Cli {
    /// Source file to tokenize; reads stdin when absent or `-`
    input: Option<PathBuf>,

    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format, overrides the config file
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Do not print the final end-of-input token
    #[arg(long)]
    no_eoi: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> Result<LexerConfig, RustlexError> {
    let mut config: LexerConfig = match &cli.config {
        Some(path) => config::from_file(path)?,
        None => LexerConfig::default(),
    };
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.no_eoi {
        config.emit_end_of_input = false;
    }
    Ok(config)
}

fn open_input(input: Option<&PathBuf>) -> Result<Box<dyn Read>, RustlexError> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            debug!("reading {:?}", path);
            Ok(Box::new(BufReader::new(File::open(path)?)))
        }
        _ => {
            debug!("reading stdin");
            Ok(Box::new(BufReader::new(io::stdin())))
        }
    }
}

fn run(cli: &Cli) -> Result<(), RustlexError> {
    let config = load_config(cli)?;
    debug!("config: {:?}", config);

    let mut tokenizer = Tokenizer::from_reader(open_input(cli.input.as_ref())?);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let count = write_tokens(&mut tokenizer, &config, &mut out)?;
    out.flush()?;

    if let Some(e) = tokenizer.source_mut().take_error() {
        return Err(e.into());
    }

    info!("{} tokens", count);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
