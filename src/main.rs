use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use segrep::config::{SolverConfig, DEFAULT_BASE, DEFAULT_MAX_SEQ_LEN};
use segrep::error::ReconstructError;
use segrep::io::{fasta, output};
use segrep::segment::{self, Reconstructor};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(
    name = "segrep",
    author,
    version,
    about = "Reconstruct a DNA query from forward / reverse-complement reference segments",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (stderr)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find the minimal segmentation of the query and report the segments used
    Reconstruct {
        /// Reference sequence file (FASTA or plain text)
        #[arg(default_value = "ref.txt")]
        reference: String,
        /// Query sequence file (FASTA or plain text)
        #[arg(default_value = "query.txt")]
        query: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Output path (stdout if omitted)
        #[arg(short, long)]
        out: Option<String>,
        #[command(flatten)]
        params: HashArgs,
    },
    /// Build the reference index only and print its statistics
    Index {
        /// Reference sequence file (FASTA or plain text)
        #[arg(default_value = "ref.txt")]
        reference: String,
        #[command(flatten)]
        params: HashArgs,
    },
}

#[derive(clap::Args, Debug)]
struct HashArgs {
    /// Maximum accepted length of each sequence
    #[arg(long = "max-len", default_value_t = DEFAULT_MAX_SEQ_LEN)]
    max_len: usize,
    /// Polynomial hash base
    #[arg(long = "base", default_value_t = DEFAULT_BASE)]
    base: u64,
}

impl HashArgs {
    fn config(&self) -> SolverConfig {
        SolverConfig { max_seq_len: self.max_len, base: self.base }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("segrep=debug,info")
        } else {
            EnvFilter::new("segrep=warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let result = match cli.command {
        Commands::Reconstruct { reference, query, format, out, params } => {
            run_reconstruct(&reference, &query, format, out.as_deref(), params.config())
        }
        Commands::Index { reference, params } => run_index(&reference, params.config()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(ReconstructError::NoReconstruction { covered }) = e.downcast_ref::<ReconstructError>() {
                info!(covered, "trace walk stopped");
                eprintln!("no complete reconstruction found");
                return ExitCode::from(2);
            }
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_reconstruct(
    reference_path: &str,
    query_path: &str,
    format: OutputFormat,
    out_path: Option<&str>,
    config: SolverConfig,
) -> Result<()> {
    let reference = fasta::read_sequence(reference_path)?;
    let query = fasta::read_sequence(query_path)?;
    info!(reference = reference_path, len = reference.len(), "loaded reference");
    info!(query = query_path, len = query.len(), "loaded query");

    let solver = Reconstructor::from_sequences(&reference, &query, config)?;
    let result = solver.run()?;

    let mut out: Box<dyn Write> = if let Some(p) = out_path {
        let fh = std::fs::File::create(p).map_err(|e| anyhow::anyhow!("cannot create output '{}': {}", p, e))?;
        Box::new(std::io::BufWriter::new(fh))
    } else {
        Box::new(std::io::BufWriter::new(std::io::stdout()))
    };

    let store = solver.store();
    match format {
        OutputFormat::Text => output::write_table(&mut out, store.reference(), &result.patterns)?,
        OutputFormat::Json => {
            let report = output::JsonReport::new(store.reference(), store.query_len(), &result.patterns);
            output::write_json(&mut out, &report)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn run_index(reference_path: &str, config: SolverConfig) -> Result<()> {
    let reference = fasta::read_sequence(reference_path)?;
    let index = segment::index_reference(&reference, &config)?;

    println!("reference: {}", reference_path);
    println!("length: {}", reference.len());
    println!("distinct_hashes: {}", index.len());
    println!("forward_origins: {}", index.forward_count());
    println!("reverse_origins: {}", index.reverse_count());
    Ok(())
}
