use clap::{Parser, Subcommand};
use omh_core::*;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "omh")]
#[command(about = "Validate and normalize Open mHealth measure documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log decoding steps to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported measure schemas
    Schemas,

    /// Check that a document is a valid measure
    Check {
        /// Schema name, e.g. heart-rate
        #[arg(long)]
        schema: String,

        /// Reject properties the schema does not define
        #[arg(long)]
        strict: bool,

        /// Document to read, or - for stdin
        file: PathBuf,
    },

    /// Re-encode a document in canonical form
    Normalize {
        /// Schema name, e.g. heart-rate
        #[arg(long)]
        schema: String,

        /// Write on a single line
        #[arg(long)]
        compact: bool,

        /// Reject properties the schema does not define
        #[arg(long)]
        strict: bool,

        /// Document to read, or - for stdin
        file: PathBuf,
    },
}

enum Failure {
    /// The document was read but is not a valid measure
    Invalid(Error),
    Other(Error),
}

type CliResult<T> = std::result::Result<T, Failure>;

impl From<Error> for Failure {
    fn from(err: Error) -> Self {
        Failure::Other(err)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    omh_core::logging::init_with_level(if cli.verbose { "debug" } else { "warn" });

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failure::Invalid(err)) => {
            eprintln!("invalid ({}): {}", err.kind(), err);
            ExitCode::FAILURE
        }
        Err(Failure::Other(err)) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Schemas => {
            cmd_schemas();
            Ok(())
        }
        Commands::Check {
            schema,
            strict,
            file,
        } => cmd_check(&config, &schema, strict, &file),
        Commands::Normalize {
            schema,
            compact,
            strict,
            file,
        } => cmd_normalize(&config, &schema, compact, strict, &file),
    }
}

fn cmd_schemas() {
    for kind in MeasureKind::ALL {
        let schema_id = kind.schema_id();
        println!(
            "{:<27} {:<36} {}",
            kind.schema_value(),
            schema_id.to_string(),
            schema_id.schema_filename()
        );
    }
}

fn cmd_check(config: &Config, schema: &str, strict: bool, file: &Path) -> CliResult<()> {
    let measure = decode(config, schema, strict, file)?;
    println!("valid {}", measure.schema_id());
    Ok(())
}

fn cmd_normalize(
    config: &Config,
    schema: &str,
    compact: bool,
    strict: bool,
    file: &Path,
) -> CliResult<()> {
    let measure = decode(config, schema, strict, file)?;
    let codec = MeasureCodec::from_config(config).with_pretty(config.output.pretty && !compact);
    println!("{}", codec.to_string(&measure)?);
    Ok(())
}

fn decode(config: &Config, schema: &str, strict: bool, file: &Path) -> CliResult<AnyMeasure> {
    let kind = parse_kind(schema)?;
    let text = read_document(file)?;

    let mut codec = MeasureCodec::from_config(config);
    if strict {
        codec = codec.with_unknown_fields(UnknownFieldPolicy::Reject);
    }

    tracing::debug!("Decoding {} as {}", file.display(), kind.schema_id());
    codec.from_str_as(kind, &text).map_err(Failure::Invalid)
}

fn parse_kind(schema: &str) -> Result<MeasureKind> {
    MeasureKind::find_by_schema_value(schema).ok_or_else(|| {
        let names: Vec<_> = MeasureKind::ALL.iter().map(|k| k.schema_value()).collect();
        Error::Other(format!(
            "unknown schema \"{}\", expected one of: {}",
            schema,
            names.join(", ")
        ))
    })
}

fn read_document(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(file)?)
    }
}
