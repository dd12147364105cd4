//! felt-codec CLI.
//!
//! Encodes integers and byte strings into decimal field elements and back,
//! and wraps the Miden executable.

use clap::{Parser, Subcommand, ValueEnum};
use felt_codec::miden::{MidenDriver, MidenError};
use felt_codec::{
    CodecError, Decoder, ElementBuffer, Encoder, FieldElement, Fr, Goldilocks, Width,
};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(name = "felt-codec")]
#[command(about = "Flat field-element codec", long_about = None)]
#[command(version)]
struct Cli {
    /// Field the elements belong to
    #[arg(long, value_enum, global = true, default_value_t = Field::Goldilocks)]
    field: Field,

    /// Path to the miden executable (defaults to $MIDEN_BIN, then `miden`)
    #[arg(long, global = true)]
    miden: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Field {
    /// 2^64 - 2^32 + 1, as used by Miden
    Goldilocks,
    /// BLS12-381 scalar field
    Fr,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode an unsigned integer
    Encode {
        /// One of u8, u16, u32, u64
        width: String,
        /// Decimal value
        value: String,
    },

    /// Encode a hex byte string
    EncodeBytes {
        /// Bytes as hex
        hex: String,
    },

    /// Decode an unsigned integer from decimal elements
    Decode {
        /// One of u8, u16, u32, u64
        width: String,
        /// Decimal elements
        elements: Vec<String>,
    },

    /// Decode a byte string from decimal elements
    DecodeBytes {
        /// Number of bytes to recover
        len: usize,
        /// Decimal elements
        elements: Vec<String>,
    },

    /// Show the version of the miden executable
    MidenVersion,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Miden(#[from] MidenError),

    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("{0} trailing elements")]
    Trailing(usize),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let result = match cli.field {
        Field::Goldilocks => execute::<Goldilocks>(&cli),
        Field::Fr => execute::<Fr>(&cli),
    };

    match result {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            println!("{}", json!({ "error": e.to_string() }));
            ExitCode::FAILURE
        }
    }
}

fn execute<F: FieldElement>(cli: &Cli) -> Result<serde_json::Value, CliError> {
    match &cli.command {
        Commands::Encode { width, value } => {
            let value = width.parse::<Width>()?.parse(value)?;
            let mut enc = Encoder::<F, _>::new(Vec::new());
            enc.encode_value(value)?;
            Ok(json!({ "elements": to_decimals(&enc.into_inner()) }))
        }
        Commands::EncodeBytes { hex } => {
            let bytes = hex::decode(hex)?;
            let mut enc = Encoder::<F, _>::new(Vec::new());
            enc.encode_bytes(&bytes)?;
            Ok(json!({ "elements": to_decimals(&enc.into_inner()) }))
        }
        Commands::Decode { width, elements } => {
            let width = width.parse::<Width>()?;
            let mut dec = Decoder::new(parse_elements::<F>(elements)?);
            let value = dec.decode_value(width)?;
            ensure_drained(dec.get_ref())?;
            Ok(json!({ "value": value.as_u64() }))
        }
        Commands::DecodeBytes { len, elements } => {
            let mut dec = Decoder::new(parse_elements::<F>(elements)?);
            let bytes = dec.decode_exact(*len)?;
            ensure_drained(dec.get_ref())?;
            Ok(json!({ "hex": hex::encode(bytes) }))
        }
        Commands::MidenVersion => {
            let driver = match &cli.miden {
                Some(path) => MidenDriver::new(path),
                None => MidenDriver::from_env(),
            };
            Ok(json!({ "version": driver.version()? }))
        }
    }
}

fn to_decimals<F: FieldElement>(elements: &[F]) -> Vec<String> {
    elements.iter().map(|e| e.to_decimal()).collect()
}

fn parse_elements<F: FieldElement>(elements: &[String]) -> Result<ElementBuffer<F>, CliError> {
    let elements = elements
        .iter()
        .map(|s| F::from_decimal(s))
        .collect::<Result<Vec<F>, _>>()?;
    Ok(ElementBuffer::from_vec(elements))
}

fn ensure_drained<F: FieldElement>(buf: &ElementBuffer<F>) -> Result<(), CliError> {
    match buf.count() {
        0 => Ok(()),
        n => Err(CliError::Trailing(n)),
    }
}
