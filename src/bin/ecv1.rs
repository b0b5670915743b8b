//! EC v1 CLI binary.
//!
//! Wraps files in EC v1 envelopes and unwraps them again.
//!
//! # Usage
//!
//! ```text
//! ecv1 encode input.json [envelope.txt]
//! ecv1 decode envelope.txt [output.json]
//! ```
//!
//! `-` stands for stdin (input) or stdout (output). Without an output path
//! the result goes to stdout, followed by a newline if it lacks one.

use std::path::PathBuf;

use clap::Parser;
use ecv1::{
    codec::{Envelope, EnvelopeCodec, MetadataPolicy},
    io::{into_text, read_input, write_output, Destination},
    Config, Mode, VERSION,
};
use serde_json::Value;

const USAGE: &str = "Usage: ecv1 <encode|decode> <file> [output]";

#[derive(Parser)]
#[command(name = "ecv1")]
#[command(version = VERSION)]
#[command(about = "EC v1 - gzip+base64 text envelopes", long_about = None)]
#[command(override_usage = "ecv1 [OPTIONS] <encode|decode> <FILE> [OUTPUT]")]
struct Cli {
    /// Operation: encode or decode
    mode: String,

    /// Input file path (or - for stdin)
    file: PathBuf,

    /// Output file path (default: stdout)
    output: Option<PathBuf>,

    /// Config file path (default: ~/.config/ecv1/config.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Require header line 2 to be exactly `t=gz>b64;ct=json`
    #[arg(long)]
    strict: bool,

    /// gzip compression level (0-9)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=9))]
    level: Option<u32>,

    /// Show compression statistics (encode)
    #[arg(short, long)]
    stats: bool,

    /// Pretty-print JSON payloads (decode)
    #[arg(long)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mode = match cli.mode.parse::<Mode>() {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            std::process::exit(1);
        },
    };

    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    let mut codec = config.codec.codec();
    if let Some(level) = cli.level {
        codec = codec.with_level(level);
    }
    if cli.strict {
        codec = codec.with_policy(MetadataPolicy::Strict);
    }
    tracing::debug!(
        "{mode}: level {}, metadata {:?}",
        codec.level(),
        codec.policy
    );

    let destination = Destination::from_arg(cli.output.as_deref());

    match mode {
        Mode::Encode => cmd_encode(&codec, cli.file, &destination, cli.stats),
        Mode::Decode => cmd_decode(&codec, cli.file, &destination, cli.pretty),
    }
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_encode(
    codec: &EnvelopeCodec,
    file: PathBuf,
    destination: &Destination,
    stats: bool,
) -> anyhow::Result<()> {
    let data = read_input(&file)?;
    let (wire, result) = codec.encode_with_stats(&data)?;

    write_output(destination, wire.as_bytes())?;

    if stats {
        eprintln!();
        eprintln!("Compression Statistics:");
        eprintln!("  Level:        {}", codec.level());
        eprintln!("  Original:     {} bytes", result.original_bytes);
        eprintln!("  Compressed:   {} bytes", result.compressed_bytes);
        eprintln!("  Envelope:     {} bytes", result.wire_bytes);
        eprintln!("  Ratio:        {:.2}x", result.ratio());
    }

    Ok(())
}

fn cmd_decode(
    codec: &EnvelopeCodec,
    file: PathBuf,
    destination: &Destination,
    pretty: bool,
) -> anyhow::Result<()> {
    let text = into_text(read_input(&file)?)?;
    let envelope = Envelope::parse(&text)?;
    let decoded = codec.decode_envelope(&envelope)?;

    // Pretty output only when the envelope says JSON and the bytes agree.
    let declares_json = envelope.metadata().is_ok_and(|meta| meta.is_json());
    let output = if pretty && declares_json {
        match serde_json::from_slice::<Value>(&decoded) {
            Ok(value) => serde_json::to_vec_pretty(&value)?,
            Err(e) => {
                tracing::warn!("payload is not valid JSON, writing as-is: {e}");
                decoded
            },
        }
    } else {
        decoded
    };

    write_output(destination, &output)?;

    Ok(())
}
