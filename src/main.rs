//! Command-line inspector for ledger identifiers.
//!
//! Validates identifiers exactly the way ledger nodes do and prints their
//! canonical form.
//!
//! # Usage
//! ```text
//! ledger-ids <COMMAND> <INPUT> [OPTIONS]
//! ```
//!
//! # Commands
//! - `hash <0x-hex>`: decode a 32-byte digest (strict hex)
//! - `address <0x-hex | "0x-hex">`: decode a 20-byte address as a JSON string
//!   and print its numeric value
//! - `from-bytes <hex>`: build an identifier from raw bytes
//!
//! # Options
//! - `--width <20|32>`: identifier width for `from-bytes` (defaults to 32)
//! - `--strict`: reject `from-bytes` input longer than the width
//! - `--json`: print the quoted JSON form
//!
//! Logging is configured through `LEDGER_IDS_LOG`, `LEDGER_IDS_LOG_TIMESTAMP`
//! and `LEDGER_IDS_LOG_LEVEL_TAG`.

use ledger_ids::types::address::{ADDRESS_SIZE, Address};
use ledger_ids::types::hash::{HASH_LEN, Hash};
use ledger_ids::types::hex_codec::{self, HexCodec, PREFIX_LEN};
use ledger_ids::utils::log;
use ledger_ids::{FixedBytes, HexError, TruncationError, debug, error, warn};
use ledger_ids_derive::Error;
use std::env;
use std::process;

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Hex(#[from] HexError),
    #[error("{0}")]
    Truncation(#[from] TruncationError),
    #[error("invalid byte string: {0}")]
    Bytes(#[from] hex::FromHexError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Hash,
    Address,
    FromBytes,
}

#[derive(Debug, PartialEq, Eq)]
struct Options {
    command: Command,
    input: String,
    width: usize,
    strict: bool,
    json: bool,
}

fn main() {
    log::configure_from_env();

    let args: Vec<String> = env::args().collect();
    let program = program_name(&args);

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage(program);
        process::exit(if args.len() < 2 { 1 } else { 0 });
    }

    let options = match parse_args(&args[1..]) {
        Ok(options) => options,
        Err(e) => {
            error!("{e}");
            print_usage(program);
            process::exit(1);
        }
    };
    debug!("running {:?}", options);

    match run(&options) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}

/// argv[0], or the binary name when the platform passes an empty argv.
fn program_name(args: &[String]) -> &str {
    args.first().map_or("ledger-ids", String::as_str)
}

fn parse_args(args: &[String]) -> Result<Options, CliError> {
    let command = match args.first().map(String::as_str) {
        Some("hash") => Command::Hash,
        Some("address") => Command::Address,
        Some("from-bytes") => Command::FromBytes,
        Some(other) => return Err(CliError::Usage(format!("unknown command: {other}"))),
        None => return Err(CliError::Usage("missing command".into())),
    };

    let mut options = Options {
        command,
        input: String::new(),
        width: HASH_LEN,
        strict: false,
        json: false,
    };
    let mut input = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    return Err(CliError::Usage("--width requires an argument".into()));
                };
                options.width = match value.parse::<usize>() {
                    Ok(width @ (ADDRESS_SIZE | HASH_LEN)) => width,
                    _ => {
                        return Err(CliError::Usage(format!(
                            "invalid width '{value}': expected {ADDRESS_SIZE} or {HASH_LEN}"
                        )));
                    }
                };
            }
            "--strict" => options.strict = true,
            "--json" => options.json = true,
            flag if flag.starts_with("--") => {
                return Err(CliError::Usage(format!("unexpected argument: {flag}")));
            }
            value => {
                if input.replace(value.to_string()).is_some() {
                    return Err(CliError::Usage(format!("unexpected argument: {value}")));
                }
            }
        }
        i += 1;
    }

    options.input = input.ok_or_else(|| CliError::Usage("missing input".into()))?;
    Ok(options)
}

fn run(options: &Options) -> Result<Vec<String>, CliError> {
    match options.command {
        Command::Hash => {
            let hash: Hash = options.input.parse()?;
            Ok(vec![render(&hash.0, options.json)])
        }
        Command::Address => {
            let address = if options.input.starts_with('"') {
                Address::from_json_bytes(options.input.as_bytes())?
            } else {
                Address::from_json_bytes(format!("\"{}\"", options.input).as_bytes())?
            };
            Ok(vec![
                render(&address.0, options.json),
                address.to_big().to_string(),
            ])
        }
        Command::FromBytes => {
            let bytes = decode_byte_string(&options.input)?;
            if bytes.len() > options.width {
                if options.strict {
                    return Err(TruncationError {
                        width: options.width,
                        actual: bytes.len(),
                    }
                    .into());
                }
                warn!(
                    "dropping {} leading bytes to fit {} bytes",
                    bytes.len() - options.width,
                    options.width
                );
            }
            let line = if options.width == ADDRESS_SIZE {
                render(&FixedBytes::<ADDRESS_SIZE>::from_bytes(&bytes), options.json)
            } else {
                render(&FixedBytes::<HASH_LEN>::from_bytes(&bytes), options.json)
            };
            Ok(vec![line])
        }
    }
}

/// Strictly decodes an optionally `0x`-prefixed byte string.
fn decode_byte_string(input: &str) -> Result<Vec<u8>, CliError> {
    let digits = if hex_codec::has_hex_prefix(input.as_bytes()) {
        &input[PREFIX_LEN..]
    } else {
        input
    };
    Ok(hex::decode(digits)?)
}

fn render<const N: usize>(buf: &FixedBytes<N>, json: bool) -> String {
    if json {
        HexCodec::QUOTED.encode(buf)
    } else {
        HexCodec::RAW.encode(buf)
    }
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {program} <COMMAND> <INPUT> [OPTIONS]

Commands:
  hash <0x-hex>          Decode a 32-byte digest identifier
  address <0x-hex>       Decode a 20-byte address (bare or JSON-quoted) and print its value
  from-bytes <hex>       Build an identifier from raw bytes

Options:
  --width <20|32>        Identifier width for from-bytes (default 32)
  --strict               Reject from-bytes input longer than the width
  --json                 Print the quoted JSON form
  -h, --help             Show this help

Environment:
  LEDGER_IDS_LOG         Minimum log level (debug, info, warn, error)
  LEDGER_IDS_LOG_TIMESTAMP, LEDGER_IDS_LOG_LEVEL_TAG
                         Set to 0 to hide timestamps / level tags"
    );
}
