//! Identifier codec benchmark binary.
//!
//! Measures decode/encode latency for both identifier types.
//! Run with: `cargo run --release --bin bench`
//!
//! `LEDGER_IDS_BENCH_SECS` sets the minimum run time per benchmark (default 2).

use ledger_ids::types::address::Address;
use ledger_ids::types::hash::Hash;
use ledger_ids::types::hex_codec::HexCodec;
use ledger_ids::utils::log;
use ledger_ids::{info, warn};
use std::env;
use std::hint::black_box;
use std::time::{Duration, Instant};

const BENCH_SECS_ENV: &str = "LEDGER_IDS_BENCH_SECS";

// ---------------------------------------------------------------------------
// Benchmark harness
// ---------------------------------------------------------------------------

struct BenchResult {
    name: &'static str,
    iterations: u64,
    total: Duration,
    /// Input size in bytes (None to omit the throughput column).
    input_len: Option<usize>,
}

impl BenchResult {
    fn ns_per_op(&self) -> f64 {
        self.total.as_nanos() as f64 / self.iterations.max(1) as f64
    }

    fn print(&self) {
        let ns_per_op = self.ns_per_op();
        let throughput = self
            .input_len
            .map(|len| format!("{:>10.1}", len as f64 * 1000.0 / ns_per_op))
            .unwrap_or_else(|| "         -".to_string());
        println!(
            "  {:<32} {:>10} iters {:>10.1} ns/op  {} MB/s",
            self.name, self.iterations, ns_per_op, throughput,
        );
    }
}

/// Runs `f` for at least `min_duration`, returning aggregated results.
fn bench<T, F>(
    name: &'static str,
    min_duration: Duration,
    input_len: Option<usize>,
    mut f: F,
) -> BenchResult
where
    F: FnMut() -> T,
{
    // Warmup
    for _ in 0..1_000 {
        black_box(f());
    }

    let mut iterations = 0u64;
    let start = Instant::now();
    while start.elapsed() < min_duration {
        // Amortize the clock read over a batch.
        for _ in 0..256 {
            black_box(f());
        }
        iterations += 256;
    }

    BenchResult {
        name,
        iterations,
        total: start.elapsed(),
        input_len,
    }
}

fn min_duration() -> Duration {
    match env::var(BENCH_SECS_ENV) {
        Ok(value) => match value.parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => {
                warn!("ignoring invalid {BENCH_SECS_ENV}='{value}', using 2s");
                Duration::from_secs(2)
            }
        },
        Err(_) => Duration::from_secs(2),
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    log::configure_from_env();
    let min = min_duration();
    info!("running codec benchmarks for at least {:?} each", min);

    println!("Identifier Codec Benchmarks\n");
    println!(
        "  {:<32} {:>10}       {:>10}        {:>10}",
        "benchmark", "iters", "latency", "throughput"
    );
    println!("  {}", "-".repeat(80));

    let hash = Hash::from_bytes(&(0u8..32).collect::<Vec<_>>());
    let hash_json = hash.to_json();
    let address = Address::from_bytes(&(100u8..120).collect::<Vec<_>>());
    let address_json = address.to_json();

    // 1. Decoding
    bench("hash decode (length gate)", min, Some(hash_json.len()), || {
        Hash::from_json_bytes(black_box(hash_json.as_bytes()))
    })
    .print();

    bench("hash decode (strict)", min, Some(hash_json.len()), || {
        HexCodec::RAW.decode::<32>(black_box(hash_json.as_bytes()))
    })
    .print();

    bench("address decode (quoted json)", min, Some(address_json.len()), || {
        Address::from_json_bytes(black_box(address_json.as_bytes()))
    })
    .print();

    // 2. Encoding
    bench("hash encode", min, None, || black_box(&hash).to_json()).print();
    bench("address encode", min, None, || black_box(&address).to_json()).print();

    // 3. Conversions
    bench("hash from_bytes", min, None, || {
        Hash::from_bytes(black_box(hash.as_slice()))
    })
    .print();

    bench("address to_big", min, None, || black_box(&address).to_big()).print();

    println!();
}
