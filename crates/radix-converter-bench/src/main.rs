//! Throughput benchmark for radix conversion.
//!
//! Encodes and decodes a deterministic set of values in every standard
//! alphabet (or in a single alphabet loaded from a JSON config), in both
//! precision modes, and reports per-value timings.
//!
//! ```text
//! cargo run --release -p radix-converter-bench -- --count 100000
//! cargo run --release -p radix-converter-bench -- --config map.json --json
//! ```

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use radix_converter::{
    Alphabet, Config, NATIVE_MAX, PrecisionMode, Standard, Value, decode_value, encode_value,
};
use serde::Serialize;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

/// CLI arguments for the benchmark.
#[derive(Parser, Debug)]
#[command(name = "bench-radix")]
#[command(about = "Benchmark radix encoding and decoding across alphabets and precision modes")]
struct Args {
    /// Number of values to convert per run.
    #[arg(long, default_value = "100000")]
    count: usize,

    /// Timed runs per measurement (after one warmup run).
    #[arg(long, default_value = "5")]
    iters: u32,

    /// JSON config (`{"map": ..., "acceptLong": ...}`) selecting a single alphabet.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

/// One measured alphabet/mode combination.
#[derive(Debug, Serialize)]
struct Measurement {
    alphabet: String,
    base: usize,
    mode: &'static str,
    values: usize,
    avg_encoded_len: f64,
    encode_ns_per_value: f64,
    decode_ns_per_value: f64,
}

/// Deterministic xorshift values spread over the native range.
fn generate_values(count: usize) -> Vec<u64> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..count)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            // Mix magnitudes: shift right by 0..63 bits so short encodings are covered too
            (state >> (i % 63)) & NATIVE_MAX
        })
        .collect()
}

fn mode_name(mode: PrecisionMode) -> &'static str {
    match mode {
        PrecisionMode::Native => "native",
        PrecisionMode::Extended => "extended",
    }
}

fn time_runs<F: FnMut()>(iters: u32, mut run: F) -> Duration {
    // Warmup
    run();
    let start = Instant::now();
    for _ in 0..iters {
        run();
    }
    start.elapsed() / iters.max(1)
}

fn measure(alphabet: &Alphabet, mode: PrecisionMode, values: &[Value], iters: u32) -> Measurement {
    let encoded: Vec<String> = values
        .iter()
        .map(|v| encode_value(v, alphabet, mode).expect("Failed to encode"))
        .collect();

    // Verify round-trip before timing
    for (value, text) in values.iter().zip(&encoded) {
        let decoded = decode_value(text, alphabet, mode).expect("Failed to decode");
        assert_eq!(
            decoded.to_string(),
            value.to_string(),
            "round-trip mismatch for {}",
            text
        );
    }

    let encode_time = time_runs(iters, || {
        for v in values {
            let _ = encode_value(v, alphabet, mode).expect("Failed to encode");
        }
    });
    let decode_time = time_runs(iters, || {
        for text in &encoded {
            let _ = decode_value(text, alphabet, mode).expect("Failed to decode");
        }
    });

    let count = values.len().max(1) as f64;
    let total_len: usize = encoded.iter().map(|s| s.chars().count()).sum();

    Measurement {
        alphabet: alphabet.to_string(),
        base: alphabet.base(),
        mode: mode_name(mode),
        values: values.len(),
        avg_encoded_len: total_len as f64 / count,
        encode_ns_per_value: encode_time.as_nanos() as f64 / count,
        decode_ns_per_value: decode_time.as_nanos() as f64 / count,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let (alphabets, modes) = match &args.config {
        Some(path) => {
            let config: Config = serde_json::from_str(&fs::read_to_string(path)?)?;
            info!(path = %path.display(), base = config.alphabet().base(), "loaded config");
            (vec![config.alphabet().clone()], vec![config.mode()])
        }
        None => {
            let alphabets: Vec<Alphabet> =
                Standard::ALL.iter().map(|s| s.alphabet().clone()).collect();
            let modes: Vec<PrecisionMode> = [PrecisionMode::Native, PrecisionMode::Extended]
                .into_iter()
                .filter(|m| m.is_available())
                .collect();
            (alphabets, modes)
        }
    };

    let values: Vec<Value> = generate_values(args.count).into_iter().map(Value::Int).collect();
    info!(values = values.len(), iters = args.iters, "starting benchmark");

    let mut report = Vec::new();
    for alphabet in &alphabets {
        for &mode in &modes {
            let measurement = measure(alphabet, mode, &values, args.iters);
            info!(
                base = measurement.base,
                mode = measurement.mode,
                "measured in {:.1} ns/value encode, {:.1} ns/value decode",
                measurement.encode_ns_per_value,
                measurement.decode_ns_per_value
            );
            report.push(measurement);
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n=== Radix Conversion ({} values) ===", args.count);
    println!(
        "{:>5}  {:<9}  {:>8}  {:>12}  {:>12}",
        "base", "mode", "avg len", "encode ns", "decode ns"
    );
    for m in &report {
        println!(
            "{:>5}  {:<9}  {:>8.2}  {:>12.1}  {:>12.1}",
            m.base, m.mode, m.avg_encoded_len, m.encode_ns_per_value, m.decode_ns_per_value
        );
    }

    Ok(())
}
