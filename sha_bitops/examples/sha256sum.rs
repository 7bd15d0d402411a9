use std::time::Instant;

use clap::Parser;
use env_logger::Env;
use log::{info, LevelFilter};

use sha_bitops::sha256::Sha256;

//cargo run --package sha_bitops --example sha256sum -- abc --rounds-trace
// --rounds-trace (or RUST_LOG=trace) prints a and e after every round
#[derive(Parser, Debug)]
pub struct Args {
    /// Text to hash (UTF-8 bytes)
    text: String,
    /// Feed the input to the hasher in chunks of this many bytes
    #[arg(short, long)]
    chunk_size: Option<usize>,
    /// Log the working variables after every compression round
    #[arg(long, default_value_t = false)]
    rounds_trace: bool,
}

// None leaves the level to RUST_LOG
fn log_filter(args: &Args) -> Option<LevelFilter> {
    args.rounds_trace.then_some(LevelFilter::Trace)
}

fn main() {
    let args = Args::parse();
    let mut builder = env_logger::Builder::from_env(Env::default());
    if let Some(level) = log_filter(&args) {
        builder.filter_level(level);
    }
    builder.init();
    let start = Instant::now();

    let data = args.text.as_bytes();
    let mut hasher = Sha256::new();
    match args.chunk_size {
        Some(size) if size > 0 => {
            for chunk in data.chunks(size) {
                hasher.update(chunk);
                info!("after chunk: {}", hasher);
            }
        }
        _ => hasher.update(data),
    }
    let digest = hasher.finalize();

    println!("{}  {:?}", hex::encode(digest), args.text);
    info!("Hash time: {:?}", start.elapsed());
}
