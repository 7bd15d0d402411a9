use clap::Parser;
use log::info;

use sha_bitops::checks::{filter_checks, reference_checks, run_checks, Check};
use sha_bitops::sha256::hex_digest;

//RUST_LOG=info cargo run --package sha_bitops --example validate
#[derive(Parser, Debug)]
pub struct Args {
    /// Only run checks whose label contains this string
    #[arg(short, long)]
    only: Option<String>,
    /// Skip the SHA-256 test vectors
    #[arg(long, default_value_t = false)]
    no_vectors: bool,
}

// NIST FIPS 180-4 test vectors
const VECTORS: [(&[u8], &str); 3] = [
    (b"", "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
    (b"abc", "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
    (
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    ),
];

// An empty selection is an error, not a vacuous pass.
fn select_checks(only: Option<&str>) -> Result<Vec<Check>, String> {
    let checks = filter_checks(reference_checks(), only);
    if checks.is_empty() {
        return Err(format!("no check label contains {:?}", only.unwrap_or_default()));
    }
    Ok(checks)
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    info!("Args: {:?}", args);

    let checks = match select_checks(args.only.as_deref()) {
        Ok(checks) => checks,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    println!("Word primitive checks:");
    println!("{}", "=".repeat(60));
    let report = run_checks(&checks);
    for line in &report.lines {
        println!("{}", line);
    }
    let mut all_pass = report.all_passed();
    println!("{}/{} checks passed\n", report.passed, report.total());

    if !args.no_vectors {
        println!("SHA-256 test vectors (NIST FIPS 180-4):");
        println!("{}", "=".repeat(60));
        for (data, expected) in VECTORS {
            let got = hex_digest(data);
            let passed = got == expected;
            all_pass = all_pass && passed;
            println!("[{}]", if passed { "PASS" } else { "FAIL" });
            println!("  Input:    {:?}", String::from_utf8_lossy(data));
            println!("  Expected: {}", expected);
            println!("  Got:      {}", got);
        }
        println!();
    }

    println!("{}", "=".repeat(60));
    if all_pass {
        println!("Overall: all checks passed");
    } else {
        println!("Overall: some checks failed");
        std::process::exit(1);
    }
}
