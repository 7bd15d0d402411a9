use clap::{Parser, Subcommand};
use log::debug;

use sha_bitops::word::{format_word, parse_word, Word};
use sha_bitops::{ch, checked_rotr, checked_shr, maj, parity, BitopsError};

// Words accept decimal, negative, or 0x hex of any size and are taken mod 2^32.
//cargo run --package sha_bitops --example word_ops -- rotr 0x12345678 4
#[derive(Parser, Debug)]
pub struct Args {
    #[command(subcommand)]
    op: Op,
}

#[derive(Subcommand, Debug)]
enum Op {
    /// Rotate right by n bits, n in [0, 32)
    Rotr {
        #[arg(value_parser = parse_word, allow_hyphen_values = true)]
        x: Word,
        #[arg(allow_hyphen_values = true)]
        n: i64,
    },
    /// Logical shift right by n bits, n in [0, 32)
    Shr {
        #[arg(value_parser = parse_word, allow_hyphen_values = true)]
        x: Word,
        #[arg(allow_hyphen_values = true)]
        n: i64,
    },
    /// x ^ y ^ z
    Parity {
        #[arg(value_parser = parse_word, allow_hyphen_values = true)]
        x: Word,
        #[arg(value_parser = parse_word, allow_hyphen_values = true)]
        y: Word,
        #[arg(value_parser = parse_word, allow_hyphen_values = true)]
        z: Word,
    },
    /// Bits of y where x is 1, bits of z elsewhere
    Ch {
        #[arg(value_parser = parse_word, allow_hyphen_values = true)]
        x: Word,
        #[arg(value_parser = parse_word, allow_hyphen_values = true)]
        y: Word,
        #[arg(value_parser = parse_word, allow_hyphen_values = true)]
        z: Word,
    },
    /// Bitwise majority of x, y, z
    Maj {
        #[arg(value_parser = parse_word, allow_hyphen_values = true)]
        x: Word,
        #[arg(value_parser = parse_word, allow_hyphen_values = true)]
        y: Word,
        #[arg(value_parser = parse_word, allow_hyphen_values = true)]
        z: Word,
    },
    /// Reduce an integer mod 2^32
    ToUint32 {
        #[arg(value_parser = parse_word, allow_hyphen_values = true)]
        x: Word,
    },
}

fn eval(op: &Op) -> Result<Word, BitopsError> {
    match *op {
        Op::Rotr { x, n } => checked_rotr(x, n),
        Op::Shr { x, n } => checked_shr(x, n),
        Op::Parity { x, y, z } => Ok(parity(x, y, z)),
        Op::Ch { x, y, z } => Ok(ch(x, y, z)),
        Op::Maj { x, y, z } => Ok(maj(x, y, z)),
        Op::ToUint32 { x } => Ok(x),
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    debug!("{:?}", args.op);

    match eval(&args.op) {
        Ok(w) => println!("{} ({})", format_word(w), w),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    }
}
