//! Fill a buffer with random values and report its zero tail and
//! trailing-zero-bit total through the C ABI.
//!
//! ```sh
//! cargo run --release -p zerocount-bench --example random_tail -- [len] [seed]
//! ```

use std::fmt::Display;
use std::process::ExitCode;
use std::str::FromStr;

use zerocount_ffi::{tail_zero_count, trailing_zero_bits};
use zerocount_test_utils::random_buffer;

fn parse_arg<T>(args: &[String], idx: usize, default: T) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    match args.get(idx) {
        Some(s) => s
            .parse()
            .map_err(|e| format!("argument {idx} ({s:?}): {e}")),
        None => Ok(default),
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let (len, seed) = match (
        parse_arg::<usize>(&args, 1, 1_000_000),
        parse_arg::<u64>(&args, 2, 0),
    ) {
        (Ok(len), Ok(seed)) => (len, seed),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("random_tail: {e}");
            return ExitCode::FAILURE;
        }
    };

    let buf = random_buffer(len, seed);
    let tail = tail_zero_count(buf.as_ptr(), buf.len());
    let bits = trailing_zero_bits(buf.as_ptr(), buf.len());

    println!("elements:           {len}");
    println!("seed:               {seed}");
    println!("tail zero elements: {tail}");
    println!("trailing zero bits: {bits}");
    ExitCode::SUCCESS
}
