//! Command-line interface for the TQC-135 cipher.
//!
//! ```text
//! tqc [e|d] message key
//! ```
//!
//! Message and key are encoded through the 125-symbol alphabet and padded
//! with zero digits; the block is transformed with the reference round
//! count and printed as grouped quinary digits followed by its symbol
//! rendering. Exit code 0 on success, 1 on invalid input characters.

use std::env;
use std::process::ExitCode;

use tqc::algorithms::codec;
use tqc::prelude::*;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 || !matches!(args[1].as_str(), "e" | "d") {
        let program = args.first().map(String::as_str).unwrap_or("tqc");
        println!("usage: {} [e|d] message key", program);
        return ExitCode::SUCCESS;
    }

    let mut block = match codec::encode_str(&args[2]) {
        Ok(digits) => digits,
        Err(_) => {
            println!("invalid message characters");
            return ExitCode::from(1);
        }
    };
    let key_digits = match codec::encode_str(&args[3]) {
        Ok(digits) => digits,
        Err(_) => {
            println!("invalid key characters");
            return ExitCode::from(1);
        }
    };

    if let Err(err) = transform(&mut block, &key_digits, &args[1]) {
        println!("{}", err);
        return ExitCode::from(1);
    }

    match codec::decode_digits(&block) {
        Ok(symbols) => println!("{}  {}", codec::format_digits(&block), symbols),
        Err(err) => {
            println!("{}", err);
            return ExitCode::from(1);
        }
    }
    ExitCode::SUCCESS
}

fn transform(block: &mut [u8], key_digits: &[u8], mode: &str) -> Result<()> {
    let key = QuinaryKey::from_slice(key_digits)?;
    let cipher = Tqc135::new(&key)?;
    match mode {
        "e" => cipher.encrypt_block(block),
        _ => cipher.decrypt_block(block),
    }
}
