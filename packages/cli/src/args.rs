use clap::Parser;
use num_bigint::BigUint;
use textbook_rsa::rsa::{KeyGenOptions, DEFAULT_KEY_LENGTH};

pub const DEFAULT_MESSAGE: &str = "Hello World!";

/// Generates a textbook RSA key pair and runs a message through it.
#[derive(Debug, Parser)]
#[command(name = "textbook-rsa", version)]
pub struct Args {
    /// Key length in bit, has to be divisible by 2
    #[arg(long, value_name = "BITS", default_value_t = DEFAULT_KEY_LENGTH)]
    pub length: u64,

    /// Fixed public exponent instead of a random one
    #[arg(long = "e", value_name = "E")]
    pub e_override: Option<BigUint>,

    /// Message to encrypt
    #[arg(long, value_name = "TEXT", default_value = DEFAULT_MESSAGE)]
    pub message: String,

    /// Give up key generation after this many rejected key attempts (p, q, e)
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<u64>,

    /// Give up a single prime search after this many composite candidates
    #[arg(long, value_name = "N")]
    pub max_prime_candidates: Option<u64>,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the report on a single line
    #[arg(long)]
    pub compact: bool,
}

impl Args {
    pub fn key_gen_options(&self) -> KeyGenOptions {
        KeyGenOptions {
            bit_length: self.length,
            e_override: self.e_override.clone(),
            max_attempts: self.max_attempts,
            max_prime_candidates: self.max_prime_candidates,
        }
    }
}
