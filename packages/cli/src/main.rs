mod args;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use rand::{thread_rng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::time::Instant;
use textbook_rsa::key::{PrivateKey, PublicKey};
use textbook_rsa::report::Report;
use textbook_rsa::rsa;

use crate::args::Args;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let report = match args.seed {
        Some(seed) => run(&args, &mut ChaCha20Rng::seed_from_u64(seed))?,
        None => run(&args, &mut thread_rng())?,
    };

    if !report.equal() {
        warn!("decrypted message differs from the input: {:?}", report.decrypted());
    }

    let output = if args.compact {
        serde_json::to_string(&report)
    } else {
        serde_json::to_string_pretty(&report)
    }
    .context("could not serialize report")?;

    println!("{}", output);
    Ok(())
}

/// Generates keys, encrypts the message, decrypts it again and collects everything in a report.
fn run<R: Rng + ?Sized>(args: &Args, rng: &mut R) -> Result<Report> {
    let options = args.key_gen_options();
    options.validate().context("invalid key length")?;

    let start = Instant::now();
    let keys = rsa::generate_keys(&options, rng).context("could not generate keys")?;
    info!("Generate: {:?}", start.elapsed());

    let start = Instant::now();
    let ciphertext = keys.public().encrypt(&args.message).context("could not encrypt message")?;
    info!("Encrypt: {:?}", start.elapsed());

    let start = Instant::now();
    let decrypted = keys.private().decrypt(&ciphertext).context("could not decrypt message")?;
    info!("Decrypt: {:?}", start.elapsed());

    Ok(Report::new(args.message.as_str(), ciphertext, decrypted)
        .with_keys(&keys)
        .with_length(options.bit_length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::DEFAULT_MESSAGE;
    use num_bigint::BigUint;
    use textbook_rsa::errors::Error;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("textbook-rsa").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);

        assert_eq!(args.length, 16);
        assert_eq!(args.message, DEFAULT_MESSAGE);
        assert_eq!(args.e_override, None);
        assert_eq!(args.max_attempts, None);
        assert_eq!(args.max_prime_candidates, None);
        assert!(!args.compact);
    }

    #[test]
    fn test_parse_all_options() {
        let args = parse(&["--length=24", "--e=65537", "--message=Hi", "--max-attempts", "100", "--seed", "9"]);

        assert_eq!(args.length, 24);
        assert_eq!(args.e_override, Some(BigUint::from(65_537u32)));
        assert_eq!(args.message, "Hi");
        assert_eq!(args.max_attempts, Some(100));
        assert_eq!(args.seed, Some(9));
    }

    #[test]
    fn test_budgets_are_kept_apart() {
        let args = parse(&["--max-attempts=3", "--max-prime-candidates=50"]);
        let options = args.key_gen_options();

        assert_eq!(options.max_attempts, Some(3));
        assert_eq!(options.max_prime_candidates, Some(50));
    }

    #[test]
    fn test_key_attempt_budget_is_reported() {
        // an even exponent is never coprime with the totient
        let args = parse(&["--e=4", "--max-attempts=7"]);
        let err = run(&args, &mut ChaCha20Rng::seed_from_u64(0)).unwrap_err();

        assert_eq!(err.downcast_ref::<Error>(), Some(&Error::RetryBudgetExceeded { attempts: 7 }));
    }

    #[test]
    fn test_invalid_exponent_is_rejected() {
        let result = Args::try_parse_from(["textbook-rsa", "--e=-3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_odd_length_fails_fast() {
        let args = parse(&["--length=15"]);
        let err = run(&args, &mut ChaCha20Rng::seed_from_u64(0)).unwrap_err();

        assert_eq!(err.downcast_ref::<Error>(), Some(&Error::OddKeyLength(15)));
    }

    #[test]
    fn test_run_round_trips_default_message() {
        let args = parse(&["--seed=1"]);
        let report = run(&args, &mut ChaCha20Rng::seed_from_u64(1)).unwrap();

        assert!(report.equal());
        assert_eq!(report.decrypted(), DEFAULT_MESSAGE);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["ciphertext"].as_array().map(Vec::len), Some(DEFAULT_MESSAGE.len()));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let args = parse(&["--length=20"]);
        let first = run(&args, &mut ChaCha20Rng::seed_from_u64(11)).unwrap();
        let second = run(&args, &mut ChaCha20Rng::seed_from_u64(11)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_message_out_of_range_is_reported() {
        // 8-bit keys always have N = 143
        let args = parse(&["--length=8", "--message=ü"]);
        let err = run(&args, &mut ChaCha20Rng::seed_from_u64(2)).unwrap_err();

        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::MessageOutOfRange { code: 0xfc, .. })));
    }
}
