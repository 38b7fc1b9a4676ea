use num_bigint::BigUint;
use thiserror::Error;

/// Error type for key generation and message encryption/decryption.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("key length has to be divisible by 2, got {0}")]
    OddKeyLength(u64),
    #[error("key length has to be at least 4 bits, got {0}")]
    KeyLengthTooSmall(u64),
    #[error("gave up key generation after {attempts} rejected attempts")]
    RetryBudgetExceeded { attempts: u64 },
    #[error("no {bit_size}-bit prime found among {candidates} candidates")]
    PrimeSearchExhausted { bit_size: u64, candidates: u64 },
    #[error("character {index} has code point {code}, which is not below the modulus {modulus}")]
    MessageOutOfRange { index: usize, code: u32, modulus: BigUint },
    #[error("decrypted value {0} is not a valid character")]
    InvalidCodePoint(BigUint),
}
