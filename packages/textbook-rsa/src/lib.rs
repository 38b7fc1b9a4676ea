//! # Textbook RSA
//!
//! `textbook_rsa` generates small RSA keys from two random primes and
//! encrypts text one character at a time with modular exponentiation.
//! There is no padding and the randomness is not cryptographically secure,
//! so this is only meant for demonstrating how the arithmetic works.
//!
//! ```
//! use rand::thread_rng;
//! use textbook_rsa::key::{PrivateKey, PublicKey};
//! use textbook_rsa::rsa::{self, KeyGenOptions};
//!
//! let keys = rsa::generate_keys(&KeyGenOptions::new(16), &mut thread_rng()).unwrap();
//! let ciphertext = keys.public().encrypt("Hello World!").unwrap();
//!
//! assert_eq!(keys.private().decrypt(&ciphertext).unwrap(), "Hello World!");
//! ```

/// Conversion between text and code points.
pub mod codec;
/// Errors during key generation, encryption and decryption.
pub mod errors;
/// Generic traits for operations on keys.
pub mod key;
/// Number theoric functions.
pub mod number;
/// Prime generation and primality testing functions.
pub mod prime;
/// Result of an encrypt/decrypt run.
pub mod report;
/// Textbook RSA key generation and per-character encryption.
pub mod rsa;
