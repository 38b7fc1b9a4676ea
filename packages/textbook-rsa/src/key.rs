use crate::errors::Error;

use num_bigint::BigUint;

/// Generic trait for operations on a public key.
pub trait PublicKey {
    fn encrypt(&self, plaintext: &str) -> Result<Vec<BigUint>, Error>;
}

/// Generic trait for operations on a private key.
pub trait PrivateKey {
    fn decrypt(&self, ciphertext: &[BigUint]) -> Result<String, Error>;
}
