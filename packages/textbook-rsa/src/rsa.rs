use crate::codec;
use crate::errors::Error;
use crate::key::{PrivateKey, PublicKey};
use crate::number;
use crate::prime;
use crate::report::decimal;

use log::{debug, trace};
use num_bigint::{BigUint, RandBigInt, ToBigInt};
use num_traits::{One, Zero};
use rand::Rng;
use serde::Serialize;

/// Default length of the modulus in bits.
pub const DEFAULT_KEY_LENGTH: u64 = 16;

/// Represents the public key `(e, N)` of textbook RSA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RsaPublicKey {
    #[serde(serialize_with = "decimal::serialize")]
    e: BigUint,
    #[serde(rename = "N", serialize_with = "decimal::serialize")]
    n: BigUint,
}

impl RsaPublicKey {
    pub fn new(e: BigUint, n: BigUint) -> Self {
        RsaPublicKey { e, n }
    }

    pub fn e(&self) -> &BigUint {
        &self.e
    }

    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Encrypts a single value, `m^e mod N`.
    ///
    /// `m` is not checked against the modulus; values `≥ N` do not survive a round trip.
    pub fn encrypt_number(&self, m: &BigUint) -> BigUint {
        number::mod_exp(m, &self.e, &self.n)
    }
}

impl PublicKey for RsaPublicKey {
    /// Encrypts every character of `plaintext` on its own.
    ///
    /// # Arguments
    ///
    /// * `plaintext` - Plaintext to encrypt.
    ///
    /// # Errors
    ///
    /// [`Error::MessageOutOfRange`] if a code point is not below the modulus.
    /// Nothing is encrypted in that case.
    fn encrypt(&self, plaintext: &str) -> Result<Vec<BigUint>, Error> {
        let codes = codec::to_code_points(plaintext);

        let out_of_range =
            codes.iter().enumerate().find(|&(_, &code)| BigUint::from(code) >= self.n);
        if let Some((index, &code)) = out_of_range {
            return Err(Error::MessageOutOfRange { index, code, modulus: self.n.clone() });
        }

        Ok(codes.into_iter().map(|code| self.encrypt_number(&BigUint::from(code))).collect())
    }
}

/// Represents the private key `(d, N)` of textbook RSA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RsaPrivateKey {
    #[serde(serialize_with = "decimal::serialize")]
    d: BigUint,
    #[serde(rename = "N", serialize_with = "decimal::serialize")]
    n: BigUint,
}

impl RsaPrivateKey {
    pub fn new(d: BigUint, n: BigUint) -> Self {
        RsaPrivateKey { d, n }
    }

    pub fn d(&self) -> &BigUint {
        &self.d
    }

    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Decrypts a single value, `c^d mod N`.
    pub fn decrypt_number(&self, c: &BigUint) -> BigUint {
        number::mod_exp(c, &self.d, &self.n)
    }
}

impl PrivateKey for RsaPrivateKey {
    /// Decrypts every value of `ciphertext` on its own and reads the results as code points.
    ///
    /// # Arguments
    ///
    /// * `ciphertext` - Ciphertext to decrypt.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCodePoint`] if a decrypted value is not a Unicode scalar value.
    fn decrypt(&self, ciphertext: &[BigUint]) -> Result<String, Error> {
        let codes: Vec<BigUint> = ciphertext.iter().map(|c| self.decrypt_number(c)).collect();
        codec::from_code_points(&codes)
    }
}

/// Public and private key generated together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    public: RsaPublicKey,
    private: RsaPrivateKey,
}

impl KeyPair {
    pub fn public(&self) -> &RsaPublicKey {
        &self.public
    }

    pub fn private(&self) -> &RsaPrivateKey {
        &self.private
    }

    /// Derives the keys for the primes `p`, `q` and the public exponent `e`.
    ///
    /// `d` is the Bézout coefficient of `e` as returned by
    /// [`number::extended_euclid`], taken as is. Returns `None` unless
    /// `p ≠ q`, `gcd(e, φ) = 1`, `e < φ` and `d ≥ 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use num_bigint::BigUint;
    /// use textbook_rsa::rsa::KeyPair;
    ///
    /// let (p, q, e) = (BigUint::from(13u32), BigUint::from(11u32), BigUint::from(103u32));
    /// let keys = KeyPair::from_primes(&p, &q, &e).unwrap();
    /// assert_eq!(keys.public().n(), &BigUint::from(143u32));
    /// assert_eq!(keys.private().d(), &BigUint::from(7u32));
    /// ```
    pub fn from_primes(p: &BigUint, q: &BigUint, e: &BigUint) -> Option<KeyPair> {
        if p == q {
            return None;
        }

        let n = p * q;
        let phi = totient(p, q);

        let number::ExtendedEuclid { a, s, .. } =
            number::extended_euclid(&e.to_bigint()?, &phi.to_bigint()?);

        // e and phi are coprime
        if !a.is_one() || e >= &phi {
            return None;
        }

        // d has to be positive to be used as exponent
        let d = s.to_biguint().filter(|d| !d.is_zero())?;

        Some(KeyPair {
            public: RsaPublicKey::new(e.clone(), n.clone()),
            private: RsaPrivateKey::new(d, n),
        })
    }
}

/// Parameters of a key generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyGenOptions {
    /// Length of the modulus in bits, each prime gets half of it.
    pub bit_length: u64,
    /// Public exponent used for every attempt instead of a random one.
    pub e_override: Option<BigUint>,
    /// Number of rejected key attempts after which generation gives up, `None` for no limit.
    pub max_attempts: Option<u64>,
    /// Number of rejected candidates after which a single prime search gives up,
    /// `None` for no limit.
    pub max_prime_candidates: Option<u64>,
}

impl Default for KeyGenOptions {
    fn default() -> Self {
        KeyGenOptions {
            bit_length: DEFAULT_KEY_LENGTH,
            e_override: None,
            max_attempts: None,
            max_prime_candidates: None,
        }
    }
}

impl KeyGenOptions {
    pub fn new(bit_length: u64) -> Self {
        KeyGenOptions { bit_length, ..Default::default() }
    }

    pub fn with_e(mut self, e: BigUint) -> Self {
        self.e_override = Some(e);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn with_max_prime_candidates(mut self, max_prime_candidates: u64) -> Self {
        self.max_prime_candidates = Some(max_prime_candidates);
        self
    }

    /// Checks the key length: it has to be even and leave at least 2 bits per prime.
    pub fn validate(&self) -> Result<(), Error> {
        if self.bit_length % 2 != 0 {
            Err(Error::OddKeyLength(self.bit_length))
        } else if self.bit_length < 4 {
            Err(Error::KeyLengthTooSmall(self.bit_length))
        } else {
            Ok(())
        }
    }
}

/// Generates public and private keys.
///
/// Every attempt draws two primes of `bit_length / 2` bits and a public
/// exponent (random in `[0, φ)` unless overridden), then keeps the result of
/// [`KeyPair::from_primes`]. Rejected attempts are thrown away completely.
///
/// # Arguments
///
/// * `options` - Key length, exponent override and retry budgets.
/// * `rng` - Source of randomness for primes and exponents.
///
/// # Errors
///
/// The key length is validated before any prime is drawn. Without a retry
/// budget the search does not terminate if `e_override` is never coprime with
/// the totient (any even `e`, for example); with `max_attempts` it fails with
/// [`Error::RetryBudgetExceeded`] once that many attempts were rejected.
/// Composite prime candidates do not count as attempts, they are limited by
/// `max_prime_candidates` per prime and end in [`Error::PrimeSearchExhausted`].
///
/// # Reference
///
/// See algorithm 8.1 in "Handbook of Applied Cryptography" by Alfred J. Menezes et al.
pub fn generate_keys<R: Rng + ?Sized>(
    options: &KeyGenOptions,
    rng: &mut R,
) -> Result<KeyPair, Error> {
    options.validate()?;

    let prime_bits = options.bit_length / 2;
    let mut attempts = 0u64;

    loop {
        if options.max_attempts.is_some_and(|max| attempts >= max) {
            return Err(Error::RetryBudgetExceeded { attempts });
        }

        let p = prime::generate_prime(prime_bits, rng, options.max_prime_candidates)?;
        let q = prime::generate_prime(prime_bits, rng, options.max_prime_candidates)?;

        let e = match &options.e_override {
            Some(e) => e.clone(),
            None => random_exponent(&totient(&p, &q), rng),
        };

        match KeyPair::from_primes(&p, &q, &e) {
            Some(keys) => {
                debug!(
                    "generated {}-bit keys after {} rejected attempts",
                    options.bit_length, attempts
                );
                return Ok(keys);
            }
            None => trace!("rejected p = {}, q = {}, e = {}", p, q, e),
        }

        attempts += 1;
    }
}

/// Euler's totient of `p * q` for primes `p` and `q`.
fn totient(p: &BigUint, q: &BigUint) -> BigUint {
    let one = BigUint::one();
    (p - &one) * (q - &one)
}

/// Uniformly random value in `[0, phi)`, or zero if `phi` is zero.
fn random_exponent<R: Rng + ?Sized>(phi: &BigUint, rng: &mut R) -> BigUint {
    if phi.is_zero() {
        BigUint::zero()
    } else {
        rng.gen_biguint_below(phi)
    }
}
