use crate::errors::Error;

use log::trace;
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::Rng;

/// Returns `true` if no integer in `[2, floor(sqrt(x))]` divides `x`.
///
/// Plain trial division, so it is only practical for the small primes used here.
///
/// # Arguments
///
/// * `x` - number to test for primality.
///
/// # Assumptions
///
/// `x ≥ 2`. Smaller inputs are not rejected: `0` and `1` report `true`
/// because there is no candidate divisor to try.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use textbook_rsa::prime;
///
/// assert_eq!(prime::is_prime(&BigUint::from(128usize)), false);
/// assert_eq!(prime::is_prime(&BigUint::from(2969usize)), true);
/// ```
pub fn is_prime(x: &BigUint) -> bool {
    let two = BigUint::from(2usize);
    let root = x.sqrt();

    !num_iter::range_inclusive(two, root).any(|i| x.is_multiple_of(&i))
}

/// Generates a random prime number of the given bit size.
///
/// Candidates come from [`random_n_bit_number`] and are redrawn until one of
/// them passes [`is_prime`]. Even candidates are not skipped.
///
/// # Arguments
///
/// * `bit_size` - number of bits of the generated prime.
/// * `rng` - source of randomness; it does not have to be cryptographically secure.
/// * `max_candidates` - number of rejected candidates after which the search
///   gives up with [`Error::PrimeSearchExhausted`]. `None` searches forever.
///
/// # Assumptions
///
/// `bit_size > 1`. With `bit_size = 1` the only candidate is `1`.
///
/// # Panics
///
/// Panics if `bit_size` is zero.
pub fn generate_prime<R: Rng + ?Sized>(
    bit_size: u64,
    rng: &mut R,
    max_candidates: Option<u64>,
) -> Result<BigUint, Error> {
    let mut rejected = 0u64;

    loop {
        if max_candidates.is_some_and(|max| rejected >= max) {
            return Err(Error::PrimeSearchExhausted { bit_size, candidates: rejected });
        }

        let candidate = random_n_bit_number(bit_size, rng);
        if is_prime(&candidate) {
            trace!("{}-bit prime {} after {} rejected candidates", bit_size, candidate, rejected);
            return Ok(candidate);
        }

        rejected += 1;
    }
}

/// Generates a random number of the given bit size with the most significant bit set to 1.
///
/// Every other bit, the least significant one included, is uniformly random.
///
/// # Panics
///
/// Panics if `bit_size` is zero.
pub fn random_n_bit_number<R: Rng + ?Sized>(bit_size: u64, rng: &mut R) -> BigUint {
    let n = rng.gen_biguint(bit_size - 1);
    let msb = BigUint::one() << (bit_size - 1);
    n | msb
}
