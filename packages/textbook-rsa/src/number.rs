use num_bigint::{BigInt, BigUint, ToBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Result of the extended Euclidean algorithm, `s * x + t * y = a = gcd(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedEuclid {
    pub a: BigInt,
    pub s: BigInt,
    pub t: BigInt,
}

/// Calculates `a = gcd(x, y)` together with the Bézout coefficients `s` and `t`.
///
/// Iterative version: the remainder pair `(a, b)` and the coefficient pairs
/// `(s, u)`, `(t, v)` are updated with the floor quotient `a div b` until `b = 0`.
///
/// # Reference
///
/// See algorithm 2.107 in "Handbook of Applied Cryptography" by Alfred J. Menezes et al.
///
/// # Examples
///
/// ```
/// use num_bigint::BigInt;
/// use textbook_rsa::number;
///
/// let result = number::extended_euclid(&BigInt::from(7), &BigInt::from(120));
///
/// assert_eq!(result.a, BigInt::from(1));
/// assert_eq!(result.s, BigInt::from(-17));
/// assert_eq!(result.t, BigInt::from(1));
/// ```
pub fn extended_euclid(x: &BigInt, y: &BigInt) -> ExtendedEuclid {
    let mut a = x.clone();
    let mut b = y.clone();
    let mut s = BigInt::one();
    let mut t = BigInt::zero();
    let mut u = BigInt::zero();
    let mut v = BigInt::one();

    while !b.is_zero() {
        let q = a.div_floor(&b);

        let r = &a - &q * &b;
        a = std::mem::replace(&mut b, r);

        let u1 = &s - &q * &u;
        s = std::mem::replace(&mut u, u1);

        let v1 = &t - &q * &v;
        t = std::mem::replace(&mut v, v1);
    }

    ExtendedEuclid { a, s, t }
}

/// Calculation of multiplicative inverses in ℤm.
/// Returns `x` in `[0, m)` such that `a * x ≡ 1 (mod m)`, or `None` when `gcd(a, m) ≠ 1`.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use textbook_rsa::number;
///
/// let phi = BigUint::from(120u32);
///
/// assert_eq!(number::mod_inverse(&BigUint::from(7u32), &phi), Some(BigUint::from(103u32)));
/// assert_eq!(number::mod_inverse(&BigUint::from(6u32), &phi), None);
/// ```
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    if m.is_zero() {
        return None;
    }

    let m = m.to_bigint()?;
    let ExtendedEuclid { a: gcd, s, .. } = extended_euclid(&a.to_bigint()?, &m);

    if gcd.is_one() {
        s.mod_floor(&m).to_biguint()
    } else {
        None
    }
}

/// Modular exponentiation, `x^exponent mod modulus`.
///
/// Works on the reduced value at every step; the full power is never formed.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn mod_exp(x: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    x.modpow(exponent, modulus)
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_extended_euclid_textbook_values() {
        let result = extended_euclid(&BigInt::from(240), &BigInt::from(46));
        assert_eq!(result.a, BigInt::from(2));
        assert_eq!(result.s, BigInt::from(-9));
        assert_eq!(result.t, BigInt::from(47));
    }

    #[test]
    fn test_extended_euclid_with_zero() {
        let result = extended_euclid(&BigInt::from(0), &BigInt::from(120));
        assert_eq!(result.a, BigInt::from(120));

        let result = extended_euclid(&BigInt::from(35), &BigInt::from(0));
        assert_eq!(result, ExtendedEuclid { a: BigInt::from(35), s: BigInt::one(), t: BigInt::zero() });
    }

    #[test]
    fn test_mod_inverse_of_textbook_exponent() {
        let inverse = mod_inverse(&BigUint::from(7u32), &BigUint::from(120u32));
        assert_eq!(inverse, Some(BigUint::from(103u32)));
        assert_eq!((BigUint::from(7u32) * BigUint::from(103u32)) % BigUint::from(120u32), BigUint::one());
    }

    #[test]
    fn test_mod_exp_small_values() {
        let m = BigUint::from(72u32);
        let n = BigUint::from(143u32);

        let c = mod_exp(&m, &BigUint::from(7u32), &n);
        assert_eq!(c, BigUint::from(72u32).pow(7u32) % &n);
        assert_eq!(mod_exp(&c, &BigUint::from(103u32), &n), m);
        assert_eq!(mod_exp(&m, &BigUint::zero(), &n), BigUint::one());
    }

    proptest! {
        #[test]
        fn test_extended_euclid(n1 in any::<u64>(), n2 in any::<u64>()) {
            let x = BigInt::from(n1);
            let y = BigInt::from(n2);

            let ExtendedEuclid { a, s, t } = extended_euclid(&x, &y);
            prop_assert_eq!(&s * &x + &t * &y, a.clone());
            prop_assert_eq!(a, x.gcd(&y));
        }

        #[test]
        fn test_extended_euclid_is_idempotent(n1 in any::<u32>(), n2 in any::<u32>()) {
            let x = BigInt::from(n1);
            let y = BigInt::from(n2);

            prop_assert_eq!(extended_euclid(&x, &y), extended_euclid(&x, &y));
        }

        #[test]
        fn test_mod_inverse(a in 0u64..1_000_000, m in 2u64..1_000_000) {
            let a = BigUint::from(a);
            let m = BigUint::from(m);

            match mod_inverse(&a, &m) {
                Some(x) => {
                    prop_assert!(x < m);
                    prop_assert_eq!((&a * x) % &m, BigUint::one());
                },
                None => prop_assert!(!a.gcd(&m).is_one())
            }
        }

        #[test]
        fn test_mod_exp(x in 0u32..1000, exponent in 0u32..16, modulus in 1u32..10_000) {
            let expected = BigUint::from(x).pow(exponent) % BigUint::from(modulus);
            prop_assert_eq!(
                mod_exp(&BigUint::from(x), &BigUint::from(exponent), &BigUint::from(modulus)),
                expected
            );
        }
    }
}
