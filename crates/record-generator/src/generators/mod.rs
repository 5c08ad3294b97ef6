//! Individual field generators.
//!
//! Each generator is a pure function of the RNG (plus reference lists or a
//! corpus where needed). Formatting noise is drawn from the same RNG as the
//! values, so a seeded RNG reproduces both.

pub mod address;
pub mod numeric;
pub mod person;
pub mod sin;

use rand::Rng;

/// Pick a random element from a non-empty slice.
pub(crate) fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Random ASCII digit.
pub(crate) fn random_digit<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'0' + rng.gen_range(0..10u8))
}

/// Random uppercase ASCII letter.
pub(crate) fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'A' + rng.gen_range(0..26u8))
}

/// Uniform draw in `[min, max]` rounded to the nearest integer.
pub(crate) fn rounded_uniform<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> u32 {
    rng.gen_range(min..=max).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_characters() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            assert!(random_digit(&mut rng).is_ascii_digit());
            assert!(random_letter(&mut rng).is_ascii_uppercase());
        }
    }

    #[test]
    fn test_rounded_uniform_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let value = rounded_uniform(&mut rng, 1.0, 16.0);
            assert!((1..=16).contains(&value));
        }
    }
}
