//! Social Insurance Number generator.
//!
//! A SIN is nine digits whose Luhn sum (weights 1,2,1,2,... from the left,
//! doubled values above 9 reduced by 9) is a multiple of 10. The first digit
//! is never 0 or 8.

use rand::Rng;

/// Number of digits in a SIN.
pub const SIN_LENGTH: usize = 9;

/// Digits a SIN may start with.
pub const LEADING_DIGITS: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 9];

/// Noise draws below this render as `XXX XXX XXX`.
const SPACED_BELOW: f64 = 0.33;

/// Noise draws above this render as `XXX-XXX-XXX`.
const HYPHENATED_ABOVE: f64 = 0.66;

/// Layout of a rendered SIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinFormat {
    /// `XXXXXXXXX`
    Plain,
    /// `XXX XXX XXX`
    Spaced,
    /// `XXX-XXX-XXX`
    Hyphenated,
}

impl SinFormat {
    /// Map a noise draw in `[0, 1)` to a layout.
    pub fn from_noise(noise: f64) -> Self {
        if noise < SPACED_BELOW {
            SinFormat::Spaced
        } else if noise > HYPHENATED_ABOVE {
            SinFormat::Hyphenated
        } else {
            SinFormat::Plain
        }
    }

    fn separator(self) -> Option<char> {
        match self {
            SinFormat::Plain => None,
            SinFormat::Spaced => Some(' '),
            SinFormat::Hyphenated => Some('-'),
        }
    }
}

/// Luhn sum over `digits`, doubling every second digit from the left.
pub fn luhn_sum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .enumerate()
        .map(|(position, &digit)| {
            let weighted = u32::from(digit) * if position % 2 == 1 { 2 } else { 1 };
            if weighted > 9 {
                weighted - 9
            } else {
                weighted
            }
        })
        .sum()
}

/// The digit that brings the Luhn sum of `payload` to a multiple of 10.
pub fn check_digit(payload: &[u8]) -> u8 {
    ((10 - luhn_sum(payload) % 10) % 10) as u8
}

/// Generate the nine digits of a valid SIN.
pub fn generate_sin_digits<R: Rng + ?Sized>(rng: &mut R) -> [u8; SIN_LENGTH] {
    let mut digits = [0u8; SIN_LENGTH];
    digits[0] = LEADING_DIGITS[rng.gen_range(0..LEADING_DIGITS.len())];
    for digit in digits.iter_mut().take(SIN_LENGTH - 1).skip(1) {
        *digit = rng.gen_range(0..10);
    }
    digits[SIN_LENGTH - 1] = check_digit(&digits[..SIN_LENGTH - 1]);
    digits
}

/// Render SIN digits in the given layout.
pub fn format_sin(digits: &[u8; SIN_LENGTH], format: SinFormat) -> String {
    let mut out = String::with_capacity(SIN_LENGTH + 2);
    for (position, &digit) in digits.iter().enumerate() {
        if position == 3 || position == 6 {
            if let Some(separator) = format.separator() {
                out.push(separator);
            }
        }
        out.push(char::from(b'0' + digit));
    }
    out
}

/// Generate a valid SIN with a randomly chosen layout.
pub fn generate_sin<R: Rng + ?Sized>(rng: &mut R) -> String {
    let digits = generate_sin_digits(rng);
    let format = SinFormat::from_noise(rng.gen());
    format_sin(&digits, format)
}

/// Check that `value` is a structurally valid SIN in one of the generated
/// layouts.
pub fn is_valid(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    let digits = match chars.len() {
        SIN_LENGTH => parse_digits(chars.iter()),
        11 => {
            let separator = chars[3];
            if !matches!(separator, ' ' | '-') || chars[7] != separator {
                return false;
            }
            parse_digits(
                chars
                    .iter()
                    .enumerate()
                    .filter(|(position, _)| *position != 3 && *position != 7)
                    .map(|(_, c)| c),
            )
        }
        _ => None,
    };

    match digits {
        Some(digits) => LEADING_DIGITS.contains(&digits[0]) && luhn_sum(&digits) % 10 == 0,
        None => false,
    }
}

fn parse_digits<'a>(chars: impl Iterator<Item = &'a char>) -> Option<Vec<u8>> {
    chars.map(|c| c.to_digit(10).map(|d| d as u8)).collect()
}
