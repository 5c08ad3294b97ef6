//! BC postal address generator.
//!
//! A single noise draw per address picks the layout:
//!
//! | draw            | layout                                    |
//! |-----------------|-------------------------------------------|
//! | `[0, 0.125)`    | street line, then `Apt 512` style unit    |
//! | `[0.125, 0.25)` | `Apt 512 1234 Main St` / `Apt 512, 1234…` |
//! | `[0.25, 0.5)`   | `512-1234 Main St`                        |
//! | `[0.5, 1)`      | `1234 Main St`                            |

use super::{pick, random_digit, random_letter, rounded_uniform};
use crate::reference::ReferenceData;
use rand::Rng;

/// Province code for every generated address.
pub const PROVINCE: &str = "BC";

/// First letter of every BC postal code.
pub const POSTAL_LEADING_LETTER: char = 'V';

const UNIT_LABELS: [&str; 6] = ["Apt ", "apt ", "Unit ", "unit ", "suite ", "Suite "];

const LINE_SEPARATORS: [&str; 2] = [" ", ", "];

const SEPARATE_UNIT_BELOW: f64 = 0.125;
const UNIT_FIRST_BELOW: f64 = 0.25;
const UNIT_PREFIX_BELOW: f64 = 0.5;

/// How the street line and unit are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressLayout {
    /// Street line followed by a labelled unit, or a separate `address2`.
    SeparateUnit,
    /// Labelled unit before the street line.
    UnitFirst,
    /// Bare `NNN-` unit prefix glued to the street line.
    UnitPrefix,
    /// Street line only.
    StreetOnly,
}

impl AddressLayout {
    /// Map a noise draw in `[0, 1)` to a layout.
    pub fn from_noise(noise: f64) -> Self {
        if noise < SEPARATE_UNIT_BELOW {
            AddressLayout::SeparateUnit
        } else if noise < UNIT_FIRST_BELOW {
            AddressLayout::UnitFirst
        } else if noise < UNIT_PREFIX_BELOW {
            AddressLayout::UnitPrefix
        } else {
            AddressLayout::StreetOnly
        }
    }
}

/// Address split into the five exported columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressParts {
    pub address1: String,
    /// Empty unless the layout keeps the unit separate.
    pub address2: String,
    pub city: String,
    pub province: String,
    pub postal: String,
}

/// Generate an address as separate columns.
pub fn generate_split_address<R: Rng + ?Sized>(
    rng: &mut R,
    reference: &ReferenceData,
) -> AddressParts {
    let layout = AddressLayout::from_noise(rng.gen());

    let (address1, address2) = match layout {
        AddressLayout::SeparateUnit => {
            let street = street_line(rng, reference.streets());
            (street, labelled_unit(rng))
        }
        _ => (composite_line(rng, layout, reference.streets()), String::new()),
    };

    AddressParts {
        address1,
        address2,
        city: pick(rng, reference.cities()).clone(),
        province: PROVINCE.to_string(),
        postal: postal_code(rng),
    }
}

/// Generate an address as one comma separated string, e.g.
/// `1234 Main St, Vancouver, BC V6B 1A1`.
pub fn generate_single_address<R: Rng + ?Sized>(rng: &mut R, reference: &ReferenceData) -> String {
    let layout = AddressLayout::from_noise(rng.gen());

    let line = single_line(rng, layout, reference.streets());
    let city = pick(rng, reference.cities());
    let postal = postal_code(rng);

    format!("{line}, {city}, {PROVINCE} {postal}")
}

/// Street number and street name, e.g. `1234 Main St`.
fn street_line<R: Rng + ?Sized>(rng: &mut R, streets: &[String]) -> String {
    let number = rounded_uniform(rng, 1.0, 20000.0);
    format!("{number} {}", pick(rng, streets))
}

fn unit_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let floor = rounded_uniform(rng, 1.0, 16.0);
    let door = rounded_uniform(rng, 1.0, 20.0);
    format!("{floor}{door}")
}

/// Unit with a descriptive label, e.g. `Suite 1204`.
fn labelled_unit<R: Rng + ?Sized>(rng: &mut R) -> String {
    let number = unit_number(rng);
    format!("{}{number}", pick(rng, &UNIT_LABELS))
}

/// Unit as a bare prefix, e.g. `1204-`.
fn bare_unit<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}-", unit_number(rng))
}

/// Street line with the unit folded in according to `layout`.
fn composite_line<R: Rng + ?Sized>(
    rng: &mut R,
    layout: AddressLayout,
    streets: &[String],
) -> String {
    match layout {
        AddressLayout::UnitFirst => {
            let unit = labelled_unit(rng);
            let separator = pick(rng, &LINE_SEPARATORS);
            format!("{unit}{separator}{}", street_line(rng, streets))
        }
        AddressLayout::UnitPrefix => {
            let unit = bare_unit(rng);
            format!("{unit}{}", street_line(rng, streets))
        }
        AddressLayout::SeparateUnit | AddressLayout::StreetOnly => street_line(rng, streets),
    }
}

/// Full first line of a one-line address. A separate unit trails the street.
fn single_line<R: Rng + ?Sized>(
    rng: &mut R,
    layout: AddressLayout,
    streets: &[String],
) -> String {
    match layout {
        AddressLayout::SeparateUnit => {
            let street = street_line(rng, streets);
            let separator = pick(rng, &LINE_SEPARATORS);
            format!("{street}{separator}{}", labelled_unit(rng))
        }
        _ => composite_line(rng, layout, streets),
    }
}

/// Postal code like `V6B1A1` or `V6B 1A1`.
fn postal_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut postal = String::with_capacity(7);
    postal.push(POSTAL_LEADING_LETTER);
    postal.push(random_digit(rng));
    postal.push(random_letter(rng));

    let local = [random_digit(rng), random_letter(rng), random_digit(rng)];
    if rng.gen::<f64>() <= 0.5 {
        postal.push(' ');
    }
    postal.extend(local);
    postal
}
