//! Integer → binary / hexadecimal conversion by repeated division.

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

fn to_radix(value: i128, radix: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut magnitude = value.unsigned_abs();
    let mut digits = Vec::new();
    while magnitude > 0 {
        let rem = (magnitude % radix) as usize;
        digits.push(HEX_DIGITS[rem] as char);
        magnitude /= radix;
    }

    if value < 0 {
        digits.push('-');
    }
    digits.iter().rev().collect()
}

/// Binary digits of `value`, with a leading `-` for negatives.
pub fn to_binary(value: i128) -> String {
    to_radix(value, 2)
}

/// Uppercase hexadecimal digits of `value`, with a leading `-` for negatives.
pub fn to_hexadecimal(value: i128) -> String {
    to_radix(value, 16)
}

/// One row of the conversion table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub value: i128,
    pub binary: String,
    pub hexadecimal: String,
}

impl Conversion {
    pub fn of(value: i128) -> Self {
        Self {
            value,
            binary: to_binary(value),
            hexadecimal: to_hexadecimal(value),
        }
    }
}
