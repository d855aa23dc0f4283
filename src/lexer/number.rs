//! Numeric literal scanning.
//!
//! Recognised forms:
//!
//! - hexadecimal: `0x1A`, `0xff_ff` (always [`NumericType::U32`])
//! - integer: `42`, `1_000` ([`NumericType::I32`]), `42u` ([`NumericType::U32`])
//! - fixed point: `3.14`, `.5`, `2.` ([`NumericType::F32`])
//! - exponent: `1e9`, `3.14e-2` ([`NumericType::F64`])
//!
//! `_` may appear anywhere in the digits of the mantissa. In an exponent it must
//! sit between two digits.
use super::{char_ext::CharExt, char_view::CharView, error::*, tokens::NumericType};

/// Whether the literal follows a `-` that was read as a sign.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sign {
    Unsigned,
    Negative,
}

#[derive(Debug, PartialEq)]
pub struct NumberLiteral {
    /// Position just past the last byte of the literal.
    pub end: usize,
    pub value: f64,
    pub ty: NumericType,
}

#[derive(Copy, Clone)]
enum Mode {
    Integer,
    Fraction,
}

/// Scans the numeric literal starting at `start`, which must be a digit or `.`.
pub fn scan_number(view: CharView, start: usize, sign: Sign) -> Result<NumberLiteral, LexError> {
    let literal = if view.is(start, b'0') && view.is(start + 1, b'x') {
        if sign == Sign::Negative {
            return Err(LexError::malformed_number(
                start,
                "a hexadecimal literal cannot carry a sign",
            ));
        }
        scan_hexadecimal(view, start + 2)?
    } else {
        scan_decimal(view, start, sign)?
    };

    check_trailing_context(view, literal.end)?;

    Ok(match sign {
        Sign::Unsigned => literal,
        Sign::Negative => NumberLiteral {
            value: -literal.value,
            ..literal
        },
    })
}

fn scan_hexadecimal(view: CharView, digits_start: usize) -> Result<NumberLiteral, LexError> {
    if !view.test(digits_start, CharExt::is_hex_digit) {
        return Err(LexError::malformed_number(
            digits_start,
            "expected a hexadecimal digit after `0x`",
        ));
    }

    let mut value = 0.0;
    let mut pos = digits_start;
    while let Some(ch) = view.at(pos) {
        match ch.hex_value() {
            Some(digit) => value = value * 16.0 + f64::from(digit),
            None if ch == b'_' => {}
            None => break,
        }
        pos += 1;
    }

    if view.test(pos, |&ch| ch == b'u' || ch == b'U') {
        return Err(LexError::malformed_number(
            pos,
            "a hexadecimal literal cannot take an unsigned suffix",
        ));
    }

    Ok(NumberLiteral {
        end: pos,
        value,
        ty: NumericType::U32,
    })
}

/// Digits are collected into a whole-number mantissa, with the count of those
/// after the decimal point kept apart, so the value is rounded only once.
fn scan_decimal(view: CharView, start: usize, sign: Sign) -> Result<NumberLiteral, LexError> {
    let mut mantissa = 0.0;
    let mut fraction_digits: i32 = 0;
    let mut mode = Mode::Integer;
    let mut pos = start;

    while let Some(ch) = view.at(pos) {
        match (mode, ch) {
            (_, b'0'..=b'9') => {
                mantissa = mantissa * 10.0 + digit_value(ch);
                if matches!(mode, Mode::Fraction) {
                    fraction_digits = fraction_digits.saturating_add(1);
                }
            }
            (_, b'_') => {}
            (Mode::Integer, b'.') => mode = Mode::Fraction,
            (Mode::Fraction, b'.') => {
                return Err(LexError::malformed_number(pos, "second decimal point"));
            }
            (_, b'e' | b'E') => {
                return scan_exponent(view, pos + 1, mantissa, fraction_digits);
            }
            (Mode::Integer, b'u' | b'U') => {
                if sign == Sign::Negative {
                    return Err(LexError::malformed_number(
                        pos,
                        "a negative literal cannot be unsigned",
                    ));
                }
                return Ok(NumberLiteral {
                    end: pos + 1,
                    value: mantissa,
                    ty: NumericType::U32,
                });
            }
            _ => break,
        }
        pos += 1;
    }

    Ok(NumberLiteral {
        end: pos,
        value: scale(mantissa, -fraction_digits),
        ty: match mode {
            Mode::Integer => NumericType::I32,
            Mode::Fraction => NumericType::F32,
        },
    })
}

/// Scans the exponent following an `e`/`E`, then scales `mantissa` by it,
/// less the `fraction_digits` it was collected with.
fn scan_exponent(
    view: CharView,
    start: usize,
    mantissa: f64,
    fraction_digits: i32,
) -> Result<NumberLiteral, LexError> {
    let negative = view.is(start, b'-');
    let mut pos = if negative { start + 1 } else { start };

    if !view.test(pos, CharExt::is_digit) {
        return Err(LexError::malformed_number(pos, "missing exponent digits"));
    }

    let mut exponent: i32 = 0;
    while let Some(ch) = view.at(pos) {
        match ch {
            b'0'..=b'9' => {
                exponent = exponent
                    .saturating_mul(10)
                    .saturating_add(i32::from(ch - b'0'))
            }
            b'_' if view.test(pos + 1, CharExt::is_digit) => {}
            b'_' => {
                return Err(LexError::malformed_number(
                    pos,
                    "`_` in an exponent must sit between two digits",
                ));
            }
            _ => break,
        }
        pos += 1;
    }

    let exponent = if negative { -exponent } else { exponent };
    Ok(NumberLiteral {
        end: pos,
        value: scale(mantissa, exponent.saturating_sub(fraction_digits)),
        ty: NumericType::F64,
    })
}

/// A finished literal may only be followed, after any dividers, by an
/// operator, a closing bracket or a separator.
fn check_trailing_context(view: CharView, end: usize) -> Result<(), LexError> {
    let next = view.skip_dividers(end);
    if view.test(next, |ch| !ch.can_follow_number()) {
        return Err(LexError::new(next.into(), ErrorType::InvalidNumberSuffix));
    }
    Ok(())
}

fn digit_value(ch: u8) -> f64 {
    f64::from(ch - b'0')
}

/// Computes `mantissa * 10^power`. Negative powers divide: `10^-n` has no
/// exact double.
fn scale(mantissa: f64, power: i32) -> f64 {
    if power < 0 {
        mantissa / 10f64.powi(power.saturating_neg())
    } else {
        mantissa * 10f64.powi(power)
    }
}
