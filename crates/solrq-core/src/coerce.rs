//! Lenient numeric coercion for configuration values.
//!
//! Configuration files written for the search layer frequently carry numbers
//! as strings (`"3"`, `"10 "`). These helpers turn such strings into integers
//! without failing: the longest leading integer is taken and anything else
//! yields zero.

/// Parse the leading number of `input` as an integer, falling back to zero.
///
/// Leading whitespace is skipped and a single `+` or `-` sign is accepted.
/// A leading number written with a fraction or an exponent (`"2.5"`,
/// `"1e3"`) is truncated toward zero. Parsing stops at the first character
/// that cannot continue the number. Values beyond the `i64` range saturate.
///
/// # Examples
///
/// ```
/// use solrq_core::coerce::lenient_int;
///
/// assert_eq!(lenient_int("3"), 3);
/// assert_eq!(lenient_int(" 12abc"), 12);
/// assert_eq!(lenient_int("-4"), -4);
/// assert_eq!(lenient_int("1e3"), 1000);
/// assert_eq!(lenient_int("2.9"), 2);
/// assert_eq!(lenient_int("abc"), 0);
/// assert_eq!(lenient_int(""), 0);
/// ```
pub fn lenient_int(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let bytes = trimmed.as_bytes();

    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = sign_len + count_digits(&bytes[sign_len..]);
    if int_end == sign_len {
        return 0;
    }

    let mut end = int_end;
    let mut fractional = false;
    if bytes.get(end) == Some(&b'.') {
        let fraction_digits = count_digits(&bytes[end + 1..]);
        if fraction_digits > 0 {
            fractional = true;
            end += 1 + fraction_digits;
        }
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_start = end + 1;
        let exp_sign_len = usize::from(matches!(bytes.get(exp_start), Some(b'+' | b'-')));
        let exp_digits = count_digits(&bytes[exp_start + exp_sign_len..]);
        if exp_digits > 0 {
            fractional = true;
            end = exp_start + exp_sign_len + exp_digits;
        }
    }

    if fractional {
        return trimmed[..end].parse().map(truncate_float).unwrap_or(0);
    }

    let negative = bytes[0] == b'-';
    bytes[sign_len..int_end].iter().fold(0i64, |value, byte| {
        let digit = i64::from(byte - b'0');
        if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        }
    })
}

/// Truncate a float toward zero. NaN becomes zero and infinities saturate.
pub fn truncate_float(value: f64) -> i64 {
    if value.is_nan() { 0 } else { value as i64 }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parse `input` strictly as a whole integer.
///
/// Surrounding whitespace is ignored. Returns `None` when the string is not
/// entirely an integer.
pub fn strict_int(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

/// Returns true if `input` starts with an integer (after optional whitespace
/// and sign).
pub fn has_numeric_prefix(input: &str) -> bool {
    let trimmed = input.trim_start();
    let digits = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);
    digits.bytes().next().is_some_and(|b| b.is_ascii_digit())
}
