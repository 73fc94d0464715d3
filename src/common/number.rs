//! Number-to-text conversions that match what a browser shows.

/// Shortest round-trip text for `value`, as JavaScript's `String(number)` prints it.
///
/// `-0` prints as `0`, and magnitudes at or above `1e21` or below `1e-6` use
/// exponent form (`1e+21`, `1e-7`).
pub(crate) fn js_number(value: f64) -> String {
    if value == 0.0 { return "0".to_string() }
    if value.is_nan() { return "NaN".to_string() }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        };
    }
    format!("{value}")
}

/// `value` with exactly `digits` fractional digits, as `Number.prototype.toFixed`.
///
/// Exact halfway cases round away from zero (`0.125` -> `"0.13"`).
pub(crate) fn js_to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || value.abs() >= 1e21 {
        return js_number(value);
    }

    let magnitude = value.abs();
    // Wide enough to expose every digit of a tie between 0.005 and 1e21.
    let exact = format!("{magnitude:.60}");
    let (int_part, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let tie = frac.get(digits..).is_some_and(|tail| {
        tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0')
    });
    let text = match frac.get(..digits) {
        Some(kept) if tie => increment_decimal(int_part, kept),
        _ => format!("{magnitude:.digits$}"),
    };

    if value < 0.0 { format!("-{text}") } else { text }
}

/// Add one unit in the last place to `int_part.frac`.
fn increment_decimal(int_part: &str, frac: &str) -> String {
    let mut digits: Vec<u8> = int_part.bytes().chain(frac.bytes()).collect();

    let mut carry = true;
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            carry = false;
            break;
        }
    }
    if carry { digits.insert(0, b'1') }

    let split = digits.len() - frac.len();
    let int: String = digits[..split].iter().map(|&b| b as char).collect();
    if frac.is_empty() { return int }
    let rest: String = digits[split..].iter().map(|&b| b as char).collect();
    format!("{int}.{rest}")
}
