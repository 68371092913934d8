// Type conversions
//
// ToBoolean, ToNumber, ToString, ToPrimitive and friends. Errors are returned
// without a span; the evaluator attaches the span of the failing node.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{RuntimeError, RuntimeResult};
use crate::value::{Object, Value};

/// Preferred result type of `to_primitive`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    Default,
    Number,
    String,
}

/// Result of ToNumeric: arithmetic runs on one of these
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Number(f64),
    BigInt(i128),
}

/// Dates outside ±8.64e15 ms are invalid
const MAX_TIME_MS: f64 = 8.64e15;

pub fn to_boolean(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null => false,
        Value::Boolean(b) => *b,
        Value::Number(n) => !(n.is_nan() || *n == 0.0),
        Value::BigInt(n) => *n != 0,
        Value::String(s) => !s.is_empty(),
        Value::Symbol(_) | Value::Object(_) | Value::Function(_) => true,
    }
}

pub fn to_primitive(value: &Value, hint: Hint) -> RuntimeResult<Value> {
    let object = match value {
        Value::Object(object) => object,
        Value::Function(function) => return Ok(Value::String(function.source_text())),
        primitive => return Ok(primitive.clone()),
    };

    let primitive = match &**object {
        Object::Boxed(inner) => inner.clone(),
        Object::Date(time) => match hint {
            Hint::Number => Value::Number(*time),
            Hint::Default | Hint::String => Value::String(date_to_string(*time)),
        },
        Object::Array(items) => Value::String(join(items)?),
        Object::RegExp { source, flags } => Value::String(format!("/{}/{}", source, flags)),
        Object::Error { .. } => Value::String(object.to_string()),
        other => Value::String(format!("[object {}]", other.class_name())),
    };
    Ok(primitive)
}

pub fn to_number(value: &Value) -> RuntimeResult<f64> {
    match value {
        Value::Undefined => Ok(f64::NAN),
        Value::Null => Ok(0.0),
        Value::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => Ok(*n),
        Value::String(s) => Ok(string_to_number(s)),
        Value::BigInt(_) => Err(RuntimeError::type_error(
            "Cannot convert a BigInt value to a number",
        )),
        Value::Symbol(_) => Err(RuntimeError::type_error(
            "Cannot convert a Symbol value to a number",
        )),
        Value::Object(_) | Value::Function(_) => to_number(&to_primitive(value, Hint::Number)?),
    }
}

pub fn to_numeric(value: &Value) -> RuntimeResult<Numeric> {
    match to_primitive(value, Hint::Number)? {
        Value::BigInt(n) => Ok(Numeric::BigInt(n)),
        primitive => to_number(&primitive).map(Numeric::Number),
    }
}

pub fn to_string(value: &Value) -> RuntimeResult<String> {
    match value {
        Value::Undefined => Ok("undefined".to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Boolean(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(number_to_string(*n)),
        Value::BigInt(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
        Value::Symbol(_) => Err(RuntimeError::type_error(
            "Cannot convert a Symbol value to a string",
        )),
        Value::Object(_) | Value::Function(_) => to_string(&to_primitive(value, Hint::String)?),
    }
}

/// Array.prototype.join with the default separator
fn join(items: &[Value]) -> RuntimeResult<String> {
    let parts = items
        .iter()
        .map(|item| {
            if item.is_nullish() {
                Ok(String::new())
            } else {
                to_string(item)
            }
        })
        .collect::<RuntimeResult<Vec<_>>>()?;
    Ok(parts.join(","))
}

/// StringToNumber: blank is 0, anything unparsable is NaN
pub fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&trimmed[2..], radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }

    // Rust also accepts "inf" and "nan", which are not numeric literals here
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// StringToBigInt: `None` when the text is not an integer literal
pub fn string_to_bigint(s: &str) -> Option<i128> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    if trimmed.starts_with('+') {
        return None;
    }
    trimmed.parse::<i128>().ok()
}

/// Number::toString for radix 10.
///
/// Starts from the shortest round-trip digits and places the decimal point
/// the way JavaScript does: plain notation for exponents in [-7, 21), `1e+21`
/// style otherwise.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let sign = if n < 0.0 { "-" } else { "" };
    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit
    let point = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat(point.unsigned_abs() as usize), digits)
    } else {
        let e = point - 1;
        let e_sign = if e < 0 { '-' } else { '+' };
        match digits.split_at(1) {
            (first, "") => format!("{}e{}{}", first, e_sign, e.abs()),
            (first, rest) => format!("{}.{}e{}{}", first, rest, e_sign, e.abs()),
        }
    };
    format!("{}{}", sign, body)
}

/// TimeClip: non-finite or out-of-range times become NaN
pub fn time_clip(time: f64) -> f64 {
    if !time.is_finite() || time.abs() > MAX_TIME_MS {
        f64::NAN
    } else {
        time.trunc()
    }
}

fn to_datetime(time: f64) -> Option<DateTime<Utc>> {
    if time.is_nan() {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(time as i64)
}

/// Date.prototype.toString, rendered in UTC
pub fn date_to_string(time: f64) -> String {
    match to_datetime(time) {
        Some(dt) => dt
            .format("%a %b %d %Y %H:%M:%S GMT+0000 (Coordinated Universal Time)")
            .to_string(),
        None => "Invalid Date".to_string(),
    }
}

pub fn date_to_iso_string(time: f64) -> Option<String> {
    to_datetime(time).map(|dt| dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
}

/// Date string parsing: ISO 8601 forms first, then RFC 2822. NaN when unparsable.
pub fn parse_date(s: &str) -> f64 {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.timestamp_millis() as f64;
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return naive.and_utc().timestamp_millis() as f64;
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return midnight.and_utc().timestamp_millis() as f64;
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return dt.timestamp_millis() as f64;
    }
    f64::NAN
}

/// MakeDate from (year, monthIndex, day, hours, minutes, seconds, ms) in UTC.
/// Months and days may overflow into the next unit.
pub fn make_date(parts: &[f64]) -> f64 {
    if parts.is_empty() || parts.iter().any(|p| !p.is_finite()) {
        return f64::NAN;
    }

    let part = |i: usize, default: f64| parts.get(i).copied().unwrap_or(default).trunc();
    let mut year = part(0, 0.0);
    // Two-digit years map to 1900-1999
    if (0.0..=99.0).contains(&year) {
        year += 1900.0;
    }
    let month = part(1, 0.0);
    let day = part(2, 1.0);

    let year = year + (month / 12.0).floor();
    let month = month.rem_euclid(12.0);
    let Some(first) = NaiveDate::from_ymd_opt(year as i32, month as u32 + 1, 1) else {
        return f64::NAN;
    };
    let Some(midnight) = first.and_hms_opt(0, 0, 0) else {
        return f64::NAN;
    };

    let days_ms = (day - 1.0) * 86_400_000.0;
    let time_ms = part(3, 0.0) * 3_600_000.0
        + part(4, 0.0) * 60_000.0
        + part(5, 0.0) * 1_000.0
        + part(6, 0.0);
    time_clip(midnight.and_utc().timestamp_millis() as f64 + days_ms + time_ms)
}
