//! Decoding of raw SCPI response lines into typed values.
//!
//! The 9151 answers every query with a single ASCII line. A line carries one
//! token, or several tokens separated by commas (`*IDN?` for example). Each
//! token is classified independently by the lexical rules in [`decode`], so
//! decoding is a pure function of the response text.

use core::fmt;

/// A decoded SCPI response token, or a comma-separated group of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `ON` / `OFF`.
    Bool(bool),
    /// A numeric token carrying a decimal point or an exponent, e.g. `1.230E+01`.
    Float(f64),
    /// A numeric token with digits only (optional sign), e.g. `42`.
    Int(i64),
    /// The instrument's null sentinels `N` and `----`.
    None,
    /// Anything else, verbatim.
    Str(String),
    /// A multi-token response, one element per token, order preserved.
    Tuple(Vec<Value>),
}

impl Value {
    /// Numeric view of this value. `Int` coerces to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Boolean view. The instrument reports switch state as `ON`/`OFF` in
    /// some firmware revisions and as `0`/`1` in others, so both are accepted.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Int(0) => Some(false),
            Value::Int(1) => Some(true),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Re-encodes the value in the instrument's own syntax, so that a decoded
/// single token survives a `to_string()`/[`decode`] round trip unchanged.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(true) => f.write_str("ON"),
            Value::Bool(false) => f.write_str("OFF"),
            // A whole-number float must keep its decimal point or it would
            // re-decode as an integer.
            Value::Float(v) if v.fract() == 0.0 && v.is_finite() => write!(f, "{v:.1}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::None => f.write_str("----"),
            Value::Str(s) => f.write_str(s),
            Value::Tuple(values) => {
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{v}")?;
                }
                Ok(())
            }
        }
    }
}

/// Decodes one raw response line.
///
/// The line is split on commas and each token is trimmed and classified
/// independently, in priority order: `ON`/`OFF` (exact match), the null
/// sentinels `N` and `----`, float (numeric with `.` or `E`/`e`), integer,
/// and finally the token verbatim as a string. A single token is returned
/// unwrapped; several become an ordered [`Value::Tuple`].
///
/// Decoding never fails: a token that fits no other rule falls through to
/// [`Value::Str`]. A token that is empty after trimming (including the one
/// implied by a trailing comma) decodes to `Str("")`.
pub fn decode(raw: &str) -> Value {
    let mut values: Vec<Value> = raw.split(',').map(|t| classify(t.trim())).collect();
    if values.len() > 1 {
        Value::Tuple(values)
    } else {
        values.pop().unwrap_or(Value::Str(String::new()))
    }
}

fn classify(token: &str) -> Value {
    match token {
        "ON" => return Value::Bool(true),
        "OFF" => return Value::Bool(false),
        "N" | "----" => return Value::None,
        _ => {}
    }
    if token.contains(['.', 'e', 'E']) {
        if let Ok(f) = token.parse::<f64>() {
            return Value::Float(f);
        }
    }
    if let Ok(i) = token.parse::<i64>() {
        return Value::Int(i);
    }
    Value::Str(token.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booleans() {
        assert_eq!(decode("ON"), Value::Bool(true));
        assert_eq!(decode("OFF"), Value::Bool(false));
        // Exact match only; anything else is a plain string.
        assert_eq!(decode("on"), Value::Str("on".into()));
    }

    #[test]
    fn null_sentinels() {
        assert_eq!(decode("N"), Value::None);
        assert_eq!(decode("----"), Value::None);
    }

    #[test]
    fn floats() {
        assert_eq!(decode("1.230E+01"), Value::Float(12.30));
        assert_eq!(decode("4.50"), Value::Float(4.5));
        assert_eq!(decode("-0.5"), Value::Float(-0.5));
        assert_eq!(decode("1e3"), Value::Float(1000.0));
    }

    #[test]
    fn integers() {
        assert_eq!(decode("42"), Value::Int(42));
        assert_eq!(decode("-7"), Value::Int(-7));
        assert_eq!(decode("+3"), Value::Int(3));
        // No decimal point and no exponent means integer, not float.
        assert!(matches!(decode("42"), Value::Int(_)));
    }

    #[test]
    fn string_fallback() {
        assert_eq!(decode("hello"), Value::Str("hello".into()));
        assert_eq!(decode("1.2.3"), Value::Str("1.2.3".into()));
        assert_eq!(decode("9151"), Value::Int(9151));
        assert_eq!(decode("FIXED"), Value::Str("FIXED".into()));
    }

    #[test]
    fn tuple_order_preserved() {
        assert_eq!(
            decode("4.50,ON,N"),
            Value::Tuple(vec![Value::Float(4.5), Value::Bool(true), Value::None])
        );
    }

    #[test]
    fn tokens_are_trimmed() {
        assert_eq!(
            decode(" 4.50 , ON "),
            Value::Tuple(vec![Value::Float(4.5), Value::Bool(true)])
        );
    }

    #[test]
    fn empty_tokens_decode_to_empty_strings() {
        assert_eq!(decode(""), Value::Str(String::new()));
        assert_eq!(decode("   "), Value::Str(String::new()));
        // A trailing comma implies a trailing empty token.
        assert_eq!(
            decode("1,"),
            Value::Tuple(vec![Value::Int(1), Value::Str(String::new())])
        );
        assert_eq!(
            decode("1,,2"),
            Value::Tuple(vec![
                Value::Int(1),
                Value::Str(String::new()),
                Value::Int(2)
            ])
        );
    }

    #[test]
    fn single_token_reencode_is_idempotent() {
        for raw in ["ON", "OFF", "N", "----", "1.230E+01", "42", "-7", "hello", "12.0"] {
            let first = decode(raw);
            let second = decode(&first.to_string());
            assert_eq!(first, second, "round trip diverged for {raw:?}");
        }
    }

    #[test]
    fn idn_style_tuple() {
        let decoded = decode("BK PRECISION, 9151, 373B14188, 1.10-1.04");
        assert_eq!(
            decoded,
            Value::Tuple(vec![
                Value::Str("BK PRECISION".into()),
                Value::Int(9151),
                Value::Str("373B14188".into()),
                Value::Str("1.10-1.04".into())
            ])
        );
    }

    #[test]
    fn numeric_views() {
        assert_eq!(Value::Float(4.5).as_f64(), Some(4.5));
        assert_eq!(Value::Int(42).as_f64(), Some(42.0));
        assert_eq!(Value::Int(1).as_bool(), Some(true));
        assert_eq!(Value::Int(0).as_bool(), Some(false));
        assert_eq!(Value::Bool(false).as_bool(), Some(false));
        assert_eq!(Value::Str("x".into()).as_f64(), None);
    }
}
