//! Duration values accepted by cache directives.
//!
//! A duration is either a number of seconds or a short string such as `90s`,
//! `5m`, `2h`, `1d` or `1w`. Strings made only of digits are read as seconds.

use serde::{Deserialize, Serialize};

use crate::error::CacheError;

/// Multipliers for the supported unit suffixes.
const SECONDS_PER_UNIT: [(char, u64); 5] = [
    ('s', 1),
    ('m', 60),
    ('h', 3_600),
    ('d', 86_400),
    ('w', 604_800),
];

/// Raw duration as supplied by a caller or a config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    /// Convert to whole seconds.
    pub fn to_seconds(&self) -> Result<u64, CacheError> {
        match self {
            DurationValue::Seconds(secs) => Ok(*secs),
            DurationValue::Text(text) => parse_duration(text),
        }
    }
}

impl From<u64> for DurationValue {
    fn from(secs: u64) -> Self {
        DurationValue::Seconds(secs)
    }
}

impl From<&str> for DurationValue {
    fn from(text: &str) -> Self {
        DurationValue::Text(text.to_string())
    }
}

impl From<String> for DurationValue {
    fn from(text: String) -> Self {
        DurationValue::Text(text)
    }
}

impl std::fmt::Display for DurationValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DurationValue::Seconds(secs) => write!(f, "{secs}"),
            DurationValue::Text(text) => write!(f, "{text}"),
        }
    }
}

/// Convert an optional duration; absence stays absent.
pub fn convert_to_seconds(value: Option<&DurationValue>) -> Result<Option<u64>, CacheError> {
    value.map(DurationValue::to_seconds).transpose()
}

/// Parse `<int>` or `<int><unit>` into seconds.
pub fn parse_duration(raw: &str) -> Result<u64, CacheError> {
    let text = raw.trim();
    let invalid = || CacheError::InvalidDurationFormat(raw.to_string());
    let overflow = || CacheError::DurationOverflow(raw.to_string());

    let Some((unit_at, unit)) = text.char_indices().last() else {
        return Err(invalid());
    };

    if unit.is_ascii_digit() {
        return parse_digits(text).ok_or_else(invalid)?.ok_or_else(overflow);
    }

    let multiplier = unit_multiplier(unit).ok_or_else(invalid)?;
    let amount = parse_digits(&text[..unit_at])
        .ok_or_else(invalid)?
        .ok_or_else(overflow)?;

    amount.checked_mul(multiplier).ok_or_else(overflow)
}

fn unit_multiplier(unit: char) -> Option<u64> {
    SECONDS_PER_UNIT
        .iter()
        .find(|(suffix, _)| *suffix == unit)
        .map(|(_, secs)| *secs)
}

/// `None` when the text is not a plain run of digits, `Some(None)` on overflow.
fn parse_digits(text: &str) -> Option<Option<u64>> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(text.parse::<u64>().ok())
}

#[cfg(test)]
mod tests {
    use super::{DurationValue, convert_to_seconds, parse_duration};
    use crate::CacheError;

    #[test]
    fn absent_stays_absent() {
        assert_eq!(convert_to_seconds(None).expect("no error"), None);
    }

    #[test]
    fn integers_pass_through() {
        let value = DurationValue::from(120);
        assert_eq!(convert_to_seconds(Some(&value)).expect("valid"), Some(120));
        assert_eq!(parse_duration("120").expect("valid"), 120);
        assert_eq!(parse_duration(" 45 ").expect("valid"), 45);
    }

    #[test]
    fn unit_suffixes() {
        assert_eq!(parse_duration("90s").expect("valid"), 90);
        assert_eq!(parse_duration("5m").expect("valid"), 300);
        assert_eq!(parse_duration("2h").expect("valid"), 7_200);
        assert_eq!(parse_duration("1d").expect("valid"), 86_400);
        assert_eq!(parse_duration("1w").expect("valid"), 604_800);
        assert_eq!(parse_duration("0h").expect("valid"), 0);
    }

    #[test]
    fn unknown_suffix_is_an_error() {
        let err = parse_duration("3y").expect_err("y is not a unit");
        assert!(matches!(err, CacheError::InvalidDurationFormat(ref v) if v == "3y"));
        assert!(matches!(
            parse_duration("1H"),
            Err(CacheError::InvalidDurationFormat(_))
        ));
    }

    #[test]
    fn malformed_amounts_are_errors() {
        for raw in ["", "   ", "h", "-5m", "1.5h", "ten", "5 m"] {
            assert!(
                matches!(parse_duration(raw), Err(CacheError::InvalidDurationFormat(_))),
                "expected '{raw}' to be rejected"
            );
        }
    }

    #[test]
    fn overflow_is_reported() {
        assert!(matches!(
            parse_duration("99999999999999999999"),
            Err(CacheError::DurationOverflow(_))
        ));
        assert!(matches!(
            parse_duration("18446744073709551615w"),
            Err(CacheError::DurationOverflow(_))
        ));
    }
}
