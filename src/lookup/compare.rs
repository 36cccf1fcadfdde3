// src/lookup/compare.rs

use std::str::FromStr;

use anyhow::anyhow;

/// How a key cell is matched against the requested value.
///
/// `ExactString` and `ApproximateString` both compare ASCII case-insensitively;
/// the two names are kept so callers written against either keep working.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompareCriteria {
    ExactString,
    ApproximateString,
    Integer,
}

impl CompareCriteria {
    /// Numeric codes as used by C-style callers: 0, 1, 2. Anything else is unknown.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(CompareCriteria::ExactString),
            1 => Some(CompareCriteria::ApproximateString),
            2 => Some(CompareCriteria::Integer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompareCriteria::ExactString => "exact",
            CompareCriteria::ApproximateString => "approx",
            CompareCriteria::Integer => "integer",
        }
    }
}

impl FromStr for CompareCriteria {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" | "exactstring" | "exact_string" => Ok(CompareCriteria::ExactString),
            "approx" | "approximate" | "approximatestring" | "approx_string" => {
                Ok(CompareCriteria::ApproximateString)
            }
            "integer" | "int" => Ok(CompareCriteria::Integer),
            other => Err(anyhow!("unknown comparison mode `{}`", other)),
        }
    }
}

/// Compare a table cell with a target value under `criteria`.
pub fn compare(field: &str, target: &str, criteria: CompareCriteria) -> bool {
    match criteria {
        CompareCriteria::ExactString | CompareCriteria::ApproximateString => {
            field.eq_ignore_ascii_case(target)
        }
        CompareCriteria::Integer => atoi(field) == atoi(target),
    }
}

/// Mode from a name (`"integer"`) or numeric code (`"2"`); `None` when unrecognized.
pub fn parse_mode(mode: &str) -> Option<CompareCriteria> {
    match mode.trim().parse::<i32>() {
        Ok(code) => CompareCriteria::from_code(code),
        Err(_) => mode.parse().ok(),
    }
}

/// Same as [`compare`] for a possibly unrecognized mode; an unknown mode never matches.
pub fn compare_opt(field: &str, target: &str, criteria: Option<CompareCriteria>) -> bool {
    criteria.map_or(false, |c| compare(field, target, c))
}

/// Lenient integer parse: skips leading whitespace, takes an optional sign and
/// the longest run of digits. No digits gives 0; overflow saturates.
pub fn atoi(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }
    value
}
