//! Splits a user string into an optional PMU prefix, an event token, and
//! an ordered list of attribute tokens.

use crate::error::{PfmError, Result};

#[derive(Debug, Clone)]
pub struct AttrToken {
    pub name: String,
    /// `None` for a bareword (`k`, `ANY_P`, `0xff`); `Some(_)` for
    /// `name=value`.
    pub value: Option<String>,
}

#[derive(Debug)]
pub struct ParsedName {
    pub pmu: Option<String>,
    pub event: String,
    pub attrs: Vec<AttrToken>,
}

/// Tokenizes `input`: a PMU prefix before the first `::`, an event token
/// up to the next `:`/`,`/end, then `:`-separated attribute tokens. A
/// comma is a hard terminator -- everything from the first comma onward
/// (wherever it falls, even mid-token) is dropped.
pub fn tokenize(input: &str) -> Result<ParsedName> {
    if input.is_empty() {
        return Err(PfmError::Inval);
    }
    if input.chars().any(|c| c.is_whitespace()) {
        return Err(PfmError::Inval);
    }

    let cut = match input.find(',') {
        Some(idx) => &input[..idx],
        None => input,
    };

    let (pmu, rest) = match cut.find("::") {
        Some(idx) => (Some(cut[..idx].to_string()), &cut[idx + 2..]),
        None => (None, cut),
    };

    let mut parts = rest.split(':');
    let event = parts.next().unwrap_or("").to_string();
    if event.is_empty() {
        return Err(PfmError::Inval);
    }

    let mut attrs = Vec::new();
    for part in parts {
        if part.is_empty() {
            continue;
        }
        match part.find('=') {
            Some(idx) => {
                let (name, value) = (part[..idx].to_string(), &part[idx + 1..]);
                if value.is_empty() {
                    return Err(PfmError::AttrVal);
                }
                attrs.push(AttrToken {
                    name,
                    value: Some(value.to_string()),
                });
            }
            None => attrs.push(AttrToken {
                name: part.to_string(),
                value: None,
            }),
        }
    }

    Ok(ParsedName { pmu, event, attrs })
}

/// Parses a decimal or `0x`-prefixed hexadecimal integer literal. A
/// malformed literal is `ATTR_VAL` (it is syntactically present but not a
/// valid number), distinct from an unrecognized bareword attribute.
pub fn parse_intlit(s: &str) -> Result<u64> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).map_err(|_| PfmError::AttrVal)
    } else {
        s.parse::<u64>().map_err(|_| PfmError::AttrVal)
    }
}
