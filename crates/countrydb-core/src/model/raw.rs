// crates/countrydb-core/src/model/raw.rs

//! Lenient decoding helpers for the service's loosely-typed JSON.
//!
//! Fields are accessed optimistically: a missing or `null` field becomes the
//! type's default rather than a decode error.

use serde::{Deserialize, Deserializer};

/// Treat `null` like an absent field.
pub(crate) fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// Population arrives as a number on the live service but as text in some
/// mirrors and fixtures; accept both.
pub(crate) fn lenient_population<'de, D>(d: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Population {
        Int(u64),
        Float(f64),
        Text(String),
    }

    Ok(match Option::<Population>::deserialize(d)? {
        Some(Population::Int(n)) => Some(n),
        Some(Population::Float(f)) if f.is_finite() && f >= 0.0 => Some(f.trunc() as u64),
        Some(Population::Float(_)) => None,
        Some(Population::Text(s)) => parse_leading_digits(&s),
        None => None,
    })
}

/// Parse the leading run of ASCII digits (`"8917205 people"` -> 8917205).
fn parse_leading_digits(s: &str) -> Option<u64> {
    let s = s.trim();
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    s[..end].parse().ok()
}

/// Body shape of endpoints that answer with either one object or an array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    // Tried first: derived structs also accept sequences.
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(t) => vec![t],
            OneOrMany::Many(v) => v,
        }
    }

    pub(crate) fn into_first(self) -> Option<T> {
        self.into_vec().into_iter().next()
    }
}
