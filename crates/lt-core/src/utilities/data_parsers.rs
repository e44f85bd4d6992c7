//! Data parsing helpers.
//!
//! Dates arrive from the input boundary as ISO text, selections as
//! kebab-case identifiers. These helpers do the lexical part; range
//! checking belongs to the types that consume the output.

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success. Only the shape is checked here;
/// whether the day exists is left to `Date::from_ymd`.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let mut parts = s.split('-');
    let (y, m, d) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || y.len() != 4 || m.len() != 2 || d.len() != 2 {
        return None;
    }
    let year: u16 = y.parse().ok()?;
    let month: u8 = m.parse().ok()?;
    let day: u8 = d.parse().ok()?;
    Some((year, month, day))
}

/// Normalise a selection identifier: trimmed, lower-case, with `_` and
/// spaces folded into `-`.
///
/// `"Owned_Terminal"` and `" owned terminal "` both become
/// `"owned-terminal"`.
pub fn normalize_identifier(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}
