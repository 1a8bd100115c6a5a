//! Request handlers, one submodule per resource.
//!
//! Every handler follows the same cycle: load the document, apply a
//! repository mutation (which also records the activity entry), persist the
//! document, respond. Mutations go through [`Database::transact`] so they
//! are serialized.
//!
//! [`Database::transact`]: folio_db::Database::transact

pub mod activity;
pub mod client;
pub mod contact;
pub mod newsletter;
pub mod project;

use folio_core::error::CoreError;
use folio_core::types::DbId;

use crate::error::AppError;

/// Read the leading integer of a path id.
///
/// Leading whitespace is skipped, then an optional sign and the longest run
/// of digits are taken (`0x` selects hex). Trailing text is ignored, so
/// `"2abc"` and `"2.5"` both read as `2`. Returns `None` when no digits
/// lead the segment or the value does not fit a [`DbId`].
pub(crate) fn parse_id(raw: &str) -> Option<DbId> {
    let rest = raw.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    let magnitude = DbId::from_str_radix(&rest[..end], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

pub(crate) fn not_found(entity: &'static str, raw_id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity,
        id: raw_id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers() {
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id(" 3 "), Some(3));
        assert_eq!(parse_id("+4"), Some(4));
        assert_eq!(parse_id("-1"), Some(-1));
    }

    #[test]
    fn parse_id_takes_leading_digits() {
        assert_eq!(parse_id("2abc"), Some(2));
        assert_eq!(parse_id("1.5"), Some(1));
        assert_eq!(parse_id("007"), Some(7));
        assert_eq!(parse_id("0x1f"), Some(31));
    }

    #[test]
    fn parse_id_rejects_non_numeric() {
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("-"), None);
        assert_eq!(parse_id("0x"), None);
        assert_eq!(parse_id("a1"), None);
        assert_eq!(parse_id("99999999999999999999"), None);
    }
}
