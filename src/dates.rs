//! Date Format Conversion
//!
//! Tasks store `dd/mm/yyyy`; the date input works in `yyyy-mm-dd`.
//! Conversion only reorders the parts and happens at the form boundary.

use tracing::warn;

/// `dd/mm/yyyy` -> `yyyy-mm-dd`
pub fn to_form(stored: &str) -> String {
    reorder(stored, '/', '-')
}

/// `yyyy-mm-dd` -> `dd/mm/yyyy`
pub fn to_stored(form: &str) -> String {
    reorder(form, '-', '/')
}

/// Reverse three `from`-separated parts and join them with `to`
fn reorder(value: &str, from: char, to: char) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }

    let parts: Vec<&str> = value.split(from).collect();
    match parts.as_slice() {
        [a, b, c] => format!("{c}{to}{b}{to}{a}"),
        _ => {
            warn!("[DATES] Ignoring malformed date {:?}", value);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_form() {
        assert_eq!(to_form("05/11/2024"), "2024-11-05");
    }

    #[test]
    fn test_to_stored() {
        assert_eq!(to_stored("2024-11-05"), "05/11/2024");
    }

    #[test]
    fn test_round_trip() {
        for stored in ["01/01/2000", "31/12/1999", "29/02/2024", "07/08/2031"] {
            assert_eq!(to_stored(&to_form(stored)), stored);
        }
    }

    #[test]
    fn test_empty_and_malformed() {
        assert_eq!(to_form(""), "");
        assert_eq!(to_stored("   "), "");
        assert_eq!(to_form("tomorrow"), "");
        assert_eq!(to_stored("2024-11"), "");
    }
}
