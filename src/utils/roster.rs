#![forbid(unsafe_code)]

use lazy_static::lazy_static;

// ***************************************************************************
//                                Constants
// ***************************************************************************
// Names as enrolled, lowercase, in roster order.
const ROSTER_NAMES: [&str; 26] = [
    "ashley", "brandon", "carmen", "darius", "elena", "felix", "gabriela",
    "henry", "imani", "jacob", "keisha", "liam", "maria", "nathan", "olivia",
    "priya", "quentin", "rosa", "samuel", "tanya", "umar", "valerie",
    "wesley", "ximena", "yusuf", "zoe",
];

// ***************************************************************************
//                             Static Variables
// ***************************************************************************
// The roster is fixed at process start and never mutated.
lazy_static! {
    pub static ref ROSTER: Vec<&'static str> = ROSTER_NAMES.to_vec();
}

// ***************************************************************************
// GENERAL PUBLIC FUNCTIONS
// ***************************************************************************
// ---------------------------------------------------------------------------
// is_enrolled:
// ---------------------------------------------------------------------------
/** Determine membership in the class roster.  Matching is exact and
 * case-sensitive.
 */
pub fn is_enrolled(name: &str) -> bool {
    ROSTER.iter().any(|n| *n == name)
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_has_26_lowercase_names() {
        assert_eq!(ROSTER.len(), 26);
        for name in ROSTER.iter() {
            assert_eq!(*name, name.to_lowercase());
        }
    }

    #[test]
    fn every_roster_name_is_enrolled() {
        for name in ROSTER.iter() {
            assert!(is_enrolled(name), "missing roster name: {}", name);
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(is_enrolled("ashley"));
        assert!(!is_enrolled("Ashley"));
        assert!(!is_enrolled("ASHLEY"));
    }

    #[test]
    fn unknown_names_are_not_enrolled() {
        assert!(!is_enrolled("drake"));
        assert!(!is_enrolled(""));
        assert!(!is_enrolled("zoë"));
        assert!(!is_enrolled("ashley "));
    }
}
