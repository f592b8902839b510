//! The ordered list of available filters.
//!
//! Purely declarative: the pipeline engine walks [`ALL`] or looks filters
//! up by name, then constructs instances through each descriptor.

use crate::filter::FilterDesc;
use crate::not_null::NOT_NULL_DESC;

/// All registered filters, in registry order.
pub static ALL: &[FilterDesc] = &[NOT_NULL_DESC];

/// Look a filter up by name, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static FilterDesc> {
    ALL.iter().find(|desc| desc.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_name() {
        assert_eq!(find("not_null").unwrap().name, "not_null");
    }

    #[test]
    fn test_find_ignores_case() {
        assert_eq!(find("NOT_NULL").unwrap().name, "not_null");
    }

    #[test]
    fn test_find_unknown() {
        assert!(find("ghost").is_none());
    }

    #[test]
    fn test_descriptors_are_complete() {
        for desc in ALL {
            assert!(!desc.name.is_empty());
            assert!(!desc.help.is_empty());
        }
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert!(!a.name.eq_ignore_ascii_case(b.name));
            }
        }
    }
}
