// crates/riskglobe-core/src/normalize.rs

/// Placeholder the boundary dataset uses when no ISO code is assigned.
pub const UNASSIGNED_CODE: &str = "-99";

/// Countries whose `ISO_A2` is left as [`UNASSIGNED_CODE`] upstream.
/// Matched on the exact display name.
const CODE_PATCHES: &[(&str, &str)] = &[("France", "FR"), ("Norway", "NO")];

/// Returns the code used to join a boundary feature against the score table.
///
/// ```rust
/// use riskglobe_core::normalize::normalize_code;
///
/// assert_eq!(normalize_code("-99", "France"), "FR");
/// assert_eq!(normalize_code("US", "France"), "US");
/// assert_eq!(normalize_code("-99", "Somaliland"), "-99");
/// ```
pub fn normalize_code<'a>(raw: &'a str, name: &str) -> &'a str {
    if raw != UNASSIGNED_CODE {
        return raw;
    }
    CODE_PATCHES
        .iter()
        .find(|(patched_name, _)| *patched_name == name)
        .map(|(_, code)| *code)
        .unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patched_countries() {
        assert_eq!(normalize_code("-99", "France"), "FR");
        assert_eq!(normalize_code("-99", "Norway"), "NO");
    }

    #[test]
    fn unknown_names_keep_the_sentinel() {
        assert_eq!(normalize_code("-99", "Someplace"), "-99");
        assert_eq!(normalize_code("-99", "france"), "-99");
    }

    #[test]
    fn assigned_codes_pass_through() {
        assert_eq!(normalize_code("US", "anything"), "US");
        assert_eq!(normalize_code("NO", "France"), "NO");
    }
}
