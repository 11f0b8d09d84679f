//! Beaufort wind force classification

/// Label used when the scale value falls outside the table
pub const UNKNOWN_BEAUFORT_LABEL: &str = "Unknown";

/// Descriptions for Beaufort forces 0 through 12, indexed by force
pub const BEAUFORT_DESCRIPTIONS: [&str; 13] = [
    "Calm",
    "Light air",
    "Light breeze",
    "Gentle breeze",
    "Moderate breeze",
    "Fresh breeze",
    "Strong breeze",
    "Near gale",
    "Gale",
    "Strong gale",
    "Storm",
    "Violent storm",
    "Hurricane force",
];

/// Highest force on the Beaufort scale
pub const BEAUFORT_MAX: i32 = 12;

/// Look up the description for a Beaufort force
///
/// Values outside `0..=12` yield [`UNKNOWN_BEAUFORT_LABEL`].
#[must_use]
pub fn beaufort_description(scale: i32) -> &'static str {
    usize::try_from(scale)
        .ok()
        .and_then(|index| BEAUFORT_DESCRIPTIONS.get(index))
        .copied()
        .unwrap_or(UNKNOWN_BEAUFORT_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_thirteen_entries() {
        assert_eq!(BEAUFORT_DESCRIPTIONS.len(), 13);
        assert_eq!(BEAUFORT_DESCRIPTIONS.len() - 1, BEAUFORT_MAX as usize);
    }

    #[test]
    fn calm_and_hurricane() {
        assert_eq!(beaufort_description(0), "Calm");
        assert_eq!(beaufort_description(12), "Hurricane force");
    }

    #[test]
    fn fresh_breeze_is_five() {
        assert_eq!(beaufort_description(5), "Fresh breeze");
    }

    #[test]
    fn out_of_range_is_unknown() {
        assert_eq!(beaufort_description(-1), UNKNOWN_BEAUFORT_LABEL);
        assert_eq!(beaufort_description(13), UNKNOWN_BEAUFORT_LABEL);
        assert_eq!(beaufort_description(i32::MAX), UNKNOWN_BEAUFORT_LABEL);
    }
}
