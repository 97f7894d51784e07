//! Input validation for VINs and owner attributes.

/// Maximum VIN length, matching the width of the `vin` column.
pub const MAX_VIN_LENGTH: usize = 100;

/// Validates that a VIN is between 1 and [`MAX_VIN_LENGTH`] characters.
///
/// Length is counted in characters, not bytes. No normalisation is applied: VIN lookups are
/// exact and case-sensitive, so `"abc"` and `"ABC"` are distinct VINs.
///
/// # Example
/// ```ignore
/// assert!(is_valid_vin("1HGCM82633A004352"));
/// assert!(!is_valid_vin(""));
/// ```
pub fn is_valid_vin(vin: &str) -> bool {
    let len = vin.chars().count();

    (1..=MAX_VIN_LENGTH).contains(&len)
}

/// Validates that an owner email is present.
///
/// Format checks are left to whoever sends the confirmation mail; the store only needs a
/// non-blank value to key owners on.
pub fn is_valid_email(email: &str) -> bool {
    !email.trim().is_empty()
}
