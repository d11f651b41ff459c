//! Country name normalization service
//!
//! Maps historical country names to the canonical name used as the
//! grouping key, so that e.g. West German titles count towards Germany.

use crate::types::Role;

/// Historical name changes as `(role, recorded name, canonical name)`.
///
/// Czechoslovakia only ever appears as a runner-up, so it has no winner rule.
/// Keep the table as recorded; the asymmetry is part of the dataset.
pub const NAME_CHANGES: &[(Role, &str, &str)] = &[
    (Role::Winner, "West Germany", "Germany"),
    (Role::RunnerUp, "West Germany", "Germany"),
    (Role::RunnerUp, "Czechoslovakia", "Czech Republic"),
];

/// Normalize a recorded country name to its canonical form for `role`.
///
/// Surrounding whitespace is trimmed; names without a rule pass through.
///
/// # Examples
/// ```
/// use cupfinals::services::normalizer::normalize_country;
/// use cupfinals::types::Role;
///
/// assert_eq!(normalize_country("West Germany", Role::Winner), "Germany");
/// assert_eq!(normalize_country("Czechoslovakia", Role::RunnerUp), "Czech Republic");
/// assert_eq!(normalize_country("Czechoslovakia", Role::Winner), "Czechoslovakia");
/// ```
pub fn normalize_country(raw: &str, role: Role) -> String {
    let name = raw.trim();
    NAME_CHANGES
        .iter()
        .find(|(r, from, _)| *r == role && *from == name)
        .map(|(_, _, to)| (*to).to_string())
        .unwrap_or_else(|| name.to_string())
}
