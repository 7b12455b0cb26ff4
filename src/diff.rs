use crate::property_map::PropertyMap;

/// Returns the entries of `current` whose value differs from `baseline`.
///
/// A key missing from `baseline` compares as the empty string, so a new key
/// set to `""` is not reported. Values are compared as exact strings.
pub fn diff(current: &PropertyMap, baseline: &PropertyMap) -> PropertyMap {
    current
        .iter()
        .filter(|(name, value)| *value != baseline.get_or_empty(name))
        .collect()
}
