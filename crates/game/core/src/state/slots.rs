//! Fixed-size slot arrays that tolerate legacy and hand-edited saves.

/// Normalizes raw slot values into exactly `N` slots.
///
/// Missing trailing entries become empty, extra entries are dropped, and blank
/// ids (`""`) count as empty.
pub fn pad_slots<const N: usize>(raw: impl IntoIterator<Item = Option<String>>) -> [Option<String>; N] {
    let mut slots: [Option<String>; N] = std::array::from_fn(|_| None);
    for (slot, value) in slots.iter_mut().zip(raw) {
        *slot = value.filter(|id| !id.trim().is_empty());
    }
    slots
}

/// `deserialize_with` helper: any-length array (or `null`) into `N` slots.
#[cfg(feature = "serde")]
pub fn deserialize<'de, D, const N: usize>(deserializer: D) -> Result<[Option<String>; N], D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let raw: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(pad_slots(raw.unwrap_or_default()))
}

/// `deserialize_with` helper: a blank id string is no selection.
#[cfg(feature = "serde")]
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|id| !id.trim().is_empty()))
}

/// `deserialize_with` helper: an explicit `null` object is its default.
#[cfg(feature = "serde")]
pub fn deserialize_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    use serde::Deserialize;

    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `deserialize_with` helper: a `null` map is empty and `null` entries are dropped.
#[cfg(feature = "serde")]
pub fn deserialize_map_entries<'de, D, T>(
    deserializer: D,
) -> Result<std::collections::BTreeMap<String, T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    use serde::Deserialize;
    use std::collections::BTreeMap;

    let raw: Option<BTreeMap<String, Option<T>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| Some((key, value?)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_input() {
        let slots: [Option<String>; 3] = pad_slots(vec![Some("a".to_string())]);
        assert_eq!(slots, [Some("a".to_string()), None, None]);
    }

    #[test]
    fn truncates_long_input() {
        let raw = vec![Some("a".to_string()), None, Some("b".to_string())];
        let slots: [Option<String>; 2] = pad_slots(raw);
        assert_eq!(slots, [Some("a".to_string()), None]);
    }

    #[test]
    fn blank_ids_are_empty() {
        let slots: [Option<String>; 2] = pad_slots(vec![Some("  ".to_string()), Some("x".to_string())]);
        assert_eq!(slots, [None, Some("x".to_string())]);
    }
}
