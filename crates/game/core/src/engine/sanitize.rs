//! Normalizes raw mod selections into legal ones.

use crate::catalog::CatalogOracle;

/// Cleans a weapon-mod id list, left to right.
///
/// - empty slots pass through
/// - a repeated id is dropped (first occurrence wins)
/// - a second magazine-class mod is dropped (first one wins)
///
/// The output has the same length as the input. Pure: run it before every
/// compose, including on freshly deserialized saves.
pub fn sanitize<S: AsRef<str>>(
    catalog: &(impl CatalogOracle + ?Sized),
    mods: &[Option<S>],
) -> Vec<Option<String>> {
    let mut accepted: Vec<&str> = Vec::with_capacity(mods.len());
    let mut magazine_taken = false;

    mods.iter()
        .map(|slot| {
            let id: &str = slot.as_ref()?.as_ref();
            if accepted.contains(&id) {
                tracing::debug!("sanitize: dropping duplicate mod {:?}", id);
                return None;
            }
            if catalog.weapon_mod(Some(id)).is_magazine() {
                if magazine_taken {
                    tracing::debug!("sanitize: dropping extra magazine mod {:?}", id);
                    return None;
                }
                magazine_taken = true;
            }
            accepted.push(id);
            Some(id.to_string())
        })
        .collect()
}

/// Duplicate suppression for armour-mod slots (first occurrence wins).
pub fn sanitize_armour_mods<S: AsRef<str>>(mods: &[Option<S>]) -> Vec<Option<String>> {
    let mut accepted: Vec<&str> = Vec::with_capacity(mods.len());
    mods.iter()
        .map(|slot| {
            let id: &str = slot.as_ref()?.as_ref();
            if accepted.contains(&id) {
                tracing::debug!("sanitize: dropping duplicate armour mod {:?}", id);
                return None;
            }
            accepted.push(id);
            Some(id.to_string())
        })
        .collect()
}
