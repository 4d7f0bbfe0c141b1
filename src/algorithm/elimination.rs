use std::collections::{BTreeMap, BTreeSet};

/// Assign each key a distinct value by repeatedly fixing forced choices
///
/// A key with a single remaining candidate takes it, and that value is struck
/// from every other key. Returns `None` when a key runs out of candidates or
/// no key is forced while some remain unresolved.
pub fn resolve_unique<K, V>(mut candidates: BTreeMap<K, BTreeSet<V>>) -> Option<BTreeMap<K, V>>
where
    K: Ord + Clone,
    V: Ord + Clone,
{
    let mut resolved = BTreeMap::new();

    while !candidates.is_empty() {
        let (key, value) = candidates.iter().find_map(|(key, options)| {
            let mut values = options.iter();
            match (values.next(), values.next()) {
                (Some(value), None) => Some((key.clone(), value.clone())),
                _ => None,
            }
        })?;

        candidates.remove(&key);
        for options in candidates.values_mut() {
            options.remove(&value);
        }
        resolved.insert(key, value);
    }

    Some(resolved)
}
