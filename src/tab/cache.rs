//! Keep-alive cache set derivation.

use super::TabRecord;
use std::collections::BTreeSet;

/// Compute the names of views that must stay mounted.
///
/// Every keep-alive tab contributes its own route name plus the names of its
/// matched ancestors, skipping index 0 (the root layout).
pub fn compute_cached_names<'a>(tabs: impl IntoIterator<Item = &'a TabRecord>) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for tab in tabs {
        if !tab.meta.keeps_alive() {
            continue;
        }
        names.extend(tab.matched.iter().skip(1).map(|m| m.name.clone()));
        names.insert(tab.name.clone());
    }
    names
}
