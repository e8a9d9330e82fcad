//! Duplicate Selection Guard
//!
//! Within a named dropdown group, a value chosen in one member is disabled
//! in every other member.

use std::collections::BTreeSet;

/// Values chosen by members of the group other than `member`.
pub fn taken_elsewhere<K: PartialEq>(group: &[(K, Option<&str>)], member: &K) -> BTreeSet<String> {
    let own = group
        .iter()
        .find(|(key, _)| key == member)
        .and_then(|(_, value)| *value);
    group
        .iter()
        .filter(|(key, _)| key != member)
        .filter_map(|(_, value)| *value)
        .filter(|value| !value.is_empty() && Some(*value) != own)
        .map(str::to_string)
        .collect()
}

/// Whether `option` should be disabled in a member whose siblings hold `taken`.
pub fn is_disabled(taken: &BTreeSet<String>, option: &str) -> bool {
    !option.is_empty() && taken.contains(option)
}
