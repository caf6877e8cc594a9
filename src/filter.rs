use crate::model::Concert;

/// Return the concerts whose name contains `query`, ignoring case.
///
/// Order is preserved and the input is left untouched. An empty query matches
/// every concert; a concert without a name matches no non-empty query.
pub fn filter_concerts<'a>(concerts: &'a [Concert], query: &str) -> Vec<&'a Concert> {
    let needle = query.to_lowercase();
    concerts
        .iter()
        .filter(|concert| contains_folded(concert, &needle))
        .collect()
}

/// Whether `concert`'s name contains `query`, ignoring case.
pub fn name_matches(concert: &Concert, query: &str) -> bool {
    contains_folded(concert, &query.to_lowercase())
}

fn contains_folded(concert: &Concert, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    concert
        .name
        .as_deref()
        .is_some_and(|name| name.to_lowercase().contains(needle))
}
