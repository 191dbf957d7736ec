use crate::types::{LabeledTitle, UserTitleTable};
use std::collections::BTreeMap;

/// Joins every title of each user, in input order, into one space-separated text.
///
/// # Example
/// ```
/// use author_sniffer::group_titles_by_user;
///
/// let pairs = vec![
///     ("rust is fun".to_string(), "alice".to_string()),
///     ("hello".to_string(), "bob".to_string()),
///     ("borrow checker".to_string(), "alice".to_string()),
/// ];
///
/// let table = group_titles_by_user(&pairs);
/// assert_eq!(table["alice"], "rust is fun borrow checker");
/// assert_eq!(table["bob"], "hello");
/// ```
pub fn group_titles_by_user(labeled_titles: &[LabeledTitle]) -> UserTitleTable {
    let mut titles_by_user: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

    for (title, user) in labeled_titles {
        titles_by_user.entry(user).or_default().push(title);
    }

    titles_by_user
        .into_iter()
        .map(|(user, titles)| (user.to_string(), titles.join(" ")))
        .collect()
}
