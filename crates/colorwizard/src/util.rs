use std::collections::HashMap;
use std::hash::Hash;

/// Group the items by the key computed for each item.
///
/// Each group preserves the relative order of its items. The order of the
/// groups themselves is unspecified.
///
/// ```
/// # use colorwizard::group_by;
/// let groups = group_by(["red", "green", "blue", "gray"], |name| name.len());
/// assert_eq!(groups[&3], ["red"]);
/// assert_eq!(groups[&4], ["blue", "gray"]);
/// assert_eq!(groups[&5], ["green"]);
/// ```
pub fn group_by<I, K, F>(items: I, mut key: F) -> HashMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    let mut groups: HashMap<K, Vec<I::Item>> = HashMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

#[cfg(test)]
mod test {
    use super::group_by;
    use crate::{to_hsl, WizardError};

    #[test]
    fn test_group_by() {
        let groups = group_by(1..=10, |n| n % 3);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[&0], [3, 6, 9]);
        assert_eq!(groups[&1], [1, 4, 7, 10]);
        assert_eq!(groups[&2], [2, 5, 8]);

        assert!(group_by(Vec::<u8>::new(), |n| *n).is_empty());
    }

    #[test]
    fn test_group_by_hue() -> Result<(), WizardError> {
        let colors = ["red", "white", "#f00", "blue", "black"]
            .into_iter()
            .map(to_hsl)
            .collect::<Result<Vec<_>, _>>()?;
        let groups = group_by(colors, |hsl| hsl.h.map(|h| h.round() as i32));

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[&Some(0)].len(), 2);
        assert_eq!(groups[&Some(240)].len(), 1);
        assert_eq!(groups[&None].len(), 2);
        Ok(())
    }
}
