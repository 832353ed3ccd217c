//! Activities and the ordered collection the parser builds.

use std::collections::HashMap;

/// One named unit of work with a duration in minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    /// Activity title as written in the input.
    pub name: String,
    /// Duration in minutes.
    pub minutes: u32,
}

impl Activity {
    /// Create a new activity.
    pub fn new(name: impl Into<String>, minutes: u32) -> Self {
        Self {
            name: name.into(),
            minutes,
        }
    }
}

/// Activities in input order, keyed by name.
///
/// Inserting a name that is already present replaces its duration but keeps
/// the position of the first occurrence, so scheduling order always follows
/// the order names first appeared in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityList {
    items: Vec<Activity>,
    index: HashMap<String, usize>,
}

impl ActivityList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an activity, overwriting the duration of a same-named one.
    ///
    /// Returns the previous duration when the name was already present.
    pub fn insert(&mut self, activity: Activity) -> Option<u32> {
        if let Some(&pos) = self.index.get(&activity.name) {
            let previous = self.items[pos].minutes;
            self.items[pos].minutes = activity.minutes;
            return Some(previous);
        }
        self.index.insert(activity.name.clone(), self.items.len());
        self.items.push(activity);
        None
    }

    /// Duration of the named activity, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<u32> {
        self.index.get(name).map(|&pos| self.items[pos].minutes)
    }

    /// Number of distinct activities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in scheduling order.
    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.items.iter()
    }

    /// Sum of all durations, in minutes.
    #[must_use]
    pub fn total_minutes(&self) -> u64 {
        self.items.iter().map(|a| u64::from(a.minutes)).sum()
    }
}

impl<'a> IntoIterator for &'a ActivityList {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Activity> for ActivityList {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        let mut list = Self::new();
        for activity in iter {
            list.insert(activity);
        }
        list
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for ActivityList {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(name, minutes)| Activity::new(name, minutes))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let list: ActivityList = [("Cutting", 60), ("Washing", 45), ("Cooling", 5)]
            .into_iter()
            .collect();

        let names: Vec<&str> = list.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Cutting", "Washing", "Cooling"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_duplicate_name_overwrites_in_place() {
        let mut list = ActivityList::new();
        assert_eq!(list.insert(Activity::new("Cutting", 60)), None);
        assert_eq!(list.insert(Activity::new("Washing", 45)), None);
        assert_eq!(list.insert(Activity::new("Cutting", 30)), Some(60));

        assert_eq!(list.len(), 2);
        assert_eq!(list.get("Cutting"), Some(30));
        assert_eq!(list.iter().next().map(|a| a.name.as_str()), Some("Cutting"));
    }

    #[test]
    fn test_get_missing() {
        let list = ActivityList::new();
        assert!(list.is_empty());
        assert_eq!(list.get("Cutting"), None);
    }

    #[test]
    fn test_total_minutes() {
        let list: ActivityList = [("A", 60), ("B", 45), ("C", 5)].into_iter().collect();
        assert_eq!(list.total_minutes(), 110);
    }
}
