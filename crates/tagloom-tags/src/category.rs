//! Tag categories.
//!
//! The category set is closed: a tag is an artist, a movement, a location,
//! or a plain tag. Per-category data lives in [`CategoryMap`], which has
//! one field per category so lookups never miss.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tagloom_core::Error;

/// Classification of a tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// `artist:` prefixed tags.
    Artist,
    /// `movement:` prefixed tags.
    Movement,
    /// `location:` prefixed tags.
    Location,
    /// Unprefixed tags.
    Tag,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Artist,
        Category::Movement,
        Category::Location,
        Category::Tag,
    ];

    /// Categories introduced by a prefix, in matching order.
    pub const PREFIXED: [Category; 3] = [Category::Artist, Category::Movement, Category::Location];

    /// The tag prefix selecting this category; `None` for the fallback.
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            Category::Artist => Some("artist:"),
            Category::Movement => Some("movement:"),
            Category::Location => Some("location:"),
            Category::Tag => None,
        }
    }

    /// Listing route for the category.
    pub fn route(self) -> &'static str {
        match self {
            Category::Artist => "/artists",
            Category::Movement => "/movements",
            Category::Location => "/locations",
            Category::Tag => "/tags",
        }
    }

    /// Human-readable heading.
    pub fn label(self) -> &'static str {
        match self {
            Category::Artist => "Artists",
            Category::Movement => "Movements",
            Category::Location => "Locations",
            Category::Tag => "Tags",
        }
    }

    /// Lowercase identifier used in JSON keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Artist => "artist",
            Category::Movement => "movement",
            Category::Location => "location",
            Category::Tag => "tag",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::invalid_data(format!("Unknown tag category '{s}'")))
    }
}

/// One value per category.
///
/// Serializes as an object with exactly the keys `artist`, `movement`,
/// `location`, and `tag`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryMap<T> {
    /// Artist bucket.
    pub artist: T,
    /// Movement bucket.
    pub movement: T,
    /// Location bucket.
    pub location: T,
    /// Generic tag bucket.
    pub tag: T,
}

impl<T> CategoryMap<T> {
    /// Borrow the bucket for `category`.
    pub fn get(&self, category: Category) -> &T {
        match category {
            Category::Artist => &self.artist,
            Category::Movement => &self.movement,
            Category::Location => &self.location,
            Category::Tag => &self.tag,
        }
    }

    /// Mutably borrow the bucket for `category`.
    pub fn get_mut(&mut self, category: Category) -> &mut T {
        match category {
            Category::Artist => &mut self.artist,
            Category::Movement => &mut self.movement,
            Category::Location => &mut self.location,
            Category::Tag => &mut self.tag,
        }
    }

    /// Iterate `(category, bucket)` pairs in [`Category::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_prefixes_and_routes() {
        assert_eq!(Category::Artist.prefix(), Some("artist:"));
        assert_eq!(Category::Tag.prefix(), None);
        assert_eq!(Category::Location.route(), "/locations");
        assert_eq!(Category::Movement.label(), "Movements");
        for c in Category::PREFIXED {
            assert!(c.prefix().is_some());
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("artist".parse::<Category>().unwrap(), Category::Artist);
        assert_eq!(" TAG ".parse::<Category>().unwrap(), Category::Tag);
        assert!("painter".parse::<Category>().is_err());
    }

    #[test]
    fn test_display_matches_serde() {
        for c in Category::ALL {
            let json = serde_json::to_string(&c).unwrap();
            assert_eq!(json, format!("\"{c}\""));
        }
    }

    #[test]
    fn test_category_map_access() {
        let mut map: CategoryMap<BTreeMap<String, usize>> = CategoryMap::default();
        map.get_mut(Category::Movement).insert("baroque".into(), 3);

        assert_eq!(map.movement.get("baroque"), Some(&3));
        assert!(map.get(Category::Artist).is_empty());
        let order: Vec<_> = map.iter().map(|(c, _)| c).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn test_category_map_serializes_all_keys() {
        let map: CategoryMap<BTreeMap<String, usize>> = CategoryMap::default();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"artist":{},"movement":{},"location":{},"tag":{}}"#);
    }

    #[test]
    fn test_category_map_missing_keys_default() {
        let map: CategoryMap<BTreeMap<String, usize>> =
            serde_json::from_str(r#"{"artist":{"ada-lovelace":2}}"#).unwrap();
        assert_eq!(map.artist.get("ada-lovelace"), Some(&2));
        assert!(map.tag.is_empty());
    }
}
