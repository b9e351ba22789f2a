use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Skill tags grouped by category, in display order.
///
/// Serialized as a map from category name to tags. Category order is the
/// authoring order in both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Skills(IndexMap<String, Vec<String>>);

impl Skills {
    /// Returns the category names in order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the tags for a category, if present.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.0.get(category).map(Vec::as_slice)
    }

    /// Returns the number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over categories and their tags in order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Vec<String>> {
        self.0.iter()
    }

    /// Every tag across all categories, de-duplicated in first-seen order.
    #[must_use]
    pub fn all_tags(&self) -> Vec<&str> {
        self.0
            .values()
            .flatten()
            .map(String::as_str)
            .collect::<indexmap::IndexSet<_>>()
            .into_iter()
            .collect()
    }
}

impl<'a> IntoIterator for &'a Skills {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C, S, T> FromIterator<(C, S)> for Skills
where
    C: Into<String>,
    S: IntoIterator<Item = T>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (C, S)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(category, skills)| {
                    (category.into(), skills.into_iter().map(Into::into).collect())
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Skills {
        [
            ("Programming", vec!["python", "git"]),
            ("Cloud", vec!["aws", "python"]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn looks_up_categories() {
        let skills = sample();

        assert_eq!(skills.len(), 2);
        assert_eq!(
            skills.get("Cloud"),
            Some(["aws".to_string(), "python".to_string()].as_slice())
        );
        assert_eq!(skills.get("Cooking"), None);
    }

    #[test]
    fn all_tags_are_unique_and_ordered() {
        assert_eq!(sample().all_tags(), vec!["python", "git", "aws"]);
    }

    #[test]
    fn serializes_as_ordered_map() {
        let json = serde_json::to_string(&sample()).unwrap();

        assert_eq!(
            json,
            r#"{"Programming":["python","git"],"Cloud":["aws","python"]}"#
        );
    }

    #[test]
    fn deserialization_keeps_document_order() {
        let yaml = "Zoology:\n  - cats\nAstronomy:\n  - stars\n  - moons\n";

        let skills: Skills = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(
            skills.categories().collect::<Vec<_>>(),
            vec!["Zoology", "Astronomy"]
        );
        assert_eq!(skills.get("Astronomy").map(<[String]>::len), Some(2));
    }
}
