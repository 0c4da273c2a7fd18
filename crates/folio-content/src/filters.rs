//! Pure query filters over loaded collections.
//!
//! These back the template-facing lookups; both are total functions over
//! borrowed slices and allocate nothing beyond the result.

use crate::model::Project;

/// First project whose metadata id equals `id`. Linear scan; with duplicate
/// ids the first match wins.
pub fn find_project<'a>(projects: &'a [Project], id: &str) -> Option<&'a Project> {
    projects.iter().find(|p| p.meta.id == id)
}

/// The ordered subsequence of projects whose tag set contains `tag`.
pub fn with_tag<'a>(projects: &'a [Project], tag: &str) -> Vec<&'a Project> {
    projects.iter().filter(|p| p.has_tag(tag)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Metadata};

    fn project(id: &str, tags: &[&str]) -> Project {
        Project {
            meta: Metadata {
                id: id.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                ..Metadata::default()
            },
            category: Category::ContentDesign,
            body: Vec::new(),
        }
    }

    #[test]
    fn finds_first_match_by_id() {
        let projects = vec![project("a", &[]), project("b", &[]), project("b", &["x"])];

        let found = find_project(&projects, "b").unwrap();
        assert!(found.meta.tags.is_empty());

        assert!(find_project(&projects, "missing").is_none());
    }

    #[test]
    fn with_tag_preserves_order() {
        let projects = vec![
            project("a", &["ux-writing", "errors"]),
            project("b", &["errors"]),
            project("c", &["ux-writing"]),
        ];

        let tagged = with_tag(&projects, "ux-writing");
        let ids: Vec<&str> = tagged.iter().map(|p| p.meta.id.as_str()).collect();

        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn with_tag_handles_no_matches_and_empty_tag_lists() {
        let projects = vec![project("a", &[]), project("b", &["errors"])];

        assert!(with_tag(&projects, "nonexistent").is_empty());
    }
}
