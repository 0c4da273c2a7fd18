//! Normalized content entities.
//!
//! Every entity is a read-only snapshot built once per load; nothing here is
//! mutated after aggregation.

use chrono::NaiveDate;
use serde::Serialize;

use crate::xml::{XmlElement, XmlNode};

/// The sidebar navigation tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Navigation {
    pub sections: Vec<NavSection>,
}

/// One navigation section: a label, an optional landing path, and its links.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavSection {
    pub label: String,
    pub landing: Option<String>,
    pub links: Vec<NavLink>,
}

/// A single navigation link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub path: String,
}

impl Navigation {
    /// The empty tree, used when the navigation file is absent.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the tree from a parsed `<navigation>` root element.
    pub fn from_element(root: &XmlElement) -> Self {
        let sections = root
            .children_named("section")
            .map(|section| NavSection {
                label: section.child_text("label").unwrap_or_default(),
                landing: section.child_text("landing").filter(|s| !s.is_empty()),
                links: section
                    .children_named("link")
                    .map(|link| NavLink {
                        label: link.child_text("label").unwrap_or_default(),
                        path: link.child_text("path").unwrap_or_default(),
                    })
                    .collect(),
            })
            .collect();

        Self { sections }
    }
}

/// Project classification, derived from the source directory a project file
/// was found in — never from the file contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    ContentDesign,
    Creative,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ContentDesign => "content-design",
            Category::Creative => "creative",
        }
    }

    /// The directory name a category's projects live under.
    pub fn dir_name(&self) -> &'static str {
        self.as_str()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `<meta>` block of a content document, with explicit optional fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    /// Unique id; empty when the document carries none.
    pub id: String,

    /// Display title.
    pub title: Option<String>,

    /// Tag list from `<tags><tag>…</tag></tags>`.
    pub tags: Vec<String>,

    /// Publish date (`YYYY-MM-DD`), when present and well-formed.
    pub date: Option<NaiveDate>,
}

impl Metadata {
    /// Extract the metadata block from a document root. A missing `<meta>`
    /// child yields the default (and therefore id-less) metadata.
    pub fn from_root(root: &XmlElement) -> Self {
        let Some(meta) = root.child("meta") else {
            return Self::default();
        };

        Self {
            id: meta.child_text("id").unwrap_or_default(),
            title: meta.child_text("title").filter(|s| !s.is_empty()),
            tags: meta
                .child("tags")
                .map(|tags| {
                    tags.children_named("tag")
                        .map(|tag| tag.text())
                        .filter(|t| !t.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            date: meta
                .child_text("date")
                .and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok()),
        }
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub meta: Metadata,
    pub category: Category,
    pub body: Vec<XmlNode>,
}

impl Project {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.meta.tags.iter().any(|t| t == tag)
    }
}

/// A standalone page (about, contact, resume, …), keyed by metadata id.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub meta: Metadata,
    pub body: Vec<XmlNode>,
}

/// A blog post. Unlike the other kinds, the publish date is required.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub meta: Metadata,
    pub date: NaiveDate,
    pub body: Vec<XmlNode>,
}

/// The body of a content document: every root child except the `<meta>`
/// block, in document order.
pub fn body_of(root: &XmlElement) -> Vec<XmlNode> {
    root.children
        .iter()
        .filter(|node| !matches!(node, XmlNode::Element(e) if e.name == "meta"))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_document;
    use pretty_assertions::assert_eq;

    #[test]
    fn builds_navigation_tree() {
        let root = parse_document(
            r#"<navigation>
                 <section>
                   <label>Work</label>
                   <landing>/work/</landing>
                   <link><label>Projects</label><path>/projects/</path></link>
                   <link><label>Blog</label><path>/blog/</path></link>
                 </section>
                 <section>
                   <label>About</label>
                   <link><label>Contact</label><path>/contact/</path></link>
                 </section>
               </navigation>"#,
        )
        .unwrap();

        let nav = Navigation::from_element(&root);

        assert_eq!(nav.sections.len(), 2);
        assert_eq!(nav.sections[0].label, "Work");
        assert_eq!(nav.sections[0].landing.as_deref(), Some("/work/"));
        assert_eq!(nav.sections[0].links.len(), 2);
        assert_eq!(nav.sections[1].landing, None);
        assert_eq!(nav.sections[1].links[0].path, "/contact/");
    }

    #[test]
    fn metadata_defaults_when_meta_is_missing() {
        let root = parse_document("<project><summary>no meta</summary></project>").unwrap();

        let meta = Metadata::from_root(&root);

        assert!(!meta.has_id());
        assert!(meta.tags.is_empty());
        assert_eq!(meta.date, None);
    }

    #[test]
    fn metadata_parses_tags_and_date() {
        let root = parse_document(
            r#"<post>
                 <meta>
                   <id>launch</id>
                   <title>Launch notes</title>
                   <tags><tag>ux-writing</tag><tag>release</tag></tags>
                   <date>2025-03-14</date>
                 </meta>
               </post>"#,
        )
        .unwrap();

        let meta = Metadata::from_root(&root);

        assert_eq!(meta.id, "launch");
        assert_eq!(meta.tags, vec!["ux-writing", "release"]);
        assert_eq!(meta.date, NaiveDate::from_ymd_opt(2025, 3, 14));
    }

    #[test]
    fn bad_date_becomes_none() {
        let root =
            parse_document("<post><meta><id>x</id><date>last week</date></meta></post>").unwrap();

        assert_eq!(Metadata::from_root(&root).date, None);
    }

    #[test]
    fn body_excludes_meta_block() {
        let root = parse_document(
            "<project><meta><id>x</id></meta><h2>Case study</h2><p>Body text</p></project>",
        )
        .unwrap();

        let body = body_of(&root);

        assert_eq!(body.len(), 2);
        assert!(matches!(&body[0], XmlNode::Element(e) if e.name == "h2"));
    }
}
