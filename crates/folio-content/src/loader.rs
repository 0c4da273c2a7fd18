//! Content loading.
//!
//! Walks the fixed content locations, parses each recognized `.xml` file,
//! and normalizes it into the entities of [`crate::model`]. Content problems
//! never abort a load: a bad file is skipped with a diagnostic and its
//! siblings are unaffected.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::{body_of, Category, Metadata, Navigation, Page, Post, Project};
use crate::report::{DiagnosticKind, LoadReport};
use crate::xml::{parse_document, XmlElement};

/// Root elements accepted for files in the pages directory. Anything else is
/// skipped rather than guessed at.
const PAGE_ROOTS: &[&str] = &["page", "resume"];

/// Everything one load pass produced.
#[derive(Debug, Clone)]
pub struct Site {
    pub navigation: Navigation,
    pub projects: Vec<Project>,
    pub pages: BTreeMap<String, Page>,
    pub posts: Vec<Post>,
    pub report: LoadReport,
}

/// Reads the content tree under a root directory.
///
/// Expected layout:
///
/// ```text
/// <root>/navigation.xml
/// <root>/projects/content-design/*.xml
/// <root>/projects/creative/*.xml
/// <root>/pages/*.xml
/// <root>/blog/*.xml
/// ```
#[derive(Debug, Clone)]
pub struct ContentLoader {
    root: PathBuf,
}

impl ContentLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Run all four load operations and bundle the results.
    pub fn load_site(&self) -> Site {
        let mut report = LoadReport::new();

        let navigation = self.load_navigation(&mut report);
        let projects = self.load_projects(&mut report);
        let pages = self.load_pages(&mut report);
        let posts = self.load_posts(&mut report);

        Site {
            navigation,
            projects,
            pages,
            posts,
            report,
        }
    }

    /// Read `navigation.xml`. An absent file is normal and yields the empty
    /// tree; an unparseable one yields the empty tree with a diagnostic.
    pub fn load_navigation(&self, report: &mut LoadReport) -> Navigation {
        let path = self.root.join("navigation.xml");
        if !path.exists() {
            return Navigation::empty();
        }

        match self.parse_file(&path, report) {
            Some(root) if root.name == "navigation" => Navigation::from_element(&root),
            Some(root) => {
                report.record(&path, DiagnosticKind::UnexpectedRoot(root.name));
                Navigation::empty()
            }
            None => Navigation::empty(),
        }
    }

    /// Read both project directories non-recursively. Category comes from the
    /// directory a file was found in.
    pub fn load_projects(&self, report: &mut LoadReport) -> Vec<Project> {
        let mut projects = Vec::new();

        for category in [Category::ContentDesign, Category::Creative] {
            let dir = self.root.join("projects").join(category.dir_name());
            for path in xml_files(&dir) {
                let Some(root) = self.parse_file(&path, report) else {
                    continue;
                };
                if root.name != "project" {
                    report.record(&path, DiagnosticKind::UnexpectedRoot(root.name));
                    continue;
                }
                let meta = Metadata::from_root(&root);
                if !meta.has_id() {
                    report.record(&path, DiagnosticKind::MissingId);
                    continue;
                }
                projects.push(Project {
                    body: body_of(&root),
                    meta,
                    category,
                });
            }
        }

        projects
    }

    /// Read the pages directory into an id-keyed map. Only the fixed set of
    /// page root elements is accepted; a duplicate id is last-write-wins with
    /// a diagnostic for the overwrite.
    pub fn load_pages(&self, report: &mut LoadReport) -> BTreeMap<String, Page> {
        let mut pages = BTreeMap::new();

        for path in xml_files(&self.root.join("pages")) {
            let Some(root) = self.parse_file(&path, report) else {
                continue;
            };
            if !PAGE_ROOTS.contains(&root.name.as_str()) {
                report.record(&path, DiagnosticKind::UnexpectedRoot(root.name));
                continue;
            }
            let meta = Metadata::from_root(&root);
            if !meta.has_id() {
                report.record(&path, DiagnosticKind::MissingId);
                continue;
            }
            let id = meta.id.clone();
            let page = Page {
                body: body_of(&root),
                meta,
            };
            if pages.insert(id.clone(), page).is_some() {
                report.record(&path, DiagnosticKind::DuplicateId(id));
            }
        }

        pages
    }

    /// Read the blog directory. Every post needs a `post` root and a valid
    /// publish date; the result is sorted newest-first, ties keeping
    /// file-name order.
    pub fn load_posts(&self, report: &mut LoadReport) -> Vec<Post> {
        let mut posts = Vec::new();

        for path in xml_files(&self.root.join("blog")) {
            let Some(root) = self.parse_file(&path, report) else {
                continue;
            };
            if root.name != "post" {
                report.record(&path, DiagnosticKind::UnexpectedRoot(root.name));
                continue;
            }
            let meta = Metadata::from_root(&root);
            if !meta.has_id() {
                report.record(&path, DiagnosticKind::MissingId);
                continue;
            }
            let Some(date) = meta.date else {
                match raw_date(&root) {
                    Some(raw) => report.record(&path, DiagnosticKind::InvalidDate(raw)),
                    None => report.record(&path, DiagnosticKind::MissingDate),
                }
                continue;
            };
            posts.push(Post {
                body: body_of(&root),
                meta,
                date,
            });
        }

        // Stable, so equal dates keep enumeration order.
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }

    fn parse_file(&self, path: &Path, report: &mut LoadReport) -> Option<XmlElement> {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                report.record(path, DiagnosticKind::Unreadable(e.to_string()));
                return None;
            }
        };
        match parse_document(&source) {
            Ok(root) => Some(root),
            Err(e) => {
                report.record(path, DiagnosticKind::Unparseable(e.to_string()));
                None
            }
        }
    }
}

/// The `.xml` files of a directory, non-recursively, sorted by file name so
/// enumeration order is deterministic across platforms. A missing directory
/// is a normal condition and yields no files.
fn xml_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("xml")
        })
        .collect();
    files.sort();
    files
}

fn raw_date(root: &XmlElement) -> Option<String> {
    root.child("meta")
        .and_then(|meta| meta.child_text("date"))
        .filter(|raw| !raw.is_empty())
}
