//! Read-only content: the blog and tutorial catalogs and the static pages.
//!
//! Catalogs are built once on first access and never change afterwards.

pub mod blogs;
pub mod catalog;
pub mod item;
pub mod pages;
pub mod tutorials;

use std::fmt;

pub use catalog::{Catalog, CatalogError};
pub use item::{CodeSample, CodeSamples, ContentItem, Language};
pub use pages::StaticPage;

/// Which catalog browser a piece of content belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Blogs,
    Tutorials,
}

impl Section {
    /// Route prefix of the browser, without trailing slash.
    pub fn base_path(self) -> &'static str {
        match self {
            Section::Blogs => "/blogs",
            Section::Tutorials => "/tutorials",
        }
    }

    /// Route of a single entry.
    pub fn item_path(self, id: &str) -> String {
        format!("{}/{id}", self.base_path())
    }

    /// Singular noun used in the not-found message.
    pub fn item_noun(self) -> &'static str {
        match self {
            Section::Blogs => "Blog post",
            Section::Tutorials => "Tutorial",
        }
    }

    /// Plural label used for navigation and back links.
    pub fn label(self) -> &'static str {
        match self {
            Section::Blogs => "Blogs",
            Section::Tutorials => "Tutorials",
        }
    }

    /// Sidebar heading listing every entry.
    pub fn index_heading(self) -> &'static str {
        match self {
            Section::Blogs => "All Blog Posts",
            Section::Tutorials => "All Tutorials",
        }
    }

    pub fn catalog(self) -> &'static Catalog {
        match self {
            Section::Blogs => blogs::catalog(),
            Section::Tutorials => tutorials::catalog(),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
