//! List responses: either a bare array or a paginated envelope.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Page(Page<T>),
    Items(Vec<T>),
}

impl<T> Listing<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Self::Page(page) => &page.results,
            Self::Items(items) => items,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Page(page) => page.results,
            Self::Items(items) => items,
        }
    }

    /// Items on this page.
    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Total across all pages when the server paginates.
    pub fn total(&self) -> u64 {
        match self {
            Self::Page(page) => page.count,
            Self::Items(items) => items.len() as u64,
        }
    }

    pub fn next(&self) -> Option<&str> {
        match self {
            Self::Page(page) => page.next.as_deref(),
            Self::Items(_) => None,
        }
    }

    pub fn previous(&self) -> Option<&str> {
        match self {
            Self::Page(page) => page.previous.as_deref(),
            Self::Items(_) => None,
        }
    }
}
