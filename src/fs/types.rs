//! Node Types
//!
//! Core types for the game's file tree.

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::session::Session;

/// Child entries of a directory, in insertion order.
pub type Children = IndexMap<String, Node>;

/// Late-bound file content.
pub type ContentFn = Arc<dyn Fn(&Session) -> String + Send + Sync>;

/// Late-bound directory entries.
pub type ChildrenFn = Arc<dyn Fn(&Session) -> Children + Send + Sync>;

/// Navigator errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("no such directory: {name}")]
    NoSuchDirectory { name: String },

    #[error("no such file: {name}")]
    NoSuchFile { name: String },

    #[error("{message}")]
    Locked {
        name: String,
        kind: LockedKind,
        message: String,
    },

    #[error("current path no longer resolves: {path}")]
    BrokenPath { path: String },
}

/// Which kind of sealed node refused access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockedKind {
    File,
    Directory,
}

/// File content, fixed or resolved against the session.
#[derive(Clone)]
pub enum Content {
    Static(String),
    Computed(ContentFn),
}

impl Content {
    pub fn resolve(&self, session: &Session) -> String {
        match self {
            Content::Static(text) => text.clone(),
            Content::Computed(f) => f(session),
        }
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Content::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Directory entries, fixed or resolved against the session.
#[derive(Clone)]
pub enum Entries {
    Static(Arc<Children>),
    Computed(ChildrenFn),
}

impl Entries {
    pub fn resolve(&self, session: &Session) -> Arc<Children> {
        match self {
            Entries::Static(children) => Arc::clone(children),
            Entries::Computed(f) => Arc::new(f(session)),
        }
    }
}

impl fmt::Debug for Entries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entries::Static(children) => f.debug_tuple("Static").field(children).finish(),
            Entries::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Secret guarding a locked node.
#[derive(Debug, Clone)]
pub struct Lock {
    pub password: String,
    pub locked_message: String,
}

impl Lock {
    pub fn new(password: impl Into<String>, locked_message: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            locked_message: locked_message.into(),
        }
    }

    /// Case-insensitive comparison.
    pub fn accepts(&self, attempt: &str) -> bool {
        attempt.to_lowercase() == self.password.to_lowercase()
    }
}

/// A single entry in the game's file tree.
#[derive(Clone)]
pub enum Node {
    File { content: String },
    ComputedFile { resolve: ContentFn },
    LockedFile { content: Content, lock: Lock },
    Directory { children: Arc<Children> },
    LockedDirectory { children: Entries, lock: Lock },
}

impl Node {
    pub fn file(content: impl Into<String>) -> Self {
        Node::File { content: content.into() }
    }

    pub fn computed<F>(resolve: F) -> Self
    where
        F: Fn(&Session) -> String + Send + Sync + 'static,
    {
        Node::ComputedFile {
            resolve: Arc::new(resolve),
        }
    }

    pub fn locked_file(
        content: impl Into<String>,
        password: impl Into<String>,
        locked_message: impl Into<String>,
    ) -> Self {
        Node::LockedFile {
            content: Content::Static(content.into()),
            lock: Lock::new(password, locked_message),
        }
    }

    pub fn locked_computed_file<F>(
        resolve: F,
        password: impl Into<String>,
        locked_message: impl Into<String>,
    ) -> Self
    where
        F: Fn(&Session) -> String + Send + Sync + 'static,
    {
        Node::LockedFile {
            content: Content::Computed(Arc::new(resolve)),
            lock: Lock::new(password, locked_message),
        }
    }

    pub fn dir<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Node)>,
        K: Into<String>,
    {
        Node::Directory {
            children: Arc::new(collect_children(entries)),
        }
    }

    pub fn locked_dir<I, K>(
        entries: I,
        password: impl Into<String>,
        locked_message: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = (K, Node)>,
        K: Into<String>,
    {
        Node::LockedDirectory {
            children: Entries::Static(Arc::new(collect_children(entries))),
            lock: Lock::new(password, locked_message),
        }
    }

    pub fn locked_computed_dir<F>(
        resolve: F,
        password: impl Into<String>,
        locked_message: impl Into<String>,
    ) -> Self
    where
        F: Fn(&Session) -> Children + Send + Sync + 'static,
    {
        Node::LockedDirectory {
            children: Entries::Computed(Arc::new(resolve)),
            lock: Lock::new(password, locked_message),
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory { .. } | Node::LockedDirectory { .. })
    }

    /// The lock guarding this node, if any.
    pub fn lock(&self) -> Option<&Lock> {
        match self {
            Node::LockedFile { lock, .. } | Node::LockedDirectory { lock, .. } => Some(lock),
            _ => None,
        }
    }

    /// Directory entries, ignoring any lock.
    pub fn children(&self, session: &Session) -> Option<Arc<Children>> {
        match self {
            Node::Directory { children } => Some(Arc::clone(children)),
            Node::LockedDirectory { children, .. } => Some(children.resolve(session)),
            _ => None,
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::File { content } => f.debug_struct("File").field("content", content).finish(),
            Node::ComputedFile { .. } => f.write_str("ComputedFile(..)"),
            Node::LockedFile { content, lock } => f
                .debug_struct("LockedFile")
                .field("content", content)
                .field("lock", lock)
                .finish(),
            Node::Directory { children } => {
                f.debug_struct("Directory").field("children", children).finish()
            }
            Node::LockedDirectory { children, lock } => f
                .debug_struct("LockedDirectory")
                .field("children", children)
                .field("lock", lock)
                .finish(),
        }
    }
}

/// Build a children map. Later duplicates replace earlier ones in place.
pub fn collect_children<I, K>(entries: I) -> Children
where
    I: IntoIterator<Item = (K, Node)>,
    K: Into<String>,
{
    entries.into_iter().map(|(name, node)| (name.into(), node)).collect()
}

/// How a listed child presents itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    LockedDirectory { unlocked: bool },
    File,
    LockedFile { unlocked: bool },
}

impl EntryKind {
    pub fn is_directory(&self) -> bool {
        matches!(self, EntryKind::Directory | EntryKind::LockedDirectory { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

/// Result of listing a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Empty,
    Entries(Vec<DirEntry>),
}
