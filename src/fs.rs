//! Filesystem tree items for `browse`.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::item::{Item, ItemMetadata};

/// How directory listings are filtered and which entries can be chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowseOptions {
    /// Allow choosing a directory with enter
    pub select_dirs: bool,
    /// Include dot-files
    pub show_hidden: bool,
}

/// A file or directory. Directories load their entries on every descend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsNode {
    path: PathBuf,
    is_dir: bool,
    options: BrowseOptions,
}

impl FsNode {
    pub fn new(path: impl Into<PathBuf>, options: BrowseOptions) -> Self {
        let path = path.into();
        let is_dir = path.is_dir();
        Self {
            path,
            is_dir,
            options,
        }
    }

    /// Entries of `dir`, the top level of a browse session.
    ///
    /// Unlike [`Item::children`], a root that cannot be read is an error.
    pub fn roots(dir: &Path, options: BrowseOptions) -> io::Result<Vec<FsNode>> {
        list(dir, options)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

/// Directories first, then by name.
fn list(dir: &Path, options: BrowseOptions) -> io::Result<Vec<FsNode>> {
    let mut nodes: Vec<FsNode> = fs::read_dir(dir)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| options.show_hidden || !is_hidden(path))
        .map(|path| FsNode::new(path, options))
        .collect();

    nodes.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
            .then_with(|| a.path.cmp(&b.path))
    });
    Ok(nodes)
}

/// Human-readable file size.
fn human_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{size:.1} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.1} PB")
}

impl Item for FsNode {
    fn name(&self) -> Cow<'_, str> {
        match self.path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => self.path.to_string_lossy(),
        }
    }

    fn detail(&self) -> Vec<String> {
        vec![self.path.display().to_string()]
    }

    fn has_children(&self) -> bool {
        self.is_dir
    }

    fn children(&self) -> Vec<Self> {
        if !self.is_dir {
            return Vec::new();
        }
        list(&self.path, self.options).unwrap_or_else(|err| {
            warn!(path = %self.path.display(), %err, "cannot read directory");
            Vec::new()
        })
    }

    fn is_selectable(&self) -> bool {
        !self.is_dir || self.options.select_dirs
    }

    fn metadata(&self) -> Option<ItemMetadata> {
        let (icon, subtitle) = if self.is_dir {
            ("d", "directory".to_string())
        } else {
            let size = fs::metadata(&self.path)
                .map(|m| human_size(m.len()))
                .unwrap_or_else(|_| "?".into());
            ("-", format!("file, {size}"))
        };
        Some(ItemMetadata {
            icon: Some(icon.to_string()),
            subtitle: Some(subtitle),
            details: vec![self.path.display().to_string()],
        })
    }
}
