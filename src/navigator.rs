//! Sandboxed navigation over one world's directory.
//!
//! Every path a client sends is resolved to its canonical form and accepted
//! only if the sandbox root is a prefix of it at a path-segment boundary.
//! Symlinks are resolved before the check, so a link cannot smuggle access
//! out of the world directory.

use crate::error::Error;
use crate::Result;
use serde::Serialize;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Folder,
    File,
}

impl FromStr for EntryKind {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "folder" => Ok(EntryKind::Folder),
            "file" => Ok(EntryKind::File),
            _ => Err(Error::ApiParseKind),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Enter,
    Up,
    Initial,
}

impl FromStr for NavAction {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "enter" => Ok(NavAction::Enter),
            "up" => Ok(NavAction::Up),
            "initial" => Ok(NavAction::Initial),
            _ => Err(Error::ApiParseAction),
        }
    }
}

/// One name in a listing.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
    pub editable: bool,
}

/// Outcome of one navigation step.
///
/// `path` in a listing is the canonical absolute path the client hands back
/// as its position on the next step. `label` is for display only.
#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Listing {
        label: String,
        path: String,
        entries: Vec<Entry>,
    },
    File {
        label: String,
        extension: String,
        content: String,
    },
    BoundaryReached,
}

/// A world directory with all access confined to it.
pub struct Navigator<'a> {
    root: PathBuf,
    editable: &'a [String],
}

impl<'a> Navigator<'a> {
    /// Opens the sandbox. The root must exist.
    pub fn open(root: &Path, editable: &'a [String]) -> Result<Navigator<'a>> {
        let root = root.canonicalize().map_err(Error::Io)?;
        Ok(Navigator { root, editable })
    }

    /// Runs one navigation step.
    pub fn navigate(
        &self,
        current: &str,
        target: &str,
        action: NavAction,
        kind: EntryKind,
    ) -> Result<View> {
        let current = if current.is_empty() {
            self.root.clone()
        } else {
            self.resolve(Path::new(current))?
        };
        match action {
            NavAction::Initial => self.list(&self.root),
            NavAction::Up => match current.parent() {
                Some(parent) if parent.starts_with(&self.root) => self.list(parent),
                _ => Ok(View::BoundaryReached),
            },
            NavAction::Enter => {
                let next = self.resolve(&current.join(target))?;
                match kind {
                    EntryKind::Folder if next.is_dir() => self.list(&next),
                    EntryKind::File if next.is_file() => self.view(&next),
                    _ => Err(Error::NotFound),
                }
            }
        }
    }

    /// Reads a file under the root. Relative paths resolve against the root.
    pub fn read(&self, path: &str) -> Result<String> {
        let file = self.resolve(&self.root.join(path))?;
        if !file.is_file() {
            return Err(Error::NotFound);
        }
        fs::read_to_string(file).map_err(Error::Io)
    }

    /// Replaces a file's content wholesale. The file may be created when its
    /// parent directory already exists inside the sandbox.
    pub fn write(&self, path: &str, content: &[u8]) -> Result<()> {
        let given = Path::new(path);
        let name = match given.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => return Err(Error::WriteDenied),
        };
        if !self.is_editable(&name) {
            return Err(Error::WriteDenied);
        }
        if given.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(Error::WriteDenied);
        }
        let joined = if given.is_absolute() {
            given.to_path_buf()
        } else {
            self.root.join(given)
        };
        if !joined.starts_with(&self.root) {
            return Err(Error::WriteDenied);
        }
        // The file itself may not exist yet, so the parent carries the
        // canonical containment check.
        let parent = match joined.parent() {
            Some(parent) => parent.canonicalize().map_err(|_| Error::NotFound)?,
            None => return Err(Error::WriteDenied),
        };
        let candidate = parent.join(&name);
        let real = match candidate.canonicalize() {
            Ok(real) => real,
            // Present but with no canonical form: a dangling symlink,
            // which fs::write would follow.
            Err(_) if candidate.symlink_metadata().is_ok() => {
                return Err(Error::WriteDenied);
            }
            Err(_) => candidate,
        };
        if !real.starts_with(&self.root) {
            return Err(Error::WriteDenied);
        }
        fs::write(real, content).map_err(Error::Io)
    }

    /// Canonicalize and confine. Missing paths and escaping paths are both
    /// `NotFound`, so nothing outside the sandbox is observable.
    fn resolve(&self, path: &Path) -> Result<PathBuf> {
        let real = path.canonicalize().map_err(|_| Error::NotFound)?;
        if real.starts_with(&self.root) {
            Ok(real)
        } else {
            Err(Error::NotFound)
        }
    }

    /// One merged view of a directory, sorted by name.
    fn list(&self, dir: &Path) -> Result<View> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir).map_err(Error::Io)? {
            let entry = entry.map_err(Error::Io)?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let kind = if entry.path().is_dir() {
                EntryKind::Folder
            } else {
                EntryKind::File
            };
            let editable = kind == EntryKind::File && self.is_editable(&name);
            entries.push(Entry {
                name,
                kind,
                editable,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(View::Listing {
            label: self.label(dir),
            path: dir.display().to_string(),
            entries,
        })
    }

    fn view(&self, file: &Path) -> Result<View> {
        let content = fs::read_to_string(file).map_err(Error::Io)?;
        Ok(View::File {
            label: self.label(file),
            extension: extension(file),
            content,
        })
    }

    fn label(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(rel) if rel.as_os_str().is_empty() => String::from("/"),
            Ok(rel) => format!("/{}", rel.display()),
            Err(_) => path.display().to_string(),
        }
    }

    fn is_editable(&self, name: &str) -> bool {
        match name.rfind('.') {
            Some(dot) => self.editable.iter().any(|e| e == &name[dot + 1..]),
            None => false,
        }
    }
}

/// Extension after the last dot of the name, empty when there is none.
fn extension(path: &Path) -> String {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => return String::new(),
    };
    match name.rfind('.') {
        Some(dot) => name[dot + 1..].to_string(),
        None => String::new(),
    }
}
