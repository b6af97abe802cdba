//! Workspace discovery
//!
//! A sartor workspace is any directory holding a `.sartor/` marker. The
//! catalog lives at the root, measurement profiles under `profiles/`, and
//! submitted line items under `cart/`. Discovery walks up from the current
//! directory the way git finds its repository root.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

pub const MARKER_DIR: &str = ".sartor";
pub const CATALOG_FILE: &str = "catalog.sartor.yaml";
pub const PROFILES_DIR: &str = "profiles";
pub const CART_DIR: &str = "cart";

#[derive(Debug, Error, Diagnostic)]
pub enum WorkspaceError {
    #[error("Not inside a sartor workspace (searched from {start} upward)")]
    #[diagnostic(help("Run 'sartor init' to create one"))]
    NotFound { start: PathBuf },

    #[error("A workspace already exists at {root}")]
    AlreadyExists { root: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Handle on a discovered workspace root
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Walk up from the current directory to the nearest workspace
    pub fn discover() -> Result<Workspace, WorkspaceError> {
        let cwd = std::env::current_dir()?;
        Self::discover_from(&cwd)
    }

    /// Walk up from `start` to the nearest workspace
    pub fn discover_from(start: &Path) -> Result<Workspace, WorkspaceError> {
        for dir in start.ancestors() {
            if dir.join(MARKER_DIR).is_dir() {
                return Ok(Workspace {
                    root: dir.to_path_buf(),
                });
            }
        }
        Err(WorkspaceError::NotFound {
            start: start.to_path_buf(),
        })
    }

    /// Create the marker and data directories under `root`
    ///
    /// Fails if `root` is already inside a workspace; scaffolding file
    /// content is the init command's job.
    pub fn init(root: &Path) -> Result<Workspace, WorkspaceError> {
        if root.join(MARKER_DIR).is_dir() {
            return Err(WorkspaceError::AlreadyExists {
                root: root.to_path_buf(),
            });
        }

        std::fs::create_dir_all(root.join(MARKER_DIR))?;
        std::fs::create_dir_all(root.join(PROFILES_DIR))?;
        std::fs::create_dir_all(root.join(CART_DIR))?;

        Ok(Workspace {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn catalog_file(&self) -> PathBuf {
        self.root.join(CATALOG_FILE)
    }

    pub fn profiles_dir(&self) -> PathBuf {
        self.root.join(PROFILES_DIR)
    }

    pub fn cart_dir(&self) -> PathBuf {
        self.root.join(CART_DIR)
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(MARKER_DIR).join("config.yaml")
    }
}
