//! Bundled templates and project materialization
//!
//! This module provides:
//! - The embedded asset bundle (per-DBMS subtrees plus the compose template)
//! - Depth-first copying of a bundle subtree onto disk
//! - Rendering of text templates with tera

pub mod bundle;
pub mod copier;
pub mod render;

pub use bundle::{DirEntry, EmbeddedFile, EmbeddedFs, ASSETS};
pub use copier::{copy_tree, create_directory, ensure_absent, write_rendered};
pub use render::render_template;
