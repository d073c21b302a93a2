//! Read-only asset bundle compiled into the binary
//!
//! Files under `assets/` are embedded with `include_bytes!` and addressed by
//! their slash-separated path relative to that directory. Directories are
//! implied by the file paths.

use crate::error::{Result, SandboxError};
use std::collections::BTreeMap;

/// A file embedded in the bundle
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedFile {
    pub path: &'static str,
    pub contents: &'static [u8],
}

/// An entry directly inside a bundle directory
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

/// A static, path-addressed file tree
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedFs {
    files: &'static [EmbeddedFile],
}

macro_rules! embed_assets {
    ($($path:literal),* $(,)?) => {
        &[$(EmbeddedFile {
            path: $path,
            contents: include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/", $path)),
        }),*]
    };
}

static FILES: &[EmbeddedFile] = embed_assets![
    "docker/docker-compose.tmpl",
    "docker/postgres/postgres/postgresql.conf",
    "docker/postgres/postgres/init.sql",
    "docker/postgres/conf.d/postgres.d/conf.yaml",
    "docker/mysql/mysql/my.cnf",
    "docker/mysql/mysql/init.sql",
    "docker/mysql/conf.d/mysql.d/conf.yaml",
    "docker/sql server/sqlserver/init.sql",
    "docker/sql server/sqlserver/setup.sh",
    "docker/sql server/conf.d/sqlserver.d/conf.yaml",
];

/// Templates and DBMS subtrees for the Docker provider
pub static ASSETS: EmbeddedFs = EmbeddedFs::new(FILES);

fn trim_dir(dir: &str) -> &str {
    dir.trim_matches('/')
}

impl EmbeddedFs {
    pub const fn new(files: &'static [EmbeddedFile]) -> Self {
        Self { files }
    }

    /// Full contents of the file at `path`
    pub fn read_file(&self, path: &str) -> Result<&'static [u8]> {
        let path = trim_dir(path);
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.contents)
            .ok_or_else(|| SandboxError::MissingAsset(path.to_string()))
    }

    pub fn read_to_str(&self, path: &str) -> Result<&'static str> {
        let bytes = self.read_file(path)?;
        std::str::from_utf8(bytes).map_err(|_| SandboxError::MissingAsset(path.to_string()))
    }

    /// Entries directly inside `dir`, sorted by name
    pub fn read_dir(&self, dir: &str) -> Result<Vec<DirEntry>> {
        let dir = trim_dir(dir);
        let mut entries: BTreeMap<&str, bool> = BTreeMap::new();

        for file in self.files {
            let Some(rest) = file
                .path
                .strip_prefix(dir)
                .and_then(|rest| rest.strip_prefix('/'))
            else {
                continue;
            };
            match rest.split_once('/') {
                Some((child_dir, _)) => {
                    entries.insert(child_dir, true);
                }
                None => {
                    entries.entry(rest).or_insert(false);
                }
            }
        }

        if entries.is_empty() {
            return Err(SandboxError::MissingAsset(dir.to_string()));
        }

        Ok(entries
            .into_iter()
            .map(|(name, is_dir)| DirEntry {
                name: name.to_string(),
                is_dir,
            })
            .collect())
    }

    /// Every file below `dir`, with paths relative to `dir`
    #[cfg(test)]
    pub(crate) fn files_under(&self, dir: &str) -> Vec<(&'static str, &'static [u8])> {
        let dir = trim_dir(dir);
        self.files
            .iter()
            .filter_map(|f| {
                f.path
                    .strip_prefix(dir)
                    .and_then(|rest| rest.strip_prefix('/'))
                    .map(|rest| (rest, f.contents))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_dir_lists_files_and_directories() {
        let entries = ASSETS.read_dir("docker/postgres").unwrap();
        assert_eq!(
            entries,
            vec![
                DirEntry {
                    name: "conf.d".to_string(),
                    is_dir: true
                },
                DirEntry {
                    name: "postgres".to_string(),
                    is_dir: true
                },
            ]
        );

        let root = ASSETS.read_dir("docker/").unwrap();
        assert!(root.contains(&DirEntry {
            name: "docker-compose.tmpl".to_string(),
            is_dir: false
        }));
        assert!(root.contains(&DirEntry {
            name: "sql server".to_string(),
            is_dir: true
        }));
    }

    #[test]
    fn test_read_dir_does_not_match_name_prefixes() {
        // "docker/post" is a prefix of "docker/postgres" but not a directory
        assert!(matches!(
            ASSETS.read_dir("docker/post"),
            Err(SandboxError::MissingAsset(_))
        ));
    }

    #[test]
    fn test_read_file_returns_embedded_bytes() {
        let conf = ASSETS.read_to_str("docker/mysql/mysql/my.cnf").unwrap();
        assert!(conf.contains("performance_schema"));
        assert!(ASSETS.read_file("docker/nope.txt").is_err());
    }

    #[test]
    fn test_files_under_uses_relative_paths() {
        let files = ASSETS.files_under("docker/sql server");
        let paths: Vec<_> = files.iter().map(|(p, _)| *p).collect();
        assert!(paths.contains(&"sqlserver/init.sql"));
        assert!(paths.contains(&"conf.d/sqlserver.d/conf.yaml"));
        assert_eq!(paths.len(), 3);
    }
}
