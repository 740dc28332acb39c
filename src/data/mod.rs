// src/data/mod.rs

//! Lazy, cached loading of per-department AST files.
//!
//! The AST directory holds one `<dept>_ast.json` per department (for
//! example `math_ast.json`). A file is read the first time any course of
//! that department is needed and kept for the lifetime of the store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use crate::errors::Result;
use crate::fs::FileSystem;
use crate::model::ast::parse_department;
use crate::model::{find_root_node, AstNode};

pub const AST_FILE_SUFFIX: &str = "_ast.json";

/// Department prefix of a course code: the leading token, uppercased
/// (`"math 100a"` -> `"MATH"`).
pub fn department_prefix(code: &str) -> Option<String> {
    code.split_whitespace().next().map(str::to_uppercase)
}

#[derive(Debug)]
pub struct DepartmentStore<F: FileSystem> {
    fs: F,
    ast_dir: PathBuf,
    /// Prefix -> file path, discovered on first use.
    paths: Option<HashMap<String, PathBuf>>,
    cache: HashMap<String, Vec<AstNode>>,
}

impl<F: FileSystem> DepartmentStore<F> {
    pub fn new(fs: F, ast_dir: impl AsRef<Path>) -> Self {
        Self {
            fs,
            ast_dir: ast_dir.as_ref().to_path_buf(),
            paths: None,
            cache: HashMap::new(),
        }
    }

    pub fn ast_dir(&self) -> &Path {
        &self.ast_dir
    }

    /// Sorted department prefixes available in the AST directory.
    pub fn departments(&mut self) -> Result<Vec<String>> {
        let mut prefixes: Vec<String> = self.paths()?.keys().cloned().collect();
        prefixes.sort();
        Ok(prefixes)
    }

    /// Entries of one department. Unknown prefixes yield an empty slice.
    pub fn load_department(&mut self, prefix: &str) -> Result<&[AstNode]> {
        let key = prefix.trim().to_uppercase();
        if !self.cache.contains_key(&key) {
            let nodes = self.read_department(&key)?;
            self.cache.insert(key.clone(), nodes);
        }
        Ok(self.cache.get(&key).map(Vec::as_slice).unwrap_or_default())
    }

    /// Entries of the department that `code` belongs to.
    pub fn load_for_course(&mut self, code: &str) -> Result<&[AstNode]> {
        match department_prefix(code) {
            Some(prefix) => self.load_department(&prefix),
            None => Ok(&[]),
        }
    }

    /// The `ROOT` tree for a course, loading its department if needed.
    pub fn find_root(&mut self, code: &str) -> Result<Option<AstNode>> {
        let nodes = self.load_for_course(code)?;
        Ok(find_root_node(code, nodes).cloned())
    }

    /// Every department's entries concatenated, in prefix order.
    pub fn load_all(&mut self) -> Result<Vec<AstNode>> {
        let mut all = Vec::new();
        for prefix in self.departments()? {
            all.extend_from_slice(self.load_department(&prefix)?);
        }
        Ok(all)
    }

    fn paths(&mut self) -> Result<&HashMap<String, PathBuf>> {
        if self.paths.is_none() {
            let discovered = self.discover()?;
            debug!(dir = ?self.ast_dir, departments = discovered.len(), "discovered AST files");
            self.paths = Some(discovered);
        }
        let paths: &HashMap<String, PathBuf> = self.paths.get_or_insert_with(HashMap::new);
        Ok(paths)
    }

    fn discover(&self) -> Result<HashMap<String, PathBuf>> {
        let mut found = HashMap::new();
        if !self.fs.is_dir(&self.ast_dir) {
            return Ok(found);
        }
        for path in self.fs.read_dir(&self.ast_dir)? {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(stem) = name.strip_suffix(AST_FILE_SUFFIX) else {
                continue;
            };
            if stem.is_empty() || !self.fs.is_file(&path) {
                continue;
            }
            found.entry(stem.to_uppercase()).or_insert(path);
        }
        Ok(found)
    }

    fn read_department(&mut self, prefix: &str) -> Result<Vec<AstNode>> {
        let Some(path) = self.paths()?.get(prefix).cloned() else {
            debug!(prefix = %prefix, "no AST file for department");
            return Ok(Vec::new());
        };

        let contents = self.fs.read_to_string(&path)?;
        let value: Value = serde_json::from_str(&contents)?;
        let nodes = parse_department(&value);
        info!(prefix = %prefix, courses = nodes.len(), "loaded department AST");
        Ok(nodes)
    }
}
