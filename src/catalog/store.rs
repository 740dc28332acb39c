// src/catalog/store.rs

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::catalog::classify::{classify_special_requirements, CourseInfo};
use crate::compile::{compile, materialize, DependencyGraph};
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::model::{compact_code, normalize_code, AstNode, CatalogEntry, CourseRecord};

/// In-memory course catalog, indexed by normalized code and by compact
/// code (`"CSE 11"` and `"cse11"` both resolve).
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    records: Vec<CourseRecord>,
    by_code: HashMap<String, usize>,
}

impl CourseCatalog {
    pub fn from_records(records: Vec<CourseRecord>) -> Self {
        let mut by_code = HashMap::with_capacity(records.len() * 2);
        for (i, record) in records.iter().enumerate() {
            let code = normalize_code(&record.code);
            if code.is_empty() {
                continue;
            }
            by_code.entry(compact_code(&code)).or_insert(i);
            by_code.entry(code).or_insert(i);
        }
        Self { records, by_code }
    }

    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self::from_records(entries.into_iter().map(|e| e.course).collect())
    }

    /// Read a combined catalog file: a JSON array of `{ "course": { ... } }`.
    ///
    /// Entries that do not match the expected shape are skipped with a
    /// warning; a file that is not an array yields an empty catalog.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        let contents = fs.read_to_string(path)?;
        let value: Value = serde_json::from_str(&contents)?;

        let Value::Array(items) = value else {
            warn!(path = ?path, "catalog file is not a JSON array; using empty catalog");
            return Ok(Self::default());
        };

        let mut entries = Vec::with_capacity(items.len());
        let mut skipped = 0usize;
        for item in items {
            match serde_json::from_value::<CatalogEntry>(item) {
                Ok(entry) => entries.push(entry),
                Err(err) => {
                    skipped += 1;
                    debug!(error = %err, "skipping malformed catalog entry");
                }
            }
        }
        if skipped > 0 {
            warn!(skipped, "skipped malformed catalog entries");
        }

        let catalog = Self::from_entries(entries);
        info!(path = ?path, courses = catalog.len(), "loaded course catalog");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, for [`compile`](crate::compile::compile) and
    /// [`materialize`](crate::compile::materialize).
    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    pub fn get(&self, code: &str) -> Option<&CourseRecord> {
        let code = normalize_code(code);
        self.by_code
            .get(&code)
            .or_else(|| self.by_code.get(&compact_code(&code)))
            .map(|&i| &self.records[i])
    }

    /// Compile the dependency graph of a catalog course. `code` may be in
    /// any form [`get`](Self::get) accepts; the record's own code is what
    /// reaches the compiler.
    pub fn compile(&self, code: &str) -> Option<DependencyGraph> {
        let record = self.get(code)?;
        Some(compile(&record.code, &self.records))
    }

    /// Materialized tree of a catalog course, resolved like [`compile`](Self::compile).
    pub fn materialize(&self, code: &str) -> Option<AstNode> {
        let record = self.get(code)?;
        materialize(&record.code, &self.records)
    }

    /// Title plus special requirements mined from the raw prerequisite text.
    pub fn course_info(&self, code: &str) -> Option<CourseInfo> {
        let record = self.get(code)?;
        Some(CourseInfo {
            title: record.title.clone(),
            special_requirements: classify_special_requirements(&record.raw_prereq_text),
        })
    }
}
