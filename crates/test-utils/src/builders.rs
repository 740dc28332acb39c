#![allow(dead_code)]

use prereq_graph::config::{ConfigFile, DataSection, LayoutSection, RawConfigFile};
use prereq_graph::errors::Result;
use prereq_graph::model::{AstNode, CourseRecord, PrereqExpr};

/// Builder for a list of `CourseRecord`s to simplify compiler tests.
#[derive(Default)]
pub struct RecordsBuilder {
    records: Vec<CourseRecord>,
}

impl RecordsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Course whose prerequisite expression is `prereq`.
    pub fn course(mut self, code: &str, prereq: PrereqExpr) -> Self {
        self.records.push(CourseRecord::new(code, Some(prereq)));
        self
    }

    /// Course with no prerequisites.
    pub fn leaf(mut self, code: &str) -> Self {
        self.records.push(CourseRecord::new(code, None));
        self
    }

    /// Course with a title and raw prerequisite text (for catalog tests).
    pub fn described(mut self, code: &str, title: &str, raw_prereq: &str) -> Self {
        let mut record = CourseRecord::new(code, None);
        record.title = title.to_string();
        record.raw_prereq_text = raw_prereq.to_string();
        self.records.push(record);
        self
    }

    pub fn build(self) -> Vec<CourseRecord> {
        self.records
    }
}

pub fn course(code: &str) -> PrereqExpr {
    PrereqExpr::course(code)
}

pub fn all_of(items: Vec<PrereqExpr>) -> PrereqExpr {
    PrereqExpr::and(items)
}

pub fn one_of(items: Vec<PrereqExpr>) -> PrereqExpr {
    PrereqExpr::or(items)
}

/// `ROOT` AST node.
pub fn root(code: &str, children: Vec<AstNode>) -> AstNode {
    AstNode::root(code, children)
}

/// `CHILD` AST node.
pub fn child(code: &str, children: Vec<AstNode>) -> AstNode {
    AstNode::child(code, children)
}

pub fn leaf(code: &str) -> AstNode {
    AstNode::child(code, Vec::new())
}

/// OR marker over the given alternatives.
pub fn or(alternatives: Vec<AstNode>) -> AstNode {
    AstNode::or(alternatives)
}

/// Linear prerequisite chain: `codes[0]` is the root, each next code is the
/// only prerequisite of the previous one.
pub fn chain(codes: &[&str]) -> Option<AstNode> {
    let (first, rest) = codes.split_first()?;
    let mut tail: Vec<AstNode> = Vec::new();
    for code in rest.iter().rev() {
        tail = vec![child(code, tail)];
    }
    Some(root(first, tail))
}

/// Builder for `ConfigFile` to simplify config tests.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                layout: LayoutSection::default(),
                data: DataSection::default(),
            },
        }
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.layout.max_depth = depth;
        self
    }

    pub fn sweeps(mut self, sweeps: usize) -> Self {
        self.config.layout.sweeps = sweeps;
        self
    }

    pub fn node_gap_x(mut self, gap: f64) -> Self {
        self.config.layout.node_gap_x = gap;
        self
    }

    pub fn try_build(self) -> Result<ConfigFile> {
        ConfigFile::try_from(self.config)
    }

    pub fn build(self) -> ConfigFile {
        self.try_build()
            .expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
