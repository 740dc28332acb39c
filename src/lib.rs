// src/lib.rs

//! Course prerequisite graphs for an interactive explorer.
//!
//! Two pure entry points do the real work:
//! - [`compile`] turns a course's boolean prerequisite expression into a flat
//!   dependency graph with "satisfies one of" groups.
//! - [`extract_layers`] turns a materialized prerequisite tree into a
//!   depth-bounded, crossing-reduced layered layout.
//!
//! Everything else (catalog and department loading, config, CLI) feeds
//! data into those two.

pub mod catalog;
pub mod cli;
pub mod compile;
pub mod config;
pub mod data;
pub mod errors;
pub mod fs;
pub mod layout;
pub mod logging;
pub mod model;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::catalog::CourseCatalog;
use crate::cli::{CliArgs, Command};
use crate::config::{load_or_default, ConfigFile};
use crate::data::DepartmentStore;
use crate::errors::PrereqGraphError;
use crate::fs::RealFileSystem;
use crate::layout::LayoutOptions;
use crate::model::list_root_courses;

pub use crate::compile::{compile, materialize, DependencyGraph};
pub use crate::layout::{extract_layers, extract_layers_with, LayeredView};
pub use crate::model::{find_root_node, AstNode, CourseRecord, PrereqExpr};

/// High-level entry point used by `main.rs`.
///
/// Loads config, applies CLI overrides and prints the requested JSON (or
/// plain list) to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let mut cfg = load_or_default(&args.config)
        .with_context(|| format!("loading config from {:?}", args.config))?;
    if let Some(dir) = args.ast_dir {
        cfg.data.ast_dir = dir;
    }
    if let Some(path) = args.catalog {
        cfg.data.catalog = path;
    }
    debug!(?cfg, "effective configuration");

    match args.command {
        Command::Courses { dept } => print_courses(&cfg, dept.as_deref()),
        Command::Layers {
            code,
            depth,
            from_catalog,
        } => {
            let mut options = cfg.layout_options();
            if let Some(depth) = depth {
                options.max_depth = depth;
            }
            print_layers(&cfg, &code, &options, from_catalog)
        }
        Command::Compile { code, order } => print_compiled(&cfg, &code, order),
        Command::Info { code } => print_info(&cfg, &code),
    }
}

fn load_catalog(cfg: &ConfigFile) -> Result<CourseCatalog> {
    CourseCatalog::load(&RealFileSystem, &cfg.data.catalog)
        .with_context(|| format!("loading catalog from {:?}", cfg.data.catalog))
}

fn print_courses(cfg: &ConfigFile, dept: Option<&str>) -> Result<()> {
    let mut store = DepartmentStore::new(RealFileSystem, &cfg.data.ast_dir);
    let codes = match dept {
        Some(prefix) => list_root_courses(store.load_department(prefix)?),
        None => list_root_courses(&store.load_all()?),
    };
    info!(count = codes.len(), "listing root courses");
    for code in codes {
        println!("{code}");
    }
    Ok(())
}

fn print_layers(
    cfg: &ConfigFile,
    code: &str,
    options: &LayoutOptions,
    from_catalog: bool,
) -> Result<()> {
    let root = if from_catalog {
        load_catalog(cfg)?.materialize(code)
    } else {
        let mut store = DepartmentStore::new(RealFileSystem, &cfg.data.ast_dir);
        store.find_root(code)?
    };

    let Some(root) = root else {
        return Err(PrereqGraphError::CourseNotFound(code.to_string()).into());
    };

    let view = extract_layers_with(Some(&root), options);
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

fn print_compiled(cfg: &ConfigFile, code: &str, order: bool) -> Result<()> {
    let graph = load_catalog(cfg)?
        .compile(code)
        .ok_or_else(|| PrereqGraphError::CourseNotFound(code.to_string()))?;
    if order {
        for course in graph.topological_order()? {
            println!("{course}");
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&graph)?);
    }
    Ok(())
}

fn print_info(cfg: &ConfigFile, code: &str) -> Result<()> {
    let catalog = load_catalog(cfg)?;
    let info = catalog
        .course_info(code)
        .ok_or_else(|| PrereqGraphError::CourseNotFound(code.to_string()))?;
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
