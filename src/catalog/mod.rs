// src/catalog/mod.rs

//! Course metadata catalog.
//!
//! - [`store`] loads the combined catalog file and indexes it by code.
//! - [`classify`] extracts special enrollment requirements (standing,
//!   instructor consent, AP scores, ...) from raw prerequisite text.

pub mod classify;
pub mod store;

pub use classify::{classify_special_requirements, CourseInfo};
pub use store::CourseCatalog;
