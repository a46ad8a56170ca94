//! Domain layer modules
//!
//! This module contains the rendering model:
//! - `template`: Template fragments, sources and placeholder substitution
//! - `component`: Mail component tree and the document builder
//! - `blueprint`: JSON description of a document tree

pub mod blueprint;
pub mod component;
pub mod template;
