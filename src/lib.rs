#![forbid(unsafe_code)]

//! Rock Report (rockr) — single-shot band-dataset report generator.
//!
//! Given a JSON dataset mounted by a compute platform (Ocean-style
//! `/data/inputs` convention), the pipeline:
//! 1. **Locates** the dataset (mount root as file, ordered candidates,
//!    then a deterministic directory fallback)
//! 2. **Filters** bands by a rating threshold and **aggregates** statistics
//! 3. **Writes** a dated, pretty-printed JSON report, then exits
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use rock_report::prelude::*;
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use rock_report::core::config::Config;
//! use rock_report::loader::discovery::InputLocator;
//! ```

pub mod prelude;

pub mod core;
pub mod loader;
pub mod pipeline;
pub mod report;
