#![doc(hidden)]

//! Core library for pypi-rank
//!
//! This library implements the pypi-rank tool, which ranks the most-downloaded
//! PyPI packages by their downloads-to-GitHub-stars ratio.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`facts`]: Data collection from PyPI and GitHub
//! - [`store`]: SQLite persistence of the analysis results

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod facts;
#[cfg(not(any(debug_assertions, test)))]
mod facts;

#[cfg(any(debug_assertions, test))]
pub mod store;
#[cfg(not(any(debug_assertions, test)))]
mod store;

pub use crate::commands::{Host, run};
