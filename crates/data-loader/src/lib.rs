//! # Data Loader Crate
//!
//! Loads the internship catalog the recommender is trained on.
//!
//! ## Main Components
//!
//! - **types**: `Internship` and the in-memory `Catalog`
//! - **parser**: parse and normalize the catalog JSON
//! - **index**: file loading and search-text derivation
//! - **error**: error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/internship_data.json"))?;
//! println!("{} internships loaded", catalog.len());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use parser::normalize_tokens;
pub use types::{Catalog, Internship, InternshipId};
