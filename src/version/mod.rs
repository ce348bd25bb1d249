//! Version resolution for repository artifacts
//!
//! This module decides which artifacts of a repository are versions, how they
//! are ordered, and which of them are new since the last emitted version.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Candidates  │────▶│   Filter    │────▶│  Resolver   │───▶ versions
//! │(path, mtime)│     │(match, key) │     │(cursor,sort)│    (oldest first)
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │                   │
//!                            ▼                   ▼
//!                     ┌─────────────────────────────┐
//!                     │        OrderingMode         │
//!                     │ (ts, asc, desc, semver cmp) │
//!                     └─────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`filter`]: Pattern compilation and key extraction
//! - [`mode`]: Ordering semantics and the fail-soft comparator
//! - [`resolver`]: Check and selection resolution
//! - [`semver`]: Lenient semver parsing
//! - [`timestamp`]: Fixed modification timestamp format
//! - [`types`]: `Candidate` and `Version`
//! - [`error`]: Error types for filter operations

pub mod error;
pub mod filter;
pub mod mode;
pub mod resolver;
pub mod semver;
pub mod timestamp;
pub mod types;
