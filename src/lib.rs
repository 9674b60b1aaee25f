//! # rstmap
//!
//! Block index over the keyword stream of reservoir-simulation restart
//! files:
//! - Locate a restart block by report step, simulation date or raw position
//! - Read-only block maps supporting the same name queries as the file
//! - Structural validation of the block/date layout
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      BlockLocator                            │
//! │        (report step / sim time / occurrence / raw)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ BlockSpans  │          │RecordCatalog│
//!   │   (arena)   │          │ file / view │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │   Record    │
//!                           │ (accessor)  │
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod catalog;
pub mod locator;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RstError};
pub use config::LocatorConfig;
pub use catalog::{BlockMap, RecordCatalog, RecordFile};
pub use locator::{BlockKey, BlockLocator, BlockSummary, Diagnostic};
pub use record::{Record, RecordData, Scalar, SimTime};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of rstmap
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
