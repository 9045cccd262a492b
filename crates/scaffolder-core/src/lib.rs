//! Scaffolder Core - Shared library for template-based project scaffolding
//!
//! This library turns a bundled template tree into a new project with its own
//! identity (display name, slug, bundle identifier), and keeps that template
//! tree in sync with the canonical project it was extracted from.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Identity derivation, file classification,
//!   placeholder substitution, template materialization, template store sync
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and
//!   `create_project` for custom UIs
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{create_project, ProductConfig, ProjectRequest};
//!
//! let request = ProjectRequest::new(&config, "My Cool App", template_dir, project_dir);
//! let report = create_project(&config, &request).await?;
//! println!("{} files written", report.file_count());
//! ```

pub mod error;
pub mod identity;
pub mod product;
pub mod project;
pub mod sync;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{Result, ScaffoldError};
pub use identity::{derive_bundle_id, derive_slug, validate_app_name, Identity};
pub use product::ProductConfig;
pub use project::{create_project, validate_project_dir, ProjectRequest};
pub use sync::{synchronize, ExclusionRules, SyncManifest, SyncReport};
pub use templates::{materialize, MaterializeOptions, MaterializeReport, PlaceholderTokens, SubstitutionMap};

#[cfg(feature = "tui")]
pub use tui::run;
