//! Project creation: validate the destination, then materialize the template

use crate::error::{Result, ScaffoldError};
use crate::identity::Identity;
use crate::product::ProductConfig;
use crate::templates::materializer::{materialize, MaterializeOptions, MaterializeReport};
use std::path::{Path, PathBuf};

/// Resolve a user-supplied project directory against `base`
///
/// Rejects blank input and directories that already exist.
pub fn validate_project_dir(input: &str, base: &Path) -> Result<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ScaffoldError::validation("Project directory cannot be empty"));
    }

    let path = base.join(trimmed);
    ensure_absent(&path)?;
    Ok(path)
}

/// Fail with a validation error when `path` exists
pub fn ensure_absent(path: &Path) -> Result<()> {
    match path.try_exists() {
        Ok(false) => Ok(()),
        Ok(true) => Err(ScaffoldError::validation(format!(
            "Directory already exists: {}. Please choose a different name.",
            path.display()
        ))),
        Err(e) => Err(ScaffoldError::source_read(path, e)),
    }
}

/// Everything needed to instantiate one project
#[derive(Debug, Clone)]
pub struct ProjectRequest {
    pub identity: Identity,
    pub template_dir: PathBuf,
    pub project_dir: PathBuf,
    pub rewrite_paths: bool,
}

impl ProjectRequest {
    pub fn new<C: ProductConfig>(
        config: &C,
        app_name: &str,
        template_dir: PathBuf,
        project_dir: PathBuf,
    ) -> Self {
        Self {
            identity: Identity::for_product(config, app_name),
            template_dir,
            project_dir,
            rewrite_paths: false,
        }
    }
}

/// Create a new project from the template store
///
/// The destination check runs before anything is written, so a conflict
/// leaves the filesystem untouched.
pub async fn create_project<C: ProductConfig>(
    config: &C,
    request: &ProjectRequest,
) -> Result<MaterializeReport> {
    ensure_absent(&request.project_dir)?;

    if !request.template_dir.is_dir() {
        return Err(ScaffoldError::validation(format!(
            "Template directory not found: {}",
            request.template_dir.display()
        )));
    }

    let options = MaterializeOptions {
        tokens: config.placeholder_tokens(),
        rewrite_paths: request.rewrite_paths,
    };

    tracing::info!(
        product = config.name(),
        app = %request.identity.display_name,
        slug = %request.identity.slug,
        bundle_id = %request.identity.bundle_id,
        dir = %request.project_dir.display(),
        "creating project"
    );

    materialize(
        &request.template_dir,
        &request.project_dir,
        &request.identity,
        &options,
    )
    .await
}
