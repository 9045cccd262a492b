//! Charm-style CLI prompts using cliclack

use crate::identity::{validate_app_name, Identity};
use crate::product::ProductConfig;
use crate::project::{self, ProjectRequest};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Application display name
    pub name: Option<String>,

    /// Project directory to create
    pub directory: Option<PathBuf>,

    /// Template store to use instead of the bundled one
    pub template_dir: Option<PathBuf>,

    /// Also rewrite placeholder tokens in file and directory names
    pub rewrite_paths: bool,

    /// Accept defaults for anything not given on the command line
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Step 1: App name
    let app_name = select_app_name(config, &args)?;
    let identity = Identity::for_product(config, &app_name);

    // Step 2: Project directory (defaults to the slug)
    let project_dir = select_directory(&args, &identity, &current_dir)?;

    // Step 3: Template store
    let template_dir = config.resolve_template_dir(args.template_dir.as_deref());
    if args.template_dir.is_some() {
        cliclack::log::info(format!("Using templates from {}", template_dir.display()))?;
    }

    print_summary(&identity, &project_dir)?;

    // Step 4: Create project
    let mut request = ProjectRequest::new(config, &app_name, template_dir, project_dir.clone());
    request.rewrite_paths = args.rewrite_paths;
    create(config, &request).await?;

    // Step 5: Show next steps
    print_next_steps(config, &display_dir(&project_dir, &current_dir))?;

    Ok(())
}

fn select_app_name<C: ProductConfig>(config: &C, args: &CreateArgs) -> Result<String> {
    if let Some(name) = &args.name {
        validate_app_name(name)?;
        cliclack::log::info(format!("App name: {}", name.trim()))?;
        return Ok(name.trim().to_string());
    }

    if args.yes {
        return Ok(config.default_app_name().to_string());
    }

    let input: String = cliclack::input("What is your app name?")
        .placeholder(config.default_app_name())
        .default_input(config.default_app_name())
        .validate(|input: &String| validate_app_name(input).map_err(|e| e.to_string()))
        .interact()?;

    Ok(input.trim().to_string())
}

fn select_directory(args: &CreateArgs, identity: &Identity, current_dir: &Path) -> Result<PathBuf> {
    if let Some(dir) = &args.directory {
        let path = project::validate_project_dir(&dir.to_string_lossy(), current_dir)?;
        cliclack::log::info(format!("Using directory: {}", path.display()))?;
        return Ok(path);
    }

    if args.yes {
        return Ok(project::validate_project_dir(&identity.slug, current_dir)?);
    }

    let base = current_dir.to_path_buf();
    let input: String = cliclack::input("Where should we create your project?")
        .placeholder(&identity.slug)
        .default_input(&identity.slug)
        .validate(move |input: &String| {
            project::validate_project_dir(input, &base)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact()?;

    Ok(project::validate_project_dir(&input, current_dir)?)
}

fn print_summary(identity: &Identity, project_dir: &Path) -> Result<()> {
    cliclack::log::info(format!(
        "App Name: {}\nApp Slug: {}\nBundle ID: {}\nProject Directory: {}",
        identity.display_name,
        identity.slug,
        identity.bundle_id,
        project_dir.display()
    ))?;
    Ok(())
}

async fn create<C: ProductConfig>(config: &C, request: &ProjectRequest) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Creating your project...");

    match project::create_project(config, request).await {
        Ok(report) => {
            spinner.stop(format!(
                "Created {} files in {}",
                report.file_count(),
                request.project_dir.display()
            ));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Failed to create project");
            Err(e.into())
        }
    }
}

/// Show the directory the way the user would `cd` into it
fn display_dir(project_dir: &Path, current_dir: &Path) -> PathBuf {
    project_dir
        .strip_prefix(current_dir)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| project_dir.to_path_buf())
}

fn print_next_steps<C: ProductConfig>(config: &C, project_dir: &Path) -> Result<()> {
    let steps = config.next_steps(project_dir);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro(format!("Your {} project is ready!", config.display_name()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_dir_relative_to_cwd() {
        assert_eq!(
            display_dir(Path::new("/work/mycoolapp"), Path::new("/work")),
            PathBuf::from("mycoolapp")
        );
        assert_eq!(
            display_dir(Path::new("/elsewhere/app"), Path::new("/work")),
            PathBuf::from("/elsewhere/app")
        );
    }
}
