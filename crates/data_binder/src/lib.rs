// crates/data_binder/src/lib.rs

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use gen_base_classes_options::GenBaseClassesOptions;
use process_resources_options::ProcessResourcesOptions;

/// Checks the constraints clap cannot express for a PROCESS_RESOURCES run:
/// a non-blank package name and a resource input that is an existing
/// directory. Output paths are left alone; the downstream processor creates
/// them.
pub fn validate_process_resources(options: &ProcessResourcesOptions) -> Result<()> {
    if options.app_id.trim().is_empty() {
        bail!("--package must not be blank");
    }
    let metadata = fs::metadata(&options.res_input).with_context(|| {
        format!(
            "--resInput {} does not exist",
            options.res_input.display()
        )
    })?;
    if !metadata.is_dir() {
        bail!(
            "--resInput {} is not a directory",
            options.res_input.display()
        );
    }
    Ok(())
}

/// Checks the constraints for a GEN_BASE_CLASSES run: a non-blank package
/// name, an existing layout-info input (zip file or folder) and existing
/// dependency class-info entries.
pub fn validate_gen_base_classes(options: &GenBaseClassesOptions) -> Result<()> {
    if options.package_name.trim().is_empty() {
        bail!("--package must not be blank");
    }
    require_exists(&options.layout_info_input, "--layoutInfoFiles")?;
    for dependency in &options.dependency_class_info {
        require_exists(dependency, "--dependencyClassInfoList")?;
    }
    Ok(())
}

fn require_exists(path: &Path, flag: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} {} does not exist", flag, path.display());
    }
    Ok(())
}

/// Validates the options and, on success, prints the populated record. The
/// record is the sole interface handed to the resource processor, which
/// lives outside this tool.
pub fn run_process_resources(options: &ProcessResourcesOptions) -> Result<()> {
    validate_process_resources(options)?;
    println!("{}", options);
    Ok(())
}

pub fn run_gen_base_classes(options: &GenBaseClassesOptions) -> Result<()> {
    validate_gen_base_classes(options)?;
    println!("{}", options);
    Ok(())
}
