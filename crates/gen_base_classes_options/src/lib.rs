// crates/gen_base_classes_options/src/lib.rs

use std::fmt;
use std::path::PathBuf;

use clap::{ArgAction, Args};

/// Command-line options for the GEN_BASE_CLASSES pass, which turns exported
/// layout-info files into base classes and a class-info file for dependants.
///
/// Same contract as its PROCESS_RESOURCES sibling: clap fills the record in
/// once, the caller validates paths, and the record stays read-only.
#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct GenBaseClassesOptions {
    /// The zip file or folder containing the layout info files.
    #[arg(long = "layoutInfoFiles", value_name = "PATH")]
    pub layout_info_input: PathBuf,

    /// Class info files that were extracted from dependencies, i.e. this
    /// pass's own output when it was run for a dependency module. May be
    /// given multiple times.
    #[arg(long = "dependencyClassInfoList", value_name = "PATH")]
    pub dependency_class_info: Vec<PathBuf>,

    /// The package name of the application. This should be the same package
    /// that the R file uses.
    #[arg(long = "package", value_name = "PACKAGE")]
    pub package_name: String,

    /// The output folder for the class info file. That metadata should be
    /// passed down to dependants.
    #[arg(long = "classInfoOut", value_name = "PATH")]
    pub class_info_out: PathBuf,

    /// The folder or zip file where generated sources are written.
    #[arg(long = "sourceOut", value_name = "PATH")]
    pub source_out: PathBuf,

    /// Whether the source output should be exported as one zip file instead
    /// of a folder.
    #[arg(
        long = "zipSourceOutput",
        value_name = "BOOL",
        default_value_t = false,
        action = ArgAction::Set
    )]
    pub zip_source_output: bool,

    /// Whether generated code should reference androidX packages.
    #[arg(
        long = "useAndroidX",
        value_name = "BOOL",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub use_android_x: bool,

    #[arg(
        long = "enableViewBinding",
        value_name = "BOOL",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub enable_view_binding: bool,

    #[arg(
        long = "enableDataBinding",
        value_name = "BOOL",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub enable_data_binding: bool,
}

impl Default for GenBaseClassesOptions {
    fn default() -> Self {
        GenBaseClassesOptions {
            layout_info_input: PathBuf::new(),
            dependency_class_info: Vec::new(),
            package_name: String::new(),
            class_info_out: PathBuf::new(),
            source_out: PathBuf::new(),
            zip_source_output: false,
            use_android_x: true,
            enable_view_binding: true,
            enable_data_binding: true,
        }
    }
}

/// Diagnostic rendering: one line, every field, declaration order.
impl fmt::Display for GenBaseClassesOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dependencies: Vec<String> = self
            .dependency_class_info
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        write!(
            f,
            "GenBaseClassesOptions{{layoutInfoFiles={}, dependencyClassInfoList=[{}], \
             package='{}', classInfoOut={}, sourceOut={}, zipSourceOutput={}, \
             useAndroidX={}, enableViewBinding={}, enableDataBinding={}}}",
            self.layout_info_input.display(),
            dependencies.join(", "),
            self.package_name,
            self.class_info_out.display(),
            self.source_out.display(),
            self.zip_source_output,
            self.use_android_x,
            self.enable_view_binding,
            self.enable_data_binding,
        )
    }
}
