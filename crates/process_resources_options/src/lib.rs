// crates/process_resources_options/src/lib.rs

use std::fmt;
use std::path::PathBuf;

use clap::{ArgAction, Args};

/// Command-line options for the PROCESS_RESOURCES pass.
///
/// Populated once by the argument parser and treated as read-only afterwards.
/// Required-ness is enforced by clap; path validation (does `--resInput`
/// actually name a directory?) is the caller's job, not this record's.
///
/// The boolean flags take an explicit `true`/`false` value, e.g.
/// `--zipLayoutInfo false`.
#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct ProcessResourcesOptions {
    /// The package name of the application. This should be the same package
    /// that the R file uses.
    #[arg(long = "package", value_name = "PACKAGE")]
    pub app_id: String,

    /// The folder which contains the merged resources, i.e. the folder that
    /// contains the layout folder, drawable folder etc.
    #[arg(long = "resInput", value_name = "DIR")]
    pub res_input: PathBuf,

    /// The output zip file or folder which will contain the processed
    /// resources. This should be the input for aapt.
    #[arg(long = "resOutput", value_name = "PATH")]
    pub res_output: PathBuf,

    /// The folder into which the xml files that keep the binding information
    /// for the layout files are exported.
    #[arg(long = "layoutInfoOutput", value_name = "DIR")]
    pub layout_info_output: PathBuf,

    /// Whether the generated layout-info files should be zipped into one
    /// layouts.zip file in the layout-info output folder.
    #[arg(
        long = "zipLayoutInfo",
        value_name = "BOOL",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub zip_layout_info: bool,

    /// Whether the processed resource files should be zipped into one file.
    #[arg(
        long = "zipResOutput",
        value_name = "BOOL",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub zip_res_output: bool,

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

    /// Whether generated code should reference androidX packages.
    #[arg(
        long = "useAndroidX",
        value_name = "BOOL",
        default_value_t = false,
        action = ArgAction::Set
    )]
    pub use_android_x: bool,
}

/// An unpopulated record: empty required fields, documented boolean defaults.
/// The parsing layer is responsible for rejecting records whose required
/// fields were never filled in.
impl Default for ProcessResourcesOptions {
    fn default() -> Self {
        ProcessResourcesOptions {
            app_id: String::new(),
            res_input: PathBuf::new(),
            res_output: PathBuf::new(),
            layout_info_output: PathBuf::new(),
            zip_layout_info: true,
            zip_res_output: true,
            enable_view_binding: true,
            enable_data_binding: true,
            use_android_x: false,
        }
    }
}

/// Diagnostic rendering: one line, every field, fixed order. Meant for
/// logging only, never parsed back.
impl fmt::Display for ProcessResourcesOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProcessResourcesOptions{{appId='{}', resInput={}, resOutput={}, \
             zipResOutput={}, layoutInfoOutput={}, zipLayoutInfo={}, \
             useAndroidX={}, enableDataBinding={}, enableViewBinding={}}}",
            self.app_id,
            self.res_input.display(),
            self.res_output.display(),
            self.zip_res_output,
            self.layout_info_output.display(),
            self.zip_layout_info,
            self.use_android_x,
            self.enable_data_binding,
            self.enable_view_binding,
        )
    }
}
