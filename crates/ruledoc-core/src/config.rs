use std::path::PathBuf;

/// Resolved configuration for one generation run, assembled by the caller
/// from the command-line arguments.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Tab-delimited bug pattern data file.
    pub input: PathBuf,
    /// Directory the generated pages are written to. Created if absent;
    /// existing pages are overwritten.
    pub output_dir: PathBuf,
    /// Root of the example source tree, mirroring the dotted checker
    /// namespaces. Read-only.
    pub example_dir_base: PathBuf,
    /// Prepend a YAML front matter block to each page.
    pub generate_front_matter: bool,
    /// Wrap example sources in highlight directives instead of fenced code
    /// blocks.
    pub use_pygments: bool,
}
