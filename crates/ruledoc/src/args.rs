use crate::logging::LogLevel;
use crate::output_format::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    author,
    name = "ruledoc",
    about = "ruledoc: Generate Documentation Pages for Bug Patterns",
    after_help = "For help with a specific command, see: `ruledoc help <command>`."
)]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub(crate) command: Command,
    #[clap(flatten)]
    pub(crate) global_options: GlobalOptions,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Generate one documentation page per bug pattern
    Generate(GenerateCommand),
}

#[derive(Clone, Debug, Parser)]
#[command(arg_required_else_help(true))]
pub struct GenerateCommand {
    #[arg(
        required = true,
        help = "Tab-delimited bug pattern data file, for example `ruledoc generate bugpatterns.txt`."
    )]
    pub input: PathBuf,
    #[arg(
        short,
        long,
        default_value = "bugpattern",
        help = "Directory the generated pages are written to. Existing pages are overwritten."
    )]
    pub output_dir: PathBuf,
    #[arg(
        long,
        default_value = "examples",
        help = "Root directory under which example source files are located, mirroring the dotted checker namespaces."
    )]
    pub example_dir: PathBuf,
    #[arg(
        long,
        default_value = "false",
        help = "Prepend a YAML front matter block to each page, for consumption by the static site generator."
    )]
    pub front_matter: bool,
    #[arg(
        long,
        default_value = "false",
        help = "Wrap example sources in `{% highlight %}` directives instead of fenced code blocks."
    )]
    pub pygments: bool,
    #[arg(
        short,
        long,
        default_value = "false",
        help = "Show the time taken by the generator."
    )]
    pub with_timing: bool,
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::default(),
        help = "Output serialization format for the generation summary."
    )]
    pub output_format: OutputFormat,
}

/// All configuration options that can be passed "globally"
#[derive(Debug, Default, clap::Args)]
#[command(next_help_heading = "Global options")]
pub(crate) struct GlobalOptions {
    /// The log level. One of: `error`, `warn`, `info`, `debug`, or `trace`. Defaults
    /// to `warn`.
    #[arg(long, global = true)]
    pub(crate) log_level: Option<LogLevel>,

    /// Disable colored output. To turn colored output off, either set this option or set
    /// the environment variable `NO_COLOR` to any non-zero value.
    #[arg(long, global = true)]
    pub(crate) no_color: bool,
}
