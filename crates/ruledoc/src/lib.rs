use crate::args::Args;
use crate::args::Command;
use crate::status::ExitStatus;

pub mod args;
pub mod commands;
pub mod logging;
pub mod output_format;
pub mod status;

pub use args::GenerateCommand;
pub use output_format::{ConciseEmitter, JsonEmitter, OutputFormat};

pub fn run(args: Args) -> anyhow::Result<ExitStatus> {
    logging::init_logging(args.global_options.log_level.unwrap_or_default());

    if args.global_options.no_color {
        colored::control::set_override(false);
    }

    match args.command {
        Command::Generate(command) => commands::generate::generate(command),
    }
}
