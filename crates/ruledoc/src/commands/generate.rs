use ruledoc_core::config::GenerateConfig;

use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::args::GenerateCommand;
use crate::output_format::{ConciseEmitter, Emitter, JsonEmitter, OutputFormat};
use crate::status::ExitStatus;

pub fn generate(args: GenerateCommand) -> Result<ExitStatus> {
    let start = if args.with_timing {
        Some(Instant::now())
    } else {
        None
    };

    let config = GenerateConfig {
        input: args.input.clone(),
        output_dir: args.output_dir.clone(),
        example_dir_base: args.example_dir.clone(),
        generate_front_matter: args.front_matter,
        use_pygments: args.pygments,
    };

    let patterns = ruledoc_core::generate::generate(&config)?;

    if patterns.is_empty() {
        println!(
            "{}: {}",
            "Warning".yellow().bold(),
            "No bug patterns found in the input file.".white().bold()
        );
        return Ok(ExitStatus::Success);
    }

    let mut stdout = std::io::stdout();

    match args.output_format {
        OutputFormat::Concise => {
            ConciseEmitter.emit(&mut stdout, &patterns)?;
        }
        OutputFormat::Json => {
            JsonEmitter.emit(&mut stdout, &patterns)?;
        }
    }

    // Skip timing for JSON to avoid corrupting structured output
    if args.output_format != OutputFormat::Json
        && let Some(start) = start
    {
        let duration = start.elapsed();
        println!("\nGenerated pages in: {duration:?}");
    }

    Ok(ExitStatus::Success)
}
