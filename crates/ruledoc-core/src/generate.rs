use std::fs;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;

use anyhow::Context;

use crate::config::GenerateConfig;
use crate::examples::{example_dir, find_examples, render_examples, short_checker_name};
use crate::pattern::{BugPattern, parse_line};
use crate::render::render_page;

/// Read the bug pattern data file and write one documentation page per
/// record into the output directory.
///
/// Returns the parsed records in input order. Processing is strictly
/// sequential and fail-fast: the first malformed record or I/O failure
/// aborts the run, and pages already written for earlier records stay on
/// disk.
pub fn generate(config: &GenerateConfig) -> anyhow::Result<Vec<BugPattern>> {
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory `{}`",
            config.output_dir.display()
        )
    })?;

    let input = File::open(&config.input)
        .with_context(|| format!("Failed to open `{}`", config.input.display()))?;

    let mut patterns = Vec::new();

    for (index, line) in BufReader::new(input).lines().enumerate() {
        let line =
            line.with_context(|| format!("Failed to read `{}`", config.input.display()))?;
        let pattern = parse_line(&line)
            .with_context(|| format!("Invalid bug pattern record on line {}", index + 1))?;

        let page = render_record(&pattern, config)?;

        let path = config.output_dir.join(pattern.output_filename());
        fs::write(&path, page)
            .with_context(|| format!("Failed to write `{}`", path.display()))?;
        tracing::debug!("generated {}", path.display());

        patterns.push(pattern);
    }

    tracing::info!("generated {} pages", patterns.len());

    Ok(patterns)
}

/// Render the full text of one page: the templated body, plus the examples
/// section when the checker ships example sources.
fn render_record(pattern: &BugPattern, config: &GenerateConfig) -> anyhow::Result<String> {
    let mut page = render_page(pattern, config.generate_front_matter);

    let directory = example_dir(&config.example_dir_base, &pattern.qualified_checker_id);
    // Not every checker ships examples; a missing directory is expected.
    if directory.is_dir() {
        let examples = find_examples(
            &directory,
            short_checker_name(&pattern.qualified_checker_id),
        )?;
        if !examples.is_empty() {
            page.push_str(&render_examples(&examples, config.use_pygments)?);
        }
    }

    Ok(page)
}
