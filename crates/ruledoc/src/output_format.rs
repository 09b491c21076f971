use clap::ValueEnum;
use colored::Colorize;
use ruledoc_core::pattern::BugPattern;
use serde::Serialize;
use std::collections::HashMap;
use std::io::{BufWriter, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    /// Print a human-readable summary of the generated pages
    Concise,
    /// Print the parsed bug pattern records as JSON
    Json,
}

/// Takes the records parsed during the run and displays a summary in
/// different ways depending on the `--output-format` provided by the user.
pub trait Emitter {
    fn emit<W: Write>(&self, writer: &mut W, patterns: &[BugPattern]) -> anyhow::Result<()>;
}

pub struct ConciseEmitter;

impl Emitter for ConciseEmitter {
    fn emit<W: Write>(&self, writer: &mut W, patterns: &[BugPattern]) -> anyhow::Result<()> {
        let mut writer = BufWriter::new(writer);

        // Hashmap with severity as key and number of generated pages as
        // value.
        let mut by_severity: HashMap<&'static str, usize> = HashMap::new();
        for pattern in patterns {
            *by_severity.entry(pattern.severity.as_str()).or_default() += 1;
        }

        let mut sorted: Vec<_> = by_severity.into_iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

        for (severity, count) in sorted {
            writeln!(writer, "{:>5} {}", count.to_string().bold(), severity.bold())?;
        }

        if patterns.len() == 1 {
            writeln!(writer, "\nGenerated 1 page.")?;
        } else {
            writeln!(writer, "\nGenerated {} pages.", patterns.len())?;
        }

        writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    patterns: &'a [BugPattern],
}

pub struct JsonEmitter;

impl Emitter for JsonEmitter {
    fn emit<W: Write>(&self, writer: &mut W, patterns: &[BugPattern]) -> anyhow::Result<()> {
        let mut writer = BufWriter::new(writer);

        serde_json::to_writer_pretty(&mut writer, &JsonOutput { patterns })?;
        writeln!(writer)?;

        writer.flush()?;
        Ok(())
    }
}
