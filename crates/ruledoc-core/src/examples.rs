use std::fs;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use regex::Regex;

/// Directory expected to hold the example sources of a checker: the leading
/// dotted segments of the qualified id mirror the directory hierarchy, the
/// final segment names the checker itself and is dropped.
pub fn example_dir(base: &Path, qualified_checker_id: &str) -> PathBuf {
    let mut dir = base.to_path_buf();
    if let Some(index) = qualified_checker_id.rfind('.') {
        for segment in qualified_checker_id[..index].split('.') {
            dir.push(segment);
        }
    }
    dir
}

/// Final dotted segment of the qualified checker id.
pub fn short_checker_name(qualified_checker_id: &str) -> &str {
    match qualified_checker_id.rfind('.') {
        Some(index) => &qualified_checker_id[index + 1..],
        None => qualified_checker_id,
    }
}

/// List the example files of a checker, sorted lexicographically by
/// filename.
///
/// An example filename must match `<checker>(Positive|Negative)Case.*`.
/// Directory iteration order is filesystem-dependent, so the explicit sort
/// is required for deterministic page content.
pub fn find_examples(example_dir: &Path, checker_name: &str) -> anyhow::Result<Vec<PathBuf>> {
    let pattern = Regex::new(&format!(
        "^{}(Positive|Negative)Case.*$",
        regex::escape(checker_name)
    ))?;

    let mut examples = Vec::new();
    let entries = fs::read_dir(example_dir).with_context(|| {
        format!(
            "Failed to list example directory `{}`",
            example_dir.display()
        )
    })?;

    for entry in entries {
        let entry = entry?;
        let file_name = entry.file_name();
        if let Some(file_name) = file_name.to_str()
            && pattern.is_match(file_name)
        {
            examples.push(entry.path());
        }
    }

    examples.sort();
    Ok(examples)
}

/// Render the examples section appended to a page: a separator, a heading,
/// and per file the bold filename followed by its content in a code block.
///
/// Pygments-style highlight directives are used instead of fenced code
/// blocks when `use_pygments` is set; the two differ only in the delimiters
/// around identical content.
pub fn render_examples(examples: &[PathBuf], use_pygments: bool) -> anyhow::Result<String> {
    let mut section = String::new();
    section.push_str("\n----------\n\n");
    section.push_str("# Examples\n");

    for example in examples {
        let file_name = example
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content = fs::read_to_string(example)
            .with_context(|| format!("Failed to read example file `{}`", example.display()))?;

        section.push_str(&format!("__{file_name}__\n\n"));
        if use_pygments {
            section.push_str("{% highlight java %}\n");
            section.push_str(&content);
            section.push('\n');
            section.push_str("{% endhighlight %}\n");
        } else {
            section.push_str("```java\n");
            section.push_str(&content);
            section.push('\n');
            section.push_str("```\n");
        }
        section.push('\n');
    }

    Ok(section)
}
