use std::process::Command;

use tempfile::TempDir;

use crate::helpers::CommandExt;
use crate::helpers::binary_path;

const ARRAY_EQUALS: &str = "com.example.bugpatterns.ArrayEquals\tArrayEquals\t\tJDK\tERROR\tMATURE\tSUPPRESS_WARNINGS\t\tReference equality used to compare arrays\tArrays are compared by reference.\\nUse `Arrays.equals` to compare contents.";
const LONG_CHAIN: &str = "com.example.bugpatterns.LongChain\tLong Chain\tChainedCalls\tStyle\tWARNING\tEXPERIMENTAL\tCUSTOM_ANNOTATION\tAllowLongChain\tOverly long call chain\tBreak the chain into named intermediate values.";

#[test]
fn test_generates_one_page_per_record() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(
        directory.join("bugpatterns.txt"),
        format!("{ARRAY_EQUALS}\n{LONG_CHAIN}\n"),
    )?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("generate")
        .arg("bugpatterns.txt")
        .arg("--output-dir")
        .arg("docs")
        .run();

    assert_eq!(output.status.code(), Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout_plain().contains("Generated 2 pages."));

    let page = std::fs::read_to_string(directory.join("docs").join("ArrayEquals.md"))?;
    assert!(page.contains("# Bug pattern: ArrayEquals"));
    assert!(page.contains("__Reference equality used to compare arrays__"));
    assert!(page.contains("`@SuppressWarnings(\"ArrayEquals\")`"));
    // The literal `\n` escape of the data file became a real line break
    assert!(page.contains("Arrays are compared by reference.\nUse `Arrays.equals`"));

    // Spaces in the display name become underscores in the filename
    let page = std::fs::read_to_string(directory.join("docs").join("Long_Chain.md"))?;
    assert!(page.contains("_Alternate names: ChainedCalls_"));
    assert!(page.contains("custom suppression annotation `@AllowLongChain`"));

    Ok(())
}

#[test]
fn test_front_matter_flag() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("bugpatterns.txt"), format!("{ARRAY_EQUALS}\n"))?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("generate")
        .arg("bugpatterns.txt")
        .arg("--output-dir")
        .arg("docs")
        .arg("--front-matter")
        .run();

    assert_eq!(output.status.code(), Some(0), "stderr: {}", output.stderr);

    let page = std::fs::read_to_string(directory.join("docs").join("ArrayEquals.md"))?;
    assert!(page.starts_with("---\ntitle: ArrayEquals\nlayout: bugpattern\n"));

    Ok(())
}

#[test]
fn test_stitches_examples() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("bugpatterns.txt"), format!("{ARRAY_EQUALS}\n"))?;

    let example_dir = directory
        .join("cases")
        .join("com")
        .join("example")
        .join("bugpatterns");
    std::fs::create_dir_all(&example_dir)?;
    std::fs::write(
        example_dir.join("ArrayEqualsPositiveCase1.java"),
        "class ArrayEqualsPositiveCase1 {}",
    )?;
    std::fs::write(
        example_dir.join("ArrayEqualsNegativeCase1.java"),
        "class ArrayEqualsNegativeCase1 {}",
    )?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("generate")
        .arg("bugpatterns.txt")
        .arg("--output-dir")
        .arg("docs")
        .arg("--example-dir")
        .arg("cases")
        .run();

    assert_eq!(output.status.code(), Some(0), "stderr: {}", output.stderr);

    let page = std::fs::read_to_string(directory.join("docs").join("ArrayEquals.md"))?;
    assert!(page.contains("# Examples"));
    let negative = page.find("__ArrayEqualsNegativeCase1.java__").unwrap();
    let positive = page.find("__ArrayEqualsPositiveCase1.java__").unwrap();
    assert!(negative < positive);
    assert!(page.contains("```java\nclass ArrayEqualsPositiveCase1 {}\n```"));

    Ok(())
}

#[test]
fn test_pygments_code_blocks() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("bugpatterns.txt"), format!("{ARRAY_EQUALS}\n"))?;

    let example_dir = directory
        .join("cases")
        .join("com")
        .join("example")
        .join("bugpatterns");
    std::fs::create_dir_all(&example_dir)?;
    std::fs::write(
        example_dir.join("ArrayEqualsPositiveCase1.java"),
        "class ArrayEqualsPositiveCase1 {}",
    )?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("generate")
        .arg("bugpatterns.txt")
        .arg("--output-dir")
        .arg("docs")
        .arg("--example-dir")
        .arg("cases")
        .arg("--pygments")
        .run();

    assert_eq!(output.status.code(), Some(0), "stderr: {}", output.stderr);

    let page = std::fs::read_to_string(directory.join("docs").join("ArrayEquals.md"))?;
    assert!(page.contains("{% highlight java %}\nclass ArrayEqualsPositiveCase1 {}\n{% endhighlight %}"));
    assert!(!page.contains("```"));

    Ok(())
}

#[test]
fn test_malformed_record_fails_the_run() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(
        directory.join("bugpatterns.txt"),
        format!("{ARRAY_EQUALS}\nnot a valid record\n"),
    )?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("generate")
        .arg("bugpatterns.txt")
        .arg("--output-dir")
        .arg("docs")
        .run();

    assert_eq!(output.status.code(), Some(2));
    let stderr = output.stderr_plain();
    assert!(stderr.contains("ruledoc failed"), "stderr: {stderr}");
    assert!(stderr.contains("line 2"), "stderr: {stderr}");

    // Fail-fast, but the page for the record before the bad line remains.
    assert!(directory.join("docs").join("ArrayEquals.md").is_file());

    Ok(())
}

#[test]
fn test_unknown_enum_value_fails_the_run() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(
        directory.join("bugpatterns.txt"),
        format!("{}\n", ARRAY_EQUALS.replace("MATURE", "HALF_BAKED")),
    )?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("generate")
        .arg("bugpatterns.txt")
        .arg("--output-dir")
        .arg("docs")
        .run();

    assert_eq!(output.status.code(), Some(2));
    let stderr = output.stderr_plain();
    assert!(
        stderr.contains("unrecognized maturity value `HALF_BAKED`"),
        "stderr: {stderr}"
    );

    Ok(())
}

#[test]
fn test_empty_input_warns() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("bugpatterns.txt"), "")?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("generate")
        .arg("bugpatterns.txt")
        .arg("--output-dir")
        .arg("docs")
        .run();

    assert_eq!(output.status.code(), Some(0), "stderr: {}", output.stderr);
    assert!(
        output
            .stdout_plain()
            .contains("No bug patterns found in the input file.")
    );

    Ok(())
}

#[test]
fn test_repeated_runs_are_byte_identical() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(
        directory.join("bugpatterns.txt"),
        format!("{ARRAY_EQUALS}\n{LONG_CHAIN}\n"),
    )?;

    let mut command = Command::new(binary_path());
    command
        .current_dir(directory)
        .arg("generate")
        .arg("bugpatterns.txt")
        .arg("--output-dir")
        .arg("docs");

    let output = command.run();
    assert_eq!(output.status.code(), Some(0), "stderr: {}", output.stderr);
    let first = std::fs::read(directory.join("docs").join("Long_Chain.md"))?;

    let output = command.run();
    assert_eq!(output.status.code(), Some(0), "stderr: {}", output.stderr);
    let second = std::fs::read(directory.join("docs").join("Long_Chain.md"))?;

    assert_eq!(first, second);

    Ok(())
}
