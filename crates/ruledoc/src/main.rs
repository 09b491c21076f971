use clap::Parser;
use ruledoc::args::Args;
use ruledoc::run;
use ruledoc::status::ExitStatus;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(status) => status.into(),
        Err(err) => {
            use std::io::Write;

            // Use `writeln` instead of `eprintln` to avoid panicking when the stderr pipe is broken.
            let mut stderr = std::io::stderr().lock();

            // This communicates that this isn't a typical error but ruledoc itself hard-errored
            // for some reason (e.g. a malformed record or an unwritable output directory)
            writeln!(stderr, "ruledoc failed").ok();

            for cause in err.chain() {
                writeln!(stderr, "  Cause: {cause}").ok();
            }

            ExitStatus::Error.into()
        }
    }
}
