//! Terminal output formatting for the ghostkit CLI.
//!
//! Everything goes to stderr so stdout stays free for piping. Styling uses the
//! [`console`] crate.

use std::io::Write;
use std::path::Path;

use console::style;

const PREFIX: &str = "[Ghostkit]";

fn prefix() -> console::StyledObject<&'static str> {
    style(PREFIX).for_stderr().cyan().bold()
}

/// Print usage. Shown for `help` and for any invocation that cannot run.
pub fn print_usage() {
    eprintln!(
        "{} v{}

Supported commands:

    ghostkit build a.arc56.json [b.arc56.json]

Options:
    --config <path>          config file (default: ghostkit.config.json)
    --templates-dir <dir>    read index.ts.template and method.ts.template from <dir>
    --client <source>        typed client source: auto, artifact, algokit
    --client-file <path>     pre-generated typed client to inline
    -v, --verbose            more logging (repeatable)
",
        style("Ghostkit").for_stderr().bold(),
        env!("CARGO_PKG_VERSION")
    );
}

/// Print `[Ghostkit] Building <path>... ` without a newline.
pub fn print_building(spec_path: &Path) {
    eprint!("{} Building {}... ", prefix(), spec_path.display());
    let _ = std::io::stderr().flush();
}

/// Finish a building line with a green `OK` and the output path.
pub fn print_built(out: &Path) {
    eprintln!("{}", style("OK").for_stderr().green().bold());
    eprintln!("{} Built to: {}\n", prefix(), out.display());
}

/// Finish a building line with a red `ERR` and the error chain.
pub fn print_failed(error: &(dyn std::error::Error + 'static)) {
    let chain = anyhow::Chain::new(error)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ");
    eprintln!("{}\n", style("ERR").for_stderr().red().bold());
    eprintln!("{} {}\n", style("[ERROR]").for_stderr().red().bold(), chain);
}

/// Print a key-value pair with dimmed key formatting.
pub fn print_key_value(key: &str, value: &str) {
    eprintln!("  {}: {}", style(key).for_stderr().dim(), value);
}
