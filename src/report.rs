//! Run banner and end-of-run summary printed by the CLI.

use std::io::{self, Write};
use std::path::Path;

use crate::pipeline::RunStats;

/// Print the banner shown before processing starts.
pub fn write_banner<W: Write>(out: &mut W, input: &Path, output: Option<&Path>) -> io::Result<()> {
    writeln!(out, "Input file: {}", input.display())?;
    writeln!(out, "Processing... (this may take a while depending on file size)\n")?;
    match output {
        Some(path) => writeln!(out, "Writing results to: {}", path.display()),
        None => writeln!(out, "No output file specified → printing to console\n"),
    }
}

/// Print the totals after the last line.
pub fn write_summary<W: Write>(
    out: &mut W,
    stats: &RunStats,
    output: Option<&Path>,
) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(70))?;
    writeln!(out, "Finished!")?;
    writeln!(out, "Lines processed:     {}", group_thousands(stats.processed))?;
    writeln!(out, "Valid users found:   {}", group_thousands(stats.valid_users))?;
    match output {
        Some(path) => writeln!(out, "Results saved to:    {}", path.display()),
        None => writeln!(out, "Results printed above (no output file specified)"),
    }
}

/// `1234567` → `1,234,567`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
