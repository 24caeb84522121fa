//! Assertions over captured program output.

use anyhow::{Result, ensure};

/// Checks that `output` contains `expected` on a line of its own.
///
/// # Errors
///
/// Returns an error naming the missing line and echoing `output`.
pub fn ensure_line(output: &str, expected: &str) -> Result<()> {
    ensure!(
        output.lines().any(|line| line.trim_end() == expected),
        "expected line {expected:?} in output:\n{output}"
    );
    Ok(())
}

/// Checks that `output` contains exactly `count` lines starting with `prefix`.
///
/// # Errors
///
/// Returns an error reporting the observed count.
pub fn ensure_prefixed_lines(output: &str, prefix: &str, count: usize) -> Result<()> {
    let observed = output
        .lines()
        .filter(|line| line.starts_with(prefix))
        .count();
    ensure!(
        observed == count,
        "expected {count} lines starting with {prefix:?}, found {observed}:\n{output}"
    );
    Ok(())
}
