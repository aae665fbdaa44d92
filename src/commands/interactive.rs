//! Interactive user prompting

use std::io::{self, Write};

use crate::error::Result;

/// Prompt for yes/no confirmation on stdin.
///
/// Returns `true` only for `y` or `yes` (any case). End of input counts as no.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}? [y/N] ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
