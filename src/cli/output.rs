//! Output formatting utilities for CLI.

use std::fmt::Display;

use serde::Serialize;

use super::{CliError, OutputFormat};

/// Print `response` as JSON, or as the text `render` produces.
pub(super) fn emit<T: Serialize>(
    format: OutputFormat,
    response: &T,
    render: impl FnOnce(&T) -> String,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(response)?),
        OutputFormat::Text => print!("{}", render(response)),
    }
    Ok(())
}

/// Join items with single spaces, or `(none)` if there are none.
pub(super) fn join<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    let joined = items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() {
        "(none)".to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join() {
        assert_eq!(join(["C5", "D6"]), "C5 D6");
        assert_eq!(join(Vec::<u8>::new()), "(none)");
    }
}
