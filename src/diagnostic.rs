use colored::Colorize;

use crate::resolver::MalformedProgram;

/// Render `error` against the source it came from, pointing at the bracket
pub fn render(error: &MalformedProgram, source: &str) -> String {
    let position = error.position();
    let mut out = format!("{0:}: {1:}\n", "Error".red().bold(), error);

    if let Some(line) = source.lines().nth(position.line.saturating_sub(1)) {
        let gutter = position.line.to_string();
        out.push_str(&format!("{} | {}\n", gutter.blue(), line));
        out.push_str(&format!(
            "{} | {}{}\n",
            " ".repeat(gutter.len()),
            " ".repeat(position.column.saturating_sub(1)),
            "^".red().bold()
        ));
    }

    out
}
