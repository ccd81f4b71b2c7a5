//! Table blocks: a pipe-delimited header row, a separator row, and at
//! least one data row. Anything short of that is left as plain text.

use crate::placeholder::PlaceholderTable;
use crate::rule::MarkupRule;
use itertools::Itertools;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static TABLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)\|.+\|.*\n\|[\s\-|:]+\|.*\n(?:\|.+\|.*\n?)*").unwrap());

fn cells(line: &str) -> impl Iterator<Item = &str> {
    line.trim().trim_matches('|').split('|').map(str::trim)
}

fn build_table(block: &str) -> Option<String> {
    let mut lines = block.trim().lines();
    let header = lines.next()?;
    let _separator = lines.next()?;
    let rows: Vec<&str> = lines.filter(|l| !l.trim().is_empty()).collect();
    if rows.is_empty() {
        return None;
    }

    let head = cells(header).map(|c| format!("<th>{c}</th>")).join("");
    let body = rows
        .iter()
        .map(|row| {
            let tds = cells(row).map(|c| format!("<td>{c}</td>")).join("");
            format!("<tr>{tds}</tr>")
        })
        .join("");

    Some(format!(
        "<table><thead><tr>{head}</tr></thead><tbody>{body}</tbody></table>"
    ))
}

#[derive(Clone, Default)]
pub struct TableRule;

impl MarkupRule for TableRule {
    fn name(&self) -> &'static str {
        "table"
    }

    fn description(&self) -> &'static str {
        "Pipe-delimited blocks become table elements"
    }

    fn apply<'t>(&self, text: &'t str, _table: &mut PlaceholderTable) -> Cow<'t, str> {
        TABLE_REGEX.replace_all(text, |caps: &regex::Captures| {
            // A block failing the minimum-row-count check degrades to
            // literal text.
            build_table(&caps[0]).unwrap_or_else(|| caps[0].to_string())
        })
    }
}
