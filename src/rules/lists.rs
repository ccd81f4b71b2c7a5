//! List blocks: contiguous runs of marker lines become one list container
//! with one item per line. A blank line ends the run, so separated runs
//! become separate lists.

use crate::placeholder::PlaceholderTable;
use crate::rule::MarkupRule;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static UNORDERED_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)(?:^[*+-]\s+.+$\n?)+").unwrap());
static UNORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[*+-]\s+(.+)$").unwrap());
static ORDERED_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)(?:^\d+\.\s+.+$\n?)+").unwrap());
static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\d+\.\s+(.+)$").unwrap());

fn wrap_run(run: &str, item: &Regex, open: &str, close: &str) -> String {
    let items = item.replace_all(run, "<li>$1</li>");
    format!("{open}{items}{close}")
}

#[derive(Clone, Default)]
pub struct UnorderedListRule;

impl MarkupRule for UnorderedListRule {
    fn name(&self) -> &'static str {
        "unordered-list"
    }

    fn description(&self) -> &'static str {
        "Contiguous -, * or + lines become one ul block"
    }

    fn apply<'t>(&self, text: &'t str, _table: &mut PlaceholderTable) -> Cow<'t, str> {
        UNORDERED_RUN.replace_all(text, |caps: &regex::Captures| {
            wrap_run(&caps[0], &UNORDERED_ITEM, "<ul>", "</ul>")
        })
    }
}

#[derive(Clone, Default)]
pub struct OrderedListRule;

impl MarkupRule for OrderedListRule {
    fn name(&self) -> &'static str {
        "ordered-list"
    }

    fn description(&self) -> &'static str {
        "Contiguous N. lines become one ol block"
    }

    fn apply<'t>(&self, text: &'t str, _table: &mut PlaceholderTable) -> Cow<'t, str> {
        ORDERED_RUN.replace_all(text, |caps: &regex::Captures| {
            wrap_run(&caps[0], &ORDERED_ITEM, "<ol>", "</ol>")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unordered(text: &str) -> String {
        UnorderedListRule.apply(text, &mut PlaceholderTable::new()).into_owned()
    }

    fn ordered(text: &str) -> String {
        OrderedListRule.apply(text, &mut PlaceholderTable::new()).into_owned()
    }

    #[test]
    fn one_container_for_a_contiguous_run() {
        let out = unordered("- a\n- b\n- c");
        assert_eq!(out.matches("<ul>").count(), 1);
        assert_eq!(out.matches("<li>").count(), 3);
        assert_eq!(out, "<ul><li>a</li>\n<li>b</li>\n<li>c</li></ul>");
    }

    #[test]
    fn all_three_markers_accepted() {
        let out = unordered("* a\n+ b\n- c");
        assert_eq!(out.matches("<li>").count(), 3);
        assert_eq!(out.matches("<ul>").count(), 1);
    }

    #[test]
    fn blank_line_starts_a_new_list() {
        let out = unordered("- a\n\n- b");
        assert_eq!(out.matches("<ul>").count(), 2);
    }

    #[test]
    fn marker_without_space_is_not_an_item() {
        assert_eq!(unordered("-tight"), "-tight");
    }

    #[test]
    fn ordered_run_becomes_one_ol() {
        let out = ordered("1. a\n2. b");
        assert_eq!(out, "<ol><li>a</li>\n<li>b</li></ol>");
    }

    #[test]
    fn ordered_numbers_need_a_dot_and_space() {
        assert_eq!(ordered("1 a"), "1 a");
        assert_eq!(ordered("1.a"), "1.a");
    }

    #[test]
    fn trailing_newline_stays_outside_the_items() {
        assert_eq!(unordered("- a\nrest"), "<ul><li>a</li>\n</ul>rest");
    }
}
