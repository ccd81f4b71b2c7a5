//! The markup expansion rule set.
//!
//! Precedence is the contract here: [`all_rules`] returns the rules in
//! the exact order they must run. Earlier rules must not be undone by
//! later ones — bold before italic so a single-marker rule never eats
//! half a double-marker run, explicit links before auto-linking so a
//! link is never re-wrapped, line breaks last.

mod autolink;
mod blockquote;
mod emphasis;
mod hashtags;
mod headings;
mod horizontal_rule;
mod line_breaks;
mod links;
mod lists;
mod quotes;
mod strikethrough;
mod tables;

pub use autolink::AutoLinkRule;
pub use blockquote::BlockquoteRule;
pub use emphasis::{BoldRule, ItalicRule};
pub use hashtags::HashtagRule;
pub use headings::HeadingRule;
pub use horizontal_rule::HorizontalRuleRule;
pub use line_breaks::LineBreakRule;
pub use links::{ImageRule, LinkRule};
pub use lists::{OrderedListRule, UnorderedListRule};
pub use quotes::TypographicQuoteRule;
pub use strikethrough::StrikethroughRule;
pub use tables::TableRule;

use crate::rule::MarkupRule;

/// The full rule set in authoritative precedence order.
pub fn all_rules() -> Vec<Box<dyn MarkupRule>> {
    vec![
        Box::new(HeadingRule),
        Box::new(BoldRule),
        Box::new(ItalicRule),
        Box::new(StrikethroughRule),
        Box::new(HorizontalRuleRule),
        Box::new(BlockquoteRule),
        Box::new(UnorderedListRule),
        Box::new(OrderedListRule),
        Box::new(TableRule),
        Box::new(ImageRule),
        Box::new(LinkRule),
        Box::new(AutoLinkRule),
        Box::new(TypographicQuoteRule),
        Box::new(HashtagRule),
        Box::new(LineBreakRule),
    ]
}
