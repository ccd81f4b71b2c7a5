//! The markup expansion rule interface.

use crate::placeholder::PlaceholderTable;
use std::borrow::Cow;

/// One ordered rewrite over the escaped text.
///
/// Rules run exactly once each, in registry order; every rule sees the
/// previous rule's output. Precedence lives in the registry
/// ([`crate::rules::all_rules`]), not inside the rules themselves.
///
/// Rules that generate markup no later rule may touch (explicit links and
/// images) mint their output into the placeholder table instead of
/// leaving it inline.
pub trait MarkupRule: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// What the rule rewrites.
    fn description(&self) -> &'static str;

    /// Apply the rewrite to `text`, minting protected fragments into
    /// `table` where needed. Returns the input borrowed when nothing
    /// matched.
    fn apply<'t>(&self, text: &'t str, table: &mut PlaceholderTable) -> Cow<'t, str>;
}
