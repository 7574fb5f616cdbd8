//! Tab-group order reconstruction.
//!
//! The host only reports pairwise "these widgets are currently stacked
//! together" groupings; recovering a stable total order for persistence
//! means merging those partial sequences, with the visible tab-title strip
//! as an optional supplementary edge source when the groupings alone are
//! ambiguous.

use std::collections::HashMap;

use crate::order::merge_order;

/// Identity of one dockable widget (the host's object name)
pub type WidgetId = String;

/// The visible tab strip: title sequence plus which widget each title
/// belongs to
#[derive(Debug, Clone, Default)]
pub struct TabTitles {
    /// Tab-title text in strip order
    pub strip: Vec<String>,
    /// Widget id → its window title
    pub title_of: HashMap<WidgetId, String>,
}

impl TabTitles {
    /// Titles disambiguate identity only when they are non-uniform
    fn is_informative(&self) -> bool {
        let mut distinct = self.strip.clone();
        distinct.sort();
        distinct.dedup();
        distinct.len() > 1
    }

    /// Map the title sequence back to widget ids
    fn as_grouping(&self) -> Vec<WidgetId> {
        let by_title: HashMap<&str, &WidgetId> = self
            .title_of
            .iter()
            .map(|(id, title)| (title.as_str(), id))
            .collect();
        self.strip
            .iter()
            .filter_map(|title| by_title.get(title.as_str()).map(|id| (*id).clone()))
            .collect()
    }
}

/// Merge the host's stacking observations into a best-effort total order.
///
/// The title tie-break applies only when exactly two groupings were
/// collected and the titles are non-uniform; three or more groupings are
/// treated as informative enough on their own (deliberate simplification).
/// Correctness under contradictory host state is best-effort: the result
/// is consistent with every adjacency actually observed, nothing more.
pub fn reconstruct_order(parts: &[Vec<WidgetId>], titles: Option<&TabTitles>) -> Vec<WidgetId> {
    let mut parts = parts.to_vec();
    if parts.len() == 2 {
        if let Some(titles) = titles {
            if titles.is_informative() {
                parts.push(titles.as_grouping());
            }
        }
    }
    merge_order(&parts)
}

/// Host-side introspection needed to collect stacking observations
pub trait TabGroupHost {
    /// Widgets currently sharing a tab region with `id` (excluding `id`
    /// itself), in the host's reported order
    fn stacked_with(&self, id: &str) -> Vec<WidgetId>;

    fn is_visible(&self, id: &str) -> bool;

    /// The tab strip containing `id`, if one is showing
    fn tab_titles(&self, id: &str) -> Option<TabTitles>;
}

/// Collect groupings around `target` and reconstruct the stack's order.
///
/// An unstacked visible widget orders as just itself; an unstacked hidden
/// one contributes nothing.
pub fn observed_order(host: &dyn TabGroupHost, target: &str) -> Vec<WidgetId> {
    let first = host.stacked_with(target);
    if first.is_empty() {
        return if host.is_visible(target) {
            vec![target.to_string()]
        } else {
            Vec::new()
        };
    }

    let mut parts = vec![first.clone()];
    for id in &first {
        if !host.is_visible(id) {
            continue;
        }
        parts.push(host.stacked_with(id));
    }

    let titles = host.tab_titles(target);
    reconstruct_order(&parts, titles.as_ref())
}
