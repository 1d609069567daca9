//! Display summary derived from the selection, the catalog and the last
//! server-confirmed totals
//!
//! Totals and verdicts are never computed locally: they are either zero and
//! empty (nothing saved yet) or exactly what the backend last returned.

use rigforge_common::{BuildSummary, PartCategory, Selection, Verdict};
use serde::Serialize;
use std::fmt;

use crate::catalog::CatalogStore;

/// Placeholder shown for an empty or unresolved slot
pub const EMPTY_SLOT: &str = "\u{2014}";

/// Name and price of a resolved part
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartDetail {
    pub name: String,
    pub price: f64,
}

/// One category row of the summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotView {
    pub category: PartCategory,

    /// Id held by the selection, whether or not it resolved
    pub part_id: Option<String>,

    /// `None` when the slot is unset or the id is not in the catalog
    pub part: Option<PartDetail>,
}

impl SlotView {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    /// `Name ($price)` or the empty placeholder
    pub fn display_value(&self) -> String {
        match &self.part {
            Some(part) => format!("{} (${})", part.name, part.price),
            None => EMPTY_SLOT.to_string(),
        }
    }
}

/// One compatibility check as rendered
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityBadge {
    pub check: String,
    pub verdict: Verdict,
}

impl CompatibilityBadge {
    pub fn passing(&self) -> bool {
        self.verdict.is_ok()
    }

    /// Check name with underscores as spaces and each word capitalised
    pub fn title(&self) -> String {
        self.check
            .split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

/// Everything the summary panel shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    /// One entry per category, in display order
    pub slots: Vec<SlotView>,
    pub total_price: f64,
    pub total_power: u32,
    pub compatibility: Vec<CompatibilityBadge>,
}

impl SummaryView {
    /// Slot for a category
    pub fn slot(&self, category: PartCategory) -> Option<&SlotView> {
        self.slots.iter().find(|s| s.category == category)
    }

    /// True while no server summary has been received
    pub fn is_unconfirmed(&self) -> bool {
        self.total_price == 0.0 && self.total_power == 0 && self.compatibility.is_empty()
    }
}

/// Derive the display summary
///
/// Never fails: unset ids and ids missing from the catalog both render as
/// empty slots.
pub fn derive_summary(
    selection: &Selection,
    catalog: &CatalogStore,
    confirmed: Option<&BuildSummary>,
) -> SummaryView {
    let slots = selection
        .iter()
        .map(|(category, id)| SlotView {
            category,
            part_id: id.map(str::to_string),
            part: id.and_then(|id| catalog.find_by_id(id)).map(|p| PartDetail {
                name: p.name.clone(),
                price: p.price,
            }),
        })
        .collect();

    let (total_price, total_power, compatibility) = match confirmed {
        Some(summary) => (
            summary.total_price,
            summary.total_power,
            summary
                .compatibility
                .iter()
                .map(|(check, verdict)| CompatibilityBadge {
                    check: check.clone(),
                    verdict: verdict.clone(),
                })
                .collect(),
        ),
        None => (0.0, 0, Vec::new()),
    };

    SummaryView {
        slots,
        total_price,
        total_power,
        compatibility,
    }
}

impl fmt::Display for SummaryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Build Summary")?;
        for slot in &self.slots {
            writeln!(f, "  {:<12} {}", slot.label(), slot.display_value())?;
        }
        writeln!(f, "  {:<12} ${:.2}", "Total Price", self.total_price)?;
        writeln!(f, "  {:<12} {}W", "Est. Power", self.total_power)?;
        for badge in &self.compatibility {
            let mark = if badge.passing() { "ok" } else { "!!" };
            writeln!(f, "  [{}] {}: {}", mark, badge.title(), badge.verdict)?;
        }
        Ok(())
    }
}
