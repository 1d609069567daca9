//! Illustrative compatibility rules
//!
//! A check is only reported once both parts it compares are selected.

use rigforge_common::{BuildSummary, Compatibility, Part, PartCategory, Selection, Verdict};

/// PSU capacity must exceed the estimated draw by this factor
const PSU_HEADROOM: f64 = 1.2;

/// Compute totals and verdicts for a selection against a catalog
///
/// Ids that do not resolve are skipped.
pub fn evaluate(selection: &Selection, parts: &[Part]) -> BuildSummary {
    let resolve = |category: PartCategory| {
        selection
            .get(category)
            .and_then(|id| parts.iter().find(|p| p.id == id))
    };

    let chosen: Vec<&Part> = PartCategory::ALL.into_iter().filter_map(resolve).collect();

    let total_price = round_cents(chosen.iter().map(|p| p.price).sum());
    let total_power = chosen
        .iter()
        .filter_map(|p| p.attr_u64("power"))
        .map(|w| u32::try_from(w).unwrap_or(u32::MAX))
        .fold(0u32, u32::saturating_add);

    let cpu = resolve(PartCategory::Cpu);
    let motherboard = resolve(PartCategory::Motherboard);
    let ram = resolve(PartCategory::Ram);
    let psu = resolve(PartCategory::Psu);
    let case = resolve(PartCategory::Case);

    let mut compatibility = Compatibility::new();

    if let (Some(cpu), Some(board)) = (cpu, motherboard) {
        compatibility.insert(
            "socket".to_string(),
            matching_attr(cpu, board, "socket", "CPU", "motherboard"),
        );
    }

    if let (Some(ram), Some(board)) = (ram, motherboard) {
        compatibility.insert(
            "ram_type".to_string(),
            matching_attr(ram, board, "ram_type", "RAM", "motherboard"),
        );
    }

    if let Some(psu) = psu {
        let required = (f64::from(total_power) * PSU_HEADROOM).ceil() as u64;
        let verdict = match psu.attr_u64("wattage") {
            Some(wattage) if wattage >= required => Verdict::ok(),
            Some(wattage) => Verdict::new(format!(
                "{}W PSU is below the recommended {}W",
                wattage, required
            )),
            None => Verdict::new("PSU wattage unknown"),
        };
        compatibility.insert("psu_headroom".to_string(), verdict);
    }

    if let (Some(case), Some(board)) = (case, motherboard) {
        let supported = case
            .attributes
            .get("supports")
            .and_then(|v| v.as_array())
            .map(|list| list.iter().filter_map(|v| v.as_str()).collect::<Vec<_>>())
            .unwrap_or_default();

        let verdict = match board.attr_str("form_factor") {
            Some(form) if supported.contains(&form) => Verdict::ok(),
            Some(form) => Verdict::new(format!("Case does not fit a {} board", form)),
            None => Verdict::new("Motherboard form factor unknown"),
        };
        compatibility.insert("form_factor".to_string(), verdict);
    }

    BuildSummary {
        total_price,
        total_power,
        compatibility,
    }
}

fn matching_attr(
    left: &Part,
    right: &Part,
    key: &str,
    left_label: &str,
    right_label: &str,
) -> Verdict {
    match (left.attr_str(key), right.attr_str(key)) {
        (Some(a), Some(b)) if a == b => Verdict::ok(),
        (Some(a), Some(b)) => Verdict::new(format!(
            "{} {} does not match {} {}",
            left_label, a, right_label, b
        )),
        _ => Verdict::new(format!("{} unknown", key)),
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
