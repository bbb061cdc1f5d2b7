//! Review prompt assembly: fixed analyst preamble, one labeled section per
//! present optional field, and the fixed instruction block.
//!
//! Absent or blank inputs produce no section at all (no "N/A" placeholders).
//! Used by [`crate::Reviewer`] after address validation; the address passed in
//! here is already known to be non-empty.

use crate::request::{RentComp, ReviewRequest, SaleComp};

const PREAMBLE: &str = "You are a real estate investment analyst.\nGive a property investment review of:";

const INSTRUCTIONS: &str = "\
Include:
- Estimated market value and the valuation method used
- Up to three supporting comparables
- Rent estimate
- 20% down payment and assumed loan terms (30-year fixed at the stated interest rate)
- Monthly payment breakdown (principal, interest, taxes, insurance)
- Net cash flow and cash-on-cash return
- Risk factors (flood, crime, school quality)
- Recommendation: Buy, Hold, or Sell, with a one-to-two sentence rationale";

/// Returns the trimmed value when present and non-blank, else None.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Renders one comparable sale as a labeled block; only present fields appear.
/// Returns None when every field is blank (the comp contributes nothing).
fn render_sale_comp(comp: &SaleComp) -> Option<String> {
    let mut lines = Vec::new();
    for (label, value) in [
        ("Address", &comp.address),
        ("Price", &comp.price),
        ("Sqft", &comp.sqft),
        ("Grade", &comp.grade),
        ("Year sold", &comp.year_sold),
    ] {
        if let Some(v) = non_blank(value) {
            lines.push(format!("  {}: {}", label, v));
        }
    }
    if lines.is_empty() {
        None
    } else {
        Some(format!("- Comparable sale:\n{}", lines.join("\n")))
    }
}

/// Renders one rental comp: labeled block for records, raw line for free text.
fn render_rent_comp(comp: &RentComp) -> Option<String> {
    match comp {
        RentComp::Text(t) => {
            let t = t.trim();
            if t.is_empty() {
                None
            } else {
                Some(format!("- {}", t))
            }
        }
        RentComp::Record(r) => {
            let mut lines = Vec::new();
            for (label, value) in [
                ("Address", &r.address),
                ("Rent", &r.rent),
                ("Sqft", &r.sqft),
                ("Beds", &r.beds),
                ("Baths", &r.baths),
            ] {
                if let Some(v) = non_blank(value) {
                    lines.push(format!("  {}: {}", label, v));
                }
            }
            if lines.is_empty() {
                None
            } else {
                Some(format!("- Rental comp:\n{}", lines.join("\n")))
            }
        }
    }
}

/// Assembles the full completion prompt for a review request.
///
/// Layout: preamble + address, then one section per present optional field
/// (square footage, condition grade, interest rate, comparable sales, rental
/// comps), then the fixed instruction block. Sections are joined by blank
/// lines; a request with only an address yields preamble + instructions.
pub fn build_review_prompt(req: &ReviewRequest) -> String {
    let mut sections = vec![format!("{}\n{}", PREAMBLE, req.trimmed_address())];

    if let Some(sqft) = non_blank(&req.sqft) {
        sections.push(format!("Total square footage: {}", sqft));
    }
    if let Some(grade) = non_blank(&req.grade) {
        sections.push(format!("Condition grade: {}", grade));
    }
    if let Some(rate) = non_blank(&req.interest_rate) {
        sections.push(format!("Assumed interest rate: {}", rate));
    }

    let comp_blocks: Vec<String> = req.comps.iter().filter_map(render_sale_comp).collect();
    if !comp_blocks.is_empty() {
        sections.push(format!("Comparable Sales Provided:\n{}", comp_blocks.join("\n")));
    }

    let rent_blocks: Vec<String> = req.rent_comps.iter().filter_map(render_rent_comp).collect();
    if !rent_blocks.is_empty() {
        sections.push(format!("Rental Comps Provided:\n{}", rent_blocks.join("\n")));
    }

    sections.push(INSTRUCTIONS.to_string());
    sections.join("\n\n")
}
