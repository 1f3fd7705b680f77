//! Population count parsing.

/// Parse one population cell.
///
/// Missing, blank and `NaN` cells are `None`. Whitespace anywhere in the
/// cell (thousands separators, including non-breaking spaces) is dropped
/// before parsing. Anything that is still not a non-negative integer is
/// `None` as well.
pub fn clean_number(cell: Option<&str>) -> Option<u64> {
    let digits: String = cell?.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.is_empty() || digits.eq_ignore_ascii_case("nan") {
        return None;
    }
    digits.parse().ok()
}
