//! Quantity rounding and display formatting shared by menu rendering and
//! the shopping list.

use crate::units::Unit;

/// Round a raw quantity to a practical shopping value.
///
/// Small amounts keep one decimal, mid-range amounts snap to the nearest
/// half, and anything from ten upward rounds to a whole number. The
/// function is idempotent: rounding an already-rounded value returns it
/// unchanged.
pub fn round_quantity(quantity: f64) -> f64 {
    if quantity < 1.0 {
        (quantity * 10.0).round() / 10.0
    } else if quantity < 10.0 {
        (quantity * 2.0).round() / 2.0
    } else {
        quantity.round()
    }
}

/// Format a quantity with its unit, pluralizing countable units when the
/// rounded value exceeds one.
pub fn format_quantity(quantity: f64, unit: Unit) -> String {
    let rounded = round_quantity(quantity);
    let label = if rounded > 1.0 {
        unit.plural_label()
    } else {
        unit.label()
    };
    format!("{rounded} {label}")
}
