use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Measurement unit attached to an ingredient quantity.
///
/// Countable units (piece, slice, clove, bunch) get pluralized by the
/// quantity formatter; metric units keep their symbol as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "cl")]
    Centiliter,
    #[serde(rename = "l")]
    Liter,
    #[serde(rename = "tbsp")]
    Tablespoon,
    #[serde(rename = "tsp")]
    Teaspoon,
    Piece,
    Slice,
    Clove,
    Bunch,
}

impl Unit {
    /// Singular display label.
    pub fn label(self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Milliliter => "ml",
            Unit::Centiliter => "cl",
            Unit::Liter => "l",
            Unit::Tablespoon => "tbsp",
            Unit::Teaspoon => "tsp",
            Unit::Piece => "piece",
            Unit::Slice => "slice",
            Unit::Clove => "clove",
            Unit::Bunch => "bunch",
        }
    }

    /// Plural display label. Metric symbols are invariant.
    pub fn plural_label(self) -> &'static str {
        match self {
            Unit::Piece => "pieces",
            Unit::Slice => "slices",
            Unit::Clove => "cloves",
            Unit::Bunch => "bunches",
            other => other.label(),
        }
    }

    /// Whether the unit names whole countable items rather than a measure.
    pub fn is_countable(self) -> bool {
        matches!(self, Unit::Piece | Unit::Slice | Unit::Clove | Unit::Bunch)
    }
}

/// Store aisle an ingredient is shelved in.
///
/// Variant order is the display order of the shopping list sections.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Aisle {
    Produce,
    Meat,
    Seafood,
    Dairy,
    Bakery,
    Pantry,
    Beverages,
    Frozen,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn countable_units_pluralize() {
        assert_eq!(Unit::Piece.plural_label(), "pieces");
        assert_eq!(Unit::Clove.plural_label(), "cloves");
        assert!(Unit::Slice.is_countable());
    }

    #[test]
    fn metric_units_are_invariant() {
        assert_eq!(Unit::Gram.plural_label(), "g");
        assert_eq!(Unit::Milliliter.plural_label(), "ml");
        assert!(!Unit::Gram.is_countable());
    }

    #[test]
    fn aisle_iteration_follows_display_order() {
        let order: Vec<Aisle> = Aisle::iter().collect();
        assert_eq!(order.first(), Some(&Aisle::Produce));
        assert_eq!(order.last(), Some(&Aisle::Frozen));
        assert_eq!(order.len(), 8);
    }

    #[test]
    fn aisle_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Aisle::Produce).unwrap();
        assert_eq!(json, "\"produce\"");
        let parsed: Aisle = serde_json::from_str("\"dairy\"").unwrap();
        assert_eq!(parsed, Aisle::Dairy);
    }
}
