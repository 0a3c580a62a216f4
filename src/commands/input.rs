//! Form Input Parsing
//!
//! Converts raw text from the add-item form into typed values.

use crate::models::valid_price;

/// Parse the quantity field. Empty, unparsable or non-positive input
/// falls back to 1; decimals are truncated.
pub fn parse_quantity(text: &str) -> u32 {
    let text = text.trim();
    if let Ok(quantity) = text.parse::<u32>() {
        return quantity.max(1);
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 1.0 => {
            value.trunc().min(f64::from(u32::MAX)) as u32
        }
        _ => 1,
    }
}

/// Parse the price field. Accepts `,` as decimal separator.
/// Empty, unparsable, non-finite or non-positive input means no price.
pub fn parse_price(text: &str) -> Option<f64> {
    let text = text.trim().replace(',', ".");
    if text.is_empty() {
        return None;
    }
    valid_price(text.parse::<f64>().ok())
}

/// Position of an item in the list, as handed out by the renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemIndex(usize);

impl ItemIndex {
    /// The index if it addresses an item of a list of length `len`
    pub fn checked(self, len: usize) -> Option<usize> {
        (self.0 < len).then_some(self.0)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for ItemIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity("2.7"), 2);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-4"), 1);
        assert_eq!(parse_quantity("0.5"), 1);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("3.5"), Some(3.5));
        assert_eq!(parse_price("4,25"), Some(4.25));
        assert_eq!(parse_price(" 10 "), Some(10.0));
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("free"), None);
        assert_eq!(parse_price("0"), None);
        assert_eq!(parse_price("-2"), None);
        assert_eq!(parse_price("inf"), None);
        assert_eq!(parse_price("NaN"), None);
    }

    #[test]
    fn test_item_index_checked() {
        let index = ItemIndex::from(2);
        assert_eq!(index.get(), 2);
        assert_eq!(index.checked(3), Some(2));
        assert_eq!(index.checked(2), None);
        assert_eq!(ItemIndex::from(0).checked(0), None);
    }
}
