//! Value objects for the rail ticketing domain.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of a ticket, supplied by the caller
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TicketId(u32);

impl TicketId {
    /// Wrap a caller-supplied number
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the inner number
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for TicketId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Price
// ============================================================================

/// Ticket price in currency units.
///
/// Non-negative by convention only. Discounts are multiplicative, so the
/// value is kept as `f64` and rendered with two decimals.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    /// Creates a `Price`
    #[must_use]
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Returns the raw amount
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns this price multiplied by `factor`
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self(self.0 * factor)
    }
}

impl From<f64> for Price {
    fn from(amount: f64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Prices above this are expensive; exactly this much is still cheap.
pub const PRICE_CEILING: Price = Price(100.0);

// ============================================================================
// Admission gate
// ============================================================================

/// Cheap/expensive classification used to admit tickets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceRange {
    /// At or below the ceiling
    Cheap,
    /// Strictly above the ceiling
    Expensive,
}

impl PriceRange {
    /// Classify against an explicit ceiling
    #[must_use]
    pub fn classify(price: Price, ceiling: Price) -> Self {
        if price.value() > ceiling.value() {
            Self::Expensive
        } else {
            Self::Cheap
        }
    }

    /// Classify against [`PRICE_CEILING`]
    #[must_use]
    pub fn of(price: Price) -> Self {
        Self::classify(price, PRICE_CEILING)
    }

    /// The lowercase label, `"cheap"` or `"expensive"`
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cheap => "cheap",
            Self::Expensive => "expensive",
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_displays_two_decimals() {
        assert_eq!(Price::new(64.0).to_string(), "64.00");
        assert_eq!(Price::new(80.0).scaled(0.8).to_string(), "64.00");
        assert_eq!(Price::new(1.0 / 3.0).to_string(), "0.33");
    }

    #[test]
    fn test_ceiling_boundary_is_cheap() {
        assert_eq!(PriceRange::of(Price::new(100.0)), PriceRange::Cheap);
        assert_eq!(PriceRange::of(Price::new(100.000_001)), PriceRange::Expensive);
        assert_eq!(PriceRange::of(Price::new(0.0)), PriceRange::Cheap);
    }

    #[test]
    fn test_classify_with_custom_ceiling() {
        let ceiling = Price::new(50.0);
        assert_eq!(PriceRange::classify(Price::new(60.0), ceiling), PriceRange::Expensive);
        assert_eq!(PriceRange::classify(Price::new(50.0), ceiling), PriceRange::Cheap);
    }

    #[test]
    fn test_price_range_labels() {
        assert_eq!(PriceRange::Cheap.to_string(), "cheap");
        assert_eq!(PriceRange::Expensive.to_string(), "expensive");
    }

    #[test]
    fn test_ticket_id_display() {
        assert_eq!(TicketId::new(102).to_string(), "102");
        assert_eq!(TicketId::from(7).value(), 7);
    }
}
