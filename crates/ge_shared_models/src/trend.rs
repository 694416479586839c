use crate::Error;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Direction of a price or change figure as reported by the Grand Exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Negative,
    Neutral,
    Positive,
}

static TRENDS_BY_NAME: Lazy<HashMap<&'static str, Trend>> =
    Lazy::new(|| Trend::ALL.iter().map(|trend| (trend.name(), *trend)).collect());

impl Trend {
    pub const ALL: [Trend; 3] = [Trend::Negative, Trend::Neutral, Trend::Positive];

    /// Exact, case-sensitive lookup by wire name.
    pub fn from_name(name: &str) -> Option<Trend> {
        TRENDS_BY_NAME.get(name).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Trend::Negative => "negative",
            Trend::Neutral => "neutral",
            Trend::Positive => "positive",
        }
    }

    pub fn signum(&self) -> i8 {
        match self {
            Trend::Negative => -1,
            Trend::Neutral => 0,
            Trend::Positive => 1,
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A current price paired with its trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PriceTrend {
    trend: Trend,
    price: i64,
}

impl PriceTrend {
    pub fn new(trend: Trend, price: i64) -> Result<Self, Error> {
        if price <= 0 {
            return Err(Error::invalid(format!("invalid price ({price})")));
        }

        Ok(Self { trend, price })
    }

    pub fn trend(&self) -> Trend {
        self.trend
    }

    pub fn price(&self) -> i64 {
        self.price
    }
}

impl fmt::Display for PriceTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PriceTrend{{trend={}, price={}}}", self.trend, self.price)
    }
}

/// An absolute price change paired with its trend.
///
/// The change and the trend come from separate wire fields and are not
/// checked against each other; a positive change may carry a negative trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PriceChangeTrend {
    trend: Trend,
    price_change: i64,
}

impl PriceChangeTrend {
    pub fn new(trend: Trend, price_change: i64) -> Self {
        Self {
            trend,
            price_change,
        }
    }

    pub fn trend(&self) -> Trend {
        self.trend
    }

    pub fn price_change(&self) -> i64 {
        self.price_change
    }
}

impl fmt::Display for PriceChangeTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PriceChangeTrend{{trend={}, priceChange={}}}",
            self.trend, self.price_change
        )
    }
}

/// A relative price change paired with its trend, `1.0` meaning 100%.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PercentChangeTrend {
    trend: Trend,
    percent_change: f64,
}

impl PercentChangeTrend {
    pub fn new(trend: Trend, percent_change: f64) -> Self {
        Self {
            trend,
            percent_change,
        }
    }

    pub fn trend(&self) -> Trend {
        self.trend
    }

    pub fn percent_change(&self) -> f64 {
        self.percent_change
    }
}

// Compared bit for bit so that Eq and Hash stay consistent.
impl PartialEq for PercentChangeTrend {
    fn eq(&self, other: &Self) -> bool {
        self.trend == other.trend && self.percent_change.to_bits() == other.percent_change.to_bits()
    }
}

impl Eq for PercentChangeTrend {}

impl Hash for PercentChangeTrend {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.trend.hash(state);
        self.percent_change.to_bits().hash(state);
    }
}

impl fmt::Display for PercentChangeTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PercentChangeTrend{{trend={}, percentChange={}}}",
            self.trend, self.percent_change
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_names_round_trip() {
        for trend in Trend::ALL {
            assert_eq!(Trend::from_name(trend.name()), Some(trend));
        }
    }

    #[test]
    fn trend_lookup_is_case_sensitive() {
        assert_eq!(Trend::from_name("Positive"), None);
        assert_eq!(Trend::from_name("up"), None);
        assert_eq!(Trend::from_name(""), None);
    }

    #[test]
    fn trend_serializes_as_wire_name() {
        for trend in Trend::ALL {
            let json = serde_json::to_string(&trend).unwrap();
            assert_eq!(json, format!("\"{}\"", trend.name()));
        }
    }

    #[test]
    fn trend_signum() {
        assert_eq!(Trend::Negative.signum(), -1);
        assert_eq!(Trend::Neutral.signum(), 0);
        assert_eq!(Trend::Positive.signum(), 1);
    }

    #[test]
    fn price_trend_requires_positive_price() {
        assert!(PriceTrend::new(Trend::Neutral, 1).is_ok());
        assert!(matches!(
            PriceTrend::new(Trend::Neutral, 0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            PriceTrend::new(Trend::Positive, -10),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn price_change_is_not_cross_checked() {
        let change = PriceChangeTrend::new(Trend::Negative, 50);
        assert_eq!(change.trend(), Trend::Negative);
        assert_eq!(change.price_change(), 50);
    }

    #[test]
    fn percent_change_equality() {
        let a = PercentChangeTrend::new(Trend::Positive, 0.1234);
        let b = PercentChangeTrend::new(Trend::Positive, 0.1234);
        let c = PercentChangeTrend::new(Trend::Negative, 0.1234);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: std::collections::HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display_formats() {
        let trend = PriceTrend::new(Trend::Positive, 1200).unwrap();
        assert_eq!(trend.to_string(), "PriceTrend{trend=positive, price=1200}");
    }
}
