use std::fmt;

use serde::{Deserialize, Serialize};

/// Trading session label attached to a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketState {
    Regular,
    Pre,
    Post,
    Closed,
    /// Assigned locally when the upstream fetch failed; never sent by a provider.
    Error,
}

impl MarketState {
    /// Parse an upstream session label.
    ///
    /// A missing label means the provider only reports the regular session.
    /// Yahoo's overnight labels (`PREPRE`, `POSTPOST`) and anything unknown
    /// count as closed.
    pub fn from_label(label: Option<&str>) -> Self {
        let Some(label) = label else {
            return Self::Regular;
        };
        match label.trim().to_ascii_uppercase().as_str() {
            "REGULAR" => Self::Regular,
            "PRE" => Self::Pre,
            "POST" => Self::Post,
            _ => Self::Closed,
        }
    }

    /// Whether a price read in this session is current enough to show as-is.
    pub fn is_trading(&self) -> bool {
        matches!(self, Self::Regular | Self::Pre | Self::Post)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "REGULAR",
            Self::Pre => "PRE",
            Self::Post => "POST",
            Self::Closed => "CLOSED",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for MarketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which instrument and field a resolved price was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    Spot,
    Pre,
    Post,
    Futures,
}

impl PriceSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spot => "spot",
            Self::Pre => "pre",
            Self::Post => "post",
            Self::Futures => "futures",
        }
    }
}

impl fmt::Display for PriceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_label_is_regular() {
        assert_eq!(MarketState::from_label(None), MarketState::Regular);
    }

    #[test]
    fn test_known_labels() {
        assert_eq!(MarketState::from_label(Some("REGULAR")), MarketState::Regular);
        assert_eq!(MarketState::from_label(Some("pre")), MarketState::Pre);
        assert_eq!(MarketState::from_label(Some("POST")), MarketState::Post);
        assert_eq!(MarketState::from_label(Some("CLOSED")), MarketState::Closed);
    }

    #[test]
    fn test_overnight_and_unknown_labels_are_closed() {
        assert_eq!(MarketState::from_label(Some("PREPRE")), MarketState::Closed);
        assert_eq!(MarketState::from_label(Some("POSTPOST")), MarketState::Closed);
        assert_eq!(MarketState::from_label(Some("HALTED")), MarketState::Closed);
        // ERROR is a local marker, not something upstream can claim
        assert_eq!(MarketState::from_label(Some("ERROR")), MarketState::Closed);
    }

    #[test]
    fn test_is_trading() {
        assert!(MarketState::Regular.is_trading());
        assert!(MarketState::Pre.is_trading());
        assert!(MarketState::Post.is_trading());
        assert!(!MarketState::Closed.is_trading());
        assert!(!MarketState::Error.is_trading());
    }

    #[test]
    fn test_serde_labels() {
        assert_eq!(
            serde_json::to_string(&MarketState::Closed).unwrap(),
            "\"CLOSED\""
        );
        assert_eq!(
            serde_json::to_string(&PriceSource::Futures).unwrap(),
            "\"futures\""
        );
        let state: MarketState = serde_json::from_str("\"POST\"").unwrap();
        assert_eq!(state, MarketState::Post);
    }
}
