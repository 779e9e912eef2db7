use std::borrow::Cow;

use super::types::{InstrumentKey, Symbol};

/// Instrument classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InstrumentKind {
    /// Cash equity index with an index-futures proxy
    Index,
    /// Interest-rate series
    Yield,
    /// Spot FX pair, trades around the clock
    Fx,
    /// Single ticker looked up on demand
    #[default]
    Equity,
}

/// A logical instrument: the spot ticker plus an optional futures proxy used
/// when the cash market is closed.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Instrument {
    pub key: InstrumentKey,
    pub kind: InstrumentKind,
    pub spot: Symbol,
    pub futures: Option<Symbol>,
}

impl Instrument {
    /// Build an ad-hoc instrument for a single ticker. Tickers never get a
    /// futures proxy.
    pub fn ticker(symbol: impl Into<String>) -> Self {
        let symbol = symbol.into();
        Self {
            key: Cow::Owned(symbol.clone()),
            kind: InstrumentKind::Equity,
            spot: Cow::Owned(symbol),
            futures: None,
        }
    }

    pub fn has_futures(&self) -> bool {
        self.futures.is_some()
    }
}

const fn indexed(
    key: &'static str,
    kind: InstrumentKind,
    spot: &'static str,
    futures: Option<&'static str>,
) -> Instrument {
    Instrument {
        key: Cow::Borrowed(key),
        kind,
        spot: Cow::Borrowed(spot),
        futures: match futures {
            Some(symbol) => Some(Cow::Borrowed(symbol)),
            None => None,
        },
    }
}

/// Instruments shown on the market overview, in display order.
///
/// The first entry's session label is reported as the overall market state.
pub static INDEX_INSTRUMENTS: [Instrument; 5] = [
    indexed("nasdaq", InstrumentKind::Index, "^IXIC", Some("NQ=F")),
    indexed("sp500", InstrumentKind::Index, "^GSPC", Some("ES=F")),
    indexed("dow", InstrumentKind::Index, "^DJI", Some("YM=F")),
    indexed("us10y", InstrumentKind::Yield, "^TNX", None),
    indexed("usdkrw", InstrumentKind::Fx, "KRW=X", None),
];

/// Look up an index instrument by its key.
pub fn find_index_instrument(key: &str) -> Option<&'static Instrument> {
    INDEX_INSTRUMENTS.iter().find(|i| i.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_index_keys_are_unique() {
        let keys: HashSet<_> = INDEX_INSTRUMENTS.iter().map(|i| i.key.as_ref()).collect();
        assert_eq!(keys.len(), INDEX_INSTRUMENTS.len());
    }

    #[test]
    fn test_equity_indices_have_futures_proxy() {
        for instrument in INDEX_INSTRUMENTS
            .iter()
            .filter(|i| i.kind == InstrumentKind::Index)
        {
            assert!(instrument.has_futures(), "{} has no proxy", instrument.key);
        }
    }

    #[test]
    fn test_yield_and_fx_have_no_futures() {
        let us10y = find_index_instrument("us10y").unwrap();
        assert_eq!(us10y.spot, "^TNX");
        assert!(us10y.futures.is_none());

        let usdkrw = find_index_instrument("usdkrw").unwrap();
        assert_eq!(usdkrw.kind, InstrumentKind::Fx);
        assert!(usdkrw.futures.is_none());
    }

    #[test]
    fn test_find_unknown_key() {
        assert!(find_index_instrument("nikkei").is_none());
    }

    #[test]
    fn test_ticker_instrument() {
        let instrument = Instrument::ticker("AAPL");
        assert_eq!(instrument.key, "AAPL");
        assert_eq!(instrument.spot, "AAPL");
        assert_eq!(instrument.kind, InstrumentKind::Equity);
        assert!(!instrument.has_futures());
    }
}
