use std::borrow::Cow;

/// Upstream ticker symbol; static for the built-in table, owned for ad-hoc lookups
pub type Symbol = Cow<'static, str>;

/// Logical instrument key used in API responses (e.g. "nasdaq")
pub type InstrumentKey = Cow<'static, str>;
