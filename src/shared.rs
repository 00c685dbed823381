use std::fmt;

/// Marker written over the final hop name of every normalized path,
/// denoting the originating network itself.
pub const PATH_END_MARKER: &str = "END";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Direct,
    Tier1,
    Tier2,
    Tier3,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tier::Direct => "DIRECT",
            Tier::Tier1 => "TIER1",
            Tier::Tier2 => "TIER2",
            Tier::Tier3 => "TIER3",
        };
        write!(f, "{}", s)
    }
}

/// Transport or decode failure of a single upstream source. Recorded per
/// source; never aborts the query.
#[derive(Debug, Clone)]
pub struct SourceError {
    pub source: String,
    pub message: String,
}

impl SourceError {
    pub fn new(source: &str, message: impl Into<String>) -> Self {
        SourceError {
            source: source.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} unavailable: {}", self.source, self.message)
    }
}

impl std::error::Error for SourceError {}

/// Input that is neither valid CIDR nor resolvable through the lookup
/// service.
#[derive(Debug)]
pub struct PrefixError {
    pub input: String,
    pub message: String,
}

impl PrefixError {
    pub fn new(input: &str, message: impl Into<String>) -> Self {
        PrefixError {
            input: input.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for PrefixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot resolve '{}' to an address block: {}",
            self.input, self.message
        )
    }
}

impl std::error::Error for PrefixError {}
