use std::fmt;

use crate::utils::constants::{AUTH_CARD_PATH, AUTH_LOGIN_PATH};

/// Credential scope of a bearer token. Card and tokenization resources are
/// only reachable with a `Sensitive` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenScope {
    Standard,
    Sensitive,
}

impl TokenScope {
    /// Auth endpoint path, relative to the base url.
    pub fn auth_path(&self) -> &'static str {
        match self {
            TokenScope::Standard => AUTH_LOGIN_PATH,
            TokenScope::Sensitive => AUTH_CARD_PATH,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenScope::Standard => "standard",
            TokenScope::Sensitive => "sensitive",
        }
    }
}

impl fmt::Display for TokenScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
