//! Navigation targets and the outcome that selected them.

use std::fmt;

/// Where the callback view sends the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// A custom-scheme deep link handing control back to the native app.
    App(String),
    /// A local route on this site.
    Login(String),
}

impl NavigationTarget {
    /// Returns the value to assign to the document location.
    #[must_use]
    pub fn href(&self) -> &str {
        match self {
            Self::App(url) => url,
            Self::Login(path) => path,
        }
    }

    /// Returns true if this target opens the native app.
    #[must_use]
    pub fn is_app(&self) -> bool {
        matches!(self, Self::App(_))
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.href())
    }
}

/// What the fragment said about the authorization attempt.
///
/// Only used for diagnostics: it never holds the access token, and the
/// provider error code is the only fragment value it keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// The fragment carries an access token.
    Authorized,
    /// The provider returned an `error` parameter.
    ProviderError { error: String },
    /// There was no fragment.
    Empty,
    /// The fragment had neither a token nor an error.
    Unrecognized,
}

impl CallbackOutcome {
    /// Short label for log lines.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authorized => "authorized",
            Self::ProviderError { .. } => "provider_error",
            Self::Empty => "empty",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for CallbackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProviderError { error } => write!(f, "provider_error ({error})"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// A navigation target together with the outcome that chose it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub outcome: CallbackOutcome,
    pub target: NavigationTarget,
}
