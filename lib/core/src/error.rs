//! Error handling foundation for pista-bridge.
//!
//! Errors use rootcause: functions return `Report<C>` with a typed context
//! enum, and callers add their own context with `.context()` as the error
//! propagates.

use rootcause::Report;
use std::fmt;

/// A Result type alias using rootcause's Report for error handling.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

/// Errors from building a [`RedirectConfig`](crate::RedirectConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectConfigError {
    /// The app callback URL has no `scheme://` prefix.
    MissingScheme { url: String },
    /// The app callback URL uses a web scheme instead of a custom one.
    WebScheme { url: String, scheme: String },
    /// The app callback URL already carries a fragment.
    FragmentInCallbackUrl { url: String },
    /// The login path is not an absolute local path.
    RelativeLoginPath { path: String },
}

impl fmt::Display for RedirectConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingScheme { url } => {
                write!(f, "app callback url '{url}' has no scheme")
            }
            Self::WebScheme { url, scheme } => {
                write!(
                    f,
                    "app callback url '{url}' uses web scheme '{scheme}', expected a custom scheme"
                )
            }
            Self::FragmentInCallbackUrl { url } => {
                write!(f, "app callback url '{url}' must not contain a fragment")
            }
            Self::RelativeLoginPath { path } => {
                write!(f, "login path '{path}' must start with '/'")
            }
        }
    }
}

impl std::error::Error for RedirectConfigError {}
