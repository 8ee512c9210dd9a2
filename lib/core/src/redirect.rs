//! The OAuth callback redirect decision.
//!
//! [`Redirector::decide`] is a pure function from the location hash to a
//! [`Decision`]. Reading the hash and navigating belong to the caller.

use crate::error::RedirectConfigError;
use crate::fragment::Fragment;
use crate::target::{CallbackOutcome, Decision, NavigationTarget};
use rootcause::prelude::Report;

/// Custom-scheme URL the native app registers for OAuth callbacks.
pub const DEFAULT_APP_CALLBACK_URL: &str = "pista://oauth-callback";

/// Local route used when the fragment carries no authorization response.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Literal marker for a successful implicit-flow response. Matched as a
/// substring of the raw fragment, not as a parsed parameter.
const ACCESS_TOKEN_MARKER: &str = "access_token=";

/// Parameter an authorization server sets on a failed response.
const ERROR_PARAM: &str = "error";

/// The two destinations of the callback view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectConfig {
    /// Deep link prefix; the original fragment is appended to it.
    app_callback_url: String,
    /// Local login route.
    login_path: String,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            app_callback_url: DEFAULT_APP_CALLBACK_URL.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }
}

impl RedirectConfig {
    /// Creates a configuration with custom destinations.
    ///
    /// # Errors
    ///
    /// Returns an error if `app_callback_url` does not start with a custom
    /// (non-http) `scheme://`, if it already contains a `#`, or if
    /// `login_path` is not an absolute path.
    pub fn new(
        app_callback_url: String,
        login_path: String,
    ) -> Result<Self, Report<RedirectConfigError>> {
        validate_app_callback_url(&app_callback_url)?;
        if !login_path.starts_with('/') {
            return Err(RedirectConfigError::RelativeLoginPath { path: login_path }.into());
        }
        Ok(Self {
            app_callback_url,
            login_path,
        })
    }

    /// Returns the deep link prefix.
    #[must_use]
    pub fn app_callback_url(&self) -> &str {
        &self.app_callback_url
    }

    /// Returns the local login route.
    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }
}

fn validate_app_callback_url(url: &str) -> Result<(), Report<RedirectConfigError>> {
    let Some((scheme, _)) = url.split_once("://") else {
        return Err(RedirectConfigError::MissingScheme {
            url: url.to_string(),
        }
        .into());
    };

    let mut chars = scheme.chars();
    let valid_scheme = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !valid_scheme {
        return Err(RedirectConfigError::MissingScheme {
            url: url.to_string(),
        }
        .into());
    }

    if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") {
        return Err(RedirectConfigError::WebScheme {
            url: url.to_string(),
            scheme: scheme.to_string(),
        }
        .into());
    }

    if url.contains('#') {
        return Err(RedirectConfigError::FragmentInCallbackUrl {
            url: url.to_string(),
        }
        .into());
    }

    Ok(())
}

/// Decides where an OAuth callback should go.
#[derive(Debug, Clone, Default)]
pub struct Redirector {
    config: RedirectConfig,
}

impl Redirector {
    #[must_use]
    pub fn new(config: RedirectConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RedirectConfig {
        &self.config
    }

    /// Decides the navigation target for a location hash.
    ///
    /// `hash` may include its leading `#`. First match wins:
    /// 1. the fragment contains `access_token=`: deep link with the fragment
    /// 2. the fragment has a non-empty `error` parameter: deep link with the fragment
    /// 3. any other fragment: login
    /// 4. no fragment: login
    ///
    /// The deep link is the callback URL followed by the original fragment,
    /// verbatim, so the app parses it itself.
    #[must_use]
    pub fn decide(&self, hash: Option<&str>) -> Decision {
        let decision = match hash.and_then(Fragment::from_hash) {
            None => self.login(CallbackOutcome::Empty),
            Some(fragment) if fragment.contains(ACCESS_TOKEN_MARKER) => {
                self.app(CallbackOutcome::Authorized, &fragment)
            }
            Some(fragment) => match fragment.parameters().get(ERROR_PARAM) {
                Some(error) if !error.is_empty() => self.app(
                    CallbackOutcome::ProviderError {
                        error: error.to_string(),
                    },
                    &fragment,
                ),
                _ => self.login(CallbackOutcome::Unrecognized),
            },
        };

        tracing::debug!(
            outcome = decision.outcome.as_str(),
            to_app = decision.target.is_app(),
            "decided oauth callback target"
        );
        decision
    }

    fn app(&self, outcome: CallbackOutcome, fragment: &Fragment) -> Decision {
        Decision {
            outcome,
            target: NavigationTarget::App(format!(
                "{}{}",
                self.config.app_callback_url,
                fragment.to_hash()
            )),
        }
    }

    fn login(&self, outcome: CallbackOutcome) -> Decision {
        Decision {
            outcome,
            target: NavigationTarget::Login(self.config.login_path.clone()),
        }
    }
}

/// Decides the target for `hash` using the default destinations.
#[must_use]
pub fn decide(hash: &str) -> NavigationTarget {
    Redirector::default().decide(Some(hash)).target
}
