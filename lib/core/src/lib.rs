//! Core types and the redirect decision for pista-bridge.
//!
//! After an OAuth implicit-flow redirect the authorization response sits in
//! the URL fragment. This crate decides, from that fragment alone, whether the
//! browser should hand control back to the Pista app through its custom URL
//! scheme or go to the local login route.
//!
//! Nothing here touches the browser. The server crate reads
//! `location.hash`, calls [`Redirector::decide`] and navigates.
//!
//! # Example
//!
//! ```
//! use pista_bridge_core::{CallbackOutcome, NavigationTarget, Redirector};
//!
//! let redirector = Redirector::default();
//!
//! let decision = redirector.decide(Some("#access_token=abc123&token_type=bearer"));
//! assert_eq!(decision.outcome, CallbackOutcome::Authorized);
//! assert_eq!(
//!     decision.target.href(),
//!     "pista://oauth-callback#access_token=abc123&token_type=bearer"
//! );
//!
//! let decision = redirector.decide(Some("#foo=bar"));
//! assert_eq!(decision.target, NavigationTarget::Login("/login".to_string()));
//! ```

pub mod error;
pub mod fragment;
pub mod redirect;
pub mod target;

pub use error::{RedirectConfigError, Result};
pub use fragment::{Fragment, FragmentParameters};
pub use redirect::{
    DEFAULT_APP_CALLBACK_URL, DEFAULT_LOGIN_PATH, RedirectConfig, Redirector, decide,
};
pub use target::{CallbackOutcome, Decision, NavigationTarget};
