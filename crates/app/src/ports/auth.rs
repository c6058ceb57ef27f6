//! Authentication port: turns a bearer credential into a [`Principal`].

use hotelhub_domain::error::HotelError;
use hotelhub_domain::principal::Principal;

/// Verifies bearer credentials.
pub trait Authenticator {
    /// Resolve the principal behind `token`.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::Auth`] when the token cannot be verified.
    fn authenticate(&self, token: &str) -> Result<Principal, HotelError>;
}
