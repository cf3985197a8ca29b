//! User credentials for basic authentication

/// A user name and password for the search API.
///
/// The password is never printed by the `Debug` implementation.
///
/// # Example
///
/// ```
/// use loggly_lib::auth::Credentials;
///
/// let creds = Credentials::new("tobi", "ferret");
/// assert_eq!(creds.user(), "tobi");
/// assert!(!format!("{:?}", creds).contains("ferret"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    user: String,
    pass: String,
}

impl Credentials {
    /// Creates credentials from a user name and password.
    pub fn new(user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            pass: pass.into(),
        }
    }

    /// Returns the user name.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the password.
    pub fn pass(&self) -> &str {
        &self.pass
    }

    /// Applies the credentials to an outgoing request.
    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.basic_auth(&self.user, Some(&self.pass))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("pass", &"<redacted>")
            .finish()
    }
}
