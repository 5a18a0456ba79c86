// Session Configuration

/// Public Copr instance used when nothing else is configured
pub const DEFAULT_URL: &str = "https://copr.fedoraproject.org";

/// Connection settings for one session
///
/// `url` never ends with a slash, so command paths (which always start with
/// one) can be appended directly. Credentials are only checked when an
/// authenticated command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    url: String,
    login: Option<String>,
    token: Option<String>,
}

impl Configuration {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: normalize_url(url.into()),
            login: None,
            token: None,
        }
    }

    /// Builder-style credentials setter
    pub fn with_credentials(mut self, login: impl Into<String>, token: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self.token = Some(token.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn login(&self) -> Option<&str> {
        self.login.as_deref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = normalize_url(url.into());
    }

    pub fn set_login(&mut self, login: Option<String>) {
        self.login = login;
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Both login and token are present and non-empty
    pub fn has_credentials(&self) -> bool {
        matches!(self.login(), Some(l) if !l.is_empty())
            && matches!(self.token(), Some(t) if !t.is_empty())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(DEFAULT_URL)
    }
}

fn normalize_url(url: String) -> String {
    let trimmed = url.trim_end_matches('/');
    if trimmed.len() == url.len() {
        url
    } else {
        trimmed.to_string()
    }
}
