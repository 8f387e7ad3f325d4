//! Authentication
//!
//! Read-only access to the bearer token issued at login.

/// Local storage key the login page writes the token under
pub const TOKEN_STORAGE_KEY: &str = "token";

pub trait AuthService {
    /// Current bearer token, `None` when not logged in
    fn token(&self) -> Option<String>;
}

/// Token from `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageAuth;

impl AuthService for LocalStorageAuth {
    fn token(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let token = storage.get_item(TOKEN_STORAGE_KEY).ok().flatten()?;
        non_blank(token)
    }
}

/// Fixed token
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StaticAuth {
    token: Option<String>,
}

#[cfg(test)]
impl StaticAuth {
    pub fn new(token: Option<&str>) -> Self {
        Self { token: token.map(str::to_string) }
    }
}

#[cfg(test)]
impl AuthService for StaticAuth {
    fn token(&self) -> Option<String> {
        self.token.clone().and_then(non_blank)
    }
}

fn non_blank(token: String) -> Option<String> {
    if token.trim().is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_counts_as_absent() {
        assert_eq!(StaticAuth::new(None).token(), None);
        assert_eq!(StaticAuth::new(Some("  ")).token(), None);
        assert_eq!(StaticAuth::new(Some("jwt")).token().as_deref(), Some("jwt"));
    }
}
