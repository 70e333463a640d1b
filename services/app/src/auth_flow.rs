//! Login/register form state

/// Which auth form is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Form-level authentication state: the active mode and the last
/// user-visible error message
#[derive(Debug, Default)]
pub struct AuthFlow {
    mode: AuthMode,
    error: Option<String>,
}

impl AuthFlow {
    /// Active form mode
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Last error message, if the previous attempt failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Switch between login and register; stale errors do not carry across
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        self.error = None;
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }

    pub(crate) fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_clears_error() {
        let mut flow = AuthFlow::default();
        assert_eq!(flow.mode(), AuthMode::Login);

        flow.set_error("Invalid email or password".to_string());
        flow.toggle_mode();

        assert_eq!(flow.mode(), AuthMode::Register);
        assert_eq!(flow.error(), None);

        flow.toggle_mode();
        assert_eq!(flow.mode(), AuthMode::Login);
    }
}
