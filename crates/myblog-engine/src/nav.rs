/// Brand shown at the left edge of the header.
pub const BRAND: &str = "MyBlog";

/// What the navigation header knows about the session. Mapped from the
/// session provider's auth state by the caller; the header itself never
/// reads the token store.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionDisplay {
    Checking,
    LoggedIn { username: String },
    LoggedOut,
}

#[derive(Debug, Clone)]
pub struct NavModel {
    session: SessionDisplay,
}

impl Default for NavModel {
    fn default() -> Self {
        Self {
            session: SessionDisplay::LoggedOut,
        }
    }
}

impl NavModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &SessionDisplay {
        &self.session
    }

    pub fn set_session(&mut self, session: SessionDisplay) {
        self.session = session;
    }

    /// Greeting text when logged in, e.g. "Welcome, alice".
    pub fn greeting(&self) -> Option<String> {
        match &self.session {
            SessionDisplay::LoggedIn { username } => Some(format!("Welcome, {}", username)),
            _ => None,
        }
    }

    /// Header affordances for the current session state.
    pub fn actions(&self) -> &'static [&'static str] {
        match self.session {
            SessionDisplay::LoggedIn { .. } => &["Home", "Logout"],
            SessionDisplay::Checking => &["Home"],
            SessionDisplay::LoggedOut => &["Home", "Login", "Signup"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_only_when_logged_in() {
        let mut nav = NavModel::new();
        assert_eq!(nav.greeting(), None);

        nav.set_session(SessionDisplay::LoggedIn {
            username: "alice".to_string(),
        });
        assert_eq!(nav.greeting().as_deref(), Some("Welcome, alice"));
    }

    #[test]
    fn test_actions_follow_session_state() {
        let mut nav = NavModel::new();
        assert!(nav.actions().contains(&"Signup"));

        nav.set_session(SessionDisplay::LoggedIn {
            username: "alice".to_string(),
        });
        assert!(nav.actions().contains(&"Logout"));
        assert!(!nav.actions().contains(&"Login"));
    }
}
