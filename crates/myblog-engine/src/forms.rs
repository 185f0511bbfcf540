//! Form field state and submission-time validation.
//!
//! Validation runs only when a submission is attempted and reports every
//! failing field at once: the rules build a field → message map first and
//! the submit decision looks at the whole map, never short-circuiting.

use std::collections::BTreeMap;

use myblog_types::{LoginRequest, SignupRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignupField {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl SignupField {
    pub fn name(&self) -> &'static str {
        match self {
            SignupField::Username => "username",
            SignupField::Email => "email",
            SignupField::Password => "password",
            SignupField::ConfirmPassword => "confirmPassword",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    errors: BTreeMap<SignupField, String>,
}

impl SignupForm {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
            errors: BTreeMap::new(),
        }
    }

    /// Run all rules, store the resulting map, and return whether the form
    /// may be submitted. An existing message on any field blocks submission
    /// entirely.
    pub fn validate(&mut self) -> bool {
        let mut errors = BTreeMap::new();

        if self.username.is_empty() {
            errors.insert(SignupField::Username, "Username is required".to_string());
        }

        if self.email.is_empty() {
            errors.insert(SignupField::Email, "Email is required".to_string());
        } else if !email_shape_ok(&self.email) {
            errors.insert(SignupField::Email, "Email address is invalid".to_string());
        }

        if self.password.is_empty() {
            errors.insert(SignupField::Password, "Password is required".to_string());
        } else if self.password.chars().count() < 6 {
            errors.insert(
                SignupField::Password,
                "Password must be at least 6 characters".to_string(),
            );
        }

        if self.password != self.confirm_password {
            errors.insert(
                SignupField::ConfirmPassword,
                "Passwords do not match".to_string(),
            );
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<SignupField, String> {
        &self.errors
    }

    pub fn error(&self, field: SignupField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// The raw field bundle, posted as-is once validation passes.
    pub fn request(&self) -> SignupRequest {
        SignupRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoginField {
    Email,
    Password,
}

impl LoginField {
    pub fn name(&self) -> &'static str {
        match self {
            LoginField::Email => "email",
            LoginField::Password => "password",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    errors: BTreeMap<LoginField, String>,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            errors: BTreeMap::new(),
        }
    }

    pub fn validate(&mut self) -> bool {
        let mut errors = BTreeMap::new();

        if self.email.is_empty() {
            errors.insert(LoginField::Email, "Email is required".to_string());
        } else if !email_shape_ok(&self.email) {
            errors.insert(LoginField::Email, "Email address is invalid".to_string());
        }

        if self.password.is_empty() {
            errors.insert(LoginField::Password, "Password is required".to_string());
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<LoginField, String> {
        &self.errors
    }

    pub fn request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Permissive something@something.domain shape check, deliberately no
/// stricter than the original UI's pattern.
fn email_shape_ok(email: &str) -> bool {
    email.split_whitespace().any(|token| {
        let Some((local, domain)) = token.split_once('@') else {
            return false;
        };
        if local.is_empty() {
            return false;
        }
        match domain.rsplit_once('.') {
            Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
            None => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> SignupForm {
        SignupForm::new("alice", "alice@example.com", "secret1", "secret1")
    }

    #[test]
    fn test_valid_form_passes() {
        let mut form = filled_form();
        assert!(form.validate());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_all_failing_fields_reported_simultaneously() {
        let mut form = SignupForm::new("", "bad-email", "secret1", "different");

        assert!(!form.validate());

        assert_eq!(form.error(SignupField::Username), Some("Username is required"));
        assert_eq!(form.error(SignupField::Email), Some("Email address is invalid"));
        assert_eq!(
            form.error(SignupField::ConfirmPassword),
            Some("Passwords do not match")
        );
        assert_eq!(form.errors().len(), 3);
    }

    #[test]
    fn test_short_password() {
        let mut form = filled_form();
        form.password = "abc".to_string();
        form.confirm_password = "abc".to_string();

        assert!(!form.validate());
        assert_eq!(
            form.error(SignupField::Password),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn test_empty_email_reports_required_not_invalid() {
        let mut form = filled_form();
        form.email = String::new();

        assert!(!form.validate());
        assert_eq!(form.error(SignupField::Email), Some("Email is required"));
    }

    #[test]
    fn test_email_shape() {
        assert!(email_shape_ok("alice@example.com"));
        assert!(email_shape_ok("a@b.c"));
        assert!(!email_shape_ok("bad-email"));
        assert!(!email_shape_ok("@example.com"));
        assert!(!email_shape_ok("alice@example"));
        assert!(!email_shape_ok("alice@.x"));
    }

    #[test]
    fn test_revalidation_clears_stale_errors() {
        let mut form = SignupForm::default();
        assert!(!form.validate());
        assert!(!form.errors().is_empty());

        form.username = "alice".to_string();
        form.email = "alice@example.com".to_string();
        form.password = "secret1".to_string();
        form.confirm_password = "secret1".to_string();

        assert!(form.validate());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_login_form_validation() {
        let mut form = LoginForm::new("bad", "");

        assert!(!form.validate());
        assert_eq!(form.errors().len(), 2);

        form.email = "alice@example.com".to_string();
        form.password = "secret1".to_string();
        assert!(form.validate());
    }
}
