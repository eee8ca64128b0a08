use serde::{Deserialize, Serialize};

/// A locally-registered user account, persisted as JSON in browser storage.
/// This is a demo credential store, not an authentication system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Form state for the signup page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub id: String,
    pub email: String,
    pub name: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Validate against the existing user list and build the new record.
    pub fn validate(&self, existing: &[UserRecord]) -> Result<UserRecord, String> {
        if self.id.trim().is_empty()
            || self.email.trim().is_empty()
            || self.name.trim().is_empty()
            || self.password.is_empty()
        {
            return Err("All fields are required".to_string());
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match".to_string());
        }
        if existing.iter().any(|u| u.id == self.id) {
            return Err("User ID already exists".to_string());
        }
        Ok(UserRecord {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            password: self.password.clone(),
        })
    }
}

/// Find a user matching the submitted credential pair.
pub fn match_credentials<'a>(
    users: &'a [UserRecord],
    id: &str,
    password: &str,
) -> Option<&'a UserRecord> {
    users.iter().find(|u| u.id == id && u.password == password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form() -> SignupForm {
        SignupForm {
            id: "ravi".into(),
            email: "ravi@example.com".into(),
            name: "Ravi M".into(),
            password: "secret".into(),
            confirm_password: "secret".into(),
        }
    }

    #[test]
    fn valid_form_builds_record() {
        let record = form().validate(&[]).unwrap();
        assert_eq!(record.id, "ravi");
        assert_eq!(record.email, "ravi@example.com");
    }

    #[test]
    fn mismatched_passwords_rejected() {
        let mut f = form();
        f.confirm_password = "other".into();
        assert_eq!(f.validate(&[]).unwrap_err(), "Passwords do not match");
    }

    #[test]
    fn duplicate_id_rejected() {
        let existing = vec![form().validate(&[]).unwrap()];
        assert_eq!(
            form().validate(&existing).unwrap_err(),
            "User ID already exists"
        );
    }

    #[test]
    fn blank_fields_rejected() {
        let mut f = form();
        f.email = "  ".into();
        assert_eq!(f.validate(&[]).unwrap_err(), "All fields are required");
    }

    #[test]
    fn credentials_must_match_both_id_and_password() {
        let users = vec![form().validate(&[]).unwrap()];
        assert!(match_credentials(&users, "ravi", "secret").is_some());
        assert!(match_credentials(&users, "ravi", "wrong").is_none());
        assert!(match_credentials(&users, "other", "secret").is_none());
    }
}
