//! Browser-local session state.
//!
//! There is no server. Police and admin logins compare against fixed
//! demo credentials and record the result as a localStorage flag;
//! citizen signups are stored as a JSON user list in the same store.

use dioxus::document;
use shared_types::{AppError, UserRecord};

const USERS_KEY: &str = "scc.users";
const CURRENT_USER_KEY: &str = "scc.current_user";

/// Demo credentials for the police console.
pub const POLICE_CREDENTIALS: (&str, &str) = ("police", "pol@123");
/// Demo credentials for the admin console.
pub const ADMIN_CREDENTIALS: (&str, &str) = ("admin", "admin@123");

/// A privileged console. Each realm keeps its own session flag, and at
/// most one realm is signed in at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Realm {
    Police,
    Admin,
}

impl Realm {
    pub fn storage_key(&self) -> &'static str {
        match self {
            Realm::Police => "scc.police.session",
            Realm::Admin => "scc.admin.session",
        }
    }

    pub fn other(&self) -> Realm {
        match self {
            Realm::Police => Realm::Admin,
            Realm::Admin => Realm::Police,
        }
    }

    pub fn login_route_name(&self) -> &'static str {
        match self {
            Realm::Police => "Police Login",
            Realm::Admin => "Admin Login",
        }
    }
}

/// Check a username/password pair against the realm's fixed credentials.
pub fn verify_realm_credentials(realm: Realm, username: &str, password: &str) -> bool {
    let (expected_user, expected_pass) = match realm {
        Realm::Police => POLICE_CREDENTIALS,
        Realm::Admin => ADMIN_CREDENTIALS,
    };
    username == expected_user && password == expected_pass
}

/// Read the realm's session flag. Anything but the literal "true"
/// counts as signed out.
pub async fn realm_flag(realm: Realm) -> bool {
    let js = format!(
        "return window.localStorage.getItem('{}');",
        realm.storage_key()
    );
    match document::eval(&js).await {
        Ok(value) => value.as_str() == Some("true"),
        Err(err) => {
            tracing::warn!("session flag read failed: {err:?}");
            false
        }
    }
}

/// Mark the realm as signed in. The other realm's flag is cleared in
/// the same step so the consoles stay mutually exclusive.
pub fn sign_in(realm: Realm) {
    document::eval(&format!(
        "window.localStorage.setItem('{}', 'true'); window.localStorage.removeItem('{}');",
        realm.storage_key(),
        realm.other().storage_key(),
    ));
}

pub fn sign_out(realm: Realm) {
    document::eval(&format!(
        "window.localStorage.removeItem('{}');",
        realm.storage_key()
    ));
}

/// Load the locally registered citizen accounts. An absent or
/// unreadable list is treated as empty.
pub async fn load_users() -> Vec<UserRecord> {
    read_json(USERS_KEY).await.unwrap_or_default()
}

/// Persist the citizen account list.
pub fn save_users(users: &[UserRecord]) -> Result<(), AppError> {
    write_json(USERS_KEY, users)
}

pub async fn current_user() -> Option<UserRecord> {
    read_json(CURRENT_USER_KEY).await
}

pub fn store_current_user(user: &UserRecord) -> Result<(), AppError> {
    write_json(CURRENT_USER_KEY, user)
}

pub fn clear_current_user() {
    document::eval(&format!(
        "window.localStorage.removeItem('{CURRENT_USER_KEY}');"
    ));
}

async fn read_json<T: serde::de::DeserializeOwned>(key: &str) -> Option<T> {
    let js = format!("return window.localStorage.getItem('{key}');");
    let raw = match document::eval(&js).await {
        Ok(value) => value.as_str().map(str::to_string)?,
        Err(err) => {
            tracing::warn!("localStorage read of {key} failed: {err:?}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            tracing::warn!("discarding unreadable value under {key}: {err}");
            None
        }
    }
}

fn write_json<T: serde::Serialize + ?Sized>(key: &str, value: &T) -> Result<(), AppError> {
    let literal = json_literal(value)?;
    document::eval(&format!(
        "window.localStorage.setItem('{key}', {literal});"
    ));
    Ok(())
}

/// Serialize a value and double-encode it so the payload lands in the
/// eval script as a valid JS string literal. `?Sized` so slices work.
fn json_literal<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    let json = serde_json::to_string(value).map_err(|err| AppError::internal(err.to_string()))?;
    serde_json::to_string(&json).map_err(|err| AppError::internal(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn realm_flags_use_distinct_keys() {
        assert_ne!(Realm::Police.storage_key(), Realm::Admin.storage_key());
    }

    #[test]
    fn other_swaps_realms() {
        assert_eq!(Realm::Police.other(), Realm::Admin);
        assert_eq!(Realm::Admin.other(), Realm::Police);
    }

    #[test]
    fn police_credentials_verify() {
        assert!(verify_realm_credentials(Realm::Police, "police", "pol@123"));
        assert!(!verify_realm_credentials(Realm::Police, "police", "wrong"));
        assert!(!verify_realm_credentials(Realm::Police, "", ""));
    }

    #[test]
    fn user_lists_encode_as_js_string_literals() {
        let users = vec![UserRecord {
            id: "u1".into(),
            email: "u1@example.com".into(),
            name: "User One".into(),
            password: "secret".into(),
        }];
        // Slices must be accepted as-is; save_users hands one over.
        let literal = json_literal(users.as_slice()).unwrap();
        assert!(literal.starts_with('"') && literal.ends_with('"'));
        let inner: String = serde_json::from_str(&literal).unwrap();
        let parsed: Vec<UserRecord> = serde_json::from_str(&inner).unwrap();
        assert_eq!(parsed, users);
    }

    #[test]
    fn admin_credentials_verify() {
        assert!(verify_realm_credentials(Realm::Admin, "admin", "admin@123"));
        // Credentials are realm-specific, not interchangeable.
        assert!(!verify_realm_credentials(Realm::Admin, "police", "pol@123"));
    }
}
