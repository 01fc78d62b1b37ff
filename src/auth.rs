//! Mock sign-in. No credentials are checked and nothing leaves the browser.

use crate::error::AuthError;
use crate::storage::{self, KeyValueStore};
use crate::types::User;

/// Points every freshly signed-in user starts with.
pub const STARTING_POINTS: u32 = 150;

/// "jane.doe@x.com" -> "Janedoe"
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let mut chars = local.chars().filter(char::is_ascii_alphanumeric);
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.collect::<String>(),
        None => String::new(),
    }
}

/// Replaces whatever user was stored with a new one derived from `email`.
pub fn login(store: &impl KeyValueStore, email: &str) -> Result<User, AuthError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AuthError::MissingEmail);
    }
    let user = User::new(display_name_from_email(email), STARTING_POINTS);
    storage::save_user(store, &user)?;
    Ok(user)
}

/// Admin sign-in only checks that something was typed.
pub fn admin_login(email: &str) -> Result<(), AuthError> {
    if email.trim().is_empty() {
        return Err(AuthError::MissingAdminEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{load_user, save_user, MemoryStore};

    #[test]
    fn test_display_name_from_email() {
        assert_eq!(display_name_from_email("jane.doe@x.com"), "Janedoe");
        assert_eq!(display_name_from_email("bob_42@leaf.io"), "Bob42");
        assert_eq!(display_name_from_email("no-at-sign"), "Noatsign");
        assert_eq!(display_name_from_email("@x.com"), "");
        assert_eq!(display_name_from_email("élan@x.com"), "Lan");
    }

    #[test]
    fn test_login_overwrites_user() {
        let store = MemoryStore::default();
        save_user(&store, &User::new("Old", 999)).unwrap();

        let user = login(&store, "  jane.doe@x.com ").unwrap();

        assert_eq!(user, User::new("Janedoe", 150));
        assert_eq!(load_user(&store), user);
    }

    #[test]
    fn test_login_requires_email() {
        let store = MemoryStore::default();
        let err = login(&store, "   ").unwrap_err();
        assert!(matches!(err, AuthError::MissingEmail));
        assert_eq!(err.to_string(), "Enter email");
        assert_eq!(load_user(&store), User::default());
    }

    #[test]
    fn test_admin_login() {
        assert!(admin_login("root@leaf.io").is_ok());
        assert!(matches!(admin_login(""), Err(AuthError::MissingAdminEmail)));
    }
}
