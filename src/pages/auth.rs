use leptos::*;

use crate::app::Controller;
use crate::auth;
use crate::dom;
use crate::error::AuthError;
use crate::types::User;

const HOME_PAGE: &str = "index.html";

pub fn init_auth(ctrl: &Controller) {
    if dom::exists("login-btn") || dom::exists("admin-login-btn") {
        log::debug!("wiring login controls");
    }

    let login_ctrl = ctrl.clone();
    dom::on_click_id("login-btn", move |_| {
        match sign_in(&login_ctrl, &dom::field_value("login-email")) {
            Ok(user) => {
                dom::alert(&format!("Logged in as {}", user.name));
                dom::redirect(HOME_PAGE);
            }
            Err(e) => report(&e),
        }
    });

    dom::on_click_id("admin-login-btn", |_| {
        match auth::admin_login(&dom::field_value("admin-email")) {
            Ok(()) => {
                dom::alert("Admin login (mock) — redirected to index.");
                dom::redirect(HOME_PAGE);
            }
            Err(e) => report(&e),
        }
    });

    dom::on_click_id("chg-save", |_| {
        dom::alert("Password change simulated. (This is a front-end demo.)");
        dom::redirect(HOME_PAGE);
    });
}

/// Stores the new user and pushes it to every display on the page.
fn sign_in(ctrl: &Controller, email: &str) -> Result<User, AuthError> {
    let user = auth::login(ctrl.store(), email)?;
    log::info!("signed in as {}", user.name);
    ctrl.user.set(user.clone());
    Ok(user)
}

fn report(err: &AuthError) {
    if let AuthError::Storage(e) = err {
        log::warn!("{}", e);
        dom::alert("Could not sign in. Browser storage may be full.");
    } else {
        dom::alert(&err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{self, MemoryStore, PageStore};

    #[test]
    fn test_sign_in_updates_user_signal_and_store() {
        let ctrl = Controller::new(PageStore::Memory(MemoryStore::default()));
        assert_eq!(ctrl.user.get_untracked(), User::default());

        let user = sign_in(&ctrl, "jane.doe@x.com").unwrap();

        assert_eq!(user, User::new("Janedoe", 150));
        assert_eq!(ctrl.user.get_untracked(), user);
        assert_eq!(storage::load_user(ctrl.store()), user);
    }

    #[test]
    fn test_failed_sign_in_leaves_guest() {
        let ctrl = Controller::new(PageStore::Memory(MemoryStore::default()));
        assert!(matches!(sign_in(&ctrl, " "), Err(AuthError::MissingEmail)));
        assert_eq!(ctrl.user.get_untracked(), User::default());
    }
}
