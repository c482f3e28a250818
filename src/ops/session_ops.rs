use crate::io::store::{self, Credentials, Store, StoreError};

/// The two route groups the session gate arbitrates between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGroup {
    /// Login flow
    Auth,
    /// Home / Progress / Settings tab set
    Main,
}

/// Error type for the login operation
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Please fill in all fields")]
    EmptyField,
    #[error("Failed to login. Please try again.")]
    Storage(#[from] StoreError),
}

/// Session gate decision: where to redirect, if anywhere.
///
/// Unauthenticated outside the auth group forces the auth group;
/// authenticated inside the auth group forces the main group. No other
/// transitions. Re-evaluated after every event that can change the
/// session flag or the route, never polled.
pub fn gate(logged_in: bool, current: RouteGroup) -> Option<RouteGroup> {
    match (logged_in, current) {
        (false, RouteGroup::Main) => Some(RouteGroup::Auth),
        (true, RouteGroup::Auth) => Some(RouteGroup::Main),
        _ => None,
    }
}

/// Validate and persist a login.
///
/// Empty trimmed fields fail without touching the store. Otherwise the
/// credentials are cached verbatim and the session flag is set.
pub fn login(store: &mut Store, email: &str, password: &str) -> Result<(), LoginError> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(LoginError::EmptyField);
    }
    store::write_credentials(
        store,
        &Credentials {
            email: email.to_string(),
            password: password.to_string(),
        },
    )?;
    store::set_logged_in(store)?;
    Ok(())
}

/// Clear the session flag and cached credentials.
/// The caller is responsible for the confirmation step and for surfacing
/// a failure to the user (the one storage error that is ever shown).
pub fn logout(store: &mut Store) -> Result<(), StoreError> {
    store::clear_session(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> Store {
        let (store, err) = Store::open(&dir.path().join("store.json"));
        assert!(err.is_none());
        store
    }

    #[test]
    fn gate_redirects_unauthenticated_to_auth() {
        assert_eq!(gate(false, RouteGroup::Main), Some(RouteGroup::Auth));
    }

    #[test]
    fn gate_redirects_authenticated_out_of_auth() {
        assert_eq!(gate(true, RouteGroup::Auth), Some(RouteGroup::Main));
    }

    #[test]
    fn gate_is_quiet_when_consistent() {
        assert_eq!(gate(true, RouteGroup::Main), None);
        assert_eq!(gate(false, RouteGroup::Auth), None);
    }

    #[test]
    fn login_rejects_empty_fields_without_persisting() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        assert!(matches!(
            login(&mut store, "", "pw"),
            Err(LoginError::EmptyField)
        ));
        assert!(matches!(
            login(&mut store, "a@b.c", "   "),
            Err(LoginError::EmptyField)
        ));
        assert!(!store::is_logged_in(&store));
        assert!(store::read_credentials(&store).is_none());
    }

    #[test]
    fn login_persists_credentials_and_flag() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        login(&mut store, "a@b.c", "secret").unwrap();
        assert!(store::is_logged_in(&store));
        let creds = store::read_credentials(&store).unwrap();
        assert_eq!(creds.email, "a@b.c");
        assert_eq!(creds.password, "secret");
    }

    #[test]
    fn logout_clears_both_session_keys() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        login(&mut store, "a@b.c", "secret").unwrap();
        logout(&mut store).unwrap();
        assert!(!store::is_logged_in(&store));
        assert!(store::read_credentials(&store).is_none());
        // And the gate now points back to auth
        assert_eq!(
            gate(store::is_logged_in(&store), RouteGroup::Main),
            Some(RouteGroup::Auth)
        );
    }
}
