//! Session State
//!
//! Page-lifetime login state, provided via Leptos context rather than an
//! ambient singleton. There is no persisted session: both fields start
//! empty and are discarded on reload.

use leptos::*;

use crate::model::User;

/// The current login session
#[derive(Clone, Copy)]
pub struct Session {
    pub logged_in: RwSignal<bool>,
    pub current_user: RwSignal<Option<User>>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            logged_in: create_rw_signal(false),
            current_user: create_rw_signal(None),
        }
    }

    /// Record a successful login
    pub fn login(&self, user: User) {
        self.current_user.set(Some(user));
        self.logged_in.set(true);
    }

    /// Clear the session
    pub fn logout(&self) {
        self.current_user.set(None);
        self.logged_in.set(false);
    }

    /// Intern id for data fetches, defaulting to 1 when unset
    pub fn intern_id(&self) -> u32 {
        self.current_user.get().map(|u| u.id).unwrap_or(1)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the session to the component tree
pub fn provide_session() {
    provide_context(Session::new());
}

/// Fetch the session from context
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_sets_both_fields() {
        let runtime = create_runtime();

        let session = Session::new();
        assert!(!session.logged_in.get_untracked());
        assert!(session.current_user.get_untracked().is_none());

        session.login(User {
            id: 42,
            name: "Alice Smith".to_string(),
            email: "alice.smith@example.com".to_string(),
        });
        assert!(session.logged_in.get_untracked());
        assert_eq!(session.intern_id(), 42);

        runtime.dispose();
    }

    #[test]
    fn test_logout_clears_both_fields() {
        let runtime = create_runtime();

        let session = Session::new();
        session.login(User {
            id: 7,
            name: "Bob Jones".to_string(),
            email: "bob.jones@example.com".to_string(),
        });
        session.logout();

        assert!(!session.logged_in.get_untracked());
        assert!(session.current_user.get_untracked().is_none());
        // Unset user falls back to intern 1
        assert_eq!(session.intern_id(), 1);

        runtime.dispose();
    }
}
