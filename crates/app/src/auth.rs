use dioxus::prelude::*;

/// Global authentication state.
///
/// True only when the current session belongs to an approved staff member —
/// a raw service session alone never sets this flag (the two-phase sign-in
/// reverts those before they become visible).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    authenticated: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            authenticated: Signal::new(false),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        *self.authenticated.read()
    }

    pub fn set_authenticated(&mut self, value: bool) {
        self.authenticated.set(value);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
