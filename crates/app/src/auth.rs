use api::AuthClient;
use dioxus::prelude::*;
use shared_types::SessionUser;

use crate::session::BrowserTokenStore;

pub type SiteAuthClient = AuthClient<BrowserTokenStore>;

/// Who is signed in, shared through context.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<SessionUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: SessionUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

pub fn use_auth_client() -> SiteAuthClient {
    use_context::<SiteAuthClient>()
}

/// Sign out locally and forget the user.
pub fn sign_out(client: &SiteAuthClient, auth: &mut AuthState) {
    client.logout();
    auth.clear_auth();
}
