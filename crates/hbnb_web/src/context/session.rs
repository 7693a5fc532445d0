//! Session context for authentication.
//!
//! The session mirrors the token cookie: reading it decides which
//! affordances the UI shows, nothing more. The server is the authority on
//! whether the token is actually valid.

use crate::token::{self, SessionToken};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<SessionToken>>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            token: RwSignal::new(token::load()),
        }
    }

    pub fn logged_in(&self) -> bool {
        self.token.with(Option::is_some)
    }

    pub fn is_admin(&self) -> bool {
        self.token
            .with(|t| t.as_ref().is_some_and(SessionToken::is_admin))
    }

    pub fn user_id(&self) -> Option<String> {
        self.token
            .with(|t| t.as_ref().and_then(|t| t.user_id().map(str::to_string)))
    }

    pub fn token(&self) -> Option<SessionToken> {
        self.token.with(Clone::clone)
    }

    /// Re-reads the token cookie, e.g. after login, logout or a 401.
    pub fn refresh(&self) {
        self.token.set(token::load());
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
