pub mod client;
pub mod session;

use self::{client::Client, session::Session};
use leptos::prelude::*;

pub fn initialise_context() {
    tracing::trace!("initialising context");

    let backend_addr = option_env!("HBNB_BACKEND_ADDRESS").unwrap_or("");
    client::set_backend_address(backend_addr);

    leptos_meta::provide_meta_context();
    leptos::context::provide_context(Session::new());
}

pub fn get_client() -> Client {
    Client::new()
}

pub fn get_session() -> Session {
    let owner = Owner::current().unwrap();
    owner.with(move || leptos::prelude::expect_context::<Session>())
}

pub fn refresh_session() {
    if let Some(session) =
        Owner::current().and_then(|owner| owner.with(leptos::prelude::use_context::<Session>))
    {
        session.refresh();
    }
}
