#![allow(clippy::unit_arg)]

pub mod components;
pub mod context;
pub mod display;
pub mod error;
pub mod pages;
pub mod token;
pub mod utils;

use components::*;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, ParamSegment, StaticSegment};
use pages::*;

/// Wraps the content in a basic layout and a final fallback error boundary which should never actually trigger
#[component]
pub fn App() -> impl IntoView {
    tracing::info!("Rendering app");

    context::initialise_context();

    let fallback = move |errors: ArcRwSignal<Errors>| {
        errors
            .get_untracked()
            .into_iter()
            .map(|(_key, err)| {
                view! { <div>{format!("Unhandled error: {err}")}</div>}
            })
            .collect_view()
    };

    view! {
            <Stylesheet id="hbnb" href="/pkg/hbnb.css"/>
            <Link rel="shortcut icon" type_="image/ico" href="/favicon.ico"/>
            <Meta name="description" content="hbnb is an application for browsing and reviewing rental listings"/>
            <Title text="hbnb"/>
            <div class="is-flex is-flex-direction-column" style="min-height: 100vh">
                <div class="section is-flex is-flex-grow-1">
                    <div class="container">
                        <ErrorBoundary fallback>
                            <Content/>
                        </ErrorBoundary>
                    </div>
                </div>
                <footer class="footer">
                    <div class="container">"hbnb"</div>
                </footer>
            </div>
    }
}

/// Contains the navbar and router
#[component]
pub fn Content() -> impl IntoView {
    view! {
        <Router>
            <Navbar/>
            <main>
                <h1 class="title">"hbnb"</h1>
                <FlatRoutes fallback=|| "Page not found.">
                    <Route
                        path=StaticSegment("/")
                        view=Home
                    />
                    <Route
                        path=(StaticSegment("place"), ParamSegment("place_id"))
                        view=Place
                    />
                    <Route
                        path=(StaticSegment("place"), ParamSegment("place_id"), StaticSegment("add-review"))
                        view=AddReview
                    />
                    <Route
                        path=StaticSegment("login")
                        view=Login
                    />
                    <Route
                        path=StaticSegment("register")
                        view=Register
                    />
                </FlatRoutes>
            </main>
        </Router>
    }
}
