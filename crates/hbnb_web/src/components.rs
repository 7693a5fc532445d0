//! Custom components.

use crate::{
    context::get_session,
    display,
    error::WebResult,
    token, utils,
};
use hbnb_api::response as res;
use leptos::prelude::*;
use leptos_router::components::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let (logged_out, set_logged_out) = leptos::prelude::signal(false);

    let navbar_links = move || {
        let session = get_session();
        if session.logged_in() {
            let admin_badge = session
                .is_admin()
                .then(|| view! { <span class="tag is-warning mr-2">"admin"</span> });
            view! {
                <span class="is-flex is-flex-grow-1"></span>
                {admin_badge}
                <button class="button is-link p-3" on:click=move |_ev| {
                    token::clear();
                    get_session().refresh();
                    set_logged_out.set(true);
                }>"Log out"</button>
            }
            .into_any()
        } else {
            view! {
                <span class="is-flex is-flex-grow-1"></span>
                <A exact=true href="/register">"Register"</A>
                <A exact=true href="/login">"Log in"</A>
            }
            .into_any()
        }
    };

    view! {
        <nav class="navbar is-flex is-vcentered">
            <A exact=true href="/">"Home"</A>
            {navbar_links}
        </nav>
        {move || logged_out.get().then(|| view! { <Redirect path="/login" /> })}
    }
}

/// Threshold control for the client-side price filter. Changing it only
/// re-evaluates the visibility of already-fetched cards, nothing refetches.
#[component]
pub fn PriceFilter(max_price: RwSignal<Option<f64>>) -> impl IntoView {
    view! {
        <label class="label">
            "Max price"
            <div class="select is-block">
                <select id="price-filter" on:change=move |ev| {
                    max_price.set(event_target_value(&ev).parse().ok());
                }>
                    <option value="">"All"</option>
                    <option value="10">"$10"</option>
                    <option value="50">"$50"</option>
                    <option value="100">"$100"</option>
                    <option value="150">"$150"</option>
                </select>
            </div>
        </label>
    }
}

#[component]
pub fn PlaceCard(place: res::Place, max_price: RwSignal<Option<f64>>) -> impl IntoView {
    let price = place.price.unwrap_or(0.0);
    let href = format!("/place/{}", place.id);
    view! {
        <div
            class="box place-card"
            data-price=price.to_string()
            style:display=move || if display::passes_filter(price, max_price.get()) { "" } else { "none" }
        >
            <h3 class="subtitle is-5">{display::title(place.title.as_deref()).to_string()}</h3>
            <div>{display::price(place.price)}</div>
            <A href>"View details"</A>
        </div>
    }
}

#[component]
pub fn ReviewCard(review: res::Review) -> impl IntoView {
    view! {
        <div class="box review-card">
            <div class="has-text-weight-bold">{display::author(review.user.as_ref())}</div>
            <div>{display::stars(review.rating)}</div>
            <div inner_html=display::markup(&review.text)></div>
        </div>
    }
}

/// Once a guard has admitted its children it stays passed, even if the
/// session signal changes underneath it. Login flips the session before
/// its own redirect mounts, and the guard must not unmount that redirect.
fn guard_passes(passed: Option<&bool>, session_matches: bool) -> bool {
    passed.copied().unwrap_or_default() || session_matches
}

/// Redirects when the session state does not match the page's requirement:
/// data-bearing pages send anonymous visitors to the login page with a
/// return parameter, and the login/register pages send authenticated users
/// home.
#[component]
pub fn LoginGuard(children: ChildrenFn, require_login: bool) -> impl IntoView {
    let pass = Memo::new(move |passed| {
        guard_passes(passed, get_session().logged_in() == require_login)
    });

    move || {
        if pass.get() {
            children().into_any()
        } else {
            let redirect = if require_login {
                let url = leptos_router::hooks::use_url().get();
                let redirect = url.path();
                format!("/login?redirect={redirect}")
            } else {
                "/".to_string()
            };
            tracing::info!("Redirecting to {redirect}");
            view! { <Redirect path=redirect /> }.into_any()
        }
    }
}

#[component]
pub fn ResourceView<T, F, V>(resource: Resource<WebResult<Option<T>>>, view: F) -> impl IntoView
where
    T: Clone + 'static + Send + Sync,
    F: Fn(Option<T>) -> V + Copy + 'static + Send + Sync,
    V: IntoView + 'static,
{
    let resource_view = move || match resource.get() {
        Some(Ok(Some(res))) => Ok(Some(view(Some(res)).into_view())),
        Some(Ok(None)) => Ok(None),
        Some(Err(err)) => Err(err),
        None => Ok(Some(view(None).into_view())),
    };
    let wrapped_view = view! {
        <Suspense fallback={move || view(None)}>
            <ErrorBoundary fallback={utils::errors_fallback}>
                {resource_view}
            </ErrorBoundary>
        </Suspense>
    };
    WebResult::Ok(wrapped_view)
}

#[component]
pub fn ActionView<T, V>(action: Action<T, WebResult<V>>) -> impl IntoView
where
    T: 'static + Send + Sync,
    V: IntoView + Clone + 'static + Send + Sync,
{
    view! {
        <ErrorBoundary fallback={utils::errors_fallback}>
            <div>
                {move || action.value().get()}
            </div>
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn guard_stays_passed_once_admitted() {
        // first evaluation follows the session
        assert!(guard_passes(None, true));
        assert!(!guard_passes(None, false));

        // a session flip after admission must not revoke the pass
        assert!(guard_passes(Some(&true), false));
        assert!(guard_passes(Some(&true), true));

        // a failed guard can still pass later
        assert!(guard_passes(Some(&false), true));
        assert!(!guard_passes(Some(&false), false));
    }
}
