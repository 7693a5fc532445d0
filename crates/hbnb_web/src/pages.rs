//! Top level pages.

use crate::{
    components::*,
    context::{get_client, get_session},
    display,
    error::{WebError, WebResult},
    token, utils,
};
use hbnb_api::response as res;
use leptos::{
    html::{Input, Select, Textarea},
    prelude::*,
};
use leptos_router::{components::*, params::Params};
use send_wrapper::SendWrapper;

#[component]
pub fn Home() -> impl IntoView {
    tracing::info!("Rendering Home");

    let max_price = RwSignal::new(None::<f64>);

    let places_res = utils::logged_in_resource!(list_places());
    let places_content = move |places: Vec<res::Place>| {
        if places.is_empty() {
            return view! { <div class="notification">"No places to show."</div> }.into_any();
        }
        let cards = places
            .into_iter()
            .map(|place| view! { <PlaceCard place max_price/> })
            .collect_view();
        view! {
            <div id="places-list" class="block">
                {cards}
            </div>
        }
        .into_any()
    };
    let places_view = move |places: Option<_>| match places {
        Some(places) => places_content(places).into_any(),
        None => utils::loading_fallback("Loading places...").into_any(),
    };

    view! {
        <LoginGuard require_login=true>
            <h2 class="subtitle">"Places"</h2>
            <div class="block">
                <PriceFilter max_price/>
            </div>
            <ResourceView resource=places_res view=places_view/>
        </LoginGuard>
    }
}

#[derive(Debug, Clone, PartialEq, Params)]
pub struct PlaceParams {
    place_id: Option<String>,
}
#[component]
pub fn Place() -> impl IntoView {
    let PlaceParams { place_id } = utils::params()?;
    let place_id = place_id.expect("failed to get place_id");
    tracing::info!("Rendering Place {place_id}");
    let place_id = StoredValue::new(place_id);

    // the two fetches are independent, issue them together and await both
    let place_res = utils::logged_in_resource(move |client| {
        SendWrapper::new(async move {
            let place_id = place_id.get_value();
            let (place, reviews) =
                futures_util::join!(client.get_place(&place_id), client.list_reviews());
            WebResult::Ok((place?, display::reviews_for_place(reviews?, &place_id)))
        })
    });

    // actions
    let delete_act = Action::new(move |&()| {
        let confirmed = window()
            .confirm_with_message("Are you sure you want to delete this place?")
            .map_err(WebError::from_js);
        let client = get_client();
        let token = get_session().token();
        async move {
            let confirmed = confirmed?;
            let view = if confirmed {
                let token = token.ok_or_else(|| WebError::new("Invalid session."))?;
                SendWrapper::new(
                    async move { client.delete_place(&place_id.get_value(), &token).await },
                )
                .await?;
                Some(view! { <Redirect path="/" /> })
            } else {
                None
            };
            WebResult::Ok(view)
        }
    });

    // place
    let place_content = move |place: res::Place, reviews: Vec<res::Review>| {
        let session = get_session();

        let owner_id = place.owner.as_ref().map(|o| o.id.clone());
        let is_owner = owner_id.is_some() && session.user_id() == owner_id;
        let add_review = (!is_owner).then(|| {
            let href = format!("/place/{}/add-review", place_id.get_value());
            view! {
                <div class="block">
                    <A href>"Add a review"</A>
                </div>
            }
        });
        let admin_controls = session.is_admin().then(|| {
            view! {
                <div class="block">
                    <button
                        class="button is-danger"
                        prop:disabled=move || delete_act.pending().get()
                        on:click=move |_ev| { delete_act.dispatch(()); }
                    >
                        "Delete place"
                    </button>
                    <ActionView action=delete_act/>
                </div>
            }
        });

        let amenities = display::amenity_names(&place.amenities)
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        let amenities_view = if amenities.is_empty() {
            view! { <div>"No amenities listed."</div> }.into_any()
        } else {
            let items = amenities
                .into_iter()
                .map(|name| view! { <li>{name}</li> })
                .collect_view();
            view! {
                <div class="content">
                    <ul>
                        {items}
                    </ul>
                </div>
            }
            .into_any()
        };

        let reviews_view = if reviews.is_empty() {
            view! { <div>"No reviews yet."</div> }.into_any()
        } else {
            reviews
                .into_iter()
                .map(|review| view! { <ReviewCard review/> })
                .collect_view()
                .into_any()
        };

        view! {
            <h2 class="subtitle">{display::title(place.title.as_deref()).to_string()}</h2>
            <div class="block">
                <div>{format!("Hosted by {}", display::host(place.owner.as_ref()))}</div>
                <div>{display::price(place.price)}</div>
            </div>
            <div class="block content" inner_html=display::description_markup(place.description.as_deref())></div>
            <div class="block">
                <h3 class="subtitle">"Amenities"</h3>
                {amenities_view}
            </div>
            <div class="block">
                <h3 class="subtitle">"Reviews"</h3>
                {reviews_view}
                {add_review}
            </div>
            {admin_controls}
        }
        .into_any()
    };
    let place_view = move |data: Option<(Option<res::Place>, Vec<res::Review>)>| match data {
        Some((Some(place), reviews)) => place_content(place, reviews).into_any(),
        Some((None, _)) => view! { <div>"Place not found."</div> }.into_any(),
        None => utils::loading_fallback("Loading place...").into_any(),
    };

    let view = view! {
        <LoginGuard require_login=true>
            <ResourceView resource=place_res view=place_view />
        </LoginGuard>
    };
    WebResult::Ok(view)
}

#[derive(Debug, Clone, PartialEq, Params)]
pub struct AddReviewParams {
    place_id: Option<String>,
}
#[component]
pub fn AddReview() -> impl IntoView {
    let AddReviewParams { place_id } = utils::params()?;
    let place_id = place_id.expect("failed to get place_id");
    tracing::info!("Rendering AddReview {place_id}");
    let place_id = StoredValue::new(place_id);

    let text_ref = NodeRef::<Textarea>::new();
    let rating_ref = NodeRef::<Select>::new();
    let submit = Action::new(move |&()| {
        let text = text_ref.get().expect("failed to get text_ref").value();
        let rating = rating_ref.get().expect("failed to get rating_ref").value();
        let token = get_session().token();
        let client = get_client();
        async move {
            if text.trim().is_empty() {
                return Err(WebError::new("Review text cannot be empty"));
            }
            let rating: i32 = rating
                .parse()
                .map_err(|_| WebError::new("Select a rating"))?;
            let token = token.ok_or_else(|| WebError::new("Invalid session."))?;
            let place_id = place_id.get_value();
            let back = format!("/place/{place_id}");
            SendWrapper::new(async move {
                client.submit_review(&token, &place_id, &text, rating).await
            })
            .await?;
            WebResult::Ok(view! { <Redirect path=back /> })
        }
    });

    let view = view! {
        <LoginGuard require_login=true>
            <h2 class="subtitle">"Add a review"</h2>
            <form>
                <label class="label">
                    "Review"
                    <textarea class="textarea" node_ref=text_ref/>
                </label>
                <label class="label">
                    "Rating"
                    <div class="select">
                        <select node_ref=rating_ref>
                            <option value="5">"5"</option>
                            <option value="4">"4"</option>
                            <option value="3">"3"</option>
                            <option value="2">"2"</option>
                            <option value="1">"1"</option>
                        </select>
                    </div>
                </label>
                <div class="block">
                    <button
                        class="button"
                        type="submit"
                        prop:disabled=move || submit.pending().get()
                        on:click=move |ev| {
                            ev.prevent_default();
                            submit.dispatch(());
                        }
                    >
                        "Submit review"
                    </button>
                    <ActionView action=submit/>
                </div>
            </form>
        </LoginGuard>
    };
    WebResult::Ok(view)
}

#[component]
pub fn Login() -> impl IntoView {
    tracing::info!("Rendering Login");

    let redirect = move || {
        leptos_router::hooks::use_query_map()
            .get()
            .get("redirect")
            .unwrap_or_else(|| "/".to_string())
    };

    // form
    let email_ref = NodeRef::<Input>::new();
    let password_ref = NodeRef::<Input>::new();
    let submission_act = Action::new(move |&()| {
        tracing::info!("Logging in");
        let email = email_ref.get().expect("failed to get email_ref").value();
        let password = password_ref
            .get()
            .expect("failed to get password_ref")
            .value();
        let client = get_client();
        let session = get_session();
        async move {
            if email.is_empty() {
                return Err(WebError::new("Email cannot be empty"));
            }
            if password.is_empty() {
                return Err(WebError::new("Password cannot be empty"));
            }
            let token =
                SendWrapper::new(client.login(email.as_str(), password.as_str())).await?;
            token::store(&token);
            session.refresh();
            let view = move || view! { <Redirect path=redirect() /> };
            WebResult::Ok(view)
        }
    });

    let password_visible = RwSignal::new(false);
    let password_visibility_toggle = move || {
        if password_visible.get() {
            view! { <button class="button" on:click=move |_ev| password_visible.set(false)>"Hide password"</button> }.into_any()
        } else {
            view! { <button class="button" on:click=move |_ev| password_visible.set(true)>"Show password"</button> }.into_any()
        }
    };
    let password_input_type = move || {
        if password_visible.get() {
            "text"
        } else {
            "password"
        }
    };

    Effect::new(move |_| {
        if let Some(email_ref) = email_ref.get() {
            email_ref.focus().expect("failed to get email_ref");
        }
    });

    view! {
        <LoginGuard require_login=false>
            <h2 class="subtitle">"Login"</h2>
            <form>
                <label class="label">
                    "Email"
                    <input class="input" node_ref=email_ref/>
                </label>
                <label class="label">
                    "Password"
                    <input class="input" type=password_input_type node_ref=password_ref/>
                </label>
                <button
                    class="button mr-2"
                    type="submit"
                    prop:disabled=move || submission_act.pending().get()
                    on:click={move |ev| {
                        ev.prevent_default();
                        submission_act.dispatch(());
                    }}
                >
                    "Login"
                </button>
                {password_visibility_toggle}
            </form>
            <ActionView action=submission_act/>
        </LoginGuard>
    }
}

#[component]
pub fn Register() -> impl IntoView {
    tracing::info!("Rendering Register");

    // form
    let first_name_ref = NodeRef::<Input>::new();
    let last_name_ref = NodeRef::<Input>::new();
    let email_ref = NodeRef::<Input>::new();
    let password_ref = NodeRef::<Input>::new();
    let repeat_password_ref = NodeRef::<Input>::new();
    let submit = Action::new(move |&()| {
        tracing::info!("Registering");
        let first_name = first_name_ref
            .get()
            .expect("failed to get first_name_ref")
            .value();
        let last_name = last_name_ref
            .get()
            .expect("failed to get last_name_ref")
            .value();
        let email = email_ref.get().expect("failed to get email_ref").value();
        let password = password_ref
            .get()
            .expect("failed to get password_ref")
            .value();
        let repeat_password = repeat_password_ref
            .get()
            .expect("failed to get repeat_password_ref")
            .value();
        let client = get_client();
        let session = get_session();
        async move {
            if first_name.is_empty() {
                return Err(WebError::new("First name cannot be empty"));
            }
            if last_name.is_empty() {
                return Err(WebError::new("Last name cannot be empty"));
            }
            if email.is_empty() {
                return Err(WebError::new("Email cannot be empty"));
            }
            if password.is_empty() {
                return Err(WebError::new("Password cannot be empty"));
            }
            if password != repeat_password {
                return Err(WebError::new("Passwords don't match"));
            }
            let token = SendWrapper::new(
                client.register(&first_name, &last_name, &email, &password),
            )
            .await?;
            token::store(&token);
            session.refresh();
            WebResult::Ok(view! { <Redirect path="/" /> })
        }
    });

    let password_visible: RwSignal<bool> = RwSignal::new(false);
    let password_visibility_toggle = move || {
        if password_visible.get() {
            view! { <button class="button" on:click=move |_ev| password_visible.set(false)>"Hide passwords"</button> }.into_any()
        } else {
            view! { <button class="button" on:click=move |_ev| password_visible.set(true)>"Show passwords"</button> }.into_any()
        }
    };
    let password_input_type = move || {
        if password_visible.get() {
            "text"
        } else {
            "password"
        }
    };

    Effect::new(move |_| {
        if let Some(first_name_ref) = first_name_ref.get() {
            first_name_ref.focus().expect("failed to get first_name_ref");
        }
    });

    view! {
        <LoginGuard require_login=false>
            <h2 class="subtitle">"Register"</h2>
            <form>
                <label class="label">
                    "First name"
                    <input class="input" node_ref=first_name_ref/>
                </label>
                <label class="label">
                    "Last name"
                    <input class="input" node_ref=last_name_ref/>
                </label>
                <label class="label">
                    "Email"
                    <input class="input" node_ref=email_ref/>
                </label>
                <label class="label">
                    "Password"
                    <input class="input" type=password_input_type node_ref=password_ref/>
                </label>
                <label class="label">
                    "Repeat password"
                    <input class="input" type=password_input_type node_ref=repeat_password_ref/>
                </label>
                <button
                    class="button mr-2"
                    type="submit"
                    prop:disabled=move || submit.pending().get()
                    on:click={move |ev| {
                        ev.prevent_default();
                        submit.dispatch(());
                    }}
                >
                    "Register"
                </button>
                {password_visibility_toggle}
            </form>
            <ActionView action=submit/>
        </LoginGuard>
    }
}
