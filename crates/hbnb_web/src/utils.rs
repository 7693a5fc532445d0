//! Various utility functions.

use crate::{
    context::{self, client::Client},
    error::WebResult,
};
pub use crate::logged_in_resource;
use leptos::prelude::*;
use leptos_router::params::Params;
use serde::{de::DeserializeOwned, Serialize};
use std::{fmt::Debug, future::Future};

/// Generic loading fallback view.
pub fn loading_fallback(text: &'static str) -> impl IntoView {
    view! { <div>{text}</div> }.into_view()
}

/// Generic error fallback view.
pub fn errors_fallback(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let errors = errors.get_untracked().into_iter().collect::<Vec<_>>();
    if errors.len() == 1 {
        let (_, error) = &errors[0];
        view! {
            <div>{format!("{error}")}</div>
        }
        .into_any()
    } else {
        let errors = errors
            .into_iter()
            .map(|(_, err)| {
                view! { <li>{format!("Error: {err}")}</li> }
            })
            .collect_view();

        view! {
            <div class="content">
                <div>"Errors"</div>
                <ul>
                    {errors}
                </ul>
            </div>
        }
        .into_any()
    }
}

#[macro_export]
macro_rules! logged_in_resource {
    ($($f:tt)*) => {
        $crate::utils::logged_in_resource(
            move |client| async move { send_wrapper::SendWrapper::new(client.$($f)*).await }
        )
    };
}

/// Resource that resolves to `None` for anonymous visitors; `LoginGuard`
/// redirects those before the missing data matters.
pub fn logged_in_resource<T, A, F>(f: A) -> Resource<WebResult<Option<T>>>
where
    T: Debug + Clone + Serialize + DeserializeOwned + 'static + Send + Sync,
    A: Fn(Client) -> F + Copy + 'static + Send + Sync,
    F: Future<Output = WebResult<T>> + 'static + Send + Sync,
{
    Resource::new(
        move || context::get_session().logged_in(),
        move |logged_in| {
            let client = context::get_client();
            async move {
                let data = if logged_in {
                    let data = f(client).await?;
                    Some(data)
                } else {
                    None
                };
                WebResult::Ok(data)
            }
        },
    )
}

pub fn params<T>() -> WebResult<T>
where
    T: Params + Clone + PartialEq + 'static + Send + Sync,
{
    leptos_router::hooks::use_params()
        .get()
        .map_err(crate::error::WebError::from)
}
