/*
 * Copyright 2024 Neatify
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use crate::errors::SupportError;
use leptos::*;

/// Renders every `SupportError` collected during rendering. Under `ssr`
/// the status code of the first error becomes the response status.
#[component]
pub fn ErrorTemplate(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match outside_errors {
        Some(e) => create_rw_signal(e),
        None => match errors {
            Some(e) => e,
            None => panic!("No Errors found and we expected errors!"),
        },
    };

    let errors = errors.get_untracked();

    // Downcast from the type-erased errors the router hands us.
    let errors: Vec<SupportError> = errors
        .into_iter()
        .filter_map(|(_, v)| v.downcast_ref::<SupportError>().cloned())
        .collect();

    // Only the response code for the first error is actually sent from the server
    #[cfg(feature = "ssr")]
    {
        let response = use_context::<leptos_axum::ResponseOptions>();
        if let (Some(response), Some(error)) = (response, errors.first()) {
            response.set_status(error.status_code());
        }
    }

    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-50 to-blue-50 flex items-center justify-center px-4">
            <div class="text-center">
                <h1 class="text-5xl font-bold text-gray-900 mb-6">
                    {if errors.len() > 1 { "エラーが発生しました" } else { "ページが見つかりません" }}
                </h1>
                <For
                    each=move || errors.clone().into_iter().enumerate()
                    key=|(index, _error)| *index
                    children=move |(_, error)| {
                        let error_string = error.to_string();
                        let error_code = error.status_code();
                        view! {
                            <p class="text-xl text-gray-600 mb-2">{error_code.to_string()}</p>
                            <p class="text-gray-500 mb-8">{error_string}</p>
                        }
                    }
                />
                <a
                    href="/"
                    class="bg-blue-600 text-white px-8 py-3 rounded-lg hover:bg-blue-700 transition-colors font-medium"
                >
                    "サポートトップへ戻る"
                </a>
            </div>
        </div>
    }
}
