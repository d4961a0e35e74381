//! The 404 page shown for routes the router does not know.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{
    endpoints,
    html::{LINK_STYLE, PAGE_CONTAINER_STYLE, base},
};

/// The router fallback for unknown routes.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub fn get_404_not_found_response() -> Response {
    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-4xl font-bold" { "404" }

            p class="py-4" { "A página que você procura não existe." }

            a href=(endpoints::TRANSACTIONS_VIEW) class=(LINK_STYLE)
            {
                "Voltar para as transações"
            }
        }
    };

    (StatusCode::NOT_FOUND, base("Página não encontrada", &content)).into_response()
}
