//! Defines the route handler for the transactions page.
//!
//! This page owns whether the new transaction dialog is on screen:
//! it is closed here and open on the sibling route served by
//! [super::new_transaction_dialog].

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::{
    endpoints,
    html::{BUTTON_HEADER_STYLE, PAGE_HEADER_STYLE, base},
};

/// Renders the transactions page, with the new transaction dialog
/// appended when `dialog` is given.
pub fn transactions_view(dialog: Option<Markup>) -> Markup {
    let content = html! {
        header class=(PAGE_HEADER_STYLE)
        {
            div class="max-w-screen-lg mx-auto flex items-center justify-between px-6 py-8"
            {
                span class="text-2xl font-bold text-white" { "Dinheiro" }

                a
                    href=(endpoints::NEW_TRANSACTION_VIEW)
                    class=(BUTTON_HEADER_STYLE)
                {
                    "Nova transação"
                }
            }
        }

        main class="max-w-screen-lg mx-auto px-6 py-8" {}

        @if let Some(dialog) = dialog {
            (dialog)
        }
    };

    base("Transações", &content)
}

/// Renders the transactions page with the dialog closed.
pub async fn get_transactions_page() -> Response {
    transactions_view(None).into_response()
}

#[cfg(test)]
mod view_tests {
    use axum::{body::Body, http::StatusCode, response::Response};
    use scraper::{Html, Selector};

    use crate::{endpoints, transaction::transactions_page::get_transactions_page};

    #[tokio::test]
    async fn transactions_page_has_trigger_and_no_dialog() {
        let response = get_transactions_page().await;

        assert_status_ok(&response);
        let document = parse_html(response).await;

        let trigger_selector = Selector::parse("header a").unwrap();
        let trigger = document
            .select(&trigger_selector)
            .next()
            .expect("page should have a trigger for the new transaction dialog");
        assert_eq!(
            trigger.value().attr("href"),
            Some(endpoints::NEW_TRANSACTION_VIEW)
        );
        assert_eq!(trigger.text().collect::<String>(), "Nova transação");

        let dialog_selector = Selector::parse("div[role=dialog]").unwrap();
        assert!(
            document.select(&dialog_selector).next().is_none(),
            "the dialog should not be rendered on this route"
        );
    }

    #[track_caller]
    fn assert_status_ok(response: &Response<Body>) {
        assert_eq!(response.status(), StatusCode::OK);
    }

    async fn parse_html(response: Response) -> Html {
        let body = response.into_body();
        let body = axum::body::to_bytes(body, usize::MAX)
            .await
            .expect("Could not get response body");
        let text = String::from_utf8_lossy(&body).to_string();

        Html::parse_document(&text)
    }
}
