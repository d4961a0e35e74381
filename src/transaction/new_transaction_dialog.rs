//! Defines the route handler for the transactions page with the new
//! transaction dialog open.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::{
    dialog::dialog,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE,
        FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, loading_spinner,
    },
    transaction::transactions_page::transactions_view,
};

fn new_transaction_form() -> Markup {
    let spinner = loading_spinner();

    html! {
        form
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-disabled-elt="#submit-button"
            class="mt-8 flex flex-col gap-4"
        {
            input
                name="description"
                id="description"
                type="text"
                placeholder="Descrição"
                required
                autofocus
                class=(FORM_TEXT_INPUT_STYLE);

            input
                name="price"
                id="price"
                type="number"
                step="0.01"
                placeholder="Preço"
                required
                class=(FORM_TEXT_INPUT_STYLE);

            input
                name="category"
                id="category"
                type="text"
                placeholder="Categoria"
                required
                class=(FORM_TEXT_INPUT_STYLE);

            fieldset class="mt-2"
            {
                legend class="sr-only" { "Tipo de transação" }

                div class=(FORM_RADIO_GROUP_STYLE)
                {
                    div
                    {
                        input
                            name="type"
                            id="transaction-type-income"
                            type="radio"
                            value="income"
                            required
                            tabindex="0"
                            class=(FORM_RADIO_INPUT_STYLE);

                        label
                            for="transaction-type-income"
                            class=(FORM_RADIO_LABEL_STYLE)
                        {
                            "Entrada"
                        }
                    }

                    div
                    {
                        input
                            name="type"
                            id="transaction-type-outcome"
                            type="radio"
                            value="outcome"
                            required
                            tabindex="0"
                            class=(FORM_RADIO_INPUT_STYLE);

                        label
                            for="transaction-type-outcome"
                            class=(FORM_RADIO_LABEL_STYLE)
                        {
                            "Saída"
                        }
                    }
                }
            }

            button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                span
                    id="indicator"
                    class="inline htmx-indicator"
                {
                    (spinner)
                }
                " Cadastrar"
            }
        }
    }
}

/// Renders the transactions page with the dialog for creating a
/// transaction open. Closing the dialog navigates back to the
/// transactions page.
pub async fn get_new_transaction_dialog() -> Response {
    let dialog = dialog(
        "Nova Transação",
        endpoints::TRANSACTIONS_VIEW,
        &new_transaction_form(),
    );

    transactions_view(Some(dialog)).into_response()
}
