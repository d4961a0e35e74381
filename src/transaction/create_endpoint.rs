//! Defines the endpoint for creating a new transaction.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    Error,
    app_state::TransactionState,
    endpoints,
    stores::TransactionStore,
    transaction::schema::NewTransactionForm,
};

/// A route handler for creating a new transaction from the dialog form,
/// redirects to the transactions view on success.
///
/// The store is called exactly once per validated submission. A form
/// that fails validation never reaches the store; a store failure is
/// logged and answered with a bare error status.
pub async fn create_transaction_endpoint<T>(
    State(state): State<TransactionState<T>>,
    Form(form): Form<NewTransactionForm>,
) -> Result<Response, Error>
where
    T: TransactionStore + Send + Sync,
{
    let draft = form.validate()?;

    let mut store = state.transaction_store;

    store
        .create(draft)
        .inspect_err(|error| tracing::error!("could not create transaction: {error}"))?;

    Ok((
        HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        body::Body,
        extract::State,
        http::{Response, StatusCode},
        response::IntoResponse,
    };
    use axum_extra::extract::Form;
    use axum_htmx::HX_REDIRECT;
    use time::OffsetDateTime;

    use crate::{
        Error,
        app_state::TransactionState,
        endpoints,
        stores::TransactionStore,
        transaction::{
            Transaction, TransactionDraft, TransactionId, TransactionType,
            create_endpoint::create_transaction_endpoint, schema::NewTransactionForm,
        },
    };

    /// Records every draft passed to `create` so tests can check what
    /// the endpoint hands over.
    #[derive(Debug, Clone, Default)]
    struct SpyStore {
        drafts: Arc<Mutex<Vec<TransactionDraft>>>,
        fail_next: bool,
    }

    impl SpyStore {
        fn recorded_drafts(&self) -> Vec<TransactionDraft> {
            self.drafts.lock().unwrap().clone()
        }
    }

    impl TransactionStore for SpyStore {
        fn create(&mut self, draft: TransactionDraft) -> Result<Transaction, Error> {
            if self.fail_next {
                return Err(Error::StoreLockError);
            }

            let mut drafts = self.drafts.lock().unwrap();
            drafts.push(draft.clone());

            Ok(Transaction {
                id: drafts.len() as TransactionId,
                description: draft.description,
                price: draft.price,
                category: draft.category,
                transaction_type: draft.transaction_type,
                created_at: OffsetDateTime::UNIX_EPOCH,
            })
        }

        fn get(&self, _id: TransactionId) -> Result<Transaction, Error> {
            Err(Error::NotFound)
        }

        fn count(&self) -> Result<u32, Error> {
            Ok(self.drafts.lock().unwrap().len() as u32)
        }
    }

    fn form(description: &str, price: &str, category: &str, type_: &str) -> NewTransactionForm {
        NewTransactionForm {
            description: description.to_owned(),
            price: price.to_owned(),
            category: category.to_owned(),
            transaction_type: type_.to_owned(),
        }
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let store = SpyStore::default();
        let state = TransactionState {
            transaction_store: store.clone(),
        };

        let response = create_transaction_endpoint(
            State(state),
            Form(form("Salary", "5000", "Job", "income")),
        )
        .await
        .into_response();

        assert_redirects_to_transactions_view(response);

        let drafts = store.recorded_drafts();
        assert_eq!(drafts.len(), 1, "want exactly one create call");
        assert_eq!(
            drafts[0],
            TransactionDraft {
                description: "Salary".to_owned(),
                price: 5000.0,
                category: "Job".to_owned(),
                transaction_type: TransactionType::Income,
            }
        );
    }

    #[tokio::test]
    async fn decimal_price_reaches_the_store_as_a_number() {
        let store = SpyStore::default();
        let state = TransactionState {
            transaction_store: store.clone(),
        };

        create_transaction_endpoint(
            State(state),
            Form(form("Groceries", "123.45", "Food", "outcome")),
        )
        .await
        .into_response();

        assert_eq!(store.recorded_drafts()[0].price, 123.45);
    }

    #[tokio::test]
    async fn invalid_price_never_reaches_the_store() {
        let store = SpyStore::default();
        let state = TransactionState {
            transaction_store: store.clone(),
        };

        let response = create_transaction_endpoint(
            State(state),
            Form(form("Salary", "not a number", "Job", "income")),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(
            store.recorded_drafts().is_empty(),
            "the store should not be called for an invalid form"
        );
    }

    #[tokio::test]
    async fn unknown_type_never_reaches_the_store() {
        let store = SpyStore::default();
        let state = TransactionState {
            transaction_store: store.clone(),
        };

        let response = create_transaction_endpoint(
            State(state),
            Form(form("Salary", "5000", "Job", "transfer")),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(store.recorded_drafts().is_empty());
    }

    #[tokio::test]
    async fn zero_and_negative_prices_are_accepted() {
        let store = SpyStore::default();
        let state = TransactionState {
            transaction_store: store.clone(),
        };

        for (price, want) in [("0", 0.0), ("-12.50", -12.5)] {
            let response = create_transaction_endpoint(
                State(state.clone()),
                Form(form("Adjustment", price, "Misc", "outcome")),
            )
            .await
            .into_response();

            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            let last = store.recorded_drafts().pop().unwrap();
            assert_eq!(last.price, want);
        }
    }

    #[tokio::test]
    async fn store_failure_is_answered_with_a_bare_error_status() {
        let store = SpyStore {
            fail_next: true,
            ..Default::default()
        };
        let state = TransactionState {
            transaction_store: store.clone(),
        };

        let response = create_transaction_endpoint(
            State(state),
            Form(form("Salary", "5000", "Job", "income")),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[track_caller]
    fn assert_redirects_to_transactions_view(response: Response<Body>) {
        let location = response
            .headers()
            .get(HX_REDIRECT)
            .expect("expected response to have the header hx-redirect");
        assert_eq!(
            location,
            endpoints::TRANSACTIONS_VIEW,
            "got redirect to {location:?}, want redirect to {}",
            endpoints::TRANSACTIONS_VIEW
        );
    }
}
