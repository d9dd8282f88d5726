//! Customer list route handlers.
//!
//! The list renders server-side from the roster; creating a customer goes
//! through the POS backend and, on success, prepends a card fragment via
//! HTMX. A name that fails validation never reaches the backend.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::instrument;

use comandera_core::{Customer, CustomerName};

use crate::filters;
use crate::routes::ErrorFragment;
use crate::state::AppState;

/// Customer card display data for templates.
#[derive(Clone)]
pub struct CustomerCardView {
    pub id: i64,
    pub name: String,
    pub created_at: String,
}

impl From<&Customer> for CustomerCardView {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id.as_i64(),
            name: customer.name.to_string(),
            created_at: relative_created_at(customer.created_at),
        }
    }
}

/// Format a creation timestamp the way the card shows it: "just now" while
/// fresh, then minutes, then the wall-clock time.
fn relative_created_at(created_at: DateTime<Utc>) -> String {
    let elapsed = Utc::now() - created_at;
    if elapsed.num_seconds() < 60 {
        "just now".to_string()
    } else if elapsed.num_minutes() < 60 {
        let minutes = elapsed.num_minutes();
        if minutes == 1 {
            "1 minute ago".to_string()
        } else {
            format!("{minutes} minutes ago")
        }
    } else {
        created_at.format("%H:%M").to_string()
    }
}

/// Create customer form data.
#[derive(Debug, Deserialize)]
pub struct CreateCustomerForm {
    pub name: String,
}

/// Customer list page template.
#[derive(Template, WebTemplate)]
#[template(path = "customers/index.html")]
pub struct CustomersIndexTemplate {
    pub customers: Vec<CustomerCardView>,
}

/// Customer card fragment template (for HTMX prepend).
#[derive(Template, WebTemplate)]
#[template(path = "partials/customer_card.html")]
pub struct CustomerCardTemplate {
    pub customer: CustomerCardView,
}

/// Redirect the landing page to the customer list.
pub async fn root() -> Redirect {
    Redirect::to("/customers")
}

/// Display the customer list page.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let customers = state
        .roster()
        .all()
        .iter()
        .map(CustomerCardView::from)
        .collect();

    CustomersIndexTemplate { customers }
}

/// Create an external customer (HTMX).
///
/// A name that is empty after trimming is rejected locally with 422; the POS
/// backend is only called with a valid, trimmed name. On success the new card
/// fragment is returned for prepending, with an `HX-Trigger` so the form can
/// reset itself.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<CreateCustomerForm>,
) -> Response {
    let name = match CustomerName::parse(&form.name) {
        Ok(name) => name,
        Err(e) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorFragment {
                    message: e.to_string(),
                },
            )
                .into_response();
        }
    };

    match state.pos().create_customer(&name).await {
        Ok(customer) => {
            state.roster().prepend(customer.clone());

            (
                AppendHeaders([("HX-Trigger", "customer-created")]),
                CustomerCardTemplate {
                    customer: CustomerCardView::from(&customer),
                },
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create external customer");
            (
                StatusCode::BAD_GATEWAY,
                ErrorFragment {
                    message: "Could not create customer. Please try again.".to_string(),
                },
            )
                .into_response()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_relative_created_at_just_now() {
        assert_eq!(relative_created_at(Utc::now()), "just now");
    }

    #[test]
    fn test_relative_created_at_minutes() {
        assert_eq!(
            relative_created_at(Utc::now() - Duration::minutes(1)),
            "1 minute ago"
        );
        assert_eq!(
            relative_created_at(Utc::now() - Duration::minutes(12)),
            "12 minutes ago"
        );
    }

    #[test]
    fn test_relative_created_at_falls_back_to_clock_time() {
        let old = Utc::now() - Duration::hours(3);
        assert_eq!(relative_created_at(old), old.format("%H:%M").to_string());
    }

    #[test]
    fn test_card_view_from_customer() {
        let customer = Customer::new(
            comandera_core::CustomerId::new(7),
            CustomerName::parse("Juan").unwrap(),
        );
        let view = CustomerCardView::from(&customer);
        assert_eq!(view.id, 7);
        assert_eq!(view.name, "Juan");
        assert_eq!(view.created_at, "just now");
    }
}
