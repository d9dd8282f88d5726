//! Order builder route handlers.
//!
//! The order page renders menu items per category tab and keeps the running
//! cart in the session, one cart per order id. Mutations go through the pure
//! cart functions in `comandera-core`; handlers here only load, mutate, save,
//! and hand view data to templates. Fragment responses carry an
//! `HX-Trigger: cart-updated` so the total display refreshes itself.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use comandera_core::{Cart, Menu, MenuItem, MenuItemId, OrderId};

use crate::error::{AppError, Result};
use crate::filters;
use crate::models::session::cart_key;
use crate::routes::ErrorFragment;
use crate::state::AppState;

/// Category tab display data for templates.
#[derive(Clone)]
pub struct CategoryTabView {
    pub name: String,
    /// Fragment URL for this tab, with the category name URL-encoded.
    pub items_url: String,
}

/// Menu item display data for templates.
#[derive(Clone)]
pub struct MenuItemView {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
    pub price: String,
    pub image_url: Option<String>,
    pub quantity: u32,
}

/// Summary line display data for the confirm dialog.
#[derive(Clone)]
pub struct SummaryLineView {
    pub name: String,
    pub quantity: u32,
    pub subtotal: String,
}

// =============================================================================
// Type Conversions
// =============================================================================

fn category_tabs(menu: &Menu, order_id: OrderId) -> Vec<CategoryTabView> {
    menu.categories()
        .iter()
        .map(|category| CategoryTabView {
            name: category.name.clone(),
            items_url: format!(
                "/orders/{order_id}/items?category={}",
                urlencoding::encode(&category.name)
            ),
        })
        .collect()
}

fn item_view(item: &MenuItem, cart: &Cart) -> MenuItemView {
    MenuItemView {
        id: item.id.as_i64(),
        name: item.name.clone(),
        ingredients: item.ingredients.clone(),
        price: item.price.display(),
        image_url: item.image_url.clone(),
        quantity: cart.quantity(item.id),
    }
}

fn item_views(items: &[MenuItem], cart: &Cart) -> Vec<MenuItemView> {
    items.iter().map(|item| item_view(item, cart)).collect()
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart for an order from the session, defaulting to empty.
async fn load_cart(session: &Session, order_id: OrderId) -> Result<Cart> {
    Ok(session
        .get::<Cart>(&cart_key(order_id))
        .await?
        .unwrap_or_default())
}

/// Persist the cart for an order to the session.
async fn save_cart(session: &Session, order_id: OrderId, cart: &Cart) -> Result<()> {
    session.insert(&cart_key(order_id), cart).await?;
    Ok(())
}

/// Drop the cart for an order from the session.
async fn clear_cart(session: &Session, order_id: OrderId) -> Result<()> {
    session.remove::<Cart>(&cart_key(order_id)).await?;
    Ok(())
}

/// Category query for the items fragment.
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: String,
}

/// Order page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/show.html")]
pub struct OrderShowTemplate {
    pub order_id: i64,
    pub tabs: Vec<CategoryTabView>,
    pub items: Vec<MenuItemView>,
    pub total: String,
}

/// Item list fragment template (for HTMX tab switches).
#[derive(Template, WebTemplate)]
#[template(path = "partials/menu_items.html")]
pub struct MenuItemsTemplate {
    pub order_id: i64,
    pub items: Vec<MenuItemView>,
}

/// Quantity controls fragment template (for HTMX +/- swaps).
#[derive(Template, WebTemplate)]
#[template(path = "partials/item_controls.html")]
pub struct ItemControlsTemplate {
    pub order_id: i64,
    pub item: MenuItemView,
}

/// Total display fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_total.html")]
pub struct CartTotalTemplate {
    pub total: String,
}

/// Review summary fragment template (the confirm dialog body).
#[derive(Template, WebTemplate)]
#[template(path = "partials/order_summary.html")]
pub struct OrderSummaryTemplate {
    pub order_id: i64,
    pub lines: Vec<SummaryLineView>,
    pub total: String,
}

/// Display the order page for one customer order.
///
/// The first category is the active tab; its items render with the
/// quantities already in this order's cart.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
    session: Session,
) -> Result<OrderShowTemplate> {
    let order_id = OrderId::new(order_id);
    let cart = load_cart(&session, order_id).await?;

    let menu = state.menu();
    let items = menu
        .first_category()
        .map(|category| item_views(&category.items, &cart))
        .unwrap_or_default();

    Ok(OrderShowTemplate {
        order_id: order_id.as_i64(),
        tabs: category_tabs(menu, order_id),
        items,
        total: cart.total().display(),
    })
}

/// Item list for a category (HTMX).
///
/// An unknown category renders an empty list. Quantities come from the
/// session cart, so switching tabs never loses what was already ordered.
#[instrument(skip(state, session))]
pub async fn category_items(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
    Query(query): Query<CategoryQuery>,
    session: Session,
) -> Result<MenuItemsTemplate> {
    let order_id = OrderId::new(order_id);
    let cart = load_cart(&session, order_id).await?;

    Ok(MenuItemsTemplate {
        order_id: order_id.as_i64(),
        items: item_views(state.menu().items_in(&query.category), &cart),
    })
}

/// Add one unit of an item to the cart (HTMX).
#[instrument(skip(state, session))]
pub async fn increment(
    State(state): State<AppState>,
    Path((order_id, item_id)): Path<(i64, i64)>,
    session: Session,
) -> Result<Response> {
    let order_id = OrderId::new(order_id);
    let item_id = MenuItemId::new(item_id);

    let item = state
        .menu()
        .find_item(item_id)
        .ok_or_else(|| AppError::NotFound(format!("menu item {item_id}")))?;

    let mut cart = load_cart(&session, order_id).await?;
    cart.increment(item);
    save_cart(&session, order_id, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        ItemControlsTemplate {
            order_id: order_id.as_i64(),
            item: item_view(item, &cart),
        },
    )
        .into_response())
}

/// Remove one unit of an item from the cart (HTMX).
///
/// Decrementing an item that is not in the cart is a no-op.
#[instrument(skip(state, session))]
pub async fn decrement(
    State(state): State<AppState>,
    Path((order_id, item_id)): Path<(i64, i64)>,
    session: Session,
) -> Result<Response> {
    let order_id = OrderId::new(order_id);
    let item_id = MenuItemId::new(item_id);

    let item = state
        .menu()
        .find_item(item_id)
        .ok_or_else(|| AppError::NotFound(format!("menu item {item_id}")))?;

    let mut cart = load_cart(&session, order_id).await?;
    cart.decrement(item_id);
    save_cart(&session, order_id, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        ItemControlsTemplate {
            order_id: order_id.as_i64(),
            item: item_view(item, &cart),
        },
    )
        .into_response())
}

/// Formatted cart total (HTMX).
#[instrument(skip(session))]
pub async fn total(Path(order_id): Path<i64>, session: Session) -> Result<CartTotalTemplate> {
    let cart = load_cart(&session, OrderId::new(order_id)).await?;

    Ok(CartTotalTemplate {
        total: cart.total().display(),
    })
}

/// Review summary for the confirm dialog (HTMX).
///
/// An empty cart shows the "no items" message; confirming is still possible
/// and submits an empty item list.
#[instrument(skip(session))]
pub async fn summary(
    Path(order_id): Path<i64>,
    session: Session,
) -> Result<OrderSummaryTemplate> {
    let order_id = OrderId::new(order_id);
    let cart = load_cart(&session, order_id).await?;
    let summary = cart.summary();

    Ok(OrderSummaryTemplate {
        order_id: order_id.as_i64(),
        lines: summary
            .lines
            .into_iter()
            .map(|line| SummaryLineView {
                name: line.name,
                quantity: line.quantity,
                subtotal: line.subtotal.display(),
            })
            .collect(),
        total: summary.total.display(),
    })
}

/// Submit the order to the POS backend (HTMX).
///
/// Success clears this order's cart and answers with an `HX-Redirect` to the
/// URL the backend chose. Failure leaves the cart (and the open dialog)
/// untouched so the waiter can retry.
#[instrument(skip(state, session))]
pub async fn send(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
    session: Session,
) -> Result<Response> {
    let order_id = OrderId::new(order_id);
    let cart = load_cart(&session, order_id).await?;

    match state.pos().submit_order(order_id, cart.lines()).await {
        Ok(redirect) => {
            clear_cart(&session, order_id).await?;
            Ok((AppendHeaders([("HX-Redirect", redirect)]), ()).into_response())
        }
        Err(e) => {
            tracing::error!(error = %e, %order_id, "Failed to submit order");
            Ok((
                StatusCode::BAD_GATEWAY,
                ErrorFragment {
                    message: "Could not send the order. Please try again.".to_string(),
                },
            )
                .into_response())
        }
    }
}
