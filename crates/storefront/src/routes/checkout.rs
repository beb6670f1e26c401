//! Checkout route handlers.
//!
//! Each visitor's [`CheckoutSession`] lives in their session under
//! [`session_keys::CHECKOUT`]. Handlers load it, apply one operation, write
//! it back, and answer with the current checkout view. A refused operation
//! is not written back, so the stored checkout never changes on error.

use std::num::NonZeroU32;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use tower_sessions::Session;
use tracing::instrument;

use quickbite_core::ItemId;
use quickbite_core::checkout::{
    Address, AddressDirectory, CheckoutError, CheckoutSession, PricingSummary,
};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::models::checkout::{
    AddItemRequest, AddressRequest, BackResponse, CheckoutResponse, PaymentRequest,
    QuantityRequest, SubmitResponse, TextRequest,
};
use crate::models::session_keys;
use crate::state::AppState;

type Body<T> = std::result::Result<Json<T>, JsonRejection>;

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the checkout from the session, starting a fresh one if absent.
async fn load(state: &AppState, session: &Session) -> Result<CheckoutSession> {
    match session.get::<CheckoutSession>(session_keys::CHECKOUT).await? {
        Some(checkout) => Ok(checkout),
        None => Ok(CheckoutSession::new(Vec::new(), state.addresses())?),
    }
}

async fn save(session: &Session, checkout: &CheckoutSession) -> Result<()> {
    session.insert(session_keys::CHECKOUT, checkout).await?;
    Ok(())
}

/// Apply `operation`, persist on success, and respond with the new view.
async fn mutate<F>(
    state: &AppState,
    session: &Session,
    operation: F,
) -> Result<Json<CheckoutResponse>>
where
    F: FnOnce(&mut CheckoutSession) -> std::result::Result<(), CheckoutError>,
{
    let mut checkout = load(state, session).await?;
    operation(&mut checkout)?;
    save(session, &checkout).await?;
    Ok(Json(checkout.view().into()))
}

// =============================================================================
// Handlers
// =============================================================================

/// Current checkout view.
#[instrument(skip_all)]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<CheckoutResponse>> {
    let checkout = load(&state, &session).await?;
    Ok(Json(checkout.view().into()))
}

/// Derived totals for the current cart.
#[instrument(skip_all)]
pub async fn summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<PricingSummary>> {
    let checkout = load(&state, &session).await?;
    Ok(Json(checkout.summary()))
}

/// Add a menu item, merging with an existing line.
#[instrument(skip_all)]
pub async fn add_item(
    State(state): State<AppState>,
    session: Session,
    payload: Body<AddItemRequest>,
) -> Result<Json<CheckoutResponse>> {
    let Json(request) = payload?;
    let quantity = NonZeroU32::new(request.quantity.unwrap_or(1))
        .ok_or_else(|| AppError::BadRequest("Quantity must be at least 1".to_string()))?;
    let line = state
        .catalog()
        .line_item(&request.item_id, quantity)
        .ok_or_else(|| AppError::NotFound(format!("Menu item {}", request.item_id)))?;

    add_breadcrumb(
        "checkout",
        "Added item",
        Some(&[("item_id", request.item_id.as_str())]),
    );
    mutate(&state, &session, |checkout| checkout.add_item(line)).await
}

/// Replace a line's quantity; zero or less removes it.
#[instrument(skip(state, session, payload))]
pub async fn set_quantity(
    State(state): State<AppState>,
    session: Session,
    Path(item_id): Path<ItemId>,
    payload: Body<QuantityRequest>,
) -> Result<Json<CheckoutResponse>> {
    let Json(request) = payload?;
    mutate(&state, &session, |checkout| {
        checkout.set_quantity(&item_id, request.quantity);
        Ok(())
    })
    .await
}

#[instrument(skip(state, session))]
pub async fn remove_item(
    State(state): State<AppState>,
    session: Session,
    Path(item_id): Path<ItemId>,
) -> Result<Json<CheckoutResponse>> {
    mutate(&state, &session, |checkout| {
        checkout.remove_item(&item_id);
        Ok(())
    })
    .await
}

#[instrument(skip(state, session, payload))]
pub async fn set_instructions(
    State(state): State<AppState>,
    session: Session,
    Path(item_id): Path<ItemId>,
    payload: Body<TextRequest>,
) -> Result<Json<CheckoutResponse>> {
    let Json(request) = payload?;
    mutate(&state, &session, |checkout| {
        checkout.set_special_instructions(&item_id, request.text);
        Ok(())
    })
    .await
}

#[instrument(skip_all)]
pub async fn set_note(
    State(state): State<AppState>,
    session: Session,
    payload: Body<TextRequest>,
) -> Result<Json<CheckoutResponse>> {
    let Json(request) = payload?;
    mutate(&state, &session, |checkout| {
        checkout.set_order_note(request.text);
        Ok(())
    })
    .await
}

/// Choose a delivery address. Whether it exists is checked at submission.
#[instrument(skip_all)]
pub async fn select_address(
    State(state): State<AppState>,
    session: Session,
    payload: Body<AddressRequest>,
) -> Result<Json<CheckoutResponse>> {
    let Json(request) = payload?;
    mutate(&state, &session, |checkout| {
        checkout.select_address(request.address_id);
        Ok(())
    })
    .await
}

#[instrument(skip_all)]
pub async fn select_payment(
    State(state): State<AppState>,
    session: Session,
    payload: Body<PaymentRequest>,
) -> Result<Json<CheckoutResponse>> {
    let Json(request) = payload?;
    mutate(&state, &session, |checkout| {
        checkout.select_payment_method(request.method);
        Ok(())
    })
    .await
}

/// Continue to the next step.
#[instrument(skip_all)]
pub async fn advance(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<CheckoutResponse>> {
    mutate(&state, &session, |checkout| {
        let step = checkout.advance_step()?;
        add_breadcrumb(
            "checkout",
            "Advanced step",
            Some(&[("step", &step.to_string())]),
        );
        Ok(())
    })
    .await
}

/// Go back one step, or leave checkout from the first step.
#[instrument(skip_all)]
pub async fn back(State(state): State<AppState>, session: Session) -> Result<Json<BackResponse>> {
    let mut checkout = load(&state, &session).await?;
    if checkout.retreat_step().is_none() {
        return Ok(Json(BackResponse::exit()));
    }
    save(&session, &checkout).await?;
    Ok(Json(BackResponse::Step(checkout.view().into())))
}

/// Place the order.
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<SubmitResponse>> {
    // A visitor without a session id has nothing stored to submit.
    let _in_flight = match session.id() {
        Some(id) => Some(state.in_flight().begin(id.to_string()).ok_or_else(|| {
            AppError::Conflict("Your order is already being placed".to_string())
        })?),
        None => None,
    };

    let mut checkout = load(&state, &session).await?;
    let order = checkout
        .submit(state.addresses(), state.orders())
        .await
        .inspect_err(|e| tracing::info!(error = %e, "Order not placed"))?;
    save(&session, &checkout).await?;

    tracing::info!(total = %order.pricing.total, "Checkout complete");
    Ok(Json(order.into()))
}

/// The customer's saved delivery addresses.
#[instrument(skip_all)]
pub async fn addresses(State(state): State<AppState>) -> Json<Vec<Address>> {
    Json(state.addresses().addresses().to_vec())
}
