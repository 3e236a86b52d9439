use crate::db::{Database, OwnerRepository};
use crate::handlers::owners::{bootstrap, create_owner, find_all, find_owner, update_owner};
use axum::{
    Router,
    body::Body,
    http::Request,
    routing::{get, put},
};
use tower_http::{
    LatencyUnit,
    cors::CorsLayer,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, info_span};

/// Shared handler state. Both fields are cheap pool handles.
#[derive(Clone)]
pub struct PetclinicState {
    pub owners: OwnerRepository,
    pub db: Database,
}

impl PetclinicState {
    pub fn new(db: Database) -> Self {
        Self {
            owners: OwnerRepository::new(db.pool().clone(), db.dialect()),
            db,
        }
    }
}

pub fn petclinic_router(state: PetclinicState) -> Router {
    // Every request runs in a `petclinic.owner` span; the response event carries its latency.
    let trace = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            info_span!(
                "petclinic.owner",
                method = %request.method(),
                uri = %request.uri(),
            )
        })
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    Router::new()
        .route("/owners", get(find_all).post(create_owner))
        // The misspelling is part of the published contract.
        .route("/owners/boostrap", put(bootstrap))
        .route("/owners/{owner_id}", get(find_owner).put(update_owner))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(trace)
}
