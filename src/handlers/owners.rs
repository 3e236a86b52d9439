use crate::db::Owner;
use crate::types::BootstrapOutcome;
use crate::{PetclinicError, router::PetclinicState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::info;

/// POST /owners -> stores a new owner; any id in the body is ignored.
pub async fn create_owner(
    State(state): State<PetclinicState>,
    Json(mut owner): Json<Owner>,
) -> Result<(StatusCode, Json<Owner>), PetclinicError> {
    owner.id = 0;
    let saved = state.owners.save(owner).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /owners/{ownerId} -> the owner, or an empty 200 when absent.
pub async fn find_owner(
    State(state): State<PetclinicState>,
    Path(owner_id): Path<i64>,
) -> Result<Response, PetclinicError> {
    let response = match state.owners.find_by_id(owner_id).await? {
        Some(owner) => Json(owner).into_response(),
        None => StatusCode::OK.into_response(),
    };
    Ok(response)
}

/// GET /owners
pub async fn find_all(
    State(state): State<PetclinicState>,
) -> Result<Json<Vec<Owner>>, PetclinicError> {
    Ok(Json(state.owners.find_all().await?))
}

/// PUT /owners/{ownerId} -> overwrites the contact fields of an existing owner.
pub async fn update_owner(
    State(state): State<PetclinicState>,
    Path(owner_id): Path<i64>,
    Json(request): Json<Owner>,
) -> Result<StatusCode, PetclinicError> {
    let mut owner = state
        .owners
        .find_by_id(owner_id)
        .await?
        .ok_or(PetclinicError::OwnerNotFound(owner_id))?;

    owner.overwrite_details(request);

    info!("Saving owner {:?}", owner);
    state.owners.save(owner).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /owners/boostrap -> drops and reseeds the owners table. Operator use only.
pub async fn bootstrap(State(state): State<PetclinicState>) -> BootstrapOutcome {
    BootstrapOutcome::run(&state.db).await
}
