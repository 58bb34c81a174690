use axum::{extract::State, http::StatusCode, Json};

use crate::api::dto::CreateChamadoRequest;
use crate::api::extract::JsonOrDefault;
use crate::api::AppState;
use crate::domain::{Chamado, ChamadoError};
use crate::services::ChamadoService;

pub async fn create_chamado(
    State(state): State<AppState>,
    JsonOrDefault(req): JsonOrDefault<CreateChamadoRequest>,
) -> Result<(StatusCode, Json<Chamado>), ChamadoError> {
    let pool = state.require_db()?;
    let chamado = ChamadoService::create(pool, req).await?;
    Ok((StatusCode::CREATED, Json(chamado)))
}

pub async fn list_chamados(
    State(state): State<AppState>,
) -> Result<Json<Vec<Chamado>>, ChamadoError> {
    let pool = state.require_db()?;
    let chamados = ChamadoService::list_all(pool).await?;
    Ok(Json(chamados))
}
