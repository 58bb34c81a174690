pub mod chamados;

use axum::extract::State;

use crate::api::AppState;
use crate::domain::ChamadoError;
use crate::infrastructure::db;

pub const CONNECTION_OK: &str = "Conexão com o banco de dados foi bem-sucedida!";

pub async fn check_connection(State(state): State<AppState>) -> Result<&'static str, ChamadoError> {
    let pool = state.require_db()?;
    db::verify(pool).await?;
    Ok(CONNECTION_OK)
}
