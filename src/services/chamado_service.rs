use chrono::{SecondsFormat, Utc};
use sqlx::SqlitePool;

use crate::api::dto::CreateChamadoRequest;
use crate::domain::{Chamado, ChamadoError, PersistenceOp};

pub struct ChamadoService;

impl ChamadoService {
    pub async fn create(
        pool: &SqlitePool,
        req: CreateChamadoRequest,
    ) -> Result<Chamado, ChamadoError> {
        let status = req.resolved_status();
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        // descricao/tipo bind as NULL when absent and the column constraint decides
        let chamado: Chamado = sqlx::query_as(
            "INSERT INTO chamados (descricao, tipo, status, created_at, updated_at) VALUES (?, ?, ?, ?, ?) RETURNING id, descricao, tipo, status, created_at, updated_at",
        )
        .bind(req.descricao.as_deref())
        .bind(req.tipo.as_deref())
        .bind(&status)
        .bind(&now)
        .bind(&now)
        .fetch_one(pool)
        .await
        .map_err(ChamadoError::persistence(PersistenceOp::Create))?;

        tracing::debug!(id = chamado.id, tipo = %chamado.tipo, "Chamado created");

        Ok(chamado)
    }

    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Chamado>, ChamadoError> {
        sqlx::query_as("SELECT id, descricao, tipo, status, created_at, updated_at FROM chamados")
            .fetch_all(pool)
            .await
            .map_err(ChamadoError::persistence(PersistenceOp::List))
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, ChamadoError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM chamados")
            .fetch_one(pool)
            .await
            .map_err(ChamadoError::persistence(PersistenceOp::List))
    }
}
