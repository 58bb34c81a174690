use std::fmt;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// Repository operation a persistence failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceOp {
    Create,
    List,
}

impl fmt::Display for PersistenceOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceOp::Create => write!(f, "Erro ao criar chamado"),
            PersistenceOp::List => write!(f, "Erro ao listar chamados"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChamadoError {
    #[error("Não foi possível conectar ao banco de dados: {0}")]
    Connection(String),

    #[error("Erro ao sincronizar o banco de dados: {0}")]
    Schema(#[from] sqlx::migrate::MigrateError),

    #[error("{op}: {source}")]
    Persistence {
        op: PersistenceOp,
        #[source]
        source: sqlx::Error,
    },

    #[error("Origin not allowed by CORS")]
    OriginRejected(String),
}

impl ChamadoError {
    pub fn connection(err: impl fmt::Display) -> Self {
        ChamadoError::Connection(err.to_string())
    }

    pub fn persistence(op: PersistenceOp) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| ChamadoError::Persistence { op, source }
    }
}

impl IntoResponse for ChamadoError {
    fn into_response(self) -> Response {
        match &self {
            ChamadoError::OriginRejected(origin) => {
                tracing::warn!(%origin, "Rejected request from origin outside the allow-list");
            }
            err => tracing::error!("{}", err),
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
