use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DEFAULT_STATUS: &str = "Aberto";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Chamado {
    pub id: i64,
    pub descricao: String,
    pub tipo: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}
