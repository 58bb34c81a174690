use serde::Deserialize;

use crate::domain::DEFAULT_STATUS;

/// Body of `POST /chamados`. Fields are passed through to storage as given;
/// only `status` has a server-side default.
#[derive(Debug, Default, Deserialize)]
pub struct CreateChamadoRequest {
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl CreateChamadoRequest {
    pub fn resolved_status(&self) -> String {
        match self.status.as_deref() {
            Some(status) if !status.is_empty() => status.to_string(),
            _ => DEFAULT_STATUS.to_string(),
        }
    }
}
