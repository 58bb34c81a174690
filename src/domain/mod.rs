pub mod chamado;
pub mod error;

pub use chamado::{Chamado, DEFAULT_STATUS};
pub use error::{ChamadoError, PersistenceOp};
