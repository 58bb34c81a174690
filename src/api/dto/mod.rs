pub mod chamados;

pub use chamados::CreateChamadoRequest;
