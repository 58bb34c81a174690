pub mod chamado_service;

pub use chamado_service::ChamadoService;
