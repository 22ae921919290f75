mod acordaos_similares;
mod data_publicacao;
mod informacoes_complementares;
mod jurisprudencia_citada;
mod referencias_legislativas;
mod termos_auxiliares;


pub use acordaos_similares::parse_acordaos_similares;
pub use data_publicacao::parse_data_publicacao;
pub use informacoes_complementares::parse_informacoes_complementares;
pub use jurisprudencia_citada::parse_jurisprudencia_citada;
pub use referencias_legislativas::parse_referencias_legislativas;
pub use termos_auxiliares::parse_termos_auxiliares;
