use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::model::PublicacaoEstruturada;

pub(super) static DATA_PUBLICACAO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"DATA:(\d{2}/\d{2}/\d{4})").expect("publication date pattern"));

pub(super) static PAGINA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"PG:(\d+)").expect("publication page pattern"));

pub fn parse_data_publicacao(texto: &str) -> PublicacaoEstruturada {
    let meio_pub = texto.split_whitespace().next().map(str::to_string);

    let data_publicacao = DATA_PUBLICACAO
        .captures(texto)
        .and_then(|captura| converter_data(&captura[1]));

    let pagina_publicacao = PAGINA.captures(texto).map(|captura| captura[1].to_string());

    PublicacaoEstruturada {
        meio_pub,
        data_publicacao,
        pagina_publicacao,
    }
}

pub(super) fn converter_data(data: &str) -> Option<String> {
    NaiveDate::parse_from_str(data, "%d/%m/%Y")
        .ok()
        .map(|data| data.format("%Y-%m-%d").to_string())
}
