use std::sync::LazyLock;

use regex::Regex;

static PREFIXO_MULTA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^MULTA DE\s+").expect("multa prefix pattern"));

static PARENTESES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("parenthesized span pattern"));

pub fn parse_termos_auxiliares(texto: &str) -> Option<Vec<String>> {
    if texto.trim().is_empty() || texto == "null" {
        return None;
    }

    let texto = PREFIXO_MULTA.replace(texto, "");
    let texto = texto.replace(';', ".");

    let mut termos = Vec::new();
    for termo in texto.split('.') {
        let termo = termo.trim();
        if termo.is_empty() {
            continue;
        }

        let limpo = PARENTESES.replace_all(termo, "");
        let limpo = limpo.trim();
        if !limpo.is_empty() {
            termos.push(limpo.to_string());
        }
    }

    if termos.is_empty() { None } else { Some(termos) }
}
