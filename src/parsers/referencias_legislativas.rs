use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::model::{Artigo, DetalhesArtigo, ReferenciaLegislativa};

const TIPOS_REFERENCIA: [&str; 11] = [
    "LCP", "DEL", "LEI", "CFB", "RGI", "MPR", "EMC", "RES", "ATO", "PRT", "SUM",
];

const TIPOS_SEM_NUMERO: [&str; 2] = ["CFB", "RGI"];

static NUMERO_SUMULA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"SUM:(\d+)").expect("súmula number pattern"));

static CAMPO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+):(\S+)").expect("reference field pattern"));

pub fn parse_referencias_legislativas(referencias: &[String]) -> Vec<ReferenciaLegislativa> {
    let mut resultado = Vec::new();

    for (posicao, bruto) in referencias.iter().enumerate() {
        match parse_referencia(bruto) {
            Some(referencia) => resultado.push(referencia),
            None => debug!(position = posicao + 1, "legislative reference skipped"),
        }
    }

    resultado
}

fn parse_referencia(bruto: &str) -> Option<ReferenciaLegislativa> {
    let mut linhas: Vec<&str> = bruto
        .lines()
        .map(str::trim)
        .filter(|linha| !linha.is_empty())
        .collect();

    let primeira = *linhas.first()?;

    let mut leg = None;
    let mut ano = None;
    let mut tipo = None;
    let mut numero = None;

    for parte in primeira.split_whitespace() {
        let Some((chave, valor)) = parte.split_once(':') else {
            continue;
        };

        if chave == "LEG" {
            leg = Some(valor.to_string());
        } else if chave == "ANO" {
            ano = Some(valor.to_string());
        } else if TIPOS_REFERENCIA.contains(&chave) {
            tipo = Some(chave.to_string());
            if !TIPOS_SEM_NUMERO.contains(&chave) {
                numero = Some(valor.to_string());
            }
        }
    }

    let mut orgao_emissor = None;
    if let Some(ultima) = linhas.last() {
        if ultima.starts_with('(') && ultima.ends_with(')') {
            orgao_emissor = Some(ultima.trim_matches(['(', ')']).to_string());
            if linhas.len() > 1 {
                linhas.pop();
            }
        }
    }

    let (leg_sigla, leg_extenso) = extrair_sigla(&linhas[1..]);

    let numero_sumula = linhas.iter().find_map(|linha| {
        NUMERO_SUMULA
            .captures(linha)
            .map(|captura| captura[1].to_string())
    });

    let artigos = linhas
        .iter()
        .rev()
        .find(|linha| !linha.starts_with('('))
        .map(|ultima| extrair_artigos(ultima))
        .unwrap_or_default();

    Some(ReferenciaLegislativa {
        leg: leg?,
        ano: ano?,
        tipo,
        numero,
        orgao_emissor,
        leg_sigla,
        leg_extenso,
        numero_sumula,
        artigos,
    })
}

fn extrair_sigla(linhas: &[&str]) -> (Option<String>, Option<String>) {
    for linha in linhas {
        let Some((_, resto)) = linha.split_once("*****") else {
            continue;
        };

        let resto = resto.trim();
        let mut palavras = resto.splitn(2, char::is_whitespace);

        let sigla = match palavras.next() {
            Some(palavra) if !palavra.is_empty() => palavra.to_string(),
            _ => return (None, None),
        };
        let extenso = palavras.next().map(|texto| texto.trim().to_string());

        return (Some(sigla), extenso);
    }

    (None, None)
}

fn extrair_artigos(linha: &str) -> Vec<Artigo> {
    let mut artigos = Vec::new();
    let mut atual: Option<Artigo> = None;

    for captura in CAMPO.captures_iter(linha) {
        let chave = &captura[1];
        let valor = captura[2].to_string();

        if chave == "ART" {
            if let Some(artigo) = atual.take() {
                artigos.push(artigo);
            }
            atual = Some(Artigo {
                numero: valor,
                detalhes: None,
            });
            continue;
        }

        let Some(artigo) = atual.as_mut() else {
            continue;
        };
        let detalhes = artigo.detalhes.get_or_insert_with(DetalhesArtigo::default);

        match chave {
            "PAR" => detalhes.paragrafo = Some(valor),
            "INC" => detalhes.inciso = Some(valor),
            "LET" => detalhes.letra = Some(valor),
            "ITEM" => detalhes.item = Some(valor),
            "NUM" => detalhes.num = Some(valor),
            _ => {}
        }
    }

    if let Some(artigo) = atual.take() {
        artigos.push(artigo);
    }

    artigos
}
