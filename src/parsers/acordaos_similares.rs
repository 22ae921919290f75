use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::index::AcordaoIndex;
use crate::model::{AcordaosSimilares, CitacaoAcordao, Publicacao, Tribunal};
use crate::parsers::data_publicacao::{DATA_PUBLICACAO, PAGINA, converter_data};

static REGISTRO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}/\d{7}-\d").expect("registration number pattern"));

static DATA_DECISAO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Decisão:(\d{2}/\d{2}/\d{4})").expect("decision date pattern"));

pub fn parse_acordaos_similares(
    acordaos: &[String],
    index: Option<&AcordaoIndex>,
) -> AcordaosSimilares {
    let mut resultado = AcordaosSimilares::default();

    for (posicao, bruto) in acordaos.iter().enumerate() {
        let posicao = posicao + 1;
        match parse_entrada(bruto, index) {
            Some(citacao) => resultado.insert(format!("similarRuling{posicao}"), citacao),
            None => debug!(position = posicao, "similar ruling entry skipped"),
        }
    }

    resultado
}

fn parse_entrada(bruto: &str, index: Option<&AcordaoIndex>) -> Option<CitacaoAcordao> {
    let linhas: Vec<&str> = bruto
        .lines()
        .map(str::trim)
        .filter(|linha| !linha.is_empty())
        .collect();

    let primeira = linhas.first()?;
    let primeira = primeira.split_whitespace().collect::<Vec<_>>().join(" ");

    let registro = REGISTRO.find(&primeira)?;
    let antes = primeira[..registro.start()].trim();

    let partes: Vec<&str> = antes.split_whitespace().collect();
    if partes.len() < 3 {
        return None;
    }

    let estado = partes[partes.len() - 1];
    let numero = partes[partes.len() - 2];
    let tipo = partes[..partes.len() - 2].join(" ");

    let mut citacao = CitacaoAcordao::new(
        Tribunal::Stj,
        tipo,
        numero.to_string(),
        estado.to_string(),
    );
    citacao.registro = Some(registro.as_str().to_string());
    citacao.data_decisao = extrair_data_decisao(&primeira);
    citacao.publicacoes = extrair_publicacoes(&linhas[1..]);

    if let Some(index) = index {
        citacao.id = index
            .get_id(&citacao.tipo, &citacao.numero)
            .map(str::to_string);
    }

    Some(citacao)
}

fn extrair_data_decisao(linha: &str) -> Option<String> {
    DATA_DECISAO
        .captures(linha)
        .and_then(|captura| converter_data(&captura[1]))
}

fn extrair_publicacoes(linhas: &[&str]) -> Vec<Publicacao> {
    let mut publicacoes = Vec::new();

    for linha in linhas {
        let Some(fonte) = linha.split_whitespace().next() else {
            continue;
        };

        let data = DATA_PUBLICACAO
            .captures(linha)
            .and_then(|captura| converter_data(&captura[1]));
        let pagina = PAGINA.captures(linha).map(|captura| captura[1].to_string());

        publicacoes.push(Publicacao {
            fonte: fonte.to_string(),
            data,
            pagina,
        });
    }

    publicacoes
}
