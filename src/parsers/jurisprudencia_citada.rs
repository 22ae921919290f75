use std::mem;
use std::sync::LazyLock;

use regex::Regex;

use crate::index::AcordaoIndex;
use crate::model::{Categoria, CitacaoAcordao, JurisprudenciaCitada, Tribunal};

static CABECALHO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\((.*?)\)$").expect("category header pattern"));

static MARCADOR_TRIBUNAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(STJ|STF)\s*-\s*").expect("tribunal marker pattern"));

static PADRAO_CITACAO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<<([^>]+)>>-(\w+)").expect("citation pattern"));

static INFO_PARENTESES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*?)\)").expect("citation info pattern"));

static TEMAS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"TEMA\(s\)\s*(\d+(?:\s*,\s*\d+)*)").expect("themes pattern"));

const INICIOS_CITACAO: [&str; 6] = ["<<", "STJ", "STF", "REPERCUSSÃO", "SÚMULA", "TEMA"];

#[derive(Debug, Clone)]
struct Cabecalho {
    principal: String,
    subcategorias: Vec<String>,
}

pub fn parse_jurisprudencia_citada(
    texto: &str,
    index: Option<&AcordaoIndex>,
) -> JurisprudenciaCitada {
    let mut resultado = JurisprudenciaCitada::default();

    let mut categoria_atual: Option<Cabecalho> = None;
    let mut acumuladas: Vec<CitacaoAcordao> = Vec::new();

    for linha in texto.lines().map(str::trim).filter(|linha| !linha.is_empty()) {
        if linha.starts_with('(') {
            fechar_categoria(&mut resultado, categoria_atual.as_ref(), &mut acumuladas);

            if let Some(captura) = CABECALHO.captures(linha) {
                let partes: Vec<&str> = captura[1].split('-').map(str::trim).collect();
                categoria_atual = Some(Cabecalho {
                    principal: partes[0].to_string(),
                    subcategorias: partes[1..].iter().map(|s| s.to_string()).collect(),
                });
            }
            continue;
        }

        let Some(marcador) = MARCADOR_TRIBUNAL.captures(linha) else {
            continue;
        };
        let Some(tribunal) = Tribunal::from_sigla(&marcador[1]) else {
            continue;
        };

        let fim_marcador = marcador.get(0).map_or(0, |completo| completo.end());
        let resto = linha[fim_marcador..].trim();

        for segmento in dividir_citacoes(resto) {
            let segmento = segmento.trim();
            if segmento.is_empty() {
                continue;
            }

            if let Some(citacao) = parse_segmento(segmento, tribunal, index) {
                acumuladas.push(citacao);
            }
        }
    }

    fechar_categoria(&mut resultado, categoria_atual.as_ref(), &mut acumuladas);

    resultado
}

fn fechar_categoria(
    resultado: &mut JurisprudenciaCitada,
    cabecalho: Option<&Cabecalho>,
    acumuladas: &mut Vec<CitacaoAcordao>,
) {
    let Some(cabecalho) = cabecalho else {
        return;
    };

    if acumuladas.is_empty() {
        return;
    }

    resultado.categorias.push(Categoria {
        categoria_principal: cabecalho.principal.clone(),
        subcategorias: cabecalho.subcategorias.clone(),
        acordaos_citados: mem::take(acumuladas),
    });
}

fn dividir_citacoes(texto: &str) -> Vec<&str> {
    let mut segmentos = Vec::new();
    let mut inicio = 0;

    for (pos, caractere) in texto.char_indices() {
        if caractere != ',' {
            continue;
        }

        let seguinte = texto[pos + 1..].trim_start();
        if INICIOS_CITACAO
            .iter()
            .any(|prefixo| seguinte.starts_with(prefixo))
        {
            segmentos.push(&texto[inicio..pos]);
            inicio = pos + 1;
        }
    }

    segmentos.push(&texto[inicio..]);
    segmentos
}

fn parse_segmento(
    segmento: &str,
    tribunal: Tribunal,
    index: Option<&AcordaoIndex>,
) -> Option<CitacaoAcordao> {
    let padrao = PADRAO_CITACAO.captures(segmento)?;
    let completo = &padrao[1];
    let estado = &padrao[2];

    let partes: Vec<&str> = completo.split_whitespace().collect();
    let numero = *partes.last()?;
    let tipo = if partes.len() > 1 {
        partes[..partes.len() - 1].join(" ")
    } else {
        partes[0].to_string()
    };

    let mut citacao = CitacaoAcordao::new(tribunal, tipo, numero.to_string(), estado.to_string());
    anotar_recurso_repetitivo(segmento, &mut citacao);

    if tribunal == Tribunal::Stj {
        if let Some(index) = index {
            citacao.id = index
                .get_id(&citacao.tipo, &citacao.numero)
                .map(str::to_string);
        }
    }

    Some(citacao)
}

fn anotar_recurso_repetitivo(segmento: &str, citacao: &mut CitacaoAcordao) {
    let Some(info) = INFO_PARENTESES.captures(segmento) else {
        return;
    };

    if !info[1].contains("RECURSO REPETITIVO") {
        return;
    }

    citacao.recurso_repetitivo = true;

    if let Some(temas) = TEMAS.captures(segmento) {
        citacao.temas = temas[1]
            .split(',')
            .map(str::trim)
            .map(str::to_string)
            .collect();
    }
}
