use crate::model::SecaoComplementar;

pub fn parse_informacoes_complementares(texto: &str) -> Option<Vec<SecaoComplementar>> {
    if texto.trim().is_empty() || texto == "null" {
        return None;
    }

    let mut secoes: Vec<SecaoComplementar> = Vec::new();
    let mut secao_atual: Option<String> = None;
    let mut conteudo_atual: Vec<&str> = Vec::new();

    for linha in texto.lines().map(str::trim).filter(|linha| !linha.is_empty()) {
        if linha.starts_with('(') && linha.ends_with(')') {
            if let Some(secao) = secao_atual.take() {
                secoes.push(SecaoComplementar {
                    secao,
                    termos: parse_conteudo(&conteudo_atual.join(" ")),
                });
            }

            secao_atual = Some(nome_secao(linha.trim_matches(['(', ')'])));
            conteudo_atual.clear();
        } else {
            conteudo_atual.push(linha);
        }
    }

    if let Some(secao) = secao_atual {
        if !conteudo_atual.is_empty() {
            secoes.push(SecaoComplementar {
                secao,
                termos: parse_conteudo(&conteudo_atual.join(" ")),
            });
        }
    }

    Some(secoes)
}

fn parse_conteudo(conteudo: &str) -> Vec<String> {
    conteudo
        .split('/')
        .flat_map(|item| item.split([',', ';']))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn nome_secao(cabecalho: &str) -> String {
    cabecalho
        .split_whitespace()
        .map(|palavra| {
            let minuscula = palavra.to_lowercase();
            let mut caracteres = minuscula.chars();
            match caracteres.next() {
                Some(inicial) => inicial.to_uppercase().chain(caracteres).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
