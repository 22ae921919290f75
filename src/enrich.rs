use crate::index::AcordaoIndex;
use crate::model::Acordao;
use crate::parsers::{
    parse_acordaos_similares, parse_data_publicacao, parse_informacoes_complementares,
    parse_jurisprudencia_citada, parse_referencias_legislativas, parse_termos_auxiliares,
};

pub fn enrich_acordao(acordao: &mut Acordao, index: &AcordaoIndex) {
    if let Some(data) = acordao.data_publicacao.as_deref() {
        if !data.trim().is_empty() {
            acordao.publicacao_estruturada = Some(parse_data_publicacao(data));
        }
    }

    if let Some(texto) = acordao.jurisprudencia_citada.as_deref() {
        if !texto.trim().is_empty() {
            acordao.jurisprudencia_citada_estruturada =
                Some(parse_jurisprudencia_citada(texto, Some(index)));
        }
    }

    if let Some(referencias) = acordao.referencias_legislativas.as_deref() {
        if !referencias.is_empty() {
            acordao.referencias_legislativas_estruturadas =
                Some(parse_referencias_legislativas(referencias));
        }
    }

    if let Some(similares) = acordao.acordaos_similares.as_deref() {
        if !similares.is_empty() {
            acordao.acordaos_similares_estruturados =
                Some(parse_acordaos_similares(similares, Some(index)));
        }
    }

    if let Some(texto) = acordao.informacoes_complementares.as_deref() {
        acordao.informacoes_complementares_estruturadas = parse_informacoes_complementares(texto);
    }

    if let Some(texto) = acordao.termos_auxiliares.as_deref() {
        acordao.termos_auxiliares_estruturados = parse_termos_auxiliares(texto);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrichment_fills_structured_fields_and_resolves_ids() {
        let mut index = AcordaoIndex::new();
        index.add(&Acordao {
            id: Some("acordao-999888".to_string()),
            sigla_classe: Some("REsp".to_string()),
            numero_processo: Some("999888".to_string()),
            ..Acordao::default()
        });

        let mut acordao = Acordao {
            data_publicacao: Some("DJe DATA:15/03/2021 PG:456".to_string()),
            jurisprudencia_citada: Some(
                "(Direito Civil - Contratos)\nSTJ - <<REsp 999888>>-RJ".to_string(),
            ),
            acordaos_similares: Some(vec!["REsp 999888 RJ 2020/0012345-6".to_string()]),
            termos_auxiliares: Some("DANO MORAL. INDENIZAÇÃO.".to_string()),
            ..Acordao::default()
        };

        enrich_acordao(&mut acordao, &index);

        let publicacao = acordao.publicacao_estruturada.unwrap();
        assert_eq!(publicacao.meio_pub.as_deref(), Some("DJe"));
        assert_eq!(publicacao.data_publicacao.as_deref(), Some("2021-03-15"));

        let jurisprudencia = acordao.jurisprudencia_citada_estruturada.unwrap();
        assert_eq!(jurisprudencia.categorias.len(), 1);
        assert_eq!(
            jurisprudencia.categorias[0].acordaos_citados[0].id.as_deref(),
            Some("acordao-999888")
        );

        let similares = acordao.acordaos_similares_estruturados.unwrap();
        assert_eq!(
            similares.get("similarRuling1").unwrap().id.as_deref(),
            Some("acordao-999888")
        );

        assert_eq!(
            acordao.termos_auxiliares_estruturados.unwrap(),
            vec!["DANO MORAL".to_string(), "INDENIZAÇÃO".to_string()]
        );
    }

    #[test]
    fn enrichment_leaves_absent_fields_untouched() {
        let index = AcordaoIndex::new();
        let mut acordao = Acordao::default();

        enrich_acordao(&mut acordao, &index);

        assert!(acordao.publicacao_estruturada.is_none());
        assert!(acordao.jurisprudencia_citada_estruturada.is_none());
        assert!(acordao.referencias_legislativas_estruturadas.is_none());
        assert!(acordao.acordaos_similares_estruturados.is_none());
        assert!(acordao.informacoes_complementares_estruturadas.is_none());
        assert!(acordao.termos_auxiliares_estruturados.is_none());
    }
}
