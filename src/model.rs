use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tribunal {
    #[serde(rename = "STJ")]
    Stj,
    #[serde(rename = "STF")]
    Stf,
}

impl Tribunal {
    pub fn from_sigla(sigla: &str) -> Option<Self> {
        match sigla {
            "STJ" => Some(Self::Stj),
            "STF" => Some(Self::Stf),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitacaoAcordao {
    pub tribunal: Tribunal,
    pub tipo: String,
    pub numero: String,
    pub estado: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registro: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_decisao: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub publicacoes: Vec<Publicacao>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub recurso_repetitivo: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub temas: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl CitacaoAcordao {
    pub fn new(tribunal: Tribunal, tipo: String, numero: String, estado: String) -> Self {
        Self {
            tribunal,
            tipo,
            numero,
            estado,
            registro: None,
            data_decisao: None,
            publicacoes: Vec::new(),
            recurso_repetitivo: false,
            temas: Vec::new(),
            id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publicacao {
    pub fonte: String,
    pub data: Option<String>,
    pub pagina: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Categoria {
    pub categoria_principal: String,
    pub subcategorias: Vec<String>,
    pub acordaos_citados: Vec<CitacaoAcordao>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JurisprudenciaCitada {
    pub categorias: Vec<Categoria>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcordaosSimilares {
    entries: Vec<(String, CitacaoAcordao)>,
}

impl AcordaosSimilares {
    pub fn insert(&mut self, chave: String, citacao: CitacaoAcordao) {
        self.entries.push((chave, citacao));
    }

    pub fn get(&self, chave: &str) -> Option<&CitacaoAcordao> {
        self.entries
            .iter()
            .find(|(nome, _)| nome == chave)
            .map(|(_, citacao)| citacao)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for AcordaosSimilares {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (chave, citacao) in &self.entries {
            map.serialize_entry(chave, citacao)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AcordaosSimilares {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = AcordaosSimilares;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of similar ruling citations")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::new();
                while let Some(entry) = access.next_entry::<String, CitacaoAcordao>()? {
                    entries.push(entry);
                }
                Ok(AcordaosSimilares { entries })
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicacaoEstruturada {
    pub meio_pub: Option<String>,
    pub data_publicacao: Option<String>,
    pub pagina_publicacao: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenciaLegislativa {
    #[serde(rename = "LEG")]
    pub leg: String,
    #[serde(rename = "ANO")]
    pub ano: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orgao_emissor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leg_sigla: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leg_extenso: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero_sumula: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artigos: Vec<Artigo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artigo {
    pub numero: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detalhes: Option<DetalhesArtigo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetalhesArtigo {
    #[serde(rename = "PAR", default, skip_serializing_if = "Option::is_none")]
    pub paragrafo: Option<String>,
    #[serde(rename = "INC", default, skip_serializing_if = "Option::is_none")]
    pub inciso: Option<String>,
    #[serde(rename = "LET", default, skip_serializing_if = "Option::is_none")]
    pub letra: Option<String>,
    #[serde(rename = "ITEM", default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(rename = "NUM", default, skip_serializing_if = "Option::is_none")]
    pub num: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecaoComplementar {
    pub secao: String,
    pub termos: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Acordao {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sigla_classe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero_processo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_publicacao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisprudencia_citada: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referencias_legislativas: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acordaos_similares: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub informacoes_complementares: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termos_auxiliares: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publicacao_estruturada: Option<PublicacaoEstruturada>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisprudencia_citada_estruturada: Option<JurisprudenciaCitada>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referencias_legislativas_estruturadas: Option<Vec<ReferenciaLegislativa>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acordaos_similares_estruturados: Option<AcordaosSimilares>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub informacoes_complementares_estruturadas: Option<Vec<SecaoComplementar>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termos_auxiliares_estruturados: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessCounts {
    pub espelho_files: usize,
    pub files_processed: usize,
    pub files_failed: usize,
    pub acordaos_processed: usize,
    pub index_entries: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessReport {
    pub report_version: u32,
    pub started_at: String,
    pub finished_at: String,
    pub input_directory: String,
    pub output_directory: String,
    pub counts: ProcessCounts,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CorpusInventoryManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub source_directory: String,
    pub file_count: usize,
    pub unreadable_file_count: usize,
    pub acordao_count: usize,
    pub index_entries: usize,
}

fn is_false(value: &bool) -> bool {
    !*value
}
