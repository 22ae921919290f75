use std::collections::HashMap;

use crate::model::Acordao;

#[derive(Debug, Default)]
pub struct AcordaoIndex {
    entries: HashMap<(String, String), String>,
}

impl AcordaoIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, acordao: &Acordao) {
        let Some(id) = acordao.id.as_deref() else {
            return;
        };

        let tipo = acordao.sigla_classe.as_deref().unwrap_or("").trim();
        let numero = acordao.numero_processo.as_deref().unwrap_or("").trim();

        if tipo.is_empty() || numero.is_empty() {
            return;
        }

        self.entries
            .insert((tipo.to_string(), numero.to_string()), id.to_string());
    }

    pub fn add_all<'a>(&mut self, acordaos: impl IntoIterator<Item = &'a Acordao>) {
        for acordao in acordaos {
            self.add(acordao);
        }
    }

    pub fn get_id(&self, tipo: &str, numero: &str) -> Option<&str> {
        let chave = (tipo.trim().to_string(), numero.trim().to_string());
        self.entries.get(&chave).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
