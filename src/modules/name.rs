//! Canonical module names

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Canonical identifier of a business module
///
/// Compared by equality only. Two names sharing a prefix never resolve to
/// each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModuleName {
    Token,
    Beneficiario,
    Orcamento,
    Cnpj,
    Plano,
    Tabelas,
    Rede,
    Links,
    Treinamento,
    Suporte,
    Parceiro,
    Cotacao,
    FaleComigo,
}

impl ModuleName {
    /// All modules in main-menu order
    pub const ALL: [ModuleName; 13] = [
        ModuleName::Token,
        ModuleName::Beneficiario,
        ModuleName::Orcamento,
        ModuleName::Cnpj,
        ModuleName::Plano,
        ModuleName::Tabelas,
        ModuleName::Rede,
        ModuleName::Links,
        ModuleName::Treinamento,
        ModuleName::Suporte,
        ModuleName::Parceiro,
        ModuleName::Cotacao,
        ModuleName::FaleComigo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModuleName::Token => "token",
            ModuleName::Beneficiario => "beneficiario",
            ModuleName::Orcamento => "orcamento",
            ModuleName::Cnpj => "cnpj",
            ModuleName::Plano => "plano",
            ModuleName::Tabelas => "tabelas",
            ModuleName::Rede => "rede",
            ModuleName::Links => "links",
            ModuleName::Treinamento => "treinamento",
            ModuleName::Suporte => "suporte",
            ModuleName::Parceiro => "parceiro",
            ModuleName::Cotacao => "cotacao",
            ModuleName::FaleComigo => "faleComigo",
        }
    }

    /// Main-menu option number in the standard layout
    pub fn option(self) -> u32 {
        match self {
            ModuleName::Token => 1,
            ModuleName::Beneficiario => 2,
            ModuleName::Orcamento => 3,
            ModuleName::Cnpj => 4,
            ModuleName::Plano => 5,
            ModuleName::Tabelas => 6,
            ModuleName::Rede => 7,
            ModuleName::Links => 8,
            ModuleName::Treinamento => 9,
            ModuleName::Suporte => 10,
            ModuleName::Parceiro => 11,
            ModuleName::Cotacao => 12,
            ModuleName::FaleComigo => 13,
        }
    }

    /// Main-menu label
    pub fn label(self) -> &'static str {
        match self {
            ModuleName::Token => "Quero gerar um token ✅",
            ModuleName::Beneficiario => "Consultar Beneficiário 👤",
            ModuleName::Orcamento => "Consultar Orçamento 💸",
            ModuleName::Cnpj => "Consultar CNPJ",
            ModuleName::Plano => "Plano odontológico 🦷",
            ModuleName::Tabelas => "Tabelas 📉",
            ModuleName::Rede => "Rede de atendimento 🏥",
            ModuleName::Links => "Links para seu cliente ✔",
            ModuleName::Treinamento => "Treinamento 💻",
            ModuleName::Suporte => "Suporte 🧑‍🔧",
            ModuleName::Parceiro => "Cadastre-se para ser um parceiro da SL-91 💜",
            ModuleName::Cotacao => "Calcular cotação 📈",
            ModuleName::FaleComigo => "Fale comigo 💜",
        }
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown module name: {0}")]
pub struct UnknownModuleName(pub String);

impl FromStr for ModuleName {
    type Err = UnknownModuleName;

    /// Exact, case-sensitive match on the canonical name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownModuleName(s.to_string()))
    }
}
