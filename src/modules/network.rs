//! Care network lookup by city

use super::{MenuModule, ModuleError, ModuleOutcome};
use crate::menu::{texts, MenuDescriptor};
use crate::reply::Reply;
use crate::session::SessionState;
use async_trait::async_trait;

const TITLE: &str = "Rede de atendimento 🏥\nEm qual cidade você precisa de atendimento?";
const PROMPT: &str = "Digite o número ou o nome da cidade.";

/// A city with its accredited providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub name: &'static str,
    pub providers: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct NetworkModule {
    cities: &'static [City],
}

impl NetworkModule {
    pub const fn new(cities: &'static [City]) -> Self {
        Self { cities }
    }

    fn render_menu(&self) -> String {
        let menu = (1u32..)
            .zip(self.cities)
            .fold(MenuDescriptor::new(TITLE), |menu, (key, city)| {
                menu.with_option(key, city.name)
            });
        format!("{}\n{PROMPT}\n{}", menu.render(), texts::BACK_HINT)
    }

    /// Match by list number or by name, ignoring case
    fn find(&self, input: &str) -> Option<&City> {
        if let Ok(index) = input.parse::<usize>() {
            return index.checked_sub(1).and_then(|i| self.cities.get(i));
        }
        let wanted = input.to_lowercase();
        self.cities
            .iter()
            .find(|city| city.name.to_lowercase() == wanted)
    }

    fn render_city(city: &City) -> String {
        let providers: String = city
            .providers
            .iter()
            .map(|provider| format!("• {provider}\n"))
            .collect();
        format!(
            "🏥 Rede de atendimento em {}:\n\n{providers}\nInforme outra cidade ou {}",
            city.name,
            lowercase_first(texts::BACK_HINT)
        )
    }
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[async_trait]
impl MenuModule for NetworkModule {
    fn menu(&self) -> Result<Reply, ModuleError> {
        if self.cities.is_empty() {
            return Err(ModuleError::Unavailable(
                "no cities in the care network".to_string(),
            ));
        }
        Ok(Reply::text(self.render_menu()))
    }

    async fn execute(
        &self,
        input: &str,
        session: &mut SessionState,
    ) -> Result<ModuleOutcome, ModuleError> {
        let choice = input.trim();
        if choice == "0" {
            return Ok(ModuleOutcome::ReturnToMain);
        }

        match self.find(choice) {
            Some(city) => {
                session.selected_city = Some(city.name.to_string());
                session.previous_input = Some(choice.to_string());
                Ok(ModuleOutcome::text(Self::render_city(city)))
            }
            None => Ok(ModuleOutcome::text(format!(
                "Não encontrei atendimento em \"{choice}\".\n\n{}",
                self.render_menu()
            ))),
        }
    }
}
