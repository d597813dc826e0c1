//! Price tables: a single image reply, any input goes back

use super::{MenuModule, ModuleError, ModuleOutcome};
use crate::reply::Reply;
use crate::session::SessionState;
use async_trait::async_trait;

pub(crate) const DEFAULT_IMAGE_URL: &str = "https://example.com/imagem.jpg";

const CAPTION: &str = "Aqui está a tabela com nossos planos. \n\n Digite qualquer coisa para voltar ao menu principal!";

#[derive(Debug, Clone)]
pub struct TablesModule {
    image_url: String,
}

impl TablesModule {
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
        }
    }
}

#[async_trait]
impl MenuModule for TablesModule {
    fn menu(&self) -> Result<Reply, ModuleError> {
        if self.image_url.is_empty() {
            return Err(ModuleError::Unavailable(
                "price table image not configured".to_string(),
            ));
        }
        Ok(Reply::image(self.image_url.clone(), CAPTION))
    }

    async fn execute(
        &self,
        _input: &str,
        _session: &mut SessionState,
    ) -> Result<ModuleOutcome, ModuleError> {
        Ok(ModuleOutcome::ReturnToMain)
    }
}
