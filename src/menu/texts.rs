//! Fixed user-visible texts

pub const WELCOME_BANNER: &str =
    "Oi, sou a Athena, assistente virtual da Corretora PlansCoop 🤖💜\n\n";

pub const MAIN_MENU_TITLE: &str = "Como posso te ajudar? Verifique as opções abaixo!";

pub const EXIT_LABEL: &str = "Sair";

pub const INVALID_OPTION: &str = "⚠️ Opção inválida. Por favor, escolha uma opção válida:\n\n";

pub const GOODBYE: &str = "👋 Obrigado por usar nossos serviços. Até logo!";

pub const NOT_IMPLEMENTED: &str = "Esta funcionalidade será implementada em breve.";

pub const UNAVAILABLE: &str = "⚠️ Desculpe, esta opção está temporariamente indisponível.";

pub const PROCESSING_ERROR: &str = "⚠️ Desculpe, ocorreu um erro ao processar sua solicitação.";

/// Footer appended to every submenu
pub const BACK_HINT: &str = "Digite 0 ou Q para voltar ao menu principal.";
