//! Content of the standard deployment

use super::{City, InfoModule, ModuleName, Topic};

pub(crate) const NETWORK_CITIES: &[City] = &[
    City {
        name: "Recife",
        providers: &[
            "Centro Odontológico Boa Vista",
            "Clínica Sorriso Derby",
            "Hospital Santa Clara",
        ],
    },
    City {
        name: "Olinda",
        providers: &["Clínica Odonto Olinda", "Policlínica Casa Caiada"],
    },
    City {
        name: "Jaboatão dos Guararapes",
        providers: &["Clínica Piedade Saúde", "Odonto Candeias"],
    },
    City {
        name: "Caruaru",
        providers: &["Clínica Agreste Odonto"],
    },
];

const TOKEN: &[Topic] = &[
    Topic {
        label: "Gerar token para o beneficiário",
        answer: "Para gerar o token, acesse o app PlansCoop com o CPF do beneficiário e toque em \"Gerar token\". O código vale por 10 minutos.",
    },
    Topic {
        label: "O token não chegou",
        answer: "Confira se o celular cadastrado está correto. Se o token não chegar em 5 minutos, gere um novo pelo app.",
    },
];

const BENEFICIARIO: &[Topic] = &[
    Topic {
        label: "Consultar situação do beneficiário",
        answer: "Envie o CPF ou o número da carteirinha do beneficiário para o e-mail cadastro@planscoop.com.br e retornaremos em até 1 dia útil.",
    },
    Topic {
        label: "Segunda via da carteirinha",
        answer: "A carteirinha digital fica disponível no app PlansCoop, em \"Meu plano\".",
    },
];

const ORCAMENTO: &[Topic] = &[
    Topic {
        label: "Status de um orçamento",
        answer: "Orçamentos são analisados em até 2 dias úteis. Acompanhe o status no portal do corretor, em \"Orçamentos\".",
    },
    Topic {
        label: "Documentos necessários",
        answer: "Para liberar o orçamento envie RG, CPF e comprovante de residência de cada beneficiário.",
    },
];

const CNPJ: &[Topic] = &[
    Topic {
        label: "Planos empresariais",
        answer: "Empresas com CNPJ ativo há mais de 6 meses podem contratar a partir de 2 vidas.",
    },
    Topic {
        label: "Consultar cadastro do CNPJ",
        answer: "Informe o CNPJ no portal do corretor, em \"Empresas\", para ver a situação cadastral.",
    },
];

const PLANO: &[Topic] = &[
    Topic {
        label: "Coberturas do plano odontológico",
        answer: "O plano cobre consultas, limpeza, restaurações, extrações e urgência 24h, sem carência para urgências.",
    },
    Topic {
        label: "Carências",
        answer: "Urgências: 24 horas. Procedimentos clínicos: 30 dias. Próteses: 180 dias.",
    },
];

const LINKS: &[Topic] = &[
    Topic {
        label: "Link de contratação online",
        answer: "Envie ao seu cliente: https://planscoop.com.br/contratar",
    },
    Topic {
        label: "Link do app PlansCoop",
        answer: "Android e iOS: https://planscoop.com.br/app",
    },
];

const TREINAMENTO: &[Topic] = &[
    Topic {
        label: "Agenda de treinamentos",
        answer: "Os treinamentos acontecem toda terça-feira às 19h, online. Inscreva-se no portal do corretor.",
    },
    Topic {
        label: "Materiais de apoio",
        answer: "Apresentações e lâminas dos planos estão no portal do corretor, em \"Materiais\".",
    },
];

const SUPORTE: &[Topic] = &[
    Topic {
        label: "Problemas de acesso ao portal",
        answer: "Use \"Esqueci minha senha\" na tela de login. Se o problema continuar, escreva para suporte@planscoop.com.br.",
    },
    Topic {
        label: "Horário de atendimento",
        answer: "Nosso suporte atende de segunda a sexta, das 8h às 18h.",
    },
];

const PARCEIRO: &[Topic] = &[
    Topic {
        label: "Como me tornar parceiro",
        answer: "Preencha o cadastro em https://planscoop.com.br/parceiro com seu CPF ou CNPJ e registro SUSEP.",
    },
    Topic {
        label: "Comissionamento",
        answer: "As regras de comissionamento são enviadas por e-mail após a aprovação do cadastro.",
    },
];

const COTACAO: &[Topic] = &[
    Topic {
        label: "Cotação individual",
        answer: "Para cotação individual informe a idade de cada beneficiário no simulador: https://planscoop.com.br/cotacao",
    },
    Topic {
        label: "Cotação empresarial",
        answer: "Para empresas, envie o CNPJ e a quantidade de vidas para comercial@planscoop.com.br.",
    },
];

const FALE_COMIGO: &[Topic] = &[
    Topic {
        label: "Falar com um atendente",
        answer: "Um atendente vai continuar esta conversa em instantes. Aguarde, por favor 💜",
    },
    Topic {
        label: "Telefone e e-mail",
        answer: "Telefone: (81) 4000-0000. E-mail: contato@planscoop.com.br",
    },
];

/// Info module for a name; modules with their own flow get no topics.
pub(crate) fn info_module(name: ModuleName) -> InfoModule {
    let topics = match name {
        ModuleName::Token => TOKEN,
        ModuleName::Beneficiario => BENEFICIARIO,
        ModuleName::Orcamento => ORCAMENTO,
        ModuleName::Cnpj => CNPJ,
        ModuleName::Plano => PLANO,
        ModuleName::Links => LINKS,
        ModuleName::Treinamento => TREINAMENTO,
        ModuleName::Suporte => SUPORTE,
        ModuleName::Parceiro => PARCEIRO,
        ModuleName::Cotacao => COTACAO,
        ModuleName::FaleComigo => FALE_COMIGO,
        ModuleName::Tabelas | ModuleName::Rede => &[],
    };
    InfoModule::new(name, name.label(), topics)
}
