/// Option registry
///
/// The fixed vocabularies the recommendation form offers, as the backend
/// models were trained on them. These tables are the single source of truth
/// for validation: the encoder rejects any selection value not listed here.
/// The labels are wire values, so they must match the training data exactly.

/// Agile method labels, addressable individually by the encoder.
pub mod methods {
    pub const SCRUM: &str = "Scrum";
    pub const KANBAN: &str = "Kanban";
    pub const LEAN: &str = "Lean";
    pub const SAFE: &str = "Safe";
    pub const XP: &str = "XP";
    pub const SCRUMBAN: &str = "ScrumBan";
}

/// Ritual labels. The parenthetical in the daily label is part of the
/// label itself, not a qualifier to strip.
pub mod rituals {
    pub const PLANNING: &str = "Reunião de Planejamento";
    pub const REVIEW: &str = "Sprint Review";
    pub const WEEKLY: &str = "Reunião Semanal";
    pub const DAILY: &str = "Reunião Diária (daily)";
    pub const RETRO: &str = "Retrospectiva";
}

/// Metric category labels.
pub mod categories {
    pub const SCHEDULE: &str = "Gestão de Tempo e Progresso";
    pub const PEOPLE: &str = "Gestão de Equipes";
    pub const PRODUCT: &str = "Desempenho do Produto";
    pub const PROCESS: &str = "Eficiência dos Processos";
    pub const TECHNOLOGY: &str = "Soluções Tecnológicas";
    pub const CUSTOMER: &str = "Satisfação e Experiência do Cliente";
}

pub const ROLES: &[&str] = &[
    "Team leader",
    "Product manager",
    "Scrum master",
    "Engineering Manager",
    "Project Manager",
    "Product owner",
    "Desenvolvedor(a)",
    "Technical leader",
    "Agile Master",
    "IT Director",
    "Agile Coach",
    "Gerente de Serviços",
    "Customer success",
    "Superintendente",
    "Pesquisador",
    "Head comercial",
    "Governança",
    "Digital Analytics",
    "DevOps/SRE",
    "Consultor de implantação",
    "Arquiteto de software",
    "Administrador de Dados, DBA",
    "CTO",
    "CIO",
    "CEO",
];

/// Ordered from least to most experience.
pub const EXPERIENCE_BRACKETS: &[&str] = &["0 a 5", "6 a 9", "10 a 20", "Mais de 20"];

pub const COMPANY_SIZES: &[&str] = &[
    "Microempresa",
    "Pequena empresa",
    "Média empresa",
    "Grande empresa",
];

pub const AGILE_METHODS: &[&str] = &[
    methods::SCRUM,
    methods::KANBAN,
    methods::LEAN,
    methods::SAFE,
    methods::XP,
    methods::SCRUMBAN,
];

pub const RITUALS: &[&str] = &[
    rituals::PLANNING,
    rituals::REVIEW,
    rituals::WEEKLY,
    rituals::DAILY,
    rituals::RETRO,
];

pub const CATEGORIES: &[&str] = &[
    categories::SCHEDULE,
    categories::PEOPLE,
    categories::PRODUCT,
    categories::PROCESS,
    categories::TECHNOLOGY,
    categories::CUSTOMER,
];

/// Containment check against one registry table.
pub fn known(table: &[&str], value: &str) -> bool {
    table.iter().any(|entry| *entry == value)
}

/// Strips a trailing parenthetical qualifier from a company-size label,
/// e.g. "Grande empresa (>500 empregados)" becomes "Grande empresa".
/// Labels without a qualifier pass through unchanged.
pub fn strip_size_qualifier(label: &str) -> &str {
    match label.rfind(" (") {
        Some(idx) if label.ends_with(')') => label[..idx].trim_end(),
        _ => label.trim(),
    }
}
