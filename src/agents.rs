/// Assistants a user can talk to. The set is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, poise::ChoiceParameter)]
pub enum AgentKind {
    /// Answers from the local tables first, searching online only as a last resort.
    #[default]
    #[name = "LexAprendiz"]
    LexAprendiz,
    /// Goes to the external legal sources before the local tables.
    #[name = "Pesquisa"]
    Pesquisa,
}

pub struct AgentProfile {
    pub name: &'static str,
    pub description: &'static str,
}

impl AgentKind {
    pub const ALL: [AgentKind; 2] = [AgentKind::LexAprendiz, AgentKind::Pesquisa];

    pub fn profile(self) -> AgentProfile {
        match self {
            AgentKind::LexAprendiz => AgentProfile {
                name: "LexAprendiz",
                description: "Agente especializado em legislação da aprendizagem no Brasil",
            },
            AgentKind::Pesquisa => AgentProfile {
                name: "Pesquisa",
                description: "Agente de pesquisa em fontes oficiais (Planalto e TST) sobre a lei da aprendizagem",
            },
        }
    }

    pub fn searches_first(self) -> bool {
        matches!(self, AgentKind::Pesquisa)
    }
}
