//! Built-in CONAP snapshot: areas, programs, occupational families and the
//! Sistema S institutions.

pub(super) struct AreaDef {
    pub key: &'static str,
    pub name: &'static str,
    pub programs: &'static [ProgramDef],
}

pub(super) struct ProgramDef {
    pub number: &'static str,
    pub name: &'static str,
    pub codes: &'static [&'static str],
    pub description: &'static str,
    pub age_range: &'static str,
    pub training_hours: &'static str,
    pub duration: &'static str,
    pub institutions: &'static [&'static str],
}

pub(super) struct FamilyDef {
    pub key: &'static str,
    pub name: &'static str,
    pub areas: &'static [&'static str],
    pub related_programs: &'static [&'static str],
}

pub(super) const AREAS: &[AreaDef] = &[
    AreaDef {
        key: "administracao",
        name: "Administração e Comércio",
        programs: &[
            ProgramDef {
                number: "001",
                name: "Assistente Administrativo",
                codes: &["4110-10"],
                description: "Executa atividades de apoio nas áreas de recursos humanos, finanças, produção, logística e vendas",
                age_range: "14 a 24 anos",
                training_hours: "800 horas",
                duration: "12 meses",
                institutions: &["SENAC", "SENAI"],
            },
            ProgramDef {
                number: "002",
                name: "Vendedor",
                codes: &["5211-10"],
                description: "Vende mercadorias em estabelecimentos do comércio varejista ou atacadista",
                age_range: "16 a 24 anos",
                training_hours: "800 horas",
                duration: "12 meses",
                institutions: &["SENAC"],
            },
            ProgramDef {
                number: "003",
                name: "Operador de Caixa",
                codes: &["5211-25"],
                description: "Opera equipamentos de caixa registradora e sistemas de pagamento",
                age_range: "16 a 24 anos",
                training_hours: "400 horas",
                duration: "6 meses",
                institutions: &["SENAC"],
            },
        ],
    },
    AreaDef {
        key: "metalurgia",
        name: "Indústria Metalúrgica",
        programs: &[
            ProgramDef {
                number: "101",
                name: "Soldador",
                codes: &["7244-20"],
                description: "Prepara e solda peças de metal usando processos de soldagem",
                age_range: "16 a 24 anos",
                training_hours: "1200 horas",
                duration: "18 meses",
                institutions: &["SENAI"],
            },
            ProgramDef {
                number: "102",
                name: "Mecânico Industrial",
                codes: &["9144-15"],
                description: "Executa manutenção preventiva e corretiva em máquinas e equipamentos industriais",
                age_range: "16 a 24 anos",
                training_hours: "1600 horas",
                duration: "24 meses",
                institutions: &["SENAI"],
            },
        ],
    },
    AreaDef {
        key: "tecnologia",
        name: "Tecnologia da Informação",
        programs: &[
            ProgramDef {
                number: "201",
                name: "Operador de Computador",
                codes: &["4121-05"],
                description: "Opera sistemas computacionais e executa procedimentos de entrada e saída de dados",
                age_range: "16 a 24 anos",
                training_hours: "800 horas",
                duration: "12 meses",
                institutions: &["SENAI", "SENAC"],
            },
            ProgramDef {
                number: "202",
                name: "Auxiliar de Suporte Técnico",
                codes: &["3171-20"],
                description: "Presta suporte técnico em informática, instala e configura equipamentos",
                age_range: "16 a 24 anos",
                training_hours: "1000 horas",
                duration: "15 meses",
                institutions: &["SENAI"],
            },
        ],
    },
    AreaDef {
        key: "construcao",
        name: "Construção Civil",
        programs: &[
            ProgramDef {
                number: "301",
                name: "Pedreiro",
                codes: &["7152-10"],
                description: "Constrói, reforma e repara construções de alvenaria",
                age_range: "16 a 24 anos",
                training_hours: "800 horas",
                duration: "12 meses",
                institutions: &["SENAI"],
            },
            ProgramDef {
                number: "302",
                name: "Eletricista de Instalações",
                codes: &["9513-05"],
                description: "Instala, mantém e repara instalações elétricas prediais e industriais",
                age_range: "18 a 24 anos",
                training_hours: "1200 horas",
                duration: "18 meses",
                institutions: &["SENAI"],
            },
        ],
    },
    AreaDef {
        key: "saude",
        name: "Saúde",
        programs: &[
            ProgramDef {
                number: "401",
                name: "Auxiliar de Farmácia",
                codes: &["5151-20"],
                description: "Auxilia no atendimento farmacêutico e controle de medicamentos",
                age_range: "18 a 24 anos",
                training_hours: "800 horas",
                duration: "12 meses",
                institutions: &["SENAC"],
            },
            ProgramDef {
                number: "402",
                name: "Recepcionista de Consultório Médico",
                codes: &["4221-05"],
                description: "Recepciona pacientes e executa atividades administrativas em estabelecimentos de saúde",
                age_range: "16 a 24 anos",
                training_hours: "600 horas",
                duration: "9 meses",
                institutions: &["SENAC"],
            },
        ],
    },
    AreaDef {
        key: "logistica",
        name: "Logística e Transporte",
        programs: &[
            ProgramDef {
                number: "501",
                name: "Auxiliar de Logística",
                codes: &["4141-05"],
                description: "Auxilia nas atividades de recepção, armazenagem e expedição de materiais",
                age_range: "16 a 24 anos",
                training_hours: "800 horas",
                duration: "12 meses",
                institutions: &["SENAI", "SENAT"],
            },
            ProgramDef {
                number: "502",
                name: "Conferente de Carga e Descarga",
                codes: &["4141-20"],
                description: "Confere cargas, verifica documentos e controla movimentação de mercadorias",
                age_range: "18 a 24 anos",
                training_hours: "600 horas",
                duration: "9 meses",
                institutions: &["SENAT"],
            },
        ],
    },
    AreaDef {
        key: "agronegocio",
        name: "Agronegócio",
        programs: &[
            ProgramDef {
                number: "601",
                name: "Auxiliar Agropecuário",
                codes: &["6220-05"],
                description: "Auxilia em atividades de produção agrícola e pecuária",
                age_range: "14 a 24 anos",
                training_hours: "800 horas",
                duration: "12 meses",
                institutions: &["SENAR"],
            },
            ProgramDef {
                number: "602",
                name: "Operador de Máquinas Agrícolas",
                codes: &["8411-05"],
                description: "Opera máquinas e implementos agrícolas para preparo do solo e colheita",
                age_range: "18 a 24 anos",
                training_hours: "1000 horas",
                duration: "15 meses",
                institutions: &["SENAR"],
            },
        ],
    },
];

pub(super) const FAMILIES: &[FamilyDef] = &[
    FamilyDef {
        key: "gestao_negocios",
        name: "Gestão e Negócios",
        areas: &["Administração", "Comércio", "Marketing", "Finanças"],
        related_programs: &["001", "002", "003"],
    },
    FamilyDef {
        key: "industria",
        name: "Indústria",
        areas: &["Metalurgia", "Mecânica", "Eletroeletrônica"],
        related_programs: &["101", "102", "302"],
    },
    FamilyDef {
        key: "informacao_comunicacao",
        name: "Informação e Comunicação",
        areas: &["Tecnologia da Informação", "Telecomunicações"],
        related_programs: &["201", "202"],
    },
    FamilyDef {
        key: "infraestrutura",
        name: "Infraestrutura",
        areas: &["Construção Civil", "Transporte"],
        related_programs: &["301", "302", "501", "502"],
    },
    FamilyDef {
        key: "recursos_naturais",
        name: "Recursos Naturais",
        areas: &["Agropecuária", "Pesca", "Mineração"],
        related_programs: &["601", "602"],
    },
    FamilyDef {
        key: "servicos",
        name: "Serviços",
        areas: &["Saúde", "Educação", "Turismo"],
        related_programs: &["401", "402"],
    },
];

pub(super) const INSTITUTIONS: &[(&str, &str)] = &[
    ("SENAI", "Serviço Nacional de Aprendizagem Industrial"),
    ("SENAC", "Serviço Nacional de Aprendizagem Comercial"),
    ("SENAT", "Serviço Nacional de Aprendizagem do Transporte"),
    ("SENAR", "Serviço Nacional de Aprendizagem Rural"),
    ("SESCOOP", "Serviço Nacional de Aprendizagem do Cooperativismo"),
];

/// Program names recognised verbatim in a question.
pub(super) const KNOWN_PROGRAM_NAMES: &[&str] = &[
    "assistente administrativo",
    "vendedor",
    "soldador",
    "pedreiro",
    "eletricista",
];

/// Free-text synonyms mapped to area keys, checked in order.
pub(super) const AREA_SYNONYMS: &[(&str, &str)] = &[
    ("administração", "administracao"),
    ("comércio", "administracao"),
    ("metalúrgica", "metalurgia"),
    ("tecnologia", "tecnologia"),
    ("informática", "tecnologia"),
    ("construção", "construcao"),
    ("saúde", "saude"),
    ("logística", "logistica"),
    ("transporte", "logistica"),
    ("agronegócio", "agronegocio"),
    ("agricultura", "agronegocio"),
];

/// Family names accepted after the word "arco".
pub(super) const FAMILY_TERMS: &[&str] = &[
    "gestão",
    "indústria",
    "informação",
    "infraestrutura",
    "recursos naturais",
    "serviços",
];

pub(super) const OVERVIEW_TERMS: &[&str] = &["áreas", "programas disponíveis", "catálogo", "conap"];
