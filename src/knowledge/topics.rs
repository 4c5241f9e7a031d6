//! Built-in topic table. Registration order is significant: on equal scores
//! the earlier topic wins.

use super::types::Topic;

struct TopicDef {
    id: &'static str,
    question: &'static str,
    keywords: &'static [&'static str],
    legal_refs: &'static [&'static str],
    answer: &'static str,
}

const TOPICS: &[TopicDef] = &[
    TopicDef {
        id: "calculo_cota",
        question: "Como calcular a cota de aprendizes",
        keywords: &["cota", "calcul", "percentual", "auditores fiscais", "base de calculo", "5%", "15%"],
        legal_refs: &["CLT art. 429", "Decreto 5.598/2005", "Portaria 3.872/2023"],
        answer: r#"⚖️ **LexAprendiz** - Cálculo da Cota de Aprendizes

**FUNDAMENTAÇÃO LEGAL:** CLT art. 429, Decreto nº 5.598/2005 (arts. 10 a 12), Portaria MTE nº 3.872/2023.

**1. Base de cálculo**
- Empregados em funções que demandam formação profissional, conforme a CBO
- Excluídos: funções de nível técnico ou superior, cargos de direção, gerência ou confiança (CLT arts. 62 e 224, §2º), temporários (Lei 6.019/1973), aprendizes já contratados, afastados pelo INSS e terceirizados

**2. Percentual**
- Entre 5% (mínimo) e 15% (máximo) da base, por estabelecimento (CNPJ)

**3. Arredondamento**
- Frações são sempre arredondadas para cima (Decreto 5.598/2005, art. 11, §1º)

**Exemplo:** 200 empregados, 30 excluídos → base 170 → 170 × 5% = 8,5 → **9 aprendizes**

**Dispensadas (art. 12):** ME, EPP e entidades sem fins lucrativos voltadas à educação profissional.

**Fontes:**
- [CLT - Art. 429](http://www.planalto.gov.br/ccivil_03/decreto-lei/del5452.htm)
- [Decreto 5.598/2005](http://www.planalto.gov.br/ccivil_03/_ato2004-2006/2005/decreto/d5598.htm)
- [Portaria MTE 3.872/2023](https://www.in.gov.br/web/dou/-/portaria-mte-n-3.872-de-2023)"#,
    },
    TopicDef {
        id: "portaria_3872_2023",
        question: "Portaria MTE 3.872/2023 - Nova regulamentação",
        keywords: &["portaria", "3872", "2023", "cnap", "cadastro nacional", "catálogo"],
        legal_refs: &["Portaria MTE 3.872/2023", "CNAP", "Catálogo Nacional"],
        answer: r#"⚖️ **LexAprendiz** - Portaria MTE nº 3.872/2023

**FUNDAMENTAÇÃO LEGAL:** Portaria MTE nº 3.872, de 21/12/2023 (Processo nº 19968.100086/2023-74).

**Principais inovações**
1. **CNAP** - Cadastro Nacional de Aprendizagem Profissional obrigatório, integrado ao gov.br, substituindo o Sistema Juventude Web
2. **Catálogo Nacional** - cursos padronizados por ocupação CBO, com carga horária mínima e máxima
3. **Fiscalização modernizada** - procedimentos digitalizados e cruzamento de dados
4. **Obrigações das empresas** - cadastro no CNAP, dados atualizados mensalmente e comprovação da cota

**Prazo de adequação:** 180 dias da publicação.

**Fonte:** [Portaria MTE 3.872/2023](https://www.in.gov.br/web/dou/-/portaria-mte-n-3.872-de-2023)"#,
    },
    TopicDef {
        id: "idade_aprendiz",
        question: "Idade para contrato de aprendizagem",
        keywords: &["idade", "menor", "jovem", "14 anos", "24 anos", "limite etário"],
        legal_refs: &["CLT art. 428", "Lei 10.097/2000", "Decreto 11.479/2023"],
        answer: r#"⚖️ **LexAprendiz** - Idade para Contrato de Aprendizagem

**Idade mínima: 14 anos**
- CLT art. 428, caput; CF/88 art. 7º, XXXIII; Lei 10.097/2000

**Idade máxima: 24 anos incompletos**
- CLT art. 428, §5º
- Pessoa com deficiência não tem limite máximo de idade

**Jurisprudência:** OJ 422 do TST - o contrato pode ser celebrado com pessoa até 24 anos incompletos.

**Fontes:**
- [CLT - Art. 428](http://www.planalto.gov.br/ccivil_03/decreto-lei/del5452.htm)
- [Lei 10.097/2000](http://www.planalto.gov.br/ccivil_03/leis/l10097.htm)"#,
    },
    TopicDef {
        id: "duracao_contrato",
        question: "Duração do contrato de aprendizagem",
        keywords: &["duração", "prazo", "tempo", "contrato", "anos", "máximo"],
        legal_refs: &["CLT art. 428", "Decreto 5.598/2005"],
        answer: r#"⚖️ **LexAprendiz** - Duração do Contrato de Aprendizagem

**Prazo máximo: 2 anos**
- CLT art. 428, §3º: o contrato não poderá ser estipulado por mais de 2 anos
- Decreto 5.598/2005, art. 3º confirma o prazo

**Exceção:** para pessoa com deficiência não há limite de duração (art. 3º, parágrafo único).

**Fontes:**
- [CLT - Art. 428](http://www.planalto.gov.br/ccivil_03/decreto-lei/del5452.htm)
- [Decreto 5.598/2005](http://www.planalto.gov.br/ccivil_03/_ato2004-2006/2005/decreto/d5598.htm)"#,
    },
    TopicDef {
        id: "exclusoes_legais",
        question: "Exclusões do cálculo da cota",
        keywords: &["exclusões", "técnico", "superior", "gerência", "confiança", "perigoso", "insalubre"],
        legal_refs: &["CLT art. 429 §1º", "Decreto 5.598/2005", "Portaria 88/2009"],
        answer: r#"⚖️ **LexAprendiz** - Exclusões do Cálculo da Cota

**FUNDAMENTAÇÃO LEGAL:** CLT art. 429, §1º; Decreto 5.598/2005; Portaria MTE 88/2009.

**Excluídos da base de cálculo**
1. Funções que exigem formação técnica de nível médio ou superior
2. Cargos de direção, gerência e confiança (CLT art. 62, II)
3. Funções em locais perigosos ou insalubres para menores de 18 anos
4. Temporários (Lei 6.019/74) e terceirizados
5. Ambientes que comprometam a formação moral

**Fórmula**
```
Base de Cálculo = Total de Empregados - Exclusões Legais
Cota Mínima = 5% da Base
Cota Máxima = 15% da Base
```

**Importante:** frações de unidade obrigam à contratação de 1 aprendiz."#,
    },
    TopicDef {
        id: "salario_aprendiz",
        question: "Salário do aprendiz",
        keywords: &["salário", "remuneração", "mínimo", "proporcional", "hora"],
        legal_refs: &["CLT art. 428 §2º", "Decreto 11.864/2023"],
        answer: r#"⚖️ **LexAprendiz** - Salário do Aprendiz

**FUNDAMENTAÇÃO LEGAL:** CLT art. 428, §2º; Decreto 11.864/2023 (salário mínimo 2024: R$ 1.412,00).

**Regras**
- Garantido o salário mínimo hora, proporcional às horas trabalhadas
- Base 2024: R$ 1.412,00 ÷ 220h = R$ 6,42/hora
- 13º proporcional, férias coincidentes com as escolares, FGTS de 2% e vale-transporte
- Convenções coletivas podem prever valores superiores

**Exemplo (2024)**
```
Jornada: 6h/dia × 22 dias = 132h/mês
Salário: 132h × R$ 6,42 = R$ 847,44
FGTS: R$ 847,44 × 2% = R$ 16,95
```

**Vedação:** o aprendiz não pode receber menos que o proporcional ao mínimo."#,
    },
    TopicDef {
        id: "ead_aprendizagem",
        question: "Ensino à distância na aprendizagem",
        keywords: &["ead", "distância", "remoto", "online", "virtual", "covid"],
        legal_refs: &["Portaria 4.089/2021", "Portaria 1.019/2021"],
        answer: r#"⚖️ **LexAprendiz** - Ensino à Distância na Aprendizagem

**FUNDAMENTAÇÃO LEGAL:** Portaria SEPEC/ME 4.089/2021; Portaria MTP 1.019/2021.

**Autorizado a distância:** conteúdos teóricos, formação geral básica e conhecimentos técnicos.

**Obrigatoriamente presencial:** atividades práticas no ambiente de trabalho e avaliações práticas.

**Requisitos:** plataforma digital adequada, acompanhamento pedagógico, frequência eletrônica e material didático específico.

**Orientação:** o EAD é complementar, nunca substitutivo da experiência prática na empresa."#,
    },
    TopicDef {
        id: "fiscalizacao_auditoria",
        question: "Fiscalização pelos auditores fiscais",
        keywords: &["fiscalização", "auditores", "inspeção", "trabalho", "procedimentos"],
        legal_refs: &["IN SIT 146/2018", "Portaria 3.872/2023", "CLT art. 634-A"],
        answer: r#"⚖️ **LexAprendiz** - Fiscalização pelos Auditores Fiscais

**FUNDAMENTAÇÃO LEGAL:** IN SIT 146/2018; Portaria 3.872/2023; CLT art. 634-A.

**Roteiro de fiscalização**
1. Levantamento do quadro de empregados (CAGED)
2. Identificação das exclusões legais
3. Cálculo da cota obrigatória (5% a 15%, frações para cima)
4. Verificação dos contratos vigentes, matrícula e frequência
5. Conferência do cadastro no CNAP e da CBO dos cursos

**Infrações mais comuns:** cota mínima não cumprida, contratos irregulares, jornada excessiva e atividades inadequadas."#,
    },
    TopicDef {
        id: "penalidades",
        question: "Penalidades por descumprimento",
        keywords: &["multa", "penalidade", "infração", "sanção", "descumprimento", "auto"],
        legal_refs: &["CLT art. 634-A", "Portaria 671/2021"],
        answer: r#"⚖️ **LexAprendiz** - Penalidades por Descumprimento

**Multa administrativa (CLT art. 634-A)**
- 1 salário mínimo por aprendiz não contratado
- Reincidência: o dobro do valor

**Procedimento (Portaria 3.872/2023, art. 5º)**
- Notificação prévia para regularização
- Prazo de adequação de 90 dias
- Autuação em caso de descumprimento

**Fontes:**
- [CLT - Art. 634-A](http://www.planalto.gov.br/ccivil_03/decreto-lei/del5452.htm)
- [Portaria MTE 3.872/2023](https://www.in.gov.br/web/dou/-/portaria-mte-n-3.872-de-2023)"#,
    },
    TopicDef {
        id: "cnap_cadastro",
        question: "Cadastro Nacional de Aprendizagem Profissional",
        keywords: &["cnap", "cadastro", "nacional", "sistema", "juventude web"],
        legal_refs: &["Portaria 3.872/2023", "Portaria 723/2012"],
        answer: r#"⚖️ **LexAprendiz** - Cadastro Nacional de Aprendizagem Profissional

**FUNDAMENTAÇÃO LEGAL:** Portaria MTE 3.872/2023; Portaria MTE 723/2012.

**Finalidade:** cadastro nacional unificado, controle da cota e validação de cursos e entidades.

**Usuários:** empresas obrigadas, entidades formadoras (Sistema S, ONGs), MTE, MPT e auditores fiscais.

**Funcionalidades:** registro de contratos, consulta ao Catálogo Nacional, relatórios e integração com CAGED, RAIS e CTPS Digital via gov.br.

**Substituição:** o CNAP substitui o antigo Sistema Juventude Web desde 2023."#,
    },
    TopicDef {
        id: "entidades_formadoras",
        question: "Entidades de formação profissional",
        keywords: &["entidades", "senai", "senac", "senar", "sistema s", "ongs"],
        legal_refs: &["CLT art. 430", "Resolução CONANDA 164/2014"],
        answer: r#"⚖️ **LexAprendiz** - Entidades de Formação Profissional

**FUNDAMENTAÇÃO LEGAL:** CLT art. 430; Resolução CONANDA 164/2014; Decreto 5.598/2005.

**Ordem de prioridade**
1. **Sistema S:** SENAI, SENAC, SENAR, SENAT e SESCOOP
2. **Escolas técnicas** e institutos federais
3. **Entidades sem fins lucrativos** registradas no CONANDA

**Requisitos:** estrutura adequada, corpo docente qualificado, projeto pedagógico aprovado e certificação reconhecida.

**Responsabilidades:** formação técnico-profissional metódica, acompanhamento pedagógico e certificado de conclusão."#,
    },
    TopicDef {
        id: "trabalho_perigoso",
        question: "Trabalho perigoso e insalubre para menores",
        keywords: &["perigoso", "insalubre", "menor", "18 anos", "proibido", "lista"],
        legal_refs: &["Portaria 88/2009", "CLT art. 405"],
        answer: r#"⚖️ **LexAprendiz** - Trabalho Perigoso e Insalubre para Menores

**FUNDAMENTAÇÃO LEGAL:** Portaria MTE 88/2009; CLT art. 405; Decreto 6.481/2008.

**Proibido para menores de 18 anos**
- Explosivos, inflamáveis, eletricidade e produtos químicos
- Trabalho em altura acima de 2 metros e máquinas perigosas
- Agentes físicos nocivos, substâncias tóxicas e ruído excessivo
- Vigilância, condução de veículos e trabalho noturno (22h às 5h)
- Locais que sirvam bebidas alcoólicas ou comprometam a moralidade

**Objetivo:** proteção integral do desenvolvimento físico, mental, moral e social do adolescente."#,
    },
    TopicDef {
        id: "aprendiz_gestante",
        question: "Direitos da aprendiz gestante",
        keywords: &["gestante", "gravidez", "grávida", "maternidade", "licença", "afastamento", "direitos"],
        legal_refs: &["CLT art. 391-A a 396", "Lei 14.151/2021", "CLT art. 428"],
        answer: r#"⚖️ **LexAprendiz** - Direitos da Aprendiz Gestante

**FUNDAMENTAÇÃO LEGAL:** CLT arts. 391-A a 396; Lei 14.151/2021; CLT art. 428; ADCT art. 10, II, b.

1. **Estabilidade** desde a concepção até 5 meses após o parto, salvo justa causa
2. **Licença-maternidade** de 120 dias (180 dias no Programa Empresa Cidadã)
3. **Dispensa** para pelo menos 6 consultas e exames pré-natais
4. **Mudança de função** quando necessário, sem redução salarial
5. **Amamentação:** 2 intervalos de 30 minutos por dia até os 6 meses da criança
6. **Contrato:** suspenso durante a licença e prorrogado pelo período equivalente
7. **Vedados:** insalubridade, periculosidade, trabalho noturno e horas extras

**Importante:** a aprendiz tem dupla proteção, como gestante (CLT) e como aprendiz (Lei 10.097/2000); aplica-se a norma mais favorável."#,
    },
    TopicDef {
        id: "jornada_aprendiz",
        question: "Jornada de trabalho do aprendiz",
        keywords: &["jornada", "horário", "trabalho", "6 horas", "8 horas", "limite", "carga horária"],
        legal_refs: &["CLT art. 428 §1º", "CLT art. 432"],
        answer: r#"⚖️ **LexAprendiz** - Jornada de Trabalho do Aprendiz

**FUNDAMENTAÇÃO LEGAL:** CLT art. 432; Decreto 5.598/2005.

**Regra geral:** até 6 horas diárias e 30 semanais, somando teoria e prática, sem prorrogação.

**Exceção:** até 8 horas diárias para quem já concluiu o ensino fundamental, computadas as horas de aprendizagem teórica.

**Vedações**
- Horas extras e compensação de jornada
- Trabalho noturno (22h às 5h) para menores de 18 anos

**Controle:** registro de frequência na empresa e na entidade formadora."#,
    },
    TopicDef {
        id: "rescisao_antecipada",
        question: "Rescisão antecipada do contrato de aprendizagem",
        keywords: &["rescisão", "antecipada", "desempenho", "falta disciplinar", "ausência", "término"],
        legal_refs: &["CLT art. 433", "Súmula 331 TST"],
        answer: r#"⚖️ **LexAprendiz** - Rescisão Antecipada do Contrato

**FUNDAMENTAÇÃO LEGAL:** CLT art. 433; Lei 10.097/2000.

**Hipóteses legais**
1. Desempenho insuficiente ou inadaptação, com laudo da entidade formadora
2. Falta disciplinar grave
3. Ausência injustificada à escola que implique perda do ano letivo
4. A pedido do aprendiz

**Verbas**
- Justa causa: saldo de salário
- Sem justa causa: saldo, 13º e férias proporcionais + 1/3
- Término normal: verbas proporcionais e certificado, sem aviso prévio

**Ônus da prova:** cabe à empresa comprovar o motivo; na dúvida presume-se rescisão sem justa causa."#,
    },
];

pub(super) fn builtin_topics() -> Vec<Topic> {
    TOPICS
        .iter()
        .map(|def| Topic {
            id: def.id.to_string(),
            question: def.question.to_string(),
            keywords: def.keywords.iter().map(|k| k.to_string()).collect(),
            legal_refs: def.legal_refs.iter().map(|r| r.to_string()).collect(),
            answer: def.answer.to_string(),
        })
        .collect()
}
