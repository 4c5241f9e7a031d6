//! Fixed reply texts.

pub const FALLBACK: &str = "**🎯 Tópicos Disponíveis no LexAprendiz:**

1. **👶 Direitos da Gestante:** Pergunte sobre direitos da aprendiz gestante
2. **📊 Cota de Aprendizes:** Como calcular cotas obrigatórias
3. **⚖️ Penalidades:** Multas e fiscalizações
4. **📋 CONAP:** Programas e Sistema S

**Exemplos de Perguntas:**
- \"Quais os direitos da aprendiz gestante?\"
- \"Como calcular cota de aprendizes?\"
- \"Penalidades por não contratar aprendizes\"
- \"Programas do SENAI\"
- \"CBO 4110-10\"

**Base:** Lei 10.097/2000, CLT, CONAP 2021";

pub const OVERVIEW_TITLE: &str = "**📚 CONAP - Catálogo Nacional de Programas de Aprendizagem**";

pub const OVERVIEW_EXAMPLES: &str = "**💡 Exemplos de consulta:**
• \"Programas de administração\"
• \"Cursos do SENAI\"
• \"Programas para 16 anos\"
• \"CBO 4110-10\"";

pub const SEARCH_HEADER: &str = "⚖️ **LexAprendiz** - Especialista em Legislação da Aprendizagem";

pub const SEARCH_FOOTER: &str = "*Resultado de pesquisa em fontes oficiais. Para análise de casos concretos, recomenda-se consulta com advogado especializado.*";
