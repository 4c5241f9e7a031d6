use crate::catalog::types::{CatalogMatch, OccupationalFamily, ProgramQuery, ProgramRecord};
use crate::catalog::Catalog;
use crate::search::LegalReference;

use super::texts;

/// Markdown card for one program.
pub fn program(record: &ProgramRecord, area_name: &str) -> String {
    format!(
        "**📋 {}**\n\
         **Área:** {}\n\
         **Número CONAP:** {}\n\
         **CBO(s):** {}\n\
         **Descrição:** {}\n\
         **Faixa Etária:** {}\n\
         **Carga Horária:** {}\n\
         **Duração:** {}\n\
         **Escolas Sistema S:** {}\n",
        record.name,
        area_name,
        record.number,
        record.occupational_codes.join(", "),
        record.description,
        record.age_range,
        record.training_hours,
        record.duration,
        record.sponsoring_institutions.join(", "),
    )
}

pub fn family(family: &OccupationalFamily) -> String {
    format!(
        "**🎯 Arco Ocupacional: {}**\n\
         **Áreas Abrangidas:** {}\n\
         **Programas Relacionados:** {} programas disponíveis\n",
        family.name,
        family.areas.join(", "),
        family.related_programs.len(),
    )
}

/// Listing of every area and Sistema S institution.
pub fn overview(catalog: &Catalog) -> String {
    let areas: Vec<String> = catalog
        .areas()
        .iter()
        .map(|a| format!("• {}", a.name))
        .collect();
    let institutions: Vec<String> = catalog
        .institutions()
        .iter()
        .map(|i| format!("• **{}** - {}", i.code, i.name))
        .collect();

    format!(
        "{}\n\n**Áreas Disponíveis:**\n{}\n\n**🏫 Escolas do Sistema S:**\n{}\n\n{}",
        texts::OVERVIEW_TITLE,
        areas.join("\n"),
        institutions.join("\n"),
        texts::OVERVIEW_EXAMPLES,
    )
}

/// Render a catalog hit, listing at most `max_listed` programs.
pub fn catalog_match(catalog: &Catalog, found: &CatalogMatch<'_>, max_listed: usize) -> String {
    match found {
        CatalogMatch::Programs { query, records } => {
            let cards: Vec<String> = records
                .iter()
                .take(max_listed)
                .map(|r| program(r, catalog.area_name(&r.area_key).unwrap_or(r.area_key.as_str())))
                .collect();
            let body = cards.join("\n");
            match query {
                ProgramQuery::Institution(code) => format!("**Programas do {}:**\n{}", code, body),
                ProgramQuery::Age(age) => {
                    format!("**Programas adequados para {} anos:**\n{}", age, body)
                }
                _ => body,
            }
        }
        CatalogMatch::Family(f) => family(f),
        CatalogMatch::Overview => overview(catalog),
    }
}

pub fn search_results(query: &str, references: &[LegalReference]) -> String {
    let mut out = format!(
        "{}\n\n**📋 Consulta:** \"{}\"\n\n**🔍 FONTES ENCONTRADAS:**\n",
        texts::SEARCH_HEADER,
        query.trim()
    );
    for r in references {
        out.push_str(&format!("\n**[{}]({})**\n", r.title, r.url));
        if !r.snippet.is_empty() {
            out.push_str(&format!("> {}\n", r.snippet));
        }
    }
    out.push('\n');
    out.push_str(texts::SEARCH_FOOTER);
    out
}
