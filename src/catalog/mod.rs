pub mod extract;
mod records;
pub mod types;

use std::collections::HashSet;

use tracing::debug;

use crate::error::BuildError;
use records::{
    AREAS, AREA_SYNONYMS, FAMILIES, FAMILY_TERMS, INSTITUTIONS, KNOWN_PROGRAM_NAMES,
    OVERVIEW_TERMS,
};
use types::{Area, CatalogMatch, Institution, OccupationalFamily, ProgramQuery, ProgramRecord};

/// In-memory CONAP snapshot. Built once, read-only afterwards.
#[derive(Debug)]
pub struct Catalog {
    areas: Vec<Area>,
    programs: Vec<ProgramRecord>,
    families: Vec<OccupationalFamily>,
    institutions: Vec<Institution>,
}

impl Catalog {
    /// Build from the bundled snapshot, validating numbers, codes and age ranges.
    pub fn builtin() -> Result<Self, BuildError> {
        let mut areas = Vec::with_capacity(AREAS.len());
        let mut programs = Vec::new();
        let mut numbers = HashSet::new();

        for area in AREAS {
            areas.push(Area {
                key: area.key.to_string(),
                name: area.name.to_string(),
            });

            for def in area.programs {
                if !numbers.insert(def.number) {
                    return Err(BuildError::DuplicateProgramNumber(def.number.to_string()));
                }
                if let Some(code) = def.codes.iter().find(|c| !extract::is_occupational_code(c)) {
                    return Err(BuildError::InvalidOccupationalCode {
                        number: def.number.to_string(),
                        code: code.to_string(),
                    });
                }
                let age_range =
                    extract::age_range(def.age_range).ok_or_else(|| BuildError::InvalidAgeRange {
                        number: def.number.to_string(),
                        text: def.age_range.to_string(),
                    })?;

                programs.push(ProgramRecord {
                    area_key: area.key.to_string(),
                    number: def.number.to_string(),
                    name: def.name.to_string(),
                    description: def.description.to_string(),
                    occupational_codes: def.codes.iter().map(|c| c.to_string()).collect(),
                    age_range,
                    training_hours: def.training_hours.to_string(),
                    duration: def.duration.to_string(),
                    sponsoring_institutions: def.institutions.iter().map(|i| i.to_string()).collect(),
                });
            }
        }

        let families = FAMILIES
            .iter()
            .map(|f| OccupationalFamily {
                key: f.key.to_string(),
                name: f.name.to_string(),
                areas: f.areas.iter().map(|a| a.to_string()).collect(),
                related_programs: f.related_programs.iter().map(|n| n.to_string()).collect(),
            })
            .collect();

        let institutions = INSTITUTIONS
            .iter()
            .map(|(code, name)| Institution {
                code: code.to_string(),
                name: name.to_string(),
            })
            .collect();

        debug!(areas = areas.len(), programs = programs.len(), "catalog built");

        Ok(Self {
            areas,
            programs,
            families,
            institutions,
        })
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn area_name(&self, key: &str) -> Option<&str> {
        self.areas
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.name.as_str())
    }

    /// Area whose key equals `term` or whose display name contains it,
    /// ignoring case.
    pub fn find_area(&self, term: &str) -> Option<&Area> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return None;
        }
        self.areas
            .iter()
            .find(|a| a.key == term || a.name.to_lowercase().contains(&term))
    }

    pub fn programs(&self) -> &[ProgramRecord] {
        &self.programs
    }

    pub fn programs_in_area(&self, key: &str) -> Vec<&ProgramRecord> {
        self.programs.iter().filter(|p| p.area_key == key).collect()
    }

    pub fn families(&self) -> &[OccupationalFamily] {
        &self.families
    }

    pub fn institutions(&self) -> &[Institution] {
        &self.institutions
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    /// Resolve a question against the catalog. Strategies run in a fixed
    /// order and the first one with a non-empty result wins; `None` means
    /// nothing in the catalog applies.
    pub fn find_programs(&self, query: &str) -> Option<CatalogMatch<'_>> {
        let lower = query.to_lowercase();

        self.by_name(&lower)
            .or_else(|| self.by_occupational_code(query))
            .or_else(|| self.by_area(&lower))
            .or_else(|| self.by_institution(&lower))
            .or_else(|| self.by_age(&lower))
            .or_else(|| self.by_family(&lower))
            .or_else(|| {
                OVERVIEW_TERMS
                    .iter()
                    .any(|t| lower.contains(t))
                    .then_some(CatalogMatch::Overview)
            })
    }

    fn by_name(&self, lower: &str) -> Option<CatalogMatch<'_>> {
        KNOWN_PROGRAM_NAMES
            .iter()
            .filter(|name| lower.contains(*name))
            .find_map(|name| {
                let records: Vec<_> = self
                    .programs
                    .iter()
                    .filter(|p| p.name.to_lowercase().contains(name))
                    .collect();
                programs(ProgramQuery::Name(name.to_string()), records)
            })
    }

    fn by_occupational_code(&self, query: &str) -> Option<CatalogMatch<'_>> {
        let code = extract::occupational_code(query)?;
        let records = self
            .programs
            .iter()
            .filter(|p| p.occupational_codes.iter().any(|c| c == code))
            .collect();
        programs(ProgramQuery::OccupationalCode(code.to_string()), records)
    }

    fn by_area(&self, lower: &str) -> Option<CatalogMatch<'_>> {
        AREA_SYNONYMS
            .iter()
            .filter(|(synonym, _)| lower.contains(synonym))
            .find_map(|(_, key)| {
                programs(ProgramQuery::Area(key.to_string()), self.programs_in_area(key))
            })
    }

    fn by_institution(&self, lower: &str) -> Option<CatalogMatch<'_>> {
        self.institutions
            .iter()
            .filter(|i| lower.contains(&i.code.to_lowercase()))
            .find_map(|i| {
                let records = self
                    .programs
                    .iter()
                    .filter(|p| p.sponsoring_institutions.contains(&i.code))
                    .collect();
                programs(ProgramQuery::Institution(i.code.clone()), records)
            })
    }

    fn by_age(&self, lower: &str) -> Option<CatalogMatch<'_>> {
        let age = extract::age(lower)?;
        let records = self
            .programs
            .iter()
            .filter(|p| p.age_range.contains(age))
            .collect();
        programs(ProgramQuery::Age(age), records)
    }

    fn by_family(&self, lower: &str) -> Option<CatalogMatch<'_>> {
        if !lower.contains("arco") {
            return None;
        }
        FAMILY_TERMS
            .iter()
            .filter(|term| lower.contains(*term))
            .find_map(|term| {
                self.families.iter().find(|f| {
                    f.name.to_lowercase().contains(term)
                        || f.areas.iter().any(|a| a.to_lowercase().contains(term))
                })
            })
            .map(CatalogMatch::Family)
    }
}

fn programs(query: ProgramQuery, records: Vec<&ProgramRecord>) -> Option<CatalogMatch<'_>> {
    (!records.is_empty()).then_some(CatalogMatch::Programs { query, records })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn numbers(m: Option<CatalogMatch<'_>>) -> Vec<String> {
        match m {
            Some(CatalogMatch::Programs { records, .. }) => {
                records.iter().map(|p| p.number.clone()).collect()
            }
            other => panic!("expected programs, got {:?}", other),
        }
    }

    #[test]
    fn test_builtin_snapshot() {
        let c = catalog();
        assert_eq!(c.len(), 15);
        assert_eq!(c.areas().len(), 7);
        assert_eq!(c.families().len(), 6);
        assert_eq!(c.institutions().len(), 5);
        assert_eq!(c.area_name("saude"), Some("Saúde"));
        assert!(c.area_name("pesca").is_none());
    }

    #[test]
    fn test_find_area() {
        let c = catalog();
        assert_eq!(c.find_area("construcao").map(|a| a.key.as_str()), Some("construcao"));
        assert_eq!(c.find_area("Logística").map(|a| a.key.as_str()), Some("logistica"));
        assert_eq!(c.find_area("INDÚSTRIA").map(|a| a.key.as_str()), Some("metalurgia"));
        assert!(c.find_area("pesca").is_none());
        assert!(c.find_area("  ").is_none());
    }

    #[test]
    fn test_program_numbers_unique() {
        let c = catalog();
        let set: HashSet<_> = c.programs().iter().map(|p| &p.number).collect();
        assert_eq!(set.len(), c.len());
    }

    #[test]
    fn test_known_name() {
        let c = catalog();
        let m = c.find_programs("Quero ser soldador");
        assert!(matches!(
            &m,
            Some(CatalogMatch::Programs { query: ProgramQuery::Name(n), .. }) if n == "soldador"
        ));
        assert_eq!(numbers(m), vec!["101"]);
    }

    #[test]
    fn test_known_name_partial() {
        assert_eq!(numbers(catalog().find_programs("curso de eletricista")), vec!["302"]);
    }

    #[test]
    fn test_occupational_code_exact() {
        let c = catalog();
        assert_eq!(numbers(c.find_programs("Qual o CBO 4110-10?")), vec!["001"]);
        assert_eq!(numbers(c.find_programs("4141-20")), vec!["502"]);
    }

    fn record(number: &str, code: &str) -> ProgramRecord {
        ProgramRecord {
            area_key: "administracao".to_string(),
            number: number.to_string(),
            name: format!("Programa {}", number),
            description: String::new(),
            occupational_codes: vec![code.to_string()],
            age_range: types::AgeRange {
                min_age: 14,
                max_age: 24,
            },
            training_hours: "400h".to_string(),
            duration: "12 meses".to_string(),
            sponsoring_institutions: vec!["SENAC".to_string()],
        }
    }

    #[test]
    fn test_occupational_code_ignores_longer_lookalike() {
        let c = Catalog {
            areas: Vec::new(),
            programs: vec![record("900", "4110-105"), record("901", "4110-10")],
            families: Vec::new(),
            institutions: Vec::new(),
        };
        assert_eq!(numbers(c.find_programs("CBO 4110-10")), vec!["901"]);

        let only_lookalike = Catalog {
            areas: Vec::new(),
            programs: vec![record("900", "4110-105")],
            families: Vec::new(),
            institutions: Vec::new(),
        };
        assert!(only_lookalike.find_programs("CBO 4110-10").is_none());
    }

    #[test]
    fn test_unknown_code_falls_through() {
        let c = catalog();
        // no record has 9999-99; nothing else in the query applies
        assert!(c.find_programs("cbo 9999-99").is_none());
    }

    #[test]
    fn test_area_synonym() {
        let c = catalog();
        assert_eq!(numbers(c.find_programs("Programas de informática")), vec!["201", "202"]);
        assert_eq!(numbers(c.find_programs("área de transporte")), vec!["501", "502"]);
        assert_eq!(
            numbers(c.find_programs("Programas de administração")),
            vec!["001", "002", "003"]
        );
    }

    #[test]
    fn test_institution() {
        let c = catalog();
        let m = c.find_programs("Cursos do SENAT");
        assert!(matches!(
            &m,
            Some(CatalogMatch::Programs { query: ProgramQuery::Institution(i), .. }) if i == "SENAT"
        ));
        assert_eq!(numbers(m), vec!["501", "502"]);
    }

    #[test]
    fn test_institution_without_programs_falls_through() {
        assert!(catalog().find_programs("sescoop").is_none());
    }

    #[test]
    fn test_age_inclusive_bounds() {
        let c = catalog();
        for age in [16, 24] {
            let found = numbers(c.find_programs(&format!("programas para {} anos", age)));
            assert!(found.contains(&"002".to_string()), "age {}", age);
        }
        let found = numbers(c.find_programs("programas para 14 anos"));
        assert_eq!(found, vec!["001", "601"]);
    }

    #[test]
    fn test_age_out_of_range() {
        let c = catalog();
        assert!(c.find_programs("programas para 25 anos").is_none());
        assert!(c.find_programs("programas para 13 anos").is_none());
    }

    #[test]
    fn test_family() {
        let c = catalog();
        match c.find_programs("arco de infraestrutura") {
            Some(CatalogMatch::Family(f)) => {
                assert_eq!(f.key, "infraestrutura");
                assert_eq!(f.related_programs.len(), 4);
            }
            other => panic!("unexpected {:?}", other),
        }
        // family term without "arco" is not a family lookup
        assert!(c.find_programs("infraestrutura").is_none());
    }

    #[test]
    fn test_overview() {
        let c = catalog();
        assert!(matches!(c.find_programs("Quais áreas existem?"), Some(CatalogMatch::Overview)));
        assert!(matches!(c.find_programs("o que é o CONAP"), Some(CatalogMatch::Overview)));
    }

    #[test]
    fn test_strategy_order() {
        let c = catalog();
        // name beats institution
        assert_eq!(numbers(c.find_programs("vendedor pelo senai")), vec!["002"]);
        // code beats area
        assert_eq!(numbers(c.find_programs("tecnologia cbo 7152-10")), vec!["301"]);
        // area beats age
        assert_eq!(
            numbers(c.find_programs("saúde para 16 anos")),
            vec!["401", "402"]
        );
    }

    #[test]
    fn test_no_match() {
        assert!(catalog().find_programs("zzz qqq").is_none());
        assert!(catalog().find_programs("").is_none());
    }
}
