use std::fmt;

/// Closed age interval, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    pub min_age: u32,
    pub max_age: u32,
}

impl AgeRange {
    pub fn contains(&self, age: u32) -> bool {
        self.min_age <= age && age <= self.max_age
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} a {} anos", self.min_age, self.max_age)
    }
}

/// Occupational group, e.g. `tecnologia` / "Tecnologia da Informação".
#[derive(Debug, Clone)]
pub struct Area {
    pub key: String,
    pub name: String,
}

/// One CONAP apprenticeship program.
#[derive(Debug, Clone)]
pub struct ProgramRecord {
    pub area_key: String,
    /// Catalog code, unique across the catalog.
    pub number: String,
    pub name: String,
    pub description: String,
    /// CBO codes, `DDDD-DD`.
    pub occupational_codes: Vec<String>,
    pub age_range: AgeRange,
    pub training_hours: String,
    pub duration: String,
    /// Sistema S short codes, uppercase.
    pub sponsoring_institutions: Vec<String>,
}

/// Occupational family ("arco ocupacional") spanning several areas.
#[derive(Debug, Clone)]
pub struct OccupationalFamily {
    pub key: String,
    pub name: String,
    pub areas: Vec<String>,
    pub related_programs: Vec<String>,
}

/// Training institution of the Sistema S.
#[derive(Debug, Clone)]
pub struct Institution {
    pub code: String,
    pub name: String,
}

/// Which lookup strategy produced a list of programs, with what it extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramQuery {
    Name(String),
    OccupationalCode(String),
    Area(String),
    Institution(String),
    Age(u32),
}

/// Non-empty result of a catalog lookup.
#[derive(Debug, Clone)]
pub enum CatalogMatch<'a> {
    Programs {
        query: ProgramQuery,
        records: Vec<&'a ProgramRecord>,
    },
    Family(&'a OccupationalFamily),
    Overview,
}

impl CatalogMatch<'_> {
    /// Short label for logs.
    pub fn strategy(&self) -> &'static str {
        match self {
            CatalogMatch::Programs { query, .. } => match query {
                ProgramQuery::Name(_) => "program_name",
                ProgramQuery::OccupationalCode(_) => "occupational_code",
                ProgramQuery::Area(_) => "area",
                ProgramQuery::Institution(_) => "institution",
                ProgramQuery::Age(_) => "age",
            },
            CatalogMatch::Family(_) => "occupational_family",
            CatalogMatch::Overview => "overview",
        }
    }
}
