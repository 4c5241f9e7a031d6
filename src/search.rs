use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::future::join_all;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

/// One hit from an external legal source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalReference {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// Best-effort lookup of legal texts outside the local tables.
#[async_trait]
pub trait LegalSearch: Send + Sync {
    async fn search_legal_text(&self, query: &str) -> Result<Vec<LegalReference>>;
}

/// Federal statutes with a stable page on planalto.gov.br, keyed by the term
/// that must appear in the question.
const KNOWN_STATUTES: &[(&str, &str)] = &[
    ("lei 10.097", "http://www.planalto.gov.br/ccivil_03/leis/l10097.htm"),
    (
        "decreto 5.598",
        "http://www.planalto.gov.br/ccivil_03/_ato2004-2006/2005/decreto/d5598.htm",
    ),
    ("clt", "http://www.planalto.gov.br/ccivil_03/decreto-lei/del5452.htm"),
];

/// TST precedents on apprenticeship. The court has no public search API, so
/// these are matched locally against the question words.
const TST_PRECEDENTS: &[(&str, &str, &str)] = &[
    (
        "Súmula 74 do TST - Aprendiz - Contribuição Sindical",
        "A contribuição sindical é devida pelos aprendizes, considerando-se a natureza do contrato de trabalho.",
        "https://www.tst.jus.br/sumulas",
    ),
    (
        "Orientação Jurisprudencial 422 - Aprendiz - Limitação de Idade",
        "O contrato de aprendizagem pode ser celebrado com pessoa até 24 anos incompletos.",
        "https://www.tst.jus.br/orientacoes-jurisprudenciais",
    ),
];

/// MTE portarias described locally, keyed by (number without dots, year).
const KNOWN_PORTARIAS: &[(&str, &str, &str, &str, &str)] = &[(
    "3872",
    "2023",
    "Portaria MTE nº 3.872, de 2023",
    "Estabelece diretrizes para fiscalização de contratos de aprendizagem pelos Auditores-Fiscais do Trabalho. \
     Art. 3º: inspeção dos contratos vigentes (I), anotações na CTPS (II), jornada de trabalho (III) \
     e frequência escolar (IV). Arts. 4º a 6º: cálculo da cota, penalidades e prazos de regularização. \
     Fundamentação: Lei 10.097/2000, Decreto 5.598/2005, CLT art. 634-A.",
    "https://www.in.gov.br/web/dou/-/portaria-mte-n-3.872-de-2023",
)];

const DOU_SEARCH_URL: &str = "https://www.in.gov.br/consulta/-/buscar/dou";
const DOU_BASE_URL: &str = "https://www.in.gov.br";
const DOU_MAX_RESULTS: usize = 3;

const SNIPPET_CHARS: usize = 300;

/// Words that mark a question as apprenticeship or labour law.
const LABOR_LAW_TERMS: &[&str] = &[
    "aprendiz",
    "aprendizagem",
    "lei 10.097",
    "decreto 5.598",
    "clt",
    "menor aprendiz",
    "contrato",
    "jovem aprendiz",
    "cota",
    "senai",
    "senac",
    "portaria",
    "mte",
    "ministério do trabalho",
    "fiscalização",
    "auditores fiscais",
    "aft",
    "fiscal do trabalho",
    "inspeção",
    "multa",
    "penalidade",
    "jurisprudência",
    "súmula",
    "orientação jurisprudencial",
    "tst",
    "programa de aprendizagem",
    "entidade formadora",
    "sistema s",
    "registro",
    "ctps",
    "salário",
    "jornada",
    "férias",
    "rescisão",
    "deficiente",
    "pessoa com deficiência",
    "inclusão",
    "acessibilidade",
    "trabalho",
];

/// Norm numbers matched against the original-case question.
const NORM_NUMBERS: &[&str] = &["10.097", "5.598", "3.872", "1199", "615", "723", "74", "422"];

/// Whether a question is worth sending to the external search at all.
pub fn looks_like_labor_law(query: &str) -> bool {
    let lower = query.to_lowercase();
    LABOR_LAW_TERMS.iter().any(|t| lower.contains(t)) || NORM_NUMBERS.iter().any(|n| query.contains(n))
}

static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap());
static PORTARIA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"portaria\s+(\d+\.?\d*)\s+.*?(\d{4})").unwrap());
static DOU_RESULT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?is)<div[^>]*class="[^"]*resultado-busca[^"]*"[^>]*>.*?<h3[^>]*>(.*?)</h3>.*?<a[^>]*href="([^"]+)""#,
    )
    .unwrap()
});
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// A portaria cited as "portaria <number> ... <year>".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortariaCitation {
    pub number: String,
    pub year: String,
}

/// First portaria citation in the lowercased question.
pub fn portaria_citation(query_lower: &str) -> Option<PortariaCitation> {
    let caps = PORTARIA.captures(query_lower)?;
    Some(PortariaCitation {
        number: caps[1].to_string(),
        year: caps[2].to_string(),
    })
}

/// Searches planalto.gov.br for known statutes and the DOU for cited
/// portarias, then adds the bundled portaria and TST entries.
pub struct PlanaltoSearch {
    client: reqwest::Client,
}

impl PlanaltoSearch {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("lex-aprendiz/0.1")
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    async fn fetch_statute(&self, key: &str, url: &str) -> Result<LegalReference> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?
            .error_for_status()?;
        let body = resp.bytes().await.context("Failed to read response body")?;
        let html = String::from_utf8_lossy(&body);

        let title = page_title(&html).unwrap_or_else(|| key.to_uppercase());
        let text = html2text::from_read(&body[..], 120).unwrap_or_else(|_| html.to_string());

        Ok(LegalReference {
            title,
            url: url.to_string(),
            snippet: snippet(&text),
        })
    }

    /// Top results of the Diário Oficial search for a cited portaria.
    async fn search_dou(&self, citation: &PortariaCitation) -> Result<Vec<LegalReference>> {
        let q = format!("portaria {} {}", citation.number, citation.year);
        let html = self
            .client
            .get(DOU_SEARCH_URL)
            .query(&[("q", q.as_str())])
            .send()
            .await
            .context("Failed to query DOU")?
            .error_for_status()?
            .text()
            .await
            .context("Failed to read DOU response")?;
        Ok(dou_results(&html))
    }
}

#[async_trait]
impl LegalSearch for PlanaltoSearch {
    async fn search_legal_text(&self, query: &str) -> Result<Vec<LegalReference>> {
        let lower = query.to_lowercase();

        let citation = portaria_citation(&lower);

        let fetches = KNOWN_STATUTES
            .iter()
            .filter(|(key, _)| lower.contains(key))
            .map(|(key, url)| self.fetch_statute(key, url));
        let dou = async {
            match &citation {
                Some(c) => Some(self.search_dou(c).await),
                None => None,
            }
        };
        let (statutes, dou) = futures::join!(join_all(fetches), dou);

        let mut results = Vec::new();
        for res in statutes {
            match res {
                Ok(reference) => results.push(reference),
                Err(e) => warn!("Statute fetch failed: {:#}", e),
            }
        }
        match dou {
            Some(Ok(found)) => results.extend(found),
            Some(Err(e)) => warn!("DOU search failed: {:#}", e),
            None => {}
        }
        if let Some(c) = &citation {
            results.extend(known_portaria(c));
        }

        results.extend(matching_precedents(&lower));
        debug!(count = results.len(), "Legal search finished");
        Ok(results)
    }
}

/// Bundled description of a cited portaria, when there is one.
fn known_portaria(citation: &PortariaCitation) -> Option<LegalReference> {
    let number = citation.number.replace('.', "");
    KNOWN_PORTARIAS
        .iter()
        .find(|(n, year, ..)| *n == number && *year == citation.year)
        .map(|(_, _, title, text, url)| LegalReference {
            title: title.to_string(),
            url: url.to_string(),
            snippet: text.to_string(),
        })
}

fn dou_results(html: &str) -> Vec<LegalReference> {
    DOU_RESULT
        .captures_iter(html)
        .filter_map(|caps| {
            let title = TAG.replace_all(&caps[1], "");
            let title = title.split_whitespace().collect::<Vec<_>>().join(" ");
            if title.is_empty() {
                return None;
            }
            let href = &caps[2];
            let url = if href.starts_with("http") {
                href.to_string()
            } else {
                format!("{}{}", DOU_BASE_URL, href)
            };
            Some(LegalReference {
                title,
                url,
                snippet: "Diário Oficial da União".to_string(),
            })
        })
        .take(DOU_MAX_RESULTS)
        .collect()
}

/// Precedents whose title or text contains any word of the question longer
/// than two characters.
fn matching_precedents(query_lower: &str) -> Vec<LegalReference> {
    let words: Vec<&str> = query_lower
        .split(|c: char| !c.is_alphanumeric() && c != '.')
        .filter(|w| w.chars().count() > 2)
        .collect();

    TST_PRECEDENTS
        .iter()
        .filter(|(title, text, _)| {
            let title = title.to_lowercase();
            let text = text.to_lowercase();
            words.iter().any(|w| title.contains(w) || text.contains(w))
        })
        .map(|(title, text, url)| LegalReference {
            title: title.to_string(),
            url: url.to_string(),
            snippet: text.to_string(),
        })
        .collect()
}

fn page_title(html: &str) -> Option<String> {
    let raw = TITLE.captures(html)?.get(1)?.as_str();
    let title = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    (!title.is_empty()).then_some(title)
}

/// First `SNIPPET_CHARS` characters of the page text, whitespace collapsed.
fn snippet(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= SNIPPET_CHARS {
        return collapsed;
    }
    let cut: String = collapsed.chars().take(SNIPPET_CHARS).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_terms() {
        assert!(looks_like_labor_law("Qual o salário do aprendiz?"));
        assert!(looks_like_labor_law("O que diz a Súmula do TST?"));
        assert!(looks_like_labor_law("art. 1199"));
        assert!(!looks_like_labor_law("receita de bolo de cenoura"));
        assert!(!looks_like_labor_law("zzz qqq"));
    }

    #[test]
    fn test_precedents_filtered_by_words() {
        let hits = matching_precedents("limitação de idade");
        assert_eq!(hits.len(), 1);
        assert!(hits[0].title.starts_with("Orientação Jurisprudencial 422"));

        let hits = matching_precedents("contribuição sindical do aprendiz");
        // "aprendiz" is in both titles
        assert_eq!(hits.len(), 2);

        assert!(matching_precedents("zzz qqq").is_empty());
    }

    #[test]
    fn test_short_words_ignored() {
        // "de" appears in both texts but is too short to count
        assert!(matching_precedents("de").is_empty());
    }

    #[test]
    fn test_portaria_citation() {
        assert_eq!(
            portaria_citation("o que diz a portaria 3.872 de 2023?"),
            Some(PortariaCitation {
                number: "3.872".to_string(),
                year: "2023".to_string(),
            })
        );
        assert_eq!(
            portaria_citation("portaria 615 publicada em 2007").map(|c| c.number),
            Some("615".to_string())
        );
        // year is required
        assert!(portaria_citation("portaria 3.872").is_none());
        assert!(portaria_citation("qual a cota de aprendizes").is_none());
    }

    #[test]
    fn test_known_portaria() {
        for number in ["3.872", "3872"] {
            let found = known_portaria(&PortariaCitation {
                number: number.to_string(),
                year: "2023".to_string(),
            })
            .unwrap();
            assert_eq!(found.title, "Portaria MTE nº 3.872, de 2023");
            assert!(found.url.starts_with("https://www.in.gov.br/"));
            assert!(found.snippet.contains("Auditores-Fiscais"));
        }
        assert!(known_portaria(&PortariaCitation {
            number: "3.872".to_string(),
            year: "2022".to_string(),
        })
        .is_none());
    }

    #[test]
    fn test_dou_results() {
        let html = r#"
            <div class="resultado-busca">
              <h3><b>PORTARIA Nº 3.872</b>, DE 21 DE DEZEMBRO DE 2023</h3>
              <a href="/web/dou/-/portaria-3872">ver</a>
            </div>
            <div class="resultado-busca"><h3> </h3><a href="/vazio">x</a></div>
            <div class="resultado-busca"><h3>Outra</h3><a href="https://www.in.gov.br/x">x</a></div>
        "#;
        let found = dou_results(html);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].title, "PORTARIA Nº 3.872, DE 21 DE DEZEMBRO DE 2023");
        assert_eq!(found[0].url, "https://www.in.gov.br/web/dou/-/portaria-3872");
        assert_eq!(found[1].url, "https://www.in.gov.br/x");
        assert!(dou_results("<html></html>").is_empty());
    }

    #[tokio::test]
    async fn test_portaria_reference_survives_failed_dou_search() {
        // the DOU request cannot complete within 1ms; the bundled entry is still returned
        let search = PlanaltoSearch::new(Duration::from_millis(1)).unwrap();
        let hits = search
            .search_legal_text("Portaria 3.872 de 2023")
            .await
            .unwrap();
        assert!(hits.iter().any(|h| h.title == "Portaria MTE nº 3.872, de 2023"));
    }

    #[test]
    fn test_precedent_words_split_on_punctuation() {
        // "idade?" and "(sindical)" still count once punctuation is dropped
        assert_eq!(matching_precedents("qual a idade?").len(), 1);
        assert_eq!(matching_precedents("contribuição (sindical)").len(), 1);
        // whitespace-only splitting would keep "idade,aprendiz" as one word
        assert_eq!(matching_precedents("idade,aprendiz").len(), 2);
    }

    #[test]
    fn test_page_title() {
        let html = "<html><head><TITLE>\n  L10097\n</TITLE></head><body></body></html>";
        assert_eq!(page_title(html).as_deref(), Some("L10097"));
        assert!(page_title("<html><title> </title></html>").is_none());
        assert!(page_title("<html></html>").is_none());
    }

    #[test]
    fn test_snippet_truncates_on_chars() {
        let long = "ação ".repeat(200);
        let s = snippet(&long);
        assert!(s.ends_with("..."));
        assert!(s.chars().count() <= SNIPPET_CHARS + 3);

        assert_eq!(snippet("  Lei   nº 10.097  "), "Lei nº 10.097");
    }

    #[tokio::test]
    async fn test_precedent_only_search_needs_no_network() {
        let search = PlanaltoSearch::new(Duration::from_secs(1)).unwrap();
        let hits = search
            .search_legal_text("aprendiz até 24 anos incompletos")
            .await
            .unwrap();
        assert!(hits.iter().all(|h| h.url.starts_with("https://www.tst.jus.br")));
        assert!(!hits.is_empty());
    }
}
