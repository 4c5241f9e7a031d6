pub mod loader;
mod topics;
pub mod types;

use crate::error::BuildError;
use types::Topic;

/// Ordered, immutable set of pre-written answers.
#[derive(Debug)]
pub struct KnowledgeBase {
    topics: Vec<Topic>,
}

impl KnowledgeBase {
    /// Validate and freeze `topics`. Registration order is kept: it decides ties.
    pub fn new(topics: Vec<Topic>) -> Result<Self, BuildError> {
        Ok(Self {
            topics: loader::validate(topics)?,
        })
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Topic with the strictly highest keyword score. The first topic
    /// registered wins a tie; a best score of zero is no match.
    pub fn best_topic(&self, query: &str) -> Option<&Topic> {
        let query_lower = query.to_lowercase();
        let mut best: Option<(&Topic, usize)> = None;

        for topic in &self.topics {
            let score = topic.score(&query_lower);
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((topic, score));
            }
        }

        best.map(|(topic, _)| topic)
    }

    /// Answer of the best-scoring topic, verbatim.
    pub fn find_best_answer(&self, query: &str) -> Option<&str> {
        self.best_topic(query).map(|t| t.answer.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(id: &str, keywords: &[&str]) -> Topic {
        Topic {
            id: id.to_string(),
            question: id.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            legal_refs: vec![],
            answer: format!("answer {}", id),
        }
    }

    fn kb(topics: Vec<Topic>) -> KnowledgeBase {
        KnowledgeBase::new(topics).unwrap()
    }

    #[test]
    fn test_empty_query_is_no_match() {
        let kb = loader::load(None).unwrap();
        assert!(kb.find_best_answer("").is_none());
    }

    #[test]
    fn test_single_keyword_substring() {
        let kb = kb(vec![topic("cota", &["cota"]), topic("salario", &["salário"])]);
        assert_eq!(
            kb.find_best_answer("Como calcular a cota de aprendizes?"),
            Some("answer cota")
        );
    }

    #[test]
    fn test_substring_not_word_match() {
        let kb = kb(vec![topic("cota", &["cota"])]);
        assert_eq!(kb.find_best_answer("cotas obrigatórias"), Some("answer cota"));
    }

    #[test]
    fn test_query_is_lowercased() {
        let kb = kb(vec![topic("gestante", &["gestante"])]);
        assert_eq!(kb.find_best_answer("APRENDIZ GESTANTE"), Some("answer gestante"));
    }

    #[test]
    fn test_tie_keeps_first_registered() {
        let kb = kb(vec![topic("a", &["x"]), topic("b", &["x"])]);
        assert_eq!(kb.find_best_answer("x"), Some("answer a"));
    }

    #[test]
    fn test_higher_score_wins_regardless_of_order() {
        let kb = kb(vec![topic("a", &["multa"]), topic("b", &["multa", "auto"])]);
        assert_eq!(kb.find_best_answer("multa por auto de infração"), Some("answer b"));
    }

    #[test]
    fn test_extra_term_keeps_winner() {
        let kb = kb(vec![
            topic("a", &["jornada", "horas"]),
            topic("b", &["horas", "extra"]),
        ]);
        assert_eq!(kb.find_best_answer("jornada de horas"), Some("answer a"));
        assert_eq!(
            kb.find_best_answer("jornada de horas, limite da jornada"),
            Some("answer a")
        );
        // b only overtakes once it strictly exceeds a
        assert_eq!(kb.find_best_answer("horas extra"), Some("answer b"));
    }

    #[test]
    fn test_duplicate_keywords_count_once() {
        let kb = kb(vec![topic("a", &["x", "x", "x"]), topic("b", &["x", "y"])]);
        assert_eq!(kb.find_best_answer("x y"), Some("answer b"));
    }

    #[test]
    fn test_unrecognised_tokens_no_match() {
        let kb = loader::load(None).unwrap();
        assert!(kb.find_best_answer("zzz qqq").is_none());
    }

    #[test]
    fn test_builtin_gestante_question() {
        let kb = loader::load(None).unwrap();
        let topic = kb.best_topic("Quais os direitos da aprendiz gestante?").unwrap();
        assert_eq!(topic.id, "aprendiz_gestante");
    }

    #[test]
    fn test_builtin_cota_question() {
        let kb = loader::load(None).unwrap();
        let topic = kb.best_topic("Como calcular a cota de aprendizes?").unwrap();
        assert_eq!(topic.id, "calculo_cota");
    }

    #[test]
    fn test_answers_are_returned_verbatim() {
        let kb = loader::load(None).unwrap();
        let topic = kb.best_topic("multa por descumprimento").unwrap();
        assert_eq!(kb.find_best_answer("multa por descumprimento"), Some(topic.answer.as_str()));
    }

    #[test]
    fn test_deterministic() {
        let kb = loader::load(None).unwrap();
        let q = "Qual a jornada de trabalho do aprendiz?";
        assert_eq!(kb.find_best_answer(q), kb.find_best_answer(q));
    }
}
