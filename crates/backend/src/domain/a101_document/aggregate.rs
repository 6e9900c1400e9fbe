use std::collections::HashSet;

/// A blank-line-delimited paragraph of an uploaded document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// `<source_file>_<index>`
    pub id: String,
    pub source_file: String,
    pub text: String,
    /// Lowercased search terms of `text`
    pub terms: HashSet<String>,
}

impl Chunk {
    pub fn new(source_file: &str, index: usize, text: String) -> Self {
        Self {
            id: format!("{}_{}", source_file, index),
            source_file: source_file.to_string(),
            terms: terms_of(&text).collect(),
            text,
        }
    }
}

/// Terms shorter than this are treated as noise (articles, prepositions)
const MIN_TERM_CHARS: usize = 3;

/// Lowercased alphanumeric runs of `text`
pub fn terms_of(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= MIN_TERM_CHARS)
        .map(|t| t.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_id_and_terms() {
        let chunk = Chunk::new("contrato.txt", 2, "El PLAZO de entrega: 30 días.".to_string());
        assert_eq!(chunk.id, "contrato.txt_2");
        assert!(chunk.terms.contains("plazo"));
        assert!(chunk.terms.contains("días"));
        assert!(chunk.terms.contains("entrega"));
        assert!(!chunk.terms.contains("el"));
        assert!(!chunk.terms.contains("30"));
    }
}
