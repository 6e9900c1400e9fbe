use super::executor::NO_RELEVANT_INFO;

/// System instruction: answer from the retrieved context only
pub fn system_instruction() -> String {
    format!(
        "Basándote únicamente en el contexto extraído de un documento, responde a la pregunta.\n\
         Si la respuesta no se encuentra en el contexto, di \"{NO_RELEVANT_INFO}\"."
    )
}

/// User turn carrying the context and the question
pub fn build_prompt(context: &str, question: &str) -> String {
    format!(
        "Contexto:\n\
         ---\n\
         {context}\n\
         ---\n\
         \n\
         Pregunta: {question}\n\
         \n\
         Respuesta:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_names_fallback_answer() {
        let instruction = system_instruction();
        assert!(instruction.contains("únicamente en el contexto"));
        assert!(instruction.contains(NO_RELEVANT_INFO));
    }

    #[test]
    fn test_prompt_contains_context_and_question() {
        let prompt = build_prompt("uno\n\ndos", "¿Qué?");
        assert!(prompt.contains("---\nuno\n\ndos\n---"));
        assert!(prompt.contains("Pregunta: ¿Qué?"));
        assert!(prompt.ends_with("Respuesta:"));
    }
}
