/// Render a plain-text answer as HTML for a single paragraph.
///
/// Text is escaped first; every line break (`\n`, `\r\n`, `\r`) then
/// becomes a `<br>` element, so no literal newline is left.
pub fn answer_markup(answer: &str) -> String {
    let normalized = answer.replace("\r\n", "\n").replace('\r', "\n");
    normalized
        .split('\n')
        .map(escape_html)
        .collect::<Vec<_>>()
        .join("<br>")
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_breaks_become_br() {
        let html = answer_markup("line1\nline2");
        assert_eq!(html, "line1<br>line2");
        assert!(!html.contains('\n'));
    }

    #[test]
    fn test_every_break_is_replaced() {
        assert_eq!(answer_markup("a\n\nb\r\nc\rd\n"), "a<br><br>b<br>c<br>d<br>");
    }

    #[test]
    fn test_single_line_unchanged() {
        assert_eq!(answer_markup("Sin saltos"), "Sin saltos");
    }

    #[test]
    fn test_markup_in_answer_is_escaped() {
        assert_eq!(
            answer_markup("<b>x</b> & \"y\"\nz"),
            "&lt;b&gt;x&lt;/b&gt; &amp; &quot;y&quot;<br>z"
        );
    }
}
