use quizapp_lib::Term;

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// One line per term: `  12  word  definition`
pub fn render_term_line(term: &Term, use_color: bool) -> String {
    if use_color {
        format!(
            "{}{:>4}{}  {}{}{}  {}",
            Color::GRAY,
            term.id,
            Color::RESET,
            Color::BOLD,
            term.word,
            Color::RESET,
            term.definition
        )
    } else {
        format!("{:>4}  {}  {}", term.id, term.word, term.definition)
    }
}

/// Word as a header followed by its wrapped definition
pub fn render_term(term: &Term, use_color: bool) -> String {
    let mut lines = Vec::new();
    if use_color {
        lines.push(format!("{}{}{} {}#{}{}", Color::BOLD, term.word, Color::RESET, Color::DIM, term.id, Color::RESET));
    } else {
        lines.push(format!("{} #{}", term.word, term.id));
    }
    lines.push(String::new());
    lines.extend(wrap_lines(&term.definition, "  ", 80));
    lines.join("\n")
}

/// Word-wrap text to a given width with a prefix
fn wrap_lines(text: &str, prefix: &str, width: usize) -> Vec<String> {
    let mut result = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            result.push(String::new());
            continue;
        }

        let effective_width = width.saturating_sub(prefix.len());
        let mut line = String::new();

        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line = word.to_string();
            } else if line.len() + 1 + word.len() > effective_width {
                result.push(format!("{}{}", prefix, line));
                line = word.to_string();
            } else {
                line.push(' ');
                line.push_str(word);
            }
        }

        if !line.is_empty() {
            result.push(format!("{}{}", prefix, line));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_term_plain() {
        let term = Term::new(2, "dog", "a canine");
        assert_eq!(render_term(&term, false), "dog #2\n\n  a canine");
        assert_eq!(render_term_line(&term, false), "   2  dog  a canine");
    }

    #[test]
    fn test_wrap_lines() {
        let lines = wrap_lines("one two three four", "- ", 10);
        assert_eq!(lines, vec!["- one two", "- three", "- four"]);
    }
}
