pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current.chars().count() + 1 + word.chars().count();
            if current.is_empty() {
                current = word.to_string();
            } else if needed <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Shortens `s` to at most `max_len` characters, marking the cut with `…`.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len == 0 {
        return String::new();
    }

    let mut out: String = s.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_short_text() {
        assert_eq!(wrap("no pairs written", 20), vec!["no pairs written"]);
    }

    #[test]
    fn wrap_long_text() {
        let result = wrap("distance tool exited with status 3", 16);
        assert_eq!(result, vec!["distance tool", "exited with", "status 3"]);
    }

    #[test]
    fn wrap_keeps_line_breaks() {
        let result = wrap("first line\nsecond line", 40);
        assert_eq!(result, vec!["first line", "second line"]);
    }

    #[test]
    fn wrap_empty() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn truncate_short() {
        assert_eq!(truncate("output.com", 16), "output.com");
    }

    #[test]
    fn truncate_exact() {
        assert_eq!(truncate("Pseudobond.pd", 13), "Pseudobond.pd");
    }

    #[test]
    fn truncate_long() {
        assert_eq!(truncate("attribute.txt", 8), "attribu…");
    }

    #[test]
    fn truncate_unicode() {
        assert_eq!(truncate("Å Å Å Å", 4), "Å Å…");
    }

    #[test]
    fn truncate_zero() {
        assert_eq!(truncate("abc", 0), "");
    }
}
