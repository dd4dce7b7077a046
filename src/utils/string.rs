//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// `3 nodes`, `1 link`
pub fn counted(count: usize, word: &str) -> String {
    format!("{count} {}", pluralize(word, count))
}

/// Wrap `s` in double quotes, escaping embedded quotes and backslashes
pub fn quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("node", 0), "nodes");
        assert_eq!(pluralize("node", 1), "node");
        assert_eq!(pluralize("node", 5), "nodes");
    }

    #[test]
    fn test_counted() {
        assert_eq!(counted(1, "link"), "1 link");
        assert_eq!(counted(3, "node"), "3 nodes");
    }

    #[test]
    fn test_quoted() {
        assert_eq!(quoted("build"), "\"build\"");
        assert_eq!(quoted(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quoted(r"C:\temp"), r#""C:\\temp""#);
        assert_eq!(quoted(""), "\"\"");
    }
}
