use crate::utils::markup;

/// Truncate to at most `max_chars` characters, marking the cut with "..."
pub fn truncate_string(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}

/// Single-line plain-text preview of markup content
pub fn content_preview(content: &str, max_chars: usize) -> String {
    let text = markup::text_content(content);
    let flattened = text.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_string(&flattened, max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("conteúdo longo demais", 10), "conteúd...");
        assert_eq!(truncate_string("abc", 2), "...");
    }

    #[test]
    fn test_content_preview_flattens_markup() {
        assert_eq!(content_preview("<p>one</p>\n<p>two   three</p>", 50), "one two three");
        assert_eq!(content_preview("<div>a</div> <div>b</div>", 50), "a b");
    }
}
