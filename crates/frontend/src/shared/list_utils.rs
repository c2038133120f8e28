/// Helpers shared by list pages (search highlighting)
use leptos::prelude::*;

/// Byte ranges of case-insensitive, non-overlapping matches of `filter` in
/// `text`.
///
/// Returns nothing when lowercasing changes the byte length of `text`; the
/// offsets would not map back onto the original string.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let filter_lower = filter.trim().to_lowercase();
    if filter_lower.is_empty() {
        return Vec::new();
    }

    let text_lower = text.to_lowercase();
    if text_lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! {
            <mark class="search-highlight">{text[start..end].to_string()}</mark>
        }.into_any());
        last_pos = end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("John Doe", "john"), vec![(0, 4)]);
        assert_eq!(match_ranges("Anna Banana", "ANA"), vec![(6, 9)]);
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
    }

    #[test]
    fn test_match_ranges_empty_filter() {
        assert!(match_ranges("John Doe", "").is_empty());
        assert!(match_ranges("John Doe", "   ").is_empty());
        assert!(match_ranges("John Doe", "smith").is_empty());
    }
}
