//! Display rules for resume fields and job cards

/// Maximum number of description characters shown on a job card
pub const DESCRIPTION_EXCERPT_CHARS: usize = 100;

/// Split a camelCase key by inserting a space before every ASCII capital.
///
/// `fullName` becomes `full Name`; a key starting with a capital gets a
/// leading space and acronyms are split letter by letter (`URL` -> ` U R L`).
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Label of a resume table row: humanized key with its first letter capitalized
pub fn field_label(key: &str) -> String {
    let humanized = humanize_key(key);
    let mut chars = humanized.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First 100 characters of a description, always followed by "..."
pub fn description_excerpt(description: &str) -> String {
    let head: String = description.chars().take(DESCRIPTION_EXCERPT_CHARS).collect();
    format!("{}...", head)
}

/// Badge letter for a company; empty when the company is unknown
pub fn company_initial(company: Option<&str>) -> String {
    company
        .and_then(|c| c.chars().next())
        .map(String::from)
        .unwrap_or_default()
}

/// "company • location" subtitle; missing parts render as empty text
pub fn company_location_line(company: Option<&str>, location: Option<&str>) -> String {
    format!("{} • {}", company.unwrap_or(""), location.unwrap_or(""))
}

/// Optional badge text, shown only for non-empty values
pub fn badge_text(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

pub fn format_file_size(bytes: f64) -> String {
    format!("{:.2} KB", bytes / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("fullName"), "full Name");
        assert_eq!(humanize_key("jobInterests"), "job Interests");
        assert_eq!(humanize_key("skills"), "skills");
        assert_eq!(humanize_key("Name"), " Name");
        assert_eq!(humanize_key("URL"), " U R L");
        assert_eq!(humanize_key("last_date"), "last_date");
    }

    #[test]
    fn test_field_label() {
        assert_eq!(field_label("fullName"), "Full Name");
        assert_eq!(field_label("experience"), "Experience");
        assert_eq!(field_label("Name"), " Name");
        assert_eq!(field_label(""), "");
        assert_eq!(field_label("über"), "Über");
    }

    #[test]
    fn test_short_description_keeps_ellipsis() {
        let forty = "a".repeat(40);
        let excerpt = description_excerpt(&forty);
        assert_eq!(excerpt, format!("{}...", forty));
        assert_eq!(excerpt.chars().count(), 43);
        assert_eq!(description_excerpt(""), "...");
    }

    #[test]
    fn test_long_description_is_cut() {
        let long = "x".repeat(250);
        let excerpt = description_excerpt(&long);
        assert_eq!(excerpt, format!("{}...", "x".repeat(100)));
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        let text = "ü".repeat(120);
        assert_eq!(description_excerpt(&text), format!("{}...", "ü".repeat(100)));
    }

    #[test]
    fn test_company_initial() {
        assert_eq!(company_initial(Some("Acme")), "A");
        assert_eq!(company_initial(Some("")), "");
        assert_eq!(company_initial(None), "");
    }

    #[test]
    fn test_company_location_line() {
        assert_eq!(company_location_line(Some("Acme"), Some("Berlin")), "Acme • Berlin");
        assert_eq!(company_location_line(None, Some("Remote")), " • Remote");
        assert_eq!(company_location_line(None, None), " • ");
    }

    #[test]
    fn test_badge_text() {
        assert_eq!(badge_text(Some("Full-time")), Some("Full-time".to_string()));
        assert_eq!(badge_text(Some("")), None);
        assert_eq!(badge_text(None), None);
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(2048.0), "2.00 KB");
        assert_eq!(format_file_size(0.0), "0.00 KB");
    }
}
