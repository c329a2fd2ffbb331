//! Plain-text rendering of extracted records for the terminal.

use crate::models::NewsRecord;

/// Render a numbered listing under a heading for `subject`.
pub fn render(subject: &str, records: &[NewsRecord]) -> String {
    let mut out = format!("Latest {subject} News:\n\n");
    if records.is_empty() {
        out.push_str("No matching news found.\n");
        return out;
    }
    for (idx, record) in records.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", idx + 1, record.title));
        out.push_str(&format!("   Link: {}\n", record.link));
        out.push_str(&format!("   Published: {}\n", record.publication_date));
        out.push_str(&format!("   Description: {}\n\n", record.description));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_numbers_records() {
        let records = vec![
            NewsRecord {
                title: "First".to_string(),
                link: "https://www.coingecko.com/a".to_string(),
                publication_date: "1h".to_string(),
                description: "one".to_string(),
            },
            NewsRecord {
                title: "Second".to_string(),
                link: "https://www.coingecko.com/b".to_string(),
                publication_date: "No date available".to_string(),
                description: "two".to_string(),
            },
        ];
        let text = render("BTC", &records);
        assert!(text.starts_with("Latest BTC News:\n\n1. First\n"));
        assert!(text.contains("2. Second\n   Link: https://www.coingecko.com/b\n"));
        assert!(text.contains("   Published: No date available\n"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render("SOL", &[]), "Latest SOL News:\n\nNo matching news found.\n");
    }
}
