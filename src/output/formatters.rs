//! Formatting utilities for terminal output

use crate::core::NameMap;

/// Format a taxon as "Common name (Scientific name)"
///
/// Falls back to the bare identifier when no common name is known.
#[must_use]
pub fn format_taxon(names: &NameMap, id: &str) -> String {
    match names.label(id) {
        Some(label) if label != id => format!("{label} ({id})"),
        _ => id.to_string(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing what share of the candidates a feedback bucket keeps
#[must_use]
pub fn bucket_bar(count: usize, total: usize, width: usize) -> String {
    create_progress_bar(count as f64, total as f64, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_taxon_with_label() {
        let mut names = NameMap::new();
        names.insert("Panthera leo", "Lion");

        assert_eq!(format_taxon(&names, "Panthera leo"), "Lion (Panthera leo)");
        assert_eq!(format_taxon(&names, "Felidae"), "Felidae");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn bucket_bar_of_empty_candidates() {
        assert_eq!(bucket_bar(0, 0, 4), "░░░░");
        assert_eq!(bucket_bar(11, 36, 36), format!("{}{}", "█".repeat(11), "░".repeat(25)));
    }
}
