//! Formatting utilities for terminal output

/// Separator placed between consecutive words of a ladder
pub const LADDER_SEPARATOR: &str = " -> ";

/// Format a ladder as `cat -> cot -> dog`
#[must_use]
pub fn format_ladder<S: AsRef<str>>(ladder: &[S]) -> String {
    ladder
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(LADDER_SEPARATOR)
}

/// Message printed when no ladder exists
#[must_use]
pub fn format_no_path(start: &str, end: &str) -> String {
    format!("No path {start}{LADDER_SEPARATOR}{end}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Pluralize "step" for a ladder of `steps` transformations
#[must_use]
pub const fn steps_label(steps: usize) -> &'static str {
    if steps == 1 { "step" } else { "steps" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_ladder_joins_words() {
        assert_eq!(format_ladder(&["cat", "cot", "dog"]), "cat -> cot -> dog");
        assert_eq!(format_ladder(&["cat"]), "cat");
        assert_eq!(format_ladder::<&str>(&[]), "");
    }

    #[test]
    fn format_ladder_owned_strings() {
        let ladder = vec!["at".to_string(), "bat".to_string()];
        assert_eq!(format_ladder(&ladder), "at -> bat");
    }

    #[test]
    fn no_path_message() {
        assert_eq!(format_no_path("cat", "xyz"), "No path cat -> xyz");
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
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn steps_label_pluralizes() {
        assert_eq!(steps_label(1), "step");
        assert_eq!(steps_label(0), "steps");
        assert_eq!(steps_label(3), "steps");
    }
}
