//! Output file naming.

const UNSAFE_CHARS: [char; 10] = ['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

fn replace_unsafe(text: &str) -> String {
    text.chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '-' } else { c })
        .collect()
}

/// Derives the exported document's file name from the plan's studio name
/// and planning year.
///
/// Characters that are unsafe in file names become `-`, spaces in the name
/// become `_`, and the year suffix is left out when the year is empty.
///
/// ```rust
/// use studioplan_core::export::document_file_name;
///
/// assert_eq!(
///     document_file_name("Ana Pilates", "2024"),
///     "Strategic_Plan_Ana_Pilates_2024.pdf"
/// );
/// assert_eq!(document_file_name("Core", ""), "Strategic_Plan_Core.pdf");
/// ```
pub fn document_file_name(name: &str, year: &str) -> String {
    let name = replace_unsafe(name).replace(' ', "_");
    let year_suffix = if year.is_empty() {
        String::new()
    } else {
        format!("_{}", replace_unsafe(year))
    };
    format!("Strategic_Plan_{name}{year_suffix}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_with_slash() {
        assert_eq!(
            document_file_name("Core", "2024/25"),
            "Strategic_Plan_Core_2024-25.pdf"
        );
    }

    #[test]
    fn test_every_unsafe_char_is_replaced() {
        assert_eq!(
            document_file_name("A/B\\C?D%E*F:G|H\"I<J>K", "1:2"),
            "Strategic_Plan_A-B-C-D-E-F-G-H-I-J-K_1-2.pdf"
        );
    }

    #[test]
    fn test_only_name_spaces_become_underscores() {
        assert_eq!(
            document_file_name("Move  Well Studio", "Year 1"),
            "Strategic_Plan_Move__Well_Studio_Year 1.pdf"
        );
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            document_file_name("Ana Pilates", "2024"),
            document_file_name("Ana Pilates", "2024")
        );
    }
}
