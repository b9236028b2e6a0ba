//! Display labels for material type codes.

const TYPE_LABELS: [(&str, &str); 4] = [
    ("lecture", "Lecture"),
    ("book", "Book"),
    ("homework", "Homework"),
    ("note", "Note"),
];

/// Returns the label for a known type code, or the code itself.
pub fn type_label(code: &str) -> &str {
    TYPE_LABELS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}
