/// Token in the sidebar template replaced by the year-group literal.
pub const YEARGROUPS_PLACEHOLDER: &str = "YEARGROUPS_PLACEHOLDER";

/// Replace every occurrence of [`YEARGROUPS_PLACEHOLDER`] in `template`.
pub fn apply_template(template: &str, literal: &str) -> String {
    if !template.contains(YEARGROUPS_PLACEHOLDER) {
        tracing::warn!(
            placeholder = YEARGROUPS_PLACEHOLDER,
            "template has no placeholder token; output equals template"
        );
    }
    template.replace(YEARGROUPS_PLACEHOLDER, literal)
}
