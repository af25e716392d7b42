// Shared prompt utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it;
// this file holds the substitution helper they all use.

/// Substitutes every `{name}` placeholder in `template` with its value.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{name}}}"), value)
        })
}
