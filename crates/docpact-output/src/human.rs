use crate::OutputFormatter;
use docpact_enforce::types::Report;

/// Renders the violation list for a terminal, closing with a remediation
/// hint that names the first configured escape token.
pub struct HumanFormatter {
    escape_token: String,
}

impl HumanFormatter {
    pub fn new(escape_tokens: &[String]) -> Self {
        let escape_token = escape_tokens
            .first()
            .cloned()
            .unwrap_or_else(|| "noqa: DOC".to_string());
        Self { escape_token }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_report(&self, report: &Report) -> String {
        if report.ok {
            return "Docstring contract: OK\n".to_string();
        }

        let mut out = String::from("\nDocstring enforcement violations:\n\n");
        for v in &report.violations {
            out.push_str(&format!("- {}:{}: {}\n", v.file.display(), v.line, v.message));
        }
        out.push_str(&format!(
            "\nFix: add the required docstrings, or use an escape token with a \
             reason (# {} <reason>) and list it in your PR.\n",
            self.escape_token
        ));
        out
    }
}
