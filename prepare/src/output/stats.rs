use tracing::info;

use crate::generator::Report;

/// информация о сгенерированной таблице
pub fn print(report: &Report)
{
    info!(
        classification = report.classification.name(),
        members = report.members,
        groups = report.groups,
        nonzero_groups = report.nonzero_groups,
        first = %codepoint(report.first),
        last = %codepoint(report.last),
        "lookup table written to {}",
        report.output.display()
    );
}

fn codepoint(code: Option<u32>) -> String
{
    match code {
        Some(code) => format!("U+{:04X}", code),
        None => "-".to_owned(),
    }
}
