
const HEADER_MARKER: &str = "question";

fn strip_quotes(field: &str) -> &str {
    let field = field.strip_prefix('"').unwrap_or(field);
    field.strip_suffix('"').unwrap_or(field)
}

/// Splits one line into fields. Double quotes toggle quoted mode, in which
/// commas are kept as field content. Embedded quotes have no escape syntax.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current_field = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current_field)),
            _ => current_field.push(c),
        }
    }
    fields.push(current_field);

    fields
        .iter()
        .map(|field| strip_quotes(field).trim().to_owned())
        .collect()
}

fn is_header(line: &str) -> bool {
    line.to_lowercase().contains(HEADER_MARKER)
}

/// Splits a whole document into rows of fields.
///
/// The first line is treated as a header and skipped when it mentions
/// "question" in any letter case. Blank lines are skipped.
pub fn parse_document(text: &str) -> Vec<Vec<String>> {
    let lines: Vec<&str> = text.trim().split('\n').collect();
    let start_index = match lines.first() {
        Some(line) if is_header(line) => 1,
        _ => 0,
    };

    lines[start_index..]
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}
