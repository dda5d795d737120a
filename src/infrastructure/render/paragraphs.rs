use super::escape::escape_html;

/// Split raw text into `<p>` blocks.
///
/// Blank (whitespace-only) lines separate paragraphs. Inside a paragraph each
/// line is trimmed, empty lines are dropped and the rest are joined with
/// `<br>`. Paragraphs that end up empty are dropped. Line text is escaped;
/// `<p>` and `<br>` are the only markup produced.
pub fn render_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            flush(&mut current, &mut paragraphs);
        } else {
            current.push(line);
        }
    }
    flush(&mut current, &mut paragraphs);

    paragraphs
}

fn flush(lines: &mut Vec<&str>, paragraphs: &mut Vec<String>) {
    if lines.is_empty() {
        return;
    }
    let joined = lines
        .iter()
        .map(|line| escape_html(line))
        .collect::<Vec<_>>()
        .join("<br>");
    paragraphs.push(format!("<p>{joined}</p>"));
    lines.clear();
}
