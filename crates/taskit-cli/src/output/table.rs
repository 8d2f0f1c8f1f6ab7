use crate::ui::Palette;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub palette: Option<Palette>,
}

const MIN_COLUMN: usize = 6;
const SEPARATOR: &str = "  ";

/// Render an aligned table for string rows. Widths are measured in chars.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_COLUMN])
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let text = truncate_text(cell, *width);
                let padded = pad(&text, *width, looks_numeric(&text));
                match options.palette {
                    Some(palette) => colorize(&padded, &text, palette),
                    None => padded,
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line);
    }
    lines.join("\n")
}

/// Narrow the widest columns one char at a time until the table fits or
/// every column is at its minimum.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].chars().count().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ',' | ':'))
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Wrap the visible `text` inside an already padded cell in an ANSI color.
fn colorize(padded: &str, text: &str, palette: Palette) -> String {
    let Some(code) = palette.code_for(text) else {
        return padded.to_string();
    };
    padded.replacen(text, &format!("\u{1b}[{code}m{text}\u{1b}[0m"), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        palette: None,
    };

    #[test]
    fn columns_align_across_rows() {
        let rows = vec![
            vec!["a".to_string(), "high".to_string()],
            vec!["bbbbbbbbbb".to_string(), "low".to_string()],
        ];
        let table = render_entity_table(&["id", "priority"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2].find("high"), lines[3].find("low"));
    }

    #[test]
    fn numbers_are_right_aligned() {
        let rows = vec![vec!["7".to_string()]];
        let table = render_entity_table(&["count"], &rows, PLAIN);
        assert!(table.lines().nth(2).is_some_and(|line| line.ends_with('7')));
        assert!(table.lines().nth(2).is_some_and(|line| line.starts_with(' ')));
    }

    #[test]
    fn wide_columns_shrink_to_max_width() {
        let rows = vec![vec!["x".repeat(80), "short".to_string()]];
        let options = TableOptions {
            max_width: Some(40),
            palette: None,
        };
        let table = render_entity_table(&["title", "status"], &rows, options);
        for line in table.lines() {
            assert!(line.chars().count() <= 40, "too wide: {line}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn color_wraps_only_known_values() {
        let rows = vec![vec!["high".to_string(), "plain".to_string()]];
        let options = TableOptions {
            max_width: None,
            palette: Some(Palette::ANSI),
        };
        let table = render_entity_table(&["priority", "note"], &rows, options);
        assert!(table.contains("\u{1b}[31mhigh\u{1b}[0m"));
        assert!(!table.contains("\u{1b}[33mplain"));
    }
}
