//! Terminal rendering of comparisons.
//!
//! Everything here takes its presentation settings as arguments and returns
//! plain strings, so the output can be tested with color turned off.

use colored::Colorize;
use unicode_segmentation::UnicodeSegmentation;

use jdiff_sdk::{
    ChangeKind, Comparison, DiffLine, FormatError, LineKind, Segment, SegmentKind,
    StructureWarning, SummaryItem, ViewSettings,
};

/// One row of the rendered view: a diff line, or a run of hidden
/// unchanged lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Row {
    Line(usize),
    Gap(usize),
}

/// Decide which diff lines are shown. With a context of `n`, equal lines
/// more than `n` rows away from every change fold into gaps.
pub fn visible_rows(lines: &[DiffLine], context: Option<usize>) -> Vec<Row> {
    let Some(context) = context else {
        return (0..lines.len()).map(Row::Line).collect();
    };

    let mut keep = vec![false; lines.len()];
    for (i, line) in lines.iter().enumerate() {
        if line.is_change() {
            let start = i.saturating_sub(context);
            let end = (i + context + 1).min(lines.len());
            keep[start..end].iter_mut().for_each(|k| *k = true);
        }
    }

    let mut rows = Vec::new();
    let mut hidden = 0;
    for (i, kept) in keep.into_iter().enumerate() {
        if kept {
            if hidden > 0 {
                rows.push(Row::Gap(hidden));
                hidden = 0;
            }
            rows.push(Row::Line(i));
        } else {
            hidden += 1;
        }
    }
    if hidden > 0 {
        rows.push(Row::Gap(hidden));
    }
    rows
}

#[derive(Clone, Copy)]
enum Tone {
    Plain,
    Removed,
    Added,
    Context,
    RemovedChars,
    AddedChars,
    Dim,
}

fn paint(text: &str, tone: Tone, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match tone {
        Tone::Plain => text.to_string(),
        Tone::Removed => text.red().to_string(),
        Tone::Added => text.green().to_string(),
        Tone::Context => text.yellow().to_string(),
        Tone::RemovedChars => text.red().bold().underline().to_string(),
        Tone::AddedChars => text.green().bold().underline().to_string(),
        Tone::Dim => text.dimmed().to_string(),
    }
}

fn tone(line: LineKind, segment: SegmentKind) -> Tone {
    match (line, segment) {
        (LineKind::Equal, _) => Tone::Plain,
        (LineKind::Removed, _) => Tone::Removed,
        (LineKind::Added, _) => Tone::Added,
        (LineKind::Modified, SegmentKind::Unchanged) => Tone::Context,
        (LineKind::Modified, SegmentKind::Removed) => Tone::RemovedChars,
        (LineKind::Modified, SegmentKind::Added) => Tone::AddedChars,
    }
}

/// Lay one side of a row into exactly `width` grapheme columns, cutting
/// overlong text with an ellipsis.
fn cell(segments: &[Segment], kind: LineKind, width: usize, color: bool) -> String {
    let total: usize = segments.iter().map(|s| s.text.graphemes(true).count()).sum();
    let truncated = total > width;
    let budget = if truncated { width.saturating_sub(1) } else { width };

    let mut out = String::new();
    let mut used = 0;
    for segment in segments {
        if used >= budget {
            break;
        }
        let piece: String = segment.text.graphemes(true).take(budget - used).collect();
        used += piece.graphemes(true).count();
        out.push_str(&paint(&piece, tone(kind, segment.kind), color));
    }
    if truncated {
        out.push('…');
        used += 1;
    }
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

fn line_number(n: Option<usize>) -> String {
    n.map(|n| format!("{n:>4}")).unwrap_or_else(|| "    ".into())
}

/// Render one diff line as a side-by-side row.
pub fn render_line(line: &DiffLine, width: usize, color: bool) -> String {
    let (left_mark, right_mark) = match line.kind() {
        LineKind::Equal => (' ', ' '),
        LineKind::Removed => ('-', ' '),
        LineKind::Added => (' ', '+'),
        LineKind::Modified => ('~', '~'),
    };
    let row = format!(
        "{} {} {} │ {} {} {}",
        line_number(line.left_line_number()),
        left_mark,
        cell(line.left_segments(), line.kind(), width, color),
        line_number(line.right_line_number()),
        right_mark,
        cell(line.right_segments(), line.kind(), width, color),
    );
    row.trim_end().to_string()
}

pub fn render_gap(hidden: usize, color: bool) -> String {
    let noun = if hidden == 1 { "line" } else { "lines" };
    format!("   ⋮   {}", paint(&format!("… {hidden} unchanged {noun}"), Tone::Dim, color))
}

pub fn render_warning(warning: &StructureWarning, color: bool) -> String {
    paint(&format!("⚠ {}", warning.message), Tone::Context, color)
}

pub fn render_summary_item(item: &SummaryItem, color: bool) -> String {
    let old = item.old_value.as_deref().unwrap_or("");
    let new = item.new_value.as_deref().unwrap_or("");
    match item.kind {
        ChangeKind::Modified => format!(
            "  {} {}: {} → {}",
            paint("~", Tone::Context, color),
            item.field_name,
            paint(old, Tone::Removed, color),
            paint(new, Tone::Added, color),
        ),
        ChangeKind::Added => format!(
            "  {} {}: {}",
            paint("+", Tone::Added, color),
            item.field_name,
            new
        ),
        ChangeKind::Removed => format!(
            "  {} {}: {}",
            paint("-", Tone::Removed, color),
            item.field_name,
            old
        ),
    }
}

/// "No differences." or "N differences found".
pub fn headline(changes: usize) -> String {
    match changes {
        0 => "No differences.".into(),
        1 => "1 difference found".into(),
        n => format!("{n} differences found"),
    }
}

/// Render a full comparison: warning, rows, headline, then the summary.
pub fn render_comparison(comparison: &Comparison, view: &ViewSettings) -> String {
    let mut out = Vec::new();
    if let Some(warning) = &comparison.warning {
        out.push(render_warning(warning, view.color));
        out.push(String::new());
    }

    for row in visible_rows(&comparison.lines, view.context_lines) {
        out.push(match row {
            Row::Line(i) => render_line(&comparison.lines[i], view.column_width, view.color),
            Row::Gap(hidden) => render_gap(hidden, view.color),
        });
    }

    out.push(String::new());
    out.push(headline(comparison.stats.change_count()));

    if view.show_summary && !comparison.summary.is_empty() {
        out.push(String::new());
        out.push("Summary:".to_string());
        out.extend(
            comparison
                .summary
                .iter()
                .map(|item| render_summary_item(item, view.color)),
        );
    }
    out.join("\n")
}

/// The error message followed by the offending source line and a caret.
pub fn render_parse_error(raw: &str, error: &FormatError, color: bool) -> String {
    let mut out = vec![paint(&format!("error: {error}"), Tone::Removed, color)];
    if let Some(location) = error.location() {
        if let Some(text) = raw.split('\n').nth(location.line - 1) {
            out.push(format!("{:>4} │ {}", location.line, text));
            out.push(format!(
                "     │ {}{}",
                " ".repeat(location.column - 1),
                paint("^", Tone::RemovedChars, color)
            ));
        }
    }
    out.join("\n")
}
