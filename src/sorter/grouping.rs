use super::classify::{classify_grouped, is_comment_or_blank};
use super::types::{DeclarationKind, Entry};

/// Scanner state: entries per kind (priority order) plus the lines left over.
struct Scan {
    groups: [Vec<Entry>; 6],
    remainder: Vec<String>,
}

/// Walk the document once, attaching each pending comment/blank run to the
/// next declaration. A run followed by a non-declaration line is flushed to
/// the remainder unclaimed; a run is never split across two entries.
fn scan(lines: &[&str]) -> Scan {
    let mut groups: [Vec<Entry>; 6] = Default::default();
    let mut remainder = Vec::new();
    let mut pending: Vec<&str> = Vec::new();

    for &line in lines {
        if let Some(kind) = classify_grouped(line) {
            // Blank lines in the claimed run are dropped; comments travel
            // with the declaration.
            let comments = pending
                .drain(..)
                .filter(|l| !l.trim().is_empty())
                .map(str::to_string)
                .collect();
            groups[kind.rank()].push(Entry {
                comments,
                declaration: line.to_string(),
            });
        } else if is_comment_or_blank(line) {
            pending.push(line);
        } else {
            remainder.extend(pending.drain(..).map(str::to_string));
            remainder.push(line.to_string());
        }
    }
    remainder.extend(pending.drain(..).map(str::to_string));

    Scan { groups, remainder }
}

/// Render one group: entries stably sorted by trimmed declaration text
/// (byte order, so uppercase sorts before lowercase), duplicates kept.
fn render_group(group: &mut Vec<Entry>, out: &mut Vec<String>) {
    group.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    for entry in group.iter() {
        out.extend(entry.comments.iter().cloned());
        out.push(entry.declaration.clone());
    }
    // One blank line closes every non-empty group.
    out.push(String::new());
}

/// Regroup a document's declaration lines: groups in fixed kind order, each
/// followed by a blank line, then the remainder untouched in original order.
/// Returns `None` when the document contains no declarations at all, so the
/// caller can skip the rewrite entirely.
pub fn regroup(lines: &[&str]) -> Option<String> {
    let mut doc = scan(lines);

    if doc.groups.iter().all(|g| g.is_empty()) {
        return None;
    }

    let mut out: Vec<String> = Vec::new();
    for kind in DeclarationKind::ALL {
        let group = &mut doc.groups[kind.rank()];
        if !group.is_empty() {
            render_group(group, &mut out);
        }
    }
    // The last group's separator already provides the gap before the
    // remainder; leading remainder blanks would widen it on every run.
    let body = doc
        .remainder
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(doc.remainder.len());
    out.extend(doc.remainder.into_iter().skip(body));

    // Trailing blank lines (the last group separator included) are noise.
    while out.last().map_or(false, |l| l.trim().is_empty()) {
        out.pop();
    }

    let mut rendered = out.join("\n");
    rendered.push('\n');
    Some(rendered)
}
