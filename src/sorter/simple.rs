use super::classify::matches_simple;

/// Legacy single-group sorter. The three historic keywords are collected as
/// one undistinguished set, sorted by raw line text (leading whitespace and
/// all), and placed in front of every other line with no blank-line
/// separation and no dedup. Returns `None` when nothing matched.
pub fn sort_lines(lines: &[&str]) -> Option<String> {
    let mut imports: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| matches_simple(line))
        .collect();
    if imports.is_empty() {
        return None;
    }
    imports.sort();

    let others = lines.iter().copied().filter(|line| !matches_simple(line));

    let mut out = imports;
    out.extend(others);

    let mut rendered = out.join("\n");
    rendered.push('\n');
    Some(rendered)
}
