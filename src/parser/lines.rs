use std::sync::LazyLock;

use regex::Regex;

use super::path::parse_path;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]*)\]").unwrap());
static PATH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^)]*)\)").unwrap());

/// One parsed bullet line. Section id -1 means the line names a
/// chapter-level file rather than a section.
#[derive(Debug, Clone)]
pub struct Entry {
    pub chapter_id: i64,
    pub section_id: i64,
    pub title: String,
    pub path: String,
}

/// A line is structural when its first non-whitespace character is the
/// `*` bullet. Lines without a bullet are prose, headings, or blank.
pub fn is_structural(line: &str) -> bool {
    match line.find('*') {
        Some(pos) => line[..pos].chars().all(|c| c == ' ' || c == '\t'),
        None => false,
    }
}

/// Pull title and path out of a `* [title](path)` bullet line.
/// Missing brackets or parens yield empty fields with no complaint here;
/// the path parser is the layer that rejects anything it cannot decompose.
pub fn parse_line(line: &str) -> anyhow::Result<Entry> {
    let title = TITLE_RE
        .captures(line)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();
    let path = PATH_RE
        .captures(line)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();

    let (chapter_id, section_id) = parse_path(&path)?;

    Ok(Entry {
        chapter_id,
        section_id,
        title,
        path,
    })
}
