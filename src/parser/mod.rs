pub mod lines;
pub mod path;

use crate::outline::Outline;

/// Single-pass pipeline: raw lines → structural lines → outline store.
/// A parsed entry with section id > 0 is a section; the sentinel -1 (or 0)
/// marks a chapter-level entry.
pub fn parse_summary(content: &str) -> anyhow::Result<Outline> {
    let mut outline = Outline::new();

    for line in content.lines() {
        if !lines::is_structural(line) {
            continue;
        }
        let entry = lines::parse_line(line)?;
        if entry.section_id > 0 {
            outline.new_section(entry.chapter_id, entry.section_id, entry.title, entry.path)?;
        } else {
            outline.new_chapter(entry.chapter_id, entry.title, entry.path);
        }
    }

    Ok(outline)
}
