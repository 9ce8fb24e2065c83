use anyhow::{bail, Context};

const CHAPTER_MARKER: &str = "chapter_";
const SECTION_MARKER: &str = "section_";

/// Decompose `.../chapters/chapter_<N>/...` into (chapter id, section id).
///
/// The section id is -1 when the path names a chapter-level file: no
/// `section_` marker, or the marker immediately followed by `.md`.
/// Paths outside the `chapters` convention are rejected outright.
pub fn parse_path(path: &str) -> anyhow::Result<(i64, i64)> {
    if !path.contains("chapters") {
        bail!("unsupported path (no chapters segment): {path:?}");
    }

    let marker = path
        .find(CHAPTER_MARKER)
        .with_context(|| format!("no chapter marker in path {path:?}"))?;
    let id_start = marker + CHAPTER_MARKER.len();
    let id_end = path[id_start..]
        .find('/')
        .map(|i| id_start + i)
        .with_context(|| format!("unterminated chapter id in path {path:?}"))?;
    let chapter_id: i64 = path[id_start..id_end]
        .parse()
        .with_context(|| format!("bad chapter id in path {path:?}"))?;

    let section_path = &path[id_end + 1..];
    let section_id = match section_path.find(SECTION_MARKER) {
        None => -1,
        Some(m) => {
            let span_start = m + SECTION_MARKER.len();
            // A marker with no `.md` terminator decomposes to an empty span.
            let span = section_path[span_start..]
                .find(".md")
                .map(|i| &section_path[span_start..span_start + i])
                .unwrap_or("");
            if span.is_empty() {
                -1
            } else {
                span.parse()
                    .with_context(|| format!("bad section id in path {path:?}"))?
            }
        }
    };

    Ok((chapter_id, section_id))
}
