use crate::outline::Outline;

/// Render the outline as the classic content-matrix report: one header
/// line per chapter, one line per section, a per-chapter subtotal, then a
/// grand total over the whole book. Chapters appear in input order.
pub fn render(outline: &Outline) -> String {
    let mut out = String::new();
    let mut section_total = 0;

    for chapter in outline.chapters() {
        out.push_str(&format!(
            "* CHAPTER {} | Title: {} | Path: {}\n",
            chapter.id, chapter.title, chapter.path
        ));

        for section in &chapter.sections {
            out.push_str(&format!(
                "\t- SECTION {} | Title: {} | Path: {}\n",
                section.id, section.title, section.path
            ));
        }

        section_total += chapter.sections.len();
        out.push_str(&format!(
            "/* SUM: {} sections in this chapter. */\n\n",
            chapter.sections.len()
        ));
    }

    out.push_str(&format!(
        "/* SUM: {} chapters and {} sections have been written.*/\n\n",
        outline.chapter_count(),
        section_total
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_summary;

    const INPUT: &str = "* [Intro](chapters/chapter_1/intro.md)\n\
                         \t* [First Section](chapters/chapter_1/section_1.md)\n\
                         \t* [Second Section](chapters/chapter_1/section_2.md)\n\
                         * [Advanced](chapters/chapter_2/advanced.md)";

    #[test]
    fn full_report() {
        let outline = parse_summary(INPUT).unwrap();
        let expected = "\
* CHAPTER 1 | Title: Intro | Path: chapters/chapter_1/intro.md
\t- SECTION 1 | Title: First Section | Path: chapters/chapter_1/section_1.md
\t- SECTION 2 | Title: Second Section | Path: chapters/chapter_1/section_2.md
/* SUM: 2 sections in this chapter. */

* CHAPTER 2 | Title: Advanced | Path: chapters/chapter_2/advanced.md
/* SUM: 0 sections in this chapter. */

/* SUM: 2 chapters and 2 sections have been written.*/

";
        assert_eq!(render(&outline), expected);
    }

    #[test]
    fn empty_outline_still_totals() {
        let outline = parse_summary("").unwrap();
        assert_eq!(
            render(&outline),
            "/* SUM: 0 chapters and 0 sections have been written.*/\n\n"
        );
    }

    #[test]
    fn repeated_runs_are_byte_identical() {
        let a = render(&parse_summary(INPUT).unwrap());
        let b = render(&parse_summary(INPUT).unwrap());
        assert_eq!(a, b);
    }
}
