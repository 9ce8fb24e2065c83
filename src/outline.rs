use std::collections::HashMap;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Section {
    pub id: i64,
    pub title: String,
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct Chapter {
    pub id: i64,
    pub title: String,
    pub path: String,
    pub sections: Vec<Section>,
}

/// Chapters keyed by id, reported in first-appearance order. Built once
/// per run and handed to the reporter; nothing outlives the run.
#[derive(Debug, Default)]
pub struct Outline {
    order: Vec<i64>,
    chapters: HashMap<i64, Chapter>,
}

impl Outline {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repeated chapter id overwrites the record but keeps its original
    /// position in the report.
    pub fn new_chapter(&mut self, id: i64, title: String, path: String) {
        if !self.chapters.contains_key(&id) {
            self.order.push(id);
        }
        self.chapters.insert(
            id,
            Chapter {
                id,
                title,
                path,
                sections: Vec::new(),
            },
        );
    }

    /// The input contract puts every section line after its chapter line;
    /// a section naming an unseen chapter aborts the run.
    pub fn new_section(
        &mut self,
        chapter_id: i64,
        id: i64,
        title: String,
        path: String,
    ) -> anyhow::Result<()> {
        let chapter = self
            .chapters
            .get_mut(&chapter_id)
            .with_context(|| format!("section {id} references unknown chapter {chapter_id}"))?;
        chapter.sections.push(Section { id, title, path });
        Ok(())
    }

    pub fn chapters(&self) -> impl Iterator<Item = &Chapter> {
        self.order.iter().map(|id| &self.chapters[id])
    }

    pub fn chapter_count(&self) -> usize {
        self.order.len()
    }

    pub fn section_count(&self) -> usize {
        self.chapters.values().map(|c| c.sections.len()).sum()
    }
}
