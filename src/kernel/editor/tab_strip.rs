use super::document::Document;

pub const MODIFIED_MARKER: &str = "\u{25cf} ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub title: String,
    pub modified: bool,
}

impl Tab {
    fn of(document: &Document) -> Self {
        Self {
            title: document.title(),
            modified: document.is_modified(),
        }
    }

    pub fn display_title(&self) -> String {
        if self.modified {
            format!("{}{}", MODIFIED_MARKER, self.title)
        } else {
            self.title.clone()
        }
    }
}

/// Tab labels derived from a pane's document sequence.
///
/// Never edited on its own: `sync` recomputes it from the documents and
/// reports the indices whose label or marker changed.
#[derive(Debug, Clone, Default)]
pub struct TabStrip {
    tabs: Vec<Tab>,
}

impl TabStrip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sync(&mut self, documents: &[Document]) -> Vec<(usize, Tab)> {
        let mut changed = Vec::new();
        self.tabs.truncate(documents.len());
        for (index, document) in documents.iter().enumerate() {
            let tab = Tab::of(document);
            match self.tabs.get_mut(index) {
                Some(existing) if *existing == tab => {}
                Some(existing) => {
                    *existing = tab.clone();
                    changed.push((index, tab));
                }
                None => {
                    self.tabs.push(tab.clone());
                    changed.push((index, tab));
                }
            }
        }
        changed
    }

    /// Refreshes a single index. `None` when nothing changed.
    pub fn update(&mut self, index: usize, document: &Document) -> Option<Tab> {
        let tab = Tab::of(document);
        let slot = self.tabs.get_mut(index)?;
        if *slot == tab {
            return None;
        }
        *slot = tab.clone();
        Some(tab)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tab(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn title(&self, index: usize) -> Option<&str> {
        self.tabs.get(index).map(|t| t.title.as_str())
    }

    pub fn is_modified(&self, index: usize) -> bool {
        self.tabs.get(index).is_some_and(|t| t.modified)
    }

    pub fn modified_indices(&self) -> Vec<usize> {
        self.tabs
            .iter()
            .enumerate()
            .filter(|(_, t)| t.modified)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/tab_strip.rs"]
mod tests;
