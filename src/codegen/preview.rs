/// State of the generated code side panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodePreview {
    text: String,
    visible: bool,
}

impl CodePreview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the displayed text and opens the panel.
    pub fn show(&mut self, text: String) {
        self.text = text;
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
