use cropdrop_core::widget::UploadListener;

/// Preview of the file currently in the editor.
#[derive(Default)]
pub struct EditorView {
    /// Bumped on every accepted drop; stale decodes are discarded.
    pub generation: u64,
    pub texture: Option<egui::TextureHandle>,
    /// Full source size in pixels.
    pub source_size: Option<(u32, u32)>,
    pub decode_error: Option<String>,
}

impl EditorView {
    /// Forget the current preview and return the generation for the next one.
    pub fn reset(&mut self) -> u64 {
        self.generation += 1;
        self.texture = None;
        self.source_size = None;
        self.decode_error = None;
        self.generation
    }
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub editor: EditorView,

    /// Address of the most recent successful upload.
    pub last_url: Option<String>,
    pub last_error: Option<String>,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}

impl UploadListener for UIState {
    fn on_success(&mut self, url: &str) {
        self.last_url = Some(url.to_string());
        self.last_error = None;
        self.add_log(format!("Uploaded: {url}"));
    }

    fn on_error(&mut self, message: &str) {
        self.last_error = Some(message.to_string());
        self.add_log(format!("ERROR: {message}"));
    }
}
