/// Receives the outcome of a crop/upload cycle. Exactly one of the two
/// methods is called per confirmed crop.
pub trait UploadListener {
    fn on_success(&mut self, url: &str);
    fn on_error(&mut self, message: &str);
}

/// Listener built from a pair of closures.
pub struct Callbacks<S, E> {
    on_success: S,
    on_error: E,
}

impl<S, E> Callbacks<S, E>
where
    S: FnMut(&str),
    E: FnMut(&str),
{
    pub fn new(on_success: S, on_error: E) -> Self {
        Self {
            on_success,
            on_error,
        }
    }
}

impl<S, E> UploadListener for Callbacks<S, E>
where
    S: FnMut(&str),
    E: FnMut(&str),
{
    fn on_success(&mut self, url: &str) {
        (self.on_success)(url);
    }

    fn on_error(&mut self, message: &str) {
        (self.on_error)(message);
    }
}
