use tracing::info;

/// Single image viewer: one shared image source and a hidden flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    image_source: Option<String>,
    hidden: bool,
    close_handler: bool,
}

impl Default for Popup {
    fn default() -> Self {
        Self {
            image_source: None,
            hidden: true,
            close_handler: false,
        }
    }
}

impl Popup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the image at `url`, replacing any previous one, and reveals the
    /// popup.
    pub fn show(&mut self, url: &str) {
        self.image_source = Some(url.to_string());
        self.hidden = false;
        self.close_handler = true;
        info!(url, "image displayed in popup");
    }

    /// Close action; only effective once a close handler has been registered.
    pub fn close(&mut self) {
        if self.close_handler {
            self.hidden = true;
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn image_source(&self) -> Option<&str> {
        self.image_source.as_deref()
    }
}
