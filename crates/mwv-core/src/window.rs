//! Window control: the seam to the external browser view.
//!
//! The triage loop only needs three operations from whatever displays the
//! dictionary entry; everything else about the browser is opaque. Tests
//! substitute in-memory fakes through the trait.

use std::process::Command;

/// Error from the window-control collaborator.
#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    /// The platform opener could not be spawned.
    #[error("failed to launch browser: {0}")]
    Launch(#[from] std::io::Error),
    /// `current_url` was asked before any page was loaded.
    #[error("no page has been loaded yet")]
    NoPage,
}

/// Minimal control surface over a browser view showing one page at a time.
pub trait WindowControl {
    /// Navigate the view to `url`.
    fn load_url(&mut self, url: &str) -> Result<(), WindowError>;
    /// URL of the page currently shown.
    fn current_url(&self) -> Result<String, WindowError>;
    /// Set the window title.
    fn set_title(&mut self, title: &str) -> Result<(), WindowError>;
}

/// Window control backed by the operating system's default browser.
///
/// Each `load_url` hands the URL to the platform opener (`xdg-open` on
/// Linux). An external browser owns its own window chrome, so `set_title`
/// tracks the title and logs it instead of painting it, and `current_url`
/// answers with the last URL this handle loaded.
#[derive(Debug, Default)]
pub struct SystemBrowser {
    last_url: Option<String>,
    title: Option<String>,
}

impl SystemBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(target_os = "linux")]
    fn opener(url: &str) -> Command {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }

    #[cfg(target_os = "macos")]
    fn opener(url: &str) -> Command {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    }

    #[cfg(target_os = "windows")]
    fn opener(url: &str) -> Command {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    }
}

impl WindowControl for SystemBrowser {
    fn load_url(&mut self, url: &str) -> Result<(), WindowError> {
        Self::opener(url).spawn()?;
        tracing::debug!(%url, "opened in system browser");
        self.last_url = Some(url.to_string());
        Ok(())
    }

    fn current_url(&self) -> Result<String, WindowError> {
        self.last_url.clone().ok_or(WindowError::NoPage)
    }

    fn set_title(&mut self, title: &str) -> Result<(), WindowError> {
        tracing::debug!(%title, "window title");
        self.title = Some(title.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_url_before_any_load_is_an_error() {
        let browser = SystemBrowser::new();
        assert!(matches!(browser.current_url(), Err(WindowError::NoPage)));
    }

    #[test]
    fn set_title_tracks_the_word() {
        let mut browser = SystemBrowser::new();
        browser.set_title("crow").unwrap();
        assert_eq!(browser.title.as_deref(), Some("crow"));
    }
}
