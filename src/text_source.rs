//! Where the text to type comes from: `--text`, or else the clipboard.

use crate::error::{Result, TyperError};
use tracing::debug;

/// Read access to the system clipboard.
pub trait ClipboardSource {
    fn read_clipboard(&mut self) -> Result<String>;
}

/// The real clipboard, opened on first read.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSource for SystemClipboard {
    fn read_clipboard(&mut self) -> Result<String> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| TyperError::clipboard(format!("failed to open clipboard: {e}")))?;
        match clipboard.get_text() {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(TyperError::clipboard(format!("failed to read clipboard: {e}"))),
        }
    }
}

/// Pick the text to type.
///
/// A non-empty literal wins and the clipboard is never touched. Otherwise
/// the clipboard content is returned as-is, provided it holds something
/// other than whitespace.
pub fn resolve_text(
    literal_text: Option<&str>,
    clipboard: &mut dyn ClipboardSource,
) -> Result<String> {
    if let Some(text) = literal_text.filter(|t| !t.is_empty()) {
        return Ok(text.to_string());
    }

    let clipboard_text = clipboard.read_clipboard()?;
    if clipboard_text.trim().is_empty() {
        return Err(TyperError::NoText);
    }

    debug!(chars = clipboard_text.chars().count(), "using clipboard text");
    Ok(clipboard_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeClipboard {
        content: String,
        reads: usize,
    }

    impl FakeClipboard {
        fn new(content: &str) -> Self {
            Self {
                content: content.to_string(),
                reads: 0,
            }
        }
    }

    impl ClipboardSource for FakeClipboard {
        fn read_clipboard(&mut self) -> Result<String> {
            self.reads += 1;
            Ok(self.content.clone())
        }
    }

    #[test]
    fn test_literal_text_wins_without_reading_clipboard() {
        let mut clipboard = FakeClipboard::new("from clipboard");
        let text = resolve_text(Some("  typed as is "), &mut clipboard).unwrap();
        assert_eq!(text, "  typed as is ");
        assert_eq!(clipboard.reads, 0);
    }

    #[test]
    fn test_empty_literal_falls_back_to_clipboard() {
        let mut clipboard = FakeClipboard::new("\n  pasted text \n");
        let text = resolve_text(Some(""), &mut clipboard).unwrap();
        assert_eq!(text, "\n  pasted text \n");
        assert_eq!(clipboard.reads, 1);

        let text = resolve_text(None, &mut clipboard).unwrap();
        assert_eq!(text, "\n  pasted text \n");
    }

    #[test]
    fn test_blank_clipboard_is_no_text() {
        for content in ["", " \t\n "] {
            let mut clipboard = FakeClipboard::new(content);
            let err = resolve_text(None, &mut clipboard).unwrap_err();
            assert!(matches!(err, TyperError::NoText));
        }
    }

    #[test]
    fn test_clipboard_errors_propagate() {
        struct Broken;
        impl ClipboardSource for Broken {
            fn read_clipboard(&mut self) -> Result<String> {
                Err(TyperError::clipboard("no display"))
            }
        }

        let err = resolve_text(None, &mut Broken).unwrap_err();
        assert!(matches!(err, TyperError::Clipboard(_)));
    }
}
