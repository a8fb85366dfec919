//! Clipboard output.

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::debug;
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Lazily opened system clipboard. The context stays open so the copied
/// text remains available while the form is running.
#[derive(Default)]
pub struct Clipboard {
    ctx: Option<ClipboardContext>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copy(&mut self, text: &str) -> Result<()> {
        if self.ctx.is_none() {
            let ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        let Some(ctx) = self.ctx.as_mut() else {
            return Err(Error::Clipboard("clipboard unavailable".to_string()));
        };

        ctx.set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        debug!(chars = text.chars().count(), "copied to clipboard");
        Ok(())
    }
}
