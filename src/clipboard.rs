//! Clipboard copy for generated passwords.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

/// Copy `text` to the system clipboard.
///
/// The provider round-trips a read-back copy; that copy is zeroized before
/// it is dropped. Failure never touches the caller's password.
pub fn copy(text: &str) -> Result<(), String> {
    let mut ctx = ClipboardContext::new().map_err(|e| e.to_string())?;
    ctx.set_contents(text.to_owned()).map_err(|e| e.to_string())?;
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}
