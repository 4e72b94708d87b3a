use super::styles::JOTPAD_STYLES;
use console::Term;
use jotpad::commands::confirm::ConfirmAction;
use jotpad::error::Result;

/// Shows the dialog for `action` on stderr and reads a y/N answer.
/// Anything but an explicit yes cancels, including a non-interactive stdin.
pub(super) fn confirm(action: &ConfirmAction) -> Result<bool> {
    let term = Term::stderr();
    term.write_line(&JOTPAD_STYLES.dialog_title.apply_to(action.title()).to_string())?;
    term.write_str(&format!("{} [y/N] ", action.message()))?;
    let answer = term.read_line()?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
