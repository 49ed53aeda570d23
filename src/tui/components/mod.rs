// Components module - UI building blocks
//
// - PIN panel: the dotted PIN widget (interactive)
// - Status bar: focus, progress, completion flag, hints
// - Logs panel: captured log entries
// - Toast: transient notification overlay

pub mod logs_panel;
pub mod pin_panel;
pub mod status_bar;
pub mod toast;

pub use pin_panel::{PinPanel, TerminalPinWidget};
pub use toast::Toast;
