//! System clipboard adapter
//!
//! Writes go through whichever clipboard command the platform provides,
//! found on `PATH` with `which`:
//!
//! | Platform | Command |
//! |----------|---------|
//! | Wayland  | `wl-copy` |
//! | X11      | `xclip -selection clipboard`, `xsel --clipboard --input` |
//! | macOS    | `pbcopy` |
//! | Windows  | `clip` |

pub mod command;

pub use command::{CommandClipboard, detect_clipboard_command};
