use std::process::{Command, Stdio};

use tracing::warn;

/// Hand a share deep link to the platform URL opener, detached. A missing
/// opener only logs; sharing must never break the feed.
pub fn open_external(url: &str) {
    let program = if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };

    let spawned = Command::new(program)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    if let Err(err) = spawned {
        warn!(%url, "could not open share link: {}", err);
    }
}
