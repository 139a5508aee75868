//! External collaborators the navigator only signals. Neither of these does
//! real installer work; the front end records the request and, for restart,
//! hands off to systemd.

/// Entering the Installation page. A real backend would pick the signal up
/// here; this front end has none.
pub fn begin_install() {
    tracing::info!("installation requested; no backend is wired up");
}

/// "Restart" on the Complete page. A spawn failure is logged and otherwise
/// ignored; the installer keeps running.
pub fn request_restart() {
    tracing::info!("restart requested");
    if let Err(e) = std::process::Command::new("systemctl").arg("reboot").status() {
        tracing::error!("failed to run systemctl reboot: {e}");
    }
}
