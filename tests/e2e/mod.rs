use std::process::Command;
use std::time::{Duration, Instant};

/// Drives the real binary inside a detached tmux session and inspects
/// the rendered screen with capture-pane.
pub struct TmuxHarness {
    session: String,
}

impl TmuxHarness {
    pub fn new(name: &str) -> Self {
        let session = format!("paramdeck-e2e-{}", name);
        // Kill any leftover session from a previous run
        let _ = Command::new("tmux")
            .args(["kill-session", "-t", &session])
            .output();
        Self { session }
    }

    pub fn start(&self, binary: &str) -> Result<(), String> {
        let output = Command::new("tmux")
            .args([
                "new-session", "-d", "-s", &self.session, "-x", "100", "-y", "30", binary,
            ])
            .output()
            .map_err(|e| format!("failed to run tmux: {}", e))?;
        if !output.status.success() {
            return Err(format!(
                "tmux new-session failed: {}",
                String::from_utf8_lossy(&output.stderr)
            ));
        }
        Ok(())
    }

    /// Send a named key (tmux key syntax, e.g. "Enter", "Escape", "C-q")
    pub fn send_key(&self, key: &str) -> Result<(), String> {
        let output = Command::new("tmux")
            .args(["send-keys", "-t", &self.session, key])
            .output()
            .map_err(|e| format!("failed to run tmux: {}", e))?;
        if !output.status.success() {
            return Err(format!(
                "tmux send-keys failed: {}",
                String::from_utf8_lossy(&output.stderr)
            ));
        }
        Ok(())
    }

    /// Send literal text (each character as a key press)
    pub fn send_text(&self, text: &str) -> Result<(), String> {
        let output = Command::new("tmux")
            .args(["send-keys", "-t", &self.session, "-l", text])
            .output()
            .map_err(|e| format!("failed to run tmux: {}", e))?;
        if !output.status.success() {
            return Err(format!(
                "tmux send-keys -l failed: {}",
                String::from_utf8_lossy(&output.stderr)
            ));
        }
        Ok(())
    }

    pub fn capture_screen(&self) -> Result<String, String> {
        let output = Command::new("tmux")
            .args(["capture-pane", "-p", "-t", &self.session])
            .output()
            .map_err(|e| format!("failed to run tmux: {}", e))?;
        if !output.status.success() {
            return Err(format!(
                "tmux capture-pane failed: {}",
                String::from_utf8_lossy(&output.stderr)
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// Poll the screen until `needle` appears or a short timeout expires
    pub fn assert_screen_contains(&self, needle: &str) -> Result<(), String> {
        let deadline = Instant::now() + Duration::from_secs(3);
        let mut last = String::new();
        while Instant::now() < deadline {
            last = self.capture_screen()?;
            if last.contains(needle) {
                return Ok(());
            }
            std::thread::sleep(Duration::from_millis(100));
        }
        Err(format!(
            "screen never contained {:?}\nLast screen:\n{}",
            needle, last
        ))
    }

    pub fn is_running(&self) -> bool {
        Command::new("tmux")
            .args(["has-session", "-t", &self.session])
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    pub fn wait_for_exit(&self, timeout: Duration) -> Result<(), String> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if !self.is_running() {
                return Ok(());
            }
            std::thread::sleep(Duration::from_millis(100));
        }
        Err("app did not exit before the timeout".to_string())
    }
}

impl Drop for TmuxHarness {
    fn drop(&mut self) {
        let _ = Command::new("tmux")
            .args(["kill-session", "-t", &self.session])
            .output();
    }
}
