//! Report side effects: clipboard, markdown export and opening source links

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use base64::Engine;
use mintel_core::prelude::*;
use tokio::io::AsyncWriteExt;

/// OSC 52 "set clipboard" escape sequence carrying `text`.
///
/// Understood by most modern terminals (kitty, WezTerm, iTerm2, Ghostty,
/// foot, tmux with `set-clipboard on`).
pub fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{}\x07", encoded)
}

/// Copy `content` by writing the OSC 52 sequence straight to stdout,
/// bypassing the terminal backend buffer
pub fn copy_via_osc52(content: &str) -> Result<()> {
    let mut stdout = std::io::stdout();
    stdout
        .write_all(osc52_sequence(content).as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| Error::clipboard(format!("terminal write failed: {}", e)))?;
    debug!("Copied {} bytes via OSC 52", content.len());
    Ok(())
}

/// Copy `content` by piping it into `command`, split on whitespace
/// (e.g. `"xclip -selection clipboard"`)
pub async fn copy_via_command(content: &str, command: &str) -> Result<()> {
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        return Err(Error::clipboard("empty clipboard command"));
    };

    let mut child = tokio::process::Command::new(program)
        .args(parts)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| Error::clipboard(format!("{}: {}", program, e)))?;

    // Dropping stdin closes the pipe so the tool sees EOF
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(content.as_bytes())
            .await
            .map_err(|e| Error::clipboard(format!("{}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .await
        .map_err(|e| Error::clipboard(format!("{}: {}", program, e)))?;
    if !status.success() {
        return Err(Error::clipboard(format!("{} exited with {}", program, status)));
    }

    debug!("Copied {} bytes via {}", content.len(), program);
    Ok(())
}

/// Write the report markdown to `path`, creating the parent directory
pub async fn export_report(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::export(path, e.to_string()))?;
    }

    tokio::fs::write(path, content)
        .await
        .map_err(|e| Error::export(path, e.to_string()))?;

    info!("Exported report to {}", path.display());
    Ok(())
}

/// Open a URL in the configured browser or the platform default.
///
/// Uses `browser` if non-empty; otherwise falls back to the platform default:
/// - macOS: `open <url>`
/// - Linux: `xdg-open <url>`
/// - Windows: `cmd /c start "" <url>` (empty title arg prevents URL being
///   treated as window title)
pub fn open_url_in_browser(url: &str, browser: &str) -> std::io::Result<()> {
    if !browser.is_empty() {
        Command::new(browser).arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}
