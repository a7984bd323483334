//! Log Commands

/// Log file path followed by its last `lines` lines
pub fn recent_log(lines: usize) -> Result<String, String> {
    let path = rolling_logger::log_file_path().ok_or("file logging is disabled")?;
    let mut out = path.display().to_string();
    for line in rolling_logger::recent_lines(lines) {
        out.push('\n');
        out.push_str(&line);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only test in this crate that installs the global logger
    #[test]
    fn test_recent_log_after_init() {
        assert_eq!(recent_log(5).unwrap_err(), "file logging is disabled");

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Cart.log"), "earlier run\n").unwrap();
        rolling_logger::init_logger(dir.path(), "Cart").unwrap();
        rolling_logger::info("tail check").unwrap();

        let text = recent_log(500).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(dir.path().join("Cart.log").display().to_string().as_str()));
        assert_eq!(lines.next(), Some("earlier run"));
        assert!(text.contains("tail check"));
    }
}
