//! Line-based editing of `server.properties` style files.
//!
//! Comments, blank lines and the original ordering survive a set.

/// Value of the first `key=value` line, if any.
pub fn get(content: &str, key: &str) -> Option<String> {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('#') || trimmed.is_empty() {
            continue;
        }
        if let Some(eq) = line.find('=') {
            if line[..eq] == *key {
                return Some(line[eq + 1..].to_string());
            }
        }
    }
    None
}

/// Replaces the first `key=value` line, or appends one when the key is new.
pub fn set(content: &str, key: &str, value: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut replaced = false;
    for line in content.lines() {
        let trimmed = line.trim();
        if !replaced && !trimmed.starts_with('#') {
            if let Some(eq) = line.find('=') {
                if line[..eq] == *key {
                    lines.push(format!("{}={}", key, value));
                    replaced = true;
                    continue;
                }
            }
        }
        lines.push(line.to_string());
    }
    if !replaced {
        lines.push(format!("{}={}", key, value));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
