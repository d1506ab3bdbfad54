//! Validation of the output field delimiter.

/// Parse a delimiter given on the command line or in the config file.
///
/// Accepts exactly one ASCII character (anything but `"`, CR and LF),
/// plus the two-character escape `\t` for a tab.
pub fn parse_delimiter(s: &str) -> Result<u8, String> {
    if s == "\\t" {
        return Ok(b'\t');
    }

    let mut chars = s.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        (None, _) => return Err("the delimiter cannot be empty".to_string()),
        _ => return Err(format!("'{s}' is not a single character")),
    };

    if !c.is_ascii() {
        return Err(format!("'{c}' is not an ASCII character"));
    }

    match c {
        '"' | '\r' | '\n' => Err(format!("{c:?} cannot be used as a delimiter")),
        _ => Ok(c as u8),
    }
}
