//! HTML-context escaping for visitor-supplied text.

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod sanitize_test;

/// Escape `<`, `>`, `"`, `'` and `/` as character entities.
///
/// `None` and `""` both yield an empty string. `&` is left alone, so a
/// string that has already been through this function comes back unchanged.
#[must_use]
pub fn sanitize_input(input: Option<&str>) -> String {
    let Some(input) = input else {
        return String::new();
    };
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(ch),
        }
    }
    out
}
