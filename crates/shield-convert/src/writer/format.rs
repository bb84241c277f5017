//! Fixed-column primitives shared by all card writers.

/// Format `value` right-justified in exactly `width` characters.
///
/// Uses as many decimals as fit after the integer part, rounds, then drops
/// trailing zeros while keeping the decimal point (`0.`, `14.75`). The
/// integer part is never cut: a value too wide for the column produces a
/// longer string.
pub fn float_to_fixed_width(value: f64, width: usize) -> String {
    // -0.0 would otherwise keep its sign
    let value = if value == 0.0 { 0.0 } else { value };
    let integer_len = format!("{:.0}", value.trunc()).len();
    let mut precision = width.saturating_sub(integer_len + 1);
    let mut text = format!("{:.*}", precision, value);
    // rounding may carry into a new integer digit
    while text.len() > width && precision > 0 {
        precision -= 1;
        text = format!("{:.*}", precision, value);
    }

    if text.contains('.') {
        let kept = text.trim_end_matches('0').len();
        text.truncate(kept);
    } else if text.len() < width {
        text.push('.');
    }
    format!("{:>width$}", text, width = width)
}

/// Comment line marking column boundaries, e.g. `*-------->` for `[10]`.
///
/// Columns narrower than two characters are shown as `#`.
pub fn column_indicators(widths: &[usize]) -> String {
    let mut line = String::new();
    match widths.first() {
        Some(&first) if first >= 1 => line.push('*'),
        _ => return line,
    }
    for (i, &width) in widths.iter().enumerate() {
        if width < 2 {
            if i > 0 {
                line.push('#');
            }
            continue;
        }
        if i > 0 {
            line.push('<');
        }
        line.push_str(&"-".repeat(width - 2));
        line.push('>');
    }
    line.push('\n');
    line
}
