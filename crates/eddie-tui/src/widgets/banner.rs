//! Block-letter banner for the hero name.

const ROWS: usize = 5;

fn glyph(c: char) -> Option<[&'static str; ROWS]> {
    let rows = match c {
        'D' => ["███ ", "█  █", "█  █", "█  █", "███ "],
        'E' => ["████", "█   ", "███ ", "█   ", "████"],
        'I' => ["███", " █ ", " █ ", " █ ", "███"],
        _ => return None,
    };
    Some(rows)
}

/// Rows of the banner, or `None` if a letter has no glyph
pub fn banner(text: &str) -> Option<Vec<String>> {
    let glyphs = text
        .chars()
        .map(|c| glyph(c.to_ascii_uppercase()))
        .collect::<Option<Vec<_>>>()?;

    Some(
        (0..ROWS)
            .map(|row| {
                glyphs
                    .iter()
                    .map(|g| g[row])
                    .collect::<Vec<_>>()
                    .join(" ")
                    .trim_end()
                    .to_string()
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_banner_for_name() {
        let rows = banner("EDDIE").unwrap();
        assert_snapshot!(rows.join("\n"), @r"
        ████ ███  ███  ███ ████
        █    █  █ █  █  █  █
        ███  █  █ █  █  █  ███
        █    █  █ █  █  █  █
        ████ ███  ███  ███ ████
        ");
    }

    #[test]
    fn test_unknown_letter_has_no_banner() {
        assert!(banner("EDDY").is_none());
    }
}
