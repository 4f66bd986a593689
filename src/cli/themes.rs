//! Themes command: print the colour theme table.

use crate::error::Result;
use crate::types::Theme;

/// One line per theme: key, overlay, then both font colours.
pub fn table() -> Vec<String> {
    Theme::ALL
        .into_iter()
        .map(|theme| {
            let colors = theme.colors();
            format!(
                "{:<12} overlay {}  primary {}  secondary {}",
                theme.key(),
                colors.overlay,
                colors.primary_font,
                colors.secondary_font
            )
        })
        .collect()
}

pub fn run() -> Result<()> {
    for line in table() {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_every_theme() {
        let lines = table();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[3],
            "orange       overlay rgb(0, 0, 0)  primary rgb(255, 165, 0)  secondary rgb(255, 165, 0)"
        );
        assert!(lines[1].starts_with("light_blue "));
    }
}
