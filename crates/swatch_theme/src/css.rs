//! CSS custom property export.

use std::fmt::Write;

use crate::set::{ThemeBundle, ThemeTokenSet};

impl ThemeTokenSet {
    /// Render as a single rule, one `--key: value;` declaration per token.
    pub fn to_css_rule(&self, selector: &str) -> String {
        let mut css = format!("{selector} {{\n");
        for (token, value) in self.iter() {
            let _ = writeln!(css, "  --{}: {value};", token.key());
        }
        css.push_str("}\n");
        css
    }
}

impl ThemeBundle {
    /// Light mode under `:root`, dark mode under `.dark`.
    pub fn to_css(&self) -> String {
        format!(
            "{}\n{}",
            self.light.to_css_rule(":root"),
            self.dark.to_css_rule(".dark")
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{SourceConfig, ThemeToken, ThemeTokenSetBuilder};

    #[test]
    fn root_and_dark_blocks() {
        let bundle = ThemeTokenSetBuilder::new().build(&SourceConfig::new(), &SourceConfig::new());
        let css = bundle.to_css();

        assert!(css.starts_with(":root {\n  --background: oklch(100.0% 0.000 0);\n"));
        assert!(css.contains("}\n\n.dark {\n"));
        assert!(css.contains("  --radius: 0.625rem;\n"));
        assert!(css.ends_with("  --shadow-offset-y: 1px;\n}\n"));

        let declarations = css.lines().filter(|l| l.starts_with("  --")).count();
        assert_eq!(declarations, ThemeToken::ALL.len() * 2);
    }
}
