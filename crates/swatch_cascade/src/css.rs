//! `@media` CSS export.

use std::fmt::{Display, Write};

use crate::cascade::TokenCascade;

impl<T: Clone + Display> TokenCascade<T> {
    /// Render the cascade as CSS custom properties.
    ///
    /// The root becomes a `:root` block with every token. Each narrower
    /// breakpoint gets an `@media (max-width: Npx)` block holding only its
    /// unlinked tokens; linked tokens need no rule because wider media
    /// queries also match narrower viewports. Blocks with nothing to emit are
    /// skipped.
    pub fn to_css(&self, unit: &str) -> String {
        let mut css = String::new();

        for (bp, breakpoint) in self.hierarchy().iter().enumerate() {
            let mut decls = String::new();
            let indent = if bp == 0 { "  " } else { "    " };
            for (name, value) in self.overrides_at(bp) {
                let _ = writeln!(decls, "{indent}--{name}: {value}{unit};");
            }
            if decls.is_empty() {
                continue;
            }

            if !css.is_empty() {
                css.push('\n');
            }
            match (bp, breakpoint.max_width) {
                (0, _) => {
                    let _ = write!(css, ":root {{\n{decls}}}\n");
                }
                (_, Some(width)) => {
                    let _ = write!(
                        css,
                        "@media (max-width: {width}px) {{\n  :root {{\n{decls}  }}\n}}\n"
                    );
                }
                (_, None) => {
                    tracing::debug!(breakpoint = %breakpoint.id, "breakpoint has no width, skipping");
                }
            }
        }

        css
    }
}
