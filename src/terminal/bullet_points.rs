const INDENT_SIZE: usize = 2;

/// Indented bullet list for the dashboard sections. Rendering is separated
/// from printing so tests can assert on the produced lines.
pub struct BulletPointPrinter {
    nesting: usize,
}

impl BulletPointPrinter {
    pub fn new() -> Self {
        Self { nesting: 0 }
    }

    pub fn indent(&self) -> Self {
        Self {
            nesting: self.nesting + 1,
        }
    }

    pub fn print_item(&self, message: impl std::fmt::Display) {
        println!("{}", self.render_item(message));
    }

    fn render_item(&self, message: impl std::fmt::Display) -> String {
        let indent = " ".repeat(self.nesting * INDENT_SIZE);
        format!("{indent}• {message}")
    }
}

impl Default for BulletPointPrinter {
    fn default() -> Self {
        Self::new()
    }
}
