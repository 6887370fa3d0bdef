use shapesync::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone)]
pub struct WarningBlock {
    title: String,
    lines: Vec<String>,
}

impl WarningBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Block listing unknown config keys
    pub fn config_warnings(warnings: &[ConfigWarning]) -> Self {
        let mut block = Self::new("Unknown config keys (ignored)");
        for w in warnings {
            let location = match w.line {
                Some(line) => format!("{}:{}", w.file.display(), line),
                None => w.file.display().to_string(),
            };
            let mut line = format!("'{}' in {}", w.key, location);
            if let Some(suggestion) = &w.suggestion {
                line.push_str(&format!(", did you mean '{}'?", suggestion));
            }
            block.add_line(line);
        }
        block
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(self.title.as_str()).render(supports_color)
        );
        for line in &self.lines {
            out.push_str(&format!("  {}\n", line));
        }
        out
    }
}
