//! Label formatting for the elapsed time and set count

use crate::error::{Result, StopwatchError};

/// Format milliseconds as "MM:SS.F" (deciseconds, minutes never roll over)
pub fn format_time(total_time_ms: u64) -> String {
    let ticks = total_time_ms / 1000;
    let minutes = ticks / 60;
    let seconds = ticks % 60;
    let fraction = (total_time_ms % 1000) / 100;
    format!("{:02}:{:02}.{}", minutes, seconds, fraction)
}

/// Template for the set count label, e.g. `"Sets: {}"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetsTemplate(String);

impl SetsTemplate {
    /// Build a template; it must contain a `{}` placeholder
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains("{}") {
            return Err(StopwatchError::InvalidTemplate(template));
        }
        Ok(Self(template))
    }

    /// Substitute the first placeholder with `count`
    pub fn render(&self, count: u32) -> String {
        self.0.replacen("{}", &count.to_string(), 1)
    }
}

impl Default for SetsTemplate {
    fn default() -> Self {
        Self("Sets: {}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00.0");
        assert_eq!(format_time(99), "00:00.0");
        assert_eq!(format_time(61_234), "01:01.2");
        assert_eq!(format_time(59_999), "00:59.9");
        assert_eq!(format_time(3_600_000), "60:00.0");
        assert_eq!(format_time(6_000_000), "100:00.0");
    }

    #[test]
    fn test_sets_template() {
        assert_eq!(SetsTemplate::default().render(4), "Sets: 4");

        let template = SetsTemplate::new("{} séries").unwrap();
        assert_eq!(template.render(12), "12 séries");

        let only_first = SetsTemplate::new("{} / {}").unwrap();
        assert_eq!(only_first.render(2), "2 / {}");
    }

    #[test]
    fn test_sets_template_requires_placeholder() {
        assert!(matches!(
            SetsTemplate::new("Sets"),
            Err(StopwatchError::InvalidTemplate(t)) if t == "Sets"
        ));
    }
}
