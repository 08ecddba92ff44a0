//! Terminal-related data types for output rendering.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Represents a single block of output in the terminal with a unique ID
#[derive(Clone, Debug)]
pub struct OutputLine {
    /// Unique ID for efficient keying in For loops
    pub id: usize,
    /// The actual output data
    pub data: OutputLineData,
}

/// The actual content of an output block
#[derive(Clone, Debug, PartialEq)]
pub enum OutputLineData {
    /// Prompt line with the input that was entered at it
    Command { prompt: String, input: String },
    /// Literal text, may span several lines
    Text(String),
    /// Sanitized HTML
    Markup(String),
}

// Global counter for generating unique IDs
static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    /// Create a new OutputLine with a unique ID
    fn new(data: OutputLineData) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text(s.into()))
    }

    /// Create a markup block; the HTML is sanitized here.
    pub fn markup(html: &str) -> Self {
        Self::new(OutputLineData::Markup(ammonia::clean(html)))
    }

    pub fn command(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command {
            prompt: prompt.into(),
            input: input.into(),
        })
    }

    /// Build a block from command output, `None` for empty output.
    pub fn from_output(output: &str, markup: bool) -> Option<Self> {
        if output.is_empty() {
            None
        } else if markup {
            Some(Self::markup(output))
        } else {
            Some(Self::text(output))
        }
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // Only compare data, not ID
        self.data == other.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_line_constructors() {
        assert_eq!(
            OutputLine::text("hello").data,
            OutputLineData::Text("hello".to_string())
        );
        assert_eq!(
            OutputLine::markup("<b>bold</b>").data,
            OutputLineData::Markup("<b>bold</b>".to_string())
        );
    }

    #[test]
    fn test_markup_is_sanitized() {
        let line = OutputLine::markup("<b>hi</b><script>alert(1)</script>");
        assert_eq!(line.data, OutputLineData::Markup("<b>hi</b>".to_string()));
    }

    #[test]
    fn test_command_line() {
        let cmd = OutputLine::command("ian@ianjchoi.com ~ % ", "ll");
        match cmd.data {
            OutputLineData::Command { prompt, input } => {
                assert_eq!(prompt, "ian@ianjchoi.com ~ % ");
                assert_eq!(input, "ll");
            }
            _ => panic!("Expected Command variant"),
        }
    }

    #[test]
    fn test_from_output() {
        assert_eq!(OutputLine::from_output("", false), None);
        assert_eq!(OutputLine::from_output("", true), None);
        assert_eq!(
            OutputLine::from_output("<i>x</i>", false).map(|l| l.data),
            Some(OutputLineData::Text("<i>x</i>".to_string()))
        );
        assert_eq!(
            OutputLine::from_output("<i>x</i>", true).map(|l| l.data),
            Some(OutputLineData::Markup("<i>x</i>".to_string()))
        );
    }

    #[test]
    fn test_unique_ids() {
        let line1 = OutputLine::text("first");
        let line2 = OutputLine::text("second");
        let line3 = OutputLine::text("first");

        assert_ne!(line1.id, line2.id);
        assert_ne!(line1.id, line3.id);
        assert_eq!(line1, line3);
    }
}
