//! Summary formatting.

use std::time::Duration;

/// A summary of one reduction run.
#[derive(Debug, Clone)]
pub struct ReduceSummary {
    /// Input stylesheet size in bytes.
    pub input_bytes: usize,
    /// Output stylesheet size in bytes.
    pub output_bytes: usize,
    /// Top-level items (rules and at-rules) in the input.
    pub items_in: usize,
    /// Top-level items in the output.
    pub items_out: usize,
    /// Wall-clock time of the reduction.
    pub duration: Duration,
}

impl ReduceSummary {
    /// Measures input and output stylesheet text.
    pub fn measure(input: &str, output: &str, duration: Duration) -> Self {
        Self {
            input_bytes: input.len(),
            output_bytes: output.len(),
            items_in: css_parser::parse(input).stylesheet.items.len(),
            items_out: css_parser::parse(output).stylesheet.items.len(),
            duration,
        }
    }

    /// Formats the summary for humans.
    pub fn format(&self) -> String {
        format!(
            "css-reduce-rs: kept {} of {} rules, {} -> {} bytes in {:.1?}",
            self.items_out, self.items_in, self.input_bytes, self.output_bytes, self.duration
        )
    }

    /// Formats the summary as JSON.
    pub fn to_json(&self) -> String {
        let value = serde_json::json!({
            "input_bytes": self.input_bytes,
            "output_bytes": self.output_bytes,
            "rules_in": self.items_in,
            "rules_out": self.items_out,
            "duration_ms": self.duration.as_secs_f64() * 1000.0,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_measure() {
        let input = ".a{color:red}.b{color:blue}";
        let output = ".a { color:red }";
        let summary = ReduceSummary::measure(input, output, Duration::from_millis(5));
        assert_eq!(summary.items_in, 2);
        assert_eq!(summary.items_out, 1);
        assert_eq!(summary.input_bytes, input.len());
    }

    #[test]
    fn test_human_format_mentions_rule_counts() {
        let summary = ReduceSummary {
            input_bytes: 100,
            output_bytes: 40,
            items_in: 10,
            items_out: 4,
            duration: Duration::from_millis(12),
        };
        assert!(summary.format().contains("kept 4 of 10 rules"));
    }

    #[test]
    fn test_json_format_is_valid() {
        let summary = ReduceSummary {
            input_bytes: 100,
            output_bytes: 40,
            items_in: 10,
            items_out: 4,
            duration: Duration::from_millis(12),
        };
        let parsed: serde_json::Value = serde_json::from_str(&summary.to_json()).unwrap();
        assert_eq!(parsed["rules_out"], 4);
    }
}
