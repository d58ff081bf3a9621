//! Rewrite Engine
//!
//! The stateful single pass: one fence flag, rules applied in order per line.

use super::probe;

/// Counters collected over one rewrite pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    pub lines_read: usize,
    pub lines_written: usize,
    pub headings_suppressed: usize,
    pub headings_demoted: usize,
    /// Fence lines cut back to end at the `rust` tag
    pub rust_fences_cleaned: usize,
    pub fence_toggles: usize,
}

/// Line-by-line rewriter
///
/// Holds the fence flag for the duration of one document. Create a new
/// rewriter per document.
#[derive(Debug, Default)]
pub struct Rewriter {
    inside_snippet: bool,
    stats: RewriteStats,
}

impl Rewriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the last processed line left us inside a fenced block
    pub fn is_inside_snippet(&self) -> bool {
        self.inside_snippet
    }

    pub fn stats(&self) -> RewriteStats {
        self.stats
    }

    /// Process one line, returning `None` when it is dropped
    pub fn rewrite_line(&mut self, line: &str) -> Option<String> {
        self.stats.lines_read += 1;
        let line_num = self.stats.lines_read;
        let probe = probe::test_copy(line);

        if self.inside_snippet && probe::is_level_one_heading(&probe) {
            log::debug!("line {}: dropped heading {:?}", line_num, line.trim_end());
            self.stats.headings_suppressed += 1;
            return None;
        }

        let mut out = line.to_string();

        if self.inside_snippet && probe::is_nested_heading(&probe) {
            out = probe::demote_heading(&out);
            self.stats.headings_demoted += 1;
        }

        if self.inside_snippet && probe::is_rust_fence(&probe) {
            out = probe::truncate_after_rust_tag(&out);
            self.stats.rust_fences_cleaned += 1;
        }

        // Toggle test uses the probe of the original line, not `out`
        if probe::is_fence(&probe) {
            self.inside_snippet = !self.inside_snippet;
            self.stats.fence_toggles += 1;

            if self.inside_snippet
                && let Some(cleaned) = probe::clean_rust_fence_open(&out)
            {
                out = cleaned;
                self.stats.rust_fences_cleaned += 1;
            }
        }

        if out != line {
            log::debug!("line {}: {:?} -> {:?}", line_num, line, out);
        }

        self.stats.lines_written += 1;
        Some(out)
    }

    /// End the pass and hand back the counters
    pub fn finish(self) -> RewriteStats {
        if self.inside_snippet {
            log::warn!(
                "Document ended inside a fenced block after {} lines",
                self.stats.lines_read
            );
        }
        self.stats
    }
}
