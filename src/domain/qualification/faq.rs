//! FAQ accordion state. Independent of the questionnaire.

/// One question/answer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Static FAQ content.
pub static FAQ_ENTRIES: [FaqEntry; 5] = [
    FaqEntry {
        question: "What does this tool do?",
        answer: "It asks fifteen yes/no questions about an automation use case and \
                 recommends the most suitable approach: Agentic AI, Classical ML, Gen AI \
                 or Business Automation.",
    },
    FaqEntry {
        question: "How is the recommendation produced?",
        answer: "Your answers are sent to a prediction service that returns a label \
                 together with an average confidence and a confidence interval.",
    },
    FaqEntry {
        question: "What do the three percentages mean?",
        answer: "They are the average confidence followed by the lower and upper \
                 bounds of the interval around it.",
    },
    FaqEntry {
        question: "Are my answers stored?",
        answer: "No. Each submission is evaluated on its own and nothing is kept \
                 after the result is shown.",
    },
    FaqEntry {
        question: "Can I change my answers and try again?",
        answer: "Yes. Adjust any answer or reset the form and submit again; the \
                 previous result is cleared as soon as the new request starts.",
    },
];

/// Open/closed flag per FAQ entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqPanel {
    entries: &'static [FaqEntry],
    open: Vec<bool>,
}

impl Default for FaqPanel {
    fn default() -> Self {
        Self::new(&FAQ_ENTRIES)
    }
}

impl FaqPanel {
    /// Creates a panel with every entry collapsed.
    pub fn new(entries: &'static [FaqEntry]) -> Self {
        Self {
            entries,
            open: vec![false; entries.len()],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flips one entry. Returns the new state, or `None` for an unknown index.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let flag = self.open.get_mut(index)?;
        *flag = !*flag;
        Some(*flag)
    }

    /// Flips the entry shown as `number` (1-based). `0` is never a valid number.
    pub fn toggle_numbered(&mut self, number: usize) -> Option<bool> {
        number.checked_sub(1).and_then(|index| self.toggle(index))
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// Entries with their open flag, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&FaqEntry, bool)> + '_ {
        self.entries.iter().zip(self.open.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_starts_collapsed() {
        let panel = FaqPanel::default();
        assert_eq!(panel.len(), FAQ_ENTRIES.len());
        assert!(panel.iter().all(|(_, open)| !open));
    }

    #[test]
    fn toggle_affects_only_one_entry() {
        let mut panel = FaqPanel::default();
        assert_eq!(panel.toggle(1), Some(true));

        assert!(panel.is_open(1));
        assert!(!panel.is_open(0));
        assert!(!panel.is_open(2));

        assert_eq!(panel.toggle(1), Some(false));
        assert!(!panel.is_open(1));
    }

    #[test]
    fn toggle_out_of_range_is_none() {
        let mut panel = FaqPanel::default();
        assert_eq!(panel.toggle(99), None);
        assert!(!panel.is_open(99));
    }

    #[test]
    fn toggle_numbered_is_one_based() {
        let mut panel = FaqPanel::default();
        assert_eq!(panel.toggle_numbered(1), Some(true));
        assert!(panel.is_open(0));
    }

    #[test]
    fn toggle_numbered_rejects_zero() {
        let mut panel = FaqPanel::default();
        assert_eq!(panel.toggle_numbered(0), None);
        assert!(panel.iter().all(|(_, open)| !open));
    }
}
