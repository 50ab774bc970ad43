//! Wizard progress and free-association keywords.

use serde::{Deserialize, Serialize};

use crate::idea::GuestSessionId;

/// Identifier of an AI brainstorming session.
pub type SessionId = GuestSessionId;

/// Minimum number of keywords before ideas can be generated.
pub const MIN_ASSOCIATIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStarted {
    pub session_id: SessionId,
    #[serde(default)]
    pub message: String,
}

/// The five wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum WizardStep {
    #[default]
    Start,
    Purpose,
    Warmup,
    Associations,
    Ideas,
}

impl WizardStep {
    /// 1-based position shown in the progress bar.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Start => 1,
            WizardStep::Purpose => 2,
            WizardStep::Warmup => 3,
            WizardStep::Associations => 4,
            WizardStep::Ideas => 5,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Start => "Start",
            WizardStep::Purpose => "Purpose",
            WizardStep::Warmup => "Warm-up",
            WizardStep::Associations => "Free association",
            WizardStep::Ideas => "Ideas",
        }
    }
}

/// Encouragement tier for the current keyword count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationStage {
    /// Fewer than 5 keywords.
    JustStarted,
    /// 5 to 9 keywords.
    AlmostThere,
    /// 10 to 14 keywords.
    Ready,
    /// 15 to 24 keywords.
    Plenty,
    /// 25 or more keywords.
    Complete,
}

impl AssociationStage {
    pub fn for_count(count: usize) -> Self {
        match count {
            0..=4 => AssociationStage::JustStarted,
            5..=9 => AssociationStage::AlmostThere,
            10..=14 => AssociationStage::Ready,
            15..=24 => AssociationStage::Plenty,
            _ => AssociationStage::Complete,
        }
    }

    pub fn can_generate(&self) -> bool {
        !matches!(
            self,
            AssociationStage::JustStarted | AssociationStage::AlmostThere
        )
    }

    pub fn message(&self) -> &'static str {
        match self {
            AssociationStage::JustStarted => "Write down anything that comes to mind, as much as you like.",
            AssociationStage::AlmostThere => "Nice! How about a few more?",
            AssociationStage::Ready => "That's a lot! Add more if you have them, or generate now.",
            AssociationStage::Plenty => "Wow, plenty of material! Generate whenever you're ready.",
            AssociationStage::Complete => "25 keywords in! Time to generate your ideas.",
        }
    }
}

/// Result of offering a keyword to an [`AssociationSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddAssociation {
    Added(String),
    Blank,
    Duplicate(String),
}

/// Ordered, duplicate-free list of free-association keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociationSet {
    keywords: Vec<String>,
}

impl AssociationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trims `keyword` and appends it unless it is blank or already present.
    pub fn add(&mut self, keyword: &str) -> AddAssociation {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return AddAssociation::Blank;
        }
        if self.keywords.iter().any(|k| k == keyword) {
            return AddAssociation::Duplicate(keyword.to_string());
        }
        self.keywords.push(keyword.to_string());
        AddAssociation::Added(keyword.to_string())
    }

    /// Removes `keyword`. Returns whether it was present.
    pub fn remove(&mut self, keyword: &str) -> bool {
        let before = self.keywords.len();
        self.keywords.retain(|k| k != keyword.trim());
        self.keywords.len() != before
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn stage(&self) -> AssociationStage {
        AssociationStage::for_count(self.len())
    }

    pub fn can_submit(&self) -> bool {
        self.len() >= MIN_ASSOCIATIONS
    }

    pub fn clear(&mut self) {
        self.keywords.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_rejects_duplicates() {
        let mut set = AssociationSet::new();
        assert_eq!(set.add("  coffee "), AddAssociation::Added("coffee".to_string()));
        assert_eq!(set.add("coffee"), AddAssociation::Duplicate("coffee".to_string()));
        assert_eq!(set.add("   "), AddAssociation::Blank);
        assert_eq!(set.keywords(), &["coffee".to_string()]);
    }

    #[test]
    fn test_remove() {
        let mut set = AssociationSet::new();
        set.add("rain");
        set.add("umbrella");
        assert!(set.remove("rain"));
        assert!(!set.remove("rain"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_stage_thresholds() {
        let cases = [
            (0, AssociationStage::JustStarted),
            (4, AssociationStage::JustStarted),
            (5, AssociationStage::AlmostThere),
            (9, AssociationStage::AlmostThere),
            (10, AssociationStage::Ready),
            (14, AssociationStage::Ready),
            (15, AssociationStage::Plenty),
            (24, AssociationStage::Plenty),
            (25, AssociationStage::Complete),
            (40, AssociationStage::Complete),
        ];
        for (count, expected) in cases {
            assert_eq!(AssociationStage::for_count(count), expected, "count {count}");
        }
        assert!(!AssociationStage::AlmostThere.can_generate());
        assert!(AssociationStage::Ready.can_generate());
    }

    #[test]
    fn test_can_submit_at_minimum() {
        let mut set = AssociationSet::new();
        for i in 0..MIN_ASSOCIATIONS - 1 {
            set.add(&format!("k{i}"));
        }
        assert!(!set.can_submit());
        set.add("last");
        assert!(set.can_submit());
    }

    #[test]
    fn test_step_numbers_are_ordered() {
        assert_eq!(WizardStep::default(), WizardStep::Start);
        assert!(WizardStep::Warmup < WizardStep::Ideas);
        assert_eq!(WizardStep::Associations.number(), 4);
    }
}
