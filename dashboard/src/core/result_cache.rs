//! Per-strategy result cache
//!
//! Each strategy moves through `Absent -> Loading -> Loaded`. At most one
//! loaded strategy is active. Metrics and analysis land together, so a slot
//! never holds metrics without the analysis that goes with them.

use std::collections::BTreeMap;

use shared::{AnalysisResult, AuditMetrics, Strategy, StrategyResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum StrategySlot {
    #[default]
    Absent,
    Loading,
    Loaded {
        metrics: AuditMetrics,
        analysis: AnalysisResult,
    },
}

/// Observable state of one strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Absent,
    Loading,
    Loaded,
    Active,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultCache {
    desktop: StrategySlot,
    mobile: StrategySlot,
    active: Option<Strategy>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, strategy: Strategy) -> &StrategySlot {
        match strategy {
            Strategy::Desktop => &self.desktop,
            Strategy::Mobile => &self.mobile,
        }
    }

    fn slot_mut(&mut self, strategy: Strategy) -> &mut StrategySlot {
        match strategy {
            Strategy::Desktop => &mut self.desktop,
            Strategy::Mobile => &mut self.mobile,
        }
    }

    pub fn state(&self, strategy: Strategy) -> SlotState {
        match self.slot(strategy) {
            StrategySlot::Absent => SlotState::Absent,
            StrategySlot::Loading => SlotState::Loading,
            StrategySlot::Loaded { .. } if self.active == Some(strategy) => SlotState::Active,
            StrategySlot::Loaded { .. } => SlotState::Loaded,
        }
    }

    pub fn is_loaded(&self, strategy: Strategy) -> bool {
        matches!(self.slot(strategy), StrategySlot::Loaded { .. })
    }

    /// Strategy currently being fetched, if any
    pub fn loading(&self) -> Option<Strategy> {
        Strategy::ALL
            .into_iter()
            .find(|s| matches!(self.slot(*s), StrategySlot::Loading))
    }

    pub fn active(&self) -> Option<Strategy> {
        self.active
    }

    /// Make a loaded strategy active; returns false when nothing is cached for it
    pub fn activate(&mut self, strategy: Strategy) -> bool {
        if !self.is_loaded(strategy) {
            return false;
        }
        self.active = Some(strategy);
        true
    }

    /// Mark an absent strategy as loading; returns false if it is not absent
    pub fn begin_loading(&mut self, strategy: Strategy) -> bool {
        let slot = self.slot_mut(strategy);
        if *slot != StrategySlot::Absent {
            return false;
        }
        *slot = StrategySlot::Loading;
        true
    }

    /// Return a loading strategy to absent after a failed fetch
    pub fn abort_loading(&mut self, strategy: Strategy) {
        let slot = self.slot_mut(strategy);
        if *slot == StrategySlot::Loading {
            *slot = StrategySlot::Absent;
        }
    }

    /// Store a completed fetch and make it active in one step
    pub fn complete(&mut self, strategy: Strategy, metrics: AuditMetrics, analysis: AnalysisResult) {
        *self.slot_mut(strategy) = StrategySlot::Loaded { metrics, analysis };
        self.active = Some(strategy);
    }

    /// Drop every result; used when the page changes
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Active strategy with its metrics and analysis
    pub fn active_result(&self) -> Option<(Strategy, &AuditMetrics, &AnalysisResult)> {
        let strategy = self.active?;
        match self.slot(strategy) {
            StrategySlot::Loaded { metrics, analysis } => Some((strategy, metrics, analysis)),
            _ => None,
        }
    }

    /// Loaded strategies keyed by strategy, with their active flag
    pub fn results(&self) -> BTreeMap<Strategy, StrategyResult> {
        Strategy::ALL
            .into_iter()
            .filter_map(|strategy| match self.slot(strategy) {
                StrategySlot::Loaded { metrics, analysis } => Some((
                    strategy,
                    StrategyResult {
                        metrics: metrics.clone(),
                        is_active: self.active == Some(strategy),
                        analysis: Some(analysis.clone()),
                    },
                )),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(summary: &str) -> AnalysisResult {
        AnalysisResult {
            performance: "|A|B|".into(),
            seo: "|C|D|".into(),
            summary: summary.into(),
        }
    }

    #[test]
    fn test_new_cache_is_empty() {
        let cache = ResultCache::new();
        assert_eq!(cache.state(Strategy::Desktop), SlotState::Absent);
        assert_eq!(cache.state(Strategy::Mobile), SlotState::Absent);
        assert_eq!(cache.active(), None);
        assert!(cache.results().is_empty());
    }

    #[test]
    fn test_loading_then_complete_becomes_active() {
        let mut cache = ResultCache::new();
        assert!(cache.begin_loading(Strategy::Desktop));
        assert_eq!(cache.state(Strategy::Desktop), SlotState::Loading);
        assert_eq!(cache.loading(), Some(Strategy::Desktop));
        assert!(!cache.begin_loading(Strategy::Desktop));

        cache.complete(Strategy::Desktop, AuditMetrics::default(), analysis("desktop"));
        assert_eq!(cache.state(Strategy::Desktop), SlotState::Active);
        assert_eq!(cache.loading(), None);
        assert_eq!(cache.active_result().map(|(s, _, a)| (s, a.summary.as_str())), Some((Strategy::Desktop, "desktop")));
    }

    #[test]
    fn test_single_active_strategy() {
        let mut cache = ResultCache::new();
        cache.complete(Strategy::Desktop, AuditMetrics::default(), analysis("desktop"));
        cache.complete(Strategy::Mobile, AuditMetrics::default(), analysis("mobile"));
        assert_eq!(cache.state(Strategy::Desktop), SlotState::Loaded);
        assert_eq!(cache.state(Strategy::Mobile), SlotState::Active);

        assert!(cache.activate(Strategy::Desktop));
        let results = cache.results();
        assert!(results[&Strategy::Desktop].is_active);
        assert!(!results[&Strategy::Mobile].is_active);
        assert_eq!(results.values().filter(|r| r.is_active).count(), 1);
    }

    #[test]
    fn test_activate_requires_loaded_slot() {
        let mut cache = ResultCache::new();
        assert!(!cache.activate(Strategy::Mobile));
        cache.begin_loading(Strategy::Mobile);
        assert!(!cache.activate(Strategy::Mobile));
        assert_eq!(cache.active(), None);
    }

    #[test]
    fn test_abort_returns_to_absent_and_keeps_others() {
        let mut cache = ResultCache::new();
        cache.complete(Strategy::Desktop, AuditMetrics::default(), analysis("desktop"));
        cache.begin_loading(Strategy::Mobile);
        cache.abort_loading(Strategy::Mobile);

        assert_eq!(cache.state(Strategy::Mobile), SlotState::Absent);
        assert_eq!(cache.state(Strategy::Desktop), SlotState::Active);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut cache = ResultCache::new();
        cache.complete(Strategy::Desktop, AuditMetrics::default(), analysis("desktop"));
        cache.begin_loading(Strategy::Mobile);
        cache.clear();
        assert_eq!(cache, ResultCache::new());
    }
}
