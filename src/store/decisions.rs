use super::types::{Choice, DecisionPoint};
use crate::compute::bytecode::NodeLayout;
use crate::compute::signal::Interrupt;
use crate::error::SearchError;
use std::sync::Arc;

/// One binding plus a shared pointer to everything bound before it.
#[derive(Debug)]
struct Binding {
    point: DecisionPoint,
    choice: Choice,
    parent: Option<Arc<Binding>>,
}

/// A partially (or fully) decided program.
///
/// Stores are persistent: `bind` and `branch` never modify `self`, they
/// return new stores that share every existing binding with their parent.
/// Forking is O(1) and siblings on the search stack stay independent.
#[derive(Debug, Clone, Default)]
pub struct DecisionStore {
    head: Option<Arc<Binding>>,
    len: usize,
}

impl DecisionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, point: DecisionPoint) -> Option<Choice> {
        self.iter().find(|(p, _)| *p == point).map(|(_, c)| c)
    }

    /// Returns the bound choice, or asks the caller to make one.
    pub fn load(&self, point: DecisionPoint) -> Result<Choice, Interrupt> {
        self.get(point).ok_or(Interrupt::MissingDecision(point))
    }

    pub fn bind(&self, point: DecisionPoint, choice: Choice) -> Result<Self, SearchError> {
        if self.get(point).is_some() {
            return Err(SearchError::AlreadyBound(point));
        }
        if choice.kind() != point.kind {
            return Err(SearchError::ChoiceMismatch { point, choice });
        }
        Ok(Self {
            head: Some(Arc::new(Binding {
                point,
                choice,
                parent: self.head.clone(),
            })),
            len: self.len + 1,
        })
    }

    /// One child per option of `point`, in domain order.
    pub fn branch(&self, point: DecisionPoint, layout: &NodeLayout) -> Result<Vec<Self>, SearchError> {
        point
            .domain(layout)
            .into_iter()
            .map(|choice| self.bind(point, choice))
            .collect()
    }

    /// Every binding, sorted by slot and then decision kind.
    pub fn bindings(&self) -> Vec<(DecisionPoint, Choice)> {
        let mut all: Vec<_> = self.iter().collect();
        all.sort_by_key(|(point, _)| *point);
        all
    }

    /// Bindings from newest to oldest.
    fn iter(&self) -> impl Iterator<Item = (DecisionPoint, Choice)> + '_ {
        std::iter::successors(self.head.as_deref(), |b| b.parent.as_deref()).map(|b| (b.point, b.choice))
    }
}
