//! Action-value estimation and epsilon-greedy action selection.
use crate::Result;

import_all!(tabular);

/// Whether an estimator keeps one table or two decorrelated tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EstimatorKind {
    Single,

    /// Double estimation: one table selects, the other evaluates, which
    /// removes the maximisation bias of single-table bootstrapping.
    Double,
}

impl EstimatorKind {
    pub fn from_double(double: bool) -> EstimatorKind {
        if double {
            EstimatorKind::Double
        } else {
            EstimatorKind::Single
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EstimatorKind::Single => "simple_tabular",
            EstimatorKind::Double => "double_tabular",
        }
    }
}

/// Table targeted by the next update of a double estimator.
///
/// Every update flips the toggle, so it returns to its initial value after an
/// even number of updates. The value is part of the estimator's state and must
/// be saved alongside the tables when checkpointing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Toggle {
    Primary,
    Auxiliary,
}

impl Toggle {
    pub fn flip(self) -> Toggle {
        match self {
            Toggle::Primary => Toggle::Auxiliary,
            Toggle::Auxiliary => Toggle::Primary,
        }
    }
}

impl Default for Toggle {
    fn default() -> Toggle { Toggle::Primary }
}

/// An interface for action-value functions over a discrete action set.
///
/// Every operation fails with `Error::Domain` for a state outside the domain
/// the estimator was built for, and with `Error::Range` for an action outside
/// `[0, n_actions)`. A failing call leaves the estimator unchanged.
pub trait ActionValueEstimator<S: ?Sized> {
    fn n_actions(&self) -> usize;

    /// Label used when comparing training runs.
    fn name(&self) -> &'static str;

    fn action_value(&self, state: &S, action: usize) -> Result<f64>;

    /// Add `delta` to the stored estimate of `(state, action)`.
    ///
    /// The delta is the already scaled TD increment, not a new value.
    fn update_action_value(&mut self, state: &S, action: usize, delta: f64) -> Result<()>;

    /// Sample the behaviour policy in `state`.
    ///
    /// Unless `greedy` is set, a uniformly random action is returned with
    /// probability epsilon. Otherwise the greedy action is returned, ties going
    /// to the lowest index; in that case no randomness is consumed.
    fn choose_next_action(&mut self, state: &S, greedy: bool) -> Result<usize>;

    /// Expected action-value of `state` under the epsilon-greedy policy.
    fn expected_action_value(&self, state: &S) -> Result<f64>;

    fn best_action_value(&self, state: &S) -> Result<f64>;
}

/// Index and value of the first maximal element.
///
/// A NaN in first position is never displaced, so an all-NaN row reports NaN.
pub(crate) fn find_max<I>(values: I) -> (usize, f64)
where
    I: IntoIterator<Item = f64>,
{
    let mut iter = values.into_iter().enumerate();

    match iter.next() {
        Some(first) => iter.fold(first, |acc, (i, x)| if x > acc.1 { (i, x) } else { acc }),
        None => (0, std::f64::NAN),
    }
}

/// Expected value of `values` under an epsilon-greedy policy:
/// the greedy entry is weighted `1 - epsilon + epsilon / n`, every other entry
/// `epsilon / n`.
pub(crate) fn expected_value(values: &[f64], epsilon: f64) -> f64 {
    let n = values.len() as f64;
    let (best, _) = find_max(values.iter().cloned());

    let explore = epsilon / n;
    let exploit = 1.0 - epsilon + explore;

    values
        .iter()
        .enumerate()
        .map(|(i, v)| if i == best { exploit * v } else { explore * v })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_max_first_index_on_ties() {
        assert_eq!(find_max(vec![1.0, 3.0, 3.0, 2.0]), (1, 3.0));
        assert_eq!(find_max(vec![0.0, 0.0]), (0, 0.0));
        assert_eq!(find_max(vec![-2.0, -1.0]), (1, -1.0));
        assert_eq!(find_max(vec![std::f64::NEG_INFINITY, std::f64::NEG_INFINITY]).0, 0);
    }

    #[test]
    fn test_find_max_keeps_nan_visible() {
        let (i, v) = find_max(vec![std::f64::NAN, std::f64::NAN]);

        assert_eq!(i, 0);
        assert!(v.is_nan());
        assert!(find_max(Vec::<f64>::new()).1.is_nan());
    }

    #[test]
    fn test_expected_value() {
        let values = [2.0, 5.0];

        assert!((expected_value(&values, 0.4) - 4.4).abs() < 1e-12);
        assert_eq!(expected_value(&values, 0.0), 5.0);
        assert!((expected_value(&values, 1.0) - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_toggle_alternates() {
        let t = Toggle::default();

        assert_eq!(t, Toggle::Primary);
        assert_eq!(t.flip(), Toggle::Auxiliary);
        assert_eq!(t.flip().flip(), t);
    }

    #[test]
    fn test_toggle_tokens() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(&Toggle::Auxiliary, &[Token::UnitVariant {
            name: "Toggle",
            variant: "Auxiliary",
        }]);
        assert_tokens(&EstimatorKind::Double, &[Token::UnitVariant {
            name: "EstimatorKind",
            variant: "Double",
        }]);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(EstimatorKind::from_double(false).name(), "simple_tabular");
        assert_eq!(EstimatorKind::from_double(true).name(), "double_tabular");
    }
}
