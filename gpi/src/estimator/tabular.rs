use super::{expected_value, find_max, ActionValueEstimator, EstimatorKind, Toggle};
use crate::{domains::Environment, Error, Result};
use ndarray::Array2;
use rand::{rngs::StdRng, Rng};
use std::{collections::HashMap, hash::Hash};

/// Serialisable copy of a tabular estimator's mutable state.
///
/// Rows follow the order in which states were enumerated at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub kind: EstimatorKind,
    pub toggle: Toggle,

    pub primary: Array2<f64>,
    pub auxiliary: Array2<f64>,
}

/// Tabular action-value function over a finite state domain.
///
/// States are mapped once, at construction, to rows of two dense
/// `(n_states, n_actions)` tables initialised to zero. With
/// `EstimatorKind::Single` only the primary table is used. With
/// `EstimatorKind::Double`:
///
/// - updates write the table selected by the toggle and then flip it;
/// - `action_value` reads the table selected by the toggle;
/// - greedy selection uses the sum of both tables;
/// - `best_action_value` and `expected_action_value` read the table *not*
///   selected by the toggle.
#[derive(Clone, Debug)]
pub struct TabularEstimator<S, R = StdRng> {
    epsilon: f64,
    kind: EstimatorKind,
    toggle: Toggle,

    index: HashMap<S, usize>,

    primary: Array2<f64>,
    auxiliary: Array2<f64>,

    rng: R,
}

impl<S: Eq + Hash, R> TabularEstimator<S, R> {
    pub fn new<I>(states: I, n_actions: usize, epsilon: f64, kind: EstimatorKind, rng: R) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
    {
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(Error::Config(format!("epsilon must lie in [0, 1], got {}", epsilon)));
        }

        if n_actions == 0 {
            return Err(Error::Config("the action set must not be empty".to_owned()));
        }

        let mut index = HashMap::new();
        for s in states {
            let row = index.len();

            index.entry(s).or_insert(row);
        }

        let dim = (index.len(), n_actions);

        Ok(TabularEstimator {
            epsilon,
            kind,
            toggle: Toggle::default(),

            index,

            primary: Array2::zeros(dim),
            auxiliary: Array2::zeros(dim),

            rng,
        })
    }

    /// Size the tables from the environment's enumerated domains.
    pub fn from_environment<E>(environment: &E, epsilon: f64, kind: EstimatorKind, rng: R) -> Result<Self>
    where
        E: Environment<State = S>,
    {
        let n_actions = environment.enumerate_actions().len();

        TabularEstimator::new(environment.enumerate_states(), n_actions, epsilon, kind, rng)
    }

    pub fn epsilon(&self) -> f64 { self.epsilon }

    pub fn kind(&self) -> EstimatorKind { self.kind }

    pub fn toggle(&self) -> Toggle { self.toggle }

    pub fn n_states(&self) -> usize { self.index.len() }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            kind: self.kind,
            toggle: self.toggle,

            primary: self.primary.clone(),
            auxiliary: self.auxiliary.clone(),
        }
    }

    /// Reinstate tables and toggle from a snapshot of an estimator built over
    /// the same domain.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<()> {
        if snapshot.kind != self.kind {
            return Err(Error::Config(format!(
                "cannot restore a {} snapshot into a {} estimator",
                snapshot.kind.name(),
                self.kind.name()
            )));
        }

        let expected = self.primary.dim();

        for found in [snapshot.primary.dim(), snapshot.auxiliary.dim()].iter() {
            if *found != expected {
                return Err(Error::Shape { expected, found: *found });
            }
        }

        self.toggle = snapshot.toggle;
        self.primary = snapshot.primary;
        self.auxiliary = snapshot.auxiliary;

        Ok(())
    }

    fn row(&self, state: &S) -> Result<usize> { self.index.get(state).copied().ok_or(Error::Domain) }

    fn check_action(&self, action: usize) -> Result<()> {
        let n_actions = self.primary.cols();

        if action < n_actions {
            Ok(())
        } else {
            Err(Error::Range { action, n_actions })
        }
    }

    fn lookup_table(&self) -> &Array2<f64> {
        match (self.kind, self.toggle) {
            (EstimatorKind::Double, Toggle::Auxiliary) => &self.auxiliary,
            _ => &self.primary,
        }
    }

    fn evaluation_table(&self) -> &Array2<f64> {
        match (self.kind, self.toggle) {
            (EstimatorKind::Double, Toggle::Primary) => &self.auxiliary,
            _ => &self.primary,
        }
    }

    fn greedy_action(&self, row: usize) -> usize {
        match self.kind {
            EstimatorKind::Single => find_max(self.primary.row(row).iter().cloned()).0,
            EstimatorKind::Double => {
                let (primary, auxiliary) = (self.primary.row(row), self.auxiliary.row(row));

                find_max(primary.iter().zip(auxiliary.iter()).map(|(p, a)| p + a)).0
            },
        }
    }
}

impl<S: Eq + Hash, R: Rng> ActionValueEstimator<S> for TabularEstimator<S, R> {
    fn n_actions(&self) -> usize { self.primary.cols() }

    fn name(&self) -> &'static str { self.kind.name() }

    fn action_value(&self, state: &S, action: usize) -> Result<f64> {
        let row = self.row(state)?;
        self.check_action(action)?;

        Ok(self.lookup_table()[[row, action]])
    }

    fn update_action_value(&mut self, state: &S, action: usize, delta: f64) -> Result<()> {
        let row = self.row(state)?;
        self.check_action(action)?;

        match (self.kind, self.toggle) {
            (EstimatorKind::Single, _) => self.primary[[row, action]] += delta,
            (EstimatorKind::Double, Toggle::Primary) => {
                self.primary[[row, action]] += delta;
                self.toggle = self.toggle.flip();
            },
            (EstimatorKind::Double, Toggle::Auxiliary) => {
                self.auxiliary[[row, action]] += delta;
                self.toggle = self.toggle.flip();
            },
        }

        Ok(())
    }

    fn choose_next_action(&mut self, state: &S, greedy: bool) -> Result<usize> {
        let row = self.row(state)?;

        if !greedy && self.rng.gen::<f64>() < self.epsilon {
            let n_actions = self.n_actions();

            Ok(self.rng.gen_range(0, n_actions))
        } else {
            Ok(self.greedy_action(row))
        }
    }

    fn expected_action_value(&self, state: &S) -> Result<f64> {
        let row = self.row(state)?;
        let values: Vec<f64> = self.evaluation_table().row(row).iter().cloned().collect();

        Ok(expected_value(&values, self.epsilon))
    }

    fn best_action_value(&self, state: &S) -> Result<f64> {
        let row = self.row(state)?;

        Ok(find_max(self.evaluation_table().row(row).iter().cloned()).1)
    }
}
