use crate::domains::Environment;

/// Transition function: `(state, action) -> (next state, reward, terminal)`.
pub type Dynamics = fn(usize, usize) -> (usize, f64, bool);

/// Small deterministic environment over states `0..n_states`.
pub struct MockEnvironment {
    n_states: usize,
    n_actions: usize,
    start: usize,
    dynamics: Dynamics,

    current: usize,
    previous: usize,
    latest_action: Option<usize>,
    latest_reward: f64,
    episode_reward: f64,
    over: bool,
}

impl MockEnvironment {
    pub fn new(n_states: usize, n_actions: usize, start: usize, dynamics: Dynamics) -> Self {
        MockEnvironment {
            n_states,
            n_actions,
            start,
            dynamics,

            current: start,
            previous: start,
            latest_action: None,
            latest_reward: 0.0,
            episode_reward: 0.0,
            over: false,
        }
    }

    /// One state, two actions: action 0 costs `-1`, action 1 ends the episode
    /// with reward `0`.
    pub fn single_state() -> Self {
        MockEnvironment::new(1, 2, 0, |_, a| if a == 1 { (0, 0.0, true) } else { (0, -1.0, false) })
    }

    /// Two states, two actions: action `a` moves to state `a` for a reward of
    /// `-1`.
    pub fn two_states() -> Self { MockEnvironment::new(2, 2, 0, |_, a| (a, -1.0, false)) }
}

impl Environment for MockEnvironment {
    type State = usize;

    fn reset(&mut self) {
        self.current = self.start;
        self.previous = self.start;
        self.latest_action = None;
        self.latest_reward = 0.0;
        self.episode_reward = 0.0;
        self.over = false;
    }

    fn is_episode_over(&self) -> bool { self.over }

    fn current_state(&self) -> usize { self.current }

    fn previous_state(&self) -> usize { self.previous }

    fn perform_action(&mut self, action: usize) {
        let (next, reward, terminal) = (self.dynamics)(self.current, action);

        self.previous = self.current;
        self.current = next;
        self.latest_action = Some(action);
        self.latest_reward = reward;
        self.episode_reward += reward;
        self.over = terminal;
    }

    fn latest_action(&self) -> Option<usize> { self.latest_action }

    fn latest_reward(&self) -> f64 { self.latest_reward }

    fn episode_reward(&self) -> f64 { self.episode_reward }

    fn enumerate_states(&self) -> Vec<usize> { (0..self.n_states).collect() }

    fn enumerate_actions(&self) -> Vec<usize> { (0..self.n_actions).collect() }
}
