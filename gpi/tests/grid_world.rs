use gpi::{
    control::ControlKind,
    domains::{Environment, GridWorld, Level},
    estimator::{ActionValueEstimator, EstimatorKind},
    memory::make_shared,
    Config,
    Trainer,
};
use rand::{rngs::StdRng, SeedableRng};

fn mean(xs: &[f64]) -> f64 { xs.iter().sum::<f64>() / xs.len() as f64 }

fn run(config: Config, kind: ControlKind, level: Level, episodes: usize) -> Vec<f64> {
    let environment = make_shared(GridWorld::new(level));
    let agent = config.agent(environment, StdRng::seed_from_u64(2019)).unwrap();
    let control = config.control(kind).unwrap();

    let mut trainer = Trainer::with_episodes(agent, control, episodes);

    trainer.train().unwrap().to_vec()
}

#[test]
fn q_learning_improves_on_wall_level() {
    let rewards = run(Config::default(), ControlKind::QLearning, Level::Wall, 300);

    assert_eq!(rewards.len(), 300);
    assert!(rewards.iter().all(|&r| r <= 0.0 && r >= -60.0));
    assert!(mean(&rewards[280..]) > mean(&rewards[..20]));
}

#[test]
fn every_rule_runs_with_double_estimation() {
    let config = Config { double: true, ..Config::default() };

    for &kind in &[ControlKind::SARSA, ControlKind::ExpectedSARSA, ControlKind::QLearning] {
        let rewards = run(config, kind, Level::Windy, 20);

        assert_eq!(rewards.len(), 20);
        assert!(rewards.iter().all(|&r| r <= 0.0 && r >= -60.0));
    }
}

#[test]
fn trained_tables_cover_the_grid() {
    let config = Config::default();
    let environment = make_shared(GridWorld::new(Level::Wall));
    let agent = config.agent(environment.clone(), StdRng::seed_from_u64(7)).unwrap();

    let mut trainer = Trainer::with_episodes(agent, config.control(ControlKind::ExpectedSARSA).unwrap(), 5);
    trainer.train().unwrap();

    assert_eq!(trainer.label(), "expected_sarsa-simple_tabular");

    let q = trainer.agent().estimator();
    assert_eq!(q.kind(), EstimatorKind::Single);
    assert_eq!(q.n_states(), environment.borrow().enumerate_states().len());

    // Walls are never entered, so their rows are never updated.
    assert_eq!(q.best_action_value(&(0, 0)).unwrap(), 0.0);
    assert!(q.action_value(&(99, 99), 0).is_err());
}
