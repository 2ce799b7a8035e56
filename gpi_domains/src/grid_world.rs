use crate::Environment;

const WALL: char = '#';
const GOAL: char = 'G';
const AGENT: char = 'A';
const WIND: char = '.';
const STRONG_WIND: char = '+';

const LEVEL_WALL: [&str; 11] = [
    "####################",
    "#                 G#",
    "#                  #",
    "#                  #",
    "#                  #",
    "#                  #",
    "#                  #",
    "################## #",
    "#                  #",
    "#A                 #",
    "####################",
];

const LEVEL_WINDY: [&str; 11] = [
    "####################",
    "#G                 #",
    "#                  #",
    "#..................#",
    "#++++++++++++++++++#",
    "#..................#",
    "#                  #",
    "################## #",
    "#                  #",
    "#A                 #",
    "####################",
];

/// Preset grid layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    /// A single wall with one gap, no wind.
    Wall,

    /// The same wall with three rows of westward wind in front of the goal:
    /// `.` tiles push one extra tile west, `+` tiles push two.
    Windy,
}

impl Level {
    fn layout(self) -> &'static [&'static str] {
        match self {
            Level::Wall => &LEVEL_WALL,
            Level::Windy => &LEVEL_WINDY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Move {
    North,
    South,
    West,
    East,
}

impl Move {
    fn from_action(action: usize) -> Option<Move> {
        match action {
            0 => Some(Move::North),
            1 => Some(Move::South),
            2 => Some(Move::West),
            3 => Some(Move::East),
            _ => None,
        }
    }
}

/// Episodic gridworld where the agent must reach the goal tile as fast as
/// possible.
///
/// States are `(row, column)` coordinates. Actions are 0 = north, 1 = south,
/// 2 = west and 3 = east; [`QUIT`](#associatedconstant.QUIT) ends the
/// episode after this transition and any other action leaves the agent in
/// place. Every move costs `-1` except the one that reaches the goal, which
/// yields `0` and ends the episode. The episode also ends after `timeout`
/// moves.
#[derive(Clone, Debug)]
pub struct GridWorld {
    level: Level,
    timeout: usize,

    tiles: Vec<Vec<char>>,
    start: (usize, usize),

    position: (usize, usize),
    trail: Vec<(usize, usize)>,
    actions: Vec<usize>,
    elapsed: usize,
    over: bool,

    latest_reward: f64,
    episode_reward: f64,
}

impl GridWorld {
    pub const DEFAULT_TIMEOUT: usize = 60;

    /// Action that gives up on the current episode.
    pub const QUIT: usize = 9;

    pub fn new(level: Level) -> GridWorld {
        GridWorld::with_timeout(level, GridWorld::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(level: Level, timeout: usize) -> GridWorld {
        let mut start = (0, 0);
        let tiles: Vec<Vec<char>> = level
            .layout()
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.chars()
                    .enumerate()
                    .map(|(j, c)| {
                        if c == AGENT {
                            start = (i, j);
                            ' '
                        } else {
                            c
                        }
                    })
                    .collect()
            })
            .collect();

        let mut env = GridWorld {
            level,
            timeout,

            tiles,
            start,

            position: start,
            trail: vec![],
            actions: vec![],
            elapsed: 0,
            over: false,

            latest_reward: 0.0,
            episode_reward: 0.0,
        };

        env.reset();
        env
    }

    pub fn level(&self) -> Level { self.level }

    pub fn timeout(&self) -> usize { self.timeout }

    pub fn n_rows(&self) -> usize { self.tiles.len() }

    pub fn n_cols(&self) -> usize { self.tiles.first().map_or(0, |row| row.len()) }

    /// Every state visited since the last reset, start state first.
    pub fn trail(&self) -> &[(usize, usize)] { &self.trail }

    /// Draw the layout with every visited cell marked as `*`.
    pub fn render_path(&self) -> String {
        let mut canvas = self.tiles.clone();

        for &(i, j) in &self.trail {
            canvas[i][j] = '*';
        }

        canvas
            .into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn tile(&self, (i, j): (usize, usize)) -> char { self.tiles[i][j] }

    fn step(&mut self, m: Move) {
        let (i, j) = self.position;
        let target = match m {
            Move::North => i.checked_sub(1).map(|i| (i, j)),
            Move::South => Some((i + 1, j)),
            Move::West => j.checked_sub(1).map(|j| (i, j)),
            Move::East => Some((i, j + 1)),
        };

        if let Some(target) = target {
            let inside = target.0 < self.n_rows() && target.1 < self.n_cols();

            if inside && self.tile(target) != WALL {
                self.position = target;
            }
        }
    }
}

impl Environment for GridWorld {
    type State = (usize, usize);

    fn reset(&mut self) {
        self.position = self.start;
        self.trail = vec![self.start];
        self.actions.clear();
        self.elapsed = 0;
        self.over = false;

        self.latest_reward = 0.0;
        self.episode_reward = 0.0;
    }

    fn is_episode_over(&self) -> bool { self.over }

    fn current_state(&self) -> (usize, usize) { self.position }

    fn previous_state(&self) -> (usize, usize) {
        match self.trail.len() {
            0 | 1 => self.start,
            n => self.trail[n - 2],
        }
    }

    fn perform_action(&mut self, action: usize) {
        if self.over {
            return;
        }

        if let Some(m) = Move::from_action(action) {
            self.step(m);
        }

        match self.tile(self.position) {
            WIND => self.step(Move::West),
            STRONG_WIND => {
                self.step(Move::West);
                self.step(Move::West);
            },
            _ => {},
        }

        let reward = if self.tile(self.position) == GOAL {
            self.over = true;

            0.0
        } else {
            -1.0
        };

        self.elapsed += 1;
        if action == GridWorld::QUIT || self.elapsed == self.timeout {
            self.over = true;
        }

        self.actions.push(action);
        self.trail.push(self.position);

        self.latest_reward = reward;
        self.episode_reward += reward;
    }

    fn latest_action(&self) -> Option<usize> { self.actions.last().copied() }

    fn latest_reward(&self) -> f64 { self.latest_reward }

    fn episode_reward(&self) -> f64 { self.episode_reward }

    fn enumerate_states(&self) -> Vec<(usize, usize)> {
        let n_cols = self.n_cols();

        (0..self.n_rows())
            .flat_map(|i| (0..n_cols).map(move |j| (i, j)))
            .collect()
    }

    fn enumerate_actions(&self) -> Vec<usize> { vec![0, 1, 2, 3] }
}
