//! Board state and the primitive rule operations.
//!
//! A `Board` is the complete game state at one instant: the step counter and
//! three signed layers.
//!
//! - `troops`: army size per cell; the sign names the side the troops belong to
//! - `owns`: +1 / -1 / 0 controller of each cell, which may outlive its troops
//! - `generals`: +1 at the first player's general, -1 at the second's
//!
//! ## Move resolution
//!
//! Combat is resolved by sign propagation: moved troops are added to the
//! destination and the destination's owner becomes whichever sign the sum
//! has. A sum of exactly zero leaves ownership untouched.
//!
//! Every move application applies growth for the mover and then advances
//! `step` by one, including moves that turn out to be no-ops.

use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

use crate::core::{Direction, GameConfig, GameError, Move, Player, RuleConfig};

use super::grid::Grid;
use super::outcome::Outcome;

/// Period of the step layer in [`Board::to_array`]. Fixed regardless of the
/// rule set, so a network's input encoding does not depend on rules.
pub const STEP_LAYER_PERIOD: u32 = 50;

/// Complete game state at one instant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    step: u32,
    troops: Grid<i32>,
    owns: Grid<i8>,
    generals: Grid<i8>,
    rules: RuleConfig,
}

impl Board {
    /// Create the opening position of a `width x height` game with default rules.
    ///
    /// Panics on an empty or single-cell board.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_config(&GameConfig::new(width, height))
    }

    /// Create the opening position for `config`.
    ///
    /// The first player's general sits at the top-left corner, the second
    /// player's at the bottom-right; each owns its corner with one troop.
    pub fn with_config(config: &GameConfig) -> Self {
        let (width, height) = (config.width, config.height);
        assert!(width * height >= 2, "Board must have at least 2 cells");
        assert!(config.rules.has_positive_periods(), "Growth periods must be positive");

        let mut board = Self {
            width,
            height,
            step: 0,
            troops: Grid::new(width, height, 0),
            owns: Grid::new(width, height, 0),
            generals: Grid::new(width, height, 0),
            rules: config.rules,
        };

        for (player, (row, col)) in [
            (Player::First, (0, 0)),
            (Player::Second, (height - 1, width - 1)),
        ] {
            board.generals.set(row, col, player.marker());
            board.owns.set(row, col, player.marker());
            board.troops.set(row, col, player.sign());
        }

        board
    }

    // === Accessors ===

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of move applications so far.
    #[must_use]
    pub fn step(&self) -> u32 {
        self.step
    }

    #[must_use]
    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    #[must_use]
    pub fn troops(&self) -> &Grid<i32> {
        &self.troops
    }

    #[must_use]
    pub fn owns(&self) -> &Grid<i8> {
        &self.owns
    }

    #[must_use]
    pub fn generals(&self) -> &Grid<i8> {
        &self.generals
    }

    /// Signed troop count at a cell.
    #[must_use]
    pub fn troops_at(&self, row: usize, col: usize) -> i32 {
        self.troops.get(row, col)
    }

    /// Controller of a cell, if any.
    #[must_use]
    pub fn owner_at(&self, row: usize, col: usize) -> Option<Player> {
        Player::from_sign(i32::from(self.owns.get(row, col))).ok()
    }

    /// Whose general, if any, stands on a cell.
    #[must_use]
    pub fn general_at(&self, row: usize, col: usize) -> Option<Player> {
        Player::from_sign(i32::from(self.generals.get(row, col))).ok()
    }

    /// Location of a player's general.
    #[must_use]
    pub fn general_position(&self, player: Player) -> Option<(usize, usize)> {
        let marker = player.marker();
        self.generals.position(|g| g == marker)
    }

    /// Sum of all troops, signed in `player`'s favor.
    #[must_use]
    pub fn troop_balance(&self, player: Player) -> i64 {
        let total: i64 = self.troops.iter().map(i64::from).sum();
        total * i64::from(player.sign())
    }

    // === Transitions ===

    /// Apply one move for `player`, then grow troops and advance the step.
    ///
    /// The move is a silent no-op when the source is not owned by `player`,
    /// the destination is off the board, or the source holds no more than
    /// one troop. The step advances either way.
    ///
    /// Returns whether any troops were transferred.
    pub fn apply_move(&mut self, mv: Move, player: Player) -> bool {
        let moved = self.transfer(mv, player);
        self.grow_troops(player);
        self.step += 1;
        moved
    }

    /// [`Board::apply_move`] taking the source cell and direction separately.
    pub fn move_troops(&mut self, row: usize, col: usize, direction: Direction, player: Player) -> bool {
        self.apply_move(Move::new(row, col, direction), player)
    }

    fn transfer(&mut self, mv: Move, player: Player) -> bool {
        if mv.row >= self.height || mv.col >= self.width {
            return false;
        }
        if self.owns.get(mv.row, mv.col) != player.marker() {
            return false;
        }

        let Some((to_row, to_col)) = mv.direction.step_from(mv.row, mv.col, self.height, self.width) else {
            return false;
        };

        // Everything above the one troop that stays behind.
        let sign = player.sign();
        let moving = self.troops.get(mv.row, mv.col) - sign;
        if moving * sign <= 0 {
            return false;
        }

        let arrived = self.troops.get(to_row, to_col) + moving;
        self.troops.set(to_row, to_col, arrived);
        match arrived.signum() {
            1 => self.owns.set(to_row, to_col, 1),
            -1 => self.owns.set(to_row, to_col, -1),
            _ => {}
        }

        self.troops.set(mv.row, mv.col, sign);
        true
    }

    /// Scheduled growth for the player whose move just completed.
    ///
    /// Runs against the step the move was made on. When `step % 50` is 0 or 1
    /// every cell `player` owns gains a troop; otherwise, when `step % 4` is 0
    /// or 1, only `player`'s general does. Nothing grows before step 2.
    pub fn grow_troops(&mut self, player: Player) {
        let rules = self.rules;
        if self.step < rules.growth_start_step {
            return;
        }

        let layer = if self.step % rules.broad_growth_period < 2 {
            &self.owns
        } else if self.step % rules.general_growth_period < 2 {
            &self.generals
        } else {
            return;
        };

        let marker = player.marker();
        let sign = player.sign();
        let growing: Vec<_> = layer.coords().filter(|&(r, c)| layer.get(r, c) == marker).collect();
        for (row, col) in growing {
            let troops = self.troops.get(row, col);
            self.troops.set(row, col, troops + sign);
        }
    }

    // === Queries ===

    /// Cells `player` may move from.
    ///
    /// A cell qualifies when `player` owns it and it either holds more than
    /// one of `player`'s troops or is `player`'s general. Whether the move
    /// stays on the board is not checked here.
    #[must_use]
    pub fn valid_moves(&self, player: Player) -> Grid<bool> {
        let marker = player.marker();
        let sign = player.sign();
        let mut valid = Grid::new(self.width, self.height, false);
        for (row, col) in self.troops.coords() {
            let owned = self.owns.get(row, col) == marker;
            let stacked = self.troops.get(row, col) * sign > 1;
            let general = self.generals.get(row, col) == marker;
            valid.set(row, col, owned && (stacked || general));
        }
        valid
    }

    /// Whether `player` controls the cell holding `general_of`'s general.
    fn holds_general_of(&self, player: Player, general_of: Player) -> bool {
        self.general_position(general_of)
            .is_some_and(|(row, col)| self.owns.get(row, col) == player.marker())
    }

    /// Game status from `player`'s perspective.
    ///
    /// General capture is checked first. Past the step limit the side with
    /// the larger troop total wins.
    #[must_use]
    pub fn outcome(&self, player: Player) -> Outcome {
        let opponent = player.opponent();
        if self.holds_general_of(player, opponent) {
            return Outcome::Won;
        }
        if self.holds_general_of(opponent, player) {
            return Outcome::Lost;
        }
        if self.step <= self.rules.step_limit {
            return Outcome::Ongoing;
        }

        match self.troop_balance(player).cmp(&0) {
            std::cmp::Ordering::Greater => Outcome::Won,
            std::cmp::Ordering::Less => Outcome::Lost,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Terminal value from `player`'s perspective: 1 win, -1 loss, a small
    /// positive value for a tie at the step limit, 0 while the game is on.
    #[must_use]
    pub fn game_ended(&self, player: Player) -> f32 {
        self.outcome(player).value(self.rules.draw_value)
    }

    // === Views ===

    /// Negate every signed layer, swapping the two players' roles.
    pub fn flip_form(&mut self) {
        self.troops.update(|t| -t);
        self.owns.update(|o| -o);
        self.generals.update(|g| -g);
    }

    /// Mirror the board left-right.
    pub fn hflip(&mut self) {
        self.troops.flip_horizontal();
        self.owns.flip_horizontal();
        self.generals.flip_horizontal();
    }

    /// Mirror the board top-bottom.
    pub fn vflip(&mut self) {
        self.troops.flip_vertical();
        self.owns.flip_vertical();
        self.generals.flip_vertical();
    }

    // === Encodings ===

    /// Stable, lossless text key of the gameplay state.
    ///
    /// Two boards produce the same key exactly when their dimensions, step
    /// and all three layers agree.
    #[must_use]
    pub fn to_key(&self) -> String {
        fn join<T: Copy + ToString>(grid: &Grid<T>) -> String {
            grid.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",")
        }

        format!(
            "{}x{}@{}|{}|{}|{}",
            self.width,
            self.height,
            self.step,
            join(&self.troops),
            join(&self.owns),
            join(&self.generals),
        )
    }

    /// 64-bit hash of the same fields as [`Board::to_key`].
    ///
    /// Deterministic across runs, for hash-keyed search tables. Unlike the
    /// key it can collide.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.width.hash(&mut hasher);
        self.height.hash(&mut hasher);
        self.step.hash(&mut hasher);
        self.troops.hash(&mut hasher);
        self.owns.hash(&mut hasher);
        self.generals.hash(&mut hasher);
        hasher.finish()
    }

    /// Network input: four row-major layers of `width * height` values.
    ///
    /// Layer order is fixed: `step % STEP_LAYER_PERIOD` broadcast over every
    /// cell, then troops, ownership and generals.
    #[must_use]
    pub fn to_array(&self) -> Vec<f32> {
        let cells = self.width * self.height;
        let phase = (self.step % STEP_LAYER_PERIOD) as f32;

        let mut out = Vec::with_capacity(4 * cells);
        out.extend(std::iter::repeat(phase).take(cells));
        out.extend(self.troops.iter().map(|t| t as f32));
        out.extend(self.owns.iter().map(f32::from));
        out.extend(self.generals.iter().map(f32::from));
        out
    }

    /// Binary snapshot of the full board, rules included.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore a board written by [`Board::to_bytes`].
    ///
    /// Snapshots that decode but describe an impossible board (layers that
    /// disagree with the dimensions, zero growth periods) are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        let board: Self = bincode::deserialize(bytes)?;
        board.validate()?;
        Ok(board)
    }

    fn validate(&self) -> Result<(), GameError> {
        let (width, height) = (self.width, self.height);
        let cells = width.checked_mul(height).unwrap_or(0);
        if width == 0 || height == 0 || cells < 2 {
            return Err(GameError::InvalidBoard(format!("{width}x{height} has fewer than 2 cells")));
        }

        let layers = [
            ("troops", self.troops.width(), self.troops.height(), self.troops.len()),
            ("owns", self.owns.width(), self.owns.height(), self.owns.len()),
            ("generals", self.generals.width(), self.generals.height(), self.generals.len()),
        ];
        for (name, w, h, len) in layers {
            if w != width || h != height || len != cells {
                return Err(GameError::InvalidBoard(format!(
                    "{name} layer is {w}x{h} with {len} cells on a {width}x{height} board"
                )));
            }
        }

        if !self.rules.has_positive_periods() {
            return Err(GameError::InvalidBoard("growth periods must be positive".into()));
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Step {}:", self.step)?;
        for row in 0..self.height {
            for col in 0..self.width {
                let marker = if self.generals.get(row, col) != 0 { '*' } else { ' ' };
                write!(f, "{:>4}{}", self.troops.get(row, col), marker)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
