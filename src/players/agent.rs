//! Move-selection agents.
//!
//! Agents see the real board and the player they act for. Network-backed
//! agents take the canonical view themselves.

use crate::board::Board;
use crate::core::{GameRng, Player};
use crate::nn::{PolicyValueNetwork, StateEncoder};
use crate::rules::GameRules;

/// Anything that can pick an action index for the player to move.
pub trait Agent<G: GameRules> {
    /// Choose an action for `player`, or `None` if no action is legal.
    fn select_action(&mut self, game: &G, board: &G::Board, player: Player) -> Option<usize>;
}

// =============================================================================
// Random Agent
// =============================================================================

/// Uniform choice among the actions the legality mask admits.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }
}

impl<G: GameRules> Agent<G> for RandomAgent {
    fn select_action(&mut self, game: &G, board: &G::Board, player: Player) -> Option<usize> {
        let legal = game.legal_actions(board, player);
        self.rng.choose(&legal).copied()
    }
}

// =============================================================================
// Policy Sampling
// =============================================================================

/// Pick an action from `policy` restricted to `mask`.
///
/// With `temperature == 0` the highest-probability legal action wins, ties
/// broken at random. Otherwise each legal action is weighted by
/// `(p / p_max)^(1 / temperature)`, which keeps the top weight at 1 however
/// small the temperature. If the policy puts no mass on any legal action the
/// choice is uniform over the legal ones.
///
/// Returns `None` when the mask admits nothing or the lengths disagree.
pub fn sample_policy(policy: &[f32], mask: &[bool], temperature: f32, rng: &mut GameRng) -> Option<usize> {
    if policy.len() != mask.len() {
        return None;
    }

    let masked: Vec<f32> = policy
        .iter()
        .zip(mask)
        .map(|(&p, &legal)| if legal && p > 0.0 { p } else { 0.0 })
        .collect();

    if masked.iter().all(|&p| p == 0.0) {
        let legal: Vec<usize> = (0..mask.len()).filter(|&i| mask[i]).collect();
        return rng.choose(&legal).copied();
    }

    let best = masked.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if temperature <= 0.0 || !best.is_finite() {
        let candidates: Vec<usize> = (0..masked.len()).filter(|&i| masked[i] == best).collect();
        return rng.choose(&candidates).copied();
    }

    let exponent = 1.0 / temperature;
    let weights: Vec<f32> = masked.iter().map(|&p| (p / best).powf(exponent)).collect();
    rng.choose_weighted(&weights)
}

// =============================================================================
// Policy Agent
// =============================================================================

/// Plays from a policy network's output on the canonical view.
pub struct PolicyAgent<N: PolicyValueNetwork, E: StateEncoder> {
    network: N,
    encoder: E,
    temperature: f32,
    rng: GameRng,
}

impl<N: PolicyValueNetwork, E: StateEncoder> PolicyAgent<N, E> {
    /// Greedy agent (temperature 0).
    pub fn new(network: N, encoder: E, seed: u64) -> Self {
        Self {
            network,
            encoder,
            temperature: 0.0,
            rng: GameRng::new(seed),
        }
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    #[must_use]
    pub fn temperature(&self) -> f32 {
        self.temperature
    }
}

impl<G, N, E> Agent<G> for PolicyAgent<N, E>
where
    G: GameRules<Board = Board>,
    N: PolicyValueNetwork,
    E: StateEncoder,
{
    fn select_action(&mut self, game: &G, board: &Board, player: Player) -> Option<usize> {
        let view = game.canonical_view(board, player);
        let (policy, _value) = self.network.predict(&self.encoder.encode(&view));
        // The canonical view is always played as the first player.
        let mask = game.legal_action_mask(&view, Player::First);
        sample_policy(&policy, &mask, self.temperature, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::GeneralsGame;
    use crate::nn::{BoardEncoder, EncodedState, UniformPolicyZeroValue};
    use crate::players::Arena;

    struct FixedPolicy(Vec<f32>);

    impl PolicyValueNetwork for FixedPolicy {
        fn predict(&self, _encoded: &EncodedState) -> (Vec<f32>, f32) {
            (self.0.clone(), 0.0)
        }
    }

    #[test]
    fn test_random_agent_picks_legal() {
        let game = GeneralsGame::new(5, 5);
        let board = game.initial_board();
        let mut agent = RandomAgent::new(7);

        for _ in 0..20 {
            let action = Agent::<GeneralsGame>::select_action(&mut agent, &game, &board, Player::Second).unwrap();
            assert!([24, 49, 74, 99].contains(&action));
        }
    }

    #[test]
    fn test_sample_policy_greedy() {
        let mut rng = GameRng::new(0);
        let policy = [0.1, 0.6, 0.3];
        assert_eq!(sample_policy(&policy, &[true, true, true], 0.0, &mut rng), Some(1));
        assert_eq!(sample_policy(&policy, &[true, false, true], 0.0, &mut rng), Some(2));
    }

    #[test]
    fn test_sample_policy_respects_mask() {
        let mut rng = GameRng::new(3);
        let policy = [0.5, 0.5, 0.0, 0.0];
        let mask = [false, true, false, true];
        for _ in 0..50 {
            assert_eq!(sample_policy(&policy, &mask, 1.0, &mut rng), Some(1));
        }
    }

    #[test]
    fn test_sample_policy_falls_back_to_uniform() {
        let mut rng = GameRng::new(11);
        let policy = [1.0, 0.0, 0.0];
        let mask = [false, true, true];
        for _ in 0..20 {
            let action = sample_policy(&policy, &mask, 1.0, &mut rng).unwrap();
            assert!(action == 1 || action == 2);
        }
    }

    #[test]
    fn test_sample_policy_low_temperature() {
        let mut rng = GameRng::new(2);
        let uniform = vec![0.01; 100];
        let mask = vec![true; 100];
        for _ in 0..20 {
            assert!(sample_policy(&uniform, &mask, 0.01, &mut rng).is_some());
        }

        // Sharpened towards the top entry rather than lost to underflow.
        let policy = [0.2, 0.5, 0.3];
        for _ in 0..20 {
            assert_eq!(sample_policy(&policy, &[true; 3], 0.01, &mut rng), Some(1));
        }
    }

    #[test]
    fn test_sample_policy_empty_mask() {
        let mut rng = GameRng::new(0);
        assert_eq!(sample_policy(&[0.5, 0.5], &[false, false], 1.0, &mut rng), None);
        assert_eq!(sample_policy(&[0.5], &[true, true], 1.0, &mut rng), None);
    }

    #[test]
    fn test_policy_agent_uses_canonical_view() {
        let game = GeneralsGame::new(3, 3);
        let board = game.initial_board();

        // Put all mass on "Down from the bottom-right corner", which is only
        // legal for the second player's own general.
        let mut policy = vec![0.0; 36];
        policy[2 * 9 + 8] = 1.0;
        let mut agent = PolicyAgent::new(FixedPolicy(policy), BoardEncoder::new(3, 3), 0);

        assert_eq!(agent.select_action(&game, &board, Player::Second), Some(26));

        // No mass on the first player's legal set: uniform over its general.
        let action = agent.select_action(&game, &board, Player::First).unwrap();
        assert!([0, 9, 18, 27].contains(&action));
    }

    #[test]
    fn test_policy_agent_uniform_network() {
        let game = GeneralsGame::new(4, 4);
        let board = game.initial_board();
        let mut agent = PolicyAgent::new(UniformPolicyZeroValue::new(64), BoardEncoder::new(4, 4), 5)
            .with_temperature(1.0);
        assert_eq!(agent.temperature(), 1.0);

        let action = agent.select_action(&game, &board, Player::First).unwrap();
        assert!(game.legal_actions(&board, Player::First).contains(&action));
    }

    #[test]
    fn test_low_temperature_agents_finish_games() {
        let game = GeneralsGame::new(10, 10);
        let mut one = PolicyAgent::new(UniformPolicyZeroValue::new(400), BoardEncoder::new(10, 10), 1)
            .with_temperature(0.01);
        let mut two = PolicyAgent::new(UniformPolicyZeroValue::new(400), BoardEncoder::new(10, 10), 2)
            .with_temperature(0.01);

        let result = Arena::new(&game).play_games(2, &mut one, &mut two).unwrap();
        assert_eq!(result.games(), 2);
    }
}
