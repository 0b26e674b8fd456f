//! Agent match bindings for Python.

use pyo3::prelude::*;

use crate::core::GameConfig;
use crate::games::GeneralsGame;
use crate::nn::BoardEncoder;
use crate::players::{Arena, PolicyAgent, RandomAgent};
use crate::rules::GameRules;

use super::py_game::PyGeneralsGame;
use super::py_nn::PyPolicyValueNetwork;
use super::to_py_err;

/// Pit a network-driven agent against a uniform random agent.
///
/// The network agent is agent one. Returns `(one_won, two_won, draws)`.
#[pyfunction]
#[pyo3(signature = (game, network, games = 2, temperature = 0.0, seed = 0))]
pub fn pit(
    py: Python<'_>,
    game: &PyGeneralsGame,
    network: Py<PyPolicyValueNetwork>,
    games: u32,
    temperature: f32,
    seed: u64,
) -> PyResult<(u32, u32, u32)> {
    let (width, height) = game.0.board_dims();
    let bridge = PyPolicyValueNetwork::from_handle(py, &network);
    let mut one = PolicyAgent::new(bridge, BoardEncoder::new(width, height), seed).with_temperature(temperature);
    let mut two = RandomAgent::new(seed.wrapping_add(1));

    let result = Arena::new(&game.0)
        .play_games(games, &mut one, &mut two)
        .map_err(to_py_err)?;
    Ok((result.one_won, result.two_won, result.draws))
}

/// Pit two uniform random agents on a fresh `width x height` board.
#[pyfunction]
#[pyo3(signature = (width = 5, height = 5, games = 2, seed = 0))]
pub fn pit_random(width: usize, height: usize, games: u32, seed: u64) -> PyResult<(u32, u32, u32)> {
    super::check_dims(width, height)?;
    let game = GeneralsGame::from_config(GameConfig::new(width, height));
    let result = Arena::new(&game)
        .play_games(games, &mut RandomAgent::new(seed), &mut RandomAgent::new(seed.wrapping_add(1)))
        .map_err(to_py_err)?;
    Ok((result.one_won, result.two_won, result.draws))
}
