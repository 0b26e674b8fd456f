//! Property tests over boards reached by seeded random play.

use proptest::prelude::*;

use generals_zero::core::{ActionSpace, Player};
use generals_zero::games::{GeneralsGame, Symmetry};
use generals_zero::players::{Agent, RandomAgent};
use generals_zero::rules::GameRules;
use generals_zero::Board;

/// Random walk of up to `plies` moves. Stops early once the game is over or
/// the mover has nothing legal to play.
fn random_board(width: usize, height: usize, seed: u64, plies: usize) -> (GeneralsGame, Board, Player) {
    let game = GeneralsGame::new(width, height);
    let mut agent = RandomAgent::new(seed);
    let mut board = game.initial_board();
    let mut player = Player::First;

    for _ in 0..plies {
        if game.is_terminal(&board, player) {
            break;
        }
        let Some(action) = agent.select_action(&game, &board, player) else {
            break;
        };
        let (next, to_move) = game.apply_action(&board, player, action).unwrap();
        board = next;
        player = to_move;
    }
    (game, board, player)
}

fn dims() -> impl Strategy<Value = (usize, usize)> {
    (1usize..7, 1usize..7).prop_filter("at least two cells", |(w, h)| w * h >= 2)
}

// =============================================================================
// Action Encoding
// =============================================================================

proptest! {
    #[test]
    fn prop_encode_decode_inverse((w, h) in dims(), raw in any::<usize>()) {
        let space = ActionSpace::new(w, h);
        let action = raw % space.size();
        let mv = space.decode(action).unwrap();

        prop_assert!(mv.row < h && mv.col < w);
        prop_assert_eq!(space.encode(mv), action);
    }

    #[test]
    fn prop_decode_rejects_out_of_range((w, h) in dims(), extra in 0usize..1000) {
        let space = ActionSpace::new(w, h);
        prop_assert!(space.decode(space.size() + extra).is_err());
    }
}

// =============================================================================
// Transitions
// =============================================================================

proptest! {
    #[test]
    fn prop_every_action_advances_step(
        (w, h) in dims(),
        seed in any::<u64>(),
        plies in 0usize..120,
        raw in any::<usize>(),
    ) {
        let (game, board, player) = random_board(w, h, seed, plies);
        let action = raw % game.action_space_size();
        let (next, to_move) = game.apply_action(&board, player, action).unwrap();

        prop_assert_eq!(next.step(), board.step() + 1);
        prop_assert_eq!(to_move, player.opponent());
        prop_assert_eq!(next.generals(), board.generals());
    }

    #[test]
    fn prop_troop_sign_matches_owner((w, h) in dims(), seed in any::<u64>(), plies in 0usize..150) {
        let (_, board, _) = random_board(w, h, seed, plies);
        for row in 0..h {
            for col in 0..w {
                let troops = board.troops_at(row, col);
                if troops != 0 {
                    let owner = board.owner_at(row, col).map(Player::sign);
                    prop_assert_eq!(owner, Some(troops.signum()));
                }
            }
        }
    }

    #[test]
    fn prop_mask_only_admits_owned_sources((w, h) in dims(), seed in any::<u64>(), plies in 0usize..120) {
        let (game, board, player) = random_board(w, h, seed, plies);
        let space = game.action_space();
        for action in game.legal_actions(&board, player) {
            let mv = space.decode(action).unwrap();
            prop_assert_eq!(board.owner_at(mv.row, mv.col), Some(player));
        }
    }

    #[test]
    fn prop_to_array_length((w, h) in dims(), seed in any::<u64>(), plies in 0usize..120) {
        let (_, board, _) = random_board(w, h, seed, plies);
        let array = board.to_array();

        prop_assert_eq!(array.len(), 4 * w * h);
        let phase = (board.step() % 50) as f32;
        prop_assert!(array[..w * h].iter().all(|&v| v == phase));
    }
}

// =============================================================================
// Canonical Form and Symmetries
// =============================================================================

proptest! {
    #[test]
    fn prop_canonical_view_is_involution((w, h) in dims(), seed in any::<u64>(), plies in 0usize..120) {
        let (game, board, _) = random_board(w, h, seed, plies);
        let once = game.canonical_view(&board, Player::Second).into_owned();
        let twice = game.canonical_view(&once, Player::Second).into_owned();

        prop_assert_eq!(&*game.canonical_view(&board, Player::First), &board);
        prop_assert_eq!(twice, board);
    }

    #[test]
    fn prop_canonical_terminal_value((w, h) in dims(), seed in any::<u64>(), plies in 0usize..150) {
        let (game, board, player) = random_board(w, h, seed, plies);
        let view = game.canonical_view(&board, player);
        prop_assert_eq!(
            game.terminal_value(&view, Player::First),
            game.terminal_value(&board, player)
        );
    }

    #[test]
    fn prop_symmetries_are_involutions((w, h) in dims(), seed in any::<u64>(), plies in 0usize..120) {
        let (game, board, _) = random_board(w, h, seed, plies);
        let space = game.action_space();
        let policy: Vec<f32> = (0..space.size()).map(|i| i as f32).collect();

        for sym in Symmetry::ALL {
            prop_assert_eq!(sym.apply_board(&sym.apply_board(&board)), board.clone());
            let back = sym.apply_policy(space, &sym.apply_policy(space, &policy).unwrap()).unwrap();
            prop_assert_eq!(back, policy.clone());
        }
    }

    #[test]
    fn prop_symmetries_preserve_mass(
        (w, h) in dims(),
        weights in proptest::collection::vec(0.0f32..1.0, 144),
    ) {
        let game = GeneralsGame::new(w, h);
        let policy = &weights[..game.action_space_size()];
        let mut expected = policy.to_vec();
        expected.sort_by(f32::total_cmp);

        for (_, pi) in game.symmetries(&game.initial_board(), policy).unwrap() {
            let mut sorted = pi.clone();
            sorted.sort_by(f32::total_cmp);
            prop_assert_eq!(sorted, expected.clone());
        }
    }

    #[test]
    fn prop_symmetry_commutes_with_moves(
        (w, h) in dims(),
        seed in any::<u64>(),
        plies in 0usize..120,
        raw in any::<usize>(),
    ) {
        let (game, board, player) = random_board(w, h, seed, plies);
        let space = game.action_space();
        let action = raw % space.size();
        let (moved, _) = game.apply_action(&board, player, action).unwrap();

        for sym in Symmetry::ALL {
            let mirrored = sym.apply_board(&board);
            let (mirrored_moved, _) = game
                .apply_action(&mirrored, player, sym.map_action(space, action).unwrap())
                .unwrap();
            prop_assert_eq!(mirrored_moved, sym.apply_board(&moved));
        }
    }

    #[test]
    fn prop_symmetric_masks_agree((w, h) in dims(), seed in any::<u64>(), plies in 0usize..120) {
        let (game, board, player) = random_board(w, h, seed, plies);
        let space = game.action_space();
        let mask = game.legal_action_mask(&board, player);

        for sym in Symmetry::ALL {
            let mirrored = game.legal_action_mask(&sym.apply_board(&board), player);
            for action in 0..space.size() {
                prop_assert_eq!(mirrored[sym.map_action(space, action).unwrap()], mask[action]);
            }
        }
    }
}

// =============================================================================
// Keys
// =============================================================================

proptest! {
    #[test]
    fn prop_key_identifies_board(
        (w, h) in dims(),
        seed_a in any::<u64>(),
        seed_b in any::<u64>(),
        plies in 0usize..60,
    ) {
        let (_, a, _) = random_board(w, h, seed_a, plies);
        let (_, b, _) = random_board(w, h, seed_b, plies);

        prop_assert_eq!(a.to_key() == b.to_key(), a == b);
        if a == b {
            prop_assert_eq!(a.fingerprint(), b.fingerprint());
        }
    }

    #[test]
    fn prop_snapshot_round_trip((w, h) in dims(), seed in any::<u64>(), plies in 0usize..120) {
        let (_, board, _) = random_board(w, h, seed, plies);
        let restored = Board::from_bytes(&board.to_bytes().unwrap()).unwrap();
        prop_assert_eq!(restored, board);
    }
}
