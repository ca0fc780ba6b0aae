// Ficheiro: src/engine/playout.rs
// Descrição: Partidas aleatórias - cada lado escolhe ao acaso entre os lances legais
// até ao fim do jogo.

use rand::seq::SliceRandom;
use rand::Rng;

use super::terminal::GameStatus;
use crate::core::{AppliedMove, Board};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub moves: Vec<AppliedMove>,
    /// Estado do lado a jogar quando a partida parou.
    pub status: GameStatus,
}

impl PlayoutResult {
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

/// Joga lances legais aleatórios em `board` até ao mate, ao afogamento ou a `max_plies`.
///
/// Com um gerador semeado (`StdRng::seed_from_u64`) a partida é reprodutível.
pub fn random_playout<R: Rng + ?Sized>(board: &mut Board, rng: &mut R, max_plies: usize) -> Result<PlayoutResult> {
    let mut moves = Vec::new();

    loop {
        let color = board.turn();
        let status = board.status(color)?;
        if status.is_terminal() || moves.len() >= max_plies {
            log::info!("playout stopped after {} plies: {:?} for {:?}", moves.len(), status, color);
            return Ok(PlayoutResult { moves, status });
        }

        let legal = board.legal_moves(color)?;
        let Some(&mv) = legal.choose(rng) else {
            return Ok(PlayoutResult { moves, status });
        };
        if let Some(applied) = board.apply(mv)? {
            moves.push(applied);
        }
    }
}
