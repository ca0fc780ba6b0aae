// Ficheiro: src/engine/perft.rs
// Descrição: Perft - conta as folhas da árvore de lances legais para validar as regras
// contra totais conhecidos. A divisão na raiz corre num pool rayon.

use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::core::{Board, Move};
use crate::error::{ChessError, Result};

/// Configuração de uma execução perft paralela.
#[derive(Debug, Clone, Copy)]
pub struct PerftConfig {
    pub depth: u32,
    pub threads: usize,
}

impl Default for PerftConfig {
    fn default() -> Self {
        PerftConfig {
            depth: 3,
            threads: num_cpus::get().max(1),
        }
    }
}

impl PerftConfig {
    pub fn new(depth: u32) -> Self {
        PerftConfig { depth, ..Default::default() }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }
}

/// Resultado de um perft dividido: nós por lance da raiz.
#[derive(Debug, Clone)]
pub struct PerftReport {
    pub divide: Vec<(Move, u64)>,
    pub nodes: u64,
    pub elapsed: Duration,
}

impl PerftReport {
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 { self.nodes as f64 / secs } else { 0.0 }
    }
}

/// Perft sequencial para o lado a jogar. Usa copy-make, por isso `board` não é alterado.
pub fn perft(board: &Board, depth: u32) -> Result<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let mut scratch = board.clone();
    let moves = scratch.legal_moves(board.turn())?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0;
    for mv in moves {
        let mut child = board.clone();
        child.apply(mv)?;
        nodes += perft(&child, depth - 1)?;
    }
    Ok(nodes)
}

/// Reparte os lances da raiz por um pool rayon dedicado e devolve a contagem de cada um.
pub fn perft_divide(board: &Board, config: PerftConfig) -> Result<PerftReport> {
    let start = Instant::now();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .map_err(|e| ChessError::ThreadPool(e.to_string()))?;

    let mut scratch = board.clone();
    let root_moves = scratch.legal_moves(board.turn())?;
    let child_depth = config.depth.saturating_sub(1);

    let divide: Vec<(Move, u64)> = if config.depth == 0 {
        Vec::new()
    } else {
        pool.install(|| {
            root_moves
                .par_iter()
                .map(|&mv| -> Result<(Move, u64)> {
                    let mut child = board.clone();
                    child.apply(mv)?;
                    Ok((mv, perft(&child, child_depth)?))
                })
                .collect::<Result<Vec<_>>>()
        })?
    };

    let nodes = if config.depth == 0 { 1 } else { divide.iter().map(|(_, n)| n).sum() };
    let report = PerftReport { divide, nodes, elapsed: start.elapsed() };
    log::info!(
        "perft depth {} on {} threads: {} nodes in {:.2}ms ({:.0} nps)",
        config.depth,
        config.threads,
        report.nodes,
        report.elapsed.as_secs_f64() * 1000.0,
        report.nodes_per_second()
    );
    Ok(report)
}
