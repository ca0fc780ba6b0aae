// Xeque - demonstração: posição inicial, perft e uma partida aleatória.
use rand::rngs::StdRng;
use rand::SeedableRng;
use xeque::engine::{perft_divide, random_playout};
use xeque::*;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> xeque::Result<()> {
    println!("=== XEQUE: MOTOR DE REGRAS ===\n");

    let board = Board::standard();
    println!("{}", board);
    println!("FEN: {}\n", board.to_fen());

    println!("=== PERFT ===");
    for depth in 1..=3 {
        let report = perft_divide(&board, PerftConfig::new(depth))?;
        println!(
            "depth {}: {} nodes ({:.2}ms, {:.0} nps)",
            depth,
            report.nodes,
            report.elapsed.as_secs_f64() * 1000.0,
            report.nodes_per_second()
        );
    }

    println!("\n=== PARTIDA ALEATÓRIA ===");
    let mut game = Board::standard();
    let mut rng = StdRng::seed_from_u64(2024);
    let result = random_playout(&mut game, &mut rng, 200)?;

    let line: Vec<String> = result.moves.iter().map(|m| m.to_string()).collect();
    println!("{}", line.join(" "));
    println!("\n{}", game);
    println!("Lances: {}  Estado ({:?}): {:?}", result.plies(), game.turn(), result.status);

    Ok(())
}
