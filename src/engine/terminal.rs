// Ficheiro: src/engine/terminal.rs
// Descrição: Enumeração de lances legais e deteção de xeque-mate e afogamento.

use crate::core::*;
use crate::error::Result;

/// Estado do jogo do ponto de vista de uma cor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl Board {
    /// Gera todos os lances legais de `color`, independentemente de quem tem a vez.
    ///
    /// Cada peça é testada contra todas as casas do tabuleiro; O(N²·N²) avaliações no pior caso.
    pub fn legal_moves(&mut self, color: Color) -> Result<Vec<Move>> {
        let pieces: Vec<(Square, Piece)> = self.occupied().filter(|(_, p)| p.color == color).collect();
        let targets: Vec<Square> = self.squares().collect();

        let mut moves = Vec::with_capacity(64);
        for (from, piece) in pieces {
            for &to in &targets {
                if self.is_move_safe(from, to, color, piece.kind)? {
                    moves.push(Move::new(from, to, piece));
                }
            }
        }
        Ok(moves)
    }

    /// Casas para onde a peça em `from` pode ir agora (para destacar na interface).
    ///
    /// Vazio se a casa está vazia ou a peça não é da cor que tem a vez.
    pub fn legal_destinations(&mut self, from: Square) -> Result<Vec<Square>> {
        let piece = match self.tile_contents(from)? {
            Some(piece) if self.is_turn_valid(piece.color) => piece,
            _ => return Ok(Vec::new()),
        };

        let targets: Vec<Square> = self.squares().collect();
        let mut destinations = Vec::new();
        for to in targets {
            if self.is_legal(from, to, piece.color, piece.kind)? {
                destinations.push(to);
            }
        }
        Ok(destinations)
    }

    /// Verifica se existe pelo menos um lance legal (pára no primeiro).
    pub fn has_legal_move(&mut self, color: Color) -> Result<bool> {
        let pieces: Vec<(Square, Piece)> = self.occupied().filter(|(_, p)| p.color == color).collect();
        let targets: Vec<Square> = self.squares().collect();

        for (from, piece) in pieces {
            for &to in &targets {
                if self.is_move_safe(from, to, color, piece.kind)? {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Xeque-mate: em xeque e sem nenhum lance legal.
    pub fn is_checkmate(&mut self, color: Color) -> Result<bool> {
        if !self.is_king_in_check(color)? {
            return Ok(false);
        }
        Ok(!self.has_legal_move(color)?)
    }

    /// Afogamento: fora de xeque e sem nenhum lance legal.
    pub fn is_stalemate(&mut self, color: Color) -> Result<bool> {
        if self.is_king_in_check(color)? {
            return Ok(false);
        }
        Ok(!self.has_legal_move(color)?)
    }

    /// Junta xeque, mate e afogamento numa só consulta.
    pub fn status(&mut self, color: Color) -> Result<GameStatus> {
        let in_check = self.is_king_in_check(color)?;
        let can_move = self.has_legal_move(color)?;
        Ok(match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Ongoing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_start_position_has_twenty_moves() {
        let mut board = Board::standard();
        let before = board.clone();
        assert_eq!(board.legal_moves(Color::White).unwrap().len(), 20);
        assert_eq!(board.legal_moves(Color::Black).unwrap().len(), 20);
        assert_eq!(board, before);
        assert_eq!(board.status(Color::White).unwrap(), GameStatus::Ongoing);
    }

    #[test]
    fn test_back_rank_mate() {
        let mut board = Board::from_fen("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert!(board.is_king_in_check(Color::Black).unwrap());
        assert!(board.is_checkmate(Color::Black).unwrap());
        assert!(!board.is_stalemate(Color::Black).unwrap());
        assert_eq!(board.status(Color::Black).unwrap(), GameStatus::Checkmate);
    }

    #[test]
    fn test_check_with_escape_is_not_mate() {
        // A torre de d8 pode ser capturada pela torre de a8.
        let mut board = Board::from_fen("r2R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert!(!board.is_checkmate(Color::Black).unwrap());
        assert_eq!(board.status(Color::Black).unwrap(), GameStatus::Check);
        let moves = board.legal_moves(Color::Black).unwrap();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].from, sq("a8"));
        assert_eq!(moves[0].to, sq("d8"));
    }

    #[test]
    fn test_stalemate() {
        let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(!board.is_king_in_check(Color::Black).unwrap());
        assert!(board.is_stalemate(Color::Black).unwrap());
        assert!(!board.is_checkmate(Color::Black).unwrap());
        assert_eq!(board.status(Color::Black).unwrap(), GameStatus::Stalemate);
    }

    #[test]
    fn test_legal_destinations_for_highlight() {
        let mut board = Board::standard();
        let mut knight = board.legal_destinations(sq("b1")).unwrap();
        knight.sort_by_key(|s| s.file);
        assert_eq!(knight, vec![sq("a3"), sq("c3")]);

        // Peça das pretas sem ser a sua vez, e casa vazia.
        assert!(board.legal_destinations(sq("b8")).unwrap().is_empty());
        assert!(board.legal_destinations(sq("e4")).unwrap().is_empty());
        assert!(board.legal_destinations(Square::new(9, 9)).is_err());
    }
}
