// Ficheiro: src/core/fen.rs
// Descrição: Importação e exportação de posições em notação FEN (generalizada para N×N).

use super::board::Board;
use super::config::BoardConfig;
use super::types::*;
use crate::error::{ChessError, Result};

impl Board {
    /// Cria um novo tabuleiro a partir de uma string FEN.
    ///
    /// O tamanho do tabuleiro é o número de linhas da disposição das peças. Os
    /// contadores de meio-lances e de lances são aceites e ignorados.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let invalid = |reason: &str| ChessError::InvalidFen(format!("{}: {}", reason, fen));

        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 || parts.len() > 6 {
            return Err(invalid("wrong number of fields"));
        }

        // Parse board (parts[0])
        let rows: Vec<&str> = parts[0].split('/').collect();
        let config = BoardConfig::new(rows.len()).map_err(|_| invalid("unsupported board size"))?;
        let size = config.size() as i32;
        let mut board = Board::with_config(config);

        for (row_idx, row) in rows.iter().enumerate() {
            let rank = size - 1 - row_idx as i32;
            let mut file = 0i32;
            let mut chars = row.chars().peekable();
            while let Some(ch) = chars.next() {
                if let Some(digit) = ch.to_digit(10) {
                    // Tabuleiros maiores que 9 usam contagens com vários dígitos.
                    let mut empty = digit as i32;
                    while let Some(next) = chars.peek().and_then(|c| c.to_digit(10)) {
                        empty = empty * 10 + next as i32;
                        if empty > size {
                            return Err(invalid("row too long"));
                        }
                        chars.next();
                    }
                    file += empty;
                    if file > size {
                        return Err(invalid("row too long"));
                    }
                } else {
                    let piece = Piece::from_fen_char(ch).ok_or_else(|| invalid("invalid piece"))?;
                    if file >= size {
                        return Err(invalid("row too long"));
                    }
                    board.set(Square::new(file, rank), Some(piece));
                    file += 1;
                }
            }
            if file != size {
                return Err(invalid("row length does not match board size"));
            }
        }

        // To move (parts[1])
        let turn = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(invalid("invalid side to move")),
        };
        board.set_turn(turn);

        // Castling (parts[2])
        let castling = parts[2];
        if castling != "-" && !castling.chars().all(|c| "KQkq".contains(c)) {
            return Err(invalid("invalid castling field"));
        }
        for (color, kingside, queenside) in [(Color::White, 'K', 'Q'), (Color::Black, 'k', 'q')] {
            let has_kingside = castling.contains(kingside);
            let has_queenside = castling.contains(queenside);
            let flags = board.castling_flags_mut(color);
            if !has_kingside {
                flags.mark_rook_moved(CastleSide::Kingside);
            }
            if !has_queenside {
                flags.mark_rook_moved(CastleSide::Queenside);
            }
            if !has_kingside && !has_queenside {
                flags.mark_king_moved();
            }
        }

        // En passant (parts[3]): a FEN guarda a casa atrás do peão, o tabuleiro guarda o destino.
        if parts[3] != "-" {
            let target: Square = parts[3].parse().map_err(|_| invalid("invalid en passant square"))?;
            let pawn_square = target.offset(0, (!turn).forward());
            if !board.in_bounds(pawn_square) {
                return Err(invalid("en passant square outside the board"));
            }
            board.set_last_double_move(Some(pawn_square));
        }

        for counter in parts.iter().skip(4) {
            counter.parse::<u32>().map_err(|_| invalid("invalid move counter"))?;
        }

        Ok(board)
    }

    /// Exporta a posição atual em FEN. Os contadores são sempre "0 1".
    pub fn to_fen(&self) -> String {
        let size = self.size() as i32;
        let mut fen = String::new();

        for rank in (0..size).rev() {
            let mut empty = 0;
            for file in 0..size {
                match self.piece_at(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.turn() {
            Color::White => 'w',
            Color::Black => 'b',
        });

        let mut castling = String::new();
        for (color, kingside, queenside) in [(Color::White, 'K', 'Q'), (Color::Black, 'k', 'q')] {
            let flags = self.castling_flags(color);
            if flags.can_castle(CastleSide::Kingside) {
                castling.push(kingside);
            }
            if flags.can_castle(CastleSide::Queenside) {
                castling.push(queenside);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        fen.push(' ');
        fen.push_str(&castling);

        fen.push(' ');
        match self.last_double_move() {
            Some(pawn_square) => {
                let target = pawn_square.offset(0, -(!self.turn()).forward());
                fen.push_str(&target.to_string());
            }
            None => fen.push('-'),
        }

        fen.push_str(" 0 1");
        fen
    }
}
