//! Brain contract tests - a minimal search policy drives the probe protocol

use tetris_core::{Board, Brain, Move, Piece};

/// Picks the lowest resting row over every rotation and column, probing
/// with place/undo and leaving the board exactly as found.
struct LowestDrop;

impl Brain for LowestDrop {
    fn best_move(
        &mut self,
        board: &mut Board,
        piece: &Piece,
        height_limit: usize,
    ) -> Option<Move> {
        let mut best: Option<Move> = None;
        let mut candidate = piece.clone();
        for _ in 0..4 {
            if candidate.width() <= board.width() {
                for x in 0..=(board.width() - candidate.width()) {
                    let x = x as i32;
                    let y = board.drop_height(&candidate, x);
                    let result = board.place(&candidate, x, y);
                    if result.is_success() && board.max_height() <= height_limit {
                        let score = y as f64;
                        if best.as_ref().map_or(true, |b| score < b.score) {
                            best = Some(Move {
                                piece: candidate.clone(),
                                x,
                                y,
                                score,
                            });
                        }
                    }
                    board.undo();
                }
            }
            candidate = candidate.rotated();
        }
        best
    }
}

#[test]
fn test_brain_finds_a_resting_move() {
    let mut board = Board::new(10, 20);
    let stick = &Piece::standard()[0];
    let limit = board.height();

    let mv = LowestDrop
        .best_move(&mut board, stick, limit)
        .expect("empty board always has a placement");
    assert_eq!(mv.y, 0);
    assert!(board.place(&mv.piece, mv.x, mv.y).is_success());
}

#[test]
fn test_brain_probing_leaves_board_unchanged() {
    let mut board = Board::new(10, 20);
    let pyramid = &Piece::standard()[6];
    assert!(board.place(pyramid, 3, 0).is_success());
    board.commit();
    let snapshot = board.clone();
    let limit = board.height();

    for p in Piece::standard() {
        let _ = LowestDrop.best_move(&mut board, p, limit);
        assert!(board.committed());
        assert_eq!(board, snapshot);
    }
}

#[test]
fn test_brain_returns_none_when_nothing_fits() {
    let mut board = Board::new(2, 2);
    let square = &Piece::standard()[5];
    assert!(board.place(square, 0, 0).is_success());
    board.commit();

    let stick = &Piece::standard()[0];
    let limit = board.height();
    assert_eq!(LowestDrop.best_move(&mut board, stick, limit), None);
}

#[test]
fn test_brain_respects_height_limit() {
    let mut board = Board::new(10, 20);
    let stick = &Piece::standard()[0];
    let square = &Piece::standard()[5];

    // A square always stacks two rows; only the flat stick fits under one.
    assert_eq!(LowestDrop.best_move(&mut board, square, 1), None);
    let mv = LowestDrop
        .best_move(&mut board, stick, 1)
        .expect("flat stick fits under the limit");
    assert_eq!(mv.piece.height(), 1);
}

#[test]
fn test_brain_works_as_trait_object() {
    let mut brain: Box<dyn Brain> = Box::new(LowestDrop);
    let mut board = Board::new(10, 20);
    let s2 = &Piece::standard()[4];
    let limit = board.height();
    assert!(brain.best_move(&mut board, s2, limit).is_some());
}
