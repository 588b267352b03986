use super::*;

#[test]
fn test_stone_for_ply() {
    assert_eq!(Stone::for_ply(0), Stone::Black);
    assert_eq!(Stone::for_ply(1), Stone::White);
    assert_eq!(Stone::for_ply(2), Stone::Black);
    assert_eq!(Stone::for_ply(15), Stone::White);
}

#[test]
fn test_coord_offset() {
    let c = Coord::new(1, -2);
    assert_eq!(c.offset((1, 1), 2), Coord::new(3, 0));
    assert_eq!(c.offset((1, -1), -3), Coord::new(-2, 1));
    assert_eq!(c.offset((0, 1), 0), c);
}

#[test]
fn test_coord_display() {
    assert_eq!(Coord::new(-7, 3).to_string(), "(-7, 3)");
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    let board = Board::new();
    assert_eq!(board.size(), 15);
    assert_eq!(board.half_extent(), 7);
}

#[test]
fn test_coord_validity() {
    let board = Board::new();
    assert!(board.is_valid(Coord::ORIGIN));
    assert!(board.is_valid(Coord::new(7, 7)));
    assert!(board.is_valid(Coord::new(-7, -7)));
    assert!(board.is_valid(Coord::new(-7, 7)));
    assert!(!board.is_valid(Coord::new(8, 0)));
    assert!(!board.is_valid(Coord::new(0, -8)));
    assert!(!board.is_valid(Coord::new(100, 100)));
}

#[test]
fn test_custom_size_validity() {
    let board = Board::with_size(9);
    assert_eq!(board.half_extent(), 4);
    assert!(board.is_valid(Coord::new(4, -4)));
    assert!(!board.is_valid(Coord::new(5, 0)));
}

#[test]
fn test_get_empty_and_off_board() {
    let board = Board::new();
    assert_eq!(board.get(Coord::ORIGIN), Stone::Empty);
    assert_eq!(board.get(Coord::new(20, -20)), Stone::Empty);
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new();
    let at = Coord::new(3, -1);

    board.place_stone(at, Stone::White);
    assert_eq!(board.get(at), Stone::White);
    assert!(!board.is_empty(at));
    assert_eq!(board.stone_count(), 1);

    board.remove_stone(at);
    assert_eq!(board.get(at), Stone::Empty);
    assert!(board.is_board_empty());

    // Removing an absent stone is a no-op
    board.remove_stone(at);
    assert!(board.is_board_empty());
}

#[test]
fn test_place_empty_stores_nothing() {
    let mut board = Board::new();
    let at = Coord::new(0, 1);
    board.place_stone(at, Stone::Black);
    board.place_stone(at, Stone::Empty);
    assert!(board.is_board_empty());
    assert!(board.stones().all(|(_, s)| s != Stone::Empty));
}
