use draughts_board_renderer::{
    Arrow, Board, BoardRequest, Color, Config, Error, FormatError, Piece, PieceKind,
    RenderOptions, compute_layout, render_board,
};

fn assert_valid_svg(svg: &str, fixture: &str) {
    assert!(svg.starts_with("<svg"), "{fixture}: missing <svg tag");
    assert!(svg.ends_with("</svg>"), "{fixture}: missing </svg tag");
    assert!(
        svg.contains("xmlns=\"http://www.w3.org/2000/svg\""),
        "{fixture}: missing namespace"
    );
}

#[test]
fn render_all_fixtures() {
    // Keep this list explicit so new position shapes must be added intentionally.
    let fixtures = [
        (10, "W:W31,32,33,34,35,36,37,38,39,40,41,42,43,44,45,46,47,48,49,50:B1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16,17,18,19,20"),
        (10, "W:WK3:B10"),
        (10, "B:W28,K46,G33:Bk5,p19,12"),
        (10, "W"),
        (8, "W:W21,22,23,24,25,26,27,28,29,30,31,32:B1,2,3,4,5,6,7,8,9,10,11,12"),
        (8, "W:WP1:Bg32"),
        (12, "W:W67,K72:B1,k2"),
        (2, "W:W2:B1"),
    ];

    for (size, fen) in fixtures {
        let board = Board::from_fen(fen, size).unwrap_or_else(|err| panic!("{fen}: {err}"));
        for flipped in [false, true] {
            let options = RenderOptions {
                flipped,
                size: Some(360),
                arrows: vec![Arrow::new(1, 1), Arrow::new(1, board.fields())],
                last_move: vec![1, 2],
                ..RenderOptions::default()
            };
            let svg = render_board(Some(&board), &options);
            assert_valid_svg(&svg, fen);
            assert_eq!(
                svg.matches("<rect").count() as u32,
                size * size,
                "{fen}: one rect per cell"
            );
            assert_eq!(svg.matches("<use").count(), board.len(), "{fen}");
        }
    }
}

#[test]
fn empty_render_matches_default_board() {
    let svg = render_board(None, &RenderOptions::default());
    assert!(svg.contains("viewBox=\"0 0 450 450\""));
    assert!(!svg.contains("<g id="));
}

#[test]
fn decoded_example_position() {
    let board = Board::from_fen("W:WK3:B10", 10).unwrap();
    assert_eq!(board.piece_at(3), Some(Piece::new(PieceKind::King, Color::White)));
    assert_eq!(board.piece_at(10), Some(Piece::new(PieceKind::Man, Color::Black)));
    let occupied: Vec<u32> = board.pieces().map(|(square, _)| square).collect();
    assert_eq!(occupied, vec![3, 10]);
}

#[test]
fn malformed_placements_are_format_errors() {
    assert!(matches!(
        Board::from_fen("W:W1:B2:W3", 10),
        Err(Error::Format(FormatError::TooManySegments { .. }))
    ));
    assert!(matches!(
        Board::from_fen("W:WZ12", 10),
        Err(Error::Format(FormatError::UnknownPieceSymbol('Z')))
    ));
    assert_eq!(Board::from_fen("W", 7), Err(Error::InvalidBoardSize(7)));
}

#[test]
fn flipped_layout_is_a_half_turn() {
    let board = Board::starting(10).unwrap();
    let plain = compute_layout(Some(&board), &RenderOptions::default());
    let flipped = compute_layout(
        Some(&board),
        &RenderOptions {
            flipped: true,
            ..RenderOptions::default()
        },
    );
    for cell in &flipped.cells {
        let mirror = plain
            .cells
            .iter()
            .find(|other| other.x == 9 - cell.x && other.y == 9 - cell.y)
            .unwrap();
        assert_eq!((cell.px, cell.py), (mirror.px, mirror.py));
    }
}

#[test]
fn request_round_trip_to_svg() {
    let request =
        BoardRequest::from_query("fen=W%3AW31%2CK32%3AB1&lastMove=3227&arrows=0101,0105").unwrap();
    let svg = request.render_svg(&Config::default());
    assert_valid_svg(&svg, "request");
    assert!(svg.contains("width=\"360\""));
    assert_eq!(svg.matches("<circle").count(), 1);
    assert_eq!(svg.matches("class=\"arrow\"").count(), 2);
    assert_eq!(svg.matches("lastmove").count(), 2);
}

#[cfg(feature = "png")]
#[test]
fn request_renders_png() {
    let request = BoardRequest::from_query("fen=W:W31:B1&size=64").unwrap();
    let png = request.render_png(&Config::default()).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}
