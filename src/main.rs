fn main() {
    if let Err(err) = draughts_board_renderer::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
