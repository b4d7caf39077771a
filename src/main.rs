fn main() {
    env_logger::init();
    chess_cli::run();
}
