fn main() {
    desktop_calculator::app::cli::run();
}
