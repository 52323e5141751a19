fn main() {
    tutorgate::app::cli::run();
}
