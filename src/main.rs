fn main() {
    gitlab_setup::app::cli::run();
}
