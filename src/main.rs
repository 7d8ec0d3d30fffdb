fn main() {
    use find_dependencies::cli::parse;
    let cli = parse();
    let code = find_dependencies::app::run_cli(cli);
    if code != 0 {
        std::process::exit(code);
    }
}
