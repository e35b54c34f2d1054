fn main() {
    if let Err(exit_code) = ckb_unique_bin::run_app() {
        ::std::process::exit(exit_code.into());
    }
}
