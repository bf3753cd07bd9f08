use finance_core::cli::{output, run_cli};

fn main() {
    finance_core::init();
    if let Err(err) = run_cli() {
        output::error(&err);
        std::process::exit(1);
    }
}
