use anyhow::Result;
use passbook::bin_utils::{Service, init_logger};

fn main() -> Result<()> {
    init_logger();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let service = Service {
        input: stdin.lock(),
        output: &mut stdout,
    };
    service.run()
}
