//! Render the course figures into `images/`
//!
//! Progress goes to stdout; set `RUST_LOG=info` for computed integrals and
//! solver errors on stderr.

use std::error::Error;
use std::path::Path;

use numplot_rs::figures;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut stdout = std::io::stdout().lock();
    figures::generate_all(Path::new("images"), &mut stdout)
}
