use std::env;
use std::io::{self, Write};
use std::process;

use godig::{Command, SystemResolver};

fn main() {
    env_logger::init();

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    // Lookup failures are reported on stdout and still exit 0
    let command = Command::from_args(env::args());
    if let Err(err) = command.run(SystemResolver::from_system_conf, &mut stdout) {
        let _ = writeln!(io::stderr(), "go-dig: failed to write output: {}", err);
        process::exit(1);
    }
}
