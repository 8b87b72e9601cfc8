use std::io;

use anyhow::Result;

use employee_registry::{menu, EmployeeRepository};

fn main() -> Result<()> {
    // The repository lives for the whole session; nothing survives exit.
    let mut repository = EmployeeRepository::new();

    let stdin = io::stdin();
    let stdout = io::stdout();

    menu::run(&mut repository, &mut stdin.lock(), &mut stdout.lock())
}
