// Interactive console menu
//
// Thin I/O layer over the employee repository: renders the fixed menu,
// parses operator input, and dispatches to the repository. Generic over
// the reader and writer so the whole loop runs against scripted input
// in tests.

use std::io::{BufRead, Write};

use anyhow::{bail, Result};

use crate::entities::{Employee, EmployeeRepository};

/// Run the menu loop until the operator selects Exit.
///
/// Only environment failures (closed input stream, broken output) surface
/// as errors; every expected condition is handled in-loop with a message.
pub fn run<R, W>(repo: &mut EmployeeRepository, input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        show_menu(output)?;
        let choice = read_integer(input, output)?;

        match choice {
            1 => handle_add(repo, input, output)?,
            2 => handle_view_all(repo, output)?,
            3 => handle_update(repo, input, output)?,
            4 => handle_delete(repo, input, output)?,
            5 => {
                writeln!(output, "Exiting application. Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid choice. Please try again.")?,
        }
    }
}

fn show_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "===== Employee Management System =====")?;
    writeln!(output, "1. Add Employee")?;
    writeln!(output, "2. View All Employees")?;
    writeln!(output, "3. Update Employee")?;
    writeln!(output, "4. Delete Employee")?;
    writeln!(output, "5. Exit")?;
    writeln!(output, "======================================")?;
    write!(output, "Enter your choice: ")?;
    output.flush()?;
    Ok(())
}

// ============================================================================
// OPERATION HANDLERS
// ============================================================================

fn handle_add<R, W>(repo: &mut EmployeeRepository, input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output)?;
    writeln!(output, "--- Add New Employee ---")?;

    write!(output, "Enter Employee ID: ")?;
    output.flush()?;
    let id = read_integer(input, output)?;

    write!(output, "Enter Name: ")?;
    output.flush()?;
    let name = read_text(input)?;

    write!(output, "Enter Salary: ")?;
    output.flush()?;
    let salary = read_number(input, output)?;

    write!(output, "Enter Department: ")?;
    output.flush()?;
    let department = read_text(input)?;

    if repo.add(Employee::new(id, name, salary, department)) {
        writeln!(output, "Employee added successfully!")?;
    } else {
        writeln!(output, "Error: Employee with ID {} already exists.", id)?;
    }
    Ok(())
}

fn handle_view_all<W: Write>(repo: &EmployeeRepository, output: &mut W) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "--- All Employees ---")?;

    if repo.is_empty() {
        writeln!(output, "No employees to display.")?;
        return Ok(());
    }

    for employee in repo.get_all() {
        write_employee(output, employee)?;
        writeln!(output, "---------------------------------")?;
    }
    Ok(())
}

fn handle_update<R, W>(repo: &mut EmployeeRepository, input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output)?;
    writeln!(output, "--- Update Employee ---")?;

    write!(output, "Enter Employee ID to update: ")?;
    output.flush()?;
    let id = read_integer(input, output)?;

    let name = match repo.find_by_id(id) {
        Some(employee) => employee.name().to_string(),
        None => {
            writeln!(output, "Error: Employee with ID {} not found.", id)?;
            return Ok(());
        }
    };

    writeln!(output, "Employee Found: {}. What to update?", name)?;
    writeln!(output, "1. Update Salary")?;
    writeln!(output, "2. Update Department")?;
    write!(output, "Enter your choice: ")?;
    output.flush()?;
    let choice = read_integer(input, output)?;

    match choice {
        1 => {
            write!(output, "Enter new Salary: ")?;
            output.flush()?;
            let salary = read_number(input, output)?;
            repo.update(id, |e| e.set_gross_salary(salary));
            writeln!(output, "Salary updated.")?;
        }
        2 => {
            write!(output, "Enter new Department: ")?;
            output.flush()?;
            let department = read_text(input)?;
            repo.update(id, |e| e.set_department(department));
            writeln!(output, "Department updated.")?;
        }
        _ => writeln!(output, "Invalid choice.")?,
    }
    Ok(())
}

fn handle_delete<R, W>(repo: &mut EmployeeRepository, input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output)?;
    writeln!(output, "--- Delete Employee ---")?;

    write!(output, "Enter Employee ID to delete: ")?;
    output.flush()?;
    let id = read_integer(input, output)?;

    if repo.remove(id) {
        writeln!(output, "Employee with ID {} deleted successfully.", id)?;
    } else {
        writeln!(output, "Error: Employee with ID {} not found.", id)?;
    }
    Ok(())
}

fn write_employee<W: Write>(output: &mut W, employee: &Employee) -> Result<()> {
    writeln!(output, "  ID         : {}", employee.id())?;
    writeln!(output, "  Name       : {}", employee.name())?;
    writeln!(output, "  Department : {}", employee.department())?;
    writeln!(output, "  Gross Salary: ${}", employee.gross_salary())?;
    writeln!(
        output,
        "  Net Salary (after 10% tax): ${}",
        employee.net_salary()
    )?;
    Ok(())
}

// ============================================================================
// INPUT PARSING
// ============================================================================

/// Read one line and return it with the trailing line terminator stripped.
///
/// Returning an error on EOF keeps the re-prompt loops from spinning when
/// the input stream closes underneath us.
fn read_text<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input stream closed while waiting for input");
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Read a whole number, re-prompting indefinitely on non-numeric input.
///
/// Only the first whitespace-separated token of each line is considered;
/// the rest of the line is discarded so stray trailing input cannot
/// corrupt the next read.
fn read_integer<R, W>(input: &mut R, output: &mut W) -> Result<i32>
where
    R: BufRead,
    W: Write,
{
    loop {
        let line = read_text(input)?;
        if let Some(value) = line.split_whitespace().next().and_then(|t| t.parse().ok()) {
            return Ok(value);
        }
        write!(output, "Invalid input. Please enter a whole number: ")?;
        output.flush()?;
    }
}

/// Read a real number, re-prompting indefinitely on non-numeric input.
fn read_number<R, W>(input: &mut R, output: &mut W) -> Result<f64>
where
    R: BufRead,
    W: Write,
{
    loop {
        let line = read_text(input)?;
        if let Some(value) = line.split_whitespace().next().and_then(|t| t.parse().ok()) {
            return Ok(value);
        }
        write!(output, "Invalid input. Please enter a number: ")?;
        output.flush()?;
    }
}

// ============================================================================
// TESTS
// ============================================================================
