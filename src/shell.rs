//! Menu rendering, input parsing, and command dispatch

use std::io::{self, BufRead, Write};

use carwash_queue::{QueueOperation, QueueResponse, WashStation};

/// One menu entry, parsed from the user's numeric choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddCar,
    ServeCar,
    QueueSize,
    Exit,
}

fn parse_choice(line: &str) -> Option<MenuChoice> {
    match line.trim() {
        "1" => Some(MenuChoice::AddCar),
        "2" => Some(MenuChoice::ServeCar),
        "3" => Some(MenuChoice::QueueSize),
        "4" => Some(MenuChoice::Exit),
        _ => None,
    }
}

fn render_menu(output: &mut impl Write) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Car Wash Queue Menu:")?;
    writeln!(output, "1. Add a car to the queue")?;
    writeln!(output, "2. Serve a car")?;
    writeln!(output, "3. Check the queue size")?;
    writeln!(output, "4. Exit")?;
    write!(output, "Choose an option: ")?;
    output.flush()
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Run the interactive loop until the user exits or input ends.
///
/// Invalid choices and serve failures are reported as messages and
/// never terminate the loop.
pub fn run(
    station: &mut WashStation,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    loop {
        render_menu(output)?;

        let Some(line) = read_line(input)? else {
            break;
        };

        match parse_choice(&line) {
            Some(MenuChoice::AddCar) => {
                write!(output, "Enter car name: ")?;
                output.flush()?;

                let Some(name) = read_line(input)? else {
                    break;
                };
                let name = name.trim();
                if name.is_empty() {
                    writeln!(output, "Car name cannot be empty.")?;
                    continue;
                }

                station.apply_operation(QueueOperation::Add {
                    car: name.to_string(),
                });
                writeln!(output, "Car \"{name}\" added to the queue.")?;
            }
            Some(MenuChoice::ServeCar) => {
                match station.apply_operation(QueueOperation::Serve) {
                    QueueResponse::Served { car } => {
                        writeln!(output, "Served car: {car}")?;
                    }
                    QueueResponse::Error(msg) => {
                        writeln!(output, "Error: {msg}")?;
                    }
                    _ => unreachable!("serve yields Served or Error"),
                }
            }
            Some(MenuChoice::QueueSize) => {
                match station.apply_operation(QueueOperation::Size) {
                    QueueResponse::Size(size) => {
                        writeln!(output, "Current queue size: {size}")?;
                    }
                    _ => unreachable!("size query yields Size"),
                }
            }
            Some(MenuChoice::Exit) => break,
            None => {
                writeln!(output, "Invalid option. Please try again.")?;
            }
        }
    }

    writeln!(output, "Program terminated. Goodbye!")?;
    Ok(())
}
