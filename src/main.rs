use anyhow::{Context, Result, bail};
use structopt::StructOpt;

use container::NumericBuffer;
use date::{DayMonthYearDate, IsoDate, MonthDayYearDate};
use stack::Stack;
use value::Value;

mod container;
mod date;
mod stack;
mod value;

#[derive(Debug, StructOpt)]
#[structopt()]
struct Options {
    /// Demo to run ("stacks" or "dates"), both if not present
    demo: Option<String>,
}

fn main() -> Result<()> {
    match Options::from_args() {
        Options { demo: Some(demo) } => match demo.as_str() {
            "stacks" => run_stacks(),
            "dates" => run_dates(),
            other => bail!("Unknown demo '{}'", other),
        },
        _ => {
            run_stacks()?;
            println!("");
            run_dates()
        }
    }
}

fn run_stacks() -> Result<()> {
    let mut stack = Stack::new();
    stack.push(Value::Number(1.0))?;
    stack.push(Value::Number(2.0))?;
    stack.push(Value::Number(3.0))?;
    println!("{}", stack.pop()?);
    println!("{}", stack.pop()?);
    println!("{} item(s) left", stack.len());

    // Same contract, backing storage supplied by the caller.
    let mut stack = Stack::with_container(NumericBuffer::new());
    stack.push(Value::Number(42.0))?;
    stack.push(Value::Number(23.0))?;
    if let Err(e) = stack.push(Value::Text("a lot".to_string())) {
        println!("Rejected: {}", e);
    }
    println!("{} item(s) left", stack.len());

    Ok(())
}

fn run_dates() -> Result<()> {
    println!("{}", IsoDate::new(1967, 4, 9));
    println!("{}", MonthDayYearDate::new(1967, 4, 9));
    println!("{}", DayMonthYearDate::new(1967, 4, 9));

    println!("");
    let a = MonthDayYearDate::today().context("Failed to read the system clock")?;
    let b = DayMonthYearDate::today().context("Failed to read the system clock")?;
    println!("{}", a);
    println!("{}", b);

    Ok(())
}
