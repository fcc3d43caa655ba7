//! Interactive session: reads form events from stdin and re-renders the widget.

use std::str::FromStr;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use converter_types::{CurrencyCode, RateProvider};
use converter_widget::{ConverterWidget, Point, Side};

use crate::view;

const HELP: &str = "\
Commands:
  amount N            set the source amount
  target [N]          set the target amount (converts back)
  from CODE | to CODE select a currency
  search from|to TEXT filter a dropdown
  open from|to        toggle a dropdown
  click X Y           pointer press at a position
  close               close dropdowns
  swap | clear | show | help | quit";

/// One line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Amount(f64),
    Target(Option<f64>),
    Select(Side, CurrencyCode),
    Search(Side, String),
    Toggle(Side),
    Click(Point),
    Close,
    Swap,
    Clear,
    Show,
    Help,
    Quit,
}

fn parse_side(s: &str) -> Result<Side, String> {
    match s.to_ascii_lowercase().as_str() {
        "from" => Ok(Side::From),
        "to" => Ok(Side::To),
        _ => Err(format!("expected `from` or `to`, got {:?}", s)),
    }
}

fn parse_number(s: Option<&str>) -> Result<f64, String> {
    let s = s.ok_or_else(|| "missing number".to_string())?;
    match s.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(format!("invalid number: {:?}", s)),
    }
}

fn parse_code(s: Option<&str>) -> Result<CurrencyCode, String> {
    let s = s.ok_or_else(|| "missing currency code".to_string())?;
    s.parse().map_err(|e: converter_types::DomainError| e.to_string())
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim_start();
        let mut args = rest.split_whitespace();

        match word.to_ascii_lowercase().as_str() {
            "amount" => parse_number(args.next()).map(Command::Amount),
            "target" => match args.next() {
                None | Some("-") => Ok(Command::Target(None)),
                arg => parse_number(arg).map(|n| Command::Target(Some(n))),
            },
            "from" => parse_code(args.next()).map(|c| Command::Select(Side::From, c)),
            "to" => parse_code(args.next()).map(|c| Command::Select(Side::To, c)),
            "search" => {
                let (side, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Ok(Command::Search(parse_side(side)?, text.trim().to_string()))
            }
            "open" => parse_side(args.next().unwrap_or_default()).map(Command::Toggle),
            "click" => {
                let x = parse_number(args.next())?;
                let y = parse_number(args.next())?;
                Ok(Command::Click(Point::new(x, y)))
            }
            "close" => Ok(Command::Close),
            "swap" => Ok(Command::Swap),
            "clear" => Ok(Command::Clear),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command {:?}, try `help`", other)),
        }
    }
}

/// Runs the session until `quit` or end of input.
pub async fn run<P: RateProvider>(widget: &mut ConverterWidget<P>) -> Result<()> {
    widget.initialize().await;
    println!("{}", view::render(widget.state()));
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        tracing::debug!(?command, "session command");

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            command => execute(widget, command).await,
        }
        println!("{}", view::render(widget.state()));
    }
    Ok(())
}

async fn execute<P: RateProvider>(widget: &mut ConverterWidget<P>, command: Command) {
    match command {
        Command::Amount(n) => widget.set_amount_from(n).await,
        Command::Target(n) => widget.set_amount_to(n).await,
        Command::Select(side, code) => {
            if let Err(e) = widget.select_currency(side, code).await {
                println!("{}", e);
            }
        }
        Command::Search(side, text) => widget.search(side, &text),
        Command::Toggle(side) => widget.toggle_dropdown(side),
        Command::Click(at) => widget.pointer_down(at),
        Command::Close => widget.close_dropdowns(),
        Command::Swap => widget.swap().await,
        Command::Clear => widget.clear().await,
        Command::Show | Command::Help | Command::Quit => {}
    }
}
