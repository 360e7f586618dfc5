use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use rustyline::Editor;

use yeyak_application::ConversationController;
use yeyak_core::conversation::{ConversationEvent, ConversationLog};
use yeyak_core::reservation::status;
use yeyak_transport::{HttpBookingTransport, ServerConfig};

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec!["/book".to_string(), "/state".to_string()],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Prints the events appended to the log since the last render pass.
///
/// Restaurant options are numbered by their position among all option
/// events in the log; `/book <n>` uses the same numbering.
fn render_since(log: &ConversationLog, rendered: &mut usize) {
    let events = log.all();
    for index in *rendered..events.len() {
        match &events[index] {
            ConversationEvent::UserText { text, .. } => {
                println!("{}", format!("> {}", text).green());
            }
            ConversationEvent::SystemText { text, .. } => {
                for line in text.lines() {
                    println!("{}", line.bright_blue());
                }
            }
            ConversationEvent::RestaurantOption { title, .. } => {
                let number = events[..=index]
                    .iter()
                    .filter(|event| matches!(event, ConversationEvent::RestaurantOption { .. }))
                    .count();
                println!("{}", format!("  [{}] {}", number, title).yellow());
            }
            ConversationEvent::ReservationUpdate {
                title,
                status,
                datetime,
                persons,
                ..
            } => {
                let mut summary = format!("※ {} {}", title, colored_status(status));
                if let Some(datetime) = datetime.as_deref().filter(|d| !d.is_empty()) {
                    summary.push_str(&format!(" / {}", datetime));
                }
                if let Some(persons) = persons {
                    summary.push_str(&format!(" / {}명", persons));
                }
                println!("{}", summary.bright_magenta());
            }
        }
    }
    *rendered = events.len();
}

fn colored_status(label: &str) -> String {
    match label {
        status::CONFIRMED => label.green().to_string(),
        status::CANCELLED => label.red().to_string(),
        _ => label.to_string(),
    }
}

/// Finds the title of the n-th restaurant option shown so far (1-based).
fn nth_option_title(log: &ConversationLog, n: usize) -> Option<String> {
    log.all()
        .iter()
        .filter_map(|event| match event {
            ConversationEvent::RestaurantOption { title, .. } => Some(title.clone()),
            _ => None,
        })
        .nth(n.checked_sub(1)?)
}

fn print_title(controller: &ConversationController) {
    println!("{}", format!("[{}]", controller.session().title).bright_black());
}

fn print_reservation(controller: &ConversationController) {
    match controller.reservation() {
        Some(snapshot) => {
            println!("{}", format!("식당: {}", snapshot.title).bright_magenta());
            println!("{}", format!("상태: {}", colored_status(&snapshot.status)));
            if let Some(datetime) = snapshot.datetime.as_deref().filter(|d| !d.is_empty()) {
                println!("{}", format!("일시: {}", datetime).bright_magenta());
            }
            if let Some(persons) = snapshot.persons {
                println!("{}", format!("인원: {}명", persons).bright_magenta());
            }
        }
        None => println!("{}", "아직 예약이 없습니다.".bright_black()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // ===== Backend Initialization =====
    let config = ServerConfig::from_env();
    let transport = Arc::new(HttpBookingTransport::new(&config));

    let mut controller = ConversationController::open(transport)
        .await
        .with_context(|| format!("could not open a session on {}", config.base_url()))?;

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== Yeyak ===".bright_magenta().bold());
    println!(
        "{}",
        "Type '/book <n>' to book an option, '/state' for the current reservation, or 'quit' to exit."
            .bright_black()
    );
    println!();

    let mut rendered = 0;

    // Greeting turn: runs once, before any input is accepted.
    controller.greet().await;
    render_since(&controller.session().log, &mut rendered);
    print_title(&controller);

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                // Handle quit command
                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                // Skip empty lines
                if trimmed.is_empty() {
                    continue;
                }

                // Add to history
                let _ = rl.add_history_entry(&line);

                if trimmed == "/state" {
                    print_reservation(&controller);
                    continue;
                }

                if let Some(argument) = trimmed.strip_prefix("/book") {
                    let Some(title) = argument
                        .trim()
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| nth_option_title(&controller.session().log, n))
                    else {
                        println!("{}", "Usage: /book <n> (shown option number)".yellow());
                        continue;
                    };

                    controller.book_option(&title).await;
                } else {
                    controller.submit(trimmed).await;
                }

                render_since(&controller.session().log, &mut rendered);
                print_title(&controller);
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
