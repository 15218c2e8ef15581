use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

mod config;
mod gui;
mod reply;
mod theme;
mod widget;

use config::load_app_config;
use reply::Role;
use widget::{ChatWidget, ChatWidgetConfig};

#[derive(Parser, Debug)]
#[command(
    name = "edu-chat-demo",
    version,
    about = "Demo chat panel for the teacher/student assistant (offline, canned replies)"
)]
struct CliArgs {
    /// Choose GUI (default) or CLI mode
    #[arg(long, value_enum, default_value = "gui")]
    mode: RunMode,
    /// Optional JSON config file (reply delay, initial role, theme)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Start in this role (overrides the config file)
    #[arg(long, value_enum)]
    role: Option<RoleArg>,
    /// Demo reply delay in milliseconds (overrides the config file)
    #[arg(long)]
    reply_delay_ms: Option<u64>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RunMode {
    Gui,
    Cli,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RoleArg {
    Teacher,
    Student,
}

impl From<RoleArg> for Role {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::Teacher => Role::Teacher,
            RoleArg::Student => Role::Student,
        }
    }
}

fn main() {
    let args = CliArgs::parse();

    let file_config = args
        .config
        .as_deref()
        .map(load_app_config)
        .unwrap_or_default();

    let mut widget_config = ChatWidgetConfig::default();
    if let Some(ms) = file_config.reply_delay_ms {
        widget_config.reply_delay = Duration::from_millis(ms);
    }
    if let Some(ms) = args.reply_delay_ms {
        widget_config.reply_delay = Duration::from_millis(ms);
    }
    if let Some(name) = &file_config.initial_role {
        match Role::parse(name) {
            Some(role) => widget_config.initial_role = role,
            None => eprintln!("[config] Unknown initial_role {name:?}, using default"),
        }
    }
    if let Some(role) = args.role {
        widget_config.initial_role = role.into();
    }

    let chat = match ChatWidget::new(widget_config) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Invalid chat configuration: {e}");
            return;
        }
    };

    let theme = file_config
        .theme
        .as_deref()
        .and_then(theme::find)
        .unwrap_or_else(theme::default_theme);

    match args.mode {
        RunMode::Gui => {
            if let Err(e) = gui::launch_gui(chat, theme) {
                eprintln!("Failed to start GUI: {e}");
            }
        }
        RunMode::Cli => run_cli(chat),
    }
}

fn run_cli(mut chat: ChatWidget) {
    println!("EduAssist demo chat (offline, canned replies)");
    println!("Type 'teacher' or 'student' to switch role, 'exit' to quit.\n");

    loop {
        print!("You ({}): ", chat.role());
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Exiting.");
            break;
        }

        let input = input.trim();
        if input.eq_ignore_ascii_case("exit") {
            println!("Goodbye");
            break;
        }
        if let Some(role) = Role::parse(input) {
            chat.set_role(role);
            println!("Switched to {} view.\n", role);
            continue;
        }
        if input.is_empty() {
            continue;
        }

        let now = Instant::now();
        chat.input_mut().push_str(input);
        if !chat.submit(now) {
            continue;
        }

        // Same fixed delay the GUI uses before a demo reply lands.
        if let Some(due) = chat.next_due() {
            std::thread::sleep(due.saturating_duration_since(Instant::now()));
        }
        chat.poll(Instant::now());

        if let Some(answer) = chat.messages(chat.role()).iter().last() {
            println!("Assistant: {}\n", answer.text);
        }
    }

    chat.cancel_pending();
}
