//! Pass Forge - password generator
//!
//! Generates random passwords from configurable character classes, labels
//! their strength and can copy the result to the clipboard. Runs either once
//! (print and exit) or as an interactive menu.

use clap::Parser;
use inquire::{CustomType, InquireError, Select};
use pass_forge::{
    config::{parse_count, AppConfig},
    logging::init_logging,
    policy::clamp_length,
    types::{CharacterClass, RandomSource, StrengthLevel},
    Clipboard, GeneratorSession, PassForgeError, SystemClipboard, MAX_LENGTH, MIN_LENGTH,
};
use std::fmt;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "pass-forge", author, version, about, long_about = None)]
struct Args {
    /// Password length (clamped to 4..=32)
    #[arg(short, long)]
    length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    no_lowercase: bool,

    /// Leave out digits
    #[arg(long)]
    no_numbers: bool,

    /// Include symbols
    #[arg(long, conflicts_with = "no_symbols")]
    symbols: bool,

    /// Leave out symbols
    #[arg(long)]
    no_symbols: bool,

    /// How many passwords to print
    #[arg(short = 'n', long, value_parser = parse_count_arg)]
    count: Option<usize>,

    /// Draw from the operating system CSPRNG
    #[arg(long)]
    secure: bool,

    /// Print JSON reports instead of plain text
    #[arg(long)]
    json: bool,

    /// Copy the (last) password to the clipboard
    #[arg(short, long)]
    copy: bool,

    /// Open the interactive generator
    #[arg(short, long, conflicts_with_all = ["json", "count"])]
    interactive: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_count_arg(raw: &str) -> Result<usize, String> {
    parse_count(raw).map_err(|e| e.to_string())
}

fn main() {
    // Initialize the library
    if let Err(e) = pass_forge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let args = Args::parse();

    if let Err(err) = run(args) {
        match err.downcast_ref::<PassForgeError>() {
            Some(e) if e.is_cancelled() => return,
            Some(e) => eprintln!("{}", e.user_message()),
            None => eprintln!("❌ Error: {:#}", err),
        }
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = AppConfig::from_env()?;

    let filter = if args.verbose {
        "pass_forge=debug"
    } else {
        config.log_filter.as_str()
    };
    init_logging(filter);

    apply_args(&mut config, &args);

    tracing::debug!(
        length = config.options.length,
        classes = ?config.options.enabled_classes(),
        source = %config.random_source,
        count = config.count,
        "configuration loaded"
    );

    if args.interactive {
        run_interactive(&config)
    } else {
        run_once(&config, &args)
    }
}

/// Command line flags override whatever the environment configured
fn apply_args(config: &mut AppConfig, args: &Args) {
    if let Some(length) = args.length {
        let clamped = clamp_length(length);
        if clamped != length {
            tracing::warn!(requested = length, used = clamped, "length out of range, clamped");
        }
        config.options.length = clamped;
    }
    if args.no_uppercase {
        config.options.use_uppercase = false;
    }
    if args.no_lowercase {
        config.options.use_lowercase = false;
    }
    if args.no_numbers {
        config.options.use_numbers = false;
    }
    if args.symbols {
        config.options.use_symbols = true;
    }
    if args.no_symbols {
        config.options.use_symbols = false;
    }
    if let Some(count) = args.count {
        config.count = count;
    }
    if args.secure {
        config.random_source = RandomSource::Os;
    }
}

/// Print `config.count` passwords and exit
fn run_once(config: &AppConfig, args: &Args) -> anyhow::Result<()> {
    let mut session = GeneratorSession::new(config.options, config.random_source);
    let mut reports = Vec::with_capacity(config.count);

    for i in 0..config.count {
        if i > 0 {
            session.regenerate();
        }
        reports.push(session.report());
    }

    if session.was_corrected() {
        eprintln!("ℹ️  No character class selected, lowercase letters were enabled");
    }

    if args.json {
        let json = serde_json::to_string_pretty(&reports).map_err(PassForgeError::from)?;
        println!("{}", json);
    } else {
        for report in &reports {
            println!("{}", report.password);
            println!("Strength: {} ({}/7)", report.strength.label(), report.score);
        }
    }

    if args.copy {
        let clipboard = SystemClipboard::detect()?;
        session.copy_to(&clipboard)?;
        eprintln!("✅ Password copied to clipboard!");
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Regenerate,
    Longer,
    Shorter,
    SetLength,
    Toggle(CharacterClass),
    Copy,
    Quit,
}

struct MenuItem {
    label: String,
    action: MenuAction,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

fn menu_items(session: &GeneratorSession) -> Vec<MenuItem> {
    let options = session.options();
    let mut items = vec![
        MenuItem { label: "🔄 Regenerate".to_string(), action: MenuAction::Regenerate },
        MenuItem { label: "➕ Length +1".to_string(), action: MenuAction::Longer },
        MenuItem { label: "➖ Length -1".to_string(), action: MenuAction::Shorter },
        MenuItem { label: "📏 Set length...".to_string(), action: MenuAction::SetLength },
    ];

    for class in CharacterClass::ALL {
        let mark = if options.is_enabled(class) { "[x]" } else { "[ ]" };
        items.push(MenuItem {
            label: format!("{} {}", mark, class.label()),
            action: MenuAction::Toggle(class),
        });
    }

    items.push(MenuItem { label: "📋 Copy to clipboard".to_string(), action: MenuAction::Copy });
    items.push(MenuItem { label: "🚪 Quit".to_string(), action: MenuAction::Quit });
    items
}

/// Menu loop mirroring the generator widget
fn run_interactive(config: &AppConfig) -> anyhow::Result<()> {
    let mut session = GeneratorSession::new(config.options, config.random_source);
    let clipboard = SystemClipboard::detect();

    println!("🔐 Pass Forge - password generator");
    println!("═══════════════════════════════════");

    loop {
        display_session(&session);

        let choice = match Select::new("What next?", menu_items(&session))
            .with_page_size(10)
            .prompt()
        {
            Ok(item) => item.action,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                break;
            }
            Err(e) => return Err(PassForgeError::from(e).into()),
        };

        match choice {
            MenuAction::Regenerate => {
                session.regenerate();
            }
            MenuAction::Longer => {
                session.adjust_length(1);
            }
            MenuAction::Shorter => {
                session.adjust_length(-1);
            }
            MenuAction::SetLength => {
                let help = format!("{} to {}", MIN_LENGTH, MAX_LENGTH);
                let length = CustomType::<usize>::new("Password length:")
                    .with_default(session.options().length)
                    .with_help_message(&help)
                    .with_error_message("Please type a whole number")
                    .prompt();
                match length {
                    Ok(length) => {
                        session.set_length(length);
                    }
                    Err(InquireError::OperationCanceled) => {}
                    Err(e) => return Err(PassForgeError::from(e).into()),
                }
            }
            MenuAction::Toggle(class) => {
                session.toggle(class);
                if session.was_corrected() {
                    println!("ℹ️  At least one character class is needed, lowercase letters were enabled");
                }
            }
            MenuAction::Copy => match &clipboard {
                Ok(clipboard) => copy_with_feedback(&session, clipboard),
                Err(e) => eprintln!("{}", e.user_message()),
            },
            MenuAction::Quit => break,
        }
    }

    println!("👋 Bye!");
    Ok(())
}

fn copy_with_feedback(session: &GeneratorSession, clipboard: &dyn Clipboard) {
    match session.copy_to(clipboard) {
        Ok(()) => println!("✅ Password copied to clipboard!"),
        Err(e) => {
            tracing::warn!(error = %e, "clipboard copy failed");
            eprintln!("{}", e.user_message());
        }
    }
}

fn display_session(session: &GeneratorSession) {
    let options = session.options();
    let strength = session.strength();

    println!();
    println!("   {}", session.password());
    println!("───────────────────────────────────");
    println!("📏 Length: {}", options.length);
    println!(
        "{} Strength: {} {}",
        strength_icon(strength),
        strength.label(),
        strength_bar(strength)
    );
    println!();
}

fn strength_icon(strength: StrengthLevel) -> &'static str {
    match strength {
        StrengthLevel::Weak => "🔴",
        StrengthLevel::Medium => "🟡",
        StrengthLevel::Strong => "🟢",
    }
}

fn strength_bar(strength: StrengthLevel) -> &'static str {
    match strength {
        StrengthLevel::Weak => "▰▱▱",
        StrengthLevel::Medium => "▰▰▱",
        StrengthLevel::Strong => "▰▰▰",
    }
}
