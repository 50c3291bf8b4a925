use std::io::{self, IsTerminal};
use std::path::Path;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tfquiz::bank;
use tfquiz::cli::Cli;
use tfquiz::console::{BellNotifier, Console, Notifier, SilentNotifier, TerminalConsole};
use tfquiz::error::QuizError;
use tfquiz::export;
use tfquiz::selector::QuestionSelector;
use tfquiz::state::{run_session, SessionContext, SessionOutcome};
use tfquiz::timer::SystemClock;
use tfquiz::validate::{parse_menu_command, MenuCommand};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tfquiz=warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    if cli.check {
        return print_bank_summary(&cli.bank);
    }

    let interactive = io::stdout().is_terminal();
    let mut console = TerminalConsole::new(io::stdin().lock(), io::stdout())
        .with_clear_screen(interactive && !cli.no_clear)
        .with_styling(interactive);

    let mut notifier: Box<dyn Notifier> = if cli.bell {
        Box::new(BellNotifier::new(io::stdout()))
    } else {
        Box::new(SilentNotifier)
    };

    let mut selector = match cli.seed {
        Some(seed) => QuestionSelector::seeded(seed),
        None => QuestionSelector::new(),
    };

    let clock = SystemClock;
    let mut ctx = SessionContext {
        console: &mut console,
        clock: &clock,
        selector: &mut selector,
        notifier: &mut notifier,
        bank_path: &cli.bank,
    };

    match session_loop(&mut ctx, cli.export.as_deref()) {
        Ok(()) => Ok(()),
        Err(QuizError::InputClosed) => {
            info!("input closed, exiting");
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

/// First quiz starts straight away; afterwards the student picks between
/// quitting and starting over for someone else.
fn session_loop<C, N>(
    ctx: &mut SessionContext<'_, C, SystemClock, N>,
    export_dir: Option<&Path>,
) -> Result<(), QuizError>
where
    C: Console,
    N: Notifier,
{
    loop {
        let outcome = run_session(ctx)?;
        if let (SessionOutcome::Completed(result), Some(dir)) = (&outcome, export_dir) {
            if let Err(e) = export::write_result(result, dir) {
                warn!(error = %e, "answer sheet export failed");
                ctx.console.line(&format!("Warning: {}", e))?;
            }
        }

        ctx.console.line("")?;
        ctx.console.line("")?;
        ctx.console.line("")?;

        loop {
            let reply = ctx
                .console
                .ask("Enter Q to exit or S to begin a new quiz for another student.\n")?;
            match parse_menu_command(&reply) {
                Some(MenuCommand::Quit) => return Ok(()),
                Some(MenuCommand::StartNew) => break,
                None => ctx.console.line("Invalid input!")?,
            }
        }
    }
}

fn print_bank_summary(path: &Path) -> Result<(), String> {
    let bank = bank::load_bank(path).map_err(|e| e.to_string())?;
    println!("Bank: {}", path.display());
    println!("Questions: {}", bank.questions.len());
    println!("Answers: {}", bank.answers.len());
    if let Some(ref fingerprint) = bank.fingerprint {
        println!("Fingerprint: {}", fingerprint);
    }
    Ok(())
}
