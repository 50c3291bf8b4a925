use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use crate::bank::{self, BankError};
use crate::console::{Console, Notifier};
use crate::error::QuizError;
use crate::model::*;
use crate::report::{self, SessionResult};
use crate::selector::QuestionSelector;
use crate::timer::{Clock, Deadline, QUIZ_MINUTES};
use crate::validate::{is_identification_valid, parse_true_false, parse_yes_no};

pub const IDENTIFICATION_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Identity,
    Identification,
    Setup,
    Quiz,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    AwaitingQuestion,
    AwaitingAnswer,
    SessionComplete,
    SessionTimedOut,
}

#[derive(Debug)]
pub enum SessionOutcome {
    Completed(SessionResult),
    TooManyAttempts,
    BankUnavailable(BankError),
}

/// All state owned by one student's session. Each stage function takes it
/// by `&mut` and advances `stage` when it finishes.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub stage: Stage,
    pub quiz_state: QuizState,
    /// Confirmed first and last name, waiting for a valid identification.
    pub pending_name: Option<(String, String)>,
    pub identity: Option<StudentIdentity>,
    pub config: Option<SessionConfig>,
    pub bank: QuestionBank,
    pub used: HashSet<usize>,
    pub asked: Vec<usize>,
    pub answers: Vec<bool>,
    pub correct: usize,
    pub questions_remaining: usize,
    pub deadline: Option<Deadline>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            stage: Stage::Identity,
            quiz_state: QuizState::AwaitingQuestion,
            pending_name: None,
            identity: None,
            config: None,
            bank: QuestionBank::default(),
            used: HashSet::new(),
            asked: Vec::new(),
            answers: Vec::new(),
            correct: 0,
            questions_remaining: 0,
            deadline: None,
        }
    }

    pub fn answer_sheet(&self) -> Vec<AnswerSheetEntry> {
        self.asked
            .iter()
            .zip(&self.answers)
            .enumerate()
            .map(|(i, (&idx, &given))| AnswerSheetEntry {
                number: i + 1,
                question: self.bank.question(idx).to_string(),
                correct_answer: self.bank.answer(idx).to_string(),
                given_answer: verdict_token(given).to_string(),
            })
            .collect()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Collaborators a session needs besides its own state.
pub struct SessionContext<'a, C, K, N> {
    pub console: &'a mut C,
    pub clock: &'a K,
    pub selector: &'a mut QuestionSelector,
    pub notifier: &'a mut N,
    pub bank_path: &'a Path,
}

/// Runs one student from name entry through the results screen.
pub fn run_session<C, K, N>(
    ctx: &mut SessionContext<'_, C, K, N>,
) -> Result<SessionOutcome, QuizError>
where
    C: Console,
    K: Clock,
    N: Notifier,
{
    let mut state = SessionState::new();

    capture_identity(ctx.console, &mut state)?;

    if !verify_identification(ctx.console, &mut state)? {
        info!("session ended after too many invalid identifications");
        return Ok(SessionOutcome::TooManyAttempts);
    }

    configure(ctx.console, &mut state)?;

    match bank::load_bank(ctx.bank_path) {
        Ok(bank) => state.bank = bank,
        Err(e) => {
            ctx.console.clear()?;
            ctx.console.line("Error: Failed to load question bank.")?;
            info!(error = %e, "session aborted");
            return Ok(SessionOutcome::BankUnavailable(e));
        }
    }

    run_quiz(
        ctx.console,
        ctx.clock,
        ctx.selector,
        ctx.notifier,
        &mut state,
    )?;

    let Some(result) = finish(&mut state, ctx.clock) else {
        return Ok(SessionOutcome::TooManyAttempts);
    };
    report::print_report(ctx.console, &result)?;
    info!(
        identification = %result.identity.identification,
        correct = result.correct,
        asked = result.asked(),
        timed_out = result.timed_out(),
        "session finished"
    );

    Ok(SessionOutcome::Completed(result))
}

/// Stage 1. Loops until the student confirms the names they typed.
pub fn capture_identity<C: Console>(
    console: &mut C,
    state: &mut SessionState,
) -> Result<(), QuizError> {
    loop {
        console.clear()?;
        console.heading("[Stage 1: General Details]")?;
        let first_name = console.ask("First Name: ")?;
        let last_name = console.ask("Last Name: ")?;

        let confirmed = loop {
            console.clear()?;
            console.heading("[Stage 1: General Details]")?;
            console.line(&format!("First Name: {}", first_name))?;
            console.line(&format!("Last Name: {}", last_name))?;

            let reply = console.ask("Are these details correct? (Y/N): ")?;
            if let Some(yes) = parse_yes_no(&reply) {
                break yes;
            }
        };

        if confirmed {
            state.pending_name = Some((first_name, last_name));
            state.stage = Stage::Identification;
            return Ok(());
        }
    }
}

/// Stage 2. Returns `false` when all attempts were used up, in which case
/// the names captured in stage 1 are discarded.
pub fn verify_identification<C: Console>(
    console: &mut C,
    state: &mut SessionState,
) -> Result<bool, QuizError> {
    console.clear()?;

    let mut attempts = IDENTIFICATION_ATTEMPTS;
    let mut identification = String::new();
    let mut valid = false;

    while !valid && attempts > 0 {
        console.heading("[Stage 2: Identification]")?;
        console.line(
            "Your identification number must begin with an 'A' followed by five numbers.",
        )?;
        console.line(&format!("You have {} attempts left.", attempts))?;
        identification = console.ask("Identification: ")?;

        valid = is_identification_valid(&identification);
        if !valid {
            debug!(attempts_left = attempts - 1, "identification rejected");
        }
        attempts -= 1;
    }

    if !valid {
        console.clear()?;
        console.heading("[Stage 2: Identification]")?;
        console.line("You have entered too many invalid identification serials!")?;
        state.pending_name = None;
        return Ok(false);
    }

    let (first_name, last_name) = state.pending_name.take().unwrap_or_default();
    state.identity = Some(StudentIdentity {
        first_name,
        last_name,
        identification,
    });
    state.stage = Stage::Setup;
    Ok(true)
}

/// Stage 3. The only place the question count is chosen.
pub fn configure<C: Console>(console: &mut C, state: &mut SessionState) -> Result<(), QuizError> {
    let standard = QuestionCount::Standard.count();
    let doubled = QuestionCount::Doubled.count();

    let double = loop {
        console.clear()?;
        console.heading("[Stage 3: Quiz Setup]")?;
        console.line(&format!("The current question count is {}.", standard))?;

        let reply = console.ask(&format!(
            "Would you like to double the question count to {}? (Y/N): ",
            doubled
        ))?;
        if let Some(yes) = parse_yes_no(&reply) {
            break yes;
        }
    };

    state.config = Some(SessionConfig::new(double));
    state.stage = Stage::Quiz;
    Ok(())
}

/// Stage 4. The deadline is fixed once on entry and only checked between
/// questions; a student stalling on one prompt is never interrupted.
pub fn run_quiz<C, K, N>(
    console: &mut C,
    clock: &K,
    selector: &mut QuestionSelector,
    notifier: &mut N,
    state: &mut SessionState,
) -> Result<(), QuizError>
where
    C: Console,
    K: Clock,
    N: Notifier,
{
    let config = *state.config.get_or_insert_with(|| SessionConfig::new(false));
    let deadline = Deadline::starting_at(clock.now());
    state.deadline = Some(deadline);
    state.used.clear();
    state.asked.clear();
    state.answers.clear();
    state.correct = 0;
    state.questions_remaining = config.count();
    state.quiz_state = QuizState::AwaitingQuestion;

    while state.questions_remaining > 0 && !deadline.has_passed(clock.now()) {
        let Some(idx) = selector.pick(state.bank.len(), &state.used) else {
            debug!(asked = state.asked.len(), "question bank exhausted");
            break;
        };
        state.used.insert(idx);
        state.asked.push(idx);
        state.quiz_state = QuizState::AwaitingAnswer;

        let number = state.asked.len();
        let reply = loop {
            console.clear()?;
            console.heading("[Stage 4: Quiz]")?;
            console.line(&format!(
                "You have {} minutes to complete the quiz. There are {} questions remaining.",
                QUIZ_MINUTES, state.questions_remaining
            ))?;
            console.line("Valid replies are: True/False/T/F.")?;
            console.line("")?;
            console.line(&format!("Question #{}: {}", number, state.bank.question(idx)))?;

            let token = console.ask("Is this true or false?: ")?;
            if let Some(value) = parse_true_false(&token) {
                break value;
            }
        };

        state.answers.push(reply);
        let correct = state.bank.is_correct(idx, reply);
        if correct {
            state.correct += 1;
        }
        notifier.notify(correct);

        state.questions_remaining -= 1;
        state.quiz_state = QuizState::AwaitingQuestion;
    }

    Ok(())
}

/// Stage 5 entry. Decides the termination reason from the clock at this
/// instant, not from why the loop stopped. `None` until stage 2 has
/// committed an identity.
pub fn finish<K: Clock>(state: &mut SessionState, clock: &K) -> Option<SessionResult> {
    let identity = state.identity.clone()?;
    let finished_at = clock.now();
    let deadline = state
        .deadline
        .unwrap_or_else(|| Deadline::starting_at(finished_at));

    let result = SessionResult {
        identity,
        config: state.config.unwrap_or_else(|| SessionConfig::new(false)),
        correct: state.correct,
        deadline,
        finished_at,
        answer_sheet: state.answer_sheet(),
        bank_fingerprint: state.bank.fingerprint.clone(),
    };

    state.quiz_state = if result.timed_out() {
        info!("quiz deadline reached");
        QuizState::SessionTimedOut
    } else {
        QuizState::SessionComplete
    };
    state.stage = Stage::Results;

    Some(result)
}
