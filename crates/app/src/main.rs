mod input;
mod json;
mod screen;

use std::fmt;
use std::io::{self, BufRead};
use std::sync::Arc;

use quiz_core::Vocabulary;
use quiz_core::model::{ModeAxis, QuestionConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{
    IntentOutcome, QuestionGenerator, QuestionSource, QuizSession, SelectionPolicy, SessionError,
};
use tracing_subscriber::EnvFilter;

use crate::input::{Command, parse_command};
use crate::json::JsonScreen;
use crate::screen::{Screen, TerminalScreen};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    InvalidAxis { raw: String },
    InvalidSelection { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidAxis { raw } => {
                write!(f, "invalid --axis value: {raw} (expected prompt|direction)")
            }
            ArgsError::InvalidSelection { raw } => write!(
                f,
                "invalid --selection value: {raw} (expected exhaustive|independent)"
            ),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_number<T: std::str::FromStr>(raw: String, flag: &'static str) -> Result<T, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidNumber { flag, raw })
}

fn parse_axis(raw: String) -> Result<ModeAxis, ArgsError> {
    match raw.trim() {
        "prompt" => Ok(ModeAxis::PromptForm),
        "direction" => Ok(ModeAxis::Direction),
        _ => Err(ArgsError::InvalidAxis { raw }),
    }
}

fn parse_selection(raw: String) -> Result<SelectionPolicy, ArgsError> {
    match raw.trim() {
        "exhaustive" => Ok(SelectionPolicy::Exhaustive),
        "independent" => Ok(SelectionPolicy::Independent),
        _ => Err(ArgsError::InvalidSelection { raw }),
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    total_questions: u32,
    options_per_question: u32,
    seed: Option<u64>,
    axis: ModeAxis,
    selection: SelectionPolicy,
    json: bool,
    help: bool,
}

impl Args {
    /// Flags override environment values; unparsable environment values fall
    /// back to the defaults.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            total_questions: env("QUIZ_TOTAL_QUESTIONS")
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(QuestionConfig::DEFAULT_TOTAL_QUESTIONS),
            options_per_question: env("QUIZ_OPTIONS_PER_QUESTION")
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(QuestionConfig::DEFAULT_OPTIONS_PER_QUESTION),
            seed: env("QUIZ_SEED").and_then(|value| value.trim().parse().ok()),
            axis: ModeAxis::default(),
            selection: SelectionPolicy::default(),
            json: false,
            help: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    parsed.total_questions =
                        parse_number(require_value(args, "--questions")?, "--questions")?;
                }
                "--options" => {
                    parsed.options_per_question =
                        parse_number(require_value(args, "--options")?, "--options")?;
                }
                "--seed" => {
                    parsed.seed = Some(parse_number(require_value(args, "--seed")?, "--seed")?);
                }
                "--axis" => parsed.axis = parse_axis(require_value(args, "--axis")?)?,
                "--selection" => {
                    parsed.selection = parse_selection(require_value(args, "--selection")?)?;
                }
                "--json" => parsed.json = true,
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --questions <n>          Questions per round (default: 20)");
    eprintln!("  --options <n>            Answer options per question (default: 4)");
    eprintln!("  --seed <u64>             Seed for a reproducible round");
    eprintln!("  --axis <prompt|direction>            Question variation (default: prompt)");
    eprintln!("  --selection <exhaustive|independent> Word picking (default: exhaustive)");
    eprintln!("  --json                   Emit JSON lines instead of text");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_TOTAL_QUESTIONS, QUIZ_OPTIONS_PER_QUESTION, QUIZ_SEED, RUST_LOG");
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

fn show_hint<S: QuestionSource, O: Screen>(session: &mut QuizSession<S, O>) {
    let phase = session.phase();
    let options = session
        .current_question()
        .map_or(0, |question| question.options().len());
    session.observer_mut().show_hint(phase, options);
}

/// Feed input lines to the session until quit or end of input.
fn drive<S: QuestionSource, O: Screen>(
    session: &mut QuizSession<S, O>,
    input: impl BufRead,
) -> Result<(), Box<dyn std::error::Error>> {
    show_hint(session);
    for line in input.lines() {
        let line = line?;
        match parse_command(&line, session.phase(), session.current_question()) {
            Command::Quit => break,
            Command::Unknown(raw) => {
                tracing::debug!(%raw, phase = %session.phase(), "unrecognized input");
                session
                    .observer_mut()
                    .show_notice(&format!("Неизвестная команда: {raw}"));
            }
            Command::Intent(intent) => match session.dispatch(intent) {
                Ok(IntentOutcome::Ignored) => tracing::debug!("selection ignored"),
                Ok(_) => {}
                Err(err @ SessionError::InvalidTransition { .. }) => {
                    session.observer_mut().show_notice(&err.to_string());
                }
                Err(err) => return Err(err.into()),
            },
        }
        if let Some(err) = session.observer_mut().take_error() {
            return Err(err.into());
        }
        show_hint(session);
    }

    match session.observer_mut().take_error() {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(&mut std::env::args().skip(1), |key| std::env::var(key).ok())
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;
    if args.help {
        print_usage();
        return Ok(());
    }

    init_tracing();

    // Validate everything before any screen is shown.
    let config = QuestionConfig::new(args.total_questions, args.options_per_question)?;
    let vocabulary = Arc::new(Vocabulary::builtin());
    let rng = args
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let generator = QuestionGenerator::builder(Arc::clone(&vocabulary), config, rng)
        .with_selection(args.selection)
        .with_mode_axis(args.axis)
        .build()?;
    tracing::info!(
        entries = vocabulary.len(),
        total_questions = config.total_questions(),
        options_per_question = config.options_per_question(),
        seed = ?args.seed,
        "quiz configured"
    );

    let screen: Box<dyn Screen> = if args.json {
        Box::new(JsonScreen::new(io::stdout()))
    } else {
        Box::new(TerminalScreen::new(io::stdout()))
    };
    let mut session = QuizSession::with_observer(generator, screen);
    session.observer_mut().show_welcome(vocabulary.len(), config);

    drive(&mut session, io::stdin().lock())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::{QuestionPhase, QuizPhase};

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>().into_iter()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_without_flags() {
        let parsed = Args::parse(&mut args(&[]), no_env).unwrap();
        assert_eq!(parsed.total_questions, 20);
        assert_eq!(parsed.options_per_question, 4);
        assert_eq!(parsed.seed, None);
        assert_eq!(parsed.axis, ModeAxis::PromptForm);
        assert_eq!(parsed.selection, SelectionPolicy::Exhaustive);
        assert!(!parsed.json);
    }

    #[test]
    fn flags_override_environment() {
        let env = |key: &str| match key {
            "QUIZ_TOTAL_QUESTIONS" => Some("5".to_owned()),
            "QUIZ_SEED" => Some("7".to_owned()),
            "QUIZ_OPTIONS_PER_QUESTION" => Some("not-a-number".to_owned()),
            _ => None,
        };
        let parsed = Args::parse(
            &mut args(&["--questions", "8", "--axis", "direction", "--json"]),
            env,
        )
        .unwrap();
        assert_eq!(parsed.total_questions, 8);
        assert_eq!(parsed.options_per_question, 4);
        assert_eq!(parsed.seed, Some(7));
        assert_eq!(parsed.axis, ModeAxis::Direction);
        assert!(parsed.json);
    }

    #[test]
    fn bad_flags_are_reported() {
        assert_eq!(
            Args::parse(&mut args(&["--options"]), no_env).unwrap_err(),
            ArgsError::MissingValue { flag: "--options" }
        );
        assert_eq!(
            Args::parse(&mut args(&["--seed", "x"]), no_env).unwrap_err(),
            ArgsError::InvalidNumber {
                flag: "--seed",
                raw: "x".into()
            }
        );
        assert_eq!(
            Args::parse(&mut args(&["--selection", "random"]), no_env).unwrap_err(),
            ArgsError::InvalidSelection {
                raw: "random".into()
            }
        );
        assert_eq!(
            Args::parse(&mut args(&["--verbose"]), no_env).unwrap_err(),
            ArgsError::UnknownArg("--verbose".into())
        );
    }

    #[test]
    fn drive_plays_a_scripted_round() {
        let config = QuestionConfig::new(3, 4).unwrap();
        let generator =
            QuestionGenerator::seeded(Arc::new(Vocabulary::builtin()), config, 21).unwrap();
        let mut session = QuizSession::with_observer(generator, TerminalScreen::new(Vec::new()));

        // start, then answer option 1 and advance three times
        let script = "\n1\n\n2\n\n3\n\n";
        drive(&mut session, script.as_bytes()).unwrap();

        assert_eq!(session.phase(), QuizPhase::Finished);
        let text = String::from_utf8(session.into_observer().into_inner()).unwrap();
        assert!(text.contains("Вопрос 1 из 3"));
        assert!(text.contains("Вопрос 3 из 3"));
        assert!(text.contains("Результат:"));
        assert!(text.contains("r: ещё раз"));
    }

    #[test]
    fn letters_on_open_question_are_literal_answers() {
        let config = QuestionConfig::new(2, 2).unwrap();
        let generator =
            QuestionGenerator::seeded(Arc::new(Vocabulary::builtin()), config, 4).unwrap();
        let mut session = QuizSession::with_observer(generator, JsonScreen::new(Vec::new()));

        drive(&mut session, "s\n1\nn\nn\nq\n".as_bytes()).unwrap();

        // The second "n" lands on an unanswered question and is taken as the answer.
        assert_eq!(
            session.phase(),
            QuizPhase::InProgress(QuestionPhase::Answered)
        );
        assert_eq!(session.state().selected(), Some("n"));
        assert_eq!(session.state().current_index(), 1);
    }
}
