use std::fmt;
use std::io::{self, BufRead, Write};

use assess_core::catalogs::marketing;
use assess_core::model::OptionLabel;
use assess_core::time::format_seconds;
use services::{
    AptitudeError, AptitudeService, AptitudeSession, AptitudeStep, AssessmentService,
    ChatGenerator, Clock, QuestionGenerator,
};

#[derive(Debug)]
enum ArgsError {
    UnknownArg(String),
    UnknownCommand(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- marketing [--json]");
    eprintln!("  cargo run -p app -- aptitude");
    eprintln!();
    eprintln!("Environment (aptitude):");
    eprintln!("  ASSESS_AI_API_KEY, ASSESS_AI_BASE_URL, ASSESS_AI_MODEL,");
    eprintln!("  ASSESS_AI_TIMEOUT_SECS, ASSESS_AI_MAX_ATTEMPTS");
    eprintln!("  RUST_LOG controls log output; a .env file is loaded if present.");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Marketing { json: bool },
    Aptitude,
}

impl Command {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Option<Self>, ArgsError> {
        let mut cmd = match args.next().as_deref() {
            None | Some("marketing") => Command::Marketing { json: false },
            Some("aptitude") => Command::Aptitude,
            Some("--help" | "-h") => return Ok(None),
            Some(other) => return Err(ArgsError::UnknownCommand(other.to_string())),
        };

        for arg in args {
            match (arg.as_str(), &mut cmd) {
                ("--json", Command::Marketing { json }) => *json = true,
                ("--help" | "-h", _) => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(Some(cmd))
    }
}

/// Prompts until the reader yields a line, returning `None` at end of input.
fn read_line(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn run_marketing(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut service = AssessmentService::new(marketing()?, Clock::system());
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Marketing Knowledge Assessment");
    while let Some(view) = service.current_question() {
        println!();
        println!("{}", view.heading());
        println!("Topic: {}", view.topic);
        println!("{}", view.prompt);
        for option in view.options {
            println!("  {}: {}", option.label, option.text);
        }

        let Some(raw) = read_line(&mut input, "Select your answer: ")? else {
            return Ok(());
        };
        let label = match raw.to_uppercase().parse::<OptionLabel>() {
            Ok(label) => label,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        if let Err(err) = service.submit(label) {
            println!("{err}");
        }
    }

    let report = service.report()?;
    if json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!();
    println!("Assessment Complete!");
    println!("Time taken: {}", format_seconds(report.duration_secs));
    println!("Detailed Scores:");
    for score in report.scores.iter() {
        println!("  {}: {:.1}%", score.topic, score.percent);
    }
    println!("Recommendations:");
    for message in report.messages() {
        println!("  - {message}");
    }
    Ok(())
}

/// Reports a generator failure and asks whether to try again.
fn retry_after_failure(
    err: &services::GeneratorError,
    input: &mut impl BufRead,
) -> io::Result<bool> {
    println!("question generator failed: {err}");
    let choice = read_line(input, "Press Enter to retry or type q to quit: ")?;
    Ok(choice.is_some_and(|c| !c.eq_ignore_ascii_case("q")))
}

/// Asks the generator for the next step, letting the user retry failed calls.
///
/// Answers already given stay in `session` across failures. Returns `None`
/// when the user quits.
async fn next_step_or_quit<G: QuestionGenerator>(
    service: &AptitudeService<G>,
    session: &mut AptitudeSession,
    input: &mut impl BufRead,
) -> Result<Option<AptitudeStep>, Box<dyn std::error::Error>> {
    loop {
        match service.next_step(session).await {
            Ok(step) => return Ok(Some(step)),
            Err(AptitudeError::Generator(err)) => {
                if !retry_after_failure(&err, input)? {
                    return Ok(None);
                }
            }
            Err(err) => return Err(err.into()),
        }
    }
}

async fn run_aptitude() -> Result<(), Box<dyn std::error::Error>> {
    let generator = ChatGenerator::from_env();
    if !generator.enabled() {
        eprintln!("aptitude: set ASSESS_AI_API_KEY to enable the question generator");
    }
    let service = AptitudeService::new(generator);
    let mut session = AptitudeSession::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Problem-Solving Aptitude Test");
    let Some(mut step) = next_step_or_quit(&service, &mut session, &mut input).await? else {
        return Ok(());
    };
    loop {
        let response = match &step {
            AptitudeStep::Complete { summary } => {
                println!();
                println!("Test complete! Here's your problem-solving style summary:");
                println!("{summary}");
                return Ok(());
            }
            AptitudeStep::Pending => {
                let Some(next) = next_step_or_quit(&service, &mut session, &mut input).await?
                else {
                    println!("Test left incomplete.");
                    return Ok(());
                };
                step = next;
                continue;
            }
            AptitudeStep::OpenEnded { number, prompt } => {
                println!();
                println!("Question {number} of {}", services::aptitude::QUESTION_COUNT);
                println!("{prompt}");
                read_line(&mut input, "Your answer: ")?
            }
            AptitudeStep::MultipleChoice { number, question } => {
                println!();
                println!("Question {number} of {}", services::aptitude::QUESTION_COUNT);
                println!("{}", question.stem);
                for option in &question.options {
                    println!("  {}: {}", option.label, option.text);
                }
                read_line(&mut input, "Choose your answer: ")?
                    .map(|raw| raw.to_uppercase())
            }
        };

        let Some(response) = response else {
            return Ok(());
        };
        match service.submit(&mut session, &response).await {
            Ok(next) => step = next,
            Err(AptitudeError::InvalidChoice(choice)) => {
                println!("{choice:?} is not one of the choices");
            }
            // The answer is recorded; the pending step is generated again.
            Err(AptitudeError::Generator(err)) => {
                if !retry_after_failure(&err, &mut input)? {
                    println!("Test left incomplete.");
                    return Ok(());
                }
                step = session.step();
            }
            Err(err) => return Err(err.into()),
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cmd = Command::parse(std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    match cmd {
        None => {
            print_usage();
            Ok(())
        }
        Some(Command::Marketing { json }) => run_marketing(json),
        Some(Command::Aptitude) => run_aptitude().await,
    }
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the environment may already be set.
    let _ = dotenv::dotenv();
    pretty_env_logger::init();
    log::debug!("starting assessment app");

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use services::GeneratorError;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn parse(args: &[&str]) -> Result<Option<Command>, ArgsError> {
        Command::parse(args.iter().map(|s| (*s).to_string()))
    }

    #[test]
    fn defaults_to_marketing() {
        assert_eq!(parse(&[]).unwrap(), Some(Command::Marketing { json: false }));
    }

    #[test]
    fn json_flag_only_for_marketing() {
        assert_eq!(
            parse(&["marketing", "--json"]).unwrap(),
            Some(Command::Marketing { json: true })
        );
        assert!(matches!(
            parse(&["aptitude", "--json"]),
            Err(ArgsError::UnknownArg(_))
        ));
    }

    #[test]
    fn help_and_unknown_commands() {
        assert_eq!(parse(&["--help"]).unwrap(), None);
        assert!(matches!(
            parse(&["quiz"]),
            Err(ArgsError::UnknownCommand(_))
        ));
    }

    /// Fails a set number of times, then answers every prompt.
    struct FlakyGenerator {
        failures_left: Mutex<u32>,
        calls: AtomicUsize,
    }

    impl FlakyGenerator {
        fn failing(times: u32) -> Self {
            Self {
                failures_left: Mutex::new(times),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl QuestionGenerator for FlakyGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GeneratorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut left = self.failures_left.lock().unwrap();
            if *left > 0 {
                *left -= 1;
                return Err(GeneratorError::EmptyResponse);
            }
            Ok("How do you approach problems?".to_string())
        }
    }

    #[tokio::test]
    async fn generator_failure_is_retried_on_enter() {
        let service = AptitudeService::new(FlakyGenerator::failing(2));
        let mut session = AptitudeSession::new();
        let mut input = io::Cursor::new("\n\n");

        let step = next_step_or_quit(&service, &mut session, &mut input)
            .await
            .unwrap();
        assert!(matches!(step, Some(AptitudeStep::OpenEnded { number: 1, .. })));
        assert_eq!(service.generator().calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn quitting_after_a_failure_keeps_recorded_answers() {
        let service = AptitudeService::new(FlakyGenerator::failing(0));
        let mut session = AptitudeSession::new();
        service.next_step(&mut session).await.unwrap();
        session.answer("Break it down").unwrap();

        *service.generator().failures_left.lock().unwrap() = 1;
        let mut input = io::Cursor::new("q\n");
        let step = next_step_or_quit(&service, &mut session, &mut input)
            .await
            .unwrap();

        assert!(step.is_none());
        assert_eq!(session.current(), 1);
        assert_eq!(session.exchanges()[0].answer, "Break it down");
        assert!(session.needs_question());
    }

    #[tokio::test]
    async fn end_of_input_during_retry_quits() {
        let service = AptitudeService::new(FlakyGenerator::failing(1));
        let mut session = AptitudeSession::new();
        let mut input = io::Cursor::new("");

        let step = next_step_or_quit(&service, &mut session, &mut input)
            .await
            .unwrap();
        assert!(step.is_none());
    }

    #[test]
    fn retry_prompt_accepts_enter_and_quits_on_q() {
        let err = GeneratorError::EmptyResponse;
        assert!(retry_after_failure(&err, &mut io::Cursor::new("\n")).unwrap());
        assert!(!retry_after_failure(&err, &mut io::Cursor::new("Q\n")).unwrap());
        assert!(!retry_after_failure(&err, &mut io::Cursor::new("")).unwrap());
    }

    #[tokio::test]
    async fn failed_submit_keeps_answer_and_regenerates_pending_question() {
        let service = AptitudeService::new(FlakyGenerator::failing(0));
        let mut session = AptitudeSession::new();
        service.next_step(&mut session).await.unwrap();

        *service.generator().failures_left.lock().unwrap() = 1;
        let err = service.submit(&mut session, "Break it down").await.unwrap_err();
        assert!(matches!(err, AptitudeError::Generator(_)));
        assert!(matches!(session.step(), AptitudeStep::Pending));

        let step = next_step_or_quit(&service, &mut session, &mut io::Cursor::new(""))
            .await
            .unwrap();
        assert!(matches!(step, Some(AptitudeStep::MultipleChoice { number: 2, .. })));
        assert_eq!(session.exchanges()[0].answer, "Break it down");
    }

    #[test]
    fn read_line_trims_and_detects_eof() {
        let mut input = io::Cursor::new("  B \n");
        assert_eq!(read_line(&mut input, "").unwrap(), Some("B".into()));
        assert_eq!(read_line(&mut input, "").unwrap(), None);
    }
}
