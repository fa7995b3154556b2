use quiz_core::model::Question;
use services::{QuestionPhase, QuizIntent, QuizPhase};

/// What a line typed by the user asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intent(QuizIntent),
    Quit,
    Unknown(String),
}

/// Interpret one input line for the current phase.
///
/// While a question waits for an answer, a number picks that option (1-based)
/// and any other non-empty text is taken as the answer itself.
#[must_use]
pub fn parse_command(line: &str, phase: QuizPhase, question: Option<&Question>) -> Command {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Command::Quit;
    }

    match phase {
        QuizPhase::NotStarted if line.is_empty() || line.eq_ignore_ascii_case("s") => {
            Command::Intent(QuizIntent::Start)
        }
        QuizPhase::Finished if line.eq_ignore_ascii_case("r") => Command::Intent(QuizIntent::Start),
        QuizPhase::InProgress(QuestionPhase::Answered)
            if line.is_empty() || line.eq_ignore_ascii_case("n") =>
        {
            Command::Intent(QuizIntent::Advance)
        }
        QuizPhase::InProgress(QuestionPhase::Unanswered) if !line.is_empty() => {
            let picked = line
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| question.and_then(|q| q.options().get(i)));
            match picked {
                Some(option) => Command::Intent(QuizIntent::Select(option.clone())),
                None => Command::Intent(QuizIntent::Select(line.to_owned())),
            }
        }
        _ => Command::Unknown(line.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{PromptForm, QuestionMode, WordEntry};

    fn question() -> Question {
        Question::new(
            QuestionMode::Prompt(PromptForm::Text),
            WordEntry::new("hijo", "сын", None).unwrap(),
            vec!["дочь".into(), "сын".into(), "брат".into()],
        )
        .unwrap()
    }

    const UNANSWERED: QuizPhase = QuizPhase::InProgress(QuestionPhase::Unanswered);
    const ANSWERED: QuizPhase = QuizPhase::InProgress(QuestionPhase::Answered);

    #[test]
    fn enter_starts_and_advances() {
        assert_eq!(
            parse_command("", QuizPhase::NotStarted, None),
            Command::Intent(QuizIntent::Start)
        );
        assert_eq!(
            parse_command("\n", ANSWERED, None),
            Command::Intent(QuizIntent::Advance)
        );
        assert_eq!(
            parse_command("R", QuizPhase::Finished, None),
            Command::Intent(QuizIntent::Start)
        );
    }

    #[test]
    fn numbers_pick_options() {
        let q = question();
        assert_eq!(
            parse_command("2", UNANSWERED, Some(&q)),
            Command::Intent(QuizIntent::Select("сын".into()))
        );
    }

    #[test]
    fn out_of_range_number_and_text_are_literal_answers() {
        let q = question();
        assert_eq!(
            parse_command("9", UNANSWERED, Some(&q)),
            Command::Intent(QuizIntent::Select("9".into()))
        );
        assert_eq!(
            parse_command(" брат ", UNANSWERED, Some(&q)),
            Command::Intent(QuizIntent::Select("брат".into()))
        );
    }

    #[test]
    fn quit_works_everywhere_and_blank_answer_is_unknown() {
        assert_eq!(parse_command("q", UNANSWERED, None), Command::Quit);
        assert_eq!(parse_command("Q", QuizPhase::Finished, None), Command::Quit);
        assert_eq!(
            parse_command("", UNANSWERED, None),
            Command::Unknown(String::new())
        );
    }
}
