use std::io::{self, Write};

use quiz_core::model::{Question, QuestionConfig, QuizSummary, WordEntry};
use serde::Serialize;
use services::{QuizObserver, QuizPhase};

use crate::screen::Screen;

/// One line of the JSON event stream.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    Welcome {
        entries: usize,
        config: QuestionConfig,
    },
    QuestionLoaded {
        index: usize,
        total: usize,
        question: &'a Question,
    },
    AnswerEvaluated {
        is_correct: bool,
        correct_answer: &'a str,
        correct_entry: &'a WordEntry,
    },
    ScoreChanged {
        score: u32,
    },
    Finished {
        #[serde(flatten)]
        summary: &'a QuizSummary,
    },
    Awaiting {
        phase: QuizPhase,
    },
    Notice {
        message: &'a str,
    },
}

/// Screen that writes one JSON object per event, for scripted front ends.
pub struct JsonScreen<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> JsonScreen<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &Event<'_>) {
        if self.error.is_some() {
            return;
        }
        let written = serde_json::to_writer(&mut self.out, event)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(self.out))
            .and_then(|()| self.out.flush());
        if let Err(err) = written {
            self.error = Some(err);
        }
    }
}

impl<W: Write> QuizObserver for JsonScreen<W> {
    fn on_question_loaded(&mut self, question: &Question, index: usize, total: usize) {
        self.emit(&Event::QuestionLoaded {
            index,
            total,
            question,
        });
    }

    fn on_answer_evaluated(
        &mut self,
        is_correct: bool,
        correct_answer: &str,
        correct_entry: &WordEntry,
    ) {
        self.emit(&Event::AnswerEvaluated {
            is_correct,
            correct_answer,
            correct_entry,
        });
    }

    fn on_score_changed(&mut self, score: u32) {
        self.emit(&Event::ScoreChanged { score });
    }

    fn on_finished(&mut self, summary: &QuizSummary) {
        self.emit(&Event::Finished { summary });
    }
}

impl<W: Write> Screen for JsonScreen<W> {
    fn show_welcome(&mut self, entries: usize, config: QuestionConfig) {
        self.emit(&Event::Welcome { entries, config });
    }

    fn show_hint(&mut self, phase: QuizPhase, _options: usize) {
        self.emit(&Event::Awaiting { phase });
    }

    fn show_notice(&mut self, message: &str) {
        self.emit(&Event::Notice { message });
    }

    fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn lines(screen: JsonScreen<Vec<u8>>) -> Vec<Value> {
        String::from_utf8(screen.into_inner())
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn events_are_tagged_lines() {
        let mut screen = JsonScreen::new(Vec::new());
        screen.on_score_changed(3);
        screen.on_finished(&QuizSummary::new(3, 4).unwrap());
        screen.show_hint(QuizPhase::Finished, 4);

        let events = lines(screen);
        assert_eq!(events[0], json!({ "event": "score_changed", "score": 3 }));
        assert_eq!(
            events[1],
            json!({
                "event": "finished",
                "score": 3,
                "total": 4,
                "percentage": 75,
                "tier": "good",
            })
        );
        assert_eq!(
            events[2],
            json!({ "event": "awaiting", "phase": { "phase": "finished" } })
        );
    }

    #[test]
    fn answer_event_carries_entry() {
        let entry = WordEntry::new("hija", "дочь", Some("👧")).unwrap();
        let mut screen = JsonScreen::new(Vec::new());
        screen.on_answer_evaluated(false, "дочь", &entry);

        let events = lines(screen);
        assert_eq!(events[0]["event"], "answer_evaluated");
        assert_eq!(events[0]["is_correct"], false);
        assert_eq!(events[0]["correct_entry"]["source"], "hija");
        assert_eq!(events[0]["correct_entry"]["pictogram"], "👧");
    }
}
