use ergo_assist::assessment::{
    AnswerChoice, ErgonomicProfile, GameType, GripStyle, HandSize, KeyboardLayout, SpaceIssue,
};
use ergo_assist::intake::{parse_choice, parse_mouse_weight, parse_session_minutes, IntakeError};
use crate::input::LineSource;
use std::io::Write;
use tracing::debug;

/// Line-oriented questionnaire that re-asks until each answer validates.
pub(crate) struct Prompter<S, W> {
    input: S,
    output: W,
}

impl<S: LineSource, W: Write> Prompter<S, W> {
    pub(crate) fn new(input: S, output: W) -> Self {
        Self { input, output }
    }

    pub(crate) fn intro(&mut self) -> Result<(), IntakeError> {
        writeln!(self.output, "Ergonomic configuration assistant")?;
        writeln!(
            self.output,
            "Answer a few questions about your setup to get tailored recommendations.\n"
        )?;
        Ok(())
    }

    /// Asks every question in order and builds a validated profile.
    pub(crate) fn collect_profile(&mut self) -> Result<ErgonomicProfile, IntakeError> {
        let hand_size = self.ask_choice::<HandSize>("hand_size", "What is your hand size?")?;
        let grip_style =
            self.ask_choice::<GripStyle>("grip_style", "What is your mouse grip style?")?;
        let session_duration = self.ask(
            "session_duration",
            "How long is a typical gaming session, in minutes?",
            parse_session_minutes,
        )?;
        let discomfort_level = self.read_answer(
            "discomfort_level",
            "Describe any discomfort (e.g. wrist, fingers, forearm) or type 'none'",
        )?;
        let keyboard_layout = self
            .ask_choice::<KeyboardLayout>("keyboard_layout", "Which movement keys do you use?")?;
        let mouse_weight = self.ask(
            "mouse_weight",
            "What is the weight of your mouse in grams? (or type 'don't know')",
            parse_mouse_weight,
        )?;
        let space_issue =
            self.ask_choice::<SpaceIssue>("space_issue", "Is limited desk space an issue?")?;
        let game_type =
            self.ask_choice::<GameType>("game_type", "What type of games do you mostly play?")?;

        Ok(ErgonomicProfile {
            hand_size,
            grip_style,
            session_duration,
            discomfort_level,
            keyboard_layout,
            mouse_weight,
            space_issue,
            game_type,
        })
    }

    pub(crate) fn ask_choice<T: AnswerChoice>(
        &mut self,
        field: &'static str,
        question: &str,
    ) -> Result<T, IntakeError> {
        let prompt = format!("{question} ({})", T::options().join("/"));
        self.ask(field, &prompt, |raw| parse_choice::<T>(field, raw))
    }

    fn ask<T, F>(&mut self, field: &'static str, prompt: &str, parse: F) -> Result<T, IntakeError>
    where
        F: Fn(&str) -> Result<T, IntakeError>,
    {
        loop {
            let answer = self.read_answer(field, prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(field, %err, "answer rejected");
                    writeln!(self.output, "Invalid answer: {err}")?;
                }
            }
        }
    }

    fn read_answer(&mut self, field: &'static str, prompt: &str) -> Result<String, IntakeError> {
        let prompt = format!("{prompt}: ");
        match self.input.read_line(field, &prompt, &mut self.output)? {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(IntakeError::InputClosed { field }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ReaderLines;
    use std::collections::VecDeque;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<ReaderLines<Cursor<Vec<u8>>>, Vec<u8>> {
        let input = ReaderLines::new(Cursor::new(script.as_bytes().to_vec()));
        Prompter::new(input, Vec::new())
    }

    /// Replays canned results, then reports end of input.
    struct Scripted(VecDeque<Result<String, IntakeError>>);

    impl LineSource for Scripted {
        fn read_line(
            &mut self,
            _field: &'static str,
            _prompt: &str,
            _echo: &mut dyn Write,
        ) -> Result<Option<String>, IntakeError> {
            self.0.pop_front().transpose()
        }
    }

    #[test]
    fn collects_a_full_profile() {
        let mut prompter =
            prompter("large\nclaw\n200\nwrist and forearm pain\nwasd\n100\nyes\nfps\n");

        let profile = prompter.collect_profile().expect("profile collected");

        assert_eq!(profile.hand_size, HandSize::Large);
        assert_eq!(profile.grip_style, GripStyle::Claw);
        assert_eq!(profile.session_duration, 200);
        assert_eq!(profile.discomfort_level, "wrist and forearm pain");
        assert_eq!(profile.keyboard_layout, KeyboardLayout::Wasd);
        assert_eq!(profile.mouse_weight, Some(100));
        assert_eq!(profile.space_issue, SpaceIssue::Yes);
        assert_eq!(profile.game_type, GameType::Fps);
    }

    #[test]
    fn reasks_after_invalid_answers() {
        let mut prompter = prompter(
            "huge\nMedium\npalm\n0\nsixty\n60\n\nother\n250\ndon't know\nmaybe\nno\nRPG\n",
        );

        let profile = prompter.collect_profile().expect("profile collected");

        assert_eq!(profile.hand_size, HandSize::Medium);
        assert_eq!(profile.session_duration, 60);
        assert_eq!(profile.discomfort_level, "");
        assert_eq!(profile.mouse_weight, None);
        assert_eq!(profile.space_issue, SpaceIssue::No);
        assert_eq!(profile.game_type, GameType::Rpg);

        let transcript = String::from_utf8(prompter.output).expect("utf8 transcript");
        assert!(transcript
            .contains("'huge' is not a valid hand_size; choose from: small, medium, large"));
        assert!(transcript.contains("session_duration must be between 1 and"));
        assert!(transcript.contains("session_duration must be a whole number, got 'sixty'"));
        assert!(transcript.contains("mouse_weight must be between 20 and 200, got 250"));
        assert!(transcript.contains("(small/medium/large)"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut prompter = prompter("small\n");

        let err = prompter.collect_profile().expect_err("input runs out");

        assert!(matches!(
            err,
            IntakeError::InputClosed {
                field: "grip_style"
            }
        ));
    }

    #[test]
    fn interrupt_stops_the_questionnaire() {
        let script = VecDeque::from([
            Ok("small".to_string()),
            Err(IntakeError::Interrupted {
                field: "grip_style",
            }),
        ]);
        let mut prompter = Prompter::new(Scripted(script), Vec::new());

        let err = prompter.collect_profile().expect_err("interrupted");

        assert!(matches!(
            err,
            IntakeError::Interrupted {
                field: "grip_style"
            }
        ));
    }

    #[test]
    fn terminal_prompts_are_not_echoed_twice() {
        let script = VecDeque::from([Ok("  Large ".to_string())]);
        let mut prompter = Prompter::new(Scripted(script), Vec::new());

        let size = prompter
            .ask_choice::<HandSize>("hand_size", "What is your hand size?")
            .expect("answer parsed");

        assert_eq!(size, HandSize::Large);
        assert!(prompter.output.is_empty());
    }
}
