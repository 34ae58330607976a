//! Game UI models: timed messages, control help, score label and the
//! end-of-round leaderboard window. Drawing them is the host's job.

use crate::highscores::HighScores;
use crate::platform::Binding;

/// Title of the score label
pub const SCORE_LABEL_TITLE: &str = "Pisteet : ";

/// Instruction messages shown at the start of every round
pub const INSTRUCTIONS: [&str; 2] = [
    "Pelin tarkoitus on kerätä mahdollisimman monta hyönteistä osumatta kissaan!",
    "Kissaan törmättyäsi peli päättyy!",
];

pub const HIGH_SCORE_TITLE: &str = "Onneksi olkoon!";
/// `%p` is replaced with the score
pub const HIGH_SCORE_PROMPT: &str =
    "Voi ei kissa sai sinut kiinni, mutta pääsit listalle pisteillä %p! Syötä nimesi:";

/// Leaderboard name used when the player leaves the field blank
pub const ANONYMOUS: &str = "Nimetön";

pub fn score_label(score: u64) -> String {
    format!("{SCORE_LABEL_TITLE}{score}")
}

/// One line per described binding
pub fn control_help(bindings: &[Binding]) -> Vec<String> {
    bindings
        .iter()
        .filter_map(|b| b.description.map(|d| format!("{:?}: {}", b.key, d)))
        .collect()
}

/// The board as text, one `rank. name score` line per entry
pub fn leaderboard_lines(scores: &HighScores) -> Vec<String> {
    scores
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{:>2}. {:<16} {}", i + 1, entry.name, entry.score))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub text: String,
    /// Seconds left on screen
    pub remaining: f32,
}

/// Messages that fade after a fixed time
#[derive(Debug, Clone)]
pub struct MessageDisplay {
    message_time: f32,
    messages: Vec<Message>,
}

impl MessageDisplay {
    pub fn new(message_time: f32) -> Self {
        Self {
            message_time,
            messages: Vec::new(),
        }
    }

    pub fn add(&mut self, text: impl Into<String>) {
        self.messages.push(Message {
            text: text.into(),
            remaining: self.message_time,
        });
    }

    pub fn update(&mut self, dt: f32) {
        for m in &mut self.messages {
            m.remaining -= dt;
        }
        self.messages.retain(|m| m.remaining > 0.0);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn visible(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(|m| m.text.as_str())
    }
}

/// What runs when the leaderboard window closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosedHandler {
    SaveLeaderboard,
    Restart,
}

/// Name entry submitted with the window's close
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Closed {
    /// Set when the score qualified
    pub entry: Option<(String, u64)>,
    /// Handlers in subscription order
    pub handlers: Vec<ClosedHandler>,
}

/// Modal leaderboard window shown at game over
#[derive(Debug, Clone)]
pub struct HighScoreWindow {
    pub title: String,
    prompt: String,
    /// Board as it was when the window opened
    pub scores: HighScores,
    pub score: u64,
    handlers: Vec<ClosedHandler>,
}

impl HighScoreWindow {
    pub fn new(title: &str, prompt: &str, scores: HighScores, score: u64) -> Self {
        Self {
            title: title.to_string(),
            prompt: prompt.to_string(),
            scores,
            score,
            handlers: Vec::new(),
        }
    }

    /// Whether the name entry is offered; otherwise only the list is shown
    pub fn qualifies(&self) -> bool {
        self.scores.qualifies(self.score)
    }

    /// Prompt with the score filled in
    pub fn message(&self) -> String {
        self.prompt.replace("%p", &self.score.to_string())
    }

    /// Full window text: title, the board, then the name prompt if the score qualifies
    pub fn text(&self) -> String {
        let mut text = self.title.clone();
        let lines = leaderboard_lines(&self.scores);
        if !lines.is_empty() {
            text.push_str("\n\n");
            text.push_str(&lines.join("\n"));
        }
        if self.qualifies() {
            text.push_str("\n\n");
            text.push_str(&self.message());
        }
        text
    }

    /// Subscribe to the closed notification
    pub fn on_closed(&mut self, handler: ClosedHandler) {
        self.handlers.push(handler);
    }

    /// Confirm the window with the entered name
    pub fn close(self, name: &str) -> Closed {
        let name = match name.trim() {
            "" => ANONYMOUS,
            name => name,
        };
        let entry = self.qualifies().then(|| (name.to_string(), self.score));
        Closed {
            entry,
            handlers: self.handlers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::MAX_HIGH_SCORES;
    use crate::platform::default_bindings;

    #[test]
    fn test_messages_expire() {
        let mut display = MessageDisplay::new(10.0);
        display.add(INSTRUCTIONS[0]);
        display.update(4.0);
        display.add(INSTRUCTIONS[1]);
        display.update(6.0);
        assert_eq!(display.visible().collect::<Vec<_>>(), vec![INSTRUCTIONS[1]]);
        display.update(4.0);
        assert_eq!(display.visible().count(), 0);
    }

    #[test]
    fn test_prompt_placeholder() {
        let window = HighScoreWindow::new(HIGH_SCORE_TITLE, HIGH_SCORE_PROMPT, HighScores::new(), 8);
        assert!(window.message().contains("pisteillä 8!"));
        assert!(!window.message().contains("%p"));
    }

    #[test]
    fn test_close_fans_out_in_order() {
        let mut window = HighScoreWindow::new("t", "%p", HighScores::new(), 3);
        window.on_closed(ClosedHandler::SaveLeaderboard);
        window.on_closed(ClosedHandler::Restart);
        let closed = window.close("  Frog ");
        assert_eq!(closed.entry, Some(("Frog".to_string(), 3)));
        assert_eq!(closed.handlers, vec![ClosedHandler::SaveLeaderboard, ClosedHandler::Restart]);
    }

    #[test]
    fn test_non_qualifying_close_has_no_entry() {
        let mut board = HighScores::new();
        for _ in 0..MAX_HIGH_SCORES {
            board.submit("x", 50);
        }
        let window = HighScoreWindow::new("t", "%p", board, 10);
        assert!(!window.qualifies());
        assert!(window.close("Frog").entry.is_none());
    }

    #[test]
    fn test_blank_name_still_records_score() {
        let window = HighScoreWindow::new("t", "%p", HighScores::new(), 0);
        assert_eq!(window.close("   ").entry, Some((ANONYMOUS.to_string(), 0)));
    }

    #[test]
    fn test_control_help_lists_described_bindings() {
        let help = control_help(&default_bindings());
        assert_eq!(help.len(), 6);
        assert!(help.iter().any(|l| l == "F1: Näytä ohjeet"));
        assert!(help.iter().any(|l| l == "Escape: Lopeta peli"));
    }

    #[test]
    fn test_leaderboard_lines_rank_each_entry() {
        let mut board = HighScores::new();
        board.submit("Sammakko", 8);
        board.submit("Kisse", 12);
        assert_eq!(
            leaderboard_lines(&board),
            vec![
                " 1. Kisse            12".to_string(),
                " 2. Sammakko         8".to_string(),
            ]
        );
        assert!(leaderboard_lines(&HighScores::new()).is_empty());
    }

    #[test]
    fn test_window_text_always_lists_the_board() {
        let mut board = HighScores::new();
        for _ in 0..MAX_HIGH_SCORES {
            board.submit("x", 50);
        }
        let window = HighScoreWindow::new(HIGH_SCORE_TITLE, HIGH_SCORE_PROMPT, board.clone(), 10);
        let text = window.text();
        assert!(text.starts_with(HIGH_SCORE_TITLE));
        assert!(text.contains("10. x"));
        assert!(!text.contains("Syötä nimesi"));

        let window = HighScoreWindow::new(HIGH_SCORE_TITLE, HIGH_SCORE_PROMPT, board, 60);
        let text = window.text();
        assert!(text.contains(" 1. x"));
        assert!(text.ends_with(&window.message()));
    }

    #[test]
    fn test_score_label() {
        assert_eq!(score_label(8), "Pisteet : 8");
    }
}
