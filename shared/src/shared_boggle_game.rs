use serde::{Serialize, Deserialize};

// Default game length in seconds
pub const DEFAULT_GAME_SECONDS: u32 = 60;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CheckWordResponse {
    // "not-word", "not-on-board", or anything else meaning the word is valid
    pub result: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PostScoreRequest {
    pub score: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PostScoreResponse {
    #[serde(rename = "brokeRecord")]
    pub broke_record: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WordVerdict {
    NotWord,
    NotOnBoard,
    Valid,
}

impl WordVerdict {
    // The check-word contract is open-ended: only the two rejection values
    // are meaningful, every other result string counts as valid.
    pub fn parse(result: &str) -> Self {
        match result {
            "not-word" => WordVerdict::NotWord,
            "not-on-board" => WordVerdict::NotOnBoard,
            _ => WordVerdict::Valid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MessageKind {
    Ok,
    Err,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl StatusMessage {
    pub fn ok(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: MessageKind::Ok }
    }

    pub fn err(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: MessageKind::Err }
    }
}

// What the session wants done with a submitted word
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    // Empty input, or the session is already over
    Ignored,
    Duplicate(StatusMessage),
    // The word needs a round trip to the check-word endpoint
    Check(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    pub remaining_seconds: u32,
    pub score: u32,
    pub found_words: Vec<String>,
    pub finished: bool,
}

impl GameSession {
    pub fn new(secs: u32) -> Self {
        Self {
            remaining_seconds: secs,
            score: 0,
            found_words: Vec::new(),
            finished: false,
        }
    }

    pub fn is_found(&self, word: &str) -> bool {
        self.found_words.iter().any(|w| w == word)
    }

    /// Screen a raw submission before it goes to the server. Duplicates are
    /// rejected here without a network round trip.
    pub fn submit(&self, raw: &str) -> Submission {
        let word = raw.trim();
        if word.is_empty() || self.finished {
            return Submission::Ignored;
        }
        if self.is_found(word) {
            return Submission::Duplicate(StatusMessage::err(format!("Already found {}", word)));
        }
        Submission::Check(word.to_string())
    }

    /// Apply the server's verdict for a checked word. Words only ever score
    /// once: a verdict that arrives after the same word was already recorded
    /// falls back to the duplicate message instead of re-scoring. Verdicts
    /// landing after time-up are dropped entirely.
    pub fn resolve(&mut self, word: &str, verdict: WordVerdict) -> Option<StatusMessage> {
        if self.finished {
            return None;
        }
        let msg = match verdict {
            WordVerdict::NotWord => {
                StatusMessage::err(format!("{} is not a valid English word", word))
            }
            WordVerdict::NotOnBoard => {
                StatusMessage::err(format!("{} is not a valid word on this board", word))
            }
            WordVerdict::Valid => {
                if self.is_found(word) {
                    StatusMessage::err(format!("Already found {}", word))
                } else {
                    self.found_words.push(word.to_string());
                    // One point per letter
                    self.score += word.chars().count() as u32;
                    StatusMessage::ok(format!("Added: {}", word))
                }
            }
        };
        Some(msg)
    }

    /// Outcome of a validation round trip that failed outright. Like a late
    /// verdict, a failure landing after time-up is dropped so the final-score
    /// message keeps the message area.
    pub fn check_failed(&self, msg: StatusMessage) -> Option<StatusMessage> {
        if self.finished {
            None
        } else {
            Some(msg)
        }
    }

    /// Advance the countdown by one second. Returns true exactly once, on the
    /// tick that reaches zero; the caller posts the final score on that tick.
    pub fn tick(&mut self) -> bool {
        if self.finished {
            return false;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.finished = true;
            log::debug!("session over, final score {}", self.score);
            return true;
        }
        false
    }

    pub fn final_message(&self, broke_record: bool) -> StatusMessage {
        if broke_record {
            StatusMessage::ok(format!("New record: {}", self.score))
        } else {
            StatusMessage::ok(format!("Final score: {}", self.score))
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(DEFAULT_GAME_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_word_scores_length() {
        let mut session = GameSession::new(60);
        assert_eq!(session.submit("cat"), Submission::Check("cat".to_string()));
        let msg = session.resolve("cat", WordVerdict::Valid);
        assert_eq!(msg, Some(StatusMessage::ok("Added: cat")));
        assert_eq!(session.score, 3);
        assert_eq!(session.found_words, vec!["cat".to_string()]);
    }

    #[test]
    fn test_duplicate_word_rejected_without_rescoring() {
        let mut session = GameSession::new(60);
        session.resolve("cat", WordVerdict::Valid);
        assert_eq!(
            session.submit("cat"),
            Submission::Duplicate(StatusMessage::err("Already found cat"))
        );
        assert_eq!(session.score, 3);
        assert_eq!(session.found_words.len(), 1);
    }

    #[test]
    fn test_stale_verdict_does_not_double_score() {
        // Two in-flight checks for the same word: the second verdict lands
        // after the word was recorded and must not score again.
        let mut session = GameSession::new(60);
        session.resolve("cat", WordVerdict::Valid);
        let msg = session.resolve("cat", WordVerdict::Valid);
        assert_eq!(msg, Some(StatusMessage::err("Already found cat")));
        assert_eq!(session.score, 3);
        assert_eq!(session.found_words.len(), 1);
    }

    #[test]
    fn test_late_verdict_after_time_up_is_dropped() {
        let mut session = GameSession::new(1);
        session.tick();
        assert_eq!(session.resolve("cat", WordVerdict::Valid), None);
        assert_eq!(session.score, 0);
        assert!(session.found_words.is_empty());
    }

    #[test]
    fn test_late_check_failure_after_time_up_is_dropped() {
        let mut session = GameSession::new(1);
        let failure = StatusMessage::err("Network error. Please check your connection.");
        assert_eq!(session.check_failed(failure.clone()), Some(failure.clone()));
        session.tick();
        // The final-score message owns the message area once time is up
        assert_eq!(session.check_failed(failure), None);
    }

    #[test]
    fn test_rejected_words_leave_state_unchanged() {
        let mut session = GameSession::new(60);
        let msg = session.resolve("zzzzz", WordVerdict::NotWord);
        assert_eq!(msg, Some(StatusMessage::err("zzzzz is not a valid English word")));
        let msg = session.resolve("qat", WordVerdict::NotOnBoard);
        assert_eq!(msg, Some(StatusMessage::err("qat is not a valid word on this board")));
        assert_eq!(session.score, 0);
        assert!(session.found_words.is_empty());
    }

    #[test]
    fn test_empty_input_ignored() {
        let session = GameSession::new(60);
        assert_eq!(session.submit(""), Submission::Ignored);
        assert_eq!(session.submit("   "), Submission::Ignored);
    }

    #[test]
    fn test_input_is_trimmed() {
        let session = GameSession::new(60);
        assert_eq!(session.submit("  cat "), Submission::Check("cat".to_string()));
    }

    #[test]
    fn test_countdown_finishes_exactly_once() {
        let mut session = GameSession::new(3);
        assert!(!session.tick());
        assert!(!session.tick());
        assert!(session.tick());
        assert!(session.finished);
        assert_eq!(session.remaining_seconds, 0);
        // Further ticks are no-ops
        assert!(!session.tick());
        assert_eq!(session.remaining_seconds, 0);
    }

    #[test]
    fn test_no_submissions_after_time_up() {
        let mut session = GameSession::new(1);
        session.tick();
        assert_eq!(session.submit("cat"), Submission::Ignored);
    }

    #[test]
    fn test_verdict_parsing() {
        assert_eq!(WordVerdict::parse("not-word"), WordVerdict::NotWord);
        assert_eq!(WordVerdict::parse("not-on-board"), WordVerdict::NotOnBoard);
        assert_eq!(WordVerdict::parse("ok"), WordVerdict::Valid);
        assert_eq!(WordVerdict::parse("anything"), WordVerdict::Valid);
    }

    #[test]
    fn test_wire_field_names() {
        let resp: PostScoreResponse = serde_json::from_str(r#"{"brokeRecord":true}"#).unwrap();
        assert!(resp.broke_record);
        let body = serde_json::to_string(&PostScoreRequest { score: 10 }).unwrap();
        assert_eq!(body, r#"{"score":10}"#);
        let check: CheckWordResponse = serde_json::from_str(r#"{"result":"not-word"}"#).unwrap();
        assert_eq!(WordVerdict::parse(&check.result), WordVerdict::NotWord);
    }

    #[test]
    fn test_final_message() {
        let mut session = GameSession::new(60);
        session.resolve("jiggle", WordVerdict::Valid);
        session.resolve("wiggle", WordVerdict::Valid);
        assert_eq!(session.score, 12);
        assert_eq!(session.final_message(true), StatusMessage::ok("New record: 12"));
        assert_eq!(session.final_message(false), StatusMessage::ok("Final score: 12"));
    }
}
