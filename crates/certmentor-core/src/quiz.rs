//! Quiz-text parser.
//!
//! Structures the model's free-text quiz output into `QuizItem`s. The
//! upstream text has no guaranteed schema, so the parser is tolerant:
//! blocks it cannot structure are skipped with a warning and parsing
//! continues for the rest. The expected shape per block is:
//!
//! ```text
//! Q1: Question text
//! A) Option
//! B) Option
//! C) Option
//! Answer: A - Explanation
//! ```

use crate::model::{CorrectAnswer, QuizItem};

/// A block the parser could not structure. Not an error; accumulated as
/// warnings so callers can degrade gracefully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-based ordinal of the raw block in the input.
    pub block: usize,
    /// What was wrong with it.
    pub message: String,
}

/// The outcome of parsing one raw quiz text.
#[derive(Debug, Clone, Default)]
pub struct ParsedQuiz {
    /// Valid items, in input order, indexed 0..n over the emitted sequence.
    pub items: Vec<QuizItem>,
    /// Skipped blocks.
    pub warnings: Vec<ParseWarning>,
}

impl ParsedQuiz {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Raw text accumulated for one `Q<n>:` block.
struct Block {
    ordinal: usize,
    question: String,
    options: Vec<(char, String)>,
    answer: Option<CorrectAnswer>,
}

/// Parse raw model output into structured quiz items.
///
/// A block begins at a line starting with `Q<digits>:` and runs until the
/// next such line or end of input. Blocks with no question text or no
/// options are skipped (warning, not error). A missing or malformed
/// `Answer:` line leaves the item displayable but unscoreable. Text before
/// the first block is ignored. Empty input yields an empty result.
pub fn parse_quiz(raw: &str) -> ParsedQuiz {
    let mut parsed = ParsedQuiz::default();
    let mut current: Option<Block> = None;
    let mut block_count = 0usize;

    for line in raw.lines() {
        if let Some(question) = block_start(line) {
            if let Some(block) = current.take() {
                finish_block(block, &mut parsed);
            }
            block_count += 1;
            current = Some(Block {
                ordinal: block_count,
                question: question.trim().to_string(),
                options: Vec::new(),
                answer: None,
            });
            continue;
        }

        // Preamble before the first Q<n>: line is ignored.
        let Some(block) = current.as_mut() else {
            continue;
        };

        if let Some((letter, text)) = option_line(line) {
            // Duplicate option letters within a block: first occurrence wins.
            if !block.options.iter().any(|(l, _)| *l == letter) {
                block.options.push((letter, text));
            }
            continue;
        }

        if block.answer.is_none() {
            block.answer = answer_line(line);
        }
    }

    if let Some(block) = current.take() {
        finish_block(block, &mut parsed);
    }

    parsed
}

fn finish_block(block: Block, parsed: &mut ParsedQuiz) {
    if block.question.is_empty() {
        parsed.warnings.push(ParseWarning {
            block: block.ordinal,
            message: "could not parse question text".into(),
        });
        return;
    }
    if block.options.is_empty() {
        parsed.warnings.push(ParseWarning {
            block: block.ordinal,
            message: "no options found".into(),
        });
        return;
    }
    parsed.items.push(QuizItem {
        index: parsed.items.len(),
        question: block.question,
        options: block.options,
        answer: block.answer,
    });
}

/// If the line starts a block (`Q<digits>:`), return the text after the colon.
fn block_start(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('Q')?;
    let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    rest[digits..].strip_prefix(':')
}

/// Parse an option line `<L>) <text>` with L in A..C.
fn option_line(line: &str) -> Option<(char, String)> {
    let trimmed = line.trim_start();
    let mut chars = trimmed.chars();
    let letter = chars.next()?;
    if !('A'..='C').contains(&letter) || chars.next() != Some(')') {
        return None;
    }
    Some((letter, chars.as_str().trim().to_string()))
}

/// Parse an answer line `Answer: <L> - <explanation>` with L in A..C.
/// Malformed answer lines are treated as absent, not as errors.
fn answer_line(line: &str) -> Option<CorrectAnswer> {
    let rest = line.trim_start().strip_prefix("Answer:")?.trim_start();
    let mut chars = rest.chars();
    let letter = chars.next()?;
    if !('A'..='C').contains(&letter) {
        return None;
    }
    let rest = chars.as_str().trim_start();
    let explanation = rest.strip_prefix('-')?.trim().to_string();
    Some(CorrectAnswer { letter, explanation })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "Q1: What is S3?\n\
A) Storage\n\
B) Compute\n\
C) Database\n\
Answer: A - S3 is object storage\n";

    #[test]
    fn parse_well_formed_block() {
        let parsed = parse_quiz(WELL_FORMED);
        assert!(parsed.warnings.is_empty());
        assert_eq!(parsed.items.len(), 1);

        let item = &parsed.items[0];
        assert_eq!(item.index, 0);
        assert_eq!(item.question, "What is S3?");
        assert_eq!(
            item.options,
            vec![
                ('A', "Storage".to_string()),
                ('B', "Compute".to_string()),
                ('C', "Database".to_string()),
            ]
        );
        let answer = item.answer.as_ref().unwrap();
        assert_eq!(answer.letter, 'A');
        assert_eq!(answer.explanation, "S3 is object storage");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let parsed = parse_quiz("");
        assert!(parsed.items.is_empty());
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn text_without_blocks_yields_empty_output() {
        let parsed = parse_quiz("Here are your quiz questions.\nGood luck!\n");
        assert!(parsed.items.is_empty());
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn one_item_per_block_order_preserved() {
        let raw = "Q1: First?\nA) one\nAnswer: A - yes\n\
Q2: Second?\nA) one\nB) two\nAnswer: B - yes\n\
Q3: Third?\nC) three\nAnswer: C - yes\n";
        let parsed = parse_quiz(raw);
        assert_eq!(parsed.items.len(), 3);
        assert_eq!(parsed.items[0].question, "First?");
        assert_eq!(parsed.items[1].question, "Second?");
        assert_eq!(parsed.items[2].question, "Third?");
        assert_eq!(parsed.items[2].index, 2);
    }

    #[test]
    fn block_without_options_is_skipped() {
        let raw = "Q1: No options here\nAnswer: A - still no options\n\
Q2: Fine?\nA) yes\nAnswer: A - ok\n";
        let parsed = parse_quiz(raw);
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.items[0].question, "Fine?");
        // The surviving item gets index 0, not its raw block position.
        assert_eq!(parsed.items[0].index, 0);
        assert_eq!(parsed.warnings.len(), 1);
        assert_eq!(parsed.warnings[0].block, 1);
        assert!(parsed.warnings[0].message.contains("no options"));
    }

    #[test]
    fn block_without_question_text_is_skipped() {
        let raw = "Q1:\nA) orphan option\nAnswer: A - orphan\nQ2: Real?\nB) sure\nAnswer: B - ok\n";
        let parsed = parse_quiz(raw);
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.items[0].question, "Real?");
        assert_eq!(parsed.warnings.len(), 1);
        assert!(parsed.warnings[0].message.contains("question text"));
    }

    #[test]
    fn missing_answer_line_leaves_item_unscoreable() {
        let raw = "Q1: What is EC2?\nA) Compute\nB) Storage\n";
        let parsed = parse_quiz(raw);
        assert_eq!(parsed.items.len(), 1);
        assert!(!parsed.items[0].is_scoreable());
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn malformed_answer_line_is_ignored() {
        // No "- explanation" part, so the answer pattern does not match.
        let raw = "Q1: What is EC2?\nA) Compute\nAnswer: A\n";
        let parsed = parse_quiz(raw);
        assert_eq!(parsed.items.len(), 1);
        assert!(parsed.items[0].answer.is_none());
    }

    #[test]
    fn duplicate_option_letters_first_occurrence_wins() {
        let raw = "Q1: Pick one\nA) first\nA) second\nB) other\nAnswer: A - first it is\n";
        let parsed = parse_quiz(raw);
        assert_eq!(
            parsed.items[0].options,
            vec![('A', "first".to_string()), ('B', "other".to_string())]
        );
    }

    #[test]
    fn option_letters_outside_a_to_c_are_ignored() {
        let raw = "Q1: Pick\nA) yes\nD) not an option\nAnswer: A - yes\n";
        let parsed = parse_quiz(raw);
        assert_eq!(parsed.items[0].options.len(), 1);
    }

    #[test]
    fn preamble_and_chatter_are_ignored() {
        let raw = "Sure! Here are 2 questions on S3:\n\n\
Q1: What is S3?\nA) Storage\nB) Compute\nAnswer: A - object storage\n\
Some commentary between questions.\n\
Q2: Durability?\nA) 11 nines\nB) 3 nines\nAnswer: A - famously\n";
        let parsed = parse_quiz(raw);
        assert_eq!(parsed.items.len(), 2);
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn q_prefix_requires_digits_and_colon() {
        assert!(block_start("Q1: ok").is_some());
        assert!(block_start("Q12: ok").is_some());
        assert!(block_start("Q: missing digits").is_none());
        assert!(block_start("Q1 no colon").is_none());
        assert!(block_start("Quiz: not a block").is_none());
        assert!(block_start(" Q1: not at line start").is_none());
    }

    #[test]
    fn answer_line_tolerates_whitespace() {
        let answer = answer_line("Answer:  B  -  because of reasons").unwrap();
        assert_eq!(answer.letter, 'B');
        assert_eq!(answer.explanation, "because of reasons");
        assert!(answer_line("Answer: D - out of range").is_none());
        assert!(answer_line("The answer is B").is_none());
    }
}
