//! Core data model types for certmentor.
//!
//! These are the fundamental types the whole system uses to represent the
//! user, their certification goal, and parsed quiz content.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The AWS certifications the mentor knows how to plan for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Certification {
    #[serde(rename = "CLF-C01")]
    CloudPractitioner,
    #[serde(rename = "ACP-ML")]
    AiPractitioner,
    #[serde(rename = "MLA-C02")]
    MlEngineerAssociate,
    #[serde(rename = "DEA-C01")]
    DataEngineerAssociate,
    #[serde(rename = "DVA-C01")]
    DeveloperAssociate,
    #[serde(rename = "SAA-C03")]
    SolutionsArchitectAssociate,
    #[serde(rename = "SOA-C02")]
    SysOpsAdministrator,
    #[serde(rename = "DOP-C02")]
    DevOpsEngineerProfessional,
    #[serde(rename = "SAP-C02")]
    SolutionsArchitectProfessional,
    #[serde(rename = "ANS-C01")]
    AdvancedNetworking,
    #[serde(rename = "MLS-C01")]
    MachineLearningSpecialty,
    #[serde(rename = "SCS-C01")]
    SecuritySpecialty,
}

impl Certification {
    /// All certifications, in catalog order.
    pub const ALL: [Certification; 12] = [
        Certification::CloudPractitioner,
        Certification::AiPractitioner,
        Certification::MlEngineerAssociate,
        Certification::DataEngineerAssociate,
        Certification::DeveloperAssociate,
        Certification::SolutionsArchitectAssociate,
        Certification::SysOpsAdministrator,
        Certification::DevOpsEngineerProfessional,
        Certification::SolutionsArchitectProfessional,
        Certification::AdvancedNetworking,
        Certification::MachineLearningSpecialty,
        Certification::SecuritySpecialty,
    ];

    /// The exam code (e.g. "SAA-C03").
    pub fn code(&self) -> &'static str {
        match self {
            Certification::CloudPractitioner => "CLF-C01",
            Certification::AiPractitioner => "ACP-ML",
            Certification::MlEngineerAssociate => "MLA-C02",
            Certification::DataEngineerAssociate => "DEA-C01",
            Certification::DeveloperAssociate => "DVA-C01",
            Certification::SolutionsArchitectAssociate => "SAA-C03",
            Certification::SysOpsAdministrator => "SOA-C02",
            Certification::DevOpsEngineerProfessional => "DOP-C02",
            Certification::SolutionsArchitectProfessional => "SAP-C02",
            Certification::AdvancedNetworking => "ANS-C01",
            Certification::MachineLearningSpecialty => "MLS-C01",
            Certification::SecuritySpecialty => "SCS-C01",
        }
    }

    /// The full display name used in prompts and the catalog listing.
    pub fn title(&self) -> &'static str {
        match self {
            Certification::CloudPractitioner => "AWS Certified Cloud Practitioner",
            Certification::AiPractitioner => "AWS Certified AI Practitioner",
            Certification::MlEngineerAssociate => {
                "AWS Certified Machine Learning Engineer - Associate"
            }
            Certification::DataEngineerAssociate => "AWS Certified Data Engineer - Associate",
            Certification::DeveloperAssociate => "AWS Certified Developer - Associate",
            Certification::SolutionsArchitectAssociate => {
                "AWS Certified Solutions Architect - Associate"
            }
            Certification::SysOpsAdministrator => "AWS Certified SysOps Administrator - Associate",
            Certification::DevOpsEngineerProfessional => {
                "AWS Certified DevOps Engineer - Professional"
            }
            Certification::SolutionsArchitectProfessional => {
                "AWS Certified Solutions Architect - Professional"
            }
            Certification::AdvancedNetworking => "AWS Certified Advanced Networking - Specialty",
            Certification::MachineLearningSpecialty => "AWS Certified Machine Learning - Specialty",
            Certification::SecuritySpecialty => "AWS Certified Security - Specialty",
        }
    }
}

impl fmt::Display for Certification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Certification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Certification::ALL
            .iter()
            .find(|c| c.code() == code)
            .copied()
            .ok_or_else(|| format!("unknown certification code: {s}"))
    }
}

/// Who the session is for. Validated once, immutable for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    name: String,
    email: String,
}

impl Identity {
    /// Validate and construct an identity.
    ///
    /// The email check mirrors the original intake form: a non-empty local
    /// part, one `@`, and a `.` inside the domain with characters on both
    /// sides. Stricter validation is deliberately out of scope.
    pub fn new(name: &str, email: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let email = email.trim();
        if !email_shape_ok(email) {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

fn email_shape_ok(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    // At least one dot with characters on both sides of it.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// The certification the user is aiming for and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyGoal {
    pub certification: Certification,
    pub exam_date: NaiveDate,
}

impl StudyGoal {
    pub fn new(certification: Certification, exam_date: NaiveDate) -> Self {
        Self {
            certification,
            exam_date,
        }
    }

    /// Days until the exam. Negative when the exam date is in the past;
    /// that is not rejected, it just produces a nonsensical day count.
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.exam_date - today).num_days()
    }
}

/// The parsed correct answer for a quiz item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectAnswer {
    pub letter: char,
    pub explanation: String,
}

/// One structured multiple-choice question parsed from model output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    /// Stable ordinal among the parsed items (0-based).
    pub index: usize,
    /// The question text.
    pub question: String,
    /// Ordered (letter, text) pairs; letters are unique within the item.
    pub options: Vec<(char, String)>,
    /// The parsed correct answer, when the model provided one.
    #[serde(default)]
    pub answer: Option<CorrectAnswer>,
}

impl QuizItem {
    /// An item can only count toward the score if an answer was parsed.
    pub fn is_scoreable(&self) -> bool {
        self.answer.is_some()
    }

    /// Look up the text for an option letter.
    pub fn option_text(&self, letter: char) -> Option<&str> {
        self.options
            .iter()
            .find(|(l, _)| *l == letter)
            .map(|(_, t)| t.as_str())
    }
}

/// The user's submitted answers, keyed by `QuizItem::index`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerSheet {
    selections: HashMap<usize, char>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the selected letter for an item. A later call for the same
    /// index replaces the earlier selection.
    pub fn select(&mut self, index: usize, letter: char) {
        self.selections.insert(index, letter);
    }

    /// The selected letter for an item, if any.
    pub fn selected(&self, index: usize) -> Option<char> {
        self.selections.get(&index).copied()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

/// The outcome of scoring one submitted quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Number of scoreable items answered correctly.
    pub correct: usize,
    /// Number of scoreable items (items with a parsed answer).
    pub total: usize,
    /// `100 * correct / total`, or 0.0 when there are no scoreable items.
    pub percentage: f64,
    /// One line per item, in item order, including unscoreable items.
    pub feedback: Vec<String>,
    /// Items excluded from the score because no answer was parsed.
    pub unscored: usize,
}

impl ScoreResult {
    /// The encouragement band shown after scoring.
    pub fn verdict(&self) -> &'static str {
        if self.percentage >= 80.0 {
            "Excellent work! You're well on your way to acing the exam."
        } else if self.percentage >= 60.0 {
            "Good effort! Keep reviewing and practicing."
        } else {
            "Keep studying! Focus on weak areas and try again."
        }
    }
}
