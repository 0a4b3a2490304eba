//! Prompt templates for the three generation call sites.

/// Prompt for the day-by-day study plan. `days_left` may be negative when
/// the exam date is in the past; the prompt does not try to hide that.
pub fn study_plan(cert_title: &str, days_left: i64) -> String {
    format!(
        "You are an AWS Certified Instructor.\n\n\
Create a comprehensive, day-by-day study plan for the AWS {cert_title} exam \
to be completed in {days_left} days.\n\n\
Strict rules:\n\
- The plan must cover 100% of the exam guide topics for this specific certification.\n\
- Include services from all domains: Compute, Storage, Networking, Databases, Security, IAM, Monitoring, Costing, etc.\n\
- Follow the official AWS exam guide structure with weighted focus based on exam scoring.\n\
- Include real AWS service names like Lambda, CloudWatch, VPC, Route 53, IAM, S3, Kinesis, etc.\n\
- Do not generalize or skip edge-case services like AWS Outposts or Snowball if part of the exam.\n\
- Allocate days for revision, practice quizzes, mock tests, and hands-on labs.\n\
- Format:\n\
Day 1 - Domain: Subtopics and AWS Services\n\
Day 2 - Domain: Subtopics and AWS Services\n\
...\n\
Day N - Final Mock Test, Time Management, Exam Day Tips\n\n\
Keep it motivating and realistic.\n"
    )
}

/// Prompt for quiz generation. The format contract in the last four lines
/// is what `quiz::parse_quiz` expects back.
pub fn quiz(topic: &str, cert_title: &str) -> String {
    format!(
        "You are a trainer for AWS {cert_title}.\n\
Generate 5 multiple-choice questions on '{topic}'.\n\
Format:\n\
Q1: Question\n\
A) Option\n\
B) Option\n\
C) Option\n\
Answer: A - Explanation"
    )
}

/// Prompt for the free-text mentor answer.
pub fn mentor(question: &str) -> String {
    format!(
        "You are a highly experienced AWS Certification Mentor.\n\
Answer this user's question in a helpful, detailed, and accurate way.\n\n\
User's Question:\n\
{question}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn study_plan_mentions_cert_and_days() {
        let prompt = study_plan("AWS Certified Cloud Practitioner", 30);
        assert!(prompt.contains("AWS Certified Cloud Practitioner"));
        assert!(prompt.contains("30 days"));
        assert!(prompt.contains("Day 1 - Domain"));
    }

    #[test]
    fn study_plan_keeps_negative_day_counts() {
        let prompt = study_plan("AWS Certified Cloud Practitioner", -3);
        assert!(prompt.contains("-3 days"));
    }

    #[test]
    fn quiz_prompt_states_format_contract() {
        let prompt = quiz("S3 lifecycle rules", "AWS Certified Solutions Architect - Associate");
        assert!(prompt.contains("'S3 lifecycle rules'"));
        assert!(prompt.contains("Q1: Question"));
        assert!(prompt.contains("Answer: A - Explanation"));
    }

    #[test]
    fn mentor_prompt_embeds_question() {
        let prompt = mentor("What is the difference between SG and NACL?");
        assert!(prompt.contains("What is the difference between SG and NACL?"));
        assert!(prompt.contains("Certification Mentor"));
    }
}
