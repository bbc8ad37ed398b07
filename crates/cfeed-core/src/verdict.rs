//! Verdict classification.
//!
//! Codeforces reports a fine-grained verdict; the resolver only knows
//! accepted, penalized rejections and unpenalized rejections.

use crate::feed::JudgementTypeId;
use crate::objects::Verdict;

/// What a submission contributes to the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Emit a submission and a judgement of this type.
    Judged(JudgementTypeId),
    /// Not judged yet or not meaningful for scoring; emit nothing.
    Excluded,
}

/// Maps a submission verdict to its feed outcome.
#[must_use]
pub const fn classify(verdict: Option<Verdict>) -> Outcome {
    let Some(verdict) = verdict else {
        return Outcome::Excluded;
    };

    match verdict {
        Verdict::Ok => Outcome::Judged(JudgementTypeId::Accepted),
        Verdict::Failed
        | Verdict::TimeLimitExceeded
        | Verdict::MemoryLimitExceeded
        | Verdict::WrongAnswer
        | Verdict::RuntimeError
        | Verdict::Challenged
        | Verdict::IdlenessLimitExceeded
        | Verdict::Rejected
        | Verdict::Crashed
        | Verdict::PresentationError
        | Verdict::Partial => Outcome::Judged(JudgementTypeId::WrongAnswer),
        Verdict::CompilationError | Verdict::InputPreparationCrashed | Verdict::Skipped => {
            Outcome::Judged(JudgementTypeId::CompileError)
        }
        Verdict::Testing | Verdict::SecurityViolated => Outcome::Excluded,
    }
}
