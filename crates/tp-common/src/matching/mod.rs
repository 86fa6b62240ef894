pub mod engine;

pub use engine::{
    evaluate, group_roster, rank_full_matches, rank_partial_matches, Evaluation, MatchedSkill,
    MissingSkill, MissReason, RankedCandidate, RosterMember,
};
