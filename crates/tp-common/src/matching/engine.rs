use std::collections::HashMap;

use crate::levels::ExperienceLevel;
use crate::levels::ProficiencyLevel;
use crate::{PersonnelSkillRow, SkillEntry, SkillRequirement};

/// One person folded out of the flat roster rows.
///
/// The first row seen for a person establishes their attributes; later rows
/// only append skill entries. Encounter order of both people and skills is
/// preserved because ranking ties fall back to it.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterMember {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub experience_level: ExperienceLevel,
    pub skills: Vec<SkillEntry>,
}

/// A requirement the person satisfies, with the level they hold.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedSkill {
    pub skill_name: String,
    pub required_level: ProficiencyLevel,
    pub person_level: ProficiencyLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    SkillNotPossessed,
    ProficiencyTooLow,
}

/// A requirement the person fails, with the level they actually hold
/// (`None` when the skill is absent entirely).
#[derive(Debug, Clone, PartialEq)]
pub struct MissingSkill {
    pub skill_name: String,
    pub required_level: ProficiencyLevel,
    pub person_level: Option<ProficiencyLevel>,
    pub reason: MissReason,
}

/// Per-person outcome of checking every requirement of one project.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub matched: Vec<MatchedSkill>,
    pub missing: Vec<MissingSkill>,
    pub match_count: usize,
    /// round(match_count / total * 100), round-half-up.
    pub match_percentage: i64,
}

impl Evaluation {
    pub fn is_full_match(&self, total_requirements: usize) -> bool {
        self.match_count == total_requirements
    }
}

/// A roster member paired with their evaluation, as produced by the two
/// ranking modes.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    pub member: RosterMember,
    pub evaluation: Evaluation,
}

/// Fold flat (person, skill) rows into per-person records, preserving the
/// order in which people first appear.
pub fn group_roster(rows: &[PersonnelSkillRow]) -> Vec<RosterMember> {
    let mut members: Vec<RosterMember> = Vec::new();
    let mut index_by_id: HashMap<i64, usize> = HashMap::new();

    for row in rows {
        let index = *index_by_id.entry(row.personnel_id).or_insert_with(|| {
            members.push(RosterMember {
                id: row.personnel_id,
                name: row.name.clone(),
                email: row.email.clone(),
                role: row.role.clone(),
                experience_level: row.experience_level,
                skills: Vec::new(),
            });
            members.len() - 1
        });

        members[index].skills.push(SkillEntry {
            skill_id: row.skill_id,
            skill_name: row.skill_name.clone(),
            proficiency: row.proficiency,
        });
    }

    members
}

/// Check one person against every requirement of a project.
///
/// Both matching modes short-circuit on empty requirement sets before
/// calling this; an empty slice evaluates to 0%.
pub fn evaluate(requirements: &[SkillRequirement], member: &RosterMember) -> Evaluation {
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    let mut match_count = 0usize;

    for requirement in requirements {
        let person_skill = member
            .skills
            .iter()
            .find(|entry| entry.skill_id == requirement.skill_id);

        match person_skill {
            Some(entry) if entry.proficiency.satisfies(requirement.min_proficiency) => {
                match_count += 1;
                matched.push(MatchedSkill {
                    skill_name: requirement.skill_name.clone(),
                    required_level: requirement.min_proficiency,
                    person_level: entry.proficiency,
                });
            }
            Some(entry) => {
                missing.push(MissingSkill {
                    skill_name: requirement.skill_name.clone(),
                    required_level: requirement.min_proficiency,
                    person_level: Some(entry.proficiency),
                    reason: MissReason::ProficiencyTooLow,
                });
            }
            None => {
                missing.push(MissingSkill {
                    skill_name: requirement.skill_name.clone(),
                    required_level: requirement.min_proficiency,
                    person_level: None,
                    reason: MissReason::SkillNotPossessed,
                });
            }
        }
    }

    let match_percentage = if requirements.is_empty() {
        0
    } else {
        ((match_count as f64 / requirements.len() as f64) * 100.0).round() as i64
    };

    Evaluation {
        matched,
        missing,
        match_count,
        match_percentage,
    }
}

/// Full-match mode: only people satisfying every requirement, ranked by
/// experience level descending. The sort is stable so equal experience
/// levels keep roster encounter order.
pub fn rank_full_matches(
    requirements: &[SkillRequirement],
    roster: &[RosterMember],
) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = roster
        .iter()
        .map(|member| RankedCandidate {
            member: member.clone(),
            evaluation: evaluate(requirements, member),
        })
        .filter(|candidate| candidate.evaluation.is_full_match(requirements.len()))
        .collect();

    ranked.sort_by(|a, b| {
        b.member
            .experience_level
            .rank()
            .cmp(&a.member.experience_level.rank())
    });

    ranked
}

/// Partial-match mode: people at or above `min_match_percentage`, ranked by
/// match percentage descending (no experience tie-break), stable on ties.
///
/// The threshold is signed so zero or negative values include the whole
/// roster, annotated with their missing skills.
pub fn rank_partial_matches(
    requirements: &[SkillRequirement],
    roster: &[RosterMember],
    min_match_percentage: i64,
) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = roster
        .iter()
        .map(|member| RankedCandidate {
            member: member.clone(),
            evaluation: evaluate(requirements, member),
        })
        .filter(|candidate| candidate.evaluation.match_percentage >= min_match_percentage)
        .collect();

    ranked.sort_by(|a, b| {
        b.evaluation
            .match_percentage
            .cmp(&a.evaluation.match_percentage)
    });

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::{ExperienceLevel as Exp, ProficiencyLevel as Prof};

    fn row(
        personnel_id: i64,
        name: &str,
        experience_level: Exp,
        skill_id: i64,
        skill_name: &str,
        proficiency: Prof,
    ) -> PersonnelSkillRow {
        PersonnelSkillRow {
            personnel_id,
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            role: "Engineer".into(),
            experience_level,
            skill_id,
            skill_name: skill_name.into(),
            proficiency,
        }
    }

    fn requirement(skill_id: i64, skill_name: &str, min: Prof) -> SkillRequirement {
        SkillRequirement {
            skill_id,
            skill_name: skill_name.into(),
            min_proficiency: min,
        }
    }

    fn sample_roster() -> Vec<RosterMember> {
        // Person A fully qualifies, person B fails SQL on proficiency.
        group_roster(&[
            row(1, "Alice", Exp::MidLevel, 10, "SQL", Prof::Expert),
            row(1, "Alice", Exp::MidLevel, 11, "Python", Prof::Advanced),
            row(2, "Bob", Exp::Senior, 10, "SQL", Prof::Beginner),
            row(2, "Bob", Exp::Senior, 11, "Python", Prof::Advanced),
        ])
    }

    fn sample_requirements() -> Vec<SkillRequirement> {
        vec![
            requirement(10, "SQL", Prof::Advanced),
            requirement(11, "Python", Prof::Intermediate),
        ]
    }

    #[test]
    fn grouping_preserves_first_occurrence_order_and_attributes() {
        let roster = group_roster(&[
            row(7, "Grace", Exp::Senior, 1, "Go", Prof::Expert),
            row(3, "Heidi", Exp::Junior, 2, "Rust", Prof::Advanced),
            row(7, "Grace", Exp::Senior, 2, "Rust", Prof::Intermediate),
        ]);

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].id, 7);
        assert_eq!(roster[0].skills.len(), 2);
        assert_eq!(roster[1].id, 3);
        assert_eq!(roster[1].name, "Heidi");
    }

    #[test]
    fn evaluate_classifies_matched_and_missing() {
        let roster = sample_roster();
        let requirements = sample_requirements();

        let alice = evaluate(&requirements, &roster[0]);
        assert_eq!(alice.match_count, 2);
        assert_eq!(alice.match_percentage, 100);
        assert!(alice.missing.is_empty());

        let bob = evaluate(&requirements, &roster[1]);
        assert_eq!(bob.match_count, 1);
        assert_eq!(bob.match_percentage, 50);
        assert_eq!(bob.missing.len(), 1);
        assert_eq!(bob.missing[0].reason, MissReason::ProficiencyTooLow);
        assert_eq!(bob.missing[0].person_level, Some(Prof::Beginner));
    }

    #[test]
    fn evaluate_flags_absent_skills() {
        let roster = group_roster(&[row(5, "Carol", Exp::Junior, 11, "Python", Prof::Expert)]);
        let requirements = sample_requirements();

        let carol = evaluate(&requirements, &roster[0]);
        assert_eq!(carol.match_count, 1);
        assert_eq!(carol.missing[0].reason, MissReason::SkillNotPossessed);
        assert_eq!(carol.missing[0].person_level, None);
        assert_eq!(carol.missing[0].skill_name, "SQL");
    }

    #[test]
    fn percentage_rounds_half_up() {
        let requirements = vec![
            requirement(1, "A", Prof::Beginner),
            requirement(2, "B", Prof::Beginner),
            requirement(3, "C", Prof::Beginner),
        ];
        let roster = group_roster(&[row(1, "Dan", Exp::Junior, 1, "A", Prof::Beginner)]);

        // 1 of 3 -> 33, not 34.
        assert_eq!(evaluate(&requirements, &roster[0]).match_percentage, 33);

        let requirements = vec![
            requirement(1, "A", Prof::Beginner),
            requirement(2, "B", Prof::Beginner),
            requirement(3, "C", Prof::Beginner),
            requirement(4, "D", Prof::Beginner),
            requirement(5, "E", Prof::Beginner),
            requirement(6, "F", Prof::Beginner),
            requirement(7, "G", Prof::Beginner),
            requirement(8, "H", Prof::Beginner),
        ];
        let roster = group_roster(&[
            row(1, "Dan", Exp::Junior, 1, "A", Prof::Beginner),
            row(1, "Dan", Exp::Junior, 2, "B", Prof::Beginner),
            row(1, "Dan", Exp::Junior, 3, "C", Prof::Beginner),
        ]);

        // 3 of 8 = 37.5 -> 38 under round-half-up.
        assert_eq!(evaluate(&requirements, &roster[0]).match_percentage, 38);
    }

    #[test]
    fn full_match_excludes_partial_credit() {
        let ranked = rank_full_matches(&sample_requirements(), &sample_roster());

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].member.id, 1);
        assert_eq!(ranked[0].evaluation.match_percentage, 100);
        assert!(ranked[0].evaluation.missing.is_empty());
    }

    #[test]
    fn full_match_sorts_by_experience_and_keeps_encounter_order_on_ties() {
        let requirements = vec![requirement(1, "Rust", Prof::Beginner)];
        let roster = group_roster(&[
            row(1, "Jan", Exp::Junior, 1, "Rust", Prof::Expert),
            row(2, "Sam", Exp::Senior, 1, "Rust", Prof::Advanced),
            row(3, "Kim", Exp::MidLevel, 1, "Rust", Prof::Beginner),
            row(4, "Lee", Exp::MidLevel, 1, "Rust", Prof::Expert),
        ]);

        let ranked = rank_full_matches(&requirements, &roster);
        let ids: Vec<i64> = ranked.iter().map(|c| c.member.id).collect();

        // Senior first, then the two Mid-Levels in roster order, then Junior.
        assert_eq!(ids, vec![2, 3, 4, 1]);
    }

    #[test]
    fn partial_match_threshold_is_inclusive() {
        let ranked = rank_partial_matches(&sample_requirements(), &sample_roster(), 50);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].member.id, 1);
        assert_eq!(ranked[0].evaluation.match_percentage, 100);
        assert_eq!(ranked[1].member.id, 2);
        assert_eq!(ranked[1].evaluation.match_percentage, 50);
    }

    #[test]
    fn lowering_the_threshold_is_monotonic() {
        let requirements = sample_requirements();
        let roster = sample_roster();

        let strict = rank_partial_matches(&requirements, &roster, 80);
        let loose = rank_partial_matches(&requirements, &roster, 20);

        for candidate in &strict {
            assert!(loose.iter().any(|c| c.member.id == candidate.member.id));
        }
        assert!(strict.len() <= loose.len());
    }

    #[test]
    fn zero_threshold_includes_complete_misses_with_missing_annotations() {
        let requirements = vec![requirement(99, "Haskell", Prof::Expert)];
        let ranked = rank_partial_matches(&requirements, &sample_roster(), 0);

        assert_eq!(ranked.len(), 2);
        for candidate in &ranked {
            assert_eq!(candidate.evaluation.match_percentage, 0);
            assert_eq!(candidate.evaluation.missing.len(), 1);
            assert_eq!(
                candidate.evaluation.missing[0].reason,
                MissReason::SkillNotPossessed
            );
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let requirements = sample_requirements();
        let roster = sample_roster();

        assert_eq!(
            rank_full_matches(&requirements, &roster),
            rank_full_matches(&requirements, &roster)
        );
        assert_eq!(
            rank_partial_matches(&requirements, &roster, 50),
            rank_partial_matches(&requirements, &roster, 50)
        );
    }

    #[test]
    fn duplicate_skill_rows_use_the_first_entry() {
        let requirements = vec![requirement(1, "Rust", Prof::Advanced)];
        let roster = group_roster(&[
            row(1, "Ada", Exp::Senior, 1, "Rust", Prof::Expert),
            row(1, "Ada", Exp::Senior, 1, "Rust", Prof::Beginner),
        ]);

        let evaluation = evaluate(&requirements, &roster[0]);
        assert_eq!(evaluation.match_count, 1);
        assert_eq!(evaluation.matched[0].person_level, Prof::Expert);
    }
}
