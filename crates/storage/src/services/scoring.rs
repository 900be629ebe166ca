use std::collections::HashSet;

use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use crate::Store;
use crate::dto::judging::{CriterionAverage, JudgeProgress, JudgingProgress, ProjectScoreSummary};
use crate::error::{Result, StorageError};
use crate::models::{JudgingCriterion, ProjectScore};

/// Flat arithmetic mean over every individual score value, across all
/// judges and criteria jointly. `None` for an empty set: "unscored" is not
/// the same thing as an average of zero.
pub fn flat_average(scores: &[ProjectScore]) -> Option<Decimal> {
    if scores.is_empty() {
        return None;
    }

    let sum: i64 = scores.iter().map(|s| s.score as i64).sum();
    Some(Decimal::from(sum) / Decimal::from(scores.len() as i64))
}

/// Mean of the entries for one criterion, same sentinel handling.
pub fn per_criterion_average(scores: &[ProjectScore], criterion_id: Uuid) -> Option<Decimal> {
    let (sum, count) = scores
        .iter()
        .filter(|s| s.criterion_id == criterion_id)
        .fold((0i64, 0i64), |(sum, count), s| {
            (sum + s.score as i64, count + 1)
        });

    if count == 0 {
        None
    } else {
        Some(Decimal::from(sum) / Decimal::from(count))
    }
}

/// Criterion-weight-adjusted mean: each entry counts with its criterion's
/// weight. Entries whose criterion is unknown fall back to weight 1.
pub fn weighted_average(scores: &[ProjectScore], criteria: &[JudgingCriterion]) -> Option<Decimal> {
    if scores.is_empty() {
        return None;
    }

    let weight_of = |criterion_id: Uuid| -> i64 {
        criteria
            .iter()
            .find(|c| c.criterion_id == criterion_id)
            .map(|c| c.weight as i64)
            .unwrap_or(1)
    };

    let (weighted_sum, weight_sum) = scores.iter().fold((0i64, 0i64), |(ws, w), s| {
        let weight = weight_of(s.criterion_id);
        (ws + s.score as i64 * weight, w + weight)
    });

    Some(Decimal::from(weighted_sum) / Decimal::from(weight_sum))
}

/// Fraction of projects judged, defined as 0 when there are no projects.
pub fn completion_ratio(total_projects: usize, judged_projects: usize) -> Decimal {
    if total_projects == 0 {
        return Decimal::ZERO;
    }

    Decimal::from(judged_projects as i64) / Decimal::from(total_projects as i64)
}

/// Round an aggregate to one decimal place for display, half-up.
pub fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Overall average score for a project, or `None` while it is unscored.
pub fn average_score(store: &Store, project_id: Uuid) -> Result<Option<Decimal>> {
    let state = store.read()?;
    if !state.projects.iter().any(|p| p.project_id == project_id) {
        return Err(StorageError::NotFound("Project"));
    }

    let scores: Vec<ProjectScore> = state
        .scores
        .iter()
        .filter(|s| s.project_id == project_id)
        .cloned()
        .collect();

    Ok(flat_average(&scores))
}

/// Aggregate view of a project: flat and weighted averages plus a
/// per-criterion breakdown across every criterion of the project's event.
pub fn project_score_summary(store: &Store, project_id: Uuid) -> Result<ProjectScoreSummary> {
    let state = store.read()?;
    let event_id = state
        .projects
        .iter()
        .find(|p| p.project_id == project_id)
        .map(|p| p.event_id)
        .ok_or(StorageError::NotFound("Project"))?;

    let scores: Vec<ProjectScore> = state
        .scores
        .iter()
        .filter(|s| s.project_id == project_id)
        .cloned()
        .collect();
    let criteria: Vec<JudgingCriterion> = state
        .criteria
        .iter()
        .filter(|c| c.event_id == event_id)
        .cloned()
        .collect();

    let breakdown = criteria
        .iter()
        .map(|criterion| CriterionAverage {
            criterion_id: criterion.criterion_id,
            name: criterion.name.clone(),
            weight: criterion.weight,
            score_count: scores
                .iter()
                .filter(|s| s.criterion_id == criterion.criterion_id)
                .count(),
            average: per_criterion_average(&scores, criterion.criterion_id)
                .map(round_for_display),
        })
        .collect();

    Ok(ProjectScoreSummary {
        project_id,
        score_count: scores.len(),
        average: flat_average(&scores).map(round_for_display),
        weighted_average: weighted_average(&scores, &criteria).map(round_for_display),
        criteria: breakdown,
    })
}

/// Judging progress for an event: a project counts as judged as soon as it
/// has at least one score entry from any judge on any criterion.
pub fn judging_completion_ratio(store: &Store, event_id: Uuid) -> Result<JudgingProgress> {
    let state = store.read()?;
    if !state.events.iter().any(|e| e.event_id == event_id) {
        return Err(StorageError::NotFound("Event"));
    }

    let project_ids: Vec<Uuid> = state
        .projects
        .iter()
        .filter(|p| p.event_id == event_id)
        .map(|p| p.project_id)
        .collect();
    let judged_projects = project_ids
        .iter()
        .filter(|id| state.scores.iter().any(|s| s.project_id == **id))
        .count();

    Ok(JudgingProgress {
        event_id,
        total_projects: project_ids.len(),
        judged_projects,
        completion_ratio: completion_ratio(project_ids.len(), judged_projects),
    })
}

/// One judge's personal progress: distinct projects of their event they
/// have touched, over the event's total.
pub fn judge_progress(store: &Store, judge_id: Uuid) -> Result<JudgeProgress> {
    let state = store.read()?;
    let event_id = state
        .judges
        .iter()
        .find(|j| j.judge_id == judge_id)
        .map(|j| j.event_id)
        .ok_or(StorageError::NotFound("Judge"))?;

    let total_projects = state
        .projects
        .iter()
        .filter(|p| p.event_id == event_id)
        .count();
    let scored_projects = state
        .scores
        .iter()
        .filter(|s| s.judge_id == judge_id)
        .map(|s| s.project_id)
        .collect::<HashSet<_>>()
        .len();

    Ok(JudgeProgress {
        judge_id,
        event_id,
        total_projects,
        scored_projects,
        completion_ratio: completion_ratio(total_projects, scored_projects),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(judge_id: Uuid, criterion_id: Uuid, score: i32) -> ProjectScore {
        ProjectScore {
            score_id: Uuid::new_v4(),
            project_id: Uuid::new_v4(),
            judge_id,
            criterion_id,
            score,
            comment: None,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    fn criterion(criterion_id: Uuid, weight: i32) -> JudgingCriterion {
        JudgingCriterion {
            criterion_id,
            event_id: Uuid::new_v4(),
            name: "Innovation".to_string(),
            description: None,
            weight,
        }
    }

    #[test]
    fn flat_average_of_empty_set_is_the_unscored_sentinel() {
        assert_eq!(flat_average(&[]), None);
    }

    #[test]
    fn flat_average_is_not_a_mean_of_per_judge_means() {
        // Judge X scores once, judge Y three times. The flat mean is
        // (9+7+8+9)/4 = 8.25; averaging per-judge averages would give
        // (9 + 8)/2 = 8.5 instead.
        let judge_x = Uuid::new_v4();
        let judge_y = Uuid::new_v4();
        let c1 = Uuid::new_v4();
        let c2 = Uuid::new_v4();
        let c3 = Uuid::new_v4();

        let scores = vec![
            entry(judge_x, c1, 9),
            entry(judge_y, c1, 7),
            entry(judge_y, c2, 8),
            entry(judge_y, c3, 9),
        ];

        let average = flat_average(&scores).unwrap();
        assert_eq!(average, Decimal::new(825, 2));
        assert_eq!(round_for_display(average), Decimal::new(83, 1));
    }

    #[test]
    fn display_rounding_is_half_up() {
        assert_eq!(round_for_display(Decimal::new(825, 2)), Decimal::new(83, 1));
        assert_eq!(round_for_display(Decimal::new(84, 1)), Decimal::new(84, 1));
    }

    #[test]
    fn per_criterion_average_scopes_to_one_criterion() {
        let judge = Uuid::new_v4();
        let c1 = Uuid::new_v4();
        let c2 = Uuid::new_v4();

        let scores = vec![entry(judge, c1, 10), entry(judge, c2, 2)];

        assert_eq!(per_criterion_average(&scores, c1), Some(Decimal::from(10)));
        assert_eq!(per_criterion_average(&scores, c2), Some(Decimal::from(2)));
        assert_eq!(per_criterion_average(&scores, Uuid::new_v4()), None);
    }

    #[test]
    fn weighted_average_honors_criterion_weights() {
        let judge = Uuid::new_v4();
        let c1 = Uuid::new_v4();
        let c2 = Uuid::new_v4();

        let scores = vec![entry(judge, c1, 8), entry(judge, c2, 6)];
        let criteria = vec![criterion(c1, 3), criterion(c2, 1)];

        // (8*3 + 6*1) / (3 + 1) = 7.5
        assert_eq!(
            weighted_average(&scores, &criteria),
            Some(Decimal::new(75, 1))
        );
    }

    #[test]
    fn weighted_average_of_empty_set_is_none() {
        assert_eq!(weighted_average(&[], &[]), None);
    }

    #[test]
    fn completion_ratio_is_zero_without_projects() {
        assert_eq!(completion_ratio(0, 0), Decimal::ZERO);
    }

    #[test]
    fn completion_ratio_counts_touched_projects() {
        assert_eq!(completion_ratio(5, 2), Decimal::new(4, 1));
        assert_eq!(completion_ratio(4, 4), Decimal::ONE);
    }
}
