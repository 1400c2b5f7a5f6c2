//! Tests for team directors.

use super::*;
use crate::{Evaluation, MatchBonuses, TeamEvaluator};
use teamforge_core::TeamScore;
use teamforge_test::{hero, metro_catalog, metro_rules};

// Drives any director through the same push/pop script.
fn run_script<D: TeamDirector>(director: &mut D, script: &[&str]) -> Vec<Evaluation> {
    let catalog = metro_catalog();
    let mut seen = Vec::new();
    for name in script {
        if *name == "-" {
            director.pop();
        } else {
            director.push(hero(&catalog, name));
        }
        seen.push(director.evaluate());
    }
    seen
}

const SCRIPT: &[&str] = &["X.Borg", "Layla", "-", "Roger", "Ixia", "-", "-", "Hanabi"];

#[test]
fn test_empty_team_takes_gate_penalty() {
    let catalog = metro_catalog();
    let rules = metro_rules(&catalog);
    let bonuses = MatchBonuses::none();
    let team = IncrementalTeam::new(TeamEvaluator::new(&catalog, &rules, &bonuses));

    assert!(team.is_empty());
    assert_eq!(team.gate_tally(), 0);
    assert_eq!(team.evaluate().score, TeamScore::of(-500));
}

#[test]
fn test_pop_on_empty_returns_none() {
    let catalog = metro_catalog();
    let rules = metro_rules(&catalog);
    let bonuses = MatchBonuses::none();
    let evaluator = TeamEvaluator::new(&catalog, &rules, &bonuses);

    assert_eq!(IncrementalTeam::new(evaluator).pop(), None);
    assert_eq!(RecalculatingTeam::new(evaluator).pop(), None);
}

#[test]
fn test_members_in_stack_order() {
    let catalog = metro_catalog();
    let rules = metro_rules(&catalog);
    let bonuses = MatchBonuses::none();
    let mut team = IncrementalTeam::new(TeamEvaluator::new(&catalog, &rules, &bonuses));

    team.push(hero(&catalog, "Roger"));
    team.push(hero(&catalog, "X.Borg"));
    assert_eq!(
        team.members(),
        &[hero(&catalog, "Roger"), hero(&catalog, "X.Borg")]
    );
    assert_eq!(team.gate_tally(), 2);
    assert_eq!(team.pop(), Some(hero(&catalog, "X.Borg")));
    assert_eq!(team.len(), 1);
}

#[test]
fn test_directors_agree_on_script() {
    let catalog = metro_catalog();
    let rules = metro_rules(&catalog);
    let bonuses = MatchBonuses::none()
        .with_special([hero(&catalog, "X.Borg"), hero(&catalog, "Roger")])
        .with_enhancement(teamforge_test::trait_id(&catalog, "Marksman"), 1);
    let evaluator = TeamEvaluator::new(&catalog, &rules, &bonuses);

    let incremental = run_script(&mut IncrementalTeam::new(evaluator), SCRIPT);
    let reference = run_script(&mut RecalculatingTeam::new(evaluator), SCRIPT);
    assert_eq!(incremental, reference);

    // X.Borg and Roger with both special credits reach Glory League 2.
    let glory = teamforge_test::trait_id(&catalog, "Glory League");
    assert_eq!(incremental[3].breakdown.get(&glory), Some(&2));
}

#[test]
fn test_quality_restored_after_pop() {
    let catalog = metro_catalog();
    let rules = metro_rules(&catalog);
    let bonuses = MatchBonuses::none();
    let mut team = IncrementalTeam::new(TeamEvaluator::new(&catalog, &rules, &bonuses));

    team.push(hero(&catalog, "Irithel"));
    let before = team.evaluate();
    team.push(hero(&catalog, "Hanabi"));
    assert_eq!(team.quality(), 9);
    team.pop();
    assert_eq!(team.quality(), 5);
    assert_eq!(team.evaluate(), before);
}
