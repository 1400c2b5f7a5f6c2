//! Search tests against brute force and across strategies.

use std::sync::Arc;

use teamforge_core::{Catalog, HeroId, ScoringRules, TeamForgeError, TeamScore, TraitId};
use teamforge_scoring::{MatchBonuses, TeamDirector, TeamEvaluator};
use teamforge_test::{hero, metro_catalog, metro_rules, random_catalog, random_rules, random_team};

use super::*;

fn random_bonuses(seed: u64, catalog: &Catalog) -> MatchBonuses {
    let mut bonuses = MatchBonuses::none();
    if seed % 2 == 0 {
        bonuses = bonuses.with_special(random_team(seed ^ 0xbeef, catalog, 2));
    }
    if seed % 3 == 0 {
        let t = TraitId::new(seed as usize % catalog.trait_count());
        bonuses = bonuses.with_enhancement(t, 1);
    }
    bonuses
}

/// Every team containing `core`, scored from scratch, best first.
fn brute_force(
    catalog: &Catalog,
    rules: &ScoringRules,
    bonuses: &MatchBonuses,
    team_size: usize,
    core: &[HeroId],
    gate_mode: GateMode,
) -> Vec<(TeamScore, Vec<HeroId>)> {
    let evaluator = TeamEvaluator::new(catalog, rules, bonuses);
    let free: Vec<HeroId> = catalog
        .heroes()
        .iter()
        .map(|h| h.id())
        .filter(|h| !core.contains(h))
        .collect();
    let mut all: Vec<(TeamScore, Vec<HeroId>)> =
        CombinationIterator::new(free.len(), team_size - core.len())
            .filter_map(|picks| {
                let mut team = core.to_vec();
                team.extend(picks.iter().map(|&i| free[i]));
                let eval = evaluator.evaluate(&team);
                if gate_mode == GateMode::Enforce && !eval.gate_active {
                    return None;
                }
                team.sort_unstable();
                Some((eval.score, team))
            })
            .collect();
    all.sort_by(|a, b| b.0.cmp(&a.0));
    all
}

fn scores(teams: &[RankedTeam]) -> Vec<TeamScore> {
    teams.iter().map(|t| t.score).collect()
}

mod equivalence {
    use super::*;

    #[test]
    fn test_pruned_matches_exhaustive_and_brute_force() {
        for seed in 0..40u64 {
            let catalog = random_catalog(seed, 10, 5);
            let rules = random_rules();
            let bonuses = random_bonuses(seed, &catalog);
            let core = if seed % 4 == 1 {
                random_team(seed, &catalog, 1)
            } else {
                Vec::new()
            };
            let request = SearchRequest::new(3)
                .with_core(core.clone())
                .with_bonuses(bonuses.clone())
                .with_top_k(5);

            let pruned = TeamOptimizer::new(&catalog, &rules)
                .solve(&request)
                .unwrap();
            let exhaustive = TeamOptimizer::new(&catalog, &rules)
                .with_strategy(SearchStrategy::Exhaustive)
                .solve(&request)
                .unwrap();

            // Both walk the pool in the same order, so even tie order agrees.
            assert_eq!(pruned.teams, exhaustive.teams, "seed {seed}");

            let expected: Vec<TeamScore> =
                brute_force(&catalog, &rules, &bonuses, 3, &core, GateMode::Enforce)
                    .into_iter()
                    .take(5)
                    .map(|(s, _)| s)
                    .collect();
            assert_eq!(scores(&pruned.teams), expected, "seed {seed}");

            let evaluator = TeamEvaluator::new(&catalog, &rules, &bonuses);
            for ranked in &pruned.teams {
                let eval = evaluator.evaluate(&ranked.team);
                assert!(eval.gate_active, "seed {seed}");
                assert_eq!(eval.score, ranked.score);
                assert_eq!(eval.breakdown, ranked.breakdown);
                assert!(core.iter().all(|h| ranked.team.contains(h)));
            }
        }
    }

    #[test]
    fn test_penalty_mode_matches_brute_force() {
        for seed in 0..20u64 {
            let catalog = random_catalog(seed, 9, 4);
            let rules = random_rules();
            let bonuses = random_bonuses(seed, &catalog);
            let request = SearchRequest::new(4)
                .with_bonuses(bonuses.clone())
                .with_top_k(8);

            let pruned = TeamOptimizer::new(&catalog, &rules)
                .with_gate_mode(GateMode::Penalty)
                .solve(&request)
                .unwrap();
            let exhaustive = TeamOptimizer::new(&catalog, &rules)
                .with_gate_mode(GateMode::Penalty)
                .with_strategy(SearchStrategy::Exhaustive)
                .solve(&request)
                .unwrap();
            assert_eq!(pruned.teams, exhaustive.teams, "seed {seed}");

            let expected: Vec<TeamScore> =
                brute_force(&catalog, &rules, &bonuses, 4, &[], GateMode::Penalty)
                    .into_iter()
                    .take(8)
                    .map(|(s, _)| s)
                    .collect();
            assert_eq!(scores(&pruned.teams), expected, "seed {seed}");
        }
    }

    #[test]
    fn test_builtin_roster_small_team() {
        let catalog = teamforge_core::builtin::catalog().unwrap();
        let rules = teamforge_core::builtin::rules(&catalog).unwrap();
        let request = SearchRequest::new(3).with_top_k(10);

        let pruned = TeamOptimizer::new(&catalog, &rules)
            .solve(&request)
            .unwrap();
        let exhaustive = TeamOptimizer::new(&catalog, &rules)
            .with_strategy(SearchStrategy::Exhaustive)
            .solve(&request)
            .unwrap();
        assert_eq!(pruned.teams, exhaustive.teams);
        assert_eq!(pruned.teams.len(), 10);
        // Pruning skips most of the 23,426 combinations.
        assert!(pruned.stats.leaves_evaluated < exhaustive.stats.nodes_visited);
        assert_eq!(
            pruned.stats.leaves_evaluated,
            exhaustive.stats.leaves_evaluated
        );
    }
}

mod pruning {
    use super::*;
    use crate::prepass::SearchPool;
    use teamforge_scoring::IncrementalTeam;

    #[test]
    fn test_every_leaf_meets_gate_and_none_is_missed() {
        for seed in 0..30u64 {
            let catalog = random_catalog(seed, 11, 5);
            let rules = random_rules();
            let bonuses = random_bonuses(seed, &catalog);
            let evaluator = TeamEvaluator::new(&catalog, &rules, &bonuses);
            let pool = SearchPool::build(&evaluator, 4, &[]).unwrap();
            let search = PrunedEnumerator::new(evaluator, &pool, GateMode::Enforce);

            let mut stats = SearchStats::default();
            let mut leaves: Vec<Vec<HeroId>> = Vec::new();
            search
                .for_each_team(&mut stats, &mut |team: &IncrementalTeam<'_>| {
                    assert!(evaluator.gate_active(team.tally()), "seed {seed}");
                    let mut members = team.members().to_vec();
                    members.sort_unstable();
                    leaves.push(members);
                })
                .unwrap();

            let mut expected: Vec<Vec<HeroId>> =
                brute_force(&catalog, &rules, &bonuses, 4, &[], GateMode::Enforce)
                    .into_iter()
                    .map(|(_, team)| team)
                    .collect();
            expected.sort();
            leaves.sort();
            assert_eq!(leaves, expected, "seed {seed}");
            assert_eq!(stats.leaves_evaluated, leaves.len() as u64);
        }
    }

    #[test]
    fn test_gate_pruning_cuts_metro_tree() {
        let catalog = metro_catalog();
        let rules = metro_rules(&catalog);
        let bonuses = MatchBonuses::none();
        let outcome = TeamOptimizer::new(&catalog, &rules)
            .solve(&SearchRequest::new(3).with_bonuses(bonuses))
            .unwrap();

        // Teams of 3 with at least two of the three Metro Zero holders:
        // one with all three, 3 * 7 with exactly two.
        assert_eq!(outcome.stats.leaves_evaluated, 22);
        assert!(outcome.stats.gate_pruned > 0);
    }
}

mod boundaries {
    use super::*;

    #[test]
    fn test_core_fills_team() {
        let catalog = metro_catalog();
        let rules = metro_rules(&catalog);
        let core = [hero(&catalog, "Roger"), hero(&catalog, "X.Borg")];

        for strategy in [SearchStrategy::Pruned, SearchStrategy::Exhaustive] {
            let outcome = TeamOptimizer::new(&catalog, &rules)
                .with_strategy(strategy)
                .solve(&SearchRequest::new(2).with_core(core))
                .unwrap();
            assert_eq!(outcome.teams.len(), 1);
            assert_eq!(outcome.teams[0].team, vec![core[1], core[0]]);
            // Metro Zero 2 plus 7 quality plus the gate bonus.
            assert_eq!(outcome.teams[0].score, TeamScore::of(20 + 7 + 500));
        }
    }

    #[test]
    fn test_core_fills_team_without_gate() {
        let catalog = metro_catalog();
        let rules = metro_rules(&catalog);
        let core = [hero(&catalog, "Layla"), hero(&catalog, "Irithel")];
        let request = SearchRequest::new(2).with_core(core);

        let enforced = TeamOptimizer::new(&catalog, &rules).solve(&request).unwrap();
        assert!(enforced.is_empty());
        assert!(!enforced.feasible);

        let penalised = TeamOptimizer::new(&catalog, &rules)
            .with_gate_mode(GateMode::Penalty)
            .solve(&request)
            .unwrap();
        assert_eq!(penalised.teams.len(), 1);
        assert_eq!(penalised.teams[0].score, TeamScore::of(20 + 6 - 500));
    }

    #[test]
    fn test_core_exceeds_team_size() {
        let catalog = metro_catalog();
        let rules = metro_rules(&catalog);
        let core: Vec<HeroId> = ["Roger", "X.Borg", "Ixia"]
            .iter()
            .map(|n| hero(&catalog, n))
            .collect();
        let err = TeamOptimizer::new(&catalog, &rules)
            .solve(&SearchRequest::new(2).with_core(core))
            .unwrap_err();
        assert_eq!(
            err,
            TeamForgeError::CoreExceedsTeamSize {
                core: 3,
                team_size: 2
            }
        );
    }

    #[test]
    fn test_repeated_core_counts_once() {
        let catalog = metro_catalog();
        let rules = metro_rules(&catalog);
        let roger = hero(&catalog, "Roger");
        let outcome = TeamOptimizer::new(&catalog, &rules)
            .solve(&SearchRequest::new(2).with_core([roger, roger, roger]))
            .unwrap();
        assert!(!outcome.is_empty());
        assert!(outcome.teams.iter().all(|t| t.team.contains(&roger)));
        assert!(outcome.teams.iter().all(|t| t.team.len() == 2));
    }

    #[test]
    fn test_infeasible_gate_is_empty_not_error() {
        let catalog = metro_catalog();
        let rules = metro_rules(&catalog);
        let outcome = TeamOptimizer::new(&catalog, &rules)
            .solve(&SearchRequest::new(1))
            .unwrap();
        assert!(outcome.is_empty());
        assert!(!outcome.feasible);
    }

    #[test]
    fn test_team_size_exceeds_roster() {
        let catalog = metro_catalog();
        let rules = metro_rules(&catalog);
        let outcome = TeamOptimizer::new(&catalog, &rules)
            .with_gate_mode(GateMode::Penalty)
            .solve(&SearchRequest::new(11))
            .unwrap();
        assert!(outcome.is_empty());
        assert!(!outcome.feasible);
    }

    #[test]
    fn test_fewer_teams_than_k() {
        let catalog = metro_catalog();
        let rules = metro_rules(&catalog);
        let outcome = TeamOptimizer::new(&catalog, &rules)
            .solve(&SearchRequest::new(2).with_top_k(50))
            .unwrap();
        // Only the three Metro Zero pairs meet the gate.
        assert_eq!(outcome.teams.len(), 3);
    }

    #[test]
    fn test_invalid_requests() {
        let catalog = metro_catalog();
        let rules = metro_rules(&catalog);
        let optimizer = TeamOptimizer::new(&catalog, &rules);

        let cases = [
            SearchRequest::new(0),
            SearchRequest::new(3).with_top_k(0),
            SearchRequest::new(3).with_core([HeroId::new(10)]),
            SearchRequest::new(3)
                .with_bonuses(MatchBonuses::none().with_special([HeroId::new(42)])),
            SearchRequest::new(3)
                .with_bonuses(MatchBonuses::none().with_enhancement(TraitId::new(9), 1)),
        ];
        for request in &cases {
            assert!(
                matches!(
                    optimizer.solve(request),
                    Err(TeamForgeError::InvalidRequest(_))
                ),
                "{request:?}"
            );
        }
    }

    #[test]
    fn test_oversized_enhancement_rejected() {
        let catalog = metro_catalog();
        let rules = metro_rules(&catalog);
        let gate = rules.gate_trait;
        let optimizer = TeamOptimizer::new(&catalog, &rules);

        for amount in [SearchRequest::MAX_ENHANCEMENT + 1, u32::MAX] {
            let request = SearchRequest::new(3)
                .with_bonuses(MatchBonuses::none().with_enhancement(gate, amount));
            assert!(
                matches!(
                    optimizer.solve(&request),
                    Err(TeamForgeError::InvalidRequest(_))
                ),
                "amount {amount}"
            );
        }

        // Accumulation saturates instead of wrapping back into range.
        let bonuses = MatchBonuses::none()
            .with_enhancement(gate, u32::MAX)
            .with_enhancement(gate, 2);
        assert_eq!(bonuses.enhancement(gate), u32::MAX);
        assert!(optimizer
            .solve(&SearchRequest::new(3).with_bonuses(bonuses))
            .is_err());
    }

    #[test]
    fn test_largest_enhancement_searches() {
        let catalog = metro_catalog();
        let rules = metro_rules(&catalog);
        let gate = rules.gate_trait;
        let bonuses = MatchBonuses::none().with_enhancement(gate, SearchRequest::MAX_ENHANCEMENT);

        let outcome = TeamOptimizer::new(&catalog, &rules)
            .solve(&SearchRequest::new(3).with_bonuses(bonuses).with_top_k(3))
            .unwrap();
        assert_eq!(outcome.teams.len(), 3);
        for team in &outcome.teams {
            assert_eq!(team.breakdown.get(&gate), Some(&2));
        }
    }

    #[test]
    fn test_rules_outside_catalog() {
        let catalog = metro_catalog();
        let rules = ScoringRules::new(TraitId::new(30));
        assert!(matches!(
            TeamOptimizer::new(&catalog, &rules).solve(&SearchRequest::new(3)),
            Err(TeamForgeError::InvalidCatalog(_))
        ));
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn test_metro_zero_gate_dominates() {
        let catalog = metro_catalog();
        let rules = metro_rules(&catalog);
        let bonuses = MatchBonuses::none();
        let evaluator = TeamEvaluator::new(&catalog, &rules, &bonuses);
        let gate = rules.gate_trait;

        let outcome = TeamOptimizer::new(&catalog, &rules)
            .solve(&SearchRequest::new(5).with_top_k(5))
            .unwrap();
        assert_eq!(outcome.teams.len(), 5);

        for ranked in &outcome.teams {
            let holders: Vec<HeroId> = ranked
                .team
                .iter()
                .copied()
                .filter(|&h| catalog.hero(h).has_trait(gate))
                .collect();
            assert!(holders.len() >= 2);

            for &h in &holders {
                let without: Vec<HeroId> =
                    ranked.team.iter().copied().filter(|&m| m != h).collect();
                let eval = evaluator.evaluate(&without);
                if !eval.gate_active {
                    assert!(ranked.score.value() - eval.score.value() >= 1000);
                }
            }
        }
    }

    #[test]
    fn test_enhancement_lifts_tier() {
        let catalog = metro_catalog();
        let rules = metro_rules(&catalog);
        let marksman = teamforge_test::trait_id(&catalog, "Marksman");
        let core: Vec<HeroId> = ["X.Borg", "Roger", "Irithel", "Hanabi"]
            .iter()
            .map(|n| hero(&catalog, n))
            .collect();
        let request = SearchRequest::new(4).with_core(core.clone()).with_top_k(1);

        let plain = TeamOptimizer::new(&catalog, &rules).solve(&request).unwrap();
        let enhanced = TeamOptimizer::new(&catalog, &rules)
            .solve(
                &request
                    .clone()
                    .with_bonuses(MatchBonuses::none().with_enhancement(marksman, 1)),
            )
            .unwrap();

        // Marksman 3 reaches tier 2; with the crystal, 4 reaches tier 4.
        assert_eq!(plain.teams[0].breakdown.get(&marksman), Some(&2));
        assert_eq!(enhanced.teams[0].breakdown.get(&marksman), Some(&4));
        assert_eq!(
            enhanced.teams[0].score.value() - plain.teams[0].score.value(),
            20
        );
    }

    #[test]
    fn test_special_ability_can_meet_gate() {
        let catalog = metro_catalog();
        let gate = teamforge_test::trait_id(&catalog, "Metro Zero");
        let rules = metro_rules(&catalog).with_special_trait(gate);
        let bonuses = MatchBonuses::none().with_special([hero(&catalog, "Layla")]);

        // Layla's special credit plus one Metro Zero holder meets the gate.
        let outcome = TeamOptimizer::new(&catalog, &rules)
            .solve(&SearchRequest::new(2).with_bonuses(bonuses).with_top_k(50))
            .unwrap();
        let layla = hero(&catalog, "Layla");
        assert_eq!(outcome.teams.len(), 6);
        assert_eq!(
            outcome
                .teams
                .iter()
                .filter(|t| t.team.contains(&layla))
                .count(),
            3
        );
    }
}

mod parallel {
    use super::*;

    #[test]
    fn test_parallel_equals_serial() {
        for seed in 0..12u64 {
            let catalog = random_catalog(seed, 14, 6);
            let rules = random_rules();
            let bonuses = random_bonuses(seed, &catalog);
            let request = SearchRequest::new(4).with_bonuses(bonuses).with_top_k(7);

            for gate_mode in [GateMode::Enforce, GateMode::Penalty] {
                let serial = TeamOptimizer::new(&catalog, &rules)
                    .with_gate_mode(gate_mode)
                    .solve(&request)
                    .unwrap();
                let parallel = TeamOptimizer::new(&catalog, &rules)
                    .with_gate_mode(gate_mode)
                    .with_thread_count(ThreadCount::Count(4))
                    .solve(&request)
                    .unwrap();
                assert_eq!(serial.teams, parallel.teams, "seed {seed}");
                assert_eq!(serial.stats, parallel.stats, "seed {seed}");
            }
        }
    }
}

mod cancellation {
    use super::*;

    #[test]
    fn test_external_flag_cancels() {
        let catalog = metro_catalog();
        let rules = metro_rules(&catalog);
        let external = ExternalTermination::new();
        external.terminate();

        for strategy in [SearchStrategy::Pruned, SearchStrategy::Exhaustive] {
            let result = TeamOptimizer::new(&catalog, &rules)
                .with_strategy(strategy)
                .with_termination(Arc::new(external.clone()))
                .solve(&SearchRequest::new(4));
            assert_eq!(result.unwrap_err(), TeamForgeError::Cancelled);
        }
    }

    #[test]
    fn test_elapsed_time_limit_cancels_parallel() {
        let catalog = metro_catalog();
        let rules = metro_rules(&catalog);
        let result = TeamOptimizer::new(&catalog, &rules)
            .with_thread_count(ThreadCount::Count(2))
            .with_termination(Arc::new(TimeTermination::millis(0)))
            .solve(&SearchRequest::new(4));
        assert_eq!(result.unwrap_err(), TeamForgeError::Cancelled);
    }

    #[test]
    fn test_unfired_termination_completes() {
        let catalog = metro_catalog();
        let rules = metro_rules(&catalog);
        let termination =
            OrTermination((TimeTermination::seconds(3600), ExternalTermination::new()));
        let outcome = TeamOptimizer::new(&catalog, &rules)
            .with_termination(Arc::new(termination))
            .solve(&SearchRequest::new(4))
            .unwrap();
        assert!(!outcome.is_empty());
    }
}
