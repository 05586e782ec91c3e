use std::collections::{HashMap, HashSet};

use draftorder::draft::compute_draft_order_with;
use draftorder::registry::{Participant, Tier};
use draftorder::session::Session;
use draftorder::share::SharePayload;
use rand::{rngs::StdRng, SeedableRng};

const TRIALS: u32 = 20_000;

fn roster() -> Vec<Participant> {
    vec![
        Participant::new("r1"),
        Participant::new("o1").with_odds_for_first(true),
        Participant::new("r2").with_weight(8),
        Participant::new("o2").with_odds_for_first(true).with_weight(30),
        Participant::new("r3"),
        Participant::new("l1").with_last(true),
        Participant::new("o3").with_odds_for_first(true),
        Participant::new("r4").with_weight(8),
    ]
}

fn tier_of(participants: &[Participant], name: &str) -> Tier {
    participants
        .iter()
        .find(|p| p.name == name)
        .map(Participant::tier)
        .unwrap()
}

#[test]
fn order_is_a_permutation() {
    let participants = roster();
    let mut rng = StdRng::seed_from_u64(1);
    let expected: HashSet<&str> = participants.iter().map(|p| p.name.as_str()).collect();
    for _ in 0..500 {
        let order = compute_draft_order_with(&participants, &mut rng).unwrap();
        assert_eq!(order.len(), participants.len());
        let seen: HashSet<&str> = order.iter().map(String::as_str).collect();
        assert_eq!(seen, expected);
    }
}

#[test]
fn tiers_stay_in_priority_order() {
    let participants = roster();
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..500 {
        let order = compute_draft_order_with(&participants, &mut rng).unwrap();
        // Odds tier is non-empty so the first pick comes from it.
        assert_eq!(tier_of(&participants, &order[0]), Tier::OddsForFirst);
        let tiers: Vec<Tier> = order[1..]
            .iter()
            .map(|name| tier_of(&participants, name))
            .collect();
        assert!(tiers.windows(2).all(|w| w[0] <= w[1]), "{order:?}");
        assert_eq!(order.last().map(String::as_str), Some("l1"));
    }
}

#[test]
fn heavier_members_come_first_within_a_tier() {
    let participants = roster();
    let mut rng = StdRng::seed_from_u64(3);
    let weight: HashMap<&str, u32> = participants
        .iter()
        .map(|p| (p.name.as_str(), p.weight))
        .collect();
    for _ in 0..500 {
        let order = compute_draft_order_with(&participants, &mut rng).unwrap();
        for pair in order[1..].windows(2) {
            let (a, b) = (pair[0].as_str(), pair[1].as_str());
            if tier_of(&participants, a) == tier_of(&participants, b) {
                assert!(weight[a] >= weight[b], "{order:?}");
            }
        }
    }
}

#[test]
fn first_pick_follows_odds_weights() {
    let participants = roster();
    let mut rng = StdRng::seed_from_u64(4);
    let mut counts: HashMap<String, u32> = HashMap::new();
    for _ in 0..TRIALS {
        let order = compute_draft_order_with(&participants, &mut rng).unwrap();
        *counts.entry(order[0].clone()).or_default() += 1;
    }
    // o1 = 10, o2 = 30, o3 = 10.
    for (name, expected) in [("o1", 0.2), ("o2", 0.6), ("o3", 0.2)] {
        let observed = counts.get(name).copied().unwrap_or_default() as f64 / TRIALS as f64;
        assert!(
            (observed - expected).abs() < 0.02,
            "{name}: expected {expected}, observed {observed}"
        );
    }
    assert_eq!(counts.len(), 3);
}

#[test]
fn regular_tier_used_without_odds() {
    let participants = vec![
        Participant::new("a"),
        Participant::new("b").with_weight(15),
        Participant::new("z").with_last(true),
    ];
    let mut rng = StdRng::seed_from_u64(5);
    let mut a_first = 0;
    for _ in 0..TRIALS {
        let order = compute_draft_order_with(&participants, &mut rng).unwrap();
        assert_ne!(order[0], "z");
        assert_eq!(order[2], "z");
        if order[0] == "a" {
            a_first += 1;
        }
    }
    let observed = a_first as f64 / TRIALS as f64;
    assert!((observed - 0.25).abs() < 0.02, "observed {observed}");
}

#[test]
fn two_equal_regulars_split_evenly() {
    let participants = vec![Participant::new("A"), Participant::new("B")];
    let mut rng = StdRng::seed_from_u64(6);
    let mut a_first = 0;
    for _ in 0..TRIALS {
        let order = compute_draft_order_with(&participants, &mut rng).unwrap();
        match order.as_slice() {
            [a, b] if a == "A" && b == "B" => a_first += 1,
            [a, b] if a == "B" && b == "A" => {}
            other => panic!("unexpected order {other:?}"),
        }
    }
    let observed = a_first as f64 / TRIALS as f64;
    assert!((observed - 0.5).abs() < 0.02, "observed {observed}");
}

#[test]
fn every_tie_group_permutation_shows_up() {
    // Four equal regulars behind an odds pick: the trailing three are one group.
    let participants = vec![
        Participant::new("first").with_odds_for_first(true),
        Participant::new("x"),
        Participant::new("y"),
        Participant::new("z"),
    ];
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen: HashMap<Vec<String>, u32> = HashMap::new();
    for _ in 0..6_000 {
        let order = compute_draft_order_with(&participants, &mut rng).unwrap();
        assert_eq!(order[0], "first");
        *seen.entry(order[1..].to_vec()).or_default() += 1;
    }
    assert_eq!(seen.len(), 6);
    for count in seen.values() {
        assert!((800..1_200).contains(count), "{seen:?}");
    }
}

#[test]
fn one_member_per_tier_is_fixed() {
    let participants = vec![
        Participant::new("A"),
        Participant::new("B").with_odds_for_first(true),
        Participant::new("C").with_last(true),
    ];
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..100 {
        assert_eq!(
            compute_draft_order_with(&participants, &mut rng).unwrap(),
            ["B", "A", "C"]
        );
    }
}

#[test]
fn equal_weights_never_mix_tiers() {
    // Same weight in every tier: the groups are still cut at tier borders.
    let participants = vec![
        Participant::new("r1").with_weight(8),
        Participant::new("o1").with_odds_for_first(true).with_weight(8),
        Participant::new("l1").with_last(true).with_weight(8),
        Participant::new("r2").with_weight(8),
        Participant::new("o2").with_odds_for_first(true).with_weight(8),
        Participant::new("l2").with_last(true).with_weight(8),
    ];
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let order = compute_draft_order_with(&participants, &mut rng).unwrap();
        let tiers: Vec<Tier> = order
            .iter()
            .map(|name| tier_of(&participants, name))
            .collect();
        assert_eq!(tiers[0], Tier::OddsForFirst, "{order:?}");
        assert!(tiers.windows(2).all(|w| w[0] <= w[1]), "{order:?}");
    }
}

#[test]
fn last_flag_beats_odds_flag() {
    let participants = vec![
        Participant::new("both")
            .with_odds_for_first(true)
            .with_last(true),
        Participant::new("odds").with_odds_for_first(true),
        Participant::new("reg"),
    ];
    assert_eq!(participants[0].tier(), Tier::Last);
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..1_000 {
        assert_eq!(
            compute_draft_order_with(&participants, &mut rng).unwrap(),
            ["odds", "reg", "both"]
        );
    }
}

#[test]
fn malformed_share_with_two_last_picks_still_orders() {
    let payload = SharePayload::from_json(
        r#"{"names":[
            {"name":"a","isLast":true},
            {"name":"b","isLast":true,"weight":3},
            "c"
        ]}"#,
    )
    .unwrap();
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..50 {
        let order = compute_draft_order_with(&payload.names, &mut rng).unwrap();
        assert_eq!(order, ["c", "b", "a"]);
    }
}

#[test]
fn session_flow_through_share_link() {
    let mut session = Session::new();
    for name in ["ann", "bo", "cy", "di"] {
        session.add(name).unwrap();
    }
    session.set_odds_for_first("cy", true).unwrap();
    session.set_last("ann", true).unwrap();
    let order = session
        .randomize_with(&mut StdRng::seed_from_u64(10))
        .unwrap()
        .unwrap()
        .to_vec();
    assert_eq!(order[0], "cy");
    assert_eq!(order[3], "ann");

    let link = session
        .share_link(&url::Url::parse("https://example.com/").unwrap())
        .unwrap();
    let opened = Session::open_share_link(link.as_str());
    assert!(opened.is_locked());
    assert_eq!(opened.draft_order(), order.as_slice());
}
