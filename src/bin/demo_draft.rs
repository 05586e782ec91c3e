use std::collections::HashMap;

use draftorder::draft::compute_draft_order;
use draftorder::registry::Registry;

const ROUNDS: u32 = 10_000;

fn main() {
    println!("========================================");
    println!("   DEMO DRAFT: ODDS + REGULAR + LAST");
    println!("========================================\n");

    // 1) Build the roster
    let mut registry = Registry::new();
    for name in ["Ana", "Beto", "Caro", "Dani", "Eli"] {
        registry.add(name).expect("demo names are unique");
    }
    registry.set_odds_for_first("Ana", true).unwrap();
    registry.set_odds_for_first("Beto", true).unwrap();
    registry.set_weight("Beto", 30).unwrap();
    registry.set_last("Eli", true).unwrap();

    println!("Participants:");
    for p in registry.participants() {
        println!(
            "  {:<5} tier={:?} weight={} custom={}",
            p.name,
            p.tier(),
            p.weight,
            p.has_custom_weight
        );
    }

    println!("\n----------------------------------------");
    println!("PHASE 1: first pick with odds for first");
    println!("----------------------------------------");

    let counts = first_pick_counts(&registry);
    print_counts(&counts);
    println!("\nExpected: Beto ~75%, Ana ~25%, nobody else ever first.");

    println!("\n----------------------------------------");
    println!("PHASE 2: no odds, regular weights decide");
    println!("----------------------------------------");

    registry.set_odds_for_first("Ana", false).unwrap();
    registry.set_odds_for_first("Beto", false).unwrap();
    registry.set_weight("Beto", 5).unwrap();
    registry.adjust_weight("Caro", 4).unwrap();

    let counts = first_pick_counts(&registry);
    print_counts(&counts);
    println!("\nExpected: Caro 9/24, the other three regulars 5/24 each, Eli never first.");

    println!("\n----------------------------------------");
    println!("PHASE 3: last pick stays last");
    println!("----------------------------------------");

    for round in 1..=5 {
        let order = compute_draft_order(registry.participants()).unwrap();
        println!("  round {round}: {}", order.join(" -> "));
    }

    println!("\nDemo finished.");
}

fn first_pick_counts(registry: &Registry) -> HashMap<String, u32> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for _ in 0..ROUNDS {
        if let Some(order) = compute_draft_order(registry.participants()) {
            *counts.entry(order[0].clone()).or_insert(0) += 1;
        }
    }
    counts
}

fn print_counts(counts: &HashMap<String, u32>) {
    let mut counts: Vec<_> = counts.iter().collect();
    counts.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    println!("First pick over {ROUNDS} rounds:");
    for (name, count) in counts {
        println!(
            "  {name:<5} {count:>5} ({:.1}%)",
            *count as f64 * 100.0 / ROUNDS as f64
        );
    }
}
