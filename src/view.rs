use draftorder::registry::{Participant, Tier};
use draftorder::reveal::RevealEvent;
use url::Url;

/// Print the participant list with their tier and weight.
pub fn print_participants(participants: &[Participant]) {
    println!("Participants:");
    for p in participants {
        let tag = match p.tier() {
            Tier::OddsForFirst => " ⭐ odds for first",
            Tier::Last => " 💩 last pick",
            Tier::Regular => "",
        };
        println!("  {} (weight {}){}", p.name, p.weight, tag);
    }
    println!();
}

/// Print a finished order in a box.
pub fn print_order(order: &[String]) {
    const TITLE: &str = "Draft Order";
    let width = order
        .iter()
        .enumerate()
        .map(|(i, name)| line(i, name).chars().count())
        .fold(TITLE.len(), usize::max);
    println!("┌{}┐", "─".repeat(width + 2));
    println!("│ {TITLE:<width$} │");
    println!("├{}┤", "─".repeat(width + 2));
    for (i, name) in order.iter().enumerate() {
        println!("│ {:<width$} │", line(i, name));
    }
    println!("└{}┘", "─".repeat(width + 2));
}

fn line(index: usize, name: &str) -> String {
    format!("{:>2}. {}", index + 1, name)
}

pub fn print_share_link(link: &Url) {
    println!("\n🔗 Share draft order with friends:\n{link}");
}

/// Renders reveal events as they arrive.
#[derive(Debug, Default)]
pub struct RevealView {
    revealed: Vec<String>,
}

impl RevealView {
    pub fn show(&mut self, event: RevealEvent) {
        match event {
            RevealEvent::Countdown(n) => println!("{n}..."),
            RevealEvent::Reveal { index, name } => {
                println!("{}", line(index, &name));
                self.revealed.push(name);
            }
            RevealEvent::FastForwardAvailable => {
                println!("   (run `open --fast-forward` next time to skip ahead)");
            }
            RevealEvent::Finished => {
                println!();
                print_order(&self.revealed);
            }
        }
    }
}
