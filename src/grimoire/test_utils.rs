use crate::model::Card;

/// The two-card catalog used throughout the scenario tests.
pub fn two_cards() -> Vec<Card> {
    vec![
        Card::new("a", "Spada", 1, "Alpha"),
        Card::new("b", "Arcano", 2, "Beta"),
    ]
}

/// A slightly larger catalog with repeated levels and mixed-case titles.
pub fn sample_cards() -> Vec<Card> {
    vec![
        Card::new("a", "Spada", 1, "Alpha")
            .with_category("Abilità")
            .with_cost(1),
        Card::new("b", "Arcano", 2, "Beta")
            .with_category("Incantesimo")
            .with_cost("1 Speranza"),
        Card::new("c", "Spada", 2, "colpo"),
        Card::new("d", "Arcano", 1, "Dardo"),
        Card::new("e", "Codex", 3, "Eco"),
    ]
}

pub fn ids<'a>(cards: &[&'a Card]) -> Vec<&'a str> {
    cards.iter().map(|card| card.id.as_str()).collect()
}
