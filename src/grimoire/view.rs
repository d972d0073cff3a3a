//! # View Projection
//!
//! Pure functions deriving what should be shown from catalog state plus the
//! current view parameters ([`FilterSpec`], [`SortMode`], visibility). Nothing
//! here mutates the catalog or touches storage, so calling any of them twice
//! with the same inputs gives the same output.
//!
//! The browsable view is every card that is not selected, narrowed by the
//! filter, then sorted. The selected view is the selection resolved against
//! the catalog. Together they partition the catalog when no filter is set.
//!
//! ## Level filter input
//!
//! Level filters arrive as text. Input is trimmed; empty means no constraint,
//! an integer (or an integral decimal such as `2.0`) filters on that level, and
//! anything else becomes [`LevelFilter::Unmatchable`], which matches no card.
//! A typo therefore empties the list instead of silently showing everything;
//! [`Projection::level_filter_invalid`] lets the renderer say why.

use crate::error::GrimoireError;
use crate::model::Card;
use crate::selection::SelectionSet;
use feruca::Collator;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
    #[default]
    LevelAscending,
    LevelDescending,
    TitleAscending,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [
        SortMode::LevelAscending,
        SortMode::LevelDescending,
        SortMode::TitleAscending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::LevelAscending => "level-asc",
            SortMode::LevelDescending => "level-desc",
            SortMode::TitleAscending => "title",
        }
    }

    pub fn compare(&self, collator: &mut Collator, a: &Card, b: &Card) -> Ordering {
        match self {
            SortMode::LevelAscending => a.level.cmp(&b.level),
            SortMode::LevelDescending => b.level.cmp(&a.level),
            SortMode::TitleAscending => collate(collator, &a.title, &b.title),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = GrimoireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "level-asc" | "livello-asc" => Ok(SortMode::LevelAscending),
            "level-desc" | "livello-desc" => Ok(SortMode::LevelDescending),
            "title" | "nome" => Ok(SortMode::TitleAscending),
            other => Err(GrimoireError::Api(format!(
                "Unknown sort mode '{}' (expected level-asc, level-desc or title)",
                other
            ))),
        }
    }
}

/// Title ordering by the Unicode Collation Algorithm, so accented letters sort
/// with their base letter ("Écho" before "Fuoco"). Titles the collator ranks
/// equal fall back to a plain comparison so the order is total.
pub fn collate(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b).then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LevelFilter {
    #[default]
    Any,
    Exact(i64),
    /// Input that is not a whole number. Matches no card.
    Unmatchable(String),
}

impl LevelFilter {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return LevelFilter::Any;
        }
        if let Ok(level) = trimmed.parse::<i64>() {
            return LevelFilter::Exact(level);
        }
        match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                LevelFilter::Exact(f as i64)
            }
            _ => LevelFilter::Unmatchable(input.to_string()),
        }
    }

    pub fn matches(&self, level: i64) -> bool {
        match self {
            LevelFilter::Any => true,
            LevelFilter::Exact(wanted) => *wanted == level,
            LevelFilter::Unmatchable(_) => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Exact domain to keep; `None` keeps every domain.
    pub domain: Option<String>,
    pub level: LevelFilter,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the domain constraint. An empty string clears it.
    pub fn with_domain(mut self, domain: &str) -> Self {
        self.set_domain(domain);
        self
    }

    /// Sets the level constraint from raw text input.
    pub fn with_level(mut self, input: &str) -> Self {
        self.set_level(input);
        self
    }

    pub fn set_domain(&mut self, domain: &str) {
        self.domain = if domain.is_empty() {
            None
        } else {
            Some(domain.to_string())
        };
    }

    pub fn set_level(&mut self, input: &str) {
        self.level = LevelFilter::parse(input);
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_none() && self.level == LevelFilter::Any
    }

    pub fn matches(&self, card: &Card) -> bool {
        if let Some(domain) = &self.domain {
            if &card.domain != domain {
                return false;
            }
        }
        self.level.matches(card.level)
    }
}

/// The view parameters that are not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub filter: FilterSpec,
    pub sort: SortMode,
    /// Whether the "browse all cards" section is shown at all.
    pub visible: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter: FilterSpec::default(),
            sort: SortMode::default(),
            visible: true,
        }
    }
}

/// Unselected cards matching `filter`, ordered by `sort`. Empty when not `visible`.
pub fn project_browsable<'a>(
    cards: &'a [Card],
    selected: &SelectionSet,
    filter: &FilterSpec,
    sort: SortMode,
    visible: bool,
) -> Vec<&'a Card> {
    if !visible {
        return Vec::new();
    }

    let mut browsable: Vec<&Card> = cards
        .iter()
        .filter(|card| !selected.contains(&card.id))
        .filter(|card| filter.matches(card))
        .collect();

    // sort_by is stable: equal keys keep their catalog order.
    let mut collator = Collator::default();
    browsable.sort_by(|a, b| sort.compare(&mut collator, a, b));
    browsable
}

/// Selected cards in selection order, without ids missing from `cards`.
pub fn project_selected<'a>(cards: &'a [Card], selected: &SelectionSet) -> Vec<&'a Card> {
    selected.resolve(cards)
}

/// Distinct domains, in order of first appearance.
pub fn available_domains(cards: &[Card]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    cards
        .iter()
        .filter(|card| seen.insert(card.domain.as_str()))
        .map(|card| card.domain.clone())
        .collect()
}

/// Distinct levels, ascending.
pub fn available_levels(cards: &[Card]) -> Vec<i64> {
    cards
        .iter()
        .map(|card| card.level)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub browsable: Vec<Card>,
    pub selected: Vec<Card>,
    pub visible: bool,
    pub domains: Vec<String>,
    pub levels: Vec<i64>,
    pub level_filter_invalid: bool,
}

impl Projection {
    pub fn build(cards: &[Card], selected: &SelectionSet, state: &ViewState) -> Self {
        let browsable =
            project_browsable(cards, selected, &state.filter, state.sort, state.visible);
        Self {
            browsable: browsable.into_iter().cloned().collect(),
            selected: project_selected(cards, selected)
                .into_iter()
                .cloned()
                .collect(),
            visible: state.visible,
            domains: available_domains(cards),
            levels: available_levels(cards),
            level_filter_invalid: matches!(state.filter.level, LevelFilter::Unmatchable(_)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ids, sample_cards, two_cards};
    use std::collections::HashSet;

    fn selection(ids: &[&str]) -> SelectionSet {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn browse<'a>(
        cards: &'a [Card],
        selected: &SelectionSet,
        filter: &FilterSpec,
        sort: SortMode,
    ) -> Vec<&'a str> {
        ids(&project_browsable(cards, selected, filter, sort, true))
    }

    #[test]
    fn unfiltered_two_card_catalog_lists_both() {
        let cards = two_cards();
        let result = browse(
            &cards,
            &SelectionSet::new(),
            &FilterSpec::new().with_domain("").with_level(""),
            SortMode::LevelAscending,
        );
        assert_eq!(result, vec!["a", "b"]);
    }

    #[test]
    fn selected_cards_leave_browsable_view() {
        let cards = two_cards();
        let sel = selection(&["a"]);
        assert_eq!(
            browse(&cards, &sel, &FilterSpec::new(), SortMode::LevelAscending),
            vec!["b"]
        );
        assert_eq!(ids(&project_selected(&cards, &sel)), vec!["a"]);
    }

    #[test]
    fn domain_filter_is_exact() {
        let cards = two_cards();
        let filter = FilterSpec::new().with_domain("Arcano");
        assert_eq!(
            browse(&cards, &SelectionSet::new(), &filter, SortMode::LevelAscending),
            vec!["b"]
        );

        let filter = FilterSpec::new().with_domain("arcano");
        assert!(browse(&cards, &SelectionSet::new(), &filter, SortMode::LevelAscending).is_empty());
    }

    #[test]
    fn non_numeric_level_matches_nothing() {
        let cards = two_cards();
        let filter = FilterSpec::new().with_level("notanumber");
        assert!(browse(&cards, &SelectionSet::new(), &filter, SortMode::LevelAscending).is_empty());
    }

    #[test]
    fn level_filter_parsing() {
        assert_eq!(LevelFilter::parse(""), LevelFilter::Any);
        assert_eq!(LevelFilter::parse("   "), LevelFilter::Any);
        assert_eq!(LevelFilter::parse("2"), LevelFilter::Exact(2));
        assert_eq!(LevelFilter::parse(" 3 "), LevelFilter::Exact(3));
        assert_eq!(LevelFilter::parse("+4"), LevelFilter::Exact(4));
        assert_eq!(LevelFilter::parse("2.0"), LevelFilter::Exact(2));
        assert_eq!(
            LevelFilter::parse("2.5"),
            LevelFilter::Unmatchable("2.5".into())
        );
        assert_eq!(
            LevelFilter::parse("abc"),
            LevelFilter::Unmatchable("abc".into())
        );
        assert_eq!(
            LevelFilter::parse("inf"),
            LevelFilter::Unmatchable("inf".into())
        );
    }

    #[test]
    fn level_filter_keeps_equal_levels() {
        let cards = sample_cards();
        let filter = FilterSpec::new().with_level("2");
        assert_eq!(
            browse(&cards, &SelectionSet::new(), &filter, SortMode::LevelAscending),
            vec!["b", "c"]
        );
    }

    #[test]
    fn domain_and_level_combine() {
        let cards = sample_cards();
        let filter = FilterSpec::new().with_domain("Spada").with_level("2");
        assert_eq!(
            browse(&cards, &SelectionSet::new(), &filter, SortMode::LevelAscending),
            vec!["c"]
        );
    }

    #[test]
    fn level_sorts_are_stable() {
        let cards = sample_cards();
        let none = SelectionSet::new();
        let all = FilterSpec::new();
        // a,d are level 1; b,c are level 2; e is level 3.
        assert_eq!(
            browse(&cards, &none, &all, SortMode::LevelAscending),
            vec!["a", "d", "b", "c", "e"]
        );
        assert_eq!(
            browse(&cards, &none, &all, SortMode::LevelDescending),
            vec!["e", "b", "c", "a", "d"]
        );
    }

    #[test]
    fn title_sort_ignores_case() {
        let cards = sample_cards();
        assert_eq!(
            browse(&cards, &SelectionSet::new(), &FilterSpec::new(), SortMode::TitleAscending),
            vec!["a", "b", "c", "d", "e"]
        );
        let mut collator = Collator::default();
        assert_eq!(collate(&mut collator, "alpha", "Beta"), Ordering::Less);
        assert_eq!(collate(&mut collator, "Zeta", "alpha"), Ordering::Greater);
        assert_ne!(collate(&mut collator, "abc", "ABC"), Ordering::Equal);
    }

    #[test]
    fn title_sort_places_accented_letters_with_their_base() {
        let cards = vec![
            Card::new("z", "Spada", 1, "Zelo"),
            Card::new("e", "Spada", 1, "Écho"),
            Card::new("f", "Spada", 1, "Fuoco"),
            Card::new("o", "Spada", 1, "Eco"),
        ];
        assert_eq!(
            browse(&cards, &SelectionSet::new(), &FilterSpec::new(), SortMode::TitleAscending),
            vec!["e", "o", "f", "z"]
        );

        let mut collator = Collator::default();
        assert_eq!(collate(&mut collator, "Àncora", "Bastione"), Ordering::Less);
        assert_eq!(collate(&mut collator, "perché", "perche"), Ordering::Greater);
    }

    #[test]
    fn hidden_view_is_empty() {
        let cards = two_cards();
        let result = project_browsable(
            &cards,
            &SelectionSet::new(),
            &FilterSpec::new(),
            SortMode::LevelAscending,
            false,
        );
        assert!(result.is_empty());
    }

    #[test]
    fn projection_is_idempotent() {
        let cards = sample_cards();
        let sel = selection(&["c"]);
        let filter = FilterSpec::new().with_domain("Arcano");
        for sort in SortMode::ALL {
            let first = project_browsable(&cards, &sel, &filter, sort, true);
            let second = project_browsable(&cards, &sel, &filter, sort, true);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn browsable_and_selected_partition_the_catalog() {
        let cards = sample_cards();
        for chosen in [vec![], vec!["a"], vec!["e", "b"], vec!["a", "b", "c", "d", "e"]] {
            let sel = selection(&chosen);
            for sort in SortMode::ALL {
                let browsable: HashSet<_> =
                    browse(&cards, &sel, &FilterSpec::new(), sort).into_iter().collect();
                let selected: HashSet<&str> = chosen.iter().copied().collect();

                assert!(browsable.is_disjoint(&selected));
                let union: HashSet<_> = browsable.union(&selected).copied().collect();
                let all: HashSet<_> = cards.iter().map(|c| c.id.as_str()).collect();
                assert_eq!(union, all);
            }
        }
    }

    #[test]
    fn available_choices() {
        let cards = sample_cards();
        assert_eq!(available_domains(&cards), vec!["Spada", "Arcano", "Codex"]);
        assert_eq!(available_levels(&cards), vec![1, 2, 3]);
        assert!(available_domains(&[]).is_empty());
        assert!(available_levels(&[]).is_empty());
    }

    #[test]
    fn sort_mode_names() {
        assert_eq!("level-asc".parse::<SortMode>().unwrap(), SortMode::LevelAscending);
        assert_eq!("livello-desc".parse::<SortMode>().unwrap(), SortMode::LevelDescending);
        assert_eq!("nome".parse::<SortMode>().unwrap(), SortMode::TitleAscending);
        assert_eq!(" Title ".parse::<SortMode>().unwrap(), SortMode::TitleAscending);
        assert!("random".parse::<SortMode>().is_err());
        for mode in SortMode::ALL {
            assert_eq!(mode.as_str().parse::<SortMode>().unwrap(), mode);
        }
    }

    #[test]
    fn projection_reports_invalid_level_filter() {
        let cards = two_cards();
        let state = ViewState {
            filter: FilterSpec::new().with_level("x"),
            ..ViewState::default()
        };
        let projection = Projection::build(&cards, &SelectionSet::new(), &state);
        assert!(projection.level_filter_invalid);
        assert!(projection.browsable.is_empty());
        assert_eq!(projection.levels, vec![1, 2]);
    }
}
