//! # Rendering
//!
//! Turns projections into terminal text. Layout (widths, truncation) is
//! computed here with Unicode-aware widths; colors come from `colored`, which
//! drops them when stdout is not a terminal or `NO_COLOR` is set.

use colored::{ColoredString, Colorize};
use grimoire::api::{CmdMessage, MessageLevel, Projection};
use grimoire::config::{ConfigKey, GrimoireConfig};
use grimoire::model::Card;
use grimoire::palette::domain_rgb;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const INDENT: &str = "    ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Browse section (or a note that it is hidden), then the selection.
pub(super) fn print_projection(projection: &Projection) {
    if projection.visible {
        print_heading("All cards", projection.browsable.len());
        print_cards(&projection.browsable, "No cards found.");
    } else {
        println!("{}", "All cards hidden.".dimmed());
    }
    println!();
    print_selected(projection);
}

pub(super) fn print_selected(projection: &Projection) {
    print_heading("Selected cards", projection.selected.len());
    print_cards(&projection.selected, "No cards selected.");
}

pub(super) fn print_filters(projection: &Projection) {
    println!("{}", "Domains".bold());
    if projection.domains.is_empty() {
        println!("{}{}", INDENT, "(none)".dimmed());
    }
    for domain in &projection.domains {
        println!("{}{} {}", INDENT, domain_badge(domain), domain);
    }

    let levels: Vec<String> = projection.levels.iter().map(|l| l.to_string()).collect();
    println!("{}", "Levels".bold());
    if levels.is_empty() {
        println!("{}{}", INDENT, "(none)".dimmed());
    } else {
        println!("{}{}", INDENT, levels.join(", "));
    }
}

pub(super) fn print_config(config: &GrimoireConfig) {
    for key in ConfigKey::ALL {
        println!("{} = {}", key, config.get(key));
    }
}

fn print_heading(title: &str, count: usize) {
    println!("{} {}", title.bold(), format!("({})", count).dimmed());
}

fn print_cards(cards: &[Card], empty_message: &str) {
    if cards.is_empty() {
        println!("{}{}", INDENT, empty_message.dimmed());
        return;
    }

    let id_width = cards.iter().map(|c| c.id.width()).max().unwrap_or(0);
    for card in cards {
        print_card(card, id_width);
    }
}

fn print_card(card: &Card, id_width: usize) {
    let id = format!("{:<width$}", card.id, width = id_width);
    let level = format!("Lv {}", card.level);
    let fixed = INDENT.width() + id.width() + 2 + card.domain.width() + 2 + level.width() + 2;
    let title = truncate_to_width(&card.title, LINE_WIDTH.saturating_sub(fixed));

    println!(
        "{}{}  {}  {}  {}",
        INDENT,
        id.yellow(),
        domain_badge(&card.domain),
        level.dimmed(),
        title.bold()
    );

    let detail_indent = format!("{}{}  ", INDENT, " ".repeat(id_width));
    let mut details = Vec::new();
    if !card.category.is_empty() {
        details.push(card.category.clone());
    }
    details.push(format!("cost {}", card.cost));
    println!("{}{}", detail_indent, details.join(" · ").dimmed());

    if !card.description.is_empty() {
        let available = LINE_WIDTH.saturating_sub(detail_indent.width());
        let flat: String = card
            .description
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        println!("{}{}", detail_indent, truncate_to_width(&flat, available));
    }
}

fn domain_badge(domain: &str) -> ColoredString {
    let (r, g, b) = domain_rgb(domain);
    domain.truecolor(r, g, b).bold()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
