//! Transcript Parser
//!
//! Classifies a transcript by scanning for trigger substrings in a fixed
//! priority order, then extracts the parameters for that action.
//!
//! Matching is substring based: "show" anywhere in the transcript selects a
//! search, and a transcript holding both "remove" and "add" is an add.

use regex::Regex;
use std::sync::OnceLock;

use crate::command::{ParsedCommand, DEFAULT_ITEM, DEFAULT_QUANTITY, DEFAULT_UNIT};

const ADD_TRIGGERS: &[&str] = &["add", "put", "get"];
const REMOVE_TRIGGERS: &[&str] = &["remove", "delete", "take off"];
const SEARCH_TRIGGERS: &[&str] = &["find", "search", "show"];
const CHECK_TRIGGERS: &[&str] = &["check", "mark"];
const UNCHECK_TRIGGERS: &[&str] = &["uncheck", "unmark"];
const CLEAR_TRIGGERS: &[&str] = &["clear", "remove all", "delete all"];

/// Spoken quantities accepted in place of a digit string
pub const NUMBER_WORDS: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("a", 1),
    ("an", 1),
];

/// Unit vocabulary, in scan order. The first entry with a whole-word match wins.
/// Word boundaries are ASCII-only, so "kgé" still contains the unit "kg".
pub const UNITS: &[&str] = &[
    "packet", "packets", "kg", "kilogram", "kilograms", "liter", "liters",
    "bottle", "bottles", "can", "cans", "box", "boxes", "bag", "bags",
    "pound", "pounds", "lb", "lbs", "oz", "ounce", "ounces", "gram", "grams",
];

/// Compiled patterns (initialized once)
struct Patterns {
    add_prefix: Regex,
    remove_prefix: Regex,
    search_prefix: Regex,
    check_prefix: Regex,
    uncheck_prefix: Regex,
    of_connective: Regex,
    units: Vec<(&'static str, Regex)>,
}

impl Patterns {
    fn compile() -> Self {
        Self {
            add_prefix: fixed(r"(?i)^(?:add|put|get)\s+"),
            remove_prefix: fixed(r"(?i)^(?:remove|delete|take off)\s+"),
            search_prefix: fixed(r"(?i)^(?:find|search|show)\s+"),
            check_prefix: fixed(r"(?i)^(?:check|mark)\s+(?:off\s+)?"),
            uncheck_prefix: fixed(r"(?i)^(?:uncheck|unmark)\s+"),
            of_connective: fixed(r"(?i)(?:^|\s+)of\s+"),
            units: UNITS
                .iter()
                .map(|unit| (*unit, fixed(&format!(r"(?i)(?-u:\b){}(?-u:\b)", regex::escape(unit)))))
                .collect(),
        }
    }
}

fn fixed(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(Patterns::compile)
}

/// Interpret a transcript.
///
/// Never fails: anything without a trigger phrase becomes
/// [`ParsedCommand::Unknown`].
pub fn parse(transcript: &str) -> ParsedCommand {
    let text = transcript.to_lowercase();
    let text = text.trim();
    let mentions = |triggers: &[&str]| triggers.iter().any(|t| text.contains(t));

    let command = if mentions(ADD_TRIGGERS) {
        parse_add(text)
    } else if mentions(REMOVE_TRIGGERS) {
        ParsedCommand::Remove { item: strip(&patterns().remove_prefix, text) }
    } else if mentions(SEARCH_TRIGGERS) {
        ParsedCommand::Search { search_query: strip(&patterns().search_prefix, text) }
    } else if mentions(CHECK_TRIGGERS) {
        ParsedCommand::Check { item: strip(&patterns().check_prefix, text) }
    } else if mentions(UNCHECK_TRIGGERS) {
        ParsedCommand::Uncheck { item: strip(&patterns().uncheck_prefix, text) }
    } else if mentions(CLEAR_TRIGGERS) {
        ParsedCommand::Clear
    } else {
        ParsedCommand::Unknown
    };

    log::debug!("parsed {:?} as {}", text, command.action());
    command
}

/// Remove a leading trigger phrase and trim what is left
fn strip(prefix: &Regex, text: &str) -> String {
    prefix.replace(text, "").trim().to_string()
}

fn parse_add(text: &str) -> ParsedCommand {
    let patterns = patterns();
    let mut rest = strip(&patterns.add_prefix, text);
    let mut quantity = DEFAULT_QUANTITY;
    let mut unit = DEFAULT_UNIT.to_string();

    // Only the token right after the trigger can be a quantity
    let words: Vec<&str> = rest.split_whitespace().collect();
    if let Some(parsed) = words.first().and_then(|word| parse_quantity(word)) {
        quantity = parsed;
        let remaining = words[1..].join(" ");
        rest = remaining;
    }

    if let Some((name, pattern)) = patterns.units.iter().find(|(_, re)| re.is_match(&rest)) {
        unit = name.to_string();
        let remaining = pattern.replace(&rest, "").trim().to_string();
        rest = remaining;
    }

    let item = patterns.of_connective.replace(&rest, " ").trim().to_string();
    let item = if item.is_empty() { DEFAULT_ITEM.to_string() } else { item };

    ParsedCommand::Add { item, quantity, unit }
}

/// Digit string or number word; anything else is not a quantity.
/// Digit strings past `u32::MAX` saturate.
fn parse_quantity(word: &str) -> Option<u32> {
    if !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit()) {
        return Some(word.parse().unwrap_or(u32::MAX));
    }
    NUMBER_WORDS
        .iter()
        .find(|(spoken, _)| *spoken == word)
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandAction;

    fn add(item: &str, quantity: u32, unit: &str) -> ParsedCommand {
        ParsedCommand::Add {
            item: item.to_string(),
            quantity,
            unit: unit.to_string(),
        }
    }

    #[test]
    fn test_add_with_quantity_unit_and_connective() {
        assert_eq!(parse("add 2 packets of biscuits"), add("biscuits", 2, "packets"));
        assert_eq!(parse("add 3 kg of rice"), add("rice", 3, "kg"));
        assert_eq!(parse("put two bottles of water"), add("water", 2, "bottles"));
    }

    #[test]
    fn test_add_defaults() {
        assert_eq!(parse("add milk"), add("milk", 1, "item"));
        assert_eq!(parse("  Add Milk  "), add("milk", 1, "item"));
        assert_eq!(parse("get eggs"), add("eggs", 1, "item"));
    }

    #[test]
    fn test_add_number_words() {
        assert_eq!(parse("add five apples"), add("apples", 5, "item"));
        assert_eq!(parse("add a bag of rice"), add("rice", 1, "bag"));
        assert_eq!(parse("add an onion"), add("onion", 1, "item"));
        assert_eq!(parse("add ten cans of soda"), add("soda", 10, "cans"));
    }

    #[test]
    fn test_quantity_only_looks_at_first_token() {
        assert_eq!(parse("add milk 2"), add("milk 2", 1, "item"));
        assert_eq!(parse("add fresh two apples"), add("fresh two apples", 1, "item"));
    }

    #[test]
    fn test_malformed_quantity_falls_back() {
        assert_eq!(parse("add 2x eggs"), add("2x eggs", 1, "item"));
    }

    #[test]
    fn test_oversized_quantity_saturates() {
        assert_eq!(parse("add 5000000000 grains"), add("grains", u32::MAX, "item"));
        assert_eq!(parse("add 4294967295 eggs"), add("eggs", u32::MAX, "item"));
    }

    #[test]
    fn test_unit_requires_whole_word() {
        assert_eq!(parse("add a bagel"), add("bagel", 1, "item"));
        assert_eq!(parse("add candy"), add("candy", 1, "item"));
        assert_eq!(parse("add 2 lbs chicken"), add("chicken", 2, "lbs"));
        assert_eq!(parse("add chicken 1 lb"), add("chicken 1", 1, "lb"));
    }

    #[test]
    fn test_unit_boundary_is_ascii() {
        assert_eq!(parse("add 2 kgé sugar"), add("é sugar", 2, "kg"));
    }

    #[test]
    fn test_unit_found_anywhere_in_text() {
        assert_eq!(parse("add beans can"), add("beans", 1, "can"));
    }

    #[test]
    fn test_add_empty_item_defaults() {
        assert_eq!(parse("add 2 kg"), add("item", 2, "kg"));
    }

    #[test]
    fn test_connective_inside_name() {
        assert_eq!(parse("add cup of noodles"), add("cup noodles", 1, "item"));
    }

    #[test]
    fn test_add_wins_over_everything() {
        for transcript in [
            "remove the add",
            "please add milk",
            "address book",
            "find and add bread",
            "clear add",
        ] {
            assert_eq!(parse(transcript).action(), CommandAction::Add, "{}", transcript);
        }
    }

    #[test]
    fn test_trigger_priority_below_add() {
        // remove > search > check > clear
        assert_eq!(
            parse("find and delete bread"),
            ParsedCommand::Remove { item: "find and delete bread".to_string() }
        );
        assert_eq!(
            parse("show marked"),
            ParsedCommand::Search { search_query: "marked".to_string() }
        );
        assert_eq!(
            parse("clear checked items"),
            ParsedCommand::Check { item: "clear checked items".to_string() }
        );
    }

    #[test]
    fn test_trigger_not_at_start_keeps_full_text() {
        assert_eq!(parse("please add milk"), add("please add milk", 1, "item"));
    }

    #[test]
    fn test_remove() {
        assert_eq!(parse("remove eggs"), ParsedCommand::Remove { item: "eggs".to_string() });
        assert_eq!(parse("delete bread"), ParsedCommand::Remove { item: "bread".to_string() });
        assert_eq!(parse("take off milk"), ParsedCommand::Remove { item: "milk".to_string() });
    }

    #[test]
    fn test_remove_all_is_a_remove() {
        assert_eq!(parse("remove all"), ParsedCommand::Remove { item: "all".to_string() });
        assert_eq!(parse("delete all"), ParsedCommand::Remove { item: "all".to_string() });
    }

    #[test]
    fn test_search() {
        assert_eq!(
            parse("find bread"),
            ParsedCommand::Search { search_query: "bread".to_string() }
        );
        assert_eq!(
            parse("search for apples"),
            ParsedCommand::Search { search_query: "for apples".to_string() }
        );
        assert_eq!(
            parse("can you show me fruit"),
            ParsedCommand::Search { search_query: "can you show me fruit".to_string() }
        );
    }

    #[test]
    fn test_check_with_optional_off() {
        assert_eq!(parse("check milk"), ParsedCommand::Check { item: "milk".to_string() });
        assert_eq!(parse("check off milk"), ParsedCommand::Check { item: "milk".to_string() });
        assert_eq!(parse("mark off bread"), ParsedCommand::Check { item: "bread".to_string() });
    }

    #[test]
    fn test_uncheck_is_shadowed_by_check() {
        assert_eq!(
            parse("uncheck milk"),
            ParsedCommand::Check { item: "uncheck milk".to_string() }
        );
        assert_eq!(
            parse("unmark bread"),
            ParsedCommand::Check { item: "unmark bread".to_string() }
        );
    }

    #[test]
    fn test_clear() {
        assert_eq!(parse("clear"), ParsedCommand::Clear);
        assert_eq!(parse("clear the list"), ParsedCommand::Clear);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(parse("xyz nonsense"), ParsedCommand::Unknown);
        assert_eq!(parse(""), ParsedCommand::Unknown);
        assert_eq!(parse("   "), ParsedCommand::Unknown);
    }

    #[test]
    fn test_parse_is_deterministic() {
        for transcript in ["add 2 packets of biscuits", "remove eggs", "xyz nonsense"] {
            assert_eq!(parse(transcript), parse(transcript));
        }
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("12"), Some(12));
        assert_eq!(parse_quantity("0"), Some(0));
        assert_eq!(parse_quantity("three"), Some(3));
        assert_eq!(parse_quantity("an"), Some(1));
        assert_eq!(parse_quantity("99999999999"), Some(u32::MAX));
        assert_eq!(parse_quantity("-1"), None);
        assert_eq!(parse_quantity("1.5"), None);
        assert_eq!(parse_quantity(""), None);
    }
}
