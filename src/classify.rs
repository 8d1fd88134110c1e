//! Card classification helpers.
//!
//! Maps a free-text type line to a coarse [`CardCategory`] and computes the
//! converted mana cost of a `{SYMBOL}` mana cost string. Both functions are
//! total: absent or malformed input degrades to `Unknown`/`Other` and `0`.

use crate::models::CardCategory;

/// Classify a type line into a single coarse category.
///
/// The type line is tested for substring containment against
/// [`CardCategory::PRECEDENCE`] and the first match wins, so
/// `"Artifact Creature — Construct"` is a `Creature` and
/// `"Artifact Land"` is a `Land`.
///
/// Returns [`CardCategory::Unknown`] for an absent or empty type line and
/// [`CardCategory::Other`] when nothing matches.
pub fn classify_type(type_line: Option<&str>) -> CardCategory {
    let type_line = match type_line {
        Some(t) if !t.is_empty() => t,
        _ => return CardCategory::Unknown,
    };

    CardCategory::PRECEDENCE
        .iter()
        .copied()
        .find(|category| type_line.contains(category.as_str()))
        .unwrap_or(CardCategory::Other)
}

/// Compute the converted mana cost of a mana cost string.
///
/// * `{N}` adds `N`.
/// * `{W}`, `{U}`, `{B}`, `{R}`, `{G}` and any hybrid token containing `/`
///   add 1.
/// * `{X}`, `{Y}`, `{Z}` and unrecognized tokens add 0.
///
/// An unterminated trailing `{` is ignored.
pub fn compute_cmc(mana_cost: Option<&str>) -> u32 {
    let Some(cost) = mana_cost else {
        return 0;
    };

    mana_symbols(cost)
        .map(symbol_value)
        .fold(0u32, |acc, v| acc.saturating_add(v))
}

/// Iterate over the contents of each `{...}` token in a mana cost string.
pub(crate) fn mana_symbols(cost: &str) -> impl Iterator<Item = &str> {
    cost.split('{')
        .skip(1)
        .filter_map(|chunk| chunk.split_once('}').map(|(symbol, _)| symbol))
}

fn symbol_value(symbol: &str) -> u32 {
    if !symbol.is_empty() && symbol.bytes().all(|b| b.is_ascii_digit()) {
        return symbol.parse::<u32>().unwrap_or(u32::MAX);
    }
    match symbol {
        "W" | "U" | "B" | "R" | "G" => 1,
        "X" | "Y" | "Z" => 0,
        s if s.contains('/') => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mana_symbols_splits_tokens() {
        let symbols: Vec<&str> = mana_symbols("{2}{W/U}{G}").collect();
        assert_eq!(symbols, vec!["2", "W/U", "G"]);
    }

    #[test]
    fn mana_symbols_ignores_unterminated_token() {
        let symbols: Vec<&str> = mana_symbols("{1}{R").collect();
        assert_eq!(symbols, vec!["1"]);
    }

    #[test]
    fn symbol_value_handles_each_kind() {
        assert_eq!(symbol_value("10"), 10);
        assert_eq!(symbol_value("R"), 1);
        assert_eq!(symbol_value("2/W"), 1);
        assert_eq!(symbol_value("X"), 0);
        assert_eq!(symbol_value("C"), 0);
        assert_eq!(symbol_value(""), 0);
    }
}
