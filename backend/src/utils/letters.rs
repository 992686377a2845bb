use std::collections::HashMap;
use once_cell::sync::Lazy;

/// Letter values, Scrabble scoring
pub static LETTER_VALUES: Lazy<HashMap<char, u32>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // 1 point letters
    for ch in ['A', 'E', 'I', 'O', 'U', 'L', 'N', 'R', 'S', 'T'] {
        map.insert(ch, 1);
    }

    // 2 points
    for ch in ['D', 'G'] {
        map.insert(ch, 2);
    }

    // 3 points
    for ch in ['B', 'C', 'M', 'P'] {
        map.insert(ch, 3);
    }

    // 4 points
    for ch in ['F', 'H', 'V', 'W', 'Y'] {
        map.insert(ch, 4);
    }

    // 5 points
    map.insert('K', 5);

    // 8 points
    for ch in ['J', 'X'] {
        map.insert(ch, 8);
    }

    // 10 points
    for ch in ['Q', 'Z'] {
        map.insert(ch, 10);
    }

    map
});

/// Get the point value for a letter, case-insensitive. Anything off the table is worth 0.
pub fn get_letter_value(letter: char) -> u32 {
    let upper = letter.to_ascii_uppercase();
    LETTER_VALUES.get(&upper).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_values() {
        assert_eq!(get_letter_value('A'), 1);
        assert_eq!(get_letter_value('E'), 1);
        assert_eq!(get_letter_value('Q'), 10);
        assert_eq!(get_letter_value('X'), 8);
        assert_eq!(get_letter_value('D'), 2);
    }

    #[test]
    fn test_lowercase_and_unknown_letters() {
        assert_eq!(get_letter_value('z'), 10);
        assert_eq!(get_letter_value('7'), 0);
        assert_eq!(get_letter_value('É'), 0);
        assert_eq!(LETTER_VALUES.len(), 26);
    }
}
