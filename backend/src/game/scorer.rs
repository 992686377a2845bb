use crate::utils::letters::get_letter_value;

pub struct Scorer;

impl Scorer {
    /// Score an accepted word.
    ///
    /// - Each letter has a base value (unknown letters are worth 0)
    /// - The letter sum is scaled by a length bonus of `1 + 0.1 * letters`
    /// - The result is scaled by the caller's combo multiplier
    /// - Rounding happens once, at the end
    ///
    /// The letters are assumed to come from a legal path.
    pub fn score_word(letters: &[char], combo_multiplier: f64) -> i64 {
        let base = Self::base_score(letters) as f64;
        (base * Self::length_bonus(letters.len()) * combo_multiplier).round() as i64
    }

    /// Sum of letter values
    pub fn base_score(letters: &[char]) -> u32 {
        letters.iter().map(|&letter| get_letter_value(letter)).sum()
    }

    fn length_bonus(length: usize) -> f64 {
        1.0 + 0.1 * length as f64
    }
}
