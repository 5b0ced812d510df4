//! The two fixed word banks.
//!
//! Banks are process-wide immutable constants. Each carries three word
//! categories plus the trailing-token lists (numbers, symbols). The
//! regular bank holds everyday words with single-character tokens; the
//! special bank holds slang words and multi-digit meme numbers.

/// One of the three categories a passphrase word is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCategory {
    /// Descriptive words ("Happy", "Goofy").
    Adjective,
    /// Subject words ("Tiger", "Gremlin").
    Noun,
    /// Action words ("Jumps", "Bops").
    Verb,
}

impl WordCategory {
    /// All categories, in draw order.
    pub const ALL: [Self; 3] = [Self::Adjective, Self::Noun, Self::Verb];
}

/// An immutable bank of words and trailing tokens.
#[derive(Debug)]
pub struct WordBank {
    /// Descriptive words.
    pub adjectives: &'static [&'static str],
    /// Subject words.
    pub nouns: &'static [&'static str],
    /// Action words.
    pub verbs: &'static [&'static str],
    /// Numeric-string tokens appended after the words.
    pub numbers: &'static [&'static str],
    /// Symbol tokens appended last.
    pub symbols: &'static [&'static str],
}

impl WordBank {
    /// Words belonging to `category`.
    #[must_use]
    pub const fn category(&self, category: WordCategory) -> &'static [&'static str] {
        match category {
            WordCategory::Adjective => self.adjectives,
            WordCategory::Noun => self.nouns,
            WordCategory::Verb => self.verbs,
        }
    }
}

/// Everyday words, single-digit numbers, six common symbols.
pub const REGULAR: WordBank = WordBank {
    adjectives: &[
        "Happy", "Clever", "Brave", "Bright", "Swift", "Calm", "Wise", "Kind", "Bold", "Quick",
        "Gentle", "Sharp", "Smart", "Strong", "Warm", "Fresh", "Sweet", "Proud", "Pure", "Rich",
        "Soft", "Wild", "Young", "Grand", "Prime", "Fair", "Light", "Noble", "Royal", "Sleek",
    ],
    nouns: &[
        "Tiger", "River", "Mountain", "Sunset", "Ocean", "Forest", "Eagle", "Castle", "Dragon",
        "Star", "Phoenix", "Crystal", "Thunder", "Garden", "Spirit", "Falcon", "Diamond", "Lotus",
        "Breeze", "Shadow", "Heart", "Storm", "Moon", "Cloud", "Lion", "Pearl", "Rose", "Wave",
        "Dream", "Dawn",
    ],
    verbs: &[
        "Jumps", "Flows", "Shines", "Flies", "Runs", "Dances", "Sings", "Dreams", "Glows",
        "Soars", "Rises", "Leaps", "Floats", "Glides", "Sparks", "Drifts", "Sweeps", "Spins",
        "Swirls", "Beams", "Blooms", "Rides", "Sails", "Waves", "Rolls", "Plays", "Moves",
        "Races", "Zooms", "Lifts",
    ],
    numbers: &["2", "3", "4", "5", "6", "7", "8", "9"],
    symbols: &["!", "@", "#", "$", "%", "&"],
};

/// Slang and meme words, multi-digit meme numbers, sixteen symbols.
pub const SPECIAL: WordBank = WordBank {
    adjectives: &[
        "Goofy", "Soggy", "Boneless", "Feral", "Beefy", "Spicy", "Crusty", "Zesty", "Wonky",
        "Chunky", "Slippery", "Cheesy", "Wobbly", "Yappy", "Boofed", "Schmoovy", "Grubby",
        "Sneaky", "Drippy", "Vibey", "Squishy", "Derpy", "Wiggly", "Sassy", "Funky", "Janky",
        "Loopy", "Wacky", "Bouncy", "Fluffy",
    ],
    nouns: &[
        "Rizzlord", "Gremlin", "Bozo", "Yeeter", "Shrek", "Goblin", "Npc", "Biscuit", "Nugget",
        "Gronk", "Gibby", "Skibidi", "Bonk", "Dingle", "Pingu", "Dooter", "Bongo", "Muppet",
        "Squidward", "Blobfish", "Chungus", "Pepe", "Doge", "Monke", "Birb", "Chonker", "Floof",
        "Borker", "Yoshi", "Sponge",
    ],
    verbs: &[
        "Skibbles", "Bops", "Boofs", "Schmooves", "Lurks", "Slaps", "Wiggles", "Yeets", "Claps",
        "Dribbles", "Zips", "Zooms", "Bonks", "Flops", "Jiggles", "Snaps", "Chomps", "Waddles",
        "Shmoops", "Shuffles", "Derps", "Yoinks", "Borks", "Nyooms", "Vibes", "Zoomies",
        "Sploots", "Boings", "Cronches", "Yeets",
    ],
    numbers: &[
        "69", "420", "404", "1337", "9000", "360", "777", "182", "101", "666", "8008", "5318008",
        "69420", "9999", "4321", "2468",
    ],
    symbols: &[
        "!", "@", "#", "$", "%", "&", "*", "?", "~", "^", "+", "=", "<", ">", "|", "_",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    const BANKS: [&WordBank; 2] = [&REGULAR, &SPECIAL];

    #[test]
    fn thirty_words_per_category() {
        for bank in BANKS {
            for category in WordCategory::ALL {
                assert_eq!(bank.category(category).len(), 30);
            }
        }
    }

    #[test]
    fn no_empty_tokens() {
        for bank in BANKS {
            for category in WordCategory::ALL {
                for word in bank.category(category) {
                    assert!(!word.is_empty());
                }
            }
            assert!(bank.numbers.iter().all(|t| !t.is_empty()));
            assert!(bank.symbols.iter().all(|t| !t.is_empty()));
        }
    }

    #[test]
    fn regular_numbers_are_single_digits() {
        for token in REGULAR.numbers {
            assert_eq!(token.len(), 1, "token '{token}' is not a single digit");
            assert!(token.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn special_numbers_are_numeric() {
        for token in SPECIAL.numbers {
            assert!(
                token.chars().all(|c| c.is_ascii_digit()),
                "token '{token}' is not numeric"
            );
        }
    }

    #[test]
    fn symbols_are_single_characters() {
        for bank in BANKS {
            for token in bank.symbols {
                assert_eq!(token.len(), 1, "symbol '{token}' is not one character");
            }
        }
    }

    #[test]
    fn words_are_capitalized_ascii() {
        for bank in BANKS {
            for category in WordCategory::ALL {
                for word in bank.category(category) {
                    assert!(word.is_ascii(), "word '{word}' is not ASCII");
                    let first = word.chars().next().unwrap();
                    assert!(first.is_ascii_uppercase(), "word '{word}' not capitalized");
                }
            }
        }
    }
}
