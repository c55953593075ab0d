use std::fmt;

use dictionary::LookupResult;

pub const HINT: &str = "Please enter a word to get its meaning, pronunciation, and synonyms.";

pub fn not_found(word: &str) -> String {
    format!("Sorry, no details found for '{word}'.")
}

pub fn saved(word: &str) -> String {
    format!("'{word}' has been saved as a favorite!")
}

/// Terminal layout of one lookup.
pub struct Definition<'a>(pub &'a LookupResult);

impl fmt::Display for Definition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(f, "Showing definition for '{}':", result.word())?;
        writeln!(f, "Meaning:")?;
        for meaning in result.meanings() {
            let mut definitions = meaning
                .definitions
                .iter()
                .filter(|definition| !definition.definition.trim().is_empty())
                .peekable();
            if definitions.peek().is_none() {
                continue;
            }
            writeln!(f, "    {}:", meaning.part_of_speech.label())?;
            for definition in definitions {
                writeln!(f, "        - {}", definition.definition)?;
                if let Some(example) = &definition.example {
                    writeln!(f, "          example: {example}")?;
                }
            }
        }
        if result.has_pronunciation() {
            writeln!(f, "Pronunciation: {}", result.pronunciation())?;
        }
        let synonyms = result.synonyms();
        if !synonyms.is_empty() {
            writeln!(f, "Synonyms: {}", synonyms.join(", "))?;
        }
        if let Some(audio) = result.audio() {
            writeln!(f, "Audio: {audio}")?;
        }
        let others = result.entries().len() - 1;
        if others > 0 {
            writeln!(f, "({others} more entries for '{}' not shown)", result.word())?;
        }
        Ok(())
    }
}
