/// Shown in place of a pronunciation when the source has none.
pub const NO_PRONUNCIATION: &str = "No pronunciation available";

#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub word: String,
    pub phonetic: Option<String>,
    pub phonetics: Vec<Phonetic>,
    pub origin: Option<String>,
    pub meanings: Vec<WordMeaning>,
}



#[derive(Debug, Clone, PartialEq)]
pub struct Phonetic {
    pub text: Option<String>,
    pub audio: Option<String>,
}


#[derive(Debug, Clone, PartialEq)]
pub struct WordMeaning {
    pub part_of_speech: PartOfSpeech,
    pub definitions: Vec<WordDefinition>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
    /// Any label outside the eight above, kept verbatim.
    Other(String),
}

impl PartOfSpeech {
    pub fn from_label(label: &str) -> Self {
        match &label.trim().to_ascii_lowercase()[..] {
            "noun" => Self::Noun,
            "pronoun" => Self::Pronoun,
            "verb" => Self::Verb,
            "adjective" => Self::Adjective,
            "adverb" => Self::Adverb,
            "preposition" => Self::Preposition,
            "conjunction" => Self::Conjunction,
            "interjection" => Self::Interjection,
            _ => Self::Other(label.trim().to_owned()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Noun => "noun",
            Self::Pronoun => "pronoun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Preposition => "preposition",
            Self::Conjunction => "conjunction",
            Self::Interjection => "interjection",
            Self::Other(label) => label,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordDefinition {
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

/// Every entry the source returned for one query.
///
/// Never empty: a response without entries is treated as a failed lookup
/// before a `LookupResult` is built. Accessors only read the first entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupResult {
    entries: Vec<Word>,
}

impl LookupResult {
    /// Returns `None` when `entries` is empty.
    pub fn from_entries(entries: Vec<Word>) -> Option<Self> {
        if entries.is_empty() {
            None
        } else {
            Some(Self { entries })
        }
    }

    pub fn first(&self) -> &Word {
        &self.entries[0]
    }

    pub fn entries(&self) -> &[Word] {
        &self.entries
    }

    pub fn word(&self) -> &str {
        &self.first().word
    }

    pub fn meanings(&self) -> &[WordMeaning] {
        &self.first().meanings
    }

    /// The first entry's phonetic text, or [`NO_PRONUNCIATION`].
    pub fn pronunciation(&self) -> &str {
        self.first()
            .phonetic
            .as_deref()
            .map(str::trim)
            .filter(|phonetic| !phonetic.is_empty())
            .unwrap_or(NO_PRONUNCIATION)
    }

    pub fn has_pronunciation(&self) -> bool {
        self.pronunciation() != NO_PRONUNCIATION
    }

    /// Meaning-level synonyms of the first entry, in source order, duplicates kept.
    pub fn synonyms(&self) -> Vec<&str> {
        self.meanings()
            .iter()
            .flat_map(|meaning| meaning.synonyms.iter())
            .map(String::as_str)
            .collect()
    }

    pub fn definitions(&self) -> Vec<&str> {
        self.meanings()
            .iter()
            .flat_map(|meaning| meaning.definitions.iter())
            .map(|definition| definition.definition.as_str())
            .filter(|definition| !definition.trim().is_empty())
            .collect()
    }

    pub fn audio(&self) -> Option<&str> {
        self.first()
            .phonetics
            .iter()
            .filter_map(|phonetic| phonetic.audio.as_deref())
            .find(|audio| !audio.trim().is_empty())
    }
}
