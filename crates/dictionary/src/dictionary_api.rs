// https://dictionaryapi.dev/ - free, no key, one array of entries per word, 404 with a json message when unknown

use serde::{Deserialize, Deserializer};

use crate::dictionary::{LookupResult, PartOfSpeech, Phonetic, Word, WordDefinition, WordMeaning};
use crate::{DictionaryError, NotFoundError};

pub(crate) const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[derive(Debug, Deserialize)]
struct ApiEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    word: String,
    #[serde(default)]
    phonetic: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    phonetics: Vec<ApiPhonetic>,
    #[serde(default)]
    origin: Option<String>,
    meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
struct ApiPhonetic {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    audio: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiMeaning {
    #[serde(default, deserialize_with = "null_as_default")]
    part_of_speech: String,
    #[serde(default, deserialize_with = "null_as_default")]
    definitions: Vec<ApiDefinition>,
    #[serde(default, deserialize_with = "null_as_default")]
    synonyms: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    antonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiDefinition {
    #[serde(default, deserialize_with = "null_as_default")]
    definition: String,
    #[serde(default)]
    example: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    synonyms: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    antonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiNotFound {
    #[serde(default)]
    message: String,
}

/// `null` is how the source spells a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<ApiEntry> for Word {
    fn from(entry: ApiEntry) -> Self {
        Self {
            word: entry.word,
            phonetic: entry.phonetic,
            phonetics: entry
                .phonetics
                .into_iter()
                .map(|phonetic| Phonetic {
                    text: phonetic.text,
                    audio: phonetic.audio,
                })
                .collect(),
            origin: entry.origin,
            meanings: entry.meanings.into_iter().map(WordMeaning::from).collect(),
        }
    }
}

impl From<ApiMeaning> for WordMeaning {
    fn from(meaning: ApiMeaning) -> Self {
        Self {
            part_of_speech: PartOfSpeech::from_label(&meaning.part_of_speech),
            definitions: meaning
                .definitions
                .into_iter()
                .map(|definition| WordDefinition {
                    definition: definition.definition,
                    example: definition.example,
                    synonyms: definition.synonyms,
                    antonyms: definition.antonyms,
                })
                .collect(),
            synonyms: meaning.synonyms,
            antonyms: meaning.antonyms,
        }
    }
}

/// `<base>/<word>` with the word percent-encoded as a single path segment.
pub(crate) fn entry_url(base_url: &str, word: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(word)
    )
}

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
) -> Result<LookupResult, DictionaryError> {
    let url = entry_url(base_url, word);
    tracing::debug!(%url, "requesting definition");
    let res: reqwest::Response = client
        .get(&url)
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;

    let status = res.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        // the body only carries a human readable reason
        let message = res
            .json::<ApiNotFound>()
            .await
            .map(|body| body.message)
            .unwrap_or_default();
        return Err(DictionaryError::NotFound(NotFoundError::new(message)));
    }
    if !status.is_success() {
        return Err(DictionaryError::Status(status));
    }

    let entries = res
        .json::<Vec<ApiEntry>>()
        .await
        .map_err(DictionaryError::Deserialize)?;
    LookupResult::from_entries(entries.into_iter().map(Word::from).collect())
        .ok_or(DictionaryError::Empty)
}
