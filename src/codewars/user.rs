use std::collections::{btree_map, BTreeMap};
use std::iter::FromIterator;

use serde::{Deserialize, Deserializer, Serialize};

/// Languages codewars has ranked slots for, at least as of writing this.
/// The api can send others too, they are kept in [`Languages`] regardless.
pub const KNOWN_LANGUAGES: [&str; 22] = [
    "c",
    "clojure",
    "coffeescript",
    "cpp",
    "crystal",
    "csharp",
    "dart",
    "elixir",
    "fsharp",
    "haskell",
    "java",
    "javascript",
    "objc",
    "ocaml",
    "php",
    "python",
    "ruby",
    "rust",
    "shell",
    "sql",
    "swift",
    "typescript",
];

// codewars sends null for unset fields (no clan, not on the leaderboard, ...)
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// User information
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub username: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    pub honor: i64,
    #[serde(deserialize_with = "nullable")]
    pub clan: String,
    #[serde(deserialize_with = "nullable")]
    pub leaderboard_position: i64,
    #[serde(deserialize_with = "nullable")]
    pub skills: Vec<String>,
    #[serde(rename = "ranks")]
    pub rank: Ranks,
    pub code_challenges: CodeChallenges,
}

/// User ranking information
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Ranks {
    pub overall: Overall,
    #[serde(deserialize_with = "nullable")]
    pub languages: Languages,
}

/// A rank, either overall or for a single language.
///
/// Negative values are kyu ranks (-8 is 8 kyu), positive values are dan ranks.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Rank {
    pub rank: i64,
    /// e.g. "1 kyu"
    pub name: String,
    pub color: String,
    pub score: i64,
}

pub type Overall = Rank;
pub type Language = Rank;

impl Rank {
    pub fn is_kyu(&self) -> bool {
        self.rank < 0
    }

    pub fn is_dan(&self) -> bool {
        self.rank > 0
    }
}

/// Language rankings keyed by the language name codewars uses.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Languages(BTreeMap<String, Language>);

impl Languages {
    pub fn get(&self, language: &str) -> Option<&Language> {
        self.0.get(language)
    }

    /// Zero-valued if the user has no rank in that language
    pub fn slot(&self, language: &str) -> Language {
        self.get(language).cloned().unwrap_or_default()
    }

    /// Every language in [`KNOWN_LANGUAGES`], ranked or not
    pub fn known_slots(&self) -> impl Iterator<Item = (&'static str, Language)> + '_ {
        KNOWN_LANGUAGES
            .iter()
            .map(move |&language| (language, self.slot(language)))
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Language> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Language)> for Languages {
    fn from_iter<I: IntoIterator<Item = (String, Language)>>(iter: I) -> Self {
        Languages(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Languages {
    type Item = (&'a String, &'a Language);
    type IntoIter = btree_map::Iter<'a, String, Language>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Code challenges created and completed
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeChallenges {
    pub total_authored: i64,
    pub total_completed: i64,
}
