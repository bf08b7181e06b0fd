use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;
use std::str::FromStr;

/// 2^64, the first integral float that no longer fits a `u64`.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Identity of a record.
///
/// Ids allocated by the store are always integers. Imported documents are trusted
/// as-is: any JSON number is kept in `Number` (integral floats such as `5.0` are
/// normalised to `5`), anything else verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(Number),
    Other(Value),
}

impl RecordId {
    /// The id as an integer, if it is a number with no fractional part.
    ///
    /// Integral floats too large for `i128` saturate.
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            RecordId::Number(n) => n
                .as_i64()
                .map(i128::from)
                .or_else(|| n.as_u64().map(i128::from))
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i128)),
            RecordId::Other(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => RecordId::Number(normalize_number(n)),
            other => RecordId::Other(other),
        })
    }
}

fn normalize_number(n: Number) -> Number {
    let Some(f) = n.as_f64().filter(|f| n.is_f64() && f.fract() == 0.0) else {
        return n;
    };
    if (0.0..U64_LIMIT).contains(&f) {
        Number::from(f as u64)
    } else if f < 0.0 && f >= i64::MIN as f64 {
        Number::from(f as i64)
    } else {
        n
    }
}

impl From<i32> for RecordId {
    fn from(n: i32) -> Self {
        RecordId::Number(Number::from(n))
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(Number::from(n))
    }
}

impl From<u64> for RecordId {
    fn from(n: u64) -> Self {
        RecordId::Number(Number::from(n))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Other(Value::String(s)) => write!(f, "{}", s),
            RecordId::Other(v) => write!(f, "{}", v),
        }
    }
}

/// A single vocabulary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub word: String,
    pub meaning: String,
    #[serde(default)]
    pub description: String,
    // Keys we don't know about survive an import/export cycle untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    pub fn new(
        id: impl Into<RecordId>,
        word: impl Into<String>,
        meaning: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            word: word.into(),
            meaning: meaning.into(),
            description: description.into(),
            extra: Map::new(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Word => &self.word,
            Field::Meaning => &self.meaning,
            Field::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Word => self.word = value,
            Field::Meaning => self.meaning = value,
            Field::Description => self.description = value,
        }
    }
}

/// The editable text fields of a record. The id is deliberately not one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Word,
    Meaning,
    Description,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Word, Field::Meaning, Field::Description];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Word => "word",
            Field::Meaning => "meaning",
            Field::Description => "description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "word" => Ok(Field::Word),
            "meaning" => Ok(Field::Meaning),
            "description" => Ok(Field::Description),
            other => Err(format!(
                "Unknown field: {} (expected word, meaning or description)",
                other
            )),
        }
    }
}

/// Unsaved buffer behind the add dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub word: String,
    pub meaning: String,
    pub description: String,
}

impl Draft {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Word => self.word = value,
            Field::Meaning => self.meaning = value,
            Field::Description => self.description = value,
        }
    }

    /// Word and meaning are the two fields an entry cannot do without.
    pub fn is_complete(&self) -> bool {
        !self.word.is_empty() && !self.meaning.is_empty()
    }
}

/// The entries every new session starts with.
pub fn seed_records() -> Vec<Record> {
    vec![
        Record::new(1, "猫", "cat", "四足動物で、ペットとして人気がある。"),
        Record::new(2, "犬", "dog", "忠実な動物で、人間の親友と呼ばれる。"),
        Record::new(3, "鳥", "bird", "羽毛を持ち、多くの種類が空を飛ぶことができる。"),
    ]
}
