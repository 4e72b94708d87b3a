use crate::time::display_date;
use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A single note.
///
/// The serialized field names (`text`, `date`, `timestamp`) are the on-disk
/// shape of the notes slot and must not change. Every field has a default so
/// records written by older versions, or with a field missing or `null`,
/// still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default = "Uuid::new_v4", deserialize_with = "id_or_fresh")]
    pub id: Uuid,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Markup produced by the editor. Stored and returned verbatim.
    #[serde(rename = "text", default, deserialize_with = "null_as_default")]
    pub body: String,

    /// `DD/MM/YYYY HH:MM`, fixed at the write that produced this version.
    #[serde(rename = "date", default, deserialize_with = "null_as_default")]
    pub edited_at: String,

    /// Milliseconds since the epoch. Only used for ordering.
    #[serde(rename = "timestamp", default, deserialize_with = "lenient_millis")]
    pub sort_key: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn id_or_fresh<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Uuid>::deserialize(deserializer)?.unwrap_or_else(Uuid::new_v4))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Millis {
    Int(i64),
    Float(f64),
}

/// Integer milliseconds, or a float with no fractional part. Writers that
/// only have doubles store `1700000000000.0`.
fn lenient_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Millis>::deserialize(deserializer)? {
        None => Ok(0),
        Some(Millis::Int(millis)) => Ok(millis),
        Some(Millis::Float(millis))
            if millis.is_finite()
                && millis.fract() == 0.0
                && millis >= i64::MIN as f64
                && millis < i64::MAX as f64 =>
        {
            Ok(millis as i64)
        }
        Some(Millis::Float(millis)) => Err(D::Error::custom(format!(
            "timestamp {} is not a whole number of milliseconds",
            millis
        ))),
    }
}

impl Note {
    /// Builds a brand-new note stamped with `now`.
    pub fn new(title: String, body: String, now: DateTime<Utc>) -> Self {
        Self::with_id(Uuid::new_v4(), title, body, now)
    }

    /// Builds a new version of the note identified by `id`.
    pub fn with_id(id: Uuid, title: String, body: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            body,
            edited_at: display_date(now),
            sort_key: now.timestamp_millis(),
        }
    }
}

/// At most `max_chars` characters of `text`, with `...` appended when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// The ordered notes, newest first.
///
/// Serializes as a plain array. Deserializing goes through
/// [`Collection::from_notes`], so a loaded collection is always sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Collection {
    notes: Vec<Note>,
}

impl<'de> Deserialize<'de> for Collection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Note>::deserialize(deserializer).map(Collection::from_notes)
    }
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `notes` and puts them in display order.
    pub fn from_notes(notes: Vec<Note>) -> Self {
        let mut collection = Self { notes };
        collection.sort();
        collection
    }

    /// Newest first. The sort is stable so equal keys keep their order.
    pub fn sort(&mut self) {
        self.notes.sort_by(|a, b| b.sort_key.cmp(&a.sort_key));
    }

    pub fn is_sorted(&self) -> bool {
        self.notes
            .windows(2)
            .all(|pair| pair[0].sort_key >= pair[1].sort_key)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Note> {
        self.notes.get(position)
    }

    pub fn find(&self, id: &Uuid) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == *id)
    }

    pub fn position_of(&self, id: &Uuid) -> Option<usize> {
        self.notes.iter().position(|note| note.id == *id)
    }

    /// The largest sort key present, if any.
    pub fn newest_key(&self) -> Option<i64> {
        self.notes.iter().map(|note| note.sort_key).max()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn into_notes(self) -> Vec<Note> {
        self.notes
    }

    /// A copy with `note` in front.
    pub(crate) fn with_front(&self, note: Note) -> Self {
        let mut notes = Vec::with_capacity(self.notes.len() + 1);
        notes.push(note);
        notes.extend(self.notes.iter().cloned());
        Self { notes }
    }

    /// A copy keeping only the notes for which `keep(position, note)` holds.
    pub(crate) fn retained<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(usize, &Note) -> bool,
    {
        let notes = self
            .notes
            .iter()
            .enumerate()
            .filter(|(position, note)| keep(*position, note))
            .map(|(_, note)| note.clone())
            .collect();
        Self { notes }
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}
