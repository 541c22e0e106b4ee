//! Case-insensitive word membership backed by a fixed-size chained hash table.
//!
//! A [`WordSet`] is filled once from a whitespace-delimited word list and then
//! only queried. Mutating operations take `&mut self`, so a set that is being
//! loaded or unloaded can't be queried from anywhere else at the same time.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::error::WordSetError;

/// Maximum length of a stored or queried word.
pub const LENGTH: usize = 45;

/// Number of buckets in the table.
pub const BUCKETS: usize = 100_000;

struct Entry {
    word: String,
    next: Option<Box<Entry>>,
}

struct Chain<'a> {
    cursor: Option<&'a Entry>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.cursor?;
        self.cursor = entry.next.as_deref();
        Some(entry)
    }
}

/// Maps a word to its bucket by summing its lowercased bytes.
///
/// Anagrams always share a bucket. Distribution is poor for large lists, but
/// lookups stay correct because every bucket is a chain.
pub fn hash(word: &str) -> usize {
    hash_bytes(word.as_bytes())
}

fn hash_bytes(word: &[u8]) -> usize {
    let sum = word
        .iter()
        .fold(0u32, |acc, b| acc.wrapping_add(b.to_ascii_lowercase() as u32));
    sum as usize % BUCKETS
}

/// A set of words loaded once from a word list and queried ignoring case.
pub struct WordSet {
    buckets: Box<[Option<Box<Entry>>]>,
    loaded: bool,
}

impl Default for WordSet {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSet {
    /// Creates an empty, unloaded set with every bucket empty.
    pub fn new() -> Self {
        Self {
            buckets: std::iter::repeat_with(|| None).take(BUCKETS).collect(),
            loaded: false,
        }
    }

    /// Loads every word of the file at `path`, returning how many were read.
    ///
    /// If the file can't be opened the set is left as it was.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, WordSetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| WordSetError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        info!("loading words from {}", path.display());
        self.load_from_reader(BufReader::new(file))
    }

    /// Loads whitespace-delimited words from `reader`.
    ///
    /// Words are stored as written; the list is expected to be lowercase
    /// already. On error the words read so far stay in the set, but it is not
    /// reported as loaded. Call [`WordSet::unload`] before retrying.
    pub fn load_from_reader<R: BufRead>(&mut self, mut reader: R) -> Result<usize, WordSetError> {
        self.loaded = false;
        let mut line = Vec::new();
        let mut count = 0;

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            for token in line
                .split(|&b| is_space(b))
                .filter(|t| !t.is_empty())
            {
                self.insert(validate(token)?);
                count += 1;
            }
        }

        self.loaded = true;
        debug!("loaded {count} words");
        Ok(count)
    }

    /// Returns true if `word` is in the set, ignoring ASCII case.
    ///
    /// Words longer than [`LENGTH`] are never present.
    pub fn check(&self, word: &str) -> bool {
        let bytes = word.as_bytes();
        if bytes.len() > LENGTH {
            debug!("{} characters is too long to check", bytes.len());
            return false;
        }

        let mut buf = [0u8; LENGTH];
        let lowercase = &mut buf[..bytes.len()];
        lowercase.copy_from_slice(bytes);
        lowercase.make_ascii_lowercase();
        let lowercase: &[u8] = lowercase;

        self.chain(hash_bytes(lowercase))
            .any(|entry| entry.word.as_bytes() == lowercase)
    }

    /// Number of stored words, duplicates included.
    pub fn size(&self) -> usize {
        (0..BUCKETS).map(|i| self.chain(i).count()).sum()
    }

    /// Whether the last load finished successfully and hasn't been unloaded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Releases every stored word. Always succeeds, and is a no-op on an
    /// empty set.
    pub fn unload(&mut self) -> bool {
        for head in self.buckets.iter_mut() {
            // Unlink one entry at a time so long chains don't drop recursively.
            let mut cursor = head.take();
            while let Some(mut entry) = cursor {
                cursor = entry.next.take();
            }
        }
        self.loaded = false;
        true
    }

    fn insert(&mut self, word: String) {
        let index = hash(&word);
        let next = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(Entry { word, next }));
    }

    fn chain(&self, index: usize) -> Chain<'_> {
        Chain {
            cursor: self.buckets[index].as_deref(),
        }
    }
}

impl Drop for WordSet {
    fn drop(&mut self) {
        self.unload();
    }
}

/// ASCII whitespace including vertical tab.
fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}

fn validate(token: &[u8]) -> Result<String, WordSetError> {
    let Some(word) = std::str::from_utf8(token).ok().filter(|w| w.is_ascii()) else {
        return Err(WordSetError::InvalidWord {
            word: String::from_utf8_lossy(token).into_owned(),
        });
    };
    if word.len() > LENGTH {
        return Err(WordSetError::WordTooLong {
            word: word.to_string(),
            max: LENGTH,
        });
    }
    Ok(word.to_string())
}
