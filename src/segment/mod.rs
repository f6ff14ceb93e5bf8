pub mod stopwords;

use std::collections::HashSet;
use stopwords::ENGLISH_STOPWORDS;

#[derive(Debug, Clone, Default)]
pub struct Segmentation {
    pub sentences: Vec<String>,
    pub content_words: Vec<String>,
}

pub trait Segmenter {
    fn segment(&self, text: &str) -> Segmentation;
}

pub struct PunctSegmenter {
    stopwords: HashSet<&'static str>,
}

impl Default for PunctSegmenter {
    fn default() -> Self {
        PunctSegmenter {
            stopwords: ENGLISH_STOPWORDS.iter().copied().collect(),
        }
    }
}

impl Segmenter for PunctSegmenter {
    fn segment(&self, text: &str) -> Segmentation {
        let lowered = text.to_lowercase();
        Segmentation {
            sentences: split_sentences(&lowered),
            content_words: self.content_words(&lowered),
        }
    }
}

impl PunctSegmenter {
    fn content_words(&self, lowered: &str) -> Vec<String> {
        let mut words = Vec::new();
        let mut current = String::new();
        for ch in lowered.chars() {
            if ch.is_alphanumeric() {
                current.push(ch);
            } else if !current.is_empty() {
                if self.stopwords.contains(current.as_str()) {
                    current.clear();
                } else {
                    words.push(std::mem::take(&mut current));
                }
            }
        }
        if !current.is_empty() && !self.stopwords.contains(current.as_str()) {
            words.push(current);
        }
        words
    }
}

// Sentences break on a run of terminators followed by whitespace or end of
// input; a terminator glued to an alphanumeric char (decimals, versions,
// abbreviation-internal dots) does not break.
fn split_sentences(lowered: &str) -> Vec<String> {
    let chars: Vec<char> = lowered.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut index = 0;

    while index < chars.len() {
        let ch = chars[index];
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            while index + 1 < chars.len() && matches!(chars[index + 1], '.' | '!' | '?') {
                index += 1;
                current.push(chars[index]);
            }
            let at_boundary = match chars.get(index + 1) {
                None => true,
                Some(next) => next.is_whitespace(),
            };
            if at_boundary {
                push_trimmed(&mut sentences, &mut current);
            }
        }
        index += 1;
    }
    push_trimmed(&mut sentences, &mut current);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}
