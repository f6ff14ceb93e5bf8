use crate::types::report::Contradiction;

const AFFIRMATIVE_TERMS: &[&str] = &["will", "can", "have", "ready", "available"];
const DEFICIENCY_TERMS: &[&str] = &["cannot", "lack", "missing", "need", "require"];
const MAX_FLAGGED: usize = 5;
const TRUNCATE_CHARS: usize = 100;

// Coarse mixed-signal heuristic: a sentence asserting capability while also
// naming a deficiency. Substring containment on lowercased sentences, no
// negation scoping.
pub fn detect(sentences: &[String]) -> Vec<Contradiction> {
    sentences
        .iter()
        .enumerate()
        .filter(|(_, sentence)| {
            AFFIRMATIVE_TERMS.iter().any(|term| sentence.contains(term))
                && DEFICIENCY_TERMS.iter().any(|term| sentence.contains(term))
        })
        .take(MAX_FLAGGED)
        .map(|(index, sentence)| Contradiction {
            sentence_num: index + 1,
            text: truncate(sentence),
            kind: "mixed_signals",
        })
        .collect()
}

fn truncate(sentence: &str) -> String {
    if sentence.chars().count() > TRUNCATE_CHARS {
        let mut truncated: String = sentence.chars().take(TRUNCATE_CHARS).collect();
        truncated.push_str("...");
        truncated
    } else {
        sentence.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn flags_sentences_mixing_capability_and_deficiency() {
        let flagged = detect(&sentences(&[
            "we will deliver on time.",
            "we have the platform but lack clean data.",
        ]));
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].sentence_num, 2);
        assert_eq!(flagged[0].kind, "mixed_signals");
    }

    #[test]
    fn purely_affirmative_or_deficient_sentences_pass() {
        let flagged = detect(&sentences(&[
            "we will deliver on time.",
            "the team lacks gpu capacity.",
        ]));
        assert!(flagged.is_empty());
    }

    #[test]
    fn output_is_capped_at_five() {
        let mixed = "we have tools but need more budget.";
        let many: Vec<String> = std::iter::repeat(mixed.to_string()).take(12).collect();
        let flagged = detect(&many);
        assert_eq!(flagged.len(), 5);
        assert_eq!(flagged[4].sentence_num, 5);
    }

    #[test]
    fn long_sentences_are_truncated_with_ellipsis() {
        let long_sentence = format!("we have capacity but lack {}", "x".repeat(120));
        let flagged = detect(&sentences(&[&long_sentence]));
        assert_eq!(flagged[0].text.chars().count(), 103);
        assert!(flagged[0].text.ends_with("..."));
    }

    #[test]
    fn short_sentences_are_kept_verbatim() {
        let flagged = detect(&sentences(&["we have tools but need time."]));
        assert_eq!(flagged[0].text, "we have tools but need time.");
    }

    #[test]
    fn matching_is_substring_based() {
        // "can" inside "cannot" makes a lone "cannot" sentence self-flagging
        let flagged = detect(&sentences(&["we cannot migrate this quarter."]));
        assert_eq!(flagged.len(), 1);
    }
}
