use crate::core::models::{
    CardMode,
    GrammarFields,
    LexiconFields,
    PronunciationFields,
    Record,
};

/// Turns raw delimited text into one record per non-blank line, according to
/// the session's record grammar. Pure function, no side effects; malformed
/// lines are dropped, never fatal.
pub fn parse(src_text: &str, mode: CardMode) -> Vec<Record> {
    src_text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| parse_line(line, mode))
        .collect()
}

fn parse_line(line: &str, mode: CardMode) -> Option<Record> {
    match mode {
        CardMode::Lexicon => Some(Record::Lexicon(parse_lexicon(line))),
        CardMode::Pronunciation => Some(Record::Pronunciation(PronunciationFields {
            word: line.trim().to_string(),
        })),
        CardMode::Grammar => parse_grammar(line).map(Record::Grammar),
    }
}

// Positional against the 7-field header; trailing missing fields become
// empty strings, fields beyond the seventh are ignored.
fn parse_lexicon(line: &str) -> LexiconFields {
    let parts: Vec<&str> = line.split('|').map(str::trim).collect();
    let field = |i: usize| parts.get(i).copied().unwrap_or("").to_string();

    LexiconFields {
        base_t: field(0),
        base_s: field(1),
        full_t: field(2),
        s1_t: field(3),
        s1_s: field(4),
        s2_t: field(5),
        s2_s: field(6),
    }
}

// Needs at least Front and Back around the literal " | " delimiter; a third
// part becomes the rule.
fn parse_grammar(line: &str) -> Option<GrammarFields> {
    let parts: Vec<&str> = line.trim().split(" | ").collect();
    if parts.len() < 2 {
        return None;
    }

    Some(GrammarFields {
        front: parts[0].trim().to_string(),
        back: parts[1].trim().to_string(),
        rule: parts.get(2).map(|s| s.trim().to_string()).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon(record: &Record) -> &LexiconFields {
        match record {
            Record::Lexicon(fields) => fields,
            other => panic!("Expected Lexicon, got {:?}", other),
        }
    }

    fn grammar(record: &Record) -> &GrammarFields {
        match record {
            Record::Grammar(fields) => fields,
            other => panic!("Expected Grammar, got {:?}", other),
        }
    }

    #[test]
    fn lexicon_yields_one_record_per_nonblank_line() {
        let records = parse("a|b|c\n\nd|e", CardMode::Lexicon);
        assert_eq!(records.len(), 2);

        let first = lexicon(&records[0]);
        assert_eq!(first.base_t, "a");
        assert_eq!(first.base_s, "b");
        assert_eq!(first.full_t, "c");
        assert_eq!(first.s1_t, "");

        let second = lexicon(&records[1]);
        assert_eq!(second.base_t, "d");
        assert_eq!(second.base_s, "e");
        assert_eq!(second.full_t, "");
        assert_eq!(second.s2_s, "");
    }

    #[test]
    fn lexicon_trims_fields_and_ignores_extras() {
        let records = parse("  der Hund | dog | der Hund|a|b|c|d|EXTRA|MORE", CardMode::Lexicon);
        assert_eq!(records.len(), 1);

        let fields = lexicon(&records[0]);
        assert_eq!(fields.base_t, "der Hund");
        assert_eq!(fields.base_s, "dog");
        assert_eq!(fields.s2_s, "d");
    }

    #[test]
    fn pronunciation_takes_each_line_verbatim() {
        let records = parse("  Streichholz  \n\nEichhörnchen\n", CardMode::Pronunciation);
        assert_eq!(records.len(), 2);
        match &records[0] {
            Record::Pronunciation(fields) => assert_eq!(fields.word, "Streichholz"),
            other => panic!("Expected Pronunciation, got {:?}", other),
        }
    }

    #[test]
    fn grammar_rule_defaults_to_empty() {
        let records = parse("Hund | dog", CardMode::Grammar);
        assert_eq!(records.len(), 1);

        let fields = grammar(&records[0]);
        assert_eq!(fields.front, "Hund");
        assert_eq!(fields.back, "dog");
        assert_eq!(fields.rule, "");
    }

    #[test]
    fn grammar_third_part_becomes_rule() {
        let records = parse("Hund | dog | irregular", CardMode::Grammar);
        assert_eq!(grammar(&records[0]).rule, "irregular");
    }

    #[test]
    fn grammar_skips_lines_without_delimiter() {
        let records = parse("no delimiter here\nHund | dog", CardMode::Grammar);
        assert_eq!(records.len(), 1);
        assert_eq!(grammar(&records[0]).front, "Hund");
    }
}
