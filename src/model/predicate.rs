use crate::model::Person;

/// Which persons the displayed list shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PersonPredicate {
    #[default]
    ShowAll,
    /// Any keyword equals a word of the name, ignoring case.
    NameContainsKeywords(Vec<String>),
    /// Any keyword equals one of the person's tag names, case-sensitively.
    TagContainsKeywords(Vec<String>),
}

impl PersonPredicate {
    pub fn test(&self, person: &Person) -> bool {
        match self {
            PersonPredicate::ShowAll => true,
            PersonPredicate::NameContainsKeywords(keywords) => {
                let name = person.name().as_str();
                keywords
                    .iter()
                    .any(|k| name.split_whitespace().any(|w| w.eq_ignore_ascii_case(k)))
            }
            PersonPredicate::TagContainsKeywords(keywords) => {
                keywords.iter().any(|k| person.has_tag(k))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_data;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn name_match_is_case_insensitive_full_word() {
        let alex = &sample_data::sample_persons()[0];
        assert!(PersonPredicate::NameContainsKeywords(keywords(&["alex"])).test(alex));
        assert!(PersonPredicate::NameContainsKeywords(keywords(&["bob", "YEOH"])).test(alex));
        assert!(!PersonPredicate::NameContainsKeywords(keywords(&["Ale"])).test(alex));
        assert!(!PersonPredicate::NameContainsKeywords(Vec::new()).test(alex));
    }

    #[test]
    fn name_match_ignores_other_fields() {
        let alex = &sample_data::sample_persons()[0];
        let predicate = PersonPredicate::NameContainsKeywords(keywords(&["87438807", "Geylang"]));
        assert!(!predicate.test(alex));
    }

    #[test]
    fn tag_match_is_case_sensitive() {
        let bernice = &sample_data::sample_persons()[1];
        assert!(PersonPredicate::TagContainsKeywords(keywords(&["colleagues"])).test(bernice));
        assert!(PersonPredicate::TagContainsKeywords(keywords(&["x", "friends"])).test(bernice));
        assert!(!PersonPredicate::TagContainsKeywords(keywords(&["Friends"])).test(bernice));
    }

    #[test]
    fn show_all_matches_everyone() {
        assert!(sample_data::sample_persons()
            .iter()
            .all(|p| PersonPredicate::ShowAll.test(p)));
    }
}
