use crate::domain::ports::{CompoundPhraseKey, PhraseKey, PhraseProvider};

/// Built-in English phrase catalogue. Other locales implement
/// [`PhraseProvider`] with whatever resource mechanism they prefer.
pub struct EnglishPhrases;

impl PhraseProvider for EnglishPhrases {
    fn quantity(&self, key: PhraseKey, n: u64) -> String {
        match key {
            PhraseKey::IntervalMonths => {
                if n == 1 {
                    "every month".to_string()
                } else {
                    format!("every {} months", n)
                }
            }
            PhraseKey::IntervalYears => {
                if n == 1 {
                    "every year".to_string()
                } else {
                    format!("every {} years", n)
                }
            }
            PhraseKey::Years => format!("{} {}", n, pluralize("year", n)),
            PhraseKey::Months => format!("{} {}", n, pluralize("month", n)),
            PhraseKey::Days => format!("{} {}", n, pluralize("day", n)),
        }
    }

    fn compound(&self, key: CompoundPhraseKey, first: u64, second: u64) -> String {
        match key {
            CompoundPhraseKey::IntervalYearsAndMonths => format!(
                "every {} {} and {} {}",
                first,
                pluralize("year", first),
                second,
                pluralize("month", second)
            ),
        }
    }
}

fn pluralize(noun: &str, n: u64) -> String {
    if n == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}
