use crate::domain::article::services::SlugGenerator;

/// Slugger for article titles: lowercase, whitespace runs become `-`, every
/// character other than ASCII letters, digits, `_` and `-` is dropped,
/// repeated hyphens collapse and edge hyphens are trimmed.
#[derive(Default, Clone)]
pub struct TitleSlugGenerator;

impl SlugGenerator for TitleSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                push_hyphen(&mut slug);
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;

        if c == '-' {
            push_hyphen(&mut slug);
        } else if c.is_ascii_alphanumeric() || c == '_' {
            slug.push(c);
        }
    }

    slug.trim_matches('-').to_string()
}

fn push_hyphen(slug: &mut String) {
    if !slug.ends_with('-') {
        slug.push('-');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(slug: &str) {
        assert!(
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'),
            "unexpected character in {slug:?}"
        );
        assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{slug:?}");
        assert!(!slug.contains("--"), "{slug:?}");
    }

    #[test]
    fn basic_title() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn strips_punctuation_and_collapses_hyphens() {
        assert_eq!(
            slugify("  ETC Network Upgrade -- Live!  "),
            "etc-network-upgrade-live"
        );
        assert_eq!(slugify("a ! b"), "a-b");
    }

    #[test]
    fn keeps_underscores_and_digits() {
        assert_eq!(slugify("Mining_Guide 2024"), "mining_guide-2024");
    }

    #[test]
    fn markup_is_reduced_to_words() {
        assert_eq!(slugify("<script>alert(1)</script>"), "scriptalert1script");
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        assert_eq!(slugify("Café Crème"), "caf-crme");
        assert_eq!(slugify("日本語"), "");
    }

    #[test]
    fn output_alphabet_holds_for_awkward_inputs() {
        let inputs = [
            "---",
            "\t\n  Tabs\tand\nnewlines  ",
            "--Leading and trailing--",
            "Ünïcödé — dashes – everywhere",
            "a-  -b",
            "_under_",
        ];
        for input in inputs {
            let slug = slugify(input);
            assert_well_formed(&slug);
            assert_eq!(slugify(&slug), slug);
        }
    }
}
