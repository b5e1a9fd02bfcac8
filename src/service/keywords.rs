//! Deterministic keyword-based harassment classifier
//!
//! Used whenever the completion provider is unavailable or returns output
//! that cannot be parsed. Matching is plain substring containment over the
//! lower-cased input, not word-boundary tokenization, so short terms match
//! inside longer words ("classic" contains "ass"). That over-matching is
//! inherited behavior and is kept as-is.

use crate::model::{KeywordClassification, Severity};

/// General harassment terms (overlaps the racial, threatening, and sexual sets)
const GENERAL_KEYWORDS: &[&str] = &[
    // Racial slurs and offensive terms
    "nigga",
    "nigger",
    "faggot",
    "dyke",
    "kike",
    "spic",
    "chink",
    "gook",
    "wetback",
    // General offensive language
    "slut",
    "whore",
    "bitch",
    "cunt",
    "fuck",
    "shit",
    "ass",
    "dick",
    "pussy",
    "bastard",
    "motherfucker",
    "fucker",
    "dumbass",
    "idiot",
    "stupid",
    "retard",
    // Threatening language
    "kill",
    "hurt",
    "beat",
    "rape",
    "attack",
    "fight",
    "punch",
    "kick",
    "stab",
    "gun",
    "knife",
    "weapon",
    "danger",
    "death",
    "die",
    "threat",
    "intimidate",
    // Stalking and harassment
    "follow",
    "stalk",
    "watch",
    "spy",
    "harass",
    "annoy",
    "bother",
    "scare",
    "fear",
    // Sexual harassment
    "sexy",
    "hot",
    "beautiful",
    "gorgeous",
    "baby",
    "honey",
    "sweetheart",
    "kiss",
    "touch",
    "feel",
    "body",
    "curve",
    "boob",
    "leg",
    "breast",
    "penis",
    "vagina",
    "naked",
    "strip",
    "sex",
    "sexual",
    "porn",
    "pornography",
];

const SEXUAL_KEYWORDS: &[&str] = &[
    "sexy",
    "hot",
    "beautiful",
    "gorgeous",
    "baby",
    "honey",
    "sweetheart",
    "kiss",
    "touch",
    "feel",
    "body",
    "curve",
    "ass",
    "boob",
    "leg",
    "breast",
    "penis",
    "vagina",
    "naked",
    "strip",
    "sex",
    "sexual",
    "porn",
    "pornography",
    "prostitute",
    "hooker",
    "escort",
    "slut",
    "whore",
    "bitch",
];

const THREATENING_KEYWORDS: &[&str] = &[
    "kill",
    "hurt",
    "beat",
    "rape",
    "attack",
    "fight",
    "punch",
    "kick",
    "stab",
    "gun",
    "knife",
    "weapon",
    "danger",
    "death",
    "die",
    "threat",
    "intimidate",
    "scare",
    "fear",
    "terrorize",
    "bully",
    "harass",
    "annoy",
    "bother",
];

const RACIAL_KEYWORDS: &[&str] = &[
    "nigga",
    "nigger",
    "faggot",
    "dyke",
    "kike",
    "spic",
    "chink",
    "gook",
    "wetback",
    "coon",
    "spook",
    "jigaboo",
    "jungle bunny",
    "porch monkey",
    "nappy head",
];

/// Emotional/contextual terms checked only when no keyword set triggered
const OFFENSIVE_CONTEXT: &[&str] = &[
    "offended",
    "uncomfortable",
    "scared",
    "threatened",
    "harassed",
    "unwanted",
    "inappropriate",
    "disgusting",
    "vulgar",
    "rude",
];

const HARASSMENT_ACTIONS: &[&str] = &[
    "Document the incident immediately",
    "Consider reporting to authorities",
    "Seek legal advice if needed",
    "Contact Anti-Discrimination NSW if applicable",
];

const NON_HARASSMENT_ACTIONS: &[&str] = &[
    "Continue monitoring the situation",
    "Document any escalation",
    "Seek help if you feel unsafe",
];

/// Terms of a keyword set that are substrings of the lower-cased text,
/// in set order
fn matched_terms(lower_text: &str, set: &[&str]) -> Vec<String> {
    set.iter()
        .filter(|term| lower_text.contains(*term))
        .map(|term| term.to_string())
        .collect()
}

/// Classify free text by keyword matching
///
/// Total: every input, including the empty string, yields a structurally
/// valid classification. Categories are applied in fixed priority order
/// (racial > threatening > sexual > general), so only one category is ever
/// assigned even though the keyword sets overlap.
pub fn classify(text: &str) -> KeywordClassification {
    let lower_text = text.to_lowercase();

    let general_matches = matched_terms(&lower_text, GENERAL_KEYWORDS);
    let sexual_matches = matched_terms(&lower_text, SEXUAL_KEYWORDS);
    let threatening_matches = matched_terms(&lower_text, THREATENING_KEYWORDS);
    let racial_matches = matched_terms(&lower_text, RACIAL_KEYWORDS);

    let mut is_harassment = false;
    let mut harassment_type = "None".to_string();
    let mut severity = Severity::Low;
    let mut confidence = 0.0;
    let mut keywords: Vec<String> = Vec::new();

    if !racial_matches.is_empty() {
        let count = racial_matches.len();
        is_harassment = true;
        harassment_type = "Verbal Harassment (Racial)".to_string();
        severity = if count > 1 {
            Severity::High
        } else {
            Severity::Medium
        };
        confidence = (0.7 + count as f64 * 0.1).min(0.95);
        keywords = racial_matches;
    } else if !threatening_matches.is_empty() {
        let count = threatening_matches.len();
        is_harassment = true;
        harassment_type = "Intimidation".to_string();
        severity = if count > 2 {
            Severity::High
        } else {
            Severity::Medium
        };
        confidence = (0.6 + count as f64 * 0.15).min(0.9);
        keywords = threatening_matches;
    } else if sexual_matches.len() > 2 {
        let count = sexual_matches.len();
        is_harassment = true;
        harassment_type = "Sexual Harassment".to_string();
        severity = if count > 4 {
            Severity::High
        } else {
            Severity::Medium
        };
        confidence = (0.5 + count as f64 * 0.1).min(0.85);
        keywords = sexual_matches;
    } else if general_matches.len() > 1 {
        let count = general_matches.len();
        is_harassment = true;
        harassment_type = "Verbal Harassment".to_string();
        severity = if count > 3 {
            Severity::Medium
        } else {
            Severity::Low
        };
        confidence = (0.4 + count as f64 * 0.1).min(0.8);
        keywords = general_matches;
    }

    // Context-based detection when no keyword set triggered. The raw
    // confidence here is intentionally uncapped; the validator clamps it
    // before the result reaches the caller.
    if !is_harassment {
        let context_matches = matched_terms(&lower_text, OFFENSIVE_CONTEXT);
        if !context_matches.is_empty() {
            is_harassment = true;
            harassment_type = "Verbal Harassment".to_string();
            severity = Severity::Low;
            confidence = 0.3 + context_matches.len() as f64 * 0.1;
            keywords = context_matches;
        }
    }

    let description = if is_harassment {
        format!(
            "This text contains {} elements that may constitute harassment under NSW law. \
             The content includes offensive language and/or threatening behavior.",
            harassment_type.to_lowercase()
        )
    } else {
        "This text does not appear to contain clear harassment elements based on keyword analysis."
            .to_string()
    };

    let legal_implications = if is_harassment {
        let act = if harassment_type.contains("Sexual") || harassment_type.contains("Racial") {
            "Anti-Discrimination Act 1977"
        } else {
            "Summary Offences Act 1988"
        };
        format!("May violate NSW {}", act)
    } else {
        "No immediate legal concerns identified.".to_string()
    };

    let recommended_actions = if is_harassment {
        HARASSMENT_ACTIONS
    } else {
        NON_HARASSMENT_ACTIONS
    };

    KeywordClassification {
        is_harassment,
        confidence,
        harassment_type,
        severity,
        keywords,
        description,
        legal_implications,
        recommended_actions: recommended_actions
            .iter()
            .map(|a| a.to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_no_harassment() {
        let result = classify("");
        assert!(!result.is_harassment);
        assert_eq!(result.harassment_type, "None");
        assert_eq!(result.severity, Severity::Low);
        assert_eq!(result.confidence, 0.0);
        assert!(result.keywords.is_empty());
        assert_eq!(result.recommended_actions.len(), 3);
    }

    #[test]
    fn no_signal_text_yields_no_harassment() {
        let result = classify("Hello, nice weather today");
        assert!(!result.is_harassment);
        assert_eq!(result.harassment_type, "None");
        assert_eq!(result.confidence, 0.0);
        assert!(result.keywords.is_empty());
        assert_eq!(
            result.legal_implications,
            "No immediate legal concerns identified."
        );
    }

    #[test]
    fn racial_terms_take_priority_over_threatening() {
        let result = classify("nigger and I will kill you");
        assert!(result.is_harassment);
        assert_eq!(result.harassment_type, "Verbal Harassment (Racial)");
        assert_eq!(result.severity, Severity::Medium);
        assert!((result.confidence - 0.8).abs() < 1e-9);
        assert_eq!(result.keywords, vec!["nigger"]);
    }

    #[test]
    fn racial_confidence_caps_at_095() {
        let result = classify("nigger kike spic chink gook");
        assert_eq!(result.harassment_type, "Verbal Harassment (Racial)");
        assert_eq!(result.severity, Severity::High);
        assert_eq!(result.confidence, 0.95);
        assert_eq!(result.keywords.len(), 5);
    }

    #[test]
    fn threatening_terms_classify_as_intimidation() {
        let result = classify("I will kill you and stab you with a knife");
        assert!(result.is_harassment);
        assert_eq!(result.harassment_type, "Intimidation");
        assert_eq!(result.severity, Severity::High);
        // three matches: 0.6 + 3 * 0.15 = 1.05, capped at 0.9
        assert_eq!(result.confidence, 0.9);
        assert_eq!(result.keywords, vec!["kill", "stab", "knife"]);
        assert_eq!(
            result.legal_implications,
            "May violate NSW Summary Offences Act 1988"
        );
    }

    #[test]
    fn single_threatening_term_is_medium_severity() {
        let result = classify("I will hurt you");
        assert_eq!(result.harassment_type, "Intimidation");
        assert_eq!(result.severity, Severity::Medium);
        assert!((result.confidence - 0.75).abs() < 1e-9);
    }

    #[test]
    fn sexual_classification_requires_more_than_two_matches() {
        // "touch" is the only sexual match and the only general match
        let result = classify("please do not touch");
        assert!(!result.is_harassment);
        assert_eq!(result.harassment_type, "None");
    }

    #[test]
    fn three_sexual_matches_classify_as_sexual_harassment() {
        let result = classify("let me kiss and touch your body");
        assert_eq!(result.harassment_type, "Sexual Harassment");
        assert_eq!(result.severity, Severity::Medium);
        assert!((result.confidence - 0.8).abs() < 1e-9);
        assert_eq!(result.keywords, vec!["kiss", "touch", "body"]);
        assert_eq!(
            result.legal_implications,
            "May violate NSW Anti-Discrimination Act 1977"
        );
    }

    #[test]
    fn five_sexual_matches_are_high_severity() {
        // "sexy" also contains "sex": substring matching counts both
        let result = classify("you are so hot and sexy, what a gorgeous body");
        assert_eq!(result.harassment_type, "Sexual Harassment");
        assert_eq!(result.severity, Severity::High);
        assert_eq!(result.confidence, 0.85);
        assert_eq!(result.keywords, vec!["sexy", "hot", "gorgeous", "body", "sex"]);
    }

    #[test]
    fn sexy_alone_classifies_as_general_verbal_harassment() {
        // substring matching gives two general matches ("sexy" and "sex"),
        // which clears the general threshold even though the sexual
        // threshold is not met
        let result = classify("you are sexy");
        assert!(result.is_harassment);
        assert_eq!(result.harassment_type, "Verbal Harassment");
        assert_eq!(result.severity, Severity::Low);
        assert!((result.confidence - 0.6).abs() < 1e-9);
        assert_eq!(result.keywords, vec!["sexy", "sex"]);
    }

    #[test]
    fn single_general_match_does_not_classify() {
        let result = classify("fuck off");
        assert!(!result.is_harassment);
        assert_eq!(result.harassment_type, "None");
    }

    #[test]
    fn multiple_general_matches_classify_as_verbal_harassment() {
        let result = classify("fuck off you stupid idiot");
        assert!(result.is_harassment);
        assert_eq!(result.harassment_type, "Verbal Harassment");
        assert_eq!(result.severity, Severity::Low);
        assert!((result.confidence - 0.7).abs() < 1e-9);
        assert_eq!(result.keywords, vec!["fuck", "idiot", "stupid"]);
    }

    #[test]
    fn substring_matching_is_intentionally_overeager() {
        // "classic" contains "ass"; paired with "idiot" it clears the
        // general threshold
        let result = classify("what a classic idiot");
        assert!(result.is_harassment);
        assert_eq!(result.harassment_type, "Verbal Harassment");
        assert_eq!(result.keywords, vec!["ass", "idiot"]);
    }

    #[test]
    fn offensive_context_detection_is_low_severity() {
        let result = classify("his jokes were inappropriate and made me uncomfortable");
        assert!(result.is_harassment);
        assert_eq!(result.harassment_type, "Verbal Harassment");
        assert_eq!(result.severity, Severity::Low);
        assert!((result.confidence - 0.5).abs() < 1e-9);
        assert_eq!(result.keywords, vec!["uncomfortable", "inappropriate"]);
    }

    #[test]
    fn context_confidence_is_uncapped_before_validation() {
        // seven context matches: 0.3 + 7 * 0.1 = 1.0, no branch-level cap
        let result = classify(
            "I was offended and uncomfortable, it was unwanted, inappropriate, \
             disgusting, vulgar and rude",
        );
        assert_eq!(result.harassment_type, "Verbal Harassment");
        assert!((result.confidence - 1.0).abs() < 1e-9);
        assert_eq!(result.keywords.len(), 7);
    }

    #[test]
    fn harassment_results_use_the_harassment_action_list() {
        let result = classify("fuck off you stupid idiot");
        assert_eq!(result.recommended_actions[0], "Document the incident immediately");
        assert_eq!(result.recommended_actions.len(), 4);
    }

    #[test]
    fn keyword_sets_contain_no_duplicates() {
        for set in [
            GENERAL_KEYWORDS,
            SEXUAL_KEYWORDS,
            THREATENING_KEYWORDS,
            RACIAL_KEYWORDS,
            OFFENSIVE_CONTEXT,
        ] {
            let mut seen = std::collections::HashSet::new();
            for term in set {
                assert!(seen.insert(term), "duplicate keyword: {}", term);
            }
        }
    }
}
