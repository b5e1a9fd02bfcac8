//! NSW legal information catalog
//!
//! Fixed table mapping a harassment category to its penalty range and
//! statute citation. Unknown categories (including "None") fall back to the
//! Verbal Harassment record; this is deliberate, not an error. The
//! "Stalking" entry is kept for completeness even though the keyword
//! classifier never emits it.

use crate::model::{LawSection, LegalInfo, PunishmentRange};

/// Look up the legal record for a harassment category
pub fn legal_info_for(harassment_type: &str) -> LegalInfo {
    match harassment_type {
        "Verbal Harassment (Racial)" => LegalInfo {
            punishment_range: PunishmentRange {
                min: "Apology and community service order".to_string(),
                max: "$100,000 compensation + injunctions + community service".to_string(),
                details: "Racial vilification under Anti-Discrimination Act carries significant \
                          civil penalties including compensation for emotional distress, \
                          injunctions to prevent further harassment, and community service orders."
                    .to_string(),
            },
            law_section: LawSection {
                act: "Anti-Discrimination Act 1977 (NSW) - Act No. 48 of 1977".to_string(),
                section: "Section 20C - Racial Vilification".to_string(),
                link: "https://www.legislation.nsw.gov.au/view/html/inforce/current/act-1977-048#sec.20C"
                    .to_string(),
                description: "Prohibits public acts that incite hatred, serious contempt, or \
                              severe ridicule of a person or group on the ground of race. This \
                              includes verbal harassment, written material, and public displays \
                              that promote racial hatred."
                    .to_string(),
            },
        },
        "Sexual Harassment" => LegalInfo {
            punishment_range: PunishmentRange {
                min: "Apology and training requirements".to_string(),
                max: "$100,000 compensation + injunctions + community service".to_string(),
                details: "Sexual harassment cases can result in significant compensation awards, \
                          injunctions to prevent future harassment, and mandatory training or \
                          community service orders."
                    .to_string(),
            },
            law_section: LawSection {
                act: "Anti-Discrimination Act 1977 (NSW) - Act No. 48 of 1977".to_string(),
                section: "Section 22A - Sexual Harassment".to_string(),
                link: "https://www.legislation.nsw.gov.au/view/html/inforce/current/act-1977-048#sec.22A"
                    .to_string(),
                description: "Prohibits unwelcome sexual advances, requests for sexual favors, or \
                              other conduct of a sexual nature that creates a hostile environment. \
                              Applies in employment, education, and provision of goods and services."
                    .to_string(),
            },
        },
        "Stalking" => LegalInfo {
            punishment_range: PunishmentRange {
                min: "Community service order + restraining order".to_string(),
                max: "5 years imprisonment + $5,500 fine".to_string(),
                details: "Stalking offenses can range from community service and restraining \
                          orders for first-time offenders to significant imprisonment and fines \
                          for serious cases."
                    .to_string(),
            },
            law_section: LawSection {
                act: "Crimes Act 1900 (NSW) - Act No. 40 of 1900".to_string(),
                section: "Section 562AB - Stalking or Intimidation".to_string(),
                link: "https://www.legislation.nsw.gov.au/view/html/inforce/current/act-1900-040#sec.562AB"
                    .to_string(),
                description: "Criminalizes following, watching, or contacting someone repeatedly \
                              in a way that causes fear or apprehension. This includes \
                              cyberstalking and physical surveillance that creates reasonable fear."
                    .to_string(),
            },
        },
        "Intimidation" => LegalInfo {
            punishment_range: PunishmentRange {
                min: "Community service order + restraining order".to_string(),
                max: "5 years imprisonment".to_string(),
                details: "Intimidation cases can result in community service and restraining \
                          orders for minor cases, escalating to imprisonment for serious threats \
                          causing fear of harm."
                    .to_string(),
            },
            law_section: LawSection {
                act: "Crimes Act 1900 (NSW) - Act No. 40 of 1900".to_string(),
                section: "Section 13 - Intimidation".to_string(),
                link: "https://www.legislation.nsw.gov.au/view/html/inforce/current/act-1900-040#sec.13"
                    .to_string(),
                description: "Criminalizes conduct that causes reasonable fear of physical or \
                              mental harm to another person. This includes threats, gestures, and \
                              behavior intended to intimidate or cause fear."
                    .to_string(),
            },
        },
        _ => LegalInfo {
            punishment_range: PunishmentRange {
                min: "Warning and apology".to_string(),
                max: "$1,100 fine or 6 months imprisonment".to_string(),
                details: "Verbal harassment under Summary Offences Act can result in warnings \
                          for minor cases, escalating to fines and imprisonment for serious or \
                          repeated offenses."
                    .to_string(),
            },
            law_section: LawSection {
                act: "Summary Offences Act 1988 (NSW) - Act No. 25 of 1988".to_string(),
                section: "Section 4A - Offensive Conduct".to_string(),
                link: "https://www.legislation.nsw.gov.au/view/html/inforce/current/act-1988-025#sec.4A"
                    .to_string(),
                description: "Prohibits offensive conduct in or near a public place that causes \
                              or is likely to cause offense to reasonable persons. This includes \
                              verbal abuse, threatening language, and behavior that disturbs \
                              public order."
                    .to_string(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn racial_category_maps_to_anti_discrimination_act() {
        let info = legal_info_for("Verbal Harassment (Racial)");
        assert_eq!(info.law_section.section, "Section 20C - Racial Vilification");
    }

    #[test]
    fn sexual_harassment_maps_to_section_22a() {
        let info = legal_info_for("Sexual Harassment");
        assert_eq!(info.law_section.section, "Section 22A - Sexual Harassment");
    }

    #[test]
    fn intimidation_maps_to_crimes_act_section_13() {
        let info = legal_info_for("Intimidation");
        assert_eq!(info.law_section.section, "Section 13 - Intimidation");
        assert_eq!(info.punishment_range.max, "5 years imprisonment");
    }

    #[test]
    fn stalking_keeps_its_own_record() {
        let info = legal_info_for("Stalking");
        assert_eq!(
            info.law_section.section,
            "Section 562AB - Stalking or Intimidation"
        );
    }

    #[test]
    fn unknown_categories_fall_back_to_verbal_harassment() {
        for key in ["None", "UnknownType", ""] {
            let info = legal_info_for(key);
            assert_eq!(info.law_section.section, "Section 4A - Offensive Conduct");
            assert_eq!(info.punishment_range.min, "Warning and apology");
        }
    }
}
