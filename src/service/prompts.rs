//! Prompt construction for the harassment analysis completion

/// Build the analysis prompt for a raw incident description
///
/// The prompt pins the exact JSON shape of [`crate::model::ClassificationResult`]
/// so the completion can be parsed without a structured-output API.
pub fn build_analysis_prompt(text: &str) -> String {
    format!(
        r#"You are an AI legal analyst specializing in Australian NSW law and harassment detection. Analyze the following text for potential harassment:

Text: "{text}"

Please analyze this text considering:
1. NSW Crimes Act 1900
2. NSW Anti-Discrimination Act 1977
3. NSW Summary Offences Act 1988
4. Common law principles of harassment

Provide your analysis in this exact JSON format:
{{
  "isHarassment": true/false,
  "confidence": 0.0-1.0,
  "harassmentType": "Verbal Harassment/Sexual Harassment/Stalking/Intimidation/None",
  "severity": "low/medium/high",
  "keywords": ["word1", "word2"],
  "description": "Brief analysis of why this is/isn't harassment",
  "legalImplications": "Specific NSW law implications",
  "recommendedActions": ["action1", "action2"],
  "punishmentRange": {{
    "min": "Minimum penalty (e.g., $500 fine)",
    "max": "Maximum penalty (e.g., $100,000 compensation + 5 years imprisonment)",
    "details": "Detailed explanation of penalty range"
  }},
  "lawSection": {{
    "act": "Full name of the Act",
    "section": "Specific section number and title",
    "link": "Direct link to NSW legislation database",
    "description": "What this section covers"
  }}
}}

Focus on:
- Unwanted, offensive, or threatening behavior
- Sexual harassment and discrimination
- Stalking and intimidation
- Public order offenses
- NSW-specific legal context
- Exact punishment ranges and law sections

Be thorough but concise."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_incident_text() {
        let prompt = build_analysis_prompt("he keeps following me home");
        assert!(prompt.contains("Text: \"he keeps following me home\""));
        assert!(prompt.contains("\"isHarassment\": true/false"));
        assert!(prompt.contains("NSW Summary Offences Act 1988"));
    }
}
