// Prompt constants for the recommendation generator.

/// Recommendation prompt template.
/// Replace `{stress_label}` and `{assessment_json}` before sending.
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"A user has a predicted stress level of '{stress_label}'.
Based on their assessment data below, provide 5-7 detailed, practical, and encouraging recommendations.

Important formatting requirements:
- Use simple bullet points (•) at the start of each recommendation
- Make each recommendation 2-3 sentences long with specific, actionable advice
- Include practical implementation steps and explain why each recommendation helps
- Keep the tone supportive and encouraging
- Do NOT use any markdown formatting like **bold** or headers
- Format as plain text with bullet points only

Focus on these key areas based on their stress level:
- Stress management techniques and coping strategies
- Physical wellness and lifestyle improvements
- Mental health support and emotional regulation
- Social support and relationship building
- Academic/work-life balance and productivity
- Sleep, nutrition, and daily routine optimization

User Assessment Data:
{assessment_json}

Provide comprehensive yet easy-to-follow recommendations that address their specific stress factors."#;
