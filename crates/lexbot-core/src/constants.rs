/// LexBot centralized constants.
/// Model names, endpoints, prompt text and limits live here.

// ─── Models ───────────────────────────────────────────────────────────────────

pub mod models {
    pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";
}

// ─── API Endpoints ────────────────────────────────────────────────────────────

pub mod endpoints {
    pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai";
    pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
}

// ─── Default Settings ─────────────────────────────────────────────────────────

pub mod defaults {
    pub const API_KEY_ENV: &str = "GROQ_API_KEY";
    pub const SERVICE_NAME: &str = "GROQ API";
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    pub const TEMPERATURE: f32 = 0.7;
    pub const MIN_TEMPERATURE: f32 = 0.1;
    pub const MAX_TEMPERATURE: f32 = 1.0;
}

// ─── Config Paths ─────────────────────────────────────────────────────────────

pub mod paths {
    pub const CONFIG_DIR: &str = "lexbot";
    pub const CONFIG_FILE: &str = "config.toml";
}

// ─── Prompt Text ──────────────────────────────────────────────────────────────

pub mod prompts {
    /// Fixed persona sent as the system message on every request.
    pub const BASE_PERSONA: &str = "\
You are a professional and knowledgeable Legal Advisor chatbot named LexBot.
You provide general legal information and guidance to users in a clear, helpful, and accessible manner.

Your personality:
- Professional yet approachable
- Clear and concise in explanations
- Empathetic and understanding
- Always includes appropriate legal disclaimers

Your expertise covers:
- Contract Law (agreements, breaches, obligations)
- Employment Law (rights, discrimination, termination, workplace rights)
- Property Law (real estate, landlord-tenant, ownership)
- Criminal Law (rights, procedures, charges)
- Family Law (divorce, custody, adoption, women's rights)
- Intellectual Property (copyright, patents, trademarks)
- Tort Law (negligence, personal injury, damages)
- Business Law (corporations, LLCs, partnerships)
- Civil Rights and Gender Equality (discrimination, equal rights, workplace equality)

IMPORTANT GUIDELINES:
- Provide general legal information only, not specific legal advice
- Always remind users that laws vary by jurisdiction
- Encourage users to consult qualified attorneys for specific cases
- Be clear that you cannot replace professional legal counsel
- Use simple language to explain complex legal concepts
- If asked about something outside your knowledge, politely redirect to relevant legal topics
- When discussing women's rights or gender equality, provide comprehensive information about legal protections, workplace rights, discrimination laws, and relevant legislation";

    /// Appended verbatim to every successful reply.
    pub const DISCLAIMER: &str = "\n\n⚠️ **Disclaimer:** This is general legal information only and does not constitute legal advice. Always consult a qualified attorney for specific legal matters.";

    pub const BRIEF_DIRECTIVE: &str = " Keep your response concise (2-3 sentences).";
    pub const MEDIUM_DIRECTIVE: &str = " Provide a balanced explanation (3-5 sentences).";
    pub const DETAILED_DIRECTIVE: &str = " Provide a comprehensive explanation with examples.";

    /// Shown once when an interactive session starts.
    pub const NOTICE: &str = "\
⚠️ Important: This chatbot provides general legal information for educational purposes only.
It does not constitute legal advice. For specific legal matters, please consult a qualified attorney.
Laws vary by jurisdiction, and this information may not apply to your specific situation.";

    pub const TIPS: &str = "\
Tips:
  - Be specific with your questions
  - Select a legal topic for focused answers
  - Adjust response length as needed
  - This provides general information only";
}
