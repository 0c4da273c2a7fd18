//! Style-guide rule text and prompt construction.
//!
//! The rule prose is process-wide constant data; a system prompt is the
//! shared rules, the rules for the validated content type, and the response
//! contract the downstream service must follow.

use std::fmt;

/// The kinds of copy the style checker accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    ErrorMessage,
    UiLabel,
    HelpDocumentation,
}

/// All accepted content types, in the order they are listed to callers.
pub const CONTENT_TYPES: [ContentType; 3] = [
    ContentType::ErrorMessage,
    ContentType::UiLabel,
    ContentType::HelpDocumentation,
];

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::ErrorMessage => "error-message",
            ContentType::UiLabel => "ui-label",
            ContentType::HelpDocumentation => "help-documentation",
        }
    }

    /// Parse the wire value; `None` for anything outside the fixed set.
    pub fn parse(value: &str) -> Option<Self> {
        CONTENT_TYPES.iter().copied().find(|ct| ct.as_str() == value)
    }

    /// The comma-separated list used in validation errors.
    pub fn valid_values() -> String {
        CONTENT_TYPES
            .iter()
            .map(|ct| ct.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn rules(&self) -> &'static str {
        match self {
            ContentType::ErrorMessage => ERROR_MESSAGE_RULES,
            ContentType::UiLabel => UI_LABEL_RULES,
            ContentType::HelpDocumentation => HELP_DOCUMENTATION_RULES,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the system instruction for one request.
pub fn build_system_prompt(content_type: ContentType) -> String {
    format!(
        "You are a Microsoft Style Guide expert editor. Your job is to revise copy to conform \
         to the Microsoft Writing Style Guide and explain every change you make.\n\
         {SHARED_RULES}\n{}\n{TASK_AND_CONTRACT}",
        content_type.rules()
    )
}

const SHARED_RULES: &str = r#"
## Core Microsoft Style Guide Principles
1. **Use bigger ideas, fewer words.** Shorter is always better. Cut every excess word.
2. **Write like you speak.** Read your text aloud. If it sounds stiff or formal, rewrite it.
3. **Project friendliness.** Use contractions: it's, you'll, you're, we're, let's.
4. **Get to the point fast.** Lead with what's most important. Front-load keywords for scanning.
5. **Sentence-style capitalization.** Capitalize only the first word and proper nouns. Never Use Title Case Like This.
6. **Skip end punctuation** on headings, UI labels, and short list items (three or fewer words).
7. **Use the Oxford comma.** In lists of three or more: "Android, iOS, and Windows" not "Android, iOS and Windows."
8. **No spaces around em dashes.** Use "pipelines—logical groups" not "pipelines — logical groups."
9. **Revise weak writing.** Start with verbs. Cut "you can," "there is," "there are," "please," and "in order to."
10. **Use active voice.** "Save the file" not "The file should be saved." Address the user as "you."
"#;

const ERROR_MESSAGE_RULES: &str = r#"
## Error Message Guidelines (Microsoft Style Guide)
- **Don't blame the user.** Say "Something went wrong" not "You did something wrong."
- **Be specific about what happened** and what the user can do next. Every error needs a clear next step.
- **Use plain language.** "Can't connect to the server" not "HTTP 503 Service Unavailable."
- **Keep it short.** One to two sentences max. Lead with the problem, follow with the action.
- **Don't use "Oops," "Uh oh," or cutesy language.** Be direct and helpful, not playful.
- **Don't use "please."** Just tell the user what to do: "Try again" not "Please try again."
- **Don't say "Error" or "Error occurred."** Describe the actual problem.
- **Use sentence-style capitalization** for the error text.
- **Don't use exclamation marks** in error messages.
- **Don't use technical jargon** unless the audience is developers. Avoid error codes in user-facing copy.
"#;

const UI_LABEL_RULES: &str = r#"
## UI Label & Button Text Guidelines (Microsoft Style Guide)
- **Use sentence-style capitalization.** "Save changes" not "Save Changes."
- **Keep labels short.** One to three words for buttons. Be ruthlessly concise.
- **Start buttons with a verb.** "Save," "Delete," "Create account" — not "Saving" or "Your account."
- **Be specific.** "Save changes" is better than "OK." "Delete project" is better than "Delete."
- **Don't use "Click here"** or "Click." Use the action: "Learn more" or "See details."
- **Avoid jargon and abbreviations** unless space-constrained and the audience knows them.
- **Don't use periods** on buttons, labels, menu items, or headings.
- **Don't use ampersands (&).** Write "and" unless space is extremely limited.
- **Use parallel construction** in groups of related labels or menu items.
- **Toggle labels** should describe what the setting does, not the current state: "Show notifications" not "Notifications are on."
"#;

const HELP_DOCUMENTATION_RULES: &str = r#"
## Help Documentation Guidelines (Microsoft Style Guide)
- **Use second person ("you").** Address the reader directly: "You can save..." not "Users can save..."
- **Use active voice.** "Select the file" not "The file can be selected."
- **Write in present tense.** "The dialog box appears" not "The dialog box will appear."
- **Use numbered steps for procedures.** Start each step with a verb. One action per step.
- **Don't use "please" or "kindly."** Just tell the user what to do.
- **Front-load important info.** Put the goal before the method: "To save your work, select File > Save" not "Select File > Save to save your work."
- **Use bold for UI elements** the user interacts with: "Select **Save**."
- **Don't hedge.** "Select the file" not "You might want to select the file."
- **Keep paragraphs short.** Three to five sentences max. Use headings and lists to break up walls of text.
- **Define acronyms on first use.** Write the full phrase, then the acronym in parentheses.
"#;

const TASK_AND_CONTRACT: &str = r#"
## Your Task
1. Revise the user's copy to conform to the Microsoft Writing Style Guide rules above.
2. For each change, cite the specific rule and explain why the original violated it.
3. If the copy already conforms to the style guide, say so — don't make changes for the sake of it.

## Response Format
Respond with valid JSON only. No markdown, no code fences, no explanation outside the JSON.

{
  "revised": "The complete rewritten copy.",
  "changes": [
    {
      "original": "The exact phrase you changed",
      "revised": "What you changed it to",
      "rule": "Short rule name (e.g., 'Active voice', 'Sentence-style capitalization')",
      "explanation": "One sentence explaining why this change was needed per the Microsoft Style Guide."
    }
  ],
  "summary": "One to two sentence overall assessment of the copy quality and key issues found."
}

If the copy is already style-guide compliant, return:
{
  "revised": "(same as input)",
  "changes": [],
  "summary": "This copy already follows the Microsoft Writing Style Guide. No changes needed."
}"#;
