//! Prompt construction for AI-generated commit messages.

/// Maximum length for each sanitized repository section.
const MAX_SECTION_LENGTH: usize = 10_000;

/// Build the prompt for generating a commit message.
///
/// Embeds the porcelain status and the staged diff-stat, followed by the
/// fixed rules the message has to follow.
pub fn build_commit_prompt(status: &str, diff_stat: &str) -> String {
    let status = sanitize_section(status, MAX_SECTION_LENGTH);
    let diff_stat = sanitize_section(diff_stat, MAX_SECTION_LENGTH);

    format!(
        r#"Generate a concise git commit message for the following changes.

Git status:
{status}

Diff summary:
{diff_stat}

Rules:
- Keep the title under 50 characters
- Use a conventional commit prefix (feat:, fix:, docs:, style:, refactor:, test:, chore:)
- Be concise and describe what changed
- Return only the commit message, nothing else"#,
        status = status.trim_end(),
        diff_stat = diff_stat.trim_end(),
    )
}

/// Sanitize command output for inclusion in the prompt.
///
/// Removes control characters (except newlines and tabs) and ANSI escape
/// sequences, then truncates to `max_len` bytes on a char boundary.
pub fn sanitize_section(text: &str, max_len: usize) -> String {
    let mut result = remove_ansi_escapes(text);
    result.retain(|c| !c.is_control() || c == '\n' || c == '\t');

    if result.len() > max_len {
        let mut end = max_len;
        while end > 0 && !result.is_char_boundary(end) {
            end -= 1;
        }
        result.truncate(end);
    }

    result
}

/// Strip `ESC [ ... <final byte>` sequences such as colour codes.
fn remove_ansi_escapes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for next in chars.by_ref() {
                if ('@'..='~').contains(&next) {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    out
}
