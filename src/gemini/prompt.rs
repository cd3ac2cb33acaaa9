//! Instruction text sent alongside the images.

pub const REFERENCE_STEERING_TEXT: &str =
    "Using the second image as a style reference, apply that hairstyle to the person in the first image.";

pub const DEFAULT_GOAL: &str = "Analyze the person's face shape and features. Generate a new hairstyle that perfectly suits them. Maintain the original face identity, lighting, and background.";

/// Prompt used in automatic design mode.
pub const AUTO_MODE_PROMPT: &str = "Analyze the face shape and recommend a highly suitable, modern, and attractive hairstyle. The new hairstyle should enhance the person's features.";

const REFERENCE_REQUIREMENT: &str =
    "- Use the reference image as the primary inspiration for the cut and color.";

/// Builds the final instruction: stylist preamble plus the caller's goal, or
/// [`DEFAULT_GOAL`] when the caller passed an empty string. Non-empty text is
/// used exactly as given.
pub fn compose_instruction(instruction: &str, has_reference: bool) -> String {
    let goal = if instruction.is_empty() {
        DEFAULT_GOAL
    } else {
        instruction
    };

    let mut lines = vec![
        "You are an expert professional hair stylist and image editor.".to_string(),
        "Task: Edit the first image provided.".to_string(),
        format!("Goal: {}", goal),
        "Requirements:".to_string(),
        "- Keep the person's facial features and identity EXACTLY the same.".to_string(),
        "- Preserve the original lighting and background.".to_string(),
        "- High realism, 8k resolution, photorealistic.".to_string(),
    ];
    if has_reference {
        lines.push(REFERENCE_REQUIREMENT.to_string());
    }
    lines.push(
        "- If no specific text instruction is given, choose a trendy, flattering style."
            .to_string(),
    );

    lines.join("\n")
}
