//! SubRip generator

use crate::caption::Caption;

/// Generate SubRip text: one numbered block per caption, starting at 1
pub fn render_srt(captions: &[Caption]) -> String {
    let mut output = String::new();

    for (i, caption) in captions.iter().enumerate() {
        output.push_str(&format!("{}\n", i + 1));
        output.push_str(&caption.render_srt_body());
        output.push('\n');
    }

    output
}
