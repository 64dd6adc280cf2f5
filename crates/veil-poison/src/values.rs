use crate::rng::TokenRng;

/// Placeholder recorded in place of the real value we never saw.
pub const OBFUSCATED_PLACEHOLDER: &str = "***obfuscated***";

/// Fabricate a replacement value shaped like what the named tracker would
/// have set, so the injected data blends into the tracker's pipeline.
pub(crate) fn false_tracking_value(rng: &mut TokenRng, cookie_name: &str) -> String {
    if cookie_name.contains("_ga") {
        format!(
            "GA1.2.{}.{}",
            rng.in_range(100_000_000, 999_999_999),
            rng.in_range(1_600_000_000, 1_700_000_000)
        )
    } else if cookie_name.contains("_fb") {
        format!(
            "fb.1.{}.{}",
            rng.in_range(1_600_000_000, 1_700_000_000),
            rng.in_range(100_000_000, 999_999_999)
        )
    } else if cookie_name.contains("doubleclick") {
        rng.in_range(100_000_000_000_000_000, 999_999_999_999_999_999)
            .to_string()
    } else {
        rng.token(32)
    }
}

pub(crate) fn false_canvas_signature(rng: &mut TokenRng) -> String {
    const SIGNATURES: &[&str] = &[
        "chaos_pixel_matrix_disrupted_2d47a8c3",
        "liberation_render_scrambled_f39b2e71",
        "wildflower_canvas_obfuscated_8c4d91a2",
        "moonlight_graphics_confused_1e6f3b89",
    ];
    rng.pick(SIGNATURES).to_string()
}

pub(crate) fn false_ip_data(rng: &mut TokenRng) -> String {
    let local = match rng.in_range(0, 2) {
        0 => format!("192.168.{}.{}", rng.in_range(1, 255), rng.in_range(1, 255)),
        1 => format!("10.0.{}.{}", rng.in_range(1, 255), rng.in_range(1, 255)),
        _ => format!("172.16.{}.{}", rng.in_range(1, 255), rng.in_range(1, 255)),
    };
    format!("Local: {local}, Public: obfuscated")
}

pub(crate) fn false_audio_signature(rng: &mut TokenRng) -> String {
    const SIGNATURES: &[&str] = &[
        "audio_chaos_frequency_44100hz_disrupted",
        "sisterhood_sound_processing_scrambled",
        "enchanted_audio_context_obfuscated",
    ];
    rng.pick(SIGNATURES).to_string()
}

pub(crate) fn false_font_list(rng: &mut TokenRng) -> String {
    const FONT_LISTS: &[&str] = &[
        "Liberation Serif, Moon Sans, Wildflower Script, Disruption Mono",
        "Sisterhood Display, Chaos Typewriter, Enchantment Gothic",
        "Glitch Terminal, Feminist Futura, Rupture Regular",
    ];
    rng.pick(FONT_LISTS).to_string()
}

pub(crate) fn false_screen_data(rng: &mut TokenRng) -> String {
    const RESOLUTIONS: &[&str] = &["1920x1080", "1366x768", "1440x900", "1536x864", "1600x900"];
    format!("{} (randomized)", rng.pick(RESOLUTIONS))
}
