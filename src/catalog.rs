//! Compiled-in style presets and the placeholder images served when no
//! generation happens.

use crate::models::{ImageSize, StyleDefinition, StyleSummary, StylesResponse};

pub const DEMO_DEFAULT_KEY: &str = "default";

pub static STYLES: [StyleDefinition; 15] = [
    StyleDefinition {
        id: "business",
        display_name: "Business",
        prompt_fragment: "professional corporate style, clean lines, modern",
    },
    StyleDefinition {
        id: "creative",
        display_name: "Creative",
        prompt_fragment: "artistic, imaginative, colorful, abstract",
    },
    StyleDefinition {
        id: "minimalist",
        display_name: "Minimalist",
        prompt_fragment: "minimalist design, simple lines, monochrome",
    },
    StyleDefinition {
        id: "infographic",
        display_name: "Infographic",
        prompt_fragment: "infographic style, data visualization",
    },
    StyleDefinition {
        id: "playful",
        display_name: "Playful",
        prompt_fragment: "fun, cartoonish, bright colors, friendly",
    },
    StyleDefinition {
        id: "3d_render",
        display_name: "3D Render",
        prompt_fragment: "3D render, Blender style, cinematic lighting",
    },
    StyleDefinition {
        id: "watercolor",
        display_name: "Watercolor",
        prompt_fragment: "watercolor painting, soft edges, artistic",
    },
    StyleDefinition {
        id: "cyberpunk",
        display_name: "Cyberpunk",
        prompt_fragment: "cyberpunk aesthetic, neon lights, futuristic",
    },
    StyleDefinition {
        id: "flat_design",
        display_name: "Flat Design",
        prompt_fragment: "flat design, vector illustration",
    },
    StyleDefinition {
        id: "oil_painting",
        display_name: "Oil Painting",
        prompt_fragment: "oil painting style, textured brush strokes",
    },
    StyleDefinition {
        id: "pixel_art",
        display_name: "Pixel Art",
        prompt_fragment: "pixel art, retro gaming style, 8-bit",
    },
    StyleDefinition {
        id: "anime",
        display_name: "Anime",
        prompt_fragment: "anime style, Japanese animation, vibrant colors",
    },
    StyleDefinition {
        id: "sketch",
        display_name: "Sketch",
        prompt_fragment: "sketch drawing, pencil lines, artistic",
    },
    StyleDefinition {
        id: "vintage",
        display_name: "Vintage",
        prompt_fragment: "vintage style, retro aesthetic, nostalgic",
    },
    StyleDefinition {
        id: "fantasy",
        display_name: "Fantasy",
        prompt_fragment: "fantasy art, magical creatures, mystical",
    },
];

/// Placeholder image per style. Styles without an entry use `default`.
pub static DEMO_IMAGES: [(&str, &str); 6] = [
    (
        DEMO_DEFAULT_KEY,
        "https://images.unsplash.com/photo-1519681393784-d120267933ba",
    ),
    (
        "fantasy",
        "https://images.unsplash.com/photo-1519681393784-d120267933ba",
    ),
    (
        "business",
        "https://images.unsplash.com/photo-1497366216548-37526070297c",
    ),
    (
        "cyberpunk",
        "https://images.unsplash.com/photo-1550745165-9bc0b252726f",
    ),
    (
        "watercolor",
        "https://images.unsplash.com/photo-1579783902614-a3fb3927b6a5",
    ),
    (
        "minimalist",
        "https://images.unsplash.com/photo-1494438639946-1ebd1d20bf85",
    ),
];

/// Case-sensitive exact lookup.
pub fn find_style(id: &str) -> Option<&'static StyleDefinition> {
    STYLES.iter().find(|style| style.id == id)
}

pub fn style_ids() -> Vec<String> {
    STYLES.iter().map(|style| style.id.to_string()).collect()
}

pub fn styles_response() -> StylesResponse {
    let styles: Vec<StyleSummary> = STYLES.iter().map(StyleSummary::from).collect();
    StylesResponse {
        total: styles.len(),
        styles,
    }
}

fn demo_base_url(style_id: &str) -> &'static str {
    let lookup = |key: &str| {
        DEMO_IMAGES
            .iter()
            .find(|(id, _)| *id == key)
            .map(|(_, url)| *url)
    };

    lookup(style_id)
        .or_else(|| lookup(DEMO_DEFAULT_KEY))
        .unwrap_or(DEMO_IMAGES[0].1)
}

/// Placeholder URL for a style, cropped to the requested dimensions.
pub fn demo_image_url(style_id: &str, size: ImageSize) -> String {
    format!(
        "{}?w={}&h={}&fit=crop",
        demo_base_url(style_id),
        size.width,
        size.height
    )
}
