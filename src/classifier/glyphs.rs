use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    static ref DEFAULT_GLYPHS: HashMap<&'static str, &'static str> = {
        let mut glyphs = HashMap::new();
        glyphs.insert("anger", "\u{1F624}");
        glyphs.insert("disgust", "\u{1F922}");
        glyphs.insert("fear", "\u{1F628}");
        glyphs.insert("joy", "\u{1F638}");
        glyphs.insert("surprise", "\u{1F63B}");
        glyphs.insert("neutral", "\u{1F636}");
        glyphs.insert("sadness", "\u{1F62D}");
        glyphs.insert("shame", "\u{1FAE3}");
        glyphs
    };
}

/// Maps a class label to a short display glyph.
///
/// The lookup is total: labels without an entry resolve to the default glyph,
/// so a prediction can always be presented even when the artifact's label set
/// diverges from the table.
#[derive(Debug, Clone)]
pub struct GlyphTable {
    glyphs: HashMap<String, String>,
    default_glyph: String,
}

impl GlyphTable {
    /// Creates a glyph table from an explicit mapping and a default glyph
    /// used for labels absent from the mapping.
    pub fn new(glyphs: HashMap<String, String>, default_glyph: impl Into<String>) -> Self {
        Self {
            glyphs,
            default_glyph: default_glyph.into(),
        }
    }

    /// Display glyph for a label, falling back to the default glyph.
    pub fn glyph(&self, label: &str) -> &str {
        self.glyphs
            .get(label)
            .map(String::as_str)
            .unwrap_or(&self.default_glyph)
    }
}

impl Default for GlyphTable {
    /// The emotion emoji table, with the neutral face as the fallback.
    fn default() -> Self {
        let glyphs = DEFAULT_GLYPHS
            .iter()
            .map(|(&label, &glyph)| (label.to_string(), glyph.to_string()))
            .collect();
        Self {
            glyphs,
            default_glyph: "\u{1F636}".to_string(),
        }
    }
}
