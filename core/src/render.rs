
use std::io::Write;

use anyhow::Result;
use log::trace;

/// A renderer chain.
///
/// `Software` and `Hardware` are base renderers; the other variants are
/// decorators, each owning exactly one inner renderer. Chains are assembled
/// at construction time with the wrap helpers. Replacing a player's renderer
/// swaps the whole chain, it does not splice a new base under existing
/// decorators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Renderer {
    /// Software (CPU) base renderer
    Software,
    /// Hardware-accelerated base renderer
    Hardware,
    /// Stamps a watermark line after the inner renderer
    Watermark { text: String, inner: Box<Renderer> },
    /// Adds a subtitle line after the inner renderer
    Subtitle { text: String, inner: Box<Renderer> },
    /// Reports an equalizer profile after the inner renderer
    Equalizer { profile: String, inner: Box<Renderer> },
}

impl Renderer {
    /// Wrap this renderer with a watermark decorator.
    pub fn watermark(self, text: impl Into<String>) -> Self {
        Self::Watermark {
            text: text.into(),
            inner: Box::new(self),
        }
    }

    /// Wrap this renderer with a subtitle decorator.
    pub fn subtitle(self, text: impl Into<String>) -> Self {
        Self::Subtitle {
            text: text.into(),
            inner: Box::new(self),
        }
    }

    /// Wrap this renderer with an equalizer decorator.
    pub fn equalizer(self, profile: impl Into<String>) -> Self {
        Self::Equalizer {
            profile: profile.into(),
            inner: Box::new(self),
        }
    }

    /// Render one piece of media text to `out`.
    ///
    /// Every decorator delegates to its inner renderer first and writes its
    /// own line afterwards: the base line comes first, then the decorator
    /// lines in reverse wrap order (innermost-wrapped first).
    pub fn render(&self, data: &str, out: &mut dyn Write) -> Result<()> {
        match self {
            Self::Software => {
                trace!("Software render of {data:?}");
                writeln!(out, "[Software] Rendering: {data}")?;
            }
            Self::Hardware => {
                trace!("Hardware render of {data:?}");
                writeln!(out, "[Hardware] Rendering: {data}")?;
            }
            Self::Watermark { text, inner } => {
                inner.render(data, out)?;
                writeln!(out, "[Watermark] Applied: {text}")?;
            }
            Self::Subtitle { text, inner } => {
                inner.render(data, out)?;
                writeln!(out, "[Subtitle] {text}")?;
            }
            Self::Equalizer { profile, inner } => {
                inner.render(data, out)?;
                writeln!(out, "[Equalizer] Applied: {profile}")?;
            }
        }
        Ok(())
    }
}
