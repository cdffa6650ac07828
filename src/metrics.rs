use crate::font::Font;
use crate::standard_fonts::{self, StandardFont};
use crate::{FitError, Pt};
use id_arena::{Arena, Id};
use std::collections::HashMap;

/// Measures text without rendering it.
///
/// Implementations must be deterministic: the same family, size and text must
/// always produce the same measurement. A family the provider doesn't know
/// should be reported as [`FitError::FontMetricsUnavailable`].
pub trait FontMetrics {
    /// Width of `text` set on a single line at `size`
    fn measure(&self, family: &str, size: Pt, text: &str) -> Result<Pt, FitError>;

    /// Height taken up by one line of text at `size`
    fn line_height(&self, family: &str, size: Pt) -> Result<Pt, FitError>;

    /// Distance from the top of a line to its baseline at `size`
    fn ascent(&self, family: &str, size: Pt) -> Result<Pt, FitError>;
}

impl<M: FontMetrics + ?Sized> FontMetrics for &M {
    fn measure(&self, family: &str, size: Pt, text: &str) -> Result<Pt, FitError> {
        (**self).measure(family, size, text)
    }

    fn line_height(&self, family: &str, size: Pt) -> Result<Pt, FitError> {
        (**self).line_height(family, size)
    }

    fn ascent(&self, family: &str, size: Pt) -> Result<Pt, FitError> {
        (**self).ascent(family, size)
    }
}

#[derive(Debug, Copy, Clone)]
enum Registered {
    Standard(&'static StandardFont),
    Loaded(Id<Font>),
}

#[derive(Copy, Clone)]
enum Face<'a> {
    Standard(&'static StandardFont),
    Loaded(&'a Font),
}

impl Face<'_> {
    fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        match self {
            Face::Standard(f) => f.width_of_text(text, size),
            Face::Loaded(f) => f.width_of_text(text, size),
        }
    }

    fn line_height(&self, size: Pt) -> Pt {
        match self {
            Face::Standard(f) => f.line_height(size),
            Face::Loaded(f) => f.line_height(size),
        }
    }

    fn ascent(&self, size: Pt) -> Pt {
        match self {
            Face::Standard(f) => f.ascent(size),
            Face::Loaded(f) => f.ascent(size),
        }
    }
}

/// The fonts available for fitting, addressed by family name.
///
/// The standard PDF fonts (and their AcroForm resource names such as `Helv`) are
/// always available; TrueType / OpenType fonts can be added on top and are
/// looked up first, so a loaded font can shadow a standard one.
#[derive(Default)]
pub struct FontLibrary {
    pub fonts: Arena<Font>,
    families: HashMap<String, Registered>,
}

impl FontLibrary {
    pub fn new() -> FontLibrary {
        FontLibrary::default()
    }

    /// Register a loaded font under its family name and its full name
    pub fn add_font(&mut self, font: Font) -> Result<Id<Font>, FitError> {
        let family = font.family().ok_or(FitError::MissingFamilyName)?;
        let full_name = font.name();

        let id = self.add_font_as(family, font);
        if let Some(full_name) = full_name {
            self.families.insert(full_name, Registered::Loaded(id));
        }
        Ok(id)
    }

    /// Register a loaded font under an explicit name, typically the resource name
    /// the form's default appearance uses for it
    pub fn add_font_as<S: Into<String>>(&mut self, name: S, font: Font) -> Id<Font> {
        let id = self.fonts.alloc(font);
        let name = name.into();
        log::debug!("registered font `{name}`");
        self.families.insert(name, Registered::Loaded(id));
        id
    }

    /// Make `alias` refer to the same font as `target`
    pub fn alias<A: Into<String>>(&mut self, alias: A, target: &str) -> Result<(), FitError> {
        let registered = self.registered(target)?;
        self.families.insert(alias.into(), registered);
        Ok(())
    }

    /// Whether a family name resolves to a font
    pub fn contains(&self, family: &str) -> bool {
        self.registered(family).is_ok()
    }

    fn registered(&self, family: &str) -> Result<Registered, FitError> {
        if let Some(registered) = self.families.get(family) {
            return Ok(*registered);
        }
        standard_fonts::lookup(family)
            .map(Registered::Standard)
            .ok_or_else(|| FitError::FontMetricsUnavailable(family.to_string()))
    }

    fn face(&self, family: &str) -> Result<Face<'_>, FitError> {
        Ok(match self.registered(family)? {
            Registered::Standard(f) => Face::Standard(f),
            Registered::Loaded(id) => Face::Loaded(&self.fonts[id]),
        })
    }
}

impl FontMetrics for FontLibrary {
    fn measure(&self, family: &str, size: Pt, text: &str) -> Result<Pt, FitError> {
        Ok(self.face(family)?.width_of_text(text, size))
    }

    fn line_height(&self, family: &str, size: Pt) -> Result<Pt, FitError> {
        Ok(self.face(family)?.line_height(size))
    }

    fn ascent(&self, family: &str, size: Pt) -> Result<Pt, FitError> {
        Ok(self.face(family)?.ascent(size))
    }
}
