// Copyright 2026 the SF Symbols Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of a symbol font from the available sources.

use super::{
    bundle, AppBundles, BundleLocator, Font, FontDescriptor, SystemFontLookup, SystemFonts,
};
use core::fmt;
use std::path::Path;

/// Bundle identifier of the companion symbols application.
pub const COMPANION_BUNDLE_ID: &str = "com.apple.SFSymbols";

/// File name of the fallback font shipped inside the companion application.
pub const FALLBACK_FONT_NAME: &str = "SFSymbolsFallback.ttf";

/// Options for a resolver.
#[derive(Clone, Debug)]
pub struct ResolverOptions {
    /// If true, installed system fonts are searched for a matching family.
    ///
    /// The default value is true.
    pub system_fonts: bool,

    /// If true, installed copies of the companion application are searched
    /// for a fallback font.
    ///
    /// The default value is true.
    pub companion_app: bool,

    /// Bundle identifier of the companion application.
    pub bundle_identifier: String,

    /// File name of the fallback font inside the companion application.
    pub fallback_font_name: String,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            system_fonts: true,
            companion_app: true,
            bundle_identifier: COMPANION_BUNDLE_ID.into(),
            fallback_font_name: FALLBACK_FONT_NAME.into(),
        }
    }
}

/// A source a symbol font can be resolved from.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Candidate {
    /// A font file given by the caller.
    CustomLocation,
    /// An installed font family matching the descriptor.
    SystemFamily,
    /// The fallback font inside the companion application.
    CompanionApp,
}

impl Candidate {
    /// Candidates in the order they are tried.
    pub const ORDER: [Self; 3] = [Self::CustomLocation, Self::SystemFamily, Self::CompanionApp];
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CustomLocation => "custom location",
            Self::SystemFamily => "system font",
            Self::CompanionApp => "companion application",
        })
    }
}

/// Resolves symbol fonts, trying each [`Candidate`] in order.
///
/// Nothing is cached; every call to [`resolve`](Self::resolve) queries the
/// sources again.
pub struct Resolver<S = SystemFonts, B = AppBundles> {
    system: S,
    bundles: B,
    options: ResolverOptions,
}

impl Resolver {
    /// Creates a resolver over the platform's font and application
    /// directories.
    pub fn new(options: ResolverOptions) -> Self {
        Self::with_services(SystemFonts::new(), AppBundles::new(), options)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(ResolverOptions::default())
    }
}

impl<S: SystemFontLookup, B: BundleLocator> Resolver<S, B> {
    /// Creates a resolver with the given font lookup and bundle locator.
    pub fn with_services(system: S, bundles: B, options: ResolverOptions) -> Self {
        Self {
            system,
            bundles,
            options,
        }
    }

    /// Returns the options of this resolver.
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Resolves a symbol font.
    ///
    /// The font at `custom` is tried first when given, followed by an
    /// installed family matching `descriptor` and finally the fallback font
    /// of the companion application. The first source that yields a font
    /// with a readable catalog wins. Returns `None` if no source does.
    pub fn resolve(&mut self, custom: Option<&Path>, descriptor: &FontDescriptor) -> Option<Font> {
        let font = Candidate::ORDER
            .into_iter()
            .find_map(|candidate| self.try_candidate(candidate, custom, descriptor));
        if font.is_none() {
            log::info!("no symbol font available for {}", descriptor.family_name());
        }
        font
    }

    /// Attempts to build a font from a single candidate source.
    pub fn try_candidate(
        &mut self,
        candidate: Candidate,
        custom: Option<&Path>,
        descriptor: &FontDescriptor,
    ) -> Option<Font> {
        let font = match candidate {
            Candidate::CustomLocation => Font::from_path(custom?, descriptor),
            Candidate::SystemFamily => self.resolve_system(descriptor),
            Candidate::CompanionApp => self.resolve_companion_app(descriptor),
        };
        match &font {
            Some(font) => log::info!(
                "resolved symbol font from {candidate} with {} glyphs",
                font.len()
            ),
            None => log::debug!("no symbol font from {candidate}"),
        }
        font
    }

    fn resolve_system(&mut self, descriptor: &FontDescriptor) -> Option<Font> {
        if !self.options.system_fonts {
            return None;
        }
        let handle = self.system.find_family(
            &descriptor.family_name(),
            descriptor.weight.value(),
            descriptor.point_size,
        )?;
        Font::from_handle(handle, descriptor)
    }

    fn resolve_companion_app(&mut self, descriptor: &FontDescriptor) -> Option<Font> {
        if !self.options.companion_app {
            return None;
        }
        self.bundles
            .locate(&self.options.bundle_identifier)
            .into_iter()
            .filter_map(|app| bundle::find_resource(&app, &self.options.fallback_font_name))
            .find_map(|path| Font::from_path(&path, descriptor))
    }
}

impl<S, B> fmt::Debug for Resolver<S, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Resolves a symbol font using the platform's font and application
/// directories.
///
/// See [`Resolver::resolve`].
pub fn resolve(custom: Option<&Path>, descriptor: &FontDescriptor) -> Option<Font> {
    Resolver::default().resolve(custom, descriptor)
}
