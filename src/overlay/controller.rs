use std::collections::{BTreeMap, BTreeSet};

use crate::{
    assets::{
        decode::{DecodedImage, ImageDecoder, ImageSource},
        text::LabelFont,
    },
    compositor::{draw::Compositor, surface::Surface},
    foundation::{
        core::Generation,
        error::{AnnoviewError, AnnoviewResult},
    },
    model::analysis::AnalysisResult,
    overlay::opts::OverlayOpts,
};

/// A request to decode the source image for one annotation index of one generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecodeTicket {
    /// Generation the request belongs to.
    pub generation: Generation,
    /// Annotation index.
    pub index: usize,
}

/// Decode requests issued by one orchestration pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderPass {
    /// Generation current when the pass was issued.
    pub generation: Generation,
    /// One ticket per index that still needs drawing.
    pub requests: Vec<DecodeTicket>,
}

impl RenderPass {
    /// `true` when there is nothing to decode.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

/// Per-index state within the current generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotState {
    /// Decode requested, not completed.
    Pending,
    /// Drawn exactly once for this generation.
    Rendered,
    /// The view for this index was not mounted when decode completed; retried next pass.
    Detached,
    /// The image failed to decode; the surface keeps its prior state.
    DecodeFailed,
    /// The compositor rejected the draw; the surface keeps its prior state.
    DrawFailed,
}

/// Result of feeding one decode completion to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The surface was (re)drawn.
    Drawn,
    /// The ticket belongs to a superseded generation; nothing was written.
    Stale,
    /// The index was already drawn in this generation.
    AlreadyRendered,
    /// The index has no mounted view.
    SlotMissing,
    /// The ticket names an index the current result does not have.
    UnknownIndex,
    /// Decoding failed.
    DecodeFailed,
    /// Compositing failed.
    DrawFailed,
}

/// Coarse controller phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No image or no analysis result; no surfaces exist.
    Idle,
    /// At least one index is not drawn yet.
    Pending,
    /// Every index is drawn for the current generation.
    Rendered,
}

/// Explicit render state: `{ source, result, surfaces, generation }` plus the focused index.
///
/// Mutated only through [`OverlayController::set_inputs`] (and its shorthands), mount changes,
/// and [`OverlayController::complete_decode`]. Surfaces never outlive the generation that drew
/// them.
pub struct OverlayController {
    opts: OverlayOpts,
    compositor: Compositor,
    source: Option<ImageSource>,
    result: Option<AnalysisResult>,
    focused: usize,
    generation: Generation,
    mounted: BTreeSet<usize>,
    slots: Vec<SlotState>,
    surfaces: BTreeMap<usize, Surface>,
}

impl Default for OverlayController {
    fn default() -> Self {
        Self::with_font(OverlayOpts::default(), LabelFont::system_bold())
    }
}

impl OverlayController {
    /// Create a controller, loading the label font named by `opts`, or the system bold
    /// sans-serif face when none is named.
    pub fn new(opts: OverlayOpts) -> AnnoviewResult<Self> {
        let font = match opts.label_font.as_ref() {
            Some(path) => Some(LabelFont::from_path(path)?),
            None => LabelFont::system_bold(),
        };
        Ok(Self::with_font(opts, font))
    }

    /// Create a controller with an already loaded label font.
    pub fn with_font(opts: OverlayOpts, font: Option<LabelFont>) -> Self {
        let compositor = Compositor::new(opts.style.clone(), font);
        Self {
            opts,
            compositor,
            source: None,
            result: None,
            focused: 0,
            generation: Generation::default(),
            mounted: BTreeSet::new(),
            slots: Vec::new(),
            surfaces: BTreeMap::new(),
        }
    }

    /// Replace the `(source, result, focused)` tuple and issue the resulting pass.
    ///
    /// A change of image or result starts a new generation: all surfaces are dropped and every
    /// index is requested. A focus-only change keeps the generation and its surfaces and requests
    /// only indices not drawn yet. An unchanged tuple issues an empty pass.
    #[tracing::instrument(skip(self, source, result))]
    pub fn set_inputs(
        &mut self,
        source: Option<ImageSource>,
        result: Option<AnalysisResult>,
        focused: usize,
    ) -> RenderPass {
        let inputs_changed = source != self.source || result != self.result;
        if !inputs_changed && focused == self.focused {
            return RenderPass {
                generation: self.generation,
                requests: Vec::new(),
            };
        }

        if inputs_changed {
            self.generation = self.generation.next();
            self.surfaces.clear();
            self.source = source;
            self.result = result;

            let n = self.active_len().unwrap_or(0);
            self.slots = vec![SlotState::Pending; n];
            self.mounted = (0..n).collect();
            tracing::debug!(
                generation = self.generation.0,
                annotations = n,
                "new overlay generation"
            );
        }
        self.focused = focused;

        if self.active_len().is_none() {
            return RenderPass {
                generation: self.generation,
                requests: Vec::new(),
            };
        }

        let generation = self.generation;
        let requests = self
            .slots
            .iter_mut()
            .enumerate()
            .filter(|(_, state)| **state != SlotState::Rendered)
            .map(|(index, state)| {
                *state = SlotState::Pending;
                DecodeTicket { generation, index }
            })
            .collect();
        RenderPass {
            generation,
            requests,
        }
    }

    /// Change only the focused index.
    pub fn set_focus(&mut self, focused: usize) -> RenderPass {
        let source = self.source.clone();
        let result = self.result.clone();
        self.set_inputs(source, result, focused)
    }

    /// Drop image and result, returning to idle.
    pub fn clear(&mut self) -> RenderPass {
        self.set_inputs(None, None, 0)
    }

    /// Feed one decode completion.
    ///
    /// Completions may arrive in any order. Ones stamped with an older generation are discarded.
    /// Never fails: every failure degrades to an outcome and leaves the surface as it was.
    pub fn complete_decode(
        &mut self,
        ticket: DecodeTicket,
        decoded: AnnoviewResult<&DecodedImage>,
    ) -> DrawOutcome {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket_generation = ticket.generation.0,
                current_generation = self.generation.0,
                index = ticket.index,
                "discarding stale decode completion"
            );
            return DrawOutcome::Stale;
        }

        let Some(result) = self.result.as_ref() else {
            return DrawOutcome::Stale;
        };
        let (Some(annotation), Some(state)) = (
            result.markup.get(ticket.index),
            self.slots.get_mut(ticket.index),
        ) else {
            return DrawOutcome::UnknownIndex;
        };
        if *state == SlotState::Rendered {
            return DrawOutcome::AlreadyRendered;
        }

        let image = match decoded {
            Ok(image) => image,
            Err(e) => {
                tracing::warn!(index = ticket.index, error = %e, "source image failed to decode");
                *state = SlotState::DecodeFailed;
                return DrawOutcome::DecodeFailed;
            }
        };

        if !self.mounted.contains(&ticket.index) {
            tracing::debug!(index = ticket.index, "no mounted view; skipping draw");
            *state = SlotState::Detached;
            return DrawOutcome::SlotMissing;
        }

        let mut surface = match Surface::new(image.size) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(index = ticket.index, error = %e, "cannot allocate surface");
                *state = SlotState::DrawFailed;
                return DrawOutcome::DrawFailed;
            }
        };

        let title = self.opts.title_for(ticket.index);
        match self
            .compositor
            .draw_annotation(&mut surface, image, annotation, &title)
        {
            Ok(composited) => {
                tracing::debug!(
                    index = ticket.index,
                    shape = composited.shape.is_some(),
                    "annotation drawn"
                );
                self.surfaces.insert(ticket.index, surface);
                *state = SlotState::Rendered;
                DrawOutcome::Drawn
            }
            Err(e) => {
                tracing::warn!(index = ticket.index, error = %e, "annotation draw failed");
                *state = SlotState::DrawFailed;
                DrawOutcome::DrawFailed
            }
        }
    }

    /// Drive every ticket of `pass` synchronously, decoding the current source once.
    #[tracing::instrument(skip_all, fields(generation = pass.generation.0, requests = pass.requests.len()))]
    pub fn run_pass(
        &mut self,
        pass: &RenderPass,
        decoder: &mut dyn ImageDecoder,
    ) -> Vec<(usize, DrawOutcome)> {
        if pass.is_empty() {
            return Vec::new();
        }
        let decoded = match self.source.as_ref() {
            Some(source) if pass.generation == self.generation => decoder.decode(source),
            _ => {
                return pass
                    .requests
                    .iter()
                    .map(|t| (t.index, DrawOutcome::Stale))
                    .collect();
            }
        };

        pass.requests
            .iter()
            .map(|&ticket| {
                let outcome = match &decoded {
                    Ok(image) => self.complete_decode(ticket, Ok(image)),
                    Err(e) => self.complete_decode(
                        ticket,
                        Err(AnnoviewError::decode(e.to_string())),
                    ),
                };
                (ticket.index, outcome)
            })
            .collect()
    }

    /// Attach the view for `index`. Out-of-range indices are ignored.
    pub fn mount(&mut self, index: usize) {
        if index < self.slots.len() {
            self.mounted.insert(index);
        }
    }

    /// Detach the view for `index`, dropping its surface. The index is requested again by the
    /// next pass.
    pub fn unmount(&mut self, index: usize) {
        self.mounted.remove(&index);
        self.surfaces.remove(&index);
        if let Some(state) = self.slots.get_mut(index) {
            *state = SlotState::Detached;
        }
    }

    /// Current generation.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Focused annotation index.
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Current analysis result.
    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Current image source.
    pub fn source(&self) -> Option<&ImageSource> {
        self.source.as_ref()
    }

    /// Surface drawn for `index`, if any.
    pub fn surface(&self, index: usize) -> Option<&Surface> {
        self.surfaces.get(&index)
    }

    /// All drawn surfaces by index.
    pub fn surfaces(&self) -> impl Iterator<Item = (usize, &Surface)> {
        self.surfaces.iter().map(|(i, s)| (*i, s))
    }

    /// State of `index` in the current generation.
    pub fn state(&self, index: usize) -> Option<SlotState> {
        self.slots.get(index).copied()
    }

    /// Coarse phase of the controller.
    pub fn phase(&self) -> Phase {
        if self.active_len().is_none() {
            return Phase::Idle;
        }
        if self.slots.iter().all(|s| *s == SlotState::Rendered) {
            Phase::Rendered
        } else {
            Phase::Pending
        }
    }

    fn active_len(&self) -> Option<usize> {
        match (&self.source, &self.result) {
            (Some(_), Some(result)) => Some(result.markup.len()),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/controller.rs"]
mod tests;
