//! Preview classification: decides how a file descriptor should be rendered

use crate::descriptor::{FileDescriptor, IconKey};
use serde::Serialize;

/// Extensions treated as image files when no usable MIME type is present.
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "svg", "webp"];

/// The preview representation resolved for a descriptor.
///
/// `Image` means the display layer should render the bytes behind
/// `source_url`; the icon variants carry the lookup key for the external
/// icon table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PreviewDecision {
    Image,
    DocumentIcon(IconKey),
    GenericIcon(IconKey),
}

impl PreviewDecision {
    pub fn is_image(&self) -> bool {
        matches!(self, PreviewDecision::Image)
    }
}

/// Transient load state for one descriptor's preview lifetime.
///
/// `loading` is only meaningful while the decision is [`PreviewDecision::Image`];
/// `image_failed` is terminal for the descriptor it was recorded against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewState {
    pub image_failed: bool,
    pub loading: bool,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self {
            image_failed: false,
            loading: true,
        }
    }
}

fn is_image_candidate(descriptor: &FileDescriptor) -> bool {
    let mime_image = descriptor
        .mime_type
        .as_deref()
        .is_some_and(|m| m.starts_with("image/"));

    mime_image || IMAGE_EXTENSIONS.contains(&descriptor.extension().as_str())
}

fn is_pdf(descriptor: &FileDescriptor) -> bool {
    descriptor.mime_type.as_deref() == Some("application/pdf")
        || descriptor.extension() == "pdf"
}

/// Classifies a descriptor under the given load state.
///
/// Precedence is strict: `Image` > `DocumentIcon` > `GenericIcon`. An image
/// decision requires a source URL and no recorded load failure; the PDF check
/// runs only once the image branch has been ruled out.
pub fn classify(descriptor: &FileDescriptor, state: &PreviewState) -> PreviewDecision {
    if descriptor.source_url.is_some() {
        if is_image_candidate(descriptor) && !state.image_failed {
            return PreviewDecision::Image;
        }

        if is_pdf(descriptor) {
            return PreviewDecision::DocumentIcon(IconKey::for_descriptor(descriptor));
        }
    }

    PreviewDecision::GenericIcon(IconKey::for_descriptor(descriptor))
}

/// Owns one descriptor and its load state, and consumes the two signals the
/// image-rendering collaborator can emit.
///
/// The session never performs the image fetch itself; it only reacts to
/// `image_loaded` / `image_load_failed` and re-derives the decision on demand.
#[derive(Debug, Clone)]
pub struct PreviewSession {
    descriptor: FileDescriptor,
    state: PreviewState,
}

impl PreviewSession {
    pub fn new(descriptor: FileDescriptor) -> Self {
        Self {
            descriptor,
            state: PreviewState::default(),
        }
    }

    pub fn descriptor(&self) -> &FileDescriptor {
        &self.descriptor
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    /// Current decision for the owned descriptor.
    pub fn decision(&self) -> PreviewDecision {
        classify(&self.descriptor, &self.state)
    }

    /// Success signal from the display layer: the image finished loading.
    pub fn image_loaded(&mut self) {
        self.state.loading = false;
    }

    /// Failure signal from the display layer. Terminal: the decision for this
    /// descriptor can never return to `Image`, and no retry is attempted.
    pub fn image_load_failed(&mut self) {
        self.state.image_failed = true;
        self.state.loading = false;
    }

    /// True while an image decision is pending its load signal. Icon decisions
    /// have nothing to load, so this reports false for them regardless of the
    /// raw `loading` flag.
    pub fn is_loading(&self) -> bool {
        self.state.loading && self.decision().is_image()
    }

    /// Swaps in a new descriptor. State resets to the initial value whenever
    /// the identity (name + source URL) changes; a same-identity swap keeps
    /// the accumulated state so a known-bad URL stays demoted.
    pub fn replace(&mut self, descriptor: FileDescriptor) {
        if !self.descriptor.same_identity(&descriptor) {
            self.state = PreviewState::default();
        }
        self.descriptor = descriptor;
    }
}
