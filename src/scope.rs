//! Lifetime of one drawing surface for one print job.

use rollprint_render_core::{DrawingSurface, RenderError};

/// A drawing surface with a document and page open on it.
///
/// The scope ends page, document and releases the surface exactly once,
/// either through [`SurfaceScope::close`] or, if the job bails out early,
/// when the scope is dropped.
pub struct SurfaceScope<S: DrawingSurface> {
    surface: Option<S>,
}

impl<S: DrawingSurface> SurfaceScope<S> {
    /// Starts a document named `job_name` and its single page.
    ///
    /// If either step fails the surface is released before returning.
    pub fn open(mut surface: S, job_name: &str) -> Result<Self, RenderError> {
        let started = surface
            .start_doc(job_name)
            .and_then(|()| surface.start_page());
        if let Err(e) = started {
            if let Err(release) = surface.release() {
                log::warn!("Releasing surface after failed start: {}", release);
            }
            return Err(e);
        }
        Ok(Self {
            surface: Some(surface),
        })
    }

    pub fn surface(&mut self) -> Result<&mut S, RenderError> {
        self.surface.as_mut().ok_or(RenderError::Released)
    }

    /// Ends page and document, then releases the surface.
    ///
    /// Every step is attempted even when an earlier one failed; the first
    /// failure is returned.
    pub fn close(mut self) -> Result<(), RenderError> {
        match self.surface.take() {
            Some(surface) => finish(surface),
            None => Ok(()),
        }
    }
}

impl<S: DrawingSurface> Drop for SurfaceScope<S> {
    fn drop(&mut self) {
        if let Some(surface) = self.surface.take() {
            if let Err(e) = finish(surface) {
                log::warn!("Surface teardown failed: {}", e);
            }
        }
    }
}

fn finish<S: DrawingSurface>(mut surface: S) -> Result<(), RenderError> {
    let steps = [surface.end_page(), surface.end_doc(), surface.release()];
    steps.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}
