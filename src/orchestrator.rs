//! Runs one print job end to end: measure, size the roll, draw, tear down.

use crate::config::PrinterProfile;
use crate::error::PrintError;
use crate::scope::SurfaceScope;
use rollprint_device::{PageSizer, PrinterDriver};
use rollprint_layout::{LayoutCalculator, Template};
use rollprint_render_core::DocumentRenderer;
use rollprint_types::Document;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// One mutex per device name, shared by every orchestrator that may address
/// the same physical printer.
#[derive(Debug, Default)]
pub struct DeviceLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl DeviceLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock_for(&self, device: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        locks.entry(device.to_string()).or_default().clone()
    }
}

/// Outcome of the dry-run pass alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Measurement {
    pub content_height: u32,
    pub paper_length_mm10: u32,
}

/// Outcome of a completed print job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintReport {
    pub document_type: &'static str,
    pub device: String,
    pub content_height: u32,
    pub paper_length_mm10: u32,
    pub final_cursor: u32,
}

pub struct PrintOrchestrator {
    profile: PrinterProfile,
    sizer: PageSizer,
    driver: Arc<dyn PrinterDriver>,
    locks: Arc<DeviceLocks>,
}

impl PrintOrchestrator {
    /// Fails when the profile's layout cannot be drawn or its resolution is
    /// zero, so no job ever starts with geometry that would not fit.
    pub fn new(
        profile: PrinterProfile,
        driver: Arc<dyn PrinterDriver>,
    ) -> Result<Self, PrintError> {
        profile.layout.validate()?;
        let sizer = PageSizer::new(profile.dpi)?;
        Ok(Self {
            profile,
            sizer,
            driver,
            locks: Arc::new(DeviceLocks::new()),
        })
    }

    /// Shares `locks` with other orchestrators.
    pub fn with_locks(mut self, locks: Arc<DeviceLocks>) -> Self {
        self.locks = locks;
        self
    }

    pub fn profile(&self) -> &PrinterProfile {
        &self.profile
    }

    pub fn device(&self) -> &str {
        &self.profile.device_name
    }

    /// Runs the dry-run pass only; no device is touched.
    pub fn measure(&self, document: &Document) -> Measurement {
        let content_height = LayoutCalculator::new(&self.profile.layout).compute_height(document);
        Measurement {
            content_height,
            paper_length_mm10: self.sizer.paper_length_mm10(content_height),
        }
    }

    /// Decodes a raw print record and prints it.
    pub fn print_value(&self, value: &Value) -> Result<PrintReport, PrintError> {
        log::debug!("Incoming print record: {}", value);
        let document = Document::from_value(value).inspect_err(|e| {
            log::warn!("Rejected print record: {}", e);
        })?;
        self.print_document(&document)
    }

    pub fn print_document(&self, document: &Document) -> Result<PrintReport, PrintError> {
        let kind = document.kind();
        log::info!("Accepted {} job for '{}'.", kind, self.device());
        let result = self.run(document);
        match &result {
            Ok(report) => log::info!(
                "Finished {} job on '{}': {} px, {} (0.1 mm).",
                kind,
                report.device,
                report.content_height,
                report.paper_length_mm10
            ),
            Err(e) => log::error!(
                "{} job on '{}' failed [{}]: {}",
                kind,
                self.device(),
                e.kind(),
                e
            ),
        }
        result
    }

    fn run(&self, document: &Document) -> Result<PrintReport, PrintError> {
        let layout = &self.profile.layout;
        let device = self.device();
        let template = Template::for_document(document, layout);
        let content_height = LayoutCalculator::new(layout).measure(&template);

        let lock = self.locks.lock_for(device);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let config = self
            .sizer
            .configure(self.driver.as_ref(), device, content_height)?;
        if let Some(reported) = config.printable_width_px {
            if reported < layout.page_width {
                log::warn!(
                    "'{}' reports {} px printable but the layout is {} px wide.",
                    device,
                    reported,
                    layout.page_width
                );
            }
        }
        let config = config.with_printable_width(layout.page_width);
        let surface = self.driver.open_surface(device, &config)?;
        let job_name = format!("rollprint {}", document.kind());
        let mut scope = SurfaceScope::open(surface, &job_name)?;

        let drawn = DocumentRenderer::new(layout).render(&template, scope.surface()?);
        let final_cursor = match drawn {
            Ok(cursor) => cursor,
            Err(e) => {
                if let Err(teardown) = scope.close() {
                    log::warn!("Teardown after failed draw also failed: {}", teardown);
                }
                return Err(e.into());
            }
        };
        scope.close()?;

        if final_cursor.saturating_add(layout.margin) != content_height {
            log::error!(
                "Draw pass ended at {} but {} px were measured.",
                final_cursor,
                content_height
            );
        }

        Ok(PrintReport {
            document_type: document.kind().as_str(),
            device: device.to_string(),
            content_height,
            paper_length_mm10: config.paper_length_mm10.unwrap_or_default(),
            final_cursor,
        })
    }
}
