pub mod fixtures;
pub mod pdf_assertions;

use rollprint::{
    DeviceConfig, DeviceError, PrintError, PrintOrchestrator, PrinterDriver, PrinterProfile,
};
use rollprint_device::{BoxedSurface, PaperSize};
use rollprint_layout::FontSpec;
use rollprint_render_core::{
    DrawOp, DrawingSurface, Primitive, RecordingSurface, RenderError, TextAlign,
};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// What the mock driver has seen so far.
#[derive(Debug, Default)]
pub struct DriverLog {
    pub queries: usize,
    pub opens: usize,
    pub releases: usize,
    pub configs: Vec<DeviceConfig>,
    /// Primitive stream of every released job, in release order.
    pub jobs: Vec<Vec<DrawOp>>,
    pub active: usize,
    pub max_active: usize,
}

#[derive(Debug, Default)]
struct Behaviour {
    unavailable: bool,
    fail_on: Option<Primitive>,
    slow: bool,
}

/// An in-memory printer driver with counters and failure injection.
#[derive(Clone, Default)]
pub struct MockDriver {
    log: Arc<Mutex<DriverLog>>,
    behaviour: Arc<Mutex<Behaviour>>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every query fails as if the device were unplugged.
    pub fn unavailable(self) -> Self {
        lock(&self.behaviour).unavailable = true;
        self
    }

    /// Surfaces fail the first call of `primitive`.
    pub fn failing_on(self, primitive: Primitive) -> Self {
        lock(&self.behaviour).fail_on = Some(primitive);
        self
    }

    /// Each job holds its surface a little longer, to expose overlap.
    pub fn slow(self) -> Self {
        lock(&self.behaviour).slow = true;
        self
    }

    pub fn log(&self) -> MutexGuard<'_, DriverLog> {
        lock(&self.log)
    }

    pub fn orchestrator(&self) -> PrintOrchestrator {
        self.orchestrator_for(PrinterProfile::default())
    }

    pub fn orchestrator_for(&self, profile: PrinterProfile) -> PrintOrchestrator {
        self.try_orchestrator_for(profile).expect("valid profile")
    }

    pub fn try_orchestrator_for(
        &self,
        profile: PrinterProfile,
    ) -> Result<PrintOrchestrator, PrintError> {
        PrintOrchestrator::new(profile, Arc::new(self.clone()))
    }
}

impl PrinterDriver for MockDriver {
    fn name(&self) -> &str {
        "mock"
    }

    fn query(&self, device: &str) -> Result<DeviceConfig, DeviceError> {
        self.log().queries += 1;
        if lock(&self.behaviour).unavailable {
            return Err(DeviceError::unavailable(device, "mock device is offline"));
        }
        Ok(DeviceConfig {
            paper_size: PaperSize::Standard(1),
            paper_length_mm10: Some(2970),
            paper_width_mm10: Some(800),
            printable_width_px: None,
        })
    }

    fn open_surface(
        &self,
        _device: &str,
        config: &DeviceConfig,
    ) -> Result<BoxedSurface, DeviceError> {
        let mut log = self.log();
        log.opens += 1;
        log.configs.push(config.clone());
        let behaviour = lock(&self.behaviour);
        let mut inner = RecordingSurface::new();
        if let Some(primitive) = behaviour.fail_on {
            inner = inner.fail_on(primitive);
        }
        Ok(Box::new(MockSurface {
            inner,
            log: self.log.clone(),
            slow: behaviour.slow,
        }))
    }
}

struct MockSurface {
    inner: RecordingSurface,
    log: Arc<Mutex<DriverLog>>,
    slow: bool,
}

impl DrawingSurface for MockSurface {
    fn start_doc(&mut self, name: &str) -> Result<(), RenderError> {
        {
            let mut log = lock(&self.log);
            log.active += 1;
            log.max_active = log.max_active.max(log.active);
        }
        if self.slow {
            std::thread::sleep(Duration::from_millis(20));
        }
        self.inner.start_doc(name)
    }

    fn start_page(&mut self) -> Result<(), RenderError> {
        self.inner.start_page()
    }

    fn select_font(&mut self, font: &FontSpec) -> Result<(), RenderError> {
        self.inner.select_font(font)
    }

    fn set_text_align(&mut self, align: TextAlign) -> Result<(), RenderError> {
        self.inner.set_text_align(align)
    }

    fn text_out(&mut self, x: u32, y: u32, text: &str) -> Result<(), RenderError> {
        self.inner.text_out(x, y, text)
    }

    fn move_to(&mut self, x: u32, y: u32) -> Result<(), RenderError> {
        self.inner.move_to(x, y)
    }

    fn line_to(&mut self, x: u32, y: u32) -> Result<(), RenderError> {
        self.inner.line_to(x, y)
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        self.inner.end_page()
    }

    fn end_doc(&mut self) -> Result<(), RenderError> {
        self.inner.end_doc()
    }

    fn release(&mut self) -> Result<(), RenderError> {
        let result = self.inner.release();
        let mut log = lock(&self.log);
        log.releases += 1;
        log.active = log.active.saturating_sub(1);
        log.jobs.push(self.inner.ops().to_vec());
        result
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

/// Every text drawn in a job.
pub fn texts(ops: &[DrawOp]) -> Vec<&str> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}
