//! Shared test fixtures: an in-memory rendering library and canvas host.
//!
//! Every library call is appended to an event log so tests can assert on
//! ordering and on how often the library was loaded.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use pdf_canvas_wasm::models::{CanvasSize, DocumentSource, LibraryLocation, Viewport};
use pdf_canvas_wasm::{CanvasHost, LibraryLoader, PdfDocument, PdfLibrary, PdfPage, RenderError};

pub type EventLog = Rc<RefCell<Vec<String>>>;

pub const MODULE_URL: &str = "/pdfjs/pdf.mjs";
pub const WORKER_SRC: &str = "/pdfjs/pdf.worker.mjs";

/// Stays pending for `remaining` polls, waking itself each time.
pub struct YieldPolls {
    remaining: u32,
}

impl Future for YieldPolls {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.remaining == 0 {
            Poll::Ready(())
        } else {
            self.remaining -= 1;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

pub fn yield_polls(remaining: u32) -> YieldPolls {
    YieldPolls { remaining }
}

#[derive(Debug, Clone)]
pub struct PageSpec {
    pub width: f64,
    pub height: f64,
    /// Polls `page(n)` stays pending for
    pub delay: u32,
    pub fail_fetch: bool,
    pub fail_render: bool,
}

impl PageSpec {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            delay: 0,
            fail_fetch: false,
            fail_render: false,
        }
    }

    /// US Letter, in points
    pub fn letter() -> Self {
        Self::new(612.0, 792.0)
    }

    pub fn delayed(mut self, polls: u32) -> Self {
        self.delay = polls;
        self
    }

    pub fn failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    pub fn failing_render(mut self) -> Self {
        self.fail_render = true;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockLoader {
    pub log: EventLog,
    pub pages: Vec<PageSpec>,
    pub load_delay: u32,
    pub fail_load: bool,
    pub fail_open: bool,
    pub documents_dropped: Rc<Cell<u32>>,
}

impl MockLoader {
    pub fn with_pages(pages: Vec<PageSpec>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|event| event.starts_with(prefix))
            .count()
    }

    pub fn position(&self, event: &str) -> Option<usize> {
        self.log.borrow().iter().position(|e| e == event)
    }
}

impl LibraryLoader for MockLoader {
    type Library = MockLibrary;

    async fn load(self, location: LibraryLocation) -> Result<MockLibrary, RenderError> {
        self.log.borrow_mut().push(format!("load:{}", location.module_url));
        yield_polls(self.load_delay).await;
        if self.fail_load {
            return Err(RenderError::LibraryLoad {
                url: location.module_url,
                message: "404 Not Found".to_string(),
            });
        }
        Ok(MockLibrary {
            log: self.log,
            pages: Rc::new(self.pages),
            fail_open: self.fail_open,
            documents_dropped: self.documents_dropped,
        })
    }
}

pub struct MockLibrary {
    log: EventLog,
    pages: Rc<Vec<PageSpec>>,
    fail_open: bool,
    documents_dropped: Rc<Cell<u32>>,
}

impl PdfLibrary for MockLibrary {
    type Document = MockDocument;

    fn configure_worker(&self, worker_src: &str) -> Result<(), RenderError> {
        self.log.borrow_mut().push(format!("worker:{}", worker_src));
        Ok(())
    }

    async fn open(&self, source: &DocumentSource) -> Result<MockDocument, RenderError> {
        self.log.borrow_mut().push(format!("open:{}", source.describe()));
        if self.fail_open {
            return Err(RenderError::Open("Invalid PDF structure".to_string()));
        }
        Ok(MockDocument {
            log: self.log.clone(),
            pages: self.pages.clone(),
            dropped: self.documents_dropped.clone(),
        })
    }
}

pub struct MockDocument {
    log: EventLog,
    pages: Rc<Vec<PageSpec>>,
    dropped: Rc<Cell<u32>>,
}

impl PdfDocument for MockDocument {
    type Page = MockPage;

    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    async fn page(&self, number: u32) -> Result<MockPage, RenderError> {
        let spec = self.pages[(number - 1) as usize].clone();
        yield_polls(spec.delay).await;
        self.log.borrow_mut().push(format!("page:{}", number));
        if spec.fail_fetch {
            return Err(RenderError::Page {
                page: number,
                message: "missing page object".to_string(),
            });
        }
        Ok(MockPage {
            number,
            spec,
            log: self.log.clone(),
        })
    }
}

impl Drop for MockDocument {
    fn drop(&mut self) {
        self.dropped.set(self.dropped.get() + 1);
    }
}

pub struct MockPage {
    number: u32,
    spec: PageSpec,
    log: EventLog,
}

impl PdfPage for MockPage {
    type Canvas = MockCanvas;

    fn number(&self) -> u32 {
        self.number
    }

    fn viewport(&self, scale: f64) -> Viewport {
        Viewport::new(scale, self.spec.width * scale, self.spec.height * scale)
    }

    async fn render(&self, canvas: &MockCanvas, viewport: &Viewport) -> Result<(), RenderError> {
        if self.spec.fail_render {
            return Err(RenderError::Render {
                page: self.number,
                message: "bad content stream".to_string(),
            });
        }
        canvas.drawn_at.set(Some(viewport.scale));
        self.log.borrow_mut().push(format!("render:{}", self.number));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct MockCanvas {
    pub page: u32,
    pub size: CanvasSize,
    /// Scale the page was drawn at, once drawn
    pub drawn_at: Rc<Cell<Option<f64>>>,
}

/// Container keeping canvases in page order, like the DOM host
#[derive(Debug, Clone, Default)]
pub struct MockHost {
    pub canvases: Rc<RefCell<Vec<MockCanvas>>>,
    pub attach_order: Rc<RefCell<Vec<u32>>>,
}

impl MockHost {
    pub fn pages(&self) -> Vec<u32> {
        self.canvases.borrow().iter().map(|canvas| canvas.page).collect()
    }

    pub fn sizes(&self) -> Vec<(u32, u32)> {
        self.canvases
            .borrow()
            .iter()
            .map(|canvas| (canvas.size.width, canvas.size.height))
            .collect()
    }

    pub fn canvas(&self, page: u32) -> Option<MockCanvas> {
        self.canvases
            .borrow()
            .iter()
            .find(|canvas| canvas.page == page)
            .cloned()
    }
}

impl CanvasHost<MockCanvas> for MockHost {
    fn create_canvas(&self, page: u32, size: CanvasSize) -> Result<MockCanvas, RenderError> {
        Ok(MockCanvas {
            page,
            size,
            drawn_at: Rc::new(Cell::new(None)),
        })
    }

    fn attach(&self, page: u32, canvas: &MockCanvas) -> Result<(), RenderError> {
        let mut canvases = self.canvases.borrow_mut();
        let index = canvases
            .iter()
            .position(|other| other.page > page)
            .unwrap_or(canvases.len());
        canvases.insert(index, canvas.clone());
        self.attach_order.borrow_mut().push(page);
        Ok(())
    }
}
