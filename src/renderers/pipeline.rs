//! Page render pipeline
//!
//! A [`PageRenderer`] owns one lazily-started library load. Each render opens
//! the document, then runs one chain per page concurrently:
//!
//! ```text
//! page(n) -> viewport(scale) -> create_canvas -> attach -> render
//! ```
//!
//! The render resolves once every chain has settled. Page failures are
//! collected into the [`RenderReport`]; load, worker and open failures fail
//! the whole render.

use std::future::{Future, IntoFuture};
use std::rc::Rc;

use futures::future::{self, join_all, AbortHandle, Abortable, LocalBoxFuture, Shared};
use futures::FutureExt;

use super::backend::{CanvasHost, CanvasOf, LibraryLoader, PdfDocument, PdfLibrary, PdfPage};
use crate::error::RenderError;
use crate::models::{DocumentSource, RenderReport, RendererConfig};

type LibraryFuture<L> = Shared<LocalBoxFuture<'static, Result<Rc<L>, RenderError>>>;

/// Renders documents page by page onto canvases.
///
/// Cloning is cheap and clones share the same library load.
pub struct PageRenderer<L: PdfLibrary> {
    config: Rc<RendererConfig>,
    library: LibraryFuture<L>,
}

impl<L: PdfLibrary> Clone for PageRenderer<L> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            library: self.library.clone(),
        }
    }
}

impl<L: PdfLibrary + 'static> PageRenderer<L> {
    /// Create a renderer. Nothing is loaded until the first render or
    /// [`PageRenderer::library`] call; the load then happens exactly once,
    /// including the worker configuration, and its outcome is kept for the
    /// lifetime of the renderer.
    pub fn new<D>(config: RendererConfig, loader: D) -> Result<Self, RenderError>
    where
        D: LibraryLoader<Library = L> + 'static,
    {
        config.validate()?;
        let location = config.library.clone();

        let library = async move {
            log::debug!("loading PDF library from {}", location.module_url);
            let library = loader.load(location.clone()).await?;
            library.configure_worker(&location.worker_src)?;
            log::info!("PDF library ready, worker {}", location.worker_src);
            Ok::<_, RenderError>(Rc::new(library))
        }
        .boxed_local()
        .shared();

        Ok(Self {
            config: Rc::new(config),
            library,
        })
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn scale(&self) -> f64 {
        self.config.scale
    }

    /// True once the library has loaded and its worker is configured
    pub fn is_library_loaded(&self) -> bool {
        matches!(self.library.peek(), Some(Ok(_)))
    }

    /// The loaded library, loading it on first use.
    pub async fn library(&self) -> Result<Rc<L>, RenderError> {
        self.library.clone().await
    }

    /// Render every page of `source` into `host`.
    pub async fn render<H>(
        &self,
        source: &DocumentSource,
        host: &H,
    ) -> Result<RenderReport, RenderError>
    where
        H: CanvasHost<CanvasOf<L>>,
    {
        source.validate()?;
        let library = self.library().await?;

        log::debug!("opening {}", source.describe());
        let document = library.open(source).await?;
        let page_count = document.page_count();
        log::info!("{} has {} pages", source.describe(), page_count);

        let scale = self.config.scale;
        let chains = (1..=page_count).map(|number| render_page(&document, host, number, scale));
        let outcomes = join_all(chains).await;

        let mut report = RenderReport::new(page_count);
        for (number, outcome) in (1..=page_count).zip(outcomes) {
            match outcome {
                Ok(()) => report.record_success(),
                Err(e) => {
                    log::warn!("page {} of {}: {}", number, source.describe(), e);
                    report.record_failure(number, &e);
                }
            }
        }
        Ok(report)
    }

    /// Start a render that owns its inputs and can be cancelled as a unit.
    pub fn start<H>(&self, source: DocumentSource, host: H) -> PendingRender
    where
        H: CanvasHost<CanvasOf<L>> + 'static,
    {
        self.start_with(future::ready(Ok(source)), host)
    }

    /// Like [`PageRenderer::start`], for a source that still has to be
    /// resolved (a `Blob` being read, say). Cancelling also stops that step.
    pub fn start_with<S, H>(&self, source: S, host: H) -> PendingRender
    where
        S: Future<Output = Result<DocumentSource, RenderError>> + 'static,
        H: CanvasHost<CanvasOf<L>> + 'static,
    {
        let renderer = self.clone();
        let (abort, registration) = AbortHandle::new_pair();
        let job = Abortable::new(
            async move {
                let source = source.await?;
                renderer.render(&source, &host).await
            },
            registration,
        );

        let future = async move {
            match job.await {
                Ok(result) => result,
                Err(_aborted) => {
                    log::info!("render cancelled");
                    Err(RenderError::Cancelled)
                }
            }
        }
        .boxed_local();

        PendingRender { future, abort }
    }
}

async fn render_page<D, H>(
    document: &D,
    host: &H,
    number: u32,
    scale: f64,
) -> Result<(), RenderError>
where
    D: PdfDocument,
    H: CanvasHost<<D::Page as PdfPage>::Canvas>,
{
    let page = document.page(number).await?;
    let viewport = page.viewport(scale);
    let size = viewport.canvas_size();
    log::debug!("page {} is {}x{} at scale {}", page.number(), size.width, size.height, scale);
    let canvas = host.create_canvas(number, size)?;
    host.attach(number, &canvas)?;
    page.render(&canvas, &viewport).await
}

/// A render in flight. Await it for the report, or cancel it.
///
/// Cancelling drops every unfinished page chain; canvases that were already
/// attached stay in the container.
pub struct PendingRender {
    future: LocalBoxFuture<'static, Result<RenderReport, RenderError>>,
    abort: AbortHandle,
}

impl PendingRender {
    pub fn cancel(&self) {
        self.abort.abort();
    }

    /// Handle that cancels this render from elsewhere
    pub fn abort_handle(&self) -> AbortHandle {
        self.abort.clone()
    }
}

impl IntoFuture for PendingRender {
    type Output = Result<RenderReport, RenderError>;
    type IntoFuture = LocalBoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        self.future
    }
}
